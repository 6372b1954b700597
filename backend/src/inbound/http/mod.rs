//! HTTP inbound adapter exposing REST endpoints.

pub mod categories;
pub mod contents;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, web};

pub use error::ApiResult;

use crate::domain::Error;

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    validation::malformed_body_error(&err.to_string()).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid query string: {err}")).into()
}

/// Register every `/api/v1` route plus the JSON and query extractor
/// configuration that reports decode failures in the domain error shape.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api/v1")
                .service(users::create_user)
                .service(users::list_users)
                .service(users::get_user)
                .service(users::update_user)
                .service(users::deactivate_user)
                .service(users::activate_user)
                .service(users::delete_user_permanently)
                .service(categories::create_category)
                .service(categories::list_categories)
                .service(categories::get_category)
                .service(categories::update_category)
                .service(categories::delete_category)
                .service(contents::create_content)
                .service(contents::list_content)
                .service(contents::search_content)
                .service(contents::get_content)
                .service(contents::update_content)
                .service(contents::delete_content),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::MockPorts;
    use actix_web::http::StatusCode;
    use actix_web::http::header::ContentType;
    use actix_web::{App, test as actix_test};
    use serde_json::Value;

    #[actix_web::test]
    async fn malformed_json_uses_error_payload() {
        let app = actix_test::init_service(
            App::new()
                .app_data(MockPorts::default().into_state())
                .configure(configure_api),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/users")
                .insert_header(ContentType::json())
                .set_payload(r#"{"firstName": "Ann", "age": "thirty"}"#)
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["code"], "malformed_body");
    }

    #[actix_web::test]
    async fn malformed_query_is_invalid_request() {
        let app = actix_test::init_service(
            App::new()
                .app_data(MockPorts::default().into_state())
                .configure(configure_api),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users?active=maybe")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
