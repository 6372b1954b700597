//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServiceSettings;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;
use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use courseware::Trace;
#[cfg(debug_assertions)]
use courseware::doc::ApiDoc;
use courseware::inbound::http::configure_api;
use courseware::inbound::http::health::{HealthState, live, ready};
use courseware::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] containing the bind address, the
///   optional database pool and optional metrics settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        bind_addr,
        db_pool: _,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use courseware::domain::TRACE_ID_HEADER;
    use rstest::rstest;

    fn in_memory_state() -> web::Data<HttpState> {
        build_http_state(&ServerConfig::new(
            "127.0.0.1:0".parse().expect("literal address"),
        ))
    }

    #[rstest]
    #[actix_rt::test]
    async fn app_serves_api_and_probes_with_trace_header() {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let app = actix_test::init_service(build_app(health, in_memory_state())).await;

        let api = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/categories")
                .to_request(),
        )
        .await;
        let probe = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;

        assert_eq!(api.status(), StatusCode::OK);
        assert!(api.headers().contains_key(TRACE_ID_HEADER));
        assert_eq!(probe.status(), StatusCode::OK);
    }

    #[cfg(debug_assertions)]
    #[rstest]
    #[actix_rt::test]
    async fn debug_builds_serve_openapi_document() {
        let app = actix_test::init_service(build_app(
            web::Data::new(HealthState::new()),
            in_memory_state(),
        ))
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api-docs/openapi.json")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[rstest]
    #[actix_rt::test]
    async fn create_server_marks_ready() {
        let health_state = web::Data::new(HealthState::new());
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("literal address"));
        assert_eq!(config.bind_addr().port(), 0);
        assert!(!health_state.is_ready(), "state should start unready");

        let _server =
            create_server(health_state.clone(), config).expect("server should build in memory");

        assert!(
            health_state.is_ready(),
            "server creation should mark readiness"
        );
    }
}
