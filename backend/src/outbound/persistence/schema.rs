//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. When a migration
//! changes a table, regenerate them with `diesel print-schema` or edit them by
//! hand.

diesel::table! {
    /// Registered users. Deactivated users stay in the table.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        first_name -> Varchar,
        last_name -> Varchar,
        /// Lowercased address; unique.
        email -> Varchar,
        age -> Int4,
        active -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Subject areas that content items point at.
    categories (id) {
        id -> Uuid,
        name -> Varchar,
        description -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Learning material. `lower(title)` carries a unique index.
    contents (id) {
        id -> Uuid,
        title -> Varchar,
        description -> Nullable<Text>,
        content_type -> Varchar,
        /// Category identifier. Not a foreign key.
        topic -> Uuid,
        /// User identifier. Not a foreign key.
        created_by -> Uuid,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, categories, contents);
