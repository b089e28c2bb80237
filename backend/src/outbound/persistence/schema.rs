//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation; regenerate or update them when migrations change.

diesel::table! {
    /// Registered users owning documents and at most one profile.
    users (id) {
        id -> Uuid,
        name -> Varchar,
        email -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Per-user avatar records.
    profiles (id) {
        id -> Uuid,
        user_id -> Uuid,
        image_url -> Varchar,
    }
}

diesel::table! {
    /// Organisational units documents are filed under.
    departments (id) {
        id -> Uuid,
        name -> Varchar,
        description -> Text,
    }
}

diesel::table! {
    /// Titled, categorised, status-tracked records.
    ///
    /// `status` holds one of exactly three literals, enforced by a CHECK
    /// constraint; `category` is free text chosen from a client-side list.
    documents (id) {
        id -> Uuid,
        title -> Varchar,
        category -> Varchar,
        status -> Varchar,
        content_ref -> Varchar,
        user_id -> Uuid,
        department_id -> Uuid,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Opaque logged events, enumerated but never inspected structurally.
    audit_records (id) {
        id -> Uuid,
        recorded_at -> Timestamptz,
        entry -> Jsonb,
    }
}

diesel::joinable!(documents -> users (user_id));
diesel::joinable!(documents -> departments (department_id));
diesel::joinable!(profiles -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(
    audit_records,
    departments,
    documents,
    profiles,
    users,
);
