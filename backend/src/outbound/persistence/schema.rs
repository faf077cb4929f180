//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/sql/users.sql`. The schema is applied out of band;
//! this crate never migrates it.

diesel::table! {
    /// User records.
    ///
    /// `id` is a `BIGSERIAL` primary key assigned on insert.
    users (id) {
        /// Primary key.
        id -> Int8,
        /// Display name; non-empty by check constraint.
        name -> Text,
        /// Contact email; unique and format-checked by the store.
        email -> Text,
        /// Optional avatar URL.
        img_url -> Nullable<Text>,
    }
}
