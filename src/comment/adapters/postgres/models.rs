//! Diesel row models for comment persistence.

use super::schema::comments;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for comment records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommentRow {
    /// Comment identifier.
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub id: uuid::Uuid,
    /// Unique commenter email address.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub email: String,
    /// Commenter display name.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub name: String,
    /// Comment text.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub comment: String,
    /// Creation timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub updated_at: DateTime<Utc>,
}

/// Insert model for comment records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub struct NewCommentRow {
    /// Comment identifier.
    pub id: uuid::Uuid,
    /// Unique commenter email address.
    pub email: String,
    /// Commenter display name.
    pub name: String,
    /// Comment text.
    pub comment: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
