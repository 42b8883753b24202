//! `PostgreSQL` repository implementation for comment persistence.

use super::{
    models::{CommentRow, NewCommentRow},
    schema::comments,
};
use crate::comment::{
    domain::{Comment, CommentBody, CommentId, CommenterName, EmailAddress, PersistedCommentData},
    ports::{CommentRepository, CommentRepositoryError, CommentRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by the comment store.
pub type CommentPgPool = Pool<ConnectionManager<PgConnection>>;

/// DDL executed by [`CommentRepository::initialize`].
///
/// The email uniqueness lives here as a storage-level constraint so a race
/// between two concurrent creates with the same email cannot produce two
/// rows; the service-level pre-check only exists for friendlier errors.
const CREATE_COMMENTS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS comments (
    id UUID PRIMARY KEY,
    email VARCHAR(254) NOT NULL,
    name VARCHAR(50) NOT NULL,
    comment VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL,
    CONSTRAINT comments_email_key UNIQUE (email)
)";

/// `PostgreSQL`-backed comment repository.
#[derive(Debug, Clone)]
pub struct PostgresCommentStore {
    pool: CommentPgPool,
}

impl PostgresCommentStore {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CommentPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> CommentRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> CommentRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(CommentRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(CommentRepositoryError::persistence)?
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentStore {
    async fn initialize(&self) -> CommentRepositoryResult<()> {
        self.run_blocking(move |connection| {
            diesel::sql_query(CREATE_COMMENTS_TABLE)
                .execute(connection)
                .map_err(CommentRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn insert(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let email = comment.email().clone();
        let new_row = row_from_comment(comment);

        self.run_blocking(move |connection| {
            diesel::insert_into(comments::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| map_unique_violation(err, &email))?;
            Ok(())
        })
        .await
    }

    async fn update(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let comment_id = comment.id().into_inner();
        let email = comment.email().clone();
        let email_val = comment.email().as_str().to_owned();
        let name_val = comment.name().as_str().to_owned();
        let comment_val = comment.body().as_str().to_owned();
        let updated_val = comment.updated_at();

        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(comments::table.filter(comments::id.eq(comment_id)))
                    .set((
                        comments::email.eq(&email_val),
                        comments::name.eq(&name_val),
                        comments::comment.eq(&comment_val),
                        comments::updated_at.eq(updated_val),
                    ))
                    .execute(connection)
                    .map_err(|err| map_unique_violation(err, &email))?;

            if updated_count == 0 {
                return Err(CommentRepositoryError::NotFound(CommentId::from_uuid(
                    comment_id,
                )));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: CommentId) -> CommentRepositoryResult<Option<Comment>> {
        self.run_blocking(move |connection| {
            let row = comments::table
                .filter(comments::id.eq(id.into_inner()))
                .select(CommentRow::as_select())
                .first::<CommentRow>(connection)
                .optional()
                .map_err(CommentRepositoryError::persistence)?;
            row.map(comment_from_row).transpose()
        })
        .await
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> CommentRepositoryResult<Option<Comment>> {
        let email_str = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = comments::table
                .filter(comments::email.eq(&email_str))
                .select(CommentRow::as_select())
                .first::<CommentRow>(connection)
                .optional()
                .map_err(CommentRepositoryError::persistence)?;
            row.map(comment_from_row).transpose()
        })
        .await
    }

    async fn list_all(&self) -> CommentRepositoryResult<Vec<Comment>> {
        self.run_blocking(move |connection| {
            let rows = comments::table
                .order(comments::created_at.asc())
                .select(CommentRow::as_select())
                .load::<CommentRow>(connection)
                .map_err(CommentRepositoryError::persistence)?;
            rows.into_iter().map(comment_from_row).collect()
        })
        .await
    }

    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(comments::table.filter(comments::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(CommentRepositoryError::persistence)?;

            if deleted_count == 0 {
                return Err(CommentRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_from_comment(comment: &Comment) -> NewCommentRow {
    NewCommentRow {
        id: comment.id().into_inner(),
        email: comment.email().as_str().to_owned(),
        name: comment.name().as_str().to_owned(),
        comment: comment.body().as_str().to_owned(),
        created_at: comment.created_at(),
        updated_at: comment.updated_at(),
    }
}

fn comment_from_row(row: CommentRow) -> CommentRepositoryResult<Comment> {
    let CommentRow {
        id,
        email,
        name,
        comment,
        created_at,
        updated_at,
    } = row;

    let parsed_name =
        CommenterName::new(name).map_err(CommentRepositoryError::invalid_persisted_data)?;
    let parsed_email =
        EmailAddress::new(email).map_err(CommentRepositoryError::invalid_persisted_data)?;
    let parsed_body =
        CommentBody::new(comment).map_err(CommentRepositoryError::invalid_persisted_data)?;

    let data = PersistedCommentData {
        id: CommentId::from_uuid(id),
        name: parsed_name,
        email: parsed_email,
        body: parsed_body,
        created_at,
        updated_at,
    };
    Ok(Comment::from_persisted(data))
}

fn map_unique_violation(err: DieselError, email: &EmailAddress) -> CommentRepositoryError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if is_email_unique_violation(info.as_ref()) =>
        {
            CommentRepositoryError::DuplicateEmail(email.clone())
        }
        _ => CommentRepositoryError::persistence(err),
    }
}

fn is_email_unique_violation(info: &dyn diesel::result::DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "comments_email_key")
}
