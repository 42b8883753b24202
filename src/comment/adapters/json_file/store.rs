//! Flat-file JSON repository for comment persistence.

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use uuid::Uuid;

use crate::comment::{
    domain::{Comment, CommentBody, CommentId, CommenterName, EmailAddress, PersistedCommentData},
    ports::{CommentRepository, CommentRepositoryError, CommentRepositoryResult},
};

/// JSON-file-backed comment repository.
///
/// The whole collection lives in one JSON document holding an array of
/// comment records, rewritten wholesale on every mutation and
/// pretty-printed with 4-space indentation. An in-process mutex serializes
/// access, so writers within one process cannot interleave; concurrent
/// writers in *other* processes are not protected against. Deployments that
/// need that guarantee should use the `PostgreSQL` backend.
#[derive(Debug)]
pub struct JsonFileCommentStore {
    state: Mutex<StoreState>,
}

#[derive(Debug)]
struct StoreState {
    dir: Dir,
    file_name: String,
}

/// Persisted representation of one comment in the JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CommentRecord {
    id: Uuid,
    name: String,
    email: String,
    comment: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl JsonFileCommentStore {
    /// Opens a store rooted at the given file path.
    ///
    /// Missing parent directories are created; the file itself is created by
    /// [`CommentRepository::initialize`].
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::Persistence`] when the parent
    /// directory cannot be created or opened, or when the path has no file
    /// name component.
    pub fn open(path: &Path) -> CommentRepositoryResult<Self> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(ToOwned::to_owned)
            .ok_or_else(|| {
                CommentRepositoryError::persistence(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("store path has no file name: {}", path.display()),
                ))
            })?;

        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(CommentRepositoryError::persistence)?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(CommentRepositoryError::persistence)?;

        Ok(Self {
            state: Mutex::new(StoreState { dir, file_name }),
        })
    }

    fn with_state<T>(
        &self,
        f: impl FnOnce(&StoreState) -> CommentRepositoryResult<T>,
    ) -> CommentRepositoryResult<T> {
        let state = self.state.lock().map_err(|err| {
            CommentRepositoryError::persistence(io::Error::other(err.to_string()))
        })?;
        f(&state)
    }
}

impl StoreState {
    fn load(&self) -> CommentRepositoryResult<Vec<CommentRecord>> {
        let content = self
            .dir
            .read_to_string(&self.file_name)
            .map_err(CommentRepositoryError::persistence)?;
        serde_json::from_str(&content).map_err(CommentRepositoryError::invalid_persisted_data)
    }

    fn persist(&self, records: &[CommentRecord]) -> CommentRepositoryResult<()> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        records
            .serialize(&mut serializer)
            .map_err(CommentRepositoryError::persistence)?;
        self.dir
            .write(&self.file_name, &buffer)
            .map_err(CommentRepositoryError::persistence)
    }

    fn file_exists(&self) -> bool {
        self.dir.metadata(&self.file_name).is_ok()
    }
}

#[async_trait]
impl CommentRepository for JsonFileCommentStore {
    async fn initialize(&self) -> CommentRepositoryResult<()> {
        self.with_state(|state| {
            if state.file_exists() {
                // Surface corruption at startup rather than on first request.
                state.load().map(|_| ())
            } else {
                state.persist(&[])
            }
        })
    }

    async fn insert(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        self.with_state(|state| {
            let mut records = state.load()?;
            if records.iter().any(|r| r.email == comment.email().as_str()) {
                return Err(CommentRepositoryError::DuplicateEmail(
                    comment.email().clone(),
                ));
            }
            records.push(record_from_comment(comment));
            state.persist(&records)
        })
    }

    async fn update(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        self.with_state(|state| {
            let mut records = state.load()?;

            let taken_by_other = records
                .iter()
                .any(|r| r.email == comment.email().as_str() && r.id != comment.id().into_inner());
            if taken_by_other {
                return Err(CommentRepositoryError::DuplicateEmail(
                    comment.email().clone(),
                ));
            }

            let record = records
                .iter_mut()
                .find(|r| r.id == comment.id().into_inner())
                .ok_or(CommentRepositoryError::NotFound(comment.id()))?;
            *record = record_from_comment(comment);
            state.persist(&records)
        })
    }

    async fn find_by_id(&self, id: CommentId) -> CommentRepositoryResult<Option<Comment>> {
        self.with_state(|state| {
            let records = state.load()?;
            records
                .into_iter()
                .find(|r| r.id == id.into_inner())
                .map(comment_from_record)
                .transpose()
        })
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> CommentRepositoryResult<Option<Comment>> {
        self.with_state(|state| {
            let records = state.load()?;
            records
                .into_iter()
                .find(|r| r.email == email.as_str())
                .map(comment_from_record)
                .transpose()
        })
    }

    async fn list_all(&self) -> CommentRepositoryResult<Vec<Comment>> {
        // The document array is append-ordered, which is creation order.
        self.with_state(|state| {
            let records = state.load()?;
            records.into_iter().map(comment_from_record).collect()
        })
    }

    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<()> {
        self.with_state(|state| {
            let mut records = state.load()?;
            let before = records.len();
            records.retain(|r| r.id != id.into_inner());
            if records.len() == before {
                return Err(CommentRepositoryError::NotFound(id));
            }
            state.persist(&records)
        })
    }
}

fn record_from_comment(comment: &Comment) -> CommentRecord {
    CommentRecord {
        id: comment.id().into_inner(),
        name: comment.name().as_str().to_owned(),
        email: comment.email().as_str().to_owned(),
        comment: comment.body().as_str().to_owned(),
        created_at: comment.created_at(),
        updated_at: comment.updated_at(),
    }
}

fn comment_from_record(record: CommentRecord) -> CommentRepositoryResult<Comment> {
    let CommentRecord {
        id,
        name,
        email,
        comment,
        created_at,
        updated_at,
    } = record;

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
