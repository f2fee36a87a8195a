//! Store abstraction and implementations for the Comments domain

pub mod comments;
pub mod memory;

use std::sync::Arc;

use curio_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Comment;

pub use comments::CommentRepository;
pub use memory::InMemoryCommentRepository;

/// Persistence operations for comments
#[async_trait::async_trait]
pub trait CommentStore: Send + Sync {
    /// List comments for an artifact, newest first
    async fn list_by_artifact(&self, artifact_id: Uuid) -> Result<Vec<Comment>>;

    /// Insert a new comment
    async fn create(&self, comment: &Comment) -> Result<Comment>;
}

/// Combined repository access for the Comments domain
#[derive(Clone)]
pub struct CommentsRepositories {
    pub comments: Arc<dyn CommentStore>,
}

impl CommentsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            comments: Arc::new(CommentRepository::new(pool)),
        }
    }

    /// Repositories backed by process memory
    pub fn in_memory() -> Self {
        Self {
            comments: Arc::new(InMemoryCommentRepository::new()),
        }
    }
}
