//! In-memory comment repository

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Comment;
use crate::repository::CommentStore;
use curio_common::Result;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentRepository {
    comments: Arc<RwLock<Vec<Comment>>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CommentStore for InMemoryCommentRepository {
    async fn list_by_artifact(&self, artifact_id: Uuid) -> Result<Vec<Comment>> {
        // Walk newest-inserted first so equal timestamps still read newest first
        let mut comments: Vec<Comment> = self
            .comments
            .read()
            .await
            .iter()
            .rev()
            .filter(|c| c.artifact_id == artifact_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn create(&self, comment: &Comment) -> Result<Comment> {
        self.comments.write().await.push(comment.clone());
        Ok(comment.clone())
    }
}
