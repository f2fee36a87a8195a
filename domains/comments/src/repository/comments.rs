//! Postgres comment repository

use crate::domain::entities::Comment;
use crate::repository::CommentStore;
use curio_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CommentStore for CommentRepository {
    async fn list_by_artifact(&self, artifact_id: Uuid) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, artifact_id, user_email, user_name, text, rating, created_at
            FROM comments
            WHERE artifact_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(artifact_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn create(&self, comment: &Comment) -> Result<Comment> {
        let created = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, artifact_id, user_email, user_name, text, rating, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, artifact_id, user_email, user_name, text, rating, created_at
            "#,
        )
        .bind(comment.id)
        .bind(comment.artifact_id)
        .bind(&comment.user_email)
        .bind(&comment.user_name)
        .bind(&comment.text)
        .bind(comment.rating)
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
