//! Postgres artifact repository

use crate::domain::entities::{Artifact, ArtifactChanges, Identity, LikeSnapshot, LikedBy};
use crate::domain::state::LikeEvent;
use crate::repository::ArtifactStore;
use curio_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// All columns in the artifacts table, used for SELECT and RETURNING clauses.
const ARTIFACT_COLUMNS: &str = "\
    id, name, image, artifact_type, \
    description, historical_context, created_at, \
    discovered_at, discovered_by, present_location, location, \
    adder_email, like_count, liked_by";

/// Add the identity, only if not already a liker. The count is recomputed
/// from the stored array so it always matches what was written.
const LIKE_SQL: &str = "\
    UPDATE artifacts \
    SET like_count = cardinality(COALESCE(liked_by, '{}')) + 1, \
        liked_by = array_append(COALESCE(liked_by, '{}'), $2) \
    WHERE id = $1 AND NOT ($2 = ANY(COALESCE(liked_by, '{}'))) \
    RETURNING like_count, liked_by";

/// Remove every copy of the identity, only if currently a liker.
const UNLIKE_SQL: &str = "\
    UPDATE artifacts \
    SET like_count = cardinality(array_remove(COALESCE(liked_by, '{}'), $2)), \
        liked_by = array_remove(COALESCE(liked_by, '{}'), $2) \
    WHERE id = $1 AND $2 = ANY(COALESCE(liked_by, '{}')) \
    RETURNING like_count, liked_by";

#[derive(Clone)]
pub struct ArtifactRepository {
    pool: PgPool,
}

impl ArtifactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ArtifactStore for ArtifactRepository {
    async fn find(&self, id: Uuid) -> Result<Option<Artifact>> {
        let query = format!("SELECT {ARTIFACT_COLUMNS} FROM artifacts WHERE id = $1");
        let artifact = sqlx::query_as::<_, Artifact>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(artifact)
    }

    async fn list(&self) -> Result<Vec<Artifact>> {
        let query = format!("SELECT {ARTIFACT_COLUMNS} FROM artifacts ORDER BY inserted_at ASC");
        let artifacts = sqlx::query_as::<_, Artifact>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(artifacts)
    }

    async fn list_by_adder(&self, adder_email: &str) -> Result<Vec<Artifact>> {
        let query = format!(
            "SELECT {ARTIFACT_COLUMNS} FROM artifacts \
             WHERE adder_email = $1 ORDER BY inserted_at ASC"
        );
        let artifacts = sqlx::query_as::<_, Artifact>(&query)
            .bind(adder_email)
            .fetch_all(&self.pool)
            .await?;

        Ok(artifacts)
    }

    async fn list_liked_by(&self, identity: &Identity) -> Result<Vec<Artifact>> {
        let query = format!(
            "SELECT {ARTIFACT_COLUMNS} FROM artifacts \
             WHERE $1 = ANY(liked_by) ORDER BY like_count DESC, inserted_at ASC"
        );
        let artifacts = sqlx::query_as::<_, Artifact>(&query)
            .bind(identity.as_str())
            .fetch_all(&self.pool)
            .await?;

        Ok(artifacts)
    }

    async fn list_featured(&self, limit: i64) -> Result<Vec<Artifact>> {
        let query = format!(
            "SELECT {ARTIFACT_COLUMNS} FROM artifacts \
             ORDER BY like_count DESC, inserted_at ASC LIMIT $1"
        );
        let artifacts = sqlx::query_as::<_, Artifact>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(artifacts)
    }

    async fn random(&self) -> Result<Option<Artifact>> {
        let query = format!("SELECT {ARTIFACT_COLUMNS} FROM artifacts ORDER BY random() LIMIT 1");
        let artifact = sqlx::query_as::<_, Artifact>(&query)
            .fetch_optional(&self.pool)
            .await?;

        Ok(artifact)
    }

    async fn create(&self, artifact: &Artifact) -> Result<Artifact> {
        let query = format!(
            "INSERT INTO artifacts ({ARTIFACT_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {ARTIFACT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, Artifact>(&query)
            .bind(artifact.id)
            .bind(&artifact.name)
            .bind(&artifact.image)
            .bind(artifact.artifact_type)
            .bind(&artifact.description)
            .bind(&artifact.historical_context)
            .bind(&artifact.created_at)
            .bind(&artifact.discovered_at)
            .bind(&artifact.discovered_by)
            .bind(&artifact.present_location)
            .bind(&artifact.location)
            .bind(&artifact.adder_email)
            .bind(artifact.like_count)
            .bind(artifact.liked_by.to_vec())
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn update_content(&self, id: Uuid, changes: &ArtifactChanges) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE artifacts SET
                name = COALESCE($2, name),
                image = COALESCE($3, image),
                artifact_type = COALESCE($4, artifact_type),
                description = COALESCE($5, description),
                historical_context = COALESCE($6, historical_context),
                created_at = COALESCE($7, created_at),
                discovered_at = COALESCE($8, discovered_at),
                discovered_by = COALESCE($9, discovered_by),
                present_location = COALESCE($10, present_location),
                location = COALESCE($11, location)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.image)
        .bind(changes.artifact_type)
        .bind(&changes.description)
        .bind(&changes.historical_context)
        .bind(&changes.created_at)
        .bind(&changes.discovered_at)
        .bind(&changes.discovered_by)
        .bind(&changes.present_location)
        .bind(&changes.location)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM artifacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn apply_like_event(
        &self,
        id: Uuid,
        identity: &Identity,
        event: LikeEvent,
    ) -> Result<Option<LikeSnapshot>> {
        let sql = match event {
            LikeEvent::Like => LIKE_SQL,
            LikeEvent::Unlike => UNLIKE_SQL,
        };

        let row = sqlx::query_as::<_, (i32, Option<Vec<String>>)>(sql)
            .bind(id)
            .bind(identity.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(like_count, liked_by)| LikeSnapshot {
            like_count,
            liked_by: LikedBy::from_stored(liked_by),
        }))
    }
}
