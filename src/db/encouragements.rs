use anyhow::Result;

use super::{Database, Position};

impl Database {
    /// Append an encouragement. Blank text is ignored and reported as `false`.
    pub async fn add_encouragement(&self, text: &str) -> Result<bool> {
        if text.trim().is_empty() {
            tracing::trace!("Ignoring blank encouragement");
            return Ok(false);
        }
        tracing::trace!(text = %text, "Adding encouragement");
        sqlx::query("INSERT INTO encouragements (text) VALUES (?)")
            .bind(text)
            .execute(self.pool())
            .await?;
        Ok(true)
    }

    pub async fn list_encouragements(&self) -> Result<Vec<String>> {
        tracing::trace!("Listing encouragements");
        sqlx::query_scalar("SELECT text FROM encouragements ORDER BY id")
            .fetch_all(self.pool())
            .await
            .map_err(Into::into)
    }

    pub async fn count_encouragements(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM encouragements")
            .fetch_one(self.pool())
            .await
            .map_err(Into::into)
    }

    /// Remove the entry currently at `position`. Out of range positions
    /// leave the table untouched and return `false`.
    pub async fn delete_encouragement_at(&self, position: Position) -> Result<bool> {
        tracing::debug!(%position, "Deleting encouragement by position");
        let Ok(offset) = i64::try_from(position.0) else {
            return Ok(false);
        };
        let result = sqlx::query(
            "DELETE FROM encouragements WHERE id = \
             (SELECT id FROM encouragements ORDER BY id LIMIT 1 OFFSET ?)",
        )
        .bind(offset)
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove the oldest entry equal to `text`.
    pub async fn delete_encouragement_text(&self, text: &str) -> Result<bool> {
        tracing::debug!(text = %text, "Deleting encouragement by text");
        let result = sqlx::query(
            "DELETE FROM encouragements WHERE id = \
             (SELECT id FROM encouragements WHERE text = ? ORDER BY id LIMIT 1)",
        )
        .bind(text)
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
