use anyhow::Result;

use super::Database;

impl Database {
    /// Whether the bot answers sad messages. Defaults to `true`.
    pub async fn is_responding(&self) -> Result<bool> {
        let stored =
            sqlx::query_scalar::<_, bool>("SELECT responding FROM bot_settings WHERE id = 1")
                .fetch_optional(self.pool())
                .await?;
        Ok(stored.unwrap_or(true))
    }

    pub async fn set_responding(&self, responding: bool) -> Result<()> {
        tracing::debug!(responding, "Updating responding flag");
        sqlx::query(
            "INSERT INTO bot_settings (id, responding) VALUES (1, ?) \
             ON CONFLICT(id) DO UPDATE SET responding = excluded.responding",
        )
        .bind(responding)
        .execute(self.pool())
        .await?;
        Ok(())
    }
}
