use anyhow::Result;
use teloxide::prelude::*;

use crate::db::Database;
use crate::messages::info_text;
use crate::system_info::get_system_info;

pub async fn show_system_info(bot: Bot, msg: Message, db: &Database) -> Result<()> {
    tracing::debug!(chat_id = msg.chat.id.0, "Showing system info");
    let custom_count = db.count_encouragements().await?;
    let responding = db.is_responding().await?;
    bot.send_message(
        msg.chat.id,
        info_text(&get_system_info(), custom_count, responding),
    )
    .await?;
    Ok(())
}
