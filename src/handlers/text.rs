use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{Me, UserId},
};

use crate::interpreter::Interpreter;
use crate::messages::{HELP_TEXT, STORE_FAILURE};
use crate::utils::try_send_message;

pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT)
        .parse_mode(teloxide::types::ParseMode::Html)
        .await?;
    Ok(())
}

/// Entry point for every plain text message.
pub async fn handle_text(bot: Bot, msg: Message, me: Me, interpreter: Interpreter) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if is_from(&msg, me.user.id) {
        tracing::trace!(chat_id = msg.chat.id.0, "Ignoring own message");
        return Ok(());
    }

    let chat_id = msg.chat.id;
    match interpreter.respond(chat_id.into(), text).await {
        Ok(Some(reply)) => try_send_message(&bot, chat_id, &reply).await,
        Ok(None) => {}
        Err(err) => {
            tracing::error!(error = %err, chat_id = chat_id.0, "Failed to handle message");
            try_send_message(&bot, chat_id, STORE_FAILURE).await;
        }
    }
    Ok(())
}

fn is_from(msg: &Message, user_id: UserId) -> bool {
    msg.from.as_ref().is_some_and(|user| user.id == user_id)
}
