use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::handlers::{help, show_system_info};
use crate::interpreter::Interpreter;

/// Slash commands. Everything else, `$` commands included, goes through the
/// [`Interpreter`].
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "display the command reference.")]
    Start,
    #[command(description = "display the command reference.")]
    Help,
    #[command(description = "show system information.")]
    Info,
}

impl Command {
    pub async fn dispatch(self, bot: Bot, msg: Message, interpreter: Interpreter) -> Result<()> {
        tracing::debug!(chat_id = msg.chat.id.0, command = ?self, "Handling slash command");
        match self {
            Command::Start | Command::Help => help(bot, msg).await?,
            Command::Info => show_system_info(bot, msg, interpreter.db()).await?,
        }
        Ok(())
    }
}
