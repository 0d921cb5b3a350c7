//! Turns incoming chat text into replies.
//!
//! All shared state lives in [`Interpreter`]: the database handle (custom
//! encouragements plus the responding flag), the quote client and the per-chat
//! search results. Store positions and displayed search numbers are separate
//! index spaces; a number typed by a user only reaches the store through
//! [`SearchIndex::get`].

use anyhow::Result;
use rand::Rng;
use tracing::debug;

use crate::catalog::{contains_sad_word, STARTER_ENCOURAGEMENTS};
use crate::db::{ChatKey, Database};
use crate::messages::{
    cannot_delete_builtin, deleted_search_result, deleted_text, index_not_found,
    text_not_found, DELETE_USAGE, ENCOURAGEMENT_ADDED, GOODBYE, HELLO, NEW_USAGE,
    RESPONDING_OFF, RESPONDING_ON, RESPONDING_USAGE, SEARCH_USAGE,
};
use crate::quotes::QuoteClient;
use crate::search::{ResultRef, SearchIndex};
use crate::session::Sessions;

mod format;
mod parse;

pub use format::{format_list, format_search};
pub use parse::{parse_flag, ChatCommand, DeleteTarget};

/// Result of a `$del` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    DeletedResult(String),
    DeletedText(String),
    BuiltIn(String),
    IndexNotFound(u64),
    TextNotFound(String),
}

impl DeleteOutcome {
    pub fn reply(&self) -> String {
        match self {
            DeleteOutcome::DeletedResult(text) => deleted_search_result(text),
            DeleteOutcome::DeletedText(text) => deleted_text(text),
            DeleteOutcome::BuiltIn(text) => cannot_delete_builtin(text),
            DeleteOutcome::IndexNotFound(number) => index_not_found(*number),
            DeleteOutcome::TextNotFound(text) => text_not_found(text),
        }
    }
}

#[derive(Clone)]
pub struct Interpreter {
    db: Database,
    quotes: QuoteClient,
    sessions: Sessions,
}

impl Interpreter {
    pub fn new(db: Database, quotes: QuoteClient) -> Self {
        Self {
            db,
            quotes,
            sessions: Sessions::new(),
        }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Reply to `text`, or `None` when the message needs no answer.
    ///
    /// Commands always take precedence over sad-word detection.
    pub async fn respond(&self, chat: ChatKey, text: &str) -> Result<Option<String>> {
        match ChatCommand::parse(text) {
            Some(command) => {
                debug!(chat_id = chat.0, ?command, "Handling command");
                self.execute(chat, command).await.map(Some)
            }
            None if contains_sad_word(text) => self.encourage().await,
            None => Ok(None),
        }
    }

    pub async fn execute(&self, chat: ChatKey, command: ChatCommand) -> Result<String> {
        match command {
            ChatCommand::Hello => Ok(HELLO.to_string()),
            ChatCommand::Goodbye => Ok(GOODBYE.to_string()),
            ChatCommand::Inspire => Ok(self.quotes.fetch_quote().await),
            ChatCommand::New(text) => self.add(&text).await,
            ChatCommand::List => self.list(chat).await,
            ChatCommand::Search(term) => self.search(chat, &term).await,
            ChatCommand::Delete(arg) => match DeleteTarget::parse(&arg) {
                Some(target) => Ok(self.delete(chat, target).await?.reply()),
                None => Ok(DELETE_USAGE.to_string()),
            },
            ChatCommand::Responding(arg) => self.toggle_responding(&arg).await,
        }
    }

    async fn encourage(&self) -> Result<Option<String>> {
        if !self.db.is_responding().await? {
            debug!("Sad word ignored, responding is off");
            return Ok(None);
        }
        let customs = self.db.list_encouragements().await?;
        let picked =
            pick_encouragement(&mut rand::thread_rng(), STARTER_ENCOURAGEMENTS, &customs);
        if picked.is_none() {
            debug!("No encouragements available");
        }
        Ok(picked)
    }

    async fn add(&self, text: &str) -> Result<String> {
        let _state = self.sessions.lock().await;
        if !self.db.add_encouragement(text).await? {
            return Ok(NEW_USAGE.to_string());
        }
        Ok(ENCOURAGEMENT_ADDED.to_string())
    }

    async fn list(&self, chat: ChatKey) -> Result<String> {
        let mut state = self.sessions.lock().await;
        state.clear(chat);
        let entries = self.db.list_encouragements().await?;
        Ok(format_list(&entries))
    }

    async fn search(&self, chat: ChatKey, term: &str) -> Result<String> {
        if term.is_empty() {
            return Ok(SEARCH_USAGE.to_string());
        }
        let mut state = self.sessions.lock().await;
        let customs = self.db.list_encouragements().await?;
        let index = SearchIndex::build(term, STARTER_ENCOURAGEMENTS, &customs);
        debug!(chat_id = chat.0, hits = index.len(), "Search finished");
        let reply = format_search(term, &index);
        state.replace(chat, index);
        Ok(reply)
    }

    /// Run a `$del`. Every successful deletion invalidates all search results.
    pub async fn delete(&self, chat: ChatKey, target: DeleteTarget) -> Result<DeleteOutcome> {
        let mut state = self.sessions.lock().await;
        let outcome = match target {
            DeleteTarget::Number(number) => {
                let hit = state.get(chat).and_then(|index| index.get(number)).cloned();
                match hit {
                    None => DeleteOutcome::IndexNotFound(number),
                    Some(ResultRef::Builtin(text)) => DeleteOutcome::BuiltIn(text),
                    Some(ResultRef::Custom { text, position }) => {
                        let deleted = self.db.delete_encouragement_at(position).await?;
                        state.clear_all();
                        if deleted {
                            DeleteOutcome::DeletedResult(text)
                        } else {
                            DeleteOutcome::IndexNotFound(number)
                        }
                    }
                }
            }
            DeleteTarget::Text(text) => {
                if self.db.delete_encouragement_text(&text).await? {
                    state.clear_all();
                    DeleteOutcome::DeletedText(text)
                } else {
                    DeleteOutcome::TextNotFound(text)
                }
            }
        };
        debug!(chat_id = chat.0, ?outcome, "Delete finished");
        Ok(outcome)
    }

    async fn toggle_responding(&self, arg: &str) -> Result<String> {
        let Some(responding) = parse_flag(arg) else {
            return Ok(RESPONDING_USAGE.to_string());
        };
        self.db.set_responding(responding).await?;
        Ok(if responding { RESPONDING_ON } else { RESPONDING_OFF }.to_string())
    }
}

/// Pick uniformly from built-ins and custom entries combined.
pub fn pick_encouragement<R>(rng: &mut R, builtins: &[&str], customs: &[String]) -> Option<String>
where
    R: Rng + ?Sized,
{
    let total = builtins.len() + customs.len();
    if total == 0 {
        return None;
    }
    let choice = rng.gen_range(0..total);
    let picked = match builtins.get(choice) {
        Some(text) => text.to_string(),
        None => customs[choice - builtins.len()].clone(),
    };
    Some(picked)
}
