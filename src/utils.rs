use teloxide::{prelude::*, types::ChatId};

/// Telegram rejects text messages longer than this many characters.
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Split `text` into pieces of at most `max_chars` characters, preferring to
/// break after a newline. A zero limit is treated as one.
pub fn split_message(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut parts = Vec::new();
    let mut remaining = text;
    while remaining.chars().count() > max_chars {
        let limit = remaining
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(remaining.len());
        let split_at = remaining[..limit]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(limit);
        let (chunk, rest) = remaining.split_at(split_at);
        parts.push(chunk);
        remaining = rest;
    }
    if !remaining.is_empty() || parts.is_empty() {
        parts.push(remaining);
    }
    parts
}

/// Send `text`, split to fit Telegram's limit, and log a warning on failure.
pub async fn try_send_message(bot: &Bot, chat_id: ChatId, text: &str) {
    for part in split_message(text, MAX_MESSAGE_CHARS) {
        if let Err(err) = bot.send_message(chat_id, part).await {
            tracing::warn!(
                error = %err,
                chat_id = chat_id.0,
                "Failed to send message",
            );
            return;
        }
    }
}
