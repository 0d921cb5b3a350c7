//! Shared text sent by the bot.
//!
//! Keep all user-facing strings in this module so they stay in one place and are
//! easy to update.

pub const HELP_TEXT: &str = "I cheer people up when they sound sad.\n\n\
             <b>Commands:</b>\n\
             $hello - Say hello.\n\
             $goodbye - Say goodbye.\n\
             $inspire - Get an inspirational quote.\n\
             $new &lt;text&gt; - Add a custom encouragement.\n\
             $list - List custom encouragements.\n\
             $search &lt;word&gt; - Search all encouragements.\n\
             $del &lt;number|text&gt; - Delete a search result or an exact encouragement.\n\
             $responding true|false - Turn sad-word replies on or off.\n\
             /info - Show system information.";

pub const HELLO: &str = "Hello!";
pub const GOODBYE: &str = "Goodbye!";

pub const ENCOURAGEMENT_ADDED: &str = "New encouraging message added.";
pub const NEW_USAGE: &str = "Please provide a message to add. Example: $new You're awesome!";

pub const LIST_HEADER: &str = "Your custom encouragements:";
pub const LIST_EMPTY: &str = "No custom encouragements added yet. Use $new to add some!";

pub const SEARCH_USAGE: &str = "Please provide a word to search for. Example: $search happy";
pub const SEARCH_FOOTER: &str = "Use $del <number> to delete custom encouragements.";

pub const DELETE_USAGE: &str =
    "Provide a number or text to delete. Example: $del 1 or $del You're awesome!";

pub const RESPONDING_ON: &str = "Responding is on.";
pub const RESPONDING_OFF: &str = "Responding is off.";
pub const RESPONDING_USAGE: &str = "Specify true or false. Example: $responding true";

pub const STORE_FAILURE: &str = "Sorry, something went wrong. Please try again.";

pub fn search_header(term: &str) -> String {
    format!("Encouragements containing '{term}':")
}

pub fn search_no_results(term: &str) -> String {
    format!("No encouragements found containing '{term}'. Try a different word!")
}

pub fn deleted_search_result(text: &str) -> String {
    format!("Deleted '{text}' from search results.")
}

pub fn cannot_delete_builtin(text: &str) -> String {
    format!("Cannot delete '{text}' - it's a built-in encouragement.")
}

pub fn index_not_found(number: u64) -> String {
    format!("Index {number} not found in last search results.")
}

pub fn deleted_text(text: &str) -> String {
    format!("Deleted '{text}'.")
}

pub fn text_not_found(text: &str) -> String {
    format!("'{text}' not found.")
}

pub fn info_text(build: &str, custom_count: i64, responding: bool) -> String {
    let state = if responding { "on" } else { "off" };
    format!("{build}\nCustom encouragements: {custom_count}\nResponding: {state}")
}
