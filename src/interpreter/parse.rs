/// A recognized `$` command. Arguments are already trimmed but not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Hello,
    Goodbye,
    Inspire,
    New(String),
    List,
    Search(String),
    Delete(String),
    Responding(String),
}

type Build = fn(&str) -> ChatCommand;

// First matching prefix wins.
const COMMANDS: &[(&str, Build)] = &[
    ("$hello", |_| ChatCommand::Hello),
    ("$goodbye", |_| ChatCommand::Goodbye),
    ("$inspire", |_| ChatCommand::Inspire),
    ("$new", |arg| ChatCommand::New(arg.to_string())),
    ("$list", |_| ChatCommand::List),
    ("$search", |arg| ChatCommand::Search(arg.to_string())),
    ("$del", |arg| ChatCommand::Delete(arg.to_string())),
    ("$responding", |arg| ChatCommand::Responding(arg.to_string())),
];

impl ChatCommand {
    /// Match `text` against the command prefixes (case-sensitive).
    pub fn parse(text: &str) -> Option<Self> {
        COMMANDS
            .iter()
            .find_map(|(prefix, build)| text.strip_prefix(prefix).map(|rest| build(rest.trim())))
    }
}

/// What `$del` should remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// A number from the last search results.
    Number(u64),
    /// The exact text of a custom encouragement.
    Text(String),
}

impl DeleteTarget {
    /// `None` for an empty argument. Digit strings too long for `u64` are
    /// treated as text.
    pub fn parse(arg: &str) -> Option<Self> {
        let arg = arg.trim();
        if arg.is_empty() {
            return None;
        }
        if arg.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(number) = arg.parse::<u64>() {
                return Some(DeleteTarget::Number(number));
            }
        }
        Some(DeleteTarget::Text(arg.to_string()))
    }
}

/// Parse the `$responding` argument, ignoring case.
pub fn parse_flag(arg: &str) -> Option<bool> {
    match arg.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
