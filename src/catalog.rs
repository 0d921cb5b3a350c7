//! Built-in encouragements and the words that trigger them.
//!
//! Both lists are fixed at compile time. Built-in encouragements show up in
//! search results but can never be deleted.

pub const SAD_WORDS: &[&str] = &[
    "sad",
    "depressed",
    "unhappy",
    "angry",
    "miserable",
    "depressing",
    "depression",
    "depressive",
    "depress",
    "depresses",
];

pub const STARTER_ENCOURAGEMENTS: &[&str] = &[
    "Cheer up!",
    "Hang in there.",
    "You are a great person.",
    "You are not alone.",
    "You are strong.",
    "You are brave.",
    "You are kind.",
    "You are smart.",
    "You are funny.",
    "You are beautiful.",
    "You are amazing.",
    "You are awesome.",
    "You are a rockstar.",
    "You are a superstar.",
    "You are a hero.",
    "You are a champion.",
    "You are a winner.",
    "You are a legend.",
];

/// Case-insensitive substring check against [`SAD_WORDS`].
pub fn contains_sad_word(text: &str) -> bool {
    let lowered = text.to_lowercase();
    SAD_WORDS.iter().any(|word| lowered.contains(word))
}
