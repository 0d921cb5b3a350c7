use crate::db::Position;
use tracing::trace;

/// One numbered search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRef {
    /// Shipped with the bot, never deletable.
    Builtin(String),
    /// User submitted. `position` is where the entry sat in the store when
    /// the search ran.
    Custom { text: String, position: Position },
}

impl ResultRef {
    pub fn text(&self) -> &str {
        match self {
            ResultRef::Builtin(text) | ResultRef::Custom { text, .. } => text,
        }
    }
}

/// The numbered view produced by the last `$search` in a conversation.
///
/// Displayed numbers start at 1. Built-in hits always come before custom
/// hits and both keep their source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    results: Vec<ResultRef>,
}

impl SearchIndex {
    pub fn build<B>(term: &str, builtins: &[B], customs: &[String]) -> Self
    where
        B: AsRef<str>,
    {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Self::default();
        }
        let matches = |text: &str| text.to_lowercase().contains(&needle);

        let mut results: Vec<ResultRef> = builtins
            .iter()
            .map(B::as_ref)
            .filter(|text| matches(*text))
            .map(|text| ResultRef::Builtin(text.to_string()))
            .collect();

        results.extend(
            customs
                .iter()
                .enumerate()
                .filter(|(_, text)| matches(text.as_str()))
                .map(|(index, text)| ResultRef::Custom {
                    text: text.clone(),
                    position: Position(index),
                }),
        );

        trace!(term = %needle, hits = results.len(), "Built search index");
        Self { results }
    }

    /// Look up a displayed (1-based) number.
    pub fn get(&self, number: u64) -> Option<&ResultRef> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.results.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &ResultRef)> {
        (1u64..).zip(self.results.iter())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn customs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builtins_come_before_customs() {
        let index = SearchIndex::build(
            "you",
            &["Cheer up!", "You are kind."],
            &customs(&["Love you", "Nope", "you rock"]),
        );

        let numbered: Vec<(u64, &ResultRef)> = index.iter().collect();
        assert_eq!(
            numbered,
            vec![
                (1, &ResultRef::Builtin("You are kind.".into())),
                (
                    2,
                    &ResultRef::Custom {
                        text: "Love you".into(),
                        position: Position(0)
                    }
                ),
                (
                    3,
                    &ResultRef::Custom {
                        text: "you rock".into(),
                        position: Position(2)
                    }
                ),
            ]
        );
    }

    #[test]
    fn blank_term_yields_nothing() {
        let index = SearchIndex::build("   ", &["Cheer up!"], &customs(&["Cheer"]));
        assert!(index.is_empty());
    }

    #[test]
    fn lookup_is_one_based() {
        let index = SearchIndex::build("a", &["a"], &customs(&["ab"]));
        assert!(index.get(0).is_none());
        assert_eq!(index.get(1).map(ResultRef::text), Some("a"));
        assert_eq!(index.get(2).map(ResultRef::text), Some("ab"));
        assert!(index.get(3).is_none());
        assert!(index.get(u64::MAX).is_none());
    }

    #[test]
    fn matching_ignores_case() {
        let index = SearchIndex::build("SMIL", &[] as &[&str], &customs(&["Keep smiling"]));
        assert_eq!(index.len(), 1);
        assert!(matches!(index.get(1), Some(ResultRef::Custom { .. })));
    }

    proptest! {
        #[test]
        fn prop_every_hit_contains_term(
            term in "[a-cA-C]{1,2}",
            builtins in proptest::collection::vec("[a-cA-C ]{0,6}", 0..6),
            customs in proptest::collection::vec("[a-cA-C ]{0,6}", 0..6),
        ) {
            let index = SearchIndex::build(&term, &builtins, &customs);
            let needle = term.to_lowercase();
            let mut seen_custom = false;
            for (_, hit) in index.iter() {
                prop_assert!(hit.text().to_lowercase().contains(&needle));
                match hit {
                    ResultRef::Builtin(_) => prop_assert!(!seen_custom),
                    ResultRef::Custom { text, position } => {
                        seen_custom = true;
                        prop_assert_eq!(&customs[position.0], text);
                    }
                }
            }
        }
    }
}
