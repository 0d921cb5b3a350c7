use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::db::ChatKey;
use crate::search::SearchIndex;

/// Last search results for every conversation.
#[derive(Debug, Default)]
pub struct SearchState {
    indexes: HashMap<ChatKey, SearchIndex>,
}

impl SearchState {
    pub fn get(&self, chat: ChatKey) -> Option<&SearchIndex> {
        self.indexes.get(&chat)
    }

    pub fn replace(&mut self, chat: ChatKey, index: SearchIndex) {
        if index.is_empty() {
            self.indexes.remove(&chat);
        } else {
            self.indexes.insert(chat, index);
        }
    }

    pub fn clear(&mut self, chat: ChatKey) {
        self.indexes.remove(&chat);
    }

    /// Forget every conversation's results. Required after any deletion
    /// because store positions shift.
    pub fn clear_all(&mut self) {
        if !self.indexes.is_empty() {
            tracing::debug!(
                conversations = self.indexes.len(),
                "Invalidating search results"
            );
        }
        self.indexes.clear();
    }
}

/// Shared handle to [`SearchState`].
///
/// Holding the guard serializes store access together with search index
/// updates, so two search/delete sequences never interleave.
#[derive(Clone, Default)]
pub struct Sessions {
    inner: Arc<Mutex<SearchState>>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self) -> MutexGuard<'_, SearchState> {
        self.inner.lock().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(term: &str) -> SearchIndex {
        SearchIndex::build(term, &["Cheer up!", "Hang in there."], &[])
    }

    #[tokio::test]
    async fn replace_and_clear_single_chat() {
        let sessions = Sessions::new();
        let mut state = sessions.lock().await;
        state.replace(ChatKey(1), index("cheer"));
        state.replace(ChatKey(2), index("hang"));

        state.clear(ChatKey(1));
        assert!(state.get(ChatKey(1)).is_none());
        assert_eq!(state.get(ChatKey(2)).map(SearchIndex::len), Some(1));
    }

    #[tokio::test]
    async fn clear_all_drops_every_chat() {
        let sessions = Sessions::new();
        {
            let mut state = sessions.lock().await;
            state.replace(ChatKey(1), index("cheer"));
            state.replace(ChatKey(2), index("hang"));
            state.clear_all();
        }
        let state = sessions.lock().await;
        assert!(state.get(ChatKey(1)).is_none());
        assert!(state.get(ChatKey(2)).is_none());
    }

    #[tokio::test]
    async fn empty_results_are_not_kept() {
        let sessions = Sessions::new();
        let mut state = sessions.lock().await;
        state.replace(ChatKey(1), index("cheer"));
        state.replace(ChatKey(1), index("zzz"));
        assert!(state.get(ChatKey(1)).is_none());
    }
}
