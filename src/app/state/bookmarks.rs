use crate::deck::Deck;
use std::collections::BTreeSet;
use tracing::info;

/// In-memory bookmark set; the single owner that both the card screen and
/// the bookmark list render from.
pub struct BookmarkSet {
    pub(in crate::app) ids: BTreeSet<u64>,
    /// Set when the last durable write failed; cleared on the next success.
    pub(in crate::app) unsynced: bool,
}

impl BookmarkSet {
    /// Build from persisted ids, dropping any that no longer exist in the
    /// deck.
    pub(in crate::app) fn from_stored(stored: Vec<u64>, deck: &Deck) -> Self {
        let total = stored.len();
        let ids: BTreeSet<u64> = stored
            .into_iter()
            .filter(|id| deck.contains_id(*id))
            .collect();
        let pruned = total.saturating_sub(ids.len());
        if pruned > 0 {
            info!(pruned, "Dropped bookmark ids missing from the deck");
        }
        BookmarkSet {
            ids,
            unsynced: false,
        }
    }

    pub(in crate::app) fn is_bookmarked(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Toggle membership; returns true when the id was added.
    pub(in crate::app) fn toggle(&mut self, id: u64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub(in crate::app) fn as_vec(&self) -> Vec<u64> {
        self.ids.iter().copied().collect()
    }

    pub(in crate::app) fn len(&self) -> usize {
        self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::BookmarkSet;
    use crate::deck::{Deck, Question};

    fn sample_deck() -> Deck {
        let questions = (1..=3)
            .map(|id| Question {
                id,
                jp: format!("文 {id}"),
                en: format!("Sentence {id}"),
            })
            .collect();
        Deck::from_questions(questions).expect("sample deck")
    }

    #[test]
    fn toggle_is_self_inverse() {
        let mut bookmarks = BookmarkSet::from_stored(Vec::new(), &sample_deck());
        assert!(bookmarks.toggle(2));
        assert!(bookmarks.is_bookmarked(2));
        assert!(!bookmarks.toggle(2));
        assert!(!bookmarks.is_bookmarked(2));
    }

    #[test]
    fn stored_ids_missing_from_deck_are_pruned() {
        let bookmarks = BookmarkSet::from_stored(vec![1, 7, 3, 99], &sample_deck());
        assert_eq!(bookmarks.as_vec(), vec![1, 3]);
        assert!(!bookmarks.unsynced);
    }
}
