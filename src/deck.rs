//! Loading and lookup for the bundled question dataset.
//!
//! A deck is an ordered, immutable list of bilingual sentence pairs read once
//! at startup from a JSON file. Positions follow dataset order; ids are
//! stable and unique but need not match positions.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;
use unicode_normalization::UnicodeNormalization;

/// One bilingual sentence pair with a stable identifier.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: u64,
    pub jp: String,
    pub en: String,
}

/// Ordered, immutable question sequence. Never empty once constructed.
#[derive(Debug, Clone)]
pub struct Deck {
    questions: Vec<Question>,
}

impl Deck {
    pub fn from_questions(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            bail!("Deck contains no questions");
        }
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                bail!("Duplicate question id {} in deck", question.id);
            }
        }
        Ok(Deck { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Dataset position of the question with the given id.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.questions.iter().position(|question| question.id == id)
    }

    pub fn contains_id(&self, id: u64) -> bool {
        self.position_of(id).is_some()
    }
}

/// Read and validate a deck from a JSON file. Text is NFC-normalized so that
/// composed and decomposed kana compare equal downstream.
pub fn load_deck(path: &Path) -> Result<Deck> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Reading deck from {}", path.display()))?;
    let raw: Vec<Question> = serde_json::from_str(&data)
        .with_context(|| format!("Parsing deck JSON from {}", path.display()))?;
    let questions = raw
        .into_iter()
        .map(|question| Question {
            id: question.id,
            jp: question.jp.nfc().collect(),
            en: question.en.nfc().collect(),
        })
        .collect();
    let deck = Deck::from_questions(questions)?;
    info!(path = %path.display(), questions = deck.len(), "Loaded question deck");
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::{Deck, Question};

    fn question(id: u64) -> Question {
        Question {
            id,
            jp: format!("日本語 {id}"),
            en: format!("English {id}"),
        }
    }

    #[test]
    fn rejects_empty_deck() {
        assert!(Deck::from_questions(Vec::new()).is_err());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Deck::from_questions(vec![question(3), question(3)]);
        assert!(result.is_err());
    }

    #[test]
    fn position_follows_dataset_order_not_id() {
        let deck = Deck::from_questions(vec![question(9), question(2), question(5)])
            .expect("valid deck");
        assert_eq!(deck.position_of(2), Some(1));
        assert_eq!(deck.position_of(5), Some(2));
        assert_eq!(deck.position_of(42), None);
        assert!(deck.contains_id(9));
    }
}
