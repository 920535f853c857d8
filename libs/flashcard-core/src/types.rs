//! Core types for the flashcard application.

use serde::{Deserialize, Serialize};

/// A single term/definition pair.
///
/// Serialized as one record of the card file format: `card` holds the term,
/// and either field is left out when it is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "card", default, skip_serializing_if = "String::is_empty")]
    pub term: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub definition: String,
}

impl Card {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Term to definition mapping, iterated in insertion order.
///
/// Uniqueness of terms and definitions is the caller's job: [`CardSet::insert`]
/// replaces an existing term but never checks definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Definition of `term`, if the card exists.
    pub fn definition(&self, term: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|card| card.term == term)
            .map(|card| card.definition.as_str())
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.definition(term).is_some()
    }

    /// First term (in iteration order) whose definition equals `definition`.
    pub fn term_for_definition(&self, definition: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|card| card.definition == definition)
            .map(|card| card.term.as_str())
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.term_for_definition(definition).is_some()
    }

    /// Insert a card. An existing card with the same term is removed first,
    /// so a replaced card moves to the end of the iteration order.
    ///
    /// Returns the replaced card, if any.
    pub fn insert(&mut self, card: Card) -> Option<Card> {
        let previous = self.remove(&card.term);
        self.cards.push(card);
        previous
    }

    pub fn remove(&mut self, term: &str) -> Option<Card> {
        let index = self.cards.iter().position(|card| card.term == term)?;
        Some(self.cards.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Snapshot of the terms in iteration order.
    pub fn terms(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.term.clone()).collect()
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardSet::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl Extend<Card> for CardSet {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.insert(card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> CardSet {
        [Card::new("apple", "fruit"), Card::new("car", "vehicle")]
            .into_iter()
            .collect()
    }

    #[test]
    fn lookup_by_term_and_definition() {
        let cards = sample();
        assert_eq!(cards.definition("apple"), Some("fruit"));
        assert_eq!(cards.definition("pear"), None);
        assert_eq!(cards.term_for_definition("vehicle"), Some("car"));
        assert!(!cards.contains_definition("tree"));
    }

    #[test]
    fn empty_definition_is_still_present() {
        let mut cards = CardSet::new();
        cards.insert(Card::new("blank", ""));
        assert_eq!(cards.definition("blank"), Some(""));
        assert!(cards.contains_term("blank"));
        assert!(!cards.contains_term("other"));
    }

    #[test]
    fn insert_replaces_and_moves_to_end() {
        let mut cards = sample();
        let previous = cards.insert(Card::new("apple", "red fruit"));
        assert_eq!(previous, Some(Card::new("apple", "fruit")));
        assert_eq!(cards.len(), 2);
        assert_eq!(cards.terms(), vec!["car".to_string(), "apple".to_string()]);
        assert_eq!(cards.definition("apple"), Some("red fruit"));
    }

    #[test]
    fn remove_missing_term() {
        let mut cards = sample();
        assert_eq!(cards.remove("pear"), None);
        assert_eq!(cards.remove("car"), Some(Card::new("car", "vehicle")));
        assert_eq!(cards.len(), 1);
    }
}
