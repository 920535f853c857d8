//! Answer matching for quiz rounds.

use crate::types::CardSet;

/// Result of comparing a typed answer to a card's definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    /// The answer is the definition of another card in the set.
    WrongButMatchesOther(String),
    Wrong,
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Compare a typed answer to the expected definition.
///
/// Matching is exact: the answer is expected to be trimmed already.
pub fn match_answer(typed: &str, expected: &str, cards: &CardSet) -> AnswerOutcome {
    if typed == expected {
        return AnswerOutcome::Correct;
    }

    match cards.term_for_definition(typed) {
        Some(other) => AnswerOutcome::WrongButMatchesOther(other.to_string()),
        None => AnswerOutcome::Wrong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Card;
    use pretty_assertions::assert_eq;

    fn cards() -> CardSet {
        [
            Card::new("apple", "fruit"),
            Card::new("car", "vehicle"),
            Card::new("oak", "tree"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn own_definition_is_correct() {
        let cards = cards();
        for card in cards.iter() {
            assert_eq!(
                match_answer(&card.definition, &card.definition, &cards),
                AnswerOutcome::Correct
            );
        }
    }

    #[test]
    fn other_definition_names_other_term() {
        let cards = cards();
        for asked in cards.iter() {
            for given in cards.iter().filter(|c| c.term != asked.term) {
                assert_eq!(
                    match_answer(&given.definition, &asked.definition, &cards),
                    AnswerOutcome::WrongButMatchesOther(given.term.clone())
                );
            }
        }
    }

    #[test]
    fn unknown_answer_is_wrong() {
        let cards = cards();
        assert_eq!(match_answer("boat", "fruit", &cards), AnswerOutcome::Wrong);
    }

    #[test]
    fn matching_is_case_and_space_sensitive() {
        let cards = cards();
        assert_eq!(match_answer("Fruit", "fruit", &cards), AnswerOutcome::Wrong);
        assert_eq!(match_answer(" fruit", "fruit", &cards), AnswerOutcome::Wrong);
    }

    #[test]
    fn empty_answer_matches_empty_definition() {
        let mut cards = cards();
        cards.insert(Card::new("void", ""));
        assert_eq!(
            match_answer("", "fruit", &cards),
            AnswerOutcome::WrongButMatchesOther("void".to_string())
        );
        assert_eq!(match_answer("", "", &cards), AnswerOutcome::Correct);
    }
}
