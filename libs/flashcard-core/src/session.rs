//! Quiz sessions: repeated questioning over a card set.
//!
//! A session snapshots the card set when asking starts and walks it in
//! iteration order, wrapping around until the requested number of questions
//! has been asked. Wrong answers are counted in [`ErrorStatistics`].

use crate::error::{QuizError, Result};
use crate::matching::{match_answer, AnswerOutcome};
use crate::stats::ErrorStatistics;
use crate::types::{Card, CardSet};

/// Source of user answers.
pub trait InputProvider {
    /// Show `prompt` and return the trimmed reply, or `None` once input is
    /// exhausted.
    fn next_line(&mut self, prompt: &str) -> Option<String>;
}

/// Destination for user-facing messages.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

/// One question and how it was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub term: String,
    pub answer: String,
    pub outcome: AnswerOutcome,
}

/// Rounds of a completed session, in the order they were asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSummary {
    pub rounds: Vec<Round>,
}

impl QuizSummary {
    pub fn correct_count(&self) -> usize {
        self.rounds.iter().filter(|r| r.outcome.is_correct()).count()
    }

    pub fn error_count(&self) -> usize {
        self.rounds.len() - self.correct_count()
    }
}

/// Parse the requested number of questions. Only positive integers are
/// accepted.
pub fn parse_question_count(input: &str) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(QuizError::InvalidCount(input.to_string())),
    }
}

/// A quiz over a borrowed card set, recording mistakes into borrowed
/// statistics.
pub struct QuizSession<'a> {
    cards: &'a CardSet,
    stats: &'a mut ErrorStatistics,
}

impl<'a> QuizSession<'a> {
    pub fn new(cards: &'a CardSet, stats: &'a mut ErrorStatistics) -> Self {
        Self { cards, stats }
    }

    /// Ask for the number of questions, then run that many rounds.
    ///
    /// An unusable count is reported to the user and returned as
    /// [`QuizError::InvalidCount`] without asking anything.
    pub fn run<T>(&mut self, io: &mut T) -> Result<QuizSummary>
    where
        T: InputProvider + OutputSink + ?Sized,
    {
        let reply = io
            .next_line("How many times to ask?")
            .ok_or(QuizError::InputClosed { asked: 0 })?;

        let count = match parse_question_count(&reply) {
            Ok(count) => count,
            Err(err) => {
                tracing::debug!(reply = %reply, "rejected question count");
                io.emit("Please input a positive number.");
                return Err(err);
            }
        };

        self.ask(count, io)
    }

    /// Run `count` rounds, cycling through the cards in order.
    pub fn ask<T>(&mut self, count: usize, io: &mut T) -> Result<QuizSummary>
    where
        T: InputProvider + OutputSink + ?Sized,
    {
        // Snapshot so the walk order is fixed for the whole session.
        let cards = self.cards;
        let deck: Vec<&Card> = cards.iter().collect();
        if deck.is_empty() {
            tracing::warn!(count, "quiz requested with no cards");
            io.emit("There are no cards to ask.");
            return Err(QuizError::EmptyCardSet);
        }

        tracing::info!(count, cards = deck.len(), "quiz started");
        let mut rounds = Vec::with_capacity(count.min(deck.len()));

        for card in deck.iter().cycle().take(count) {
            let prompt = format!("Print the definition of \"{}\":", card.term);
            let answer = io
                .next_line(&prompt)
                .ok_or(QuizError::InputClosed { asked: rounds.len() })?;

            let outcome = match_answer(&answer, &card.definition, cards);
            self.report(card, &outcome, io);

            rounds.push(Round {
                term: card.term.clone(),
                answer,
                outcome,
            });
        }

        io.emit("");

        let summary = QuizSummary { rounds };
        tracing::info!(
            asked = summary.rounds.len(),
            errors = summary.error_count(),
            "quiz finished"
        );
        Ok(summary)
    }

    fn report<O>(&mut self, card: &Card, outcome: &AnswerOutcome, output: &mut O)
    where
        O: OutputSink + ?Sized,
    {
        match outcome {
            AnswerOutcome::Correct => output.emit("Correct!"),
            AnswerOutcome::WrongButMatchesOther(other) => {
                self.stats.record_error(&card.term);
                output.emit(&format!(
                    "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                    card.definition, other
                ));
            }
            AnswerOutcome::Wrong => {
                self.stats.record_error(&card.term);
                output.emit(&format!("Wrong. The right answer is \"{}\".", card.definition));
            }
        }
    }
}
