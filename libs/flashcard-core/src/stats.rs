//! Per-card error statistics and the hardest-card report.

use std::fmt;

/// Error counts per term, in the order terms were first missed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorStatistics {
    counts: Vec<(String, u32)>,
}

impl ErrorStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the error count for `term`, starting it at 1 if absent.
    pub fn record_error(&mut self, term: &str) {
        match self.counts.iter_mut().find(|(t, _)| t == term) {
            Some((_, count)) => *count = count.saturating_add(1),
            None => self.counts.push((term.to_string(), 1)),
        }
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of terms with at least one error.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, term: &str) -> Option<u32> {
        self.counts
            .iter()
            .find(|(t, _)| t == term)
            .map(|(_, count)| *count)
    }

    /// Sum of all recorded errors.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, count)| u64::from(*count)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }
}

/// Terms tied for the highest error count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardestCards {
    pub terms: Vec<String>,
    pub error_count: u32,
}

/// Find every term tied at the maximum error count.
///
/// Returns `None` when no errors have been recorded.
pub fn hardest(stats: &ErrorStatistics) -> Option<HardestCards> {
    let error_count = stats.iter().map(|(_, count)| count).max()?;
    let terms = stats
        .iter()
        .filter(|(_, count)| *count == error_count)
        .map(|(term, _)| term.to_string())
        .collect();

    Some(HardestCards { terms, error_count })
}

impl fmt::Display for HardestCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [term] = self.terms.as_slice() {
            return write!(
                f,
                "The hardest card is \"{}\". You have {} errors answering it.",
                term, self.error_count
            );
        }

        let quoted = self
            .terms
            .iter()
            .map(|term| format!("\"{}\"", term))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "The hardest cards are {}. You have {} errors answering them.",
            quoted, self.error_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn record_error_creates_and_increments() {
        let mut stats = ErrorStatistics::new();
        stats.record_error("apple");
        stats.record_error("apple");
        stats.record_error("car");
        assert_eq!(stats.count("apple"), Some(2));
        assert_eq!(stats.count("car"), Some(1));
        assert_eq!(stats.count("oak"), None);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn unique_maximum() {
        let mut stats = ErrorStatistics::new();
        for _ in 0..4 {
            stats.record_error("apple");
        }
        stats.record_error("car");

        let result = hardest(&stats).unwrap();
        assert_eq!(result.terms, vec!["apple".to_string()]);
        assert_eq!(result.error_count, 4);
        assert_eq!(
            result.to_string(),
            "The hardest card is \"apple\". You have 4 errors answering it."
        );
    }

    #[test]
    fn ties_report_every_term() {
        let mut stats = ErrorStatistics::new();
        stats.record_error("oak");
        for term in ["apple", "car", "apple", "car"] {
            stats.record_error(term);
        }

        let result = hardest(&stats).unwrap();
        assert_eq!(result.terms, vec!["apple".to_string(), "car".to_string()]);
        assert_eq!(result.error_count, 2);
        assert_eq!(
            result.to_string(),
            "The hardest cards are \"apple\", \"car\". You have 2 errors answering them."
        );
    }

    #[test]
    fn hardest_is_stable_across_calls() {
        let mut stats = ErrorStatistics::new();
        for term in ["c", "a", "b"] {
            stats.record_error(term);
        }
        assert_eq!(hardest(&stats), hardest(&stats));
        assert_eq!(hardest(&stats).unwrap().terms.len(), 3);
    }

    #[test]
    fn reset_empties_report() {
        let mut stats = ErrorStatistics::new();
        stats.record_error("apple");
        stats.reset();
        assert!(stats.is_empty());
        assert_eq!(hardest(&stats), None);
    }
}
