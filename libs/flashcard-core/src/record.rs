//! Line-delimited card records.
//!
//! # Format
//! ```text
//! {"card":"apple","definition":"fruit"}
//! {"card":"car","definition":"vehicle"}
//! {"card":"blank"}
//! ```
//!
//! One JSON object per line. A field holding the empty string is left out,
//! and a missing field reads back as the empty string.

use crate::error::RecordError;
use crate::types::Card;

/// Parse record content into cards, in file order.
///
/// Blank lines are skipped. The first malformed line fails the whole parse.
pub fn parse(content: &str) -> Result<Vec<Card>, RecordError> {
    let mut cards = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let card = serde_json::from_str::<Card>(line).map_err(|source| {
            RecordError::InvalidRecord {
                line: idx + 1,
                source,
            }
        })?;
        cards.push(card);
    }

    Ok(cards)
}

/// Render cards as records, one per line with a trailing newline.
pub fn render<'a, I>(cards: I) -> Result<String, RecordError>
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut out = String::new();
    for card in cards {
        out.push_str(&serde_json::to_string(card)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_multiple_records() {
        let input = "{\"card\":\"apple\",\"definition\":\"fruit\"}\n{\"card\":\"car\",\"definition\":\"vehicle\"}\n";
        let cards = parse(input).unwrap();
        assert_eq!(
            cards,
            vec![Card::new("apple", "fruit"), Card::new("car", "vehicle")]
        );
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let cards = parse("{\"card\":\"blank\"}\n{}").unwrap();
        assert_eq!(cards, vec![Card::new("blank", ""), Card::new("", "")]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let cards = parse("\n{\"card\":\"a\",\"definition\":\"1\"}\n\n   \n").unwrap();
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn reject_malformed_line() {
        let input = "{\"card\":\"a\",\"definition\":\"1\"}\nnot json";
        let result = parse(input);
        assert!(matches!(result, Err(RecordError::InvalidRecord { line: 2, .. })));
    }

    #[test]
    fn render_omits_empty_fields() {
        let cards = [Card::new("apple", "fruit"), Card::new("blank", "")];
        let output = render(&cards).unwrap();
        assert_eq!(
            output,
            "{\"card\":\"apple\",\"definition\":\"fruit\"}\n{\"card\":\"blank\"}\n"
        );
    }

    #[test]
    fn render_escapes_quotes() {
        let cards = [Card::new("say \"hi\"", "greeting")];
        let output = render(&cards).unwrap();
        assert_eq!(parse(&output).unwrap(), cards.to_vec());
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse("").unwrap().is_empty());
    }
}
