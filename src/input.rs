//! Parsing of raw console input into typed values.
//!
//! Unparseable input is a [`TrackerError::FormatError`], raised before any store access.

use time::Date;

use crate::calendar::parse_date;
use crate::console::Terminal;
use crate::error::{Result, TrackerError};

pub fn ask_date(term: &mut dyn Terminal, label: &str) -> Result<Date> {
    parse_date(&term.prompt(label)?)
}

/// Blank input means no date.
pub fn ask_optional_date(term: &mut dyn Terminal, label: &str) -> Result<Option<Date>> {
    match optional_text(&term.prompt(label)?) {
        Some(raw) => parse_date(&raw).map(Some),
        None => Ok(None),
    }
}

pub fn ask_calories(term: &mut dyn Terminal, field: &str, label: &str) -> Result<i64> {
    parse_calories(field, &term.prompt(label)?)
}

/// Trimmed, non-blank text.
pub fn require_text(field: &str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(TrackerError::FormatError(format!("{field} must not be empty")));
    }
    Ok(value.to_string())
}

/// Non-blank text, or `None` when the input was left blank.
pub fn optional_text(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// A non-negative whole number of calories.
pub fn parse_calories(field: &str, raw: &str) -> Result<i64> {
    let raw = raw.trim();
    raw.parse::<u32>().map(i64::from).map_err(|_| {
        TrackerError::FormatError(format!(
            "{field} must be a non-negative whole number, got '{raw}'"
        ))
    })
}

pub fn parse_id(field: &str, raw: &str) -> Result<i64> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| TrackerError::FormatError(format!("{field} must be a number, got '{raw}'")))
}

pub fn parse_week_number(raw: &str) -> Result<u8> {
    let raw = raw.trim();
    raw.parse::<u8>()
        .map_err(|_| TrackerError::FormatError(format!("week number must be a number, got '{raw}'")))
}

pub fn parse_year(raw: &str) -> Result<i32> {
    let raw = raw.trim();
    raw.parse::<i32>()
        .map_err(|_| TrackerError::FormatError(format!("year must be a number, got '{raw}'")))
}

#[cfg(test)]
mod input_tests {
    use super::*;

    #[test]
    fn calories_must_be_non_negative_integers() {
        assert_eq!(parse_calories("calories", "105").unwrap(), 105);
        assert_eq!(parse_calories("calories", " 0 ").unwrap(), 0);
        for bad in ["-5", "12.5", "lots", ""] {
            assert!(matches!(
                parse_calories("calories", bad),
                Err(TrackerError::FormatError(_))
            ));
        }
    }

    #[test]
    fn text_is_trimmed_and_required() {
        assert_eq!(require_text("name", "  Bob ").unwrap(), "Bob");
        assert!(matches!(require_text("name", "   "), Err(TrackerError::FormatError(_))));
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" Oats "), Some("Oats".to_string()));
    }

    #[test]
    fn prompts_parse_their_answers() {
        use crate::console::Console;
        use std::io::Cursor;

        let mut term = Console::new(Cursor::new("2024-01-10\n\nnot-a-date\n2000\n"), Vec::new());
        assert_eq!(
            ask_date(&mut term, "Date: ").unwrap(),
            time::macros::date!(2024 - 01 - 10)
        );
        assert_eq!(ask_optional_date(&mut term, "Date: ").unwrap(), None);
        assert!(matches!(
            ask_optional_date(&mut term, "Date: "),
            Err(TrackerError::FormatError(_))
        ));
        assert_eq!(ask_calories(&mut term, "goal", "Goal: ").unwrap(), 2000);
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_id("entry id", "7").unwrap(), 7);
        assert!(parse_id("entry id", "seven").is_err());
        assert_eq!(parse_week_number("25").unwrap(), 25);
        assert!(parse_week_number("week 25").is_err());
        assert_eq!(parse_year("2024").unwrap(), 2024);
    }
}
