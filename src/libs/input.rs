//! Parsing of user-typed values.
//!
//! Shared by the interactive prompts (as validators) and by clap (as value
//! parsers). Blank text means "no value" wherever a field is optional.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Hours are stored with two fractional digits.
pub const HOURS_SCALE: u32 = 2;

pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0} invalid number")]
    InvalidNumber(String),

    #[error("{0} has more than two decimal places")]
    TooManyDecimalPlaces(String),

    #[error("{0} hours cannot be negative")]
    NegativeHours(String),

    #[error("Difficulty must be between 1 and 5")]
    DifficultyOutOfRange,

    #[error("{0} is not a valid project ID")]
    InvalidId(String),

    #[error("Project name is required.")]
    MissingName,
}

/// Trimmed text, or `None` when only whitespace was entered.
pub fn non_blank(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// `12.5` becomes `12.50`; `12.345` is rejected rather than rounded.
pub fn parse_hours(input: &str) -> Result<Option<Decimal>, InputError> {
    let Some(text) = non_blank(input) else {
        return Ok(None);
    };

    let mut hours = Decimal::from_str(text).map_err(|_| InputError::InvalidNumber(text.to_string()))?;

    if hours.normalize().scale() > HOURS_SCALE {
        return Err(InputError::TooManyDecimalPlaces(text.to_string()));
    }
    if hours.is_sign_negative() && !hours.is_zero() {
        return Err(InputError::NegativeHours(text.to_string()));
    }

    hours.rescale(HOURS_SCALE);
    // Values near Decimal::MAX have no room for the fractional digits.
    if hours.scale() != HOURS_SCALE {
        return Err(InputError::InvalidNumber(text.to_string()));
    }
    Ok(Some(hours))
}

pub fn parse_difficulty(input: &str) -> Result<Option<i32>, InputError> {
    let Some(text) = non_blank(input) else {
        return Ok(None);
    };

    let difficulty: i32 = text.parse().map_err(|_| InputError::InvalidNumber(text.to_string()))?;
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(InputError::DifficultyOutOfRange);
    }

    Ok(Some(difficulty))
}

pub fn parse_id(input: &str) -> Result<i32, InputError> {
    let text = input.trim();
    match text.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(InputError::InvalidId(text.to_string())),
    }
}

pub fn parse_name(input: &str) -> Result<String, InputError> {
    non_blank(input).map(str::to_string).ok_or(InputError::MissingName)
}

pub fn parse_notes(input: &str) -> Result<Option<String>, InputError> {
    Ok(non_blank(input).map(str::to_string))
}

// Value parsers for required values (clap flags, the add prompt): blank is an error.

pub fn hours_arg(input: &str) -> Result<Decimal, InputError> {
    parse_hours(input)?.ok_or_else(|| InputError::InvalidNumber(input.to_string()))
}

pub fn difficulty_arg(input: &str) -> Result<i32, InputError> {
    parse_difficulty(input)?.ok_or(InputError::DifficultyOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_are_normalised_to_two_places() {
        assert_eq!(parse_hours("12.5").unwrap().unwrap().to_string(), "12.50");
        assert_eq!(parse_hours(" 10 ").unwrap().unwrap().to_string(), "10.00");
        assert_eq!(parse_hours("7.250").unwrap().unwrap().to_string(), "7.25");
    }

    #[test]
    fn blank_hours_mean_no_value() {
        assert_eq!(parse_hours("   ").unwrap(), None);
        assert_eq!(parse_hours("").unwrap(), None);
    }

    #[test]
    fn malformed_hours_are_rejected() {
        assert_eq!(parse_hours("abc"), Err(InputError::InvalidNumber("abc".to_string())));
        assert_eq!(parse_hours("1.234"), Err(InputError::TooManyDecimalPlaces("1.234".to_string())));
        assert_eq!(parse_hours("-2"), Err(InputError::NegativeHours("-2".to_string())));
        assert_eq!(InputError::InvalidNumber("abc".to_string()).to_string(), "abc invalid number");
    }

    #[test]
    fn hours_too_large_for_two_places_are_rejected() {
        let huge = "79228162514264337593543950335";
        assert_eq!(parse_hours(huge), Err(InputError::InvalidNumber(huge.to_string())));
        assert!(hours_arg(huge).is_err());
    }

    #[test]
    fn difficulty_must_be_in_range() {
        assert_eq!(parse_difficulty("3").unwrap(), Some(3));
        assert_eq!(parse_difficulty("1").unwrap(), Some(1));
        assert_eq!(parse_difficulty("5").unwrap(), Some(5));
        assert_eq!(parse_difficulty("0"), Err(InputError::DifficultyOutOfRange));
        assert_eq!(parse_difficulty("6"), Err(InputError::DifficultyOutOfRange));
        assert_eq!(parse_difficulty("hard"), Err(InputError::InvalidNumber("hard".to_string())));
        assert_eq!(parse_difficulty(" ").unwrap(), None);
    }

    #[test]
    fn ids_are_positive_integers() {
        assert_eq!(parse_id(" 42 "), Ok(42));
        assert!(parse_id("0").is_err());
        assert!(parse_id("-1").is_err());
        assert!(parse_id("x").is_err());
    }

    #[test]
    fn names_must_not_be_blank() {
        assert_eq!(parse_name("  Birdhouse "), Ok("Birdhouse".to_string()));
        assert_eq!(parse_name("   "), Err(InputError::MissingName));
        assert_eq!(parse_notes("  "), Ok(None));
        assert_eq!(parse_notes(" oak "), Ok(Some("oak".to_string())));
    }

    #[test]
    fn flag_parsers_reject_blank_values() {
        assert!(hours_arg("").is_err());
        assert_eq!(difficulty_arg(" "), Err(InputError::DifficultyOutOfRange));
        assert_eq!(difficulty_arg("2"), Ok(2));
    }
}
