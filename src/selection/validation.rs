//! Input validation for the "add item" action.

use serde::Serialize;
use thiserror::Error;

/// Reasons a selection is rejected. The messages are shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationError {
    #[error("No food option selected")]
    NoNameInput,
    #[error("Food option not found")]
    NameNotFound,
    #[error("No mass input")]
    NoMassInput,
    #[error("Invalid mass input. Please enter a positive integer")]
    InvalidMass,
}

/// Parse a mass in whole grams.
///
/// Whitespace and underscores are dropped first so grouped entry like
/// `1 500` or `1_000` works. Only a completely empty input counts as
/// missing; anything else that is not a positive 32-bit integer is invalid.
pub fn parse_mass(text: &str) -> Result<u32, ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::NoMassInput);
    }

    let digits: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();

    match digits.parse::<i32>() {
        Ok(value) if value > 0 => u32::try_from(value).map_err(|_| ValidationError::InvalidMass),
        _ => Err(ValidationError::InvalidMass),
    }
}
