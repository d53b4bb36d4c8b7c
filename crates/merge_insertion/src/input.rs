use thiserror::Error;

use crate::Value;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("argument {position} is empty")]
    Empty { position: usize },
    #[error("argument {position} ({token:?}) is not a non-negative integer")]
    NotDigits { position: usize, token: String },
    #[error("argument {position} ({token}) exceeds {max}", max = Value::MAX)]
    OutOfRange { position: usize, token: String },
}

impl InputError {
    /// 1-based position of the rejected argument.
    pub fn position(&self) -> usize {
        match self {
            Self::Empty { position }
            | Self::NotDigits { position, .. }
            | Self::OutOfRange { position, .. } => *position,
        }
    }
}

/// Parses a single digits-only token.
pub fn parse_value(position: usize, token: &str) -> Result<Value, InputError> {
    if token.is_empty() {
        return Err(InputError::Empty { position });
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotDigits {
            position,
            token: token.to_owned(),
        });
    }
    // Only overflow can fail past the digit check.
    token.parse::<Value>().map_err(|_| InputError::OutOfRange {
        position,
        token: token.to_owned(),
    })
}

/// Validates every token before any value is returned. Zero tokens yield an
/// empty sequence.
pub fn parse_values<I, T>(tokens: I) -> Result<Vec<Value>, InputError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| parse_value(i + 1, token.as_ref()))
        .collect()
}
