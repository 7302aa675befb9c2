use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable classification of a validation failure.
///
/// Exactly one kind is reported per failed validation. The pipeline checks
/// them in declaration order and stops at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Input is empty or whitespace-only.
    Empty,
    /// The first two characters are not a supported country code.
    InvalidCountry,
    /// Length differs from the registered length for the country.
    InvalidLength,
    /// A character outside `[A-Z0-9]` is present.
    InvalidFormat,
    /// The MOD-97-10 remainder is not 1.
    InvalidChecksum,
}

impl ErrorKind {
    /// Stable code for this kind (e.g. `"INVALID_LENGTH"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::InvalidCountry => "INVALID_COUNTRY",
            Self::InvalidLength => "INVALID_LENGTH",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::InvalidChecksum => "INVALID_CHECKSUM",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an input was rejected as an IBAN.
///
/// The `Display` output is a locale-independent English message. Callers
/// that show localized text should key their string table on [`IbanError::kind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IbanError {
    /// Input is blank.
    #[error("please enter an IBAN number")]
    Empty,

    /// Unknown or unsupported country prefix.
    #[error("invalid country code '{code}'")]
    InvalidCountry {
        /// The (normalized) prefix that failed the registry lookup.
        code: String,
    },

    /// Normalized length does not match the country's registered length.
    #[error("invalid length: expected {expected} characters, got {actual}")]
    InvalidLength {
        /// Registered length for the country.
        expected: usize,
        /// Length of the normalized input.
        actual: usize,
    },

    /// Characters other than ASCII letters and digits.
    #[error("IBAN can only contain letters and numbers (found '{character}' at position {position})")]
    InvalidFormat {
        /// First offending character.
        character: char,
        /// Zero-based character position in the normalized input.
        position: usize,
    },

    /// MOD-97-10 check failed.
    #[error("invalid IBAN checksum")]
    InvalidChecksum {
        /// The computed remainder (anything but 1).
        remainder: u32,
    },
}

impl IbanError {
    /// The taxonomy kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty => ErrorKind::Empty,
            Self::InvalidCountry { .. } => ErrorKind::InvalidCountry,
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::InvalidChecksum { .. } => ErrorKind::InvalidChecksum,
        }
    }

    /// Human-readable description, identical to the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
