use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::countries::CountryFormat;
use super::error::IbanError;
use super::types::IbanDetails;
use super::validation::{group_in_blocks, normalize, validate, validate_structure};

/// An IBAN that passed the full validation pipeline.
///
/// Holds the electronic form (no spaces, upper case). `Display` prints the
/// grouped paper form.
///
/// ```rust
/// use iban_validator::Iban;
///
/// let iban: Iban = "gb82 west 1234 5698 7654 32".parse().unwrap();
/// assert_eq!(iban.as_str(), "GB82WEST12345698765432");
/// assert_eq!(iban.bban(), "WEST12345698765432");
/// assert_eq!(iban.to_string(), "GB82 WEST 1234 5698 7654 32");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban {
    electronic: String,
    country: &'static CountryFormat,
}

impl Iban {
    /// Validate and wrap `input`.
    ///
    /// # Errors
    ///
    /// Any [`IbanError`] produced by [`validate`].
    pub fn parse(input: &str) -> Result<Self, IbanError> {
        validate(input)?;
        let electronic = normalize(input);
        let country = validate_structure(&electronic)?;
        Ok(Self {
            electronic,
            country,
        })
    }

    /// Electronic form, e.g. "DE89370400440532013000".
    pub fn as_str(&self) -> &str {
        &self.electronic
    }

    /// Two-letter country code.
    pub fn country_code(&self) -> &str {
        &self.electronic[..2]
    }

    /// The two check digits.
    pub fn check_digits(&self) -> &str {
        &self.electronic[2..4]
    }

    /// Everything after the check digits.
    pub fn bban(&self) -> &str {
        &self.electronic[4..]
    }

    /// Registry entry of the IBAN's country.
    pub fn country(&self) -> &'static CountryFormat {
        self.country
    }

    /// Paper form in blocks of four.
    pub fn formatted(&self) -> String {
        group_in_blocks(&self.electronic)
    }

    /// Rendering details, as returned by [`validate`].
    pub fn details(&self) -> IbanDetails {
        IbanDetails::from_normalized(&self.electronic, self.country)
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Iban {
    type Error = IbanError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.electronic
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for Iban {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.electronic)
    }
}

// Deserialization runs the full pipeline.
impl<'de> Deserialize<'de> for Iban {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
