use serde::{Deserialize, Serialize};

use super::countries::CountryFormat;
use super::error::IbanError;
use super::validation::group_in_blocks;

/// Outcome of [`validate`](super::validate): details of a valid IBAN, or the
/// reason it was rejected.
pub type ValidationResult = Result<IbanDetails, IbanError>;

/// Everything a caller needs to render a valid IBAN.
///
/// All fields are derived from the normalized input and the registry entry
/// of its country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IbanDetails {
    /// Normalized IBAN in blocks of four, e.g. "DE89 3704 0044 0532 0130 00".
    pub formatted_iban: String,
    /// Two-letter country code.
    pub country_code: String,
    /// English country name from the registry.
    pub country_name: String,
    /// Flag emoji for display.
    pub country_flag: String,
    /// The two check digits following the country code.
    pub check_digits: String,
    /// Number of characters in the normalized IBAN.
    pub length: usize,
}

impl IbanDetails {
    /// Build details from a normalized IBAN that passed every check.
    pub(crate) fn from_normalized(normalized: &str, country: &CountryFormat) -> Self {
        Self {
            formatted_iban: group_in_blocks(normalized),
            country_code: normalized[..2].to_string(),
            country_name: country.name.to_string(),
            country_flag: country.flag(),
            check_digits: normalized[2..4].to_string(),
            length: normalized.len(),
        }
    }
}
