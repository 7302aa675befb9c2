//! The IBAN validation pipeline.
//!
//! Stages run in a fixed order and the first failure wins:
//! emptiness, normalization, country, length, character set, checksum.

use super::checksum::{ensure_alphanumeric, remainder};
use super::countries::{CountryFormat, lookup};
use super::error::IbanError;
use super::types::{IbanDetails, ValidationResult};

/// Validate a raw IBAN candidate.
///
/// Accepts any spacing and letter case. Every failure is returned as an
/// [`IbanError`]; this function never panics.
///
/// ```rust
/// use iban_validator::*;
///
/// let details = validate("de89 3704 0044 0532 0130 00").unwrap();
/// assert_eq!(details.country_name, "Germany");
/// assert_eq!(details.formatted_iban, "DE89 3704 0044 0532 0130 00");
///
/// let err = validate("DE00370400440532013000").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidChecksum);
/// ```
pub fn validate(input: &str) -> ValidationResult {
    run_pipeline(input)
        .inspect(|details| log::debug!("accepted IBAN for {}", details.country_code))
        .inspect_err(|err| {
            log::trace!(
                "rejected IBAN candidate ({} chars): {}",
                input.chars().count(),
                err.kind()
            )
        })
}

fn run_pipeline(input: &str) -> ValidationResult {
    if input.chars().all(is_blank) {
        return Err(IbanError::Empty);
    }

    let normalized = normalize(input);
    let country = check_structure(&normalized)?;

    let remainder = remainder(&normalized);
    if remainder != 1 {
        return Err(IbanError::InvalidChecksum { remainder });
    }

    Ok(IbanDetails::from_normalized(&normalized, country))
}

/// Country, length, and character-set checks, without the checksum.
///
/// # Errors
///
/// The first of [`IbanError::InvalidCountry`], [`IbanError::InvalidLength`]
/// or [`IbanError::InvalidFormat`] that applies.
pub fn validate_structure(input: &str) -> Result<&'static CountryFormat, IbanError> {
    check_structure(&normalize(input))
}

fn check_structure(normalized: &str) -> Result<&'static CountryFormat, IbanError> {
    let code: String = normalized.chars().take(2).collect();
    let Some(country) = lookup(&code) else {
        return Err(IbanError::InvalidCountry { code });
    };

    let actual = normalized.chars().count();
    if actual != country.length {
        return Err(IbanError::InvalidLength {
            expected: country.length,
            actual,
        });
    }

    ensure_alphanumeric(normalized)?;
    Ok(country)
}

/// Remove all whitespace and upper-case all letters.
///
/// A byte order mark (U+FEFF) counts as whitespace, as it does for text
/// pasted from browsers. Total: malformed input still yields a best-effort
/// result.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|&c| !is_blank(c))
        .flat_map(char::to_uppercase)
        .collect()
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Normalize, then group into blocks of four separated by single spaces.
pub fn format(input: &str) -> String {
    group_in_blocks(&normalize(input))
}

pub(crate) fn group_in_blocks(normalized: &str) -> String {
    let mut out = String::with_capacity(normalized.len() + normalized.len() / 4);
    for (i, c) in normalized.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// First two characters of the normalized input.
pub fn country_code(input: &str) -> String {
    normalize(input).chars().take(2).collect()
}

/// Characters 2 and 3 of the normalized input.
pub fn check_digits(input: &str) -> String {
    normalize(input).chars().skip(2).take(2).collect()
}

/// Registry entry for the country prefix of `input`, if supported.
pub fn country_info(input: &str) -> Option<&'static CountryFormat> {
    lookup(&country_code(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    const DE_VALID: &str = "DE89370400440532013000";

    fn kind_of(input: &str) -> ErrorKind {
        validate(input).unwrap_err().kind()
    }

    #[test]
    fn normalize_strips_and_uppercases() {
        assert_eq!(normalize(" de89 3704\t0044\n"), "DE8937040044");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("ab-cd"), "AB-CD");
    }

    #[test]
    fn byte_order_mark_is_blank() {
        assert_eq!(normalize("\u{FEFF}de89 3704"), "DE893704");
        assert_eq!(validate("\u{FEFF}"), Err(IbanError::Empty));
        assert_eq!(validate(" \u{FEFF}\t"), Err(IbanError::Empty));
        assert!(validate("\u{FEFF}DE89370400440532013000").is_ok());
    }

    #[test]
    fn format_groups_by_four() {
        assert_eq!(format(DE_VALID), "DE89 3704 0044 0532 0130 00");
        assert_eq!(format("abcd"), "ABCD");
        assert_eq!(format("abcde"), "ABCD E");
        assert_eq!(format("   "), "");
    }

    #[test]
    fn accessors() {
        assert_eq!(country_code("de89"), "DE");
        assert_eq!(country_code("d"), "D");
        assert_eq!(check_digits("de 89 3704"), "89");
        assert_eq!(check_digits("DE"), "");
        assert_eq!(country_info(DE_VALID).unwrap().name, "Germany");
        assert!(country_info("ZZ00").is_none());
    }

    #[test]
    fn valid_german() {
        let details = validate(DE_VALID).unwrap();
        assert_eq!(details.country_code, "DE");
        assert_eq!(details.country_name, "Germany");
        assert_eq!(details.check_digits, "89");
        assert_eq!(details.length, 22);
        assert_eq!(details.formatted_iban, "DE89 3704 0044 0532 0130 00");
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(validate(""), Err(IbanError::Empty));
        assert_eq!(validate("   "), Err(IbanError::Empty));
        assert_eq!(validate("\t\n"), Err(IbanError::Empty));
    }

    #[test]
    fn unknown_country() {
        assert_eq!(
            validate("ZZ02TEST0000000000"),
            Err(IbanError::InvalidCountry { code: "ZZ".into() })
        );
        assert_eq!(kind_of("D"), ErrorKind::InvalidCountry);
        assert_eq!(kind_of("12345678"), ErrorKind::InvalidCountry);
    }

    #[test]
    fn wrong_length() {
        assert_eq!(
            validate("DE8937040044053201300"),
            Err(IbanError::InvalidLength {
                expected: 22,
                actual: 21
            })
        );
    }

    #[test]
    fn length_checked_before_charset() {
        assert_eq!(kind_of("DE89-3704"), ErrorKind::InvalidLength);
    }

    #[test]
    fn illegal_character() {
        assert_eq!(
            validate("DE89370400440532013-00"),
            Err(IbanError::InvalidFormat {
                character: '-',
                position: 19
            })
        );
    }

    #[test]
    fn bad_checksum() {
        assert_eq!(kind_of("DE00370400440532013000"), ErrorKind::InvalidChecksum);
    }

    #[test]
    fn structure_without_checksum() {
        let country = validate_structure("DE00370400440532013000").unwrap();
        assert_eq!(country.code, "DE");
        assert!(matches!(
            validate_structure("DE0037"),
            Err(IbanError::InvalidLength { .. })
        ));
    }

    #[test]
    fn non_ascii_is_invalid_format() {
        // 22 characters, one of them a non-ASCII letter.
        assert_eq!(kind_of("DE8937040044053201300É"), ErrorKind::InvalidFormat);
    }
}
