//! ISO 7064 MOD-97-10 checksum.
//!
//! The IBAN is rearranged (first four characters moved to the end), every
//! letter is replaced by two digits (`A` = 10 … `Z` = 35), and the resulting
//! decimal number is reduced modulo 97. A valid IBAN leaves remainder 1.

use super::error::IbanError;
use super::validation::normalize;

/// Digits reduced per step. The carried remainder is below 97, so a block
/// never exceeds 999_999_999 and fits in a `u32`.
const BLOCK_DIGITS: usize = 9;

/// Reduce a decimal digit string modulo 97 without big-integer arithmetic.
///
/// Takes up to nine leading digits (the carried remainder counts towards the
/// nine), reduces them, and continues with the rest. Returns `None` if
/// `digits` contains anything other than ASCII digits. The empty string
/// reduces to 0.
pub fn mod97(digits: &str) -> Option<u32> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut remainder = 0u32;
    let mut rest = digits.as_bytes();
    while !rest.is_empty() {
        let take = (BLOCK_DIGITS - digit_count(remainder)).min(rest.len());
        let (block, tail) = rest.split_at(take);
        remainder = block
            .iter()
            .fold(remainder, |acc, d| acc * 10 + u32::from(d - b'0'))
            % 97;
        rest = tail;
    }
    Some(remainder)
}

/// MOD-97-10 remainder of an IBAN-shaped input.
///
/// The input is normalized first. Only the character set is checked here;
/// country and length are not.
///
/// # Errors
///
/// Returns [`IbanError::InvalidFormat`] if the normalized input contains a
/// character outside `[A-Z0-9]`.
pub fn checksum(input: &str) -> Result<u32, IbanError> {
    let normalized = normalize(input);
    ensure_alphanumeric(&normalized)?;
    Ok(remainder(&normalized))
}

/// Remainder of an already normalized, alphanumeric IBAN.
pub(crate) fn remainder(normalized: &str) -> u32 {
    let (head, tail) = normalized.split_at(normalized.len().min(4));
    let digits = expand(tail.chars().chain(head.chars()));
    // `expand` only emits ASCII digits.
    mod97(&digits).unwrap_or_default()
}

/// Check whether the MOD-97-10 remainder of `input` is exactly 1.
pub fn is_valid_checksum(input: &str) -> bool {
    checksum(input) == Ok(1)
}

/// Generate the two check digits for a country code and BBAN.
///
/// Computes `98 - (BBAN + country + "00") mod 97`, zero-padded. Both inputs
/// are normalized first. The country is not required to be in the registry.
///
/// # Errors
///
/// * [`IbanError::InvalidCountry`] if `country` is not two ASCII letters.
/// * [`IbanError::InvalidFormat`] if the BBAN contains a character outside `[A-Z0-9]`.
pub fn compute_check_digits(country: &str, bban: &str) -> Result<String, IbanError> {
    let country = normalize(country);
    if country.len() != 2 || !country.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(IbanError::InvalidCountry { code: country });
    }
    let bban = normalize(bban);
    ensure_alphanumeric(&bban)?;

    let digits = expand(bban.chars().chain(country.chars()).chain("00".chars()));
    let remainder = mod97(&digits).unwrap_or_default();
    Ok(format!("{:02}", 98 - remainder))
}

/// Reject the first character outside `[A-Z0-9]`, reporting its position.
pub(crate) fn ensure_alphanumeric(normalized: &str) -> Result<(), IbanError> {
    match normalized
        .chars()
        .enumerate()
        .find(|(_, c)| !(c.is_ascii_uppercase() || c.is_ascii_digit()))
    {
        Some((position, character)) => Err(IbanError::InvalidFormat {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Replace letters with their two-digit values; digits pass through.
fn expand(chars: impl Iterator<Item = char>) -> String {
    let mut out = String::with_capacity(64);
    for c in chars {
        if c.is_ascii_uppercase() {
            let value = c as u8 - b'A' + 10;
            out.push(char::from(b'0' + value / 10));
            out.push(char::from(b'0' + value % 10));
        } else {
            out.push(c);
        }
    }
    out
}

fn digit_count(n: u32) -> usize {
    if n == 0 { 0 } else { n.ilog10() as usize + 1 }
}
