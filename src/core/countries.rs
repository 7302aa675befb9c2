//! IBAN country format registry.
//!
//! Country code, registered total IBAN length, and display name for every
//! supported country, following the SWIFT IBAN registry. One fixed length
//! per country; the BBAN field layout is not modeled.

use serde::Serialize;

/// Registry entry for one IBAN country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CountryFormat {
    /// ISO 3166-1 alpha-2 code (e.g. "DE").
    pub code: &'static str,
    /// Total IBAN length including country code and check digits.
    pub length: usize,
    /// English country name.
    pub name: &'static str,
}

impl CountryFormat {
    const fn new(code: &'static str, length: usize, name: &'static str) -> Self {
        Self { code, length, name }
    }

    /// Flag emoji built from the two regional indicator symbols of the code.
    ///
    /// Display-only; has no bearing on validation.
    pub fn flag(&self) -> String {
        self.code
            .bytes()
            .filter(u8::is_ascii_uppercase)
            .filter_map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
            .collect()
    }

    /// Length of the BBAN part (everything after the check digits).
    pub fn bban_length(&self) -> usize {
        self.length - 4
    }
}

/// Look up the registry entry for an upper-case country code.
///
/// Absence means the country is unknown or has no IBAN.
pub fn lookup(code: &str) -> Option<&'static CountryFormat> {
    REGISTRY
        .binary_search_by(|entry| entry.code.cmp(code))
        .ok()
        .map(|idx| &REGISTRY[idx])
}

/// Check whether `code` is a supported IBAN country.
pub fn is_supported_country(code: &str) -> bool {
    lookup(code).is_some()
}

/// All registry entries, ordered by country code.
pub fn supported_countries() -> &'static [CountryFormat] {
    REGISTRY
}

/// Sorted by code for binary search.
static REGISTRY: &[CountryFormat] = &[
    CountryFormat::new("AD", 24, "Andorra"),
    CountryFormat::new("AE", 23, "United Arab Emirates"),
    CountryFormat::new("AL", 28, "Albania"),
    CountryFormat::new("AT", 20, "Austria"),
    CountryFormat::new("AZ", 28, "Azerbaijan"),
    CountryFormat::new("BA", 20, "Bosnia and Herzegovina"),
    CountryFormat::new("BE", 16, "Belgium"),
    CountryFormat::new("BG", 22, "Bulgaria"),
    CountryFormat::new("BH", 22, "Bahrain"),
    CountryFormat::new("BI", 27, "Burundi"),
    CountryFormat::new("BR", 29, "Brazil"),
    CountryFormat::new("BY", 28, "Belarus"),
    CountryFormat::new("CH", 21, "Switzerland"),
    CountryFormat::new("CR", 22, "Costa Rica"),
    CountryFormat::new("CY", 28, "Cyprus"),
    CountryFormat::new("CZ", 24, "Czech Republic"),
    CountryFormat::new("DE", 22, "Germany"),
    CountryFormat::new("DJ", 27, "Djibouti"),
    CountryFormat::new("DK", 18, "Denmark"),
    CountryFormat::new("DO", 28, "Dominican Republic"),
    CountryFormat::new("EE", 20, "Estonia"),
    CountryFormat::new("EG", 29, "Egypt"),
    CountryFormat::new("ES", 24, "Spain"),
    CountryFormat::new("FI", 18, "Finland"),
    CountryFormat::new("FK", 18, "Falkland Islands"),
    CountryFormat::new("FO", 18, "Faroe Islands"),
    CountryFormat::new("FR", 27, "France"),
    CountryFormat::new("GB", 22, "United Kingdom"),
    CountryFormat::new("GE", 22, "Georgia"),
    CountryFormat::new("GI", 23, "Gibraltar"),
    CountryFormat::new("GL", 18, "Greenland"),
    CountryFormat::new("GR", 27, "Greece"),
    CountryFormat::new("GT", 28, "Guatemala"),
    CountryFormat::new("HN", 28, "Honduras"),
    CountryFormat::new("HR", 21, "Croatia"),
    CountryFormat::new("HU", 28, "Hungary"),
    CountryFormat::new("IE", 22, "Ireland"),
    CountryFormat::new("IL", 23, "Israel"),
    CountryFormat::new("IQ", 23, "Iraq"),
    CountryFormat::new("IS", 26, "Iceland"),
    CountryFormat::new("IT", 27, "Italy"),
    CountryFormat::new("JO", 30, "Jordan"),
    CountryFormat::new("KW", 30, "Kuwait"),
    CountryFormat::new("KZ", 20, "Kazakhstan"),
    CountryFormat::new("LB", 28, "Lebanon"),
    CountryFormat::new("LC", 32, "Saint Lucia"),
    CountryFormat::new("LI", 21, "Liechtenstein"),
    CountryFormat::new("LT", 20, "Lithuania"),
    CountryFormat::new("LU", 20, "Luxembourg"),
    CountryFormat::new("LV", 21, "Latvia"),
    CountryFormat::new("LY", 25, "Libya"),
    CountryFormat::new("MC", 27, "Monaco"),
    CountryFormat::new("MD", 24, "Moldova"),
    CountryFormat::new("ME", 22, "Montenegro"),
    CountryFormat::new("MK", 19, "North Macedonia"),
    CountryFormat::new("MN", 20, "Mongolia"),
    CountryFormat::new("MR", 27, "Mauritania"),
    CountryFormat::new("MT", 31, "Malta"),
    CountryFormat::new("MU", 30, "Mauritius"),
    CountryFormat::new("NL", 18, "Netherlands"),
    CountryFormat::new("NO", 15, "Norway"),
    CountryFormat::new("OM", 23, "Oman"),
    CountryFormat::new("PK", 24, "Pakistan"),
    CountryFormat::new("PL", 28, "Poland"),
    CountryFormat::new("PS", 29, "Palestine"),
    CountryFormat::new("PT", 25, "Portugal"),
    CountryFormat::new("QA", 29, "Qatar"),
    CountryFormat::new("RO", 24, "Romania"),
    CountryFormat::new("RS", 22, "Serbia"),
    CountryFormat::new("SA", 24, "Saudi Arabia"),
    CountryFormat::new("SC", 31, "Seychelles"),
    CountryFormat::new("SD", 18, "Sudan"),
    CountryFormat::new("SE", 24, "Sweden"),
    CountryFormat::new("SI", 19, "Slovenia"),
    CountryFormat::new("SK", 24, "Slovakia"),
    CountryFormat::new("SM", 27, "San Marino"),
    CountryFormat::new("SO", 23, "Somalia"),
    CountryFormat::new("ST", 25, "Sao Tome and Principe"),
    CountryFormat::new("SV", 28, "El Salvador"),
    CountryFormat::new("TL", 23, "Timor-Leste"),
    CountryFormat::new("TN", 24, "Tunisia"),
    CountryFormat::new("TR", 26, "Turkey"),
    CountryFormat::new("UA", 29, "Ukraine"),
    CountryFormat::new("VA", 22, "Vatican City"),
    CountryFormat::new("VG", 24, "British Virgin Islands"),
    CountryFormat::new("XK", 20, "Kosovo"),
    CountryFormat::new("YE", 30, "Yemen"),
];
