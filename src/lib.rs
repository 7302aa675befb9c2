//! # iban-validator
//!
//! Validation and formatting of International Bank Account Numbers.
//!
//! An IBAN is checked against a static registry of per-country lengths and
//! the ISO 7064 MOD-97-10 checksum. Failures are ordinary values of
//! [`IbanError`], classified by [`ErrorKind`].
//!
//! ## Quick Start
//!
//! ```rust
//! use iban_validator::*;
//!
//! let details = validate("DE89 3704 0044 0532 0130 00").unwrap();
//! assert_eq!(details.country_code, "DE");
//! assert_eq!(details.check_digits, "89");
//! assert_eq!(details.length, 22);
//!
//! match validate("DE8937040044053201300") {
//!     Err(err) => assert_eq!(err.kind(), ErrorKind::InvalidLength),
//!     Ok(_) => unreachable!(),
//! }
//!
//! assert_eq!(format("de89370400440532013000"), "DE89 3704 0044 0532 0130 00");
//! assert_eq!(compute_check_digits("DE", "370400440532013000").unwrap(), "89");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Registry, checksum, validation, [`Iban`] type |
//! | `cli` | The `iban` command-line tool |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
