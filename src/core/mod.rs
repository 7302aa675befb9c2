//! Country registry, MOD-97-10 checksum, and the validation pipeline.
//!
//! The registry is a static, sorted table; every function here is pure and
//! safe to call from any number of threads without synchronization.

mod checksum;
pub mod countries;
mod error;
mod iban;
mod types;
mod validation;

pub use checksum::{checksum, compute_check_digits, is_valid_checksum, mod97};
pub use countries::{CountryFormat, is_supported_country, lookup, supported_countries};
pub use error::*;
pub use iban::Iban;
pub use types::*;
pub use validation::{
    check_digits, country_code, country_info, format, normalize, validate, validate_structure,
};
