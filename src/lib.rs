//! # euvat
//!
//! European VAT identification number validation in two halves:
//!
//! - an offline checksum engine with one rule per member state, which
//!   rejects structurally invalid numbers without a network round trip;
//! - a client for the EU VIES service (feature `vies`), which confirms
//!   a number authoritatively and can match trader details.
//!
//! The two halves never call each other. Callers compose them, typically
//! running the local check first and only asking VIES about numbers that
//! pass it.
//!
//! ## Quick Start
//!
//! ```rust
//! use euvat::{CountryCode, VatError, validate, validate_vat_id};
//!
//! assert_eq!(validate("DE", "111111125"), Ok(true));
//! assert_eq!(validate("AT", "U 102 230 05"), Ok(false));
//! assert_eq!(validate_vat_id("NL010000446B01"), Ok(true));
//! assert!(CountryCode::Fr.validate("K7399859412"));
//!
//! // Unknown codes are an error, not an invalid verdict.
//! assert_eq!(
//!     validate("US", "123456789"),
//!     Err(VatError::UnsupportedCountry("US".into()))
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Country codes, normalizer, checksum rules |
//! | `vies` | Async VIES REST client (reqwest + tokio) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod checksum;

#[cfg(feature = "vies")]
pub mod vies;

// Re-export the engine at crate root for convenience
#[cfg(feature = "core")]
pub use crate::checksum::{VatCheck, check, validate, validate_vat_id};
#[cfg(feature = "core")]
pub use crate::core::*;
