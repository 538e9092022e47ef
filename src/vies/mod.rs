//! EU VIES REST API client for VAT number validation.
//!
//! VIES answers whether a number is currently registered, which no
//! checksum can tell. The service is free and needs no authentication,
//! but member state backends are regularly unavailable; such answers
//! surface as [`ViesError::ApiError`].
//!
//! ```no_run
//! use euvat::CountryCode;
//! use euvat::vies::{ViesClient, ViesConfig};
//!
//! # async fn run() -> Result<(), euvat::vies::ViesError> {
//! let client = ViesClient::new(ViesConfig::default())?;
//! let result = client.check_vat(CountryCode::De, "136695976").await?;
//! println!("valid: {}, name: {:?}", result.valid, result.name);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod retry;
mod types;

pub use client::ViesClient;
pub use config::{VIES_URL, ViesConfig};
pub use error::ViesError;
pub use types::{
    CheckVatRequest, MemberStateStatus, ServiceStatus, TraderDetails, TraderMatch, TraderMatches,
    ViesResult,
};

use crate::core::CountryCode;

/// Check a VAT number against the EU VIES API with the default config.
///
/// `country_code` is the 2-letter VAT prefix (e.g. "DE").
/// `vat_number` is the number part without the country prefix.
///
/// Builds a fresh client per call; use [`ViesClient`] for repeated checks.
///
/// # Errors
///
/// Returns `ViesError::UnsupportedCountry` for unknown or non-VIES codes,
/// `ViesError::Network` on connection issues,
/// `ViesError::ApiError` if a member state is unavailable,
/// `ViesError::ParseError` on unexpected response formats.
pub async fn check_vies(country_code: &str, vat_number: &str) -> Result<ViesResult, ViesError> {
    let country: CountryCode = country_code.parse()?;
    ViesClient::new(ViesConfig::default())?
        .check_vat(country, vat_number)
        .await
}
