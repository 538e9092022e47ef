use thiserror::Error;

use crate::core::VatError;

/// Error from the VIES client.
///
/// An invalid VAT number is not an error: VIES answers with
/// `valid: false`, which surfaces as [`ViesResult::valid`](super::ViesResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ViesError {
    /// The country code is unknown or not served by VIES (`GB`, `EU`).
    #[error("VIES does not serve country code '{0}'")]
    UnsupportedCountry(String),
    /// Network or HTTP transport error, after retries.
    #[error("VIES network error: {0}")]
    Network(String),
    /// The VIES API returned an error (e.g. member state unavailable).
    #[error("VIES API error: {0}")]
    ApiError(String),
    /// Failed to parse the response.
    #[error("VIES parse error: {0}")]
    ParseError(String),
}

impl From<VatError> for ViesError {
    fn from(err: VatError) -> Self {
        match err {
            VatError::UnsupportedCountry(code) => Self::UnsupportedCountry(code),
        }
    }
}
