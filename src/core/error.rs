use thiserror::Error;

/// Errors raised by the local validation engine.
///
/// A structurally invalid VAT number is not an error: it is the normal
/// `false` verdict. The only failure is not knowing which rule to apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VatError {
    /// The country code is not one of the supported codes.
    #[error("unsupported country code '{0}'")]
    UnsupportedCountry(String),
}
