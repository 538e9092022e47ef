//! Offline VAT number checksum validation.
//!
//! Each supported country has one rule, a plain `fn(&str) -> bool` that
//! checks length, character set and check digits of a normalized number
//! (country prefix removed). Rules never panic: anything malformed is
//! simply `false`.
//!
//! The registration is the exhaustive `match` in [`CountryCode::rule`],
//! so adding a variant without a rule does not compile.
//!
//! # Example
//!
//! ```
//! use euvat::checksum::validate;
//!
//! assert_eq!(validate("BE", "0776.091.951"), Ok(true));
//! assert_eq!(validate("DE", "111111124"), Ok(false));
//! assert!(validate("XX", "111111125").is_err());
//! ```

mod at;
mod be;
mod bg;
mod cy;
mod cz;
mod de;
mod digits;
mod dk;
mod ee;
mod el;
mod es;
mod fi;
mod fr;
mod gb;
mod hr;
mod hu;
mod ie;
mod it;
mod lt;
mod lu;
mod lv;
mod mt;
mod nl;
mod pl;
mod pt;
mod ro;
mod se;
mod si;
mod sk;

use serde::{Deserialize, Serialize};

use crate::core::{CountryCode, VatError, normalize};

/// A country checksum rule over a normalized, prefix-less VAT number.
pub type CountryRule = fn(&str) -> bool;

/// Outcome of a local check, with the number as it was validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatCheck {
    /// Country whose rule was applied.
    pub country: CountryCode,
    /// The number after separator stripping, without country prefix.
    pub number: String,
    /// Whether the number passed the country's checksum rule.
    pub valid: bool,
}

impl CountryCode {
    /// The checksum rule registered for this country.
    ///
    /// The rule expects an already normalized number; use
    /// [`CountryCode::validate`] to normalize and check in one step.
    pub fn rule(self) -> CountryRule {
        match self {
            Self::At => at::is_valid,
            Self::Be => be::is_valid,
            Self::Bg => bg::is_valid,
            Self::Cy => cy::is_valid,
            Self::Cz => cz::is_valid,
            Self::De => de::is_valid,
            Self::Dk => dk::is_valid,
            Self::Ee => ee::is_valid,
            Self::El => el::is_valid,
            Self::Es => es::is_valid,
            Self::Eu => no_checksum,
            Self::Fi => fi::is_valid,
            Self::Fr => fr::is_valid,
            Self::Gb => gb::is_valid,
            Self::Hr => hr::is_valid,
            Self::Hu => hu::is_valid,
            Self::Ie => ie::is_valid,
            Self::It => it::is_valid,
            Self::Lt => lt::is_valid,
            Self::Lu => lu::is_valid,
            Self::Lv => lv::is_valid,
            Self::Mt => mt::is_valid,
            Self::Nl => nl::is_valid,
            Self::Pl => pl::is_valid,
            Self::Pt => pt::is_valid,
            Self::Ro => ro::is_valid,
            Self::Se => se::is_valid,
            Self::Si => si::is_valid,
            Self::Sk => sk::is_valid,
            // Northern Ireland numbers are issued from the UK series.
            Self::Xi => gb::is_valid,
        }
    }

    /// Normalize `vat_number` and run this country's rule on it.
    pub fn validate(self, vat_number: &str) -> bool {
        let number = normalize(vat_number);
        let valid = (self.rule())(&number);
        tracing::trace!(country = %self, valid, "checked VAT number checksum");
        valid
    }
}

/// `EU` (non-Union OSS registrations) has no published checksum.
fn no_checksum(_: &str) -> bool {
    false
}

/// Validate a VAT number against its country's checksum rule.
///
/// `country_code` is the two-letter VAT prefix (case-insensitive);
/// `vat_number` is the rest of the identifier, separators allowed.
///
/// # Errors
///
/// [`VatError::UnsupportedCountry`] if `country_code` has no rule. A number
/// that fails its rule is `Ok(false)`, never an error.
pub fn validate(country_code: &str, vat_number: &str) -> Result<bool, VatError> {
    let country: CountryCode = country_code.parse()?;
    Ok(country.validate(vat_number))
}

/// Validate a full VAT ID including its country prefix, e.g. `"ATU10223006"`.
///
/// # Errors
///
/// [`VatError::UnsupportedCountry`] if the first two characters (after
/// separator stripping) are not a supported prefix.
pub fn validate_vat_id(vat_id: &str) -> Result<bool, VatError> {
    let normalized = normalize(vat_id.trim());
    let mut chars = normalized.char_indices();
    let split = match (chars.next(), chars.next()) {
        (Some(_), Some((i, c))) => i + c.len_utf8(),
        _ => return Err(VatError::UnsupportedCountry(normalized)),
    };
    let (prefix, number) = normalized.split_at(split);
    validate(prefix, number)
}

/// Like [`validate`], but returns the normalized number along with the verdict.
///
/// # Errors
///
/// [`VatError::UnsupportedCountry`] if `country_code` has no rule.
pub fn check(country_code: &str, vat_number: &str) -> Result<VatCheck, VatError> {
    let country: CountryCode = country_code.parse()?;
    let number = normalize(vat_number);
    let valid = (country.rule())(&number);
    tracing::trace!(%country, valid, "checked VAT number checksum");
    Ok(VatCheck {
        country,
        number,
        valid,
    })
}
