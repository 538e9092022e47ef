//! Country codes accepted by the VAT validation engine.
//!
//! The set follows the VIES prefixes rather than ISO 3166-1: Greece is
//! `EL`, Northern Ireland is `XI`, and `EU` is the placeholder used for
//! non-Union businesses registered under the OSS scheme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::VatError;

/// A VAT country prefix with exactly one checksum rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    At,
    Be,
    Bg,
    Cy,
    Cz,
    De,
    Dk,
    Ee,
    El,
    Es,
    Eu,
    Fi,
    Fr,
    Gb,
    Hr,
    Hu,
    Ie,
    It,
    Lt,
    Lu,
    Lv,
    Mt,
    Nl,
    Pl,
    Pt,
    Ro,
    Se,
    Si,
    Sk,
    Xi,
}

impl CountryCode {
    /// Every supported code, sorted alphabetically.
    pub const ALL: [CountryCode; 30] = [
        Self::At,
        Self::Be,
        Self::Bg,
        Self::Cy,
        Self::Cz,
        Self::De,
        Self::Dk,
        Self::Ee,
        Self::El,
        Self::Es,
        Self::Eu,
        Self::Fi,
        Self::Fr,
        Self::Gb,
        Self::Hr,
        Self::Hu,
        Self::Ie,
        Self::It,
        Self::Lt,
        Self::Lu,
        Self::Lv,
        Self::Mt,
        Self::Nl,
        Self::Pl,
        Self::Pt,
        Self::Ro,
        Self::Se,
        Self::Si,
        Self::Sk,
        Self::Xi,
    ];

    /// The upper-case two-letter prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::At => "AT",
            Self::Be => "BE",
            Self::Bg => "BG",
            Self::Cy => "CY",
            Self::Cz => "CZ",
            Self::De => "DE",
            Self::Dk => "DK",
            Self::Ee => "EE",
            Self::El => "EL",
            Self::Es => "ES",
            Self::Eu => "EU",
            Self::Fi => "FI",
            Self::Fr => "FR",
            Self::Gb => "GB",
            Self::Hr => "HR",
            Self::Hu => "HU",
            Self::Ie => "IE",
            Self::It => "IT",
            Self::Lt => "LT",
            Self::Lu => "LU",
            Self::Lv => "LV",
            Self::Mt => "MT",
            Self::Nl => "NL",
            Self::Pl => "PL",
            Self::Pt => "PT",
            Self::Ro => "RO",
            Self::Se => "SE",
            Self::Si => "SI",
            Self::Sk => "SK",
            Self::Xi => "XI",
        }
    }

    /// English name of the member state (or pseudo-state).
    pub const fn name(self) -> &'static str {
        match self {
            Self::At => "Austria",
            Self::Be => "Belgium",
            Self::Bg => "Bulgaria",
            Self::Cy => "Cyprus",
            Self::Cz => "Czech Republic",
            Self::De => "Germany",
            Self::Dk => "Denmark",
            Self::Ee => "Estonia",
            Self::El => "Greece",
            Self::Es => "Spain",
            Self::Eu => "European Union",
            Self::Fi => "Finland",
            Self::Fr => "France",
            Self::Gb => "United Kingdom",
            Self::Hr => "Croatia",
            Self::Hu => "Hungary",
            Self::Ie => "Ireland",
            Self::It => "Italy",
            Self::Lt => "Lithuania",
            Self::Lu => "Luxembourg",
            Self::Lv => "Latvia",
            Self::Mt => "Malta",
            Self::Nl => "Netherlands",
            Self::Pl => "Poland",
            Self::Pt => "Portugal",
            Self::Ro => "Romania",
            Self::Se => "Sweden",
            Self::Si => "Slovenia",
            Self::Sk => "Slovakia",
            Self::Xi => "Northern Ireland",
        }
    }

    /// Whether VIES answers queries for this prefix.
    ///
    /// Great Britain left VIES at the end of 2020; Northern Ireland
    /// traders are still served under `XI`. `EU` has no register.
    pub const fn is_vies_member(self) -> bool {
        !matches!(self, Self::Gb | Self::Eu)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = VatError;

    /// Parse a two-letter prefix, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let unsupported = || VatError::UnsupportedCountry(code.to_string());
        let &[first, second] = code.as_bytes() else {
            return Err(unsupported());
        };

        let parsed = match [first.to_ascii_uppercase(), second.to_ascii_uppercase()] {
            [b'A', b'T'] => Self::At,
            [b'B', b'E'] => Self::Be,
            [b'B', b'G'] => Self::Bg,
            [b'C', b'Y'] => Self::Cy,
            [b'C', b'Z'] => Self::Cz,
            [b'D', b'E'] => Self::De,
            [b'D', b'K'] => Self::Dk,
            [b'E', b'E'] => Self::Ee,
            [b'E', b'L'] => Self::El,
            [b'E', b'S'] => Self::Es,
            [b'E', b'U'] => Self::Eu,
            [b'F', b'I'] => Self::Fi,
            [b'F', b'R'] => Self::Fr,
            [b'G', b'B'] => Self::Gb,
            [b'H', b'R'] => Self::Hr,
            [b'H', b'U'] => Self::Hu,
            [b'I', b'E'] => Self::Ie,
            [b'I', b'T'] => Self::It,
            [b'L', b'T'] => Self::Lt,
            [b'L', b'U'] => Self::Lu,
            [b'L', b'V'] => Self::Lv,
            [b'M', b'T'] => Self::Mt,
            [b'N', b'L'] => Self::Nl,
            [b'P', b'L'] => Self::Pl,
            [b'P', b'T'] => Self::Pt,
            [b'R', b'O'] => Self::Ro,
            [b'S', b'E'] => Self::Se,
            [b'S', b'I'] => Self::Si,
            [b'S', b'K'] => Self::Sk,
            [b'X', b'I'] => Self::Xi,
            _ => return Err(unsupported()),
        };
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!("DE".parse::<CountryCode>(), Ok(CountryCode::De));
        assert_eq!("EL".parse::<CountryCode>(), Ok(CountryCode::El));
        assert_eq!("XI".parse::<CountryCode>(), Ok(CountryCode::Xi));
        assert_eq!("EU".parse::<CountryCode>(), Ok(CountryCode::Eu));
    }

    #[test]
    fn case_and_whitespace_ignored() {
        assert_eq!("de".parse::<CountryCode>(), Ok(CountryCode::De));
        assert_eq!(" nL ".parse::<CountryCode>(), Ok(CountryCode::Nl));
    }

    #[test]
    fn unknown_codes() {
        for code in ["XX", "US", "GR", "", "D", "DEU", "ÄT"] {
            assert!(
                code.parse::<CountryCode>().is_err(),
                "{code:?} should be rejected"
            );
        }
    }

    #[test]
    fn unknown_code_is_reported_trimmed() {
        assert_eq!(
            " CH ".parse::<CountryCode>(),
            Err(VatError::UnsupportedCountry("CH".into()))
        );
    }

    #[test]
    fn list_is_sorted() {
        for window in CountryCode::ALL.windows(2) {
            assert!(
                window[0].as_str() < window[1].as_str(),
                "country codes not sorted: {} >= {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn as_str_round_trips() {
        for code in CountryCode::ALL {
            assert_eq!(code.as_str().parse::<CountryCode>(), Ok(code));
            assert_eq!(code.to_string(), code.as_str());
        }
    }

    #[test]
    fn serde_uses_prefix() {
        assert_eq!(serde_json::to_string(&CountryCode::El).unwrap(), "\"EL\"");
        let code: CountryCode = serde_json::from_str("\"XI\"").unwrap();
        assert_eq!(code, CountryCode::Xi);
    }

    #[test]
    fn vies_membership() {
        assert!(!CountryCode::Gb.is_vies_member());
        assert!(!CountryCode::Eu.is_vies_member());
        assert!(CountryCode::Xi.is_vies_member());
        assert!(CountryCode::De.is_vies_member());
    }
}
