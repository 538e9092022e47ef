//! Property-based tests for the normalizer and the checksum rules.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "core")]

use euvat::*;
use proptest::prelude::*;

/// Numbers known to pass their country's rule.
const VALID: &[(CountryCode, &str)] = &[
    (CountryCode::At, "U10223006"),
    (CountryCode::Be, "0776091951"),
    (CountryCode::Bg, "9404012530"),
    (CountryCode::Cz, "7103192745"),
    (CountryCode::De, "111111125"),
    (CountryCode::Es, "A78304516"),
    (CountryCode::Fr, "K7399859412"),
    (CountryCode::Gb, "980780684"),
    (CountryCode::Ie, "6139608TW"),
    (CountryCode::It, "00743110157"),
    (CountryCode::Nl, "010000446B01"),
    (CountryCode::Pl, "6610551919"),
    (CountryCode::Se, "556188840401"),
];

fn arb_country() -> impl Strategy<Value = CountryCode> {
    proptest::sample::select(CountryCode::ALL.to_vec())
}

fn arb_separator() -> impl Strategy<Value = char> {
    proptest::sample::select(vec![' ', '.', '-', '_'])
}

proptest! {
    #[test]
    fn normalize_is_idempotent(input in "\\PC*") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_strips_every_separator(input in "[0-9A-Z .\\-_]{0,24}") {
        let out = normalize(&input);
        prop_assert!(!out.contains([' ', '.', '-', '_']));
        prop_assert_eq!(out.len(), input.chars().filter(|c| c.is_ascii_alphanumeric()).count());
    }

    #[test]
    fn rules_never_panic(country in arb_country(), input in "\\PC{0,20}") {
        let _ = country.validate(&input);
    }

    #[test]
    fn rules_never_panic_on_digits(country in arb_country(), input in "[0-9]{0,16}") {
        let _ = country.validate(&input);
    }

    #[test]
    fn separators_do_not_change_the_verdict(
        idx in 0..VALID.len(),
        sep in arb_separator(),
        positions in proptest::collection::vec(0usize..16, 0..4),
    ) {
        let (country, number) = VALID[idx];
        let mut spaced: String = number.to_string();
        for pos in positions {
            let at = pos.min(spaced.len());
            spaced.insert(at, sep);
        }
        prop_assert!(country.validate(&spaced), "{} {:?}", country, spaced);
    }

    #[test]
    fn unknown_codes_are_errors(code in "[A-Z]{2}") {
        prop_assume!(code.parse::<CountryCode>().is_err());
        prop_assert_eq!(
            validate(&code, "123456789"),
            Err(VatError::UnsupportedCountry(code.clone()))
        );
    }

    #[test]
    fn eu_is_always_false(input in "\\PC{0,20}") {
        prop_assert_eq!(validate("EU", &input), Ok(false));
    }

    #[test]
    fn country_code_case_is_ignored(country in arb_country()) {
        let lower = country.as_str().to_ascii_lowercase();
        prop_assert_eq!(lower.parse::<CountryCode>(), Ok(country));
    }
}

// ---------------------------------------------------------------------------
// Error messages (insta)
// ---------------------------------------------------------------------------

#[test]
fn unsupported_country_message() {
    let err = validate("US", "123").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unsupported country code 'US'");
}

#[test]
fn vat_check_json() {
    let result = check("AT", "U 102 230 06").unwrap();
    insta::assert_snapshot!(
        serde_json::to_string(&result).unwrap(),
        @r#"{"country":"AT","number":"U10223006","valid":true}"#
    );
}
