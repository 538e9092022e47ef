use euvat::*;

fn main() {
    // Checksum validation (no network required)
    println!("=== VAT ID Checksum Validation ===\n");

    let test_ids = [
        "DE136695976",
        "ATU13585627",
        "FR K7 399 859 412",
        "NL004495445B01",
        "DE136695977", // check digit off by one
        "GBGD500",     // government department out of range
        "EU372009975", // no published checksum
        "XX999999999", // unknown country
    ];

    for id in &test_ids {
        match validate_vat_id(id) {
            Ok(true) => println!("  {id} => valid"),
            Ok(false) => println!("  {id} => INVALID checksum"),
            Err(e) => println!("  {id} => ERROR: {e}"),
        }
    }

    // Normalized number along with the verdict
    println!("\n=== Check Details ===\n");

    for (cc, number) in [("be", "0776.091.951"), ("ES", "X-1234567-L")] {
        match check(cc, number) {
            Ok(result) => println!(
                "  {cc} {number} => {} {} ({}), valid={}",
                result.country,
                result.number,
                result.country.name(),
                result.valid
            ),
            Err(e) => println!("  {cc} {number} => ERROR: {e}"),
        }
    }

    let prefixes = CountryCode::ALL.map(CountryCode::as_str).join(", ");
    println!("\n  Supported prefixes: {prefixes}");
}
