//! Check VAT IDs against the live VIES service.
//!
//! Run with: `cargo run --example vies_check --features vies -- DE136695976 ATU13585627`

use euvat::vies::{ViesClient, ViesConfig};
use euvat::{CountryCode, validate_vat_id};

#[tokio::main]
async fn main() {
    let client = match ViesClient::new(ViesConfig::default()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("cannot build client: {e}");
            return;
        }
    };

    if !client.is_service_available().await {
        eprintln!("VIES is currently unavailable");
        return;
    }

    for id in std::env::args().skip(1) {
        // Only ask VIES about numbers that pass the local checksum.
        match validate_vat_id(&id) {
            Ok(true) => {}
            Ok(false) => {
                println!("  {id} => INVALID checksum, not sent");
                continue;
            }
            Err(e) => {
                println!("  {id} => ERROR: {e}");
                continue;
            }
        }

        let normalized = euvat::normalize(id.trim());
        let (prefix, number) = normalized.split_at(2);
        let Ok(country) = prefix.parse::<CountryCode>() else {
            continue;
        };

        match client.check_vat(country, number).await {
            Ok(result) => println!(
                "  {id} => valid={}, name={}",
                result.valid,
                result.name.as_deref().unwrap_or("(not disclosed)")
            ),
            Err(e) => println!("  {id} => VIES ERROR: {e}"),
        }
    }
}
