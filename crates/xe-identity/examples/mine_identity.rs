//! Mint a small identity, print its public record, and verify it.
//!
//! Run with: `cargo run --release --example mine_identity`

use xe_identity::identity::{generate_identity, verify_identity};
use xe_identity::time::millis_to_rfc3339;

fn main() {
    println!("Mining a 3-link identity (each link pays a 64 MiB Argon2id tax)...");
    let identity = generate_identity(3).expect("mining failed");

    println!("address:   {}", identity.address());
    println!("minted at: {}", millis_to_rfc3339(identity.timestamp()));
    for (index, (signature, solution)) in identity
        .signatures()
        .iter()
        .zip(identity.solutions())
        .enumerate()
    {
        println!("link {index}: solution {solution:>5}  {}...", &signature[..16]);
    }

    let record = identity.get_public_identity();
    println!(
        "record verifies: {}",
        if verify_identity(&record) { "yes" } else { "NO" }
    );
    println!(
        "shareable JSON:\n{}",
        serde_json::to_string_pretty(&record).expect("serialization failed")
    );
}
