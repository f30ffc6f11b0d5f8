//! Edge case tests: tampered links, swapped links, malformed documents,
//! and private key confidentiality.

use serde_json::json;

use xe_identity::identity::{generate_identity, verify_identity, verify_identity_value};

// === Tampering ===

#[test]
fn edge_tampered_signature_fails() {
    let identity = generate_identity(3).expect("minting");
    let mut record = identity.get_public_identity();
    // splice two bytes into the middle of the last signature
    record.s[2] = format!("{}ff{}", &record.s[2][..10], &record.s[2][12..]);
    assert!(!verify_identity(&record));
}

#[test]
fn edge_tampered_timestamp_fails() {
    let identity = generate_identity(2).expect("minting");
    let mut record = identity.get_public_identity();
    record.timestamp += 1000;
    assert!(!verify_identity(&record));
}

#[test]
fn edge_tampered_early_link_invalidates_chain() {
    let identity = generate_identity(3).expect("minting");
    let mut record = identity.get_public_identity();
    // a wrong solution on link 0 breaks link 0 itself; links 1 and 2
    // still chain to the stored signature, so the failure is at the root
    record.c[0] = record.c[0].wrapping_add(1);
    assert!(!verify_identity(&record));
}

#[test]
fn edge_swapped_link_from_other_identity_fails() {
    let a = generate_identity(3).expect("minting a");
    let b = generate_identity(3).expect("minting b");
    let mut record = a.get_public_identity();
    let other = b.get_public_identity();
    record.s[1] = other.s[1].clone();
    record.c[1] = other.c[1];
    assert!(!verify_identity(&record));

    // a well-formed foreign address fails too: the genesis link binds it
    let mut renamed = a.get_public_identity();
    renamed.address = other.address.clone();
    assert!(!verify_identity(&renamed));
}

#[test]
fn edge_reordered_links_fail() {
    let identity = generate_identity(3).expect("minting");
    let mut record = identity.get_public_identity();
    record.s.swap(1, 2);
    record.c.swap(1, 2);
    assert!(!verify_identity(&record));
}

#[test]
fn edge_insufficient_work_fails() {
    let identity = generate_identity(2).expect("minting");
    let mut record = identity.get_public_identity();
    // keep the shape valid but destroy the zero prefix
    record.s[1] = format!("ff{}", &record.s[1][2..]);
    assert!(!verify_identity(&record));
}

// === Append safety ===

#[test]
fn edge_extension_preserves_validity() {
    let mut identity = generate_identity(2).expect("minting");
    assert!(verify_identity(&identity.get_public_identity()));
    identity.add_challenge().expect("extension");
    assert!(verify_identity(&identity.get_public_identity()));
}

// === Malformed documents ===

#[test]
fn edge_negative_and_fractional_solutions_fail_quietly() {
    let identity = generate_identity(2).expect("minting");
    let mut doc = serde_json::to_value(identity.get_public_identity()).expect("serialize");
    doc["c"] = json!([0, -1]);
    assert!(!verify_identity_value(&doc));
    doc["c"] = json!([0, 1.5]);
    assert!(!verify_identity_value(&doc));
    doc["c"] = json!([0, "1"]);
    assert!(!verify_identity_value(&doc));
    doc["c"] = json!(null);
    assert!(!verify_identity_value(&doc));
}

#[test]
fn edge_missing_fields_fail_quietly() {
    let identity = generate_identity(1).expect("minting");
    let doc = serde_json::to_value(identity.get_public_identity()).expect("serialize");
    for field in ["address", "timestamp", "s", "c"] {
        let mut stripped = doc.clone();
        stripped.as_object_mut().unwrap().remove(field);
        assert!(!verify_identity_value(&stripped), "missing {field} accepted");
    }
}

#[test]
fn edge_truncated_signature_fails() {
    let identity = generate_identity(1).expect("minting");
    let mut record = identity.get_public_identity();
    // a signer that lost its recovery parameter produces 128 chars
    record.s[0].truncate(128);
    assert!(!verify_identity(&record));
}

// === Confidentiality ===

#[test]
fn edge_serialized_identity_leaks_no_key() {
    let identity = generate_identity(1).expect("minting");
    let json = serde_json::to_string(&identity).expect("serialize");
    for forbidden in ["privateKey", "private_key", "publicKey", "private", "secret"] {
        assert!(
            !json.contains(forbidden),
            "serialized identity contains key {forbidden}"
        );
    }
    assert!(!json.contains(identity.get_private_key()));
}
