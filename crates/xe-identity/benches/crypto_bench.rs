use criterion::{criterion_group, criterion_main, Criterion};

use xe_identity::crypto::keys::Secp256k1KeyPair;
use xe_identity::crypto::seed::derive_challenge_seed;
use xe_identity::crypto::signing::{generate_signature, recover_public_key_from_signed_message};
use xe_identity::pow::{difficulty, mine_signature};
use xe_identity::wallet::{generate_checksum_address, public_key_to_checksum_address};

fn crypto_benchmarks(c: &mut Criterion) {
    // 1. Key generation
    c.bench_function("secp256k1_key_generation", |b| {
        b.iter(|| {
            Secp256k1KeyPair::generate();
        });
    });

    // 2. Signing
    let key_pair = Secp256k1KeyPair::generate();
    let private_key = key_pair.private_key_hex();
    let message = "The quick brown fox jumps over the lazy dog";
    c.bench_function("ecdsa_sign_compact", |b| {
        b.iter(|| {
            generate_signature(&private_key, message).unwrap();
        });
    });

    // 3. Recovery
    let signature = generate_signature(&private_key, message).unwrap();
    c.bench_function("ecdsa_recover", |b| {
        b.iter(|| {
            recover_public_key_from_signed_message(message, &signature).unwrap();
        });
    });

    // 4. Address derivation
    let public_key = key_pair.public_key_hex();
    c.bench_function("address_from_public_key", |b| {
        b.iter(|| {
            public_key_to_checksum_address(&public_key).unwrap();
        });
    });

    let address = public_key_to_checksum_address(&public_key).unwrap();
    c.bench_function("address_rechecksum", |b| {
        b.iter(|| {
            generate_checksum_address(&address).unwrap();
        });
    });

    // 5. Difficulty schedule
    c.bench_function("difficulty_schedule", |b| {
        b.iter(|| {
            for index in 0..64 {
                difficulty(index);
            }
        });
    });
}

fn mining_benchmarks(c: &mut Criterion) {
    let key_pair = Secp256k1KeyPair::generate();
    let private_key = key_pair.private_key_hex();

    // The 64 MiB Argon2id derivation dominates both benches; keep the
    // sample count low.
    let mut group = c.benchmark_group("memory_hard");
    group.sample_size(10);

    group.bench_function("argon2id_challenge_seed", |b| {
        b.iter(|| {
            derive_challenge_seed("bench message", 0).unwrap();
        });
    });

    group.bench_function("mine_difficulty_1", |b| {
        b.iter(|| {
            mine_signature(&private_key, "bench message", 1, 0).unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, crypto_benchmarks, mining_benchmarks);
criterion_main!(benches);
