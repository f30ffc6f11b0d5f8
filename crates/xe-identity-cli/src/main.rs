//! XE identity CLI — `xeid` command.
//!
//! Provides a command-line interface for generating wallets, signing and
//! recovering messages, and minting, verifying, and extending
//! proof-of-work identities.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use xe_identity::identity::{
    generate_identity, verify_identity_value, Identity, PublicIdentity, DEFAULT_CHALLENGES,
};
use xe_identity::time::millis_to_rfc3339;
use xe_identity::wallet::{
    checksum_address_is_valid, generate_checksum_address, generate_signature, generate_wallet,
    recover_address_from_signed_message, recover_public_key_from_signed_message,
    restore_wallet_from_private_key,
};

// ── File helpers ──────────────────────────────────────────────────────────────

fn read_identity_file(path: &Path) -> Result<serde_json::Value> {
    let text = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("reading identity from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading identity file {}", path.display()))?
    };
    serde_json::from_str(&text).context("identity file is not valid JSON")
}

fn write_identity_file(path: &Path, record: &PublicIdentity) -> Result<()> {
    let json = serde_json::to_string_pretty(record).context("serializing identity")?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("writing identity file {}", path.display()))
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// xeid — manage XE wallets and proof-of-work identities.
#[derive(Parser, Debug)]
#[command(
    name = "xeid",
    about = "XE proof-of-work identity CLI",
    version,
    long_about = "xeid — XE proof-of-work identity CLI\n\nGenerate wallets, sign and recover messages, and mint, verify,\nand extend chained proof-of-work identities."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Wallet operations
    #[command(subcommand)]
    Wallet(WalletCommands),

    /// Sign a message with a private key
    Sign {
        /// Message to sign
        message: String,
        /// Private key as 64 hex characters
        #[arg(long)]
        key: String,
    },

    /// Recover the signer of a message
    Recover {
        /// The signed message
        message: String,
        /// The 130-character signature
        signature: String,
    },

    /// Identity operations
    #[command(subcommand)]
    Identity(IdentityCommands),
}

#[derive(Subcommand, Debug)]
enum WalletCommands {
    /// Generate a new wallet
    New,

    /// Restore a wallet from a private key
    Restore {
        /// Private key as 64 hex characters
        key: String,
    },

    /// Validate an address checksum
    Validate {
        /// Address to check
        address: String,
    },
}

#[derive(Subcommand, Debug)]
enum IdentityCommands {
    /// Mint a new identity
    New {
        /// Number of challenges to mine
        #[arg(long, default_value_t = DEFAULT_CHALLENGES)]
        challenges: usize,
        /// Write the public record to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Verify an identity file (`-` reads stdin)
    Verify {
        /// Path to the public identity JSON
        file: PathBuf,
    },

    /// Mine additional challenges onto an existing identity
    Extend {
        /// Path to the public identity JSON
        file: PathBuf,
        /// Private key for the identity's address
        #[arg(long)]
        key: String,
        /// Number of links to append
        #[arg(long, default_value_t = 1)]
        links: usize,
        /// Write the extended record here (defaults to overwriting FILE)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print a summary of an identity file
    Show {
        /// Path to the public identity JSON
        file: PathBuf,
    },
}

// ── Command implementations ───────────────────────────────────────────────────

fn cmd_wallet_new() -> Result<()> {
    let wallet = generate_wallet();
    println!("address:     {}", wallet.address());
    println!("public key:  {}", wallet.public_key());
    println!("private key: {}", wallet.private_key());
    eprintln!("Keep the private key secret; it cannot be recovered.");
    Ok(())
}

fn cmd_wallet_restore(key: &str) -> Result<()> {
    let wallet = restore_wallet_from_private_key(key)?;
    println!("address:    {}", wallet.address());
    println!("public key: {}", wallet.public_key());
    Ok(())
}

fn cmd_wallet_validate(address: &str) -> Result<()> {
    if checksum_address_is_valid(address) {
        println!("valid");
        return Ok(());
    }
    match generate_checksum_address(address) {
        Ok(checksummed) => {
            println!("invalid checksum; expected {checksummed}");
        }
        Err(_) => println!("invalid address"),
    }
    std::process::exit(1);
}

fn cmd_sign(message: &str, key: &str) -> Result<()> {
    let signature = generate_signature(key, message)?;
    println!("{signature}");
    Ok(())
}

fn cmd_recover(message: &str, signature: &str) -> Result<()> {
    let public_key = recover_public_key_from_signed_message(message, signature)?;
    let address = recover_address_from_signed_message(message, signature)?;
    println!("public key: {public_key}");
    println!("address:    {address}");
    Ok(())
}

fn cmd_identity_new(challenges: usize, out: Option<&Path>) -> Result<()> {
    eprintln!("Mining {challenges} challenge(s); each link pays a 64 MiB Argon2id tax...");
    let identity = generate_identity(challenges)?;
    let record = identity.get_public_identity();

    eprintln!("address:     {}", identity.address());
    eprintln!("private key: {}", identity.get_private_key());
    eprintln!("Keep the private key secret; it is needed to extend the identity.");

    match out {
        Some(path) => {
            write_identity_file(path, &record)?;
            eprintln!("public identity written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&record)?),
    }
    Ok(())
}

fn cmd_identity_verify(file: &Path) -> Result<()> {
    let value = read_identity_file(file)?;
    if verify_identity_value(&value) {
        println!("valid");
        Ok(())
    } else {
        println!("INVALID");
        std::process::exit(1);
    }
}

fn cmd_identity_extend(file: &Path, key: &str, links: usize, out: Option<&Path>) -> Result<()> {
    if links == 0 {
        return Err(anyhow!("--links must be at least 1"));
    }
    let value = read_identity_file(file)?;
    let record: PublicIdentity =
        serde_json::from_value(value).context("identity file is not a public identity record")?;
    let mut identity = Identity::from_parts(key, record)?;

    eprintln!("Mining {links} additional link(s)...");
    for _ in 0..links {
        identity.add_challenge()?;
    }

    let target = out.unwrap_or(file);
    write_identity_file(target, &identity.get_public_identity())?;
    eprintln!(
        "chain now has {} links; written to {}",
        identity.signatures().len(),
        target.display()
    );
    Ok(())
}

fn cmd_identity_show(file: &Path) -> Result<()> {
    let value = read_identity_file(file)?;
    let record: PublicIdentity = serde_json::from_value(value.clone())
        .context("identity file is not a public identity record")?;

    println!("address:   {}", record.address);
    println!(
        "minted at: {} ({})",
        record.timestamp,
        millis_to_rfc3339(record.timestamp)
    );
    println!("links:     {}", record.s.len());
    for (index, (signature, solution)) in record.s.iter().zip(&record.c).enumerate() {
        println!("  {index:>3}: solution {solution:>6}  {}...", &signature[..16.min(signature.len())]);
    }
    println!(
        "verdict:   {}",
        if verify_identity_value(&value) { "valid" } else { "INVALID" }
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Wallet(WalletCommands::New) => cmd_wallet_new(),
        Commands::Wallet(WalletCommands::Restore { key }) => cmd_wallet_restore(&key),
        Commands::Wallet(WalletCommands::Validate { address }) => cmd_wallet_validate(&address),
        Commands::Sign { message, key } => cmd_sign(&message, &key),
        Commands::Recover { message, signature } => cmd_recover(&message, &signature),
        Commands::Identity(IdentityCommands::New { challenges, out }) => {
            cmd_identity_new(challenges, out.as_deref())
        }
        Commands::Identity(IdentityCommands::Verify { file }) => cmd_identity_verify(&file),
        Commands::Identity(IdentityCommands::Extend {
            file,
            key,
            links,
            out,
        }) => cmd_identity_extend(&file, &key, links, out.as_deref()),
        Commands::Identity(IdentityCommands::Show { file }) => cmd_identity_show(&file),
    }
}
