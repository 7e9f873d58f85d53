//! contenthash CLI
//!
//! Command-line interface for encoding and decoding EIP-1577 content hashes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use contenthash::helpers::{cid_for_web, cid_v0_to_v1_base32};
use contenthash::{decode, encode, get_codec, Codec};

/// contenthash - EIP-1577 content hash encoder/decoder
#[derive(Debug, Parser)]
#[command(name = "contenthash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true, env = "CONTENTHASH_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encode a value into a hex content hash
    Encode {
        /// Codec name (ipfs, ipns, swarm, onion, onion3, skynet, arweave)
        codec: Codec,
        /// Value to encode (CID, IPNS name, Swarm hash, onion address, ...)
        value: String,
    },

    /// Decode a hex content hash
    Decode {
        /// Content hash, with or without 0x
        content_hash: String,
    },

    /// Print the codec of a hex content hash
    Codec {
        /// Content hash, with or without 0x
        content_hash: String,
    },

    /// Convert a CID to its DNS-safe form for gateway subdomains
    CidForWeb {
        /// CIDv0 or CIDv1
        cid: String,
    },

    /// Convert a CID to CIDv1 base32
    CidV1 {
        /// CIDv0 or CIDv1
        cid: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "contenthash=debug,info"
    } else {
        "contenthash=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(command = ?cli.command, "Running command");

    let json = cli.json;
    match cli.command {
        Commands::Encode { codec, value } => cmd_encode(codec, &value, json),
        Commands::Decode { content_hash } => cmd_decode(&content_hash, json),
        Commands::Codec { content_hash } => cmd_codec(&content_hash, json),
        Commands::CidForWeb { cid } => cmd_cid_for_web(&cid, json),
        Commands::CidV1 { cid } => cmd_cid_v1(&cid, json),
    }
}

/// Encode a value
fn cmd_encode(codec: Codec, value: &str, json: bool) -> Result<()> {
    let content_hash = encode(codec, value)
        .with_context(|| format!("Failed to encode {codec} value"))?;

    if json {
        print_json(serde_json::json!({
            "codec": codec,
            "value": value,
            "contenthash": format!("0x{content_hash}"),
        }))
    } else {
        println!("{} {}", "Codec:".dimmed(), codec.to_string().cyan());
        println!("{} 0x{}", "Content hash:".green().bold(), content_hash);
        Ok(())
    }
}

/// Decode a content hash
fn cmd_decode(content_hash: &str, json: bool) -> Result<()> {
    let codec = get_codec(content_hash).context("Invalid content hash")?;
    let value = decode(content_hash).context("Failed to decode content hash")?;

    if json {
        print_json(serde_json::json!({
            "codec": codec_name(codec),
            "value": value,
        }))
    } else {
        println!("{} {}", "Codec:".dimmed(), codec_label(codec));
        println!("{} {}", "Value:".green().bold(), value);
        Ok(())
    }
}

/// Print the codec only
fn cmd_codec(content_hash: &str, json: bool) -> Result<()> {
    let codec = get_codec(content_hash).context("Invalid content hash")?;

    if json {
        print_json(serde_json::json!({ "codec": codec_name(codec) }))
    } else {
        println!("{}", codec_label(codec));
        Ok(())
    }
}

/// DNS-safe CID
fn cmd_cid_for_web(cid: &str, json: bool) -> Result<()> {
    let label = cid_for_web(cid).context("CID cannot be used as a DNS label")?;

    if json {
        print_json(serde_json::json!({ "cid": label }))
    } else {
        println!("{}", label);
        Ok(())
    }
}

/// CIDv1 base32
fn cmd_cid_v1(cid: &str, json: bool) -> Result<()> {
    let v1 = cid_v0_to_v1_base32(cid).context("Invalid CID")?;

    if json {
        print_json(serde_json::json!({ "cid": v1 }))
    } else {
        println!("{}", v1);
        Ok(())
    }
}

fn codec_name(codec: Option<Codec>) -> &'static str {
    codec.map_or("unrecognized", Codec::name)
}

fn codec_label(codec: Option<Codec>) -> ColoredString {
    match codec {
        Some(_) => codec_name(codec).cyan(),
        None => codec_name(codec).yellow(),
    }
}

fn print_json(value: serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
