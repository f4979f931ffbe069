//! CheckHash CLI - checksum and digest service
//!
//! Runs the HTTP service or computes the same responses offline.

use checkhash::api::{compute_checksum, compute_hash, resolve_text, ApiServer, DigestResponse};
use checkhash::config::{
    verbosity_filter, CliArgs, Commands, LogFormat, OutputFormat, ServerConfig,
};
use checkhash::error::{CheckHashError, Result};
use checkhash::hash::{generate_salt, salted_hash, verify};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let args = CliArgs::parse();

    init_logging(&args);

    // Handle result
    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(args: &CliArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(args.verbose)));

    match args.log_format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

/// Returns `Ok(false)` when the command ran but its check failed
fn run(args: &CliArgs) -> Result<bool> {
    let format = args.output_format;

    match &args.command {
        command @ Commands::Serve { .. } => cmd_serve(ServerConfig::from_cli(command)?),
        Commands::Checksum { text } => {
            print_digest(&compute_checksum(text.as_deref()), format)?;
            Ok(true)
        }
        Commands::Hash { text } => {
            print_digest(&compute_hash(text.as_deref())?, format)?;
            Ok(true)
        }
        Commands::Verify { text, expected } => cmd_verify(text, expected, format),
        Commands::Salt { length, text } => cmd_salt(*length, text.as_deref(), format),
    }
}

fn cmd_serve(config: ServerConfig) -> Result<bool> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CheckHashError::config(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(async {
        let server = ApiServer::new(config);
        server.run().await
    })?;

    Ok(true)
}

fn cmd_verify(text: &str, expected: &str, format: OutputFormat) -> Result<bool> {
    let matches = verify(Some(text), Some(expected));

    match format {
        OutputFormat::Text => println!("{}", if matches { "PASS" } else { "FAIL" }),
        OutputFormat::Json => {
            let report = json!({ "data": text, "expected": expected, "matches": matches });
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    Ok(matches)
}

fn cmd_salt(length: i64, text: Option<&str>, format: OutputFormat) -> Result<bool> {
    let salt = generate_salt(length)?;
    let salted = text
        .map(|t| salted_hash(resolve_text(Some(t)), &salt))
        .transpose()?;

    match format {
        OutputFormat::Text => {
            println!("Salt: {}", salt);
            if let Some(ref salted) = salted {
                println!("Salted Hash: {}", salted);
            }
        }
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&json!({ "salt": salt, "salted_hash": salted }))?
        ),
    }

    Ok(true)
}

fn print_digest(response: &DigestResponse, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", response),
        OutputFormat::Json => println!("{}", serde_json::to_string(response)?),
    }
    Ok(())
}
