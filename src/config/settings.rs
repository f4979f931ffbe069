//! Configuration settings for CheckHash
//!
//! Defines CLI arguments, server settings and defaults.

use crate::error::{CheckHashError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Default bind address for the HTTP service
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Default listen port for the HTTP service
pub const DEFAULT_PORT: u16 = 8443;

/// Default salt length in bytes
pub const DEFAULT_SALT_LENGTH: i64 = 16;

/// CheckHash - CRC32 checksums and SHA-256 digests over HTTP
#[derive(Parser, Debug, Clone)]
#[command(name = "checkhash")]
#[command(author = "CheckHash Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "CRC32 checksums and SHA-256 digests over HTTP")]
#[command(long_about = r#"
CheckHash serves two read endpoints that checksum or digest a piece of text:

  GET /checksum?text=...   CRC32 of the text
  GET /hash?text=...       SHA-256 of the text

When no text is given, the fixed string "Hello World Check Sum!" is used.

Examples:
  checkhash serve --port 8443            # Run the HTTP service
  checkhash hash abc                     # SHA-256 of "abc"
  checkhash checksum                     # CRC32 of the default text
  checkhash salt --length 16 --text pw   # Fresh salt and salted hash
"#)]
pub struct CliArgs {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Output format for offline commands
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub output_format: OutputFormat,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the HTTP service
    #[command(name = "serve")]
    Serve {
        /// Bind address
        #[arg(short, long, default_value = DEFAULT_BIND, env = "CHECKHASH_BIND")]
        bind: String,
        /// Listen port
        #[arg(short, long, default_value_t = DEFAULT_PORT, env = "CHECKHASH_PORT")]
        port: u16,
        /// Do not attach security headers to responses
        #[arg(long)]
        no_security_headers: bool,
    },

    /// Print the CRC32 checksum line for a text
    #[command(name = "checksum")]
    Checksum {
        /// Text to checksum (default text when omitted)
        text: Option<String>,
    },

    /// Print the SHA-256 hash line for a text
    #[command(name = "hash")]
    Hash {
        /// Text to hash (default text when omitted)
        text: Option<String>,
    },

    /// Check a text against an expected SHA-256 hash
    #[command(name = "verify")]
    Verify {
        /// Text to hash
        text: String,
        /// Expected lowercase hex digest
        expected: String,
    },

    /// Generate a random salt
    #[command(name = "salt")]
    Salt {
        /// Salt length in bytes
        #[arg(short, long, default_value_t = DEFAULT_SALT_LENGTH, allow_negative_numbers = true)]
        length: i64,
        /// Also print the salted hash of this text
        #[arg(short, long)]
        text: Option<String>,
    },
}

/// Hash algorithm supported by the service
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// CRC32 - Non-cryptographic integrity checksum (32-bit)
    #[value(name = "crc32")]
    Crc32,
    /// SHA-256 - Standard cryptographic hash
    #[default]
    #[value(name = "sha256")]
    Sha256,
}

impl HashAlgorithm {
    /// Get the output size in bytes
    pub fn output_size(&self) -> usize {
        match self {
            Self::Crc32 => 4,
            Self::Sha256 => 32,
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crc32 => "CRC32",
            Self::Sha256 => "SHA-256",
        }
    }

    /// Resolve an algorithm by name, ignoring case and dashes
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().replace('-', "").as_str() {
            "crc32" => Ok(Self::Crc32),
            "sha256" => Ok(Self::Sha256),
            _ => Err(CheckHashError::UnsupportedHashAlgorithm(name.to_string())),
        }
    }
}

/// Log output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Output format for offline commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

/// HTTP service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub bind: String,
    /// Port
    pub port: u16,
    /// Attach security headers to every response
    pub security_headers: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            security_headers: true,
        }
    }
}

impl ServerConfig {
    /// Create config from the `serve` subcommand
    pub fn from_cli(command: &Commands) -> Result<Self> {
        match command {
            Commands::Serve {
                bind,
                port,
                no_security_headers,
            } => Ok(Self {
                bind: bind.clone(),
                port: *port,
                security_headers: !no_security_headers,
            }),
            _ => Err(CheckHashError::config("not a serve command")),
        }
    }

    /// Resolve the socket address to listen on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.bind, self.port)
            .parse()
            .map_err(|e| {
                CheckHashError::config(format!("Invalid bind address '{}': {}", self.bind, e))
            })
    }
}

/// Map `-v` occurrences to a tracing filter directive
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
