//! # CheckHash - Checksums and Digests over HTTP
//!
//! CheckHash is a small, stateless web service that computes a CRC32
//! checksum or a SHA-256 digest over a caller-supplied piece of text (or a
//! fixed default string) and returns a human-readable line with both.
//!
//! ## Features
//!
//! - **`GET /checksum`**: CRC32 of the `text` query parameter
//! - **`GET /hash`**: SHA-256 of the `text` query parameter
//! - **Digest utility**: hashing, verification and secure salt generation
//! - **Security headers**: HSTS, CSP and friends on every response
//!
//! ## Quick Start
//!
//! ```no_run
//! use checkhash::api::ApiServer;
//! use checkhash::config::ServerConfig;
//!
//! # async fn run() -> checkhash::Result<()> {
//! let server = ApiServer::new(ServerConfig::default());
//! server.run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Digest Utility
//!
//! ```
//! use checkhash::hash::{generate_salt, hash, verify};
//!
//! let digest = hash(Some("abc")).unwrap();
//! assert_eq!(digest.len(), 64);
//! assert!(verify(Some("abc"), Some(digest.as_str())));
//!
//! let salt = generate_salt(16).unwrap();
//! assert_eq!(salt.len(), 32);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod error;
pub mod hash;

// Re-export commonly used types
pub use api::{ApiServer, DEFAULT_TEXT};
pub use config::{HashAlgorithm, ServerConfig};
pub use error::{CheckHashError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use checkhash::prelude::*;
    //! ```

    pub use crate::api::{
        compute_checksum, compute_hash, router, ApiServer, DigestResponse, DEFAULT_TEXT,
    };
    pub use crate::config::{HashAlgorithm, ServerConfig};
    pub use crate::error::{CheckHashError, Result};
    pub use crate::hash::{generate_salt, hash, hash_bytes, salted_hash, verify, HashResult};
}
