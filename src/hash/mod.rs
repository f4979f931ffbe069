//! Hash computation and verification module
//!
//! Provides CRC32 checksums and SHA-256 digests over in-memory data,
//! plus digest verification and salt generation.

mod digest;
mod integrity;

pub use digest::*;
pub use integrity::*;
