//! Checksum and digest computation over in-memory data
//!
//! Supports CRC32 (integrity checksum) and SHA-256 (cryptographic digest)
//! behind a single streaming `Hasher`.

use crate::config::HashAlgorithm;
use serde::{Deserialize, Serialize};

/// Hash result as hex string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    /// The hash algorithm used
    pub algorithm: HashAlgorithm,
    /// Hash value as lowercase hex string
    pub hash: String,
    /// Input size in bytes
    pub size: u64,
}

impl HashResult {
    /// Create a new hash result
    pub fn new(algorithm: HashAlgorithm, hash: String, size: u64) -> Self {
        Self { algorithm, hash, size }
    }

    /// Verify against another hash result
    pub fn verify(&self, other: &HashResult) -> bool {
        self.algorithm == other.algorithm && self.hash == other.hash
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hash)
    }
}

/// Unified hasher that supports all algorithms
pub enum Hasher {
    /// CRC32 (ISO-HDLC)
    Crc32(crc32fast::Hasher),
    /// SHA-256
    Sha256(sha2::Sha256),
}

impl Hasher {
    /// Create a new hasher for the given algorithm
    pub fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Crc32 => Self::Crc32(crc32fast::Hasher::new()),
            HashAlgorithm::Sha256 => {
                use sha2::Digest;
                Self::Sha256(sha2::Sha256::new())
            }
        }
    }

    /// Get the algorithm this hasher uses
    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            Self::Crc32(_) => HashAlgorithm::Crc32,
            Self::Sha256(_) => HashAlgorithm::Sha256,
        }
    }

    /// Update the hasher with more data
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Crc32(h) => h.update(data),
            Self::Sha256(h) => {
                use sha2::Digest;
                h.update(data);
            }
        }
    }

    /// Finalize and get the hash as hex string
    ///
    /// CRC32 is rendered without zero-padding, so its width varies
    /// between 1 and 8 characters.
    pub fn finalize(self) -> String {
        match self {
            Self::Crc32(h) => format!("{:x}", h.finalize()),
            Self::Sha256(h) => {
                use sha2::Digest;
                hex::encode(h.finalize())
            }
        }
    }

    /// Reset the hasher for reuse
    pub fn reset(&mut self) {
        match self {
            Self::Crc32(h) => h.reset(),
            Self::Sha256(h) => sha2::Digest::reset(h),
        }
    }
}

/// Compute hash of data in memory
pub fn hash_bytes(data: &[u8], algorithm: HashAlgorithm) -> HashResult {
    let mut hasher = Hasher::new(algorithm);
    hasher.update(data);
    HashResult::new(algorithm, hasher.finalize(), data.len() as u64)
}

/// CRC32 checksum of data as unpadded lowercase hex
pub fn crc32_hex(data: &[u8]) -> String {
    hash_bytes(data, HashAlgorithm::Crc32).hash
}
