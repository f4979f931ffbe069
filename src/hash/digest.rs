//! SHA-256 digest helpers
//!
//! Hashing of text or bytes to lowercase hex, verification against an
//! expected digest, and random salt generation. Every function is a pure
//! call with no shared state apart from the OS random source.

use crate::config::HashAlgorithm;
use crate::error::{CheckHashError, Result};
use crate::hash::{hash_bytes, HashResult};
use rand::rngs::OsRng;
use rand::RngCore;

/// Name under which the SHA-256 primitive is resolved
pub const SHA256: &str = "SHA-256";

/// Length of a SHA-256 digest in hex characters
pub const SHA256_HEX_LEN: usize = 64;

/// Largest salt `generate_salt` will produce, in bytes
pub const MAX_SALT_LENGTH: i64 = 1024 * 1024;

/// Digest `input` with the algorithm registered under `algorithm`.
///
/// Fails with `InvalidInput` when `input` is absent and with
/// `UnsupportedHashAlgorithm` when the name does not resolve.
pub fn compute_digest<T: AsRef<[u8]>>(algorithm: &str, input: Option<T>) -> Result<HashResult> {
    let input = input.ok_or_else(|| CheckHashError::InvalidInput("Input cannot be null".into()))?;
    let algorithm = HashAlgorithm::from_name(algorithm)?;
    Ok(hash_bytes(input.as_ref(), algorithm))
}

/// Like [`compute_digest`], returning only the lowercase hex value
pub fn digest_hex<T: AsRef<[u8]>>(algorithm: &str, input: Option<T>) -> Result<String> {
    compute_digest(algorithm, input).map(|result| result.hash)
}

/// SHA-256 of `input` as a 64-character lowercase hex string.
///
/// `&str` and `String` inputs are hashed as their UTF-8 bytes.
pub fn hash<T: AsRef<[u8]>>(input: Option<T>) -> Result<String> {
    digest_hex(SHA256, input)
}

/// True iff the SHA-256 of `input` equals `expected_hash` exactly.
///
/// Comparison is case-sensitive. Absent arguments yield `false`.
pub fn verify<T: AsRef<[u8]>>(input: Option<T>, expected_hash: Option<&str>) -> bool {
    match (input, expected_hash) {
        (Some(input), Some(expected)) => hash(Some(input))
            .map(|actual| actual == expected)
            .unwrap_or(false),
        _ => false,
    }
}

/// Generate `length` random bytes from the OS CSPRNG, hex-encoded.
///
/// `length` must lie in `1..=MAX_SALT_LENGTH`.
pub fn generate_salt(length: i64) -> Result<String> {
    if length <= 0 {
        return Err(CheckHashError::InvalidArgument(
            "Salt length must be positive".into(),
        ));
    }
    if length > MAX_SALT_LENGTH {
        return Err(CheckHashError::InvalidArgument(format!(
            "Salt length {} exceeds maximum of {} bytes",
            length, MAX_SALT_LENGTH
        )));
    }

    let mut salt = vec![0u8; length as usize];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| CheckHashError::Random(e.to_string()))?;

    Ok(hex::encode(salt))
}

/// SHA-256 of `input` followed by `salt`
pub fn salted_hash(input: &str, salt: &str) -> Result<String> {
    hash(Some(format!("{}{}", input, salt)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    }

    #[test]
    fn test_hash_known_value() {
        assert_eq!(hash(Some("abc")).unwrap(), ABC_SHA256);
        assert_eq!(hash(Some(b"abc".to_vec())).unwrap(), ABC_SHA256);
        assert_eq!(
            hash(Some("")).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_hash_absent_input() {
        let err = hash(None::<&str>).unwrap_err();
        assert!(matches!(err, CheckHashError::InvalidInput(_)));
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = digest_hex("MD2", Some("abc")).unwrap_err();
        assert!(matches!(err, CheckHashError::UnsupportedHashAlgorithm(_)));
        assert!(!err.is_caller_error());
    }

    #[test]
    fn test_verify() {
        assert!(verify(Some("abc"), Some(ABC_SHA256)));
        assert!(!verify(Some("abd"), Some(ABC_SHA256)));
        assert!(!verify(Some("abc"), Some(ABC_SHA256.to_uppercase().as_str())));
        assert!(!verify(None::<&str>, Some(ABC_SHA256)));
        assert!(!verify(Some("abc"), None));
    }

    #[test]
    fn test_generate_salt_rejects_non_positive() {
        for length in [0, -1, i64::MIN] {
            let err = generate_salt(length).unwrap_err();
            assert!(matches!(err, CheckHashError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_generate_salt_rejects_oversized() {
        for length in [MAX_SALT_LENGTH + 1, i64::MAX] {
            let err = generate_salt(length).unwrap_err();
            assert!(matches!(err, CheckHashError::InvalidArgument(_)));
        }

        let salt = generate_salt(MAX_SALT_LENGTH).unwrap();
        assert_eq!(salt.len() as i64, 2 * MAX_SALT_LENGTH);
    }

    #[test]
    fn test_digest_reports_algorithm() {
        let result = compute_digest("crc32", Some("abc")).unwrap();
        assert_eq!(result.algorithm, HashAlgorithm::Crc32);
        assert_eq!(result.hash, "352441c2");
        assert_eq!(result.size, 3);

        let result = compute_digest(SHA256, Some("abc")).unwrap();
        assert_eq!(result.algorithm, HashAlgorithm::Sha256);
        assert_eq!(result.hash, ABC_SHA256);
    }

    #[test]
    fn test_generate_salt_is_random() {
        let a = generate_salt(16).unwrap();
        let b = generate_salt(16).unwrap();
        assert_eq!(a.len(), 32);
        assert!(is_lower_hex(&a));
        assert_ne!(a, b);
    }

    #[test]
    fn test_salted_hash() {
        let salt = generate_salt(8).unwrap();
        let salted = salted_hash("password", &salt).unwrap();
        assert_eq!(salted, hash(Some(format!("password{}", salt))).unwrap());
        assert_ne!(salted, hash(Some("password")).unwrap());
    }

    proptest! {
        #[test]
        fn prop_hash_is_deterministic_hex(s in ".*") {
            let first = hash(Some(s.as_str())).unwrap();
            let second = hash(Some(s.as_str())).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), SHA256_HEX_LEN);
            prop_assert!(is_lower_hex(&first));
        }

        #[test]
        fn prop_verify_own_hash(s in ".*") {
            let digest = hash(Some(s.as_str())).unwrap();
            prop_assert!(verify(Some(s.as_str()), Some(digest.as_str())));
        }

        #[test]
        fn prop_distinct_inputs_distinct_hashes(a in ".*", b in ".*") {
            prop_assume!(a != b);
            prop_assert_ne!(hash(Some(a)).unwrap(), hash(Some(b)).unwrap());
        }

        #[test]
        fn prop_salt_length(n in 1i64..256) {
            let salt = generate_salt(n).unwrap();
            prop_assert_eq!(salt.len() as i64, 2 * n);
            prop_assert!(is_lower_hex(&salt));
        }
    }
}
