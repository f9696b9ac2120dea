//! Hexadecimal string parsing utilities
//!
//! Handles both prefixed (0x) and unprefixed hex strings as found in
//! compiler artifacts and environment files.

use crate::types::error::{Error, Result};
use alloy_primitives::{Bytes, B256};
use alloy_signer_local::PrivateKeySigner;

/// Utility struct providing hexadecimal conversion functions
pub struct Hex;

impl Hex {
	/// Decode a hexadecimal string to bytes
	///
	/// # Arguments
	/// * `s` - Hex string with or without 0x prefix
	///
	/// # Returns
	/// Decoded bytes as Bytes type
	///
	/// # Errors
	/// Returns Error::InvalidHex if the string contains invalid hex characters
	pub fn decode(s: &str) -> Result<Bytes> {
		let s = s.trim().trim_start_matches("0x");
		hex::decode(s)
			.map(Into::into)
			.map_err(|e| Error::InvalidHex(e.to_string()))
	}

	/// Parse a private key from hexadecimal string
	///
	/// The error never echoes the key material back.
	///
	/// # Arguments
	/// * `key` - Hex string containing a 32-byte private key with or without 0x prefix
	///
	/// # Returns
	/// A PrivateKeySigner instance for the parsed key
	///
	/// # Errors
	/// Returns Error::InvalidPrivateKey if the string is not a valid 32-byte key
	pub fn to_private_key(key: &str) -> Result<PrivateKeySigner> {
		let key = key.trim().trim_start_matches("0x");
		let bytes = hex::decode(key).map_err(|_| Error::InvalidPrivateKey)?;

		if bytes.len() != 32 {
			return Err(Error::InvalidPrivateKey);
		}

		PrivateKeySigner::from_bytes(&B256::from_slice(&bytes)).map_err(|_| Error::InvalidPrivateKey)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// Well-known first Anvil/Hardhat development account
	const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

	#[test]
	fn decode_accepts_prefixed_and_bare() {
		assert_eq!(Hex::decode("0x6080").unwrap().to_vec(), vec![0x60, 0x80]);
		assert_eq!(Hex::decode("6080").unwrap().to_vec(), vec![0x60, 0x80]);
	}

	#[test]
	fn decode_rejects_garbage() {
		assert!(matches!(Hex::decode("0xzz"), Err(Error::InvalidHex(_))));
	}

	#[test]
	fn private_key_parses_to_expected_address() {
		let signer = Hex::to_private_key(DEV_KEY).unwrap();
		assert_eq!(
			signer.address().to_checksum(None),
			"0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
		);
	}

	#[test]
	fn private_key_rejects_wrong_length() {
		assert!(matches!(
			Hex::to_private_key("0x1234"),
			Err(Error::InvalidPrivateKey)
		));
	}
}
