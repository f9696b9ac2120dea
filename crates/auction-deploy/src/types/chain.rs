//! Blockchain chain identifier types
//!
//! The numeric chain id reported by the node is what gets persisted; this
//! wrapper only adds human-readable names for console output.

use std::fmt;

/// Chain id of the Monad testnet, the default deployment target
pub const MONAD_TESTNET_CHAIN_ID: u64 = 10143;

/// Identifier for blockchain networks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainId {
	Mainnet,
	MonadTestnet,
	Custom { id: u64 },
}

impl ChainId {
	/// Create ChainId from numeric identifier
	pub fn from_u64(id: u64) -> Self {
		match id {
			1 => Self::Mainnet,
			MONAD_TESTNET_CHAIN_ID => Self::MonadTestnet,
			id => Self::Custom { id },
		}
	}

	/// Get the numeric chain identifier
	pub fn id(&self) -> u64 {
		match self {
			Self::Mainnet => 1,
			Self::MonadTestnet => MONAD_TESTNET_CHAIN_ID,
			Self::Custom { id } => *id,
		}
	}

	/// Get a human-readable name for the chain
	pub fn name(&self) -> &str {
		match self {
			Self::Mainnet => "Ethereum Mainnet",
			Self::MonadTestnet => "Monad Testnet",
			Self::Custom { id: 143 } => "Monad Mainnet",
			Self::Custom { id: 11155111 } => "Sepolia",
			Self::Custom { id: 31337 } => "Local (Anvil/Hardhat)",
			Self::Custom { .. } => "Custom Chain",
		}
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.id(), self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_chain_id_conversion() {
		assert_eq!(ChainId::from_u64(1), ChainId::Mainnet);
		assert_eq!(ChainId::from_u64(10143), ChainId::MonadTestnet);
		assert_eq!(ChainId::from_u64(42), ChainId::Custom { id: 42 });
	}

	#[test]
	fn test_chain_id_to_u64() {
		assert_eq!(ChainId::MonadTestnet.id(), 10143);
		assert_eq!(ChainId::Custom { id: 42 }.id(), 42);
	}

	#[test]
	fn test_display() {
		assert_eq!(ChainId::MonadTestnet.to_string(), "10143 (Monad Testnet)");
		assert_eq!(ChainId::from_u64(7).to_string(), "7 (Custom Chain)");
	}
}
