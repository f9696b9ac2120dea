//! Defaults and environment variable names used throughout the tool

/// Contract deployed when none is configured
pub const DEFAULT_CONTRACT: &str = "SimpleAuction";

/// Hardhat's artifact directory, relative to the project root
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Public Monad testnet RPC endpoint
pub const DEFAULT_RPC_URL: &str = "https://testnet-rpc.monad.xyz";

/// Placeholder substituted with the deployed address in explorer templates
pub const ADDRESS_PLACEHOLDER: &str = "{address}";

/// Explorer page for a deployed address
pub const DEFAULT_EXPLORER_URL: &str = "https://explorer.monad.xyz/address/{address}";

/// Config file picked up from the project root when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "deploy.toml";

/// Candidate frontend config files, in priority order
///
/// The first entry is the current frontend layout; the second is the legacy
/// `frontend/` directory kept for older checkouts.
pub const DEFAULT_OUTPUTS: &[&str] = &[
	"front/src/config/deployed.json",
	"frontend/src/config/deployed.json",
];

/// Environment variable names
pub mod env_vars {
	pub const CONFIG: &str = "DEPLOY_CONFIG";
	pub const ROOT: &str = "DEPLOY_ROOT";
	pub const RPC_URL: &str = "DEPLOY_RPC_URL";
	pub const PRIVATE_KEY: &str = "DEPLOY_PRIVATE_KEY";
	pub const CHAIN_ID: &str = "DEPLOY_CHAIN_ID";
	pub const CONTRACT: &str = "DEPLOY_CONTRACT";
	pub const ARTIFACTS: &str = "DEPLOY_ARTIFACTS";
	pub const OUTPUTS: &str = "DEPLOY_OUTPUTS";
	pub const EXPLORER_URL: &str = "DEPLOY_EXPLORER_URL";
	pub const RECEIPT_TIMEOUT: &str = "DEPLOY_RECEIPT_TIMEOUT";
}
