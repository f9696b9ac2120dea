//! Configuration flags shared by every subcommand
//!
//! Each flag can also be supplied through its `DEPLOY_*` environment
//! variable; flags take precedence over the config file.

use crate::{
	constants::env_vars,
	core::config::ConfigOverrides,
	types::SecretString,
};
use clap::Args;
use std::path::PathBuf;

/// Configuration sources and overrides
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
	/// Config file path (defaults to deploy.toml in the project root if present)
	#[arg(long, env = env_vars::CONFIG)]
	pub config: Option<PathBuf>,

	/// Project root that relative paths are resolved against
	#[arg(long, env = env_vars::ROOT)]
	pub root: Option<PathBuf>,

	/// JSON-RPC endpoint of the target network
	#[arg(long, env = env_vars::RPC_URL)]
	pub rpc_url: Option<String>,

	/// Hex-encoded private key of the deploying account
	#[arg(long, env = env_vars::PRIVATE_KEY, hide_env_values = true)]
	pub private_key: Option<String>,

	/// Abort unless the node reports this chain id
	#[arg(long, env = env_vars::CHAIN_ID)]
	pub chain_id: Option<u64>,

	/// Contract to deploy (e.g., SimpleAuction)
	#[arg(short = 'n', long, env = env_vars::CONTRACT)]
	pub contract: Option<String>,

	/// Directory containing compiled Hardhat or Foundry artifacts
	#[arg(long, env = env_vars::ARTIFACTS)]
	pub artifacts: Option<PathBuf>,

	/// Candidate frontend config file; repeat to add fallbacks, first existing directory wins
	#[arg(short, long = "output", env = env_vars::OUTPUTS, value_delimiter = ',')]
	pub outputs: Vec<PathBuf>,

	/// Explorer URL template containing {address}
	#[arg(long, env = env_vars::EXPLORER_URL)]
	pub explorer_url: Option<String>,

	/// Give up waiting for the deployment receipt after this many seconds (default: wait until mined)
	#[arg(long, env = env_vars::RECEIPT_TIMEOUT)]
	pub receipt_timeout: Option<u64>,
}

impl From<ConfigArgs> for ConfigOverrides {
	fn from(args: ConfigArgs) -> Self {
		Self {
			config: args.config,
			root: args.root,
			rpc_url: args.rpc_url,
			private_key: args.private_key.map(SecretString::from),
			chain_id: args.chain_id,
			contract: args.contract,
			artifacts: args.artifacts,
			outputs: args.outputs,
			explorer_url: args.explorer_url,
			receipt_timeout_secs: args.receipt_timeout,
		}
	}
}
