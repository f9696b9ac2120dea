//! Deployment configuration loading and validation
//!
//! Settings are layered, lowest precedence first: built-in defaults, an
//! optional TOML file (with `${VAR}` / `${VAR:-default}` substitution), then
//! overrides coming from command-line flags or `DEPLOY_*` variables.
//!
//! An empty private key counts as no key, so `${PRIVATE_KEY:-}` lets the
//! read-only commands run on machines without a deployer key.
//!
//! ```toml
//! [network]
//! rpc_url = "https://testnet-rpc.monad.xyz"
//! chain_id = 10143
//! explorer_url = "https://explorer.monad.xyz/address/{address}"
//!
//! [signer]
//! private_key = "${PRIVATE_KEY:-}"
//!
//! [contract]
//! name = "SimpleAuction"
//! artifacts_dir = "artifacts"
//!
//! [output]
//! targets = ["front/src/config/deployed.json", "frontend/src/config/deployed.json"]
//! ```

use crate::{
	constants::{self, ADDRESS_PLACEHOLDER},
	core::storage::OutputTargets,
	types::{
		error::{Error, Result},
		Hex, SecretString,
	},
};
use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Values supplied on the command line or through `DEPLOY_*` variables
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
	pub config: Option<PathBuf>,
	pub root: Option<PathBuf>,
	pub rpc_url: Option<String>,
	pub private_key: Option<SecretString>,
	pub chain_id: Option<u64>,
	pub contract: Option<String>,
	pub artifacts: Option<PathBuf>,
	pub outputs: Vec<PathBuf>,
	pub explorer_url: Option<String>,
	pub receipt_timeout_secs: Option<u64>,
}

/// On-disk configuration file layout
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
	pub network: NetworkSection,
	pub signer: SignerSection,
	pub contract: ContractSection,
	pub output: OutputSection,
}

/// `[network]` section
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkSection {
	pub rpc_url: Option<String>,
	pub chain_id: Option<u64>,
	pub explorer_url: Option<String>,
	pub receipt_timeout_secs: Option<u64>,
}

/// `[signer]` section
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignerSection {
	pub private_key: Option<SecretString>,
}

/// `[contract]` section
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractSection {
	pub name: Option<String>,
	pub artifacts_dir: Option<PathBuf>,
}

/// `[output]` section
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
	pub targets: Option<Vec<PathBuf>>,
}

impl FromStr for FileConfig {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let resolved = resolve_env_vars(s)?;
		Ok(toml::from_str(&resolved)?)
	}
}

/// Replace `${VAR}` and `${VAR:-default}` references with environment values
///
/// # Arguments
/// * `input` - Raw TOML text
///
/// # Returns
/// The text with every reference substituted
///
/// # Errors
/// Returns Error::InvalidConfig if a variable without a default is unset
pub(crate) fn resolve_env_vars(input: &str) -> Result<String> {
	let pattern = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
		.map_err(|e| Error::InvalidConfig(format!("Invalid substitution pattern: {e}")))?;

	let mut resolved = String::with_capacity(input.len());
	let mut copied_up_to = 0;

	for caps in pattern.captures_iter(input) {
		let (Some(reference), Some(name)) = (caps.get(0), caps.get(1)) else {
			continue;
		};

		let value = match (std::env::var(name.as_str()), caps.get(2)) {
			(Ok(value), _) => value,
			(Err(_), Some(default)) => default.as_str().to_string(),
			(Err(_), None) => {
				return Err(Error::InvalidConfig(format!(
					"Environment variable '{}' not found",
					name.as_str()
				)))
			},
		};

		resolved.push_str(&input[copied_up_to..reference.start()]);
		resolved.push_str(&value);
		copied_up_to = reference.end();
	}

	resolved.push_str(&input[copied_up_to..]);
	Ok(resolved)
}

/// Nearest directory at or above `start` holding a `deploy.toml` or an
/// `artifacts/` directory
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
	start
		.ancestors()
		.find(|dir| {
			dir.join(constants::DEFAULT_CONFIG_FILE).is_file()
				|| dir.join(constants::DEFAULT_ARTIFACTS_DIR).is_dir()
		})
		.map(Path::to_path_buf)
}

fn non_empty(key: SecretString) -> Option<SecretString> {
	(!key.expose_secret().trim().is_empty()).then_some(key)
}

/// Fully resolved deployment configuration
///
/// Every path is absolute or anchored at `project_root`.
#[derive(Debug, Clone)]
pub struct DeployConfig {
	/// Config file the values were read from, if any
	pub source: Option<PathBuf>,
	pub project_root: PathBuf,
	pub rpc_url: String,
	pub private_key: Option<SecretString>,
	pub expected_chain_id: Option<u64>,
	pub contract: String,
	pub artifacts_dir: PathBuf,
	pub outputs: Vec<PathBuf>,
	pub explorer_url: String,
	/// Upper bound on the receipt wait; `None` waits until the tx is mined
	pub receipt_timeout: Option<Duration>,
}

impl DeployConfig {
	/// Resolve configuration from an optional file plus overrides
	///
	/// When no file is named explicitly, `deploy.toml` in the project root is
	/// used if present. The project root is `--root` when given, otherwise the
	/// directory of the explicit config file, otherwise the nearest ancestor of
	/// the working directory that looks like a project (see
	/// [`find_project_root`]), falling back to the working directory itself.
	///
	/// # Arguments
	/// * `overrides` - Values from flags and `DEPLOY_*` variables
	///
	/// # Errors
	/// Returns Error if an explicit config file is missing, cannot be parsed,
	/// or the merged values fail validation
	pub fn load(overrides: ConfigOverrides) -> Result<Self> {
		let explicit_root = overrides.root.clone();

		let (source, root) = match &overrides.config {
			Some(path) => {
				if !path.exists() {
					return Err(Error::ConfigNotFound(path.clone()));
				}
				let root = explicit_root.unwrap_or_else(|| match path.parent() {
					Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
					_ => PathBuf::from("."),
				});
				(Some(path.clone()), root)
			},
			None => {
				let root = match explicit_root {
					Some(root) => root,
					None => {
						let cwd = std::env::current_dir()?;
						find_project_root(&cwd).unwrap_or(cwd)
					},
				};
				let candidate = root.join(constants::DEFAULT_CONFIG_FILE);
				(candidate.is_file().then_some(candidate), root)
			},
		};

		let file = match &source {
			Some(path) => std::fs::read_to_string(path)?.parse::<FileConfig>()?,
			None => FileConfig::default(),
		};

		Self::merge(file, overrides, root, source)
	}

	/// Merge file values with overrides on top of built-in defaults
	///
	/// Relative paths are anchored at `project_root`. Output overrides replace
	/// the file's target list instead of extending it.
	///
	/// # Errors
	/// Returns Error::InvalidConfig if the merged values fail validation
	pub fn merge(
		file: FileConfig,
		overrides: ConfigOverrides,
		project_root: PathBuf,
		source: Option<PathBuf>,
	) -> Result<Self> {
		let anchor = |path: PathBuf| -> PathBuf {
			if path.is_absolute() {
				path
			} else {
				project_root.join(path)
			}
		};

		let outputs = if !overrides.outputs.is_empty() {
			overrides.outputs
		} else {
			file.output.targets.unwrap_or_else(|| {
				constants::DEFAULT_OUTPUTS
					.iter()
					.map(PathBuf::from)
					.collect()
			})
		};

		let config = Self {
			source,
			rpc_url: overrides
				.rpc_url
				.or(file.network.rpc_url)
				.unwrap_or_else(|| constants::DEFAULT_RPC_URL.to_string()),
			private_key: overrides
				.private_key
				.and_then(non_empty)
				.or_else(|| file.signer.private_key.and_then(non_empty)),
			expected_chain_id: overrides.chain_id.or(file.network.chain_id),
			contract: overrides
				.contract
				.or(file.contract.name)
				.unwrap_or_else(|| constants::DEFAULT_CONTRACT.to_string()),
			artifacts_dir: anchor(
				overrides
					.artifacts
					.or(file.contract.artifacts_dir)
					.unwrap_or_else(|| PathBuf::from(constants::DEFAULT_ARTIFACTS_DIR)),
			),
			outputs: outputs.into_iter().map(anchor).collect(),
			explorer_url: overrides
				.explorer_url
				.or(file.network.explorer_url)
				.unwrap_or_else(|| constants::DEFAULT_EXPLORER_URL.to_string()),
			receipt_timeout: overrides
				.receipt_timeout_secs
				.or(file.network.receipt_timeout_secs)
				.map(Duration::from_secs),
			project_root,
		};

		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<()> {
		if self.rpc_url.trim().is_empty() {
			return Err(Error::InvalidConfig("RPC URL cannot be empty".into()));
		}
		if self.contract.trim().is_empty() {
			return Err(Error::InvalidConfig("Contract name cannot be empty".into()));
		}
		if !self.explorer_url.contains(ADDRESS_PLACEHOLDER) {
			return Err(Error::InvalidConfig(format!(
				"Explorer URL must contain the {ADDRESS_PLACEHOLDER} placeholder"
			)));
		}
		if self.outputs.is_empty() {
			return Err(Error::InvalidConfig(
				"At least one output target must be configured".into(),
			));
		}
		if self.receipt_timeout.is_some_and(|timeout| timeout.is_zero()) {
			return Err(Error::InvalidConfig(
				"Receipt timeout must be greater than zero".into(),
			));
		}
		Ok(())
	}

	/// Build the deployment signer from the configured private key
	///
	/// # Errors
	/// Returns Error::MissingField when no key is configured, or
	/// Error::InvalidPrivateKey when it cannot be parsed
	pub fn signer(&self) -> Result<PrivateKeySigner> {
		let key = self
			.private_key
			.as_ref()
			.ok_or_else(|| Error::MissingField("signer.private_key".into()))?;
		Hex::to_private_key(key.expose_secret())
	}

	/// Explorer link for a deployed address
	///
	/// # Arguments
	/// * `address` - Deployed contract address, rendered in checksum form
	///
	/// # Returns
	/// The explorer template with `{address}` substituted
	pub fn explorer_url_for(&self, address: &Address) -> String {
		self.explorer_url
			.replace(ADDRESS_PLACEHOLDER, &address.to_checksum(None))
	}

	/// Candidate frontend config files in priority order
	pub fn output_targets(&self) -> OutputTargets {
		OutputTargets::new(self.outputs.clone())
	}

	/// Show a path relative to the project root when possible
	///
	/// # Arguments
	/// * `path` - Path to render
	///
	/// # Returns
	/// The path stripped of the project root prefix, or unchanged if outside it
	pub fn display_path(&self, path: &Path) -> String {
		path.strip_prefix(&self.project_root)
			.unwrap_or(path)
			.display()
			.to_string()
	}
}
