//! Contract deployment operation
//!
//! Deploys the configured contract artifact, then records where it landed
//! for the frontend. Everything up to and including the chain id lookup is
//! fatal on failure; writing the frontend config is best effort.

use crate::{
	cli::output::Display,
	core::{
		artifacts::ArtifactStore, blockchain::ChainClient, config::DeployConfig, logging,
	},
	types::{
		chain::ChainId,
		error::{Error, PersistError, Result},
		record::DeploymentRecord,
	},
};
use alloy_primitives::{Address, B256};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

/// Outcome of writing the frontend config file
#[derive(Debug)]
pub enum ConfigWrite {
	/// Record written to this path
	Written(PathBuf),
	/// No candidate directory exists
	Skipped,
	/// Write attempted and failed; the deployment itself still succeeded
	Failed(PersistError),
}

/// Summary of a successful deployment run
#[derive(Debug)]
pub struct DeploymentReport {
	pub record: DeploymentRecord,
	pub tx_hash: B256,
	pub block_number: Option<u64>,
	pub deployer: Address,
	pub explorer_url: String,
	pub config_write: ConfigWrite,
}

/// Deploys one contract and persists its connection metadata
pub struct DeploymentRunner {
	config: Arc<DeployConfig>,
	client: Arc<dyn ChainClient>,
	artifacts: ArtifactStore,
}

impl DeploymentRunner {
	pub fn new(config: Arc<DeployConfig>, client: Arc<dyn ChainClient>) -> Self {
		let artifacts = ArtifactStore::new(config.artifacts_dir.clone());
		Self {
			config,
			client,
			artifacts,
		}
	}

	/// Run the deployment from artifact lookup to config write
	///
	/// The chain id stored in the record is queried only after the deployment
	/// transaction is confirmed. When an expected chain id is configured it is
	/// checked before anything is submitted.
	///
	/// # Returns
	/// The deployment record plus transaction details and the config write outcome
	///
	/// # Errors
	/// Returns Error for artifact, connectivity, chain mismatch, submission,
	/// confirmation, or chain id failures. Config write failures are reported
	/// through [`ConfigWrite::Failed`] instead.
	#[instrument(skip(self), fields(contract = %self.config.contract))]
	pub async fn run(&self) -> Result<DeploymentReport> {
		let started = Instant::now();
		let contract = self.config.contract.as_str();

		logging::operation_start("deploy", contract);
		Display::header(&format!("Deploying {}", contract));

		let artifact = self.artifacts.load(contract)?;
		Display::kv("Artifact", &self.config.display_path(&artifact.path));
		logging::operation_progress("deploy", "artifact loaded");

		if let Some(expected) = self.config.expected_chain_id {
			let actual = self.client.chain_id().await?;
			if actual != expected {
				return Err(Error::ChainMismatch { expected, actual });
			}
			logging::operation_progress("deploy", "chain id verified");
		}

		let deployed = self.client.deploy(artifact.bytecode).await?;
		let chain_id = self.client.chain_id().await?;

		let address = deployed.address.to_checksum(None);
		let explorer_url = self.config.explorer_url_for(&deployed.address);

		info!(
			address = %address,
			chain_id = chain_id,
			tx_hash = %deployed.tx_hash,
			block_number = ?deployed.block_number,
			"Contract deployed"
		);
		Display::success(&format!("{} deployed to: {}", contract, address));
		Display::kv("Network", &ChainId::from_u64(chain_id).to_string());
		Display::kv("Deployer", &deployed.deployer.to_checksum(None));
		Display::kv("Transaction", &deployed.tx_hash.to_string());
		Display::info("Save this address for frontend");
		Display::kv("Explorer", &explorer_url);

		let record = DeploymentRecord::new(deployed.address, chain_id);
		let config_write = self.persist(&record);

		logging::operation_complete("deploy", started.elapsed().as_millis() as u64);

		Ok(DeploymentReport {
			record,
			tx_hash: deployed.tx_hash,
			block_number: deployed.block_number,
			deployer: deployed.deployer,
			explorer_url,
			config_write,
		})
	}

	fn persist(&self, record: &DeploymentRecord) -> ConfigWrite {
		let targets = self.config.output_targets();

		match targets.write(record) {
			Ok(Some(path)) => {
				logging::operation_success(
					"config-write",
					&format!("Config saved to {}", self.config.display_path(&path)),
				);
				ConfigWrite::Written(path)
			},
			Ok(None) => {
				let candidates = targets
					.candidates()
					.iter()
					.map(|path| self.config.display_path(path))
					.collect::<Vec<_>>()
					.join(", ");
				logging::operation_warning(
					"config-write",
					"frontend path not found, skipping config write",
					&candidates,
				);
				ConfigWrite::Skipped
			},
			Err(e) => {
				logging::operation_warning(
					"config-write",
					&format!("Failed to write frontend config: {}", e),
					"deployment succeeded",
				);
				ConfigWrite::Failed(e)
			},
		}
	}
}
