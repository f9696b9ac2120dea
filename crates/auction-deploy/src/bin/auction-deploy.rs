//! Main binary entry point for the auction deployment CLI
//!
//! Parses arguments, sets up logging, and dispatches to the command
//! handlers. Any fatal error is printed to stderr and turns into exit code 1;
//! a failed frontend config write does not.

use anyhow::Result;
use auction_deploy::{
	cli::{commands::ConfigArgs, output::Display, Cli, Commands},
	core::logging,
	AlloyChainClient, ArtifactStore, ConfigWrite, DeployConfig, DeploymentRunner,
};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
	// Load environment variables from .env file if it exists
	let _ = dotenvy::dotenv();

	init_logging();

	let cli = Cli::parse();

	let (operation, result) = match cli.command {
		Commands::Deploy(cmd) => ("Deployment", handle_deploy(cmd.config).await),
		Commands::Contracts(cmd) => ("Listing contracts", handle_contracts(cmd.config)),
		Commands::Config(cmd) => ("Loading configuration", handle_config(cmd.config)),
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			logging::operation_error(operation, &error);
			ExitCode::FAILURE
		},
	}
}

/// Initialize structured logging
///
/// Logs go to stderr so they never mix with the console summary. Verbosity
/// is controlled via RUST_LOG.
fn init_logging() {
	use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("auction_deploy=info,warn"));

	tracing_subscriber::registry()
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(true)
				.with_thread_ids(false)
				.with_file(false)
				.with_line_number(false)
				.compact(),
		)
		.with(env_filter)
		.init();
}

/// Handle deploy command
#[instrument(skip(args))]
async fn handle_deploy(args: ConfigArgs) -> Result<()> {
	let config = Arc::new(DeployConfig::load(args.into())?);
	let signer = config.signer()?;

	Display::header("Connecting");
	Display::kv("RPC Endpoint", &config.rpc_url);
	info!(rpc_url = %config.rpc_url, contract = %config.contract, "Connecting to network");

	let client = AlloyChainClient::connect(&config.rpc_url, signer, config.receipt_timeout).await?;

	let runner = DeploymentRunner::new(config.clone(), Arc::new(client));
	let report = runner.run().await?;

	if !matches!(report.config_write, ConfigWrite::Written(_)) {
		let set_address = format!(
			"Set contractAddress to {} in the frontend config",
			report.record.contract_address
		);
		let set_chain = format!("Set chainId to {}", report.record.chain_id);
		Display::next_steps(&[set_address.as_str(), set_chain.as_str()]);
	}

	Ok(())
}

/// Handle contracts command
#[instrument(skip(args))]
fn handle_contracts(args: ConfigArgs) -> Result<()> {
	let config = DeployConfig::load(args.into())?;
	let store = ArtifactStore::new(config.artifacts_dir.clone());

	Display::header("Available Contracts");
	Display::kv("Artifacts Path", &store.root().display().to_string());

	let contracts = store.list()?;
	if contracts.is_empty() {
		Display::warning("No compiled contracts found");
		Display::next_steps(&[
			"Compile the contracts with 'npx hardhat compile' or 'forge build'",
			"Point --artifacts at the compiler output directory",
		]);
		return Ok(());
	}

	for contract in contracts {
		let marker = if contract == config.contract {
			" (default)"
		} else {
			""
		};
		Display::info(&format!("- {}{}", contract, marker));
	}

	Ok(())
}

/// Handle config command
#[instrument(skip(args))]
fn handle_config(args: ConfigArgs) -> Result<()> {
	let config = DeployConfig::load(args.into())?;

	Display::header("Current Configuration");
	Display::kv(
		"Config file",
		&config
			.source
			.as_ref()
			.map(|path| path.display().to_string())
			.unwrap_or_else(|| "none (defaults)".to_string()),
	);
	Display::kv("Project root", &config.project_root.display().to_string());
	Display::kv("RPC Endpoint", &config.rpc_url);
	Display::kv(
		"Expected chain",
		&config
			.expected_chain_id
			.map(|id| auction_deploy::ChainId::from_u64(id).to_string())
			.unwrap_or_else(|| "any".to_string()),
	);
	Display::kv("Contract", &config.contract);
	Display::kv("Artifacts", &config.display_path(&config.artifacts_dir));
	Display::kv("Explorer", &config.explorer_url);
	Display::kv(
		"Receipt timeout",
		&config
			.receipt_timeout
			.map(|timeout| format!("{}s", timeout.as_secs()))
			.unwrap_or_else(|| "none (wait until mined)".to_string()),
	);

	let deployer = match (&config.private_key, config.signer()) {
		(None, _) => "not set".to_string(),
		(Some(_), Ok(signer)) => signer.address().to_checksum(None),
		(Some(_), Err(e)) => format!("invalid ({})", e),
	};
	Display::kv("Deployer", &deployer);

	Display::section("Output targets");
	let targets = config.output_targets();
	let selected = targets.select();
	for (i, path) in targets.candidates().iter().enumerate() {
		let status = if selected == Some(path.as_path()) {
			"selected"
		} else if path.parent().is_some_and(|dir| dir.is_dir()) {
			"available"
		} else {
			"directory missing"
		};
		println!("  {}. {} ({})", i + 1, config.display_path(path), status);
	}

	Ok(())
}
