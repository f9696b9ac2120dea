//! Command-line interface definitions and parsing

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Deploys the auction contract and wires the frontend to it
#[derive(Parser, Debug)]
#[command(name = "auction-deploy")]
#[command(about = "Deploy SimpleAuction to Monad and write the frontend deployment config")]
#[command(version)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Deploy the contract and write the frontend config
	Deploy(commands::DeployCommand),

	/// List compiled contracts available for deployment
	Contracts(commands::ContractsCommand),

	/// Show the resolved configuration
	Config(commands::ConfigCommand),
}
