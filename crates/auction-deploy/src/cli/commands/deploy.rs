//! Deploy command definition

use super::ConfigArgs;
use clap::Args;

/// Deploy the contract and write the frontend config
#[derive(Args, Debug)]
pub struct DeployCommand {
	#[command(flatten)]
	pub config: ConfigArgs,
}
