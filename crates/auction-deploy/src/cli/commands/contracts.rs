//! Contracts command definition

use super::ConfigArgs;
use clap::Args;

/// List contract artifacts available for deployment
#[derive(Args, Debug)]
pub struct ContractsCommand {
	#[command(flatten)]
	pub config: ConfigArgs,
}
