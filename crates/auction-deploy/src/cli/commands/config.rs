//! Config command definition

use super::ConfigArgs;
use clap::Args;

/// Show the resolved configuration without deploying
#[derive(Args, Debug)]
pub struct ConfigCommand {
	#[command(flatten)]
	pub config: ConfigArgs,
}
