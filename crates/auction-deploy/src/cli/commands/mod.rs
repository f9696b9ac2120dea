//! CLI command definitions and argument parsing

mod args;
mod config;
mod contracts;
mod deploy;

pub use args::ConfigArgs;
pub use config::ConfigCommand;
pub use contracts::ContractsCommand;
pub use deploy::DeployCommand;
