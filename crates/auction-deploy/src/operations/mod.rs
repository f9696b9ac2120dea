//! High-level operations invoked by the CLI

pub mod deploy;

pub use deploy::{ConfigWrite, DeploymentReport, DeploymentRunner};
