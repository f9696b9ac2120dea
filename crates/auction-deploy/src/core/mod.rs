//! Core building blocks of the deployment tool
//!
//! Configuration loading, contract artifact lookup, the chain client used to
//! deploy, frontend config persistence, and logging helpers.

pub mod artifacts;
pub mod blockchain;
pub mod config;
pub mod logging;
pub mod storage;

pub use artifacts::{ArtifactStore, ContractArtifact};
pub use blockchain::{AlloyChainClient, ChainClient, DeployedContract};
pub use config::{ConfigOverrides, DeployConfig};
pub use storage::OutputTargets;
