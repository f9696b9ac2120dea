//! Deployment tool for the SimpleAuction contract
//!
//! Deploys a compiled contract artifact to an EVM network (Monad testnet by
//! default) and writes the contract address and chain id to the frontend's
//! `deployed.json`.

pub mod cli;
pub mod constants;
pub mod core;
pub mod operations;
pub mod types;

pub use self::core::{
	AlloyChainClient, ArtifactStore, ChainClient, ConfigOverrides, ContractArtifact,
	DeployConfig, DeployedContract, OutputTargets,
};
pub use operations::{ConfigWrite, DeploymentReport, DeploymentRunner};
pub use types::{ChainId, DeploymentRecord, Error, PersistError, Result};
