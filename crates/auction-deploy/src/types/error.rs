//! Error types and result handling for the deployment tool
//!
//! Errors are split in two tiers. [`Error`] covers everything that aborts a
//! deployment run and maps to a failing exit code. [`PersistError`] covers
//! writing the frontend config file after a successful deployment; it is
//! logged and reported but never fails the run.

use alloy_primitives::B256;
use std::path::PathBuf;

/// Convenience Result type alias using the local Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors raised while configuring or performing a deployment
#[derive(thiserror::Error, Debug)]
pub enum Error {
	// Config errors
	#[error("Configuration file not found: {0}")]
	ConfigNotFound(PathBuf),

	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("Missing required field: {0}")]
	MissingField(String),

	// Artifact errors
	#[error("Contract artifact {name} not found in {}", .dir.display())]
	ArtifactNotFound { name: String, dir: PathBuf },

	#[error("Invalid contract artifact {}: {reason}", .path.display())]
	InvalidArtifact { path: PathBuf, reason: String },

	// Signing errors
	#[error("Invalid private key")]
	InvalidPrivateKey,

	#[error("Invalid hex string: {0}")]
	InvalidHex(String),

	// Chain errors
	#[error("RPC connection failed: {0}")]
	RpcError(String),

	#[error("Connected to chain {actual}, but chain {expected} was expected")]
	ChainMismatch { expected: u64, actual: u64 },

	#[error("Deployment failed: {0}")]
	DeploymentFailed(String),

	#[error("Deployment transaction {0:?} reverted")]
	DeploymentReverted(B256),

	#[error("Transaction {0} not confirmed before the receipt timeout; it may still be mined")]
	TxNotFound(B256),

	// IO errors
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
	fn from(err: toml::de::Error) -> Self {
		// Keep the message only, not the whole input dump
		Error::InvalidConfig(err.message().to_string())
	}
}

/// Errors raised while persisting the deployment record for the frontend
#[derive(thiserror::Error, Debug)]
pub enum PersistError {
	#[error("Failed to serialize deployment record: {0}")]
	Serialize(#[from] serde_json::Error),

	#[error("Failed to write {}: {source}", .path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}
