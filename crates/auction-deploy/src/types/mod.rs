//! Type definitions shared across the deployment tool
//!
//! Chain identifiers, the two error tiers, hex helpers, the redacting
//! secret wrapper, and the deployment record written for the frontend.

pub mod chain;
pub mod error;
pub mod hex;
pub mod record;
pub mod secret;

pub use chain::ChainId;
pub use error::{Error, PersistError, Result};
pub use hex::Hex;
pub use record::DeploymentRecord;
pub use secret::SecretString;
