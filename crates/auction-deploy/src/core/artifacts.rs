//! Compiled contract artifact resolution
//!
//! Understands both Hardhat (`artifacts/contracts/<Name>.sol/<Name>.json`,
//! `bytecode` as a hex string) and Foundry (`out/<Name>.sol/<Name>.json`,
//! `bytecode.object`) output layouts.

use crate::types::{
	error::{Error, Result},
	Hex,
};
use alloy_primitives::Bytes;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Deployable contract loaded from a compiler artifact
#[derive(Debug, Clone)]
pub struct ContractArtifact {
	pub name: String,
	pub path: PathBuf,
	/// Creation bytecode submitted as the deployment transaction input
	pub bytecode: Bytes,
}

/// Lookup of compiled contracts below an artifacts directory
#[derive(Debug, Clone)]
pub struct ArtifactStore {
	root: PathBuf,
}

impl ArtifactStore {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Load a contract artifact by contract name
	///
	/// # Arguments
	/// * `name` - Contract name, matching the `<Name>.sol/<Name>.json` layout
	///
	/// # Returns
	/// The artifact with its decoded creation bytecode
	///
	/// # Errors
	/// Returns Error::ArtifactNotFound if no artifact exists for `name`, or
	/// Error::InvalidArtifact if the JSON has no usable creation bytecode
	pub fn load(&self, name: &str) -> Result<ContractArtifact> {
		let path = self.locate(name).ok_or_else(|| Error::ArtifactNotFound {
			name: name.to_string(),
			dir: self.root.clone(),
		})?;
		debug!(contract = name, path = %path.display(), "Loading contract artifact");

		let content = std::fs::read_to_string(&path)?;
		let json: Value = serde_json::from_str(&content).map_err(|e| Error::InvalidArtifact {
			path: path.clone(),
			reason: e.to_string(),
		})?;

		let bytecode = extract_bytecode(&path, &json)?;

		Ok(ContractArtifact {
			name: name.to_string(),
			path,
			bytecode,
		})
	}

	fn locate(&self, name: &str) -> Option<PathBuf> {
		let sol_dir = format!("{name}.sol");
		let file_name = format!("{name}.json");

		let possible_paths = [
			self.root.join("contracts").join(&sol_dir).join(&file_name),
			self.root.join(&sol_dir).join(&file_name),
		];

		possible_paths
			.into_iter()
			.find(|path| path.is_file())
			.or_else(|| find_nested(&self.root, &sol_dir, &file_name))
	}

	/// List contract names available below the artifacts directory
	///
	/// Skips Hardhat debug files, build-info, and test contracts.
	///
	/// # Returns
	/// Sorted, deduplicated contract names; empty if the directory is missing
	///
	/// # Errors
	/// Returns Error::Io if a directory below the root cannot be read
	pub fn list(&self) -> Result<Vec<String>> {
		let mut contracts = Vec::new();

		if self.root.is_dir() {
			collect_contracts(&self.root, &mut contracts)?;
		}

		contracts.sort();
		contracts.dedup();
		Ok(contracts)
	}
}

fn extract_bytecode(path: &Path, json: &Value) -> Result<Bytes> {
	let invalid = |reason: &str| Error::InvalidArtifact {
		path: path.to_path_buf(),
		reason: reason.to_string(),
	};

	let raw = match json.get("bytecode") {
		Some(Value::String(code)) => code.as_str(),
		Some(Value::Object(obj)) => obj
			.get("object")
			.and_then(Value::as_str)
			.ok_or_else(|| invalid("bytecode.object is missing"))?,
		_ => return Err(invalid("no bytecode found")),
	};

	if raw.contains("__$") {
		return Err(invalid("bytecode has unlinked library references"));
	}

	let bytecode = Hex::decode(raw).map_err(|e| invalid(&e.to_string()))?;
	if bytecode.is_empty() {
		return Err(invalid("empty bytecode (interface or abstract contract)"));
	}

	Ok(bytecode)
}

fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
	let mut entries: Vec<PathBuf> = match std::fs::read_dir(dir) {
		Ok(entries) => entries.flatten().map(|entry| entry.path()).collect(),
		Err(_) => Vec::new(),
	};
	entries.sort();
	entries
}

fn find_nested(dir: &Path, sol_dir: &str, file_name: &str) -> Option<PathBuf> {
	for path in sorted_entries(dir) {
		if !path.is_dir() || is_build_info(&path) {
			continue;
		}

		if path.file_name().and_then(|n| n.to_str()) == Some(sol_dir) {
			let candidate = path.join(file_name);
			if candidate.is_file() {
				return Some(candidate);
			}
		}

		if let Some(found) = find_nested(&path, sol_dir, file_name) {
			return Some(found);
		}
	}
	None
}

fn collect_contracts(dir: &Path, contracts: &mut Vec<String>) -> Result<()> {
	for entry in std::fs::read_dir(dir)? {
		let path = entry?.path();
		if !path.is_dir() || is_build_info(&path) {
			continue;
		}

		let is_sol_dir = path
			.file_name()
			.and_then(|n| n.to_str())
			.is_some_and(|n| n.ends_with(".sol"));

		if is_sol_dir {
			for json_path in sorted_entries(&path) {
				let Some(file_name) = json_path.file_name().and_then(|n| n.to_str()) else {
					continue;
				};
				if file_name.ends_with(".dbg.json") || !file_name.ends_with(".json") {
					continue;
				}
				let contract = file_name.trim_end_matches(".json");
				if !contract.contains("Test") {
					contracts.push(contract.to_string());
				}
			}
		} else {
			collect_contracts(&path, contracts)?;
		}
	}
	Ok(())
}

fn is_build_info(path: &Path) -> bool {
	path.file_name().and_then(|n| n.to_str()) == Some("build-info")
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use tempfile::TempDir;

	fn write_json(path: &Path, value: &Value) {
		std::fs::create_dir_all(path.parent().unwrap()).unwrap();
		std::fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
	}

	fn hardhat_artifact(root: &Path, name: &str, bytecode: &str) {
		write_json(
			&root.join(format!("contracts/{name}.sol/{name}.json")),
			&json!({ "contractName": name, "abi": [], "bytecode": bytecode }),
		);
		write_json(
			&root.join(format!("contracts/{name}.sol/{name}.dbg.json")),
			&json!({ "buildInfo": "../../build-info/abc.json" }),
		);
	}

	#[test]
	fn loads_hardhat_artifact() {
		let temp_dir = TempDir::new().unwrap();
		hardhat_artifact(temp_dir.path(), "SimpleAuction", "0x6080604052");

		let artifact = ArtifactStore::new(temp_dir.path())
			.load("SimpleAuction")
			.unwrap();

		assert_eq!(artifact.name, "SimpleAuction");
		assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
		assert!(artifact.path.ends_with("contracts/SimpleAuction.sol/SimpleAuction.json"));
	}

	#[test]
	fn loads_foundry_artifact() {
		let temp_dir = TempDir::new().unwrap();
		write_json(
			&temp_dir.path().join("SimpleAuction.sol/SimpleAuction.json"),
			&json!({ "abi": [], "bytecode": { "object": "0x60806040" } }),
		);

		let artifact = ArtifactStore::new(temp_dir.path())
			.load("SimpleAuction")
			.unwrap();
		assert_eq!(artifact.bytecode.len(), 4);
	}

	#[test]
	fn finds_artifacts_in_nested_source_folders() {
		let temp_dir = TempDir::new().unwrap();
		write_json(
			&temp_dir
				.path()
				.join("contracts/auction/SimpleAuction.sol/SimpleAuction.json"),
			&json!({ "bytecode": "0x6080" }),
		);

		assert!(ArtifactStore::new(temp_dir.path()).load("SimpleAuction").is_ok());
	}

	#[test]
	fn missing_artifact_is_reported() {
		let temp_dir = TempDir::new().unwrap();
		let err = ArtifactStore::new(temp_dir.path())
			.load("SimpleAuction")
			.unwrap_err();
		assert!(matches!(err, Error::ArtifactNotFound { name, .. } if name == "SimpleAuction"));
	}

	#[test]
	fn empty_bytecode_is_rejected() {
		let temp_dir = TempDir::new().unwrap();
		hardhat_artifact(temp_dir.path(), "IAuction", "0x");

		let err = ArtifactStore::new(temp_dir.path()).load("IAuction").unwrap_err();
		assert!(matches!(err, Error::InvalidArtifact { .. }));
	}

	#[test]
	fn unlinked_bytecode_is_rejected() {
		let temp_dir = TempDir::new().unwrap();
		hardhat_artifact(
			temp_dir.path(),
			"Linked",
			"0x6080__$3d5c2a9c3b4e7f0b6a1d2e3f4a5b6c7d8e$__6040",
		);

		let err = ArtifactStore::new(temp_dir.path()).load("Linked").unwrap_err();
		assert!(err.to_string().contains("unlinked"));
	}

	#[test]
	fn lists_contracts_without_debug_and_test_files() {
		let temp_dir = TempDir::new().unwrap();
		hardhat_artifact(temp_dir.path(), "SimpleAuction", "0x6080");
		hardhat_artifact(temp_dir.path(), "AuctionTest", "0x6080");
		write_json(
			&temp_dir.path().join("build-info/abc.json"),
			&json!({ "id": "abc" }),
		);
		write_json(
			&temp_dir.path().join("Token.sol/Token.json"),
			&json!({ "bytecode": { "object": "0x6080" } }),
		);

		let contracts = ArtifactStore::new(temp_dir.path()).list().unwrap();
		assert_eq!(contracts, vec!["SimpleAuction".to_string(), "Token".to_string()]);
	}

	#[test]
	fn listing_a_missing_directory_is_empty() {
		let store = ArtifactStore::new("/definitely/not/here");
		assert!(store.list().unwrap().is_empty());
	}
}
