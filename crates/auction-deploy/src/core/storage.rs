//! Frontend config persistence
//!
//! The deployment record is written to the first candidate file whose parent
//! directory already exists. Directories are never created: a missing
//! frontend checkout simply means there is nothing to update.

use crate::types::error::PersistError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Ordered candidate files for the frontend deployment config
#[derive(Debug, Clone)]
pub struct OutputTargets {
	candidates: Vec<PathBuf>,
}

impl OutputTargets {
	/// Creates the target list; earlier entries take priority
	pub fn new(candidates: Vec<PathBuf>) -> Self {
		Self { candidates }
	}

	/// All candidates in priority order
	pub fn candidates(&self) -> &[PathBuf] {
		&self.candidates
	}

	/// First candidate whose parent directory exists
	///
	/// A bare file name counts as living in the working directory.
	///
	/// # Returns
	/// The selected path, or `None` when no candidate directory exists
	pub fn select(&self) -> Option<&Path> {
		self.candidates
			.iter()
			.map(PathBuf::as_path)
			.find(|path| parent_dir(path).is_dir())
	}

	/// Serializes `value` as pretty JSON into the selected target
	///
	/// # Arguments
	/// * `value` - Data to persist, typically a deployment record
	///
	/// # Returns
	/// The written path, or `None` when no candidate directory exists
	///
	/// # Errors
	/// Returns PersistError if serialization or the file write fails
	pub fn write<T: Serialize>(&self, value: &T) -> Result<Option<PathBuf>, PersistError> {
		let Some(path) = self.select() else {
			return Ok(None);
		};

		let content = serde_json::to_string_pretty(value)?;
		std::fs::write(path, content).map_err(|source| PersistError::Write {
			path: path.to_path_buf(),
			source,
		})?;

		Ok(Some(path.to_path_buf()))
	}
}

fn parent_dir(path: &Path) -> &Path {
	match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	}
}
