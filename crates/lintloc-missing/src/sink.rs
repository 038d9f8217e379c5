// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Destinations for flushed entries.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::entry::MissingEntry;
use crate::error::MissingLogError;

/// Receives batches of entries when the logger flushes.
pub trait MissingSink: Send + Sync {
	fn append(&self, entries: &[MissingEntry]) -> Result<(), MissingLogError>;
}

/// Appends entries to a JSON-lines file. The file is never truncated.
#[derive(Debug, Clone)]
pub struct JsonlFileSink {
	path: PathBuf,
}

impl JsonlFileSink {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl MissingSink for JsonlFileSink {
	fn append(&self, entries: &[MissingEntry]) -> Result<(), MissingLogError> {
		if entries.is_empty() {
			return Ok(());
		}

		let mut lines = String::new();
		for entry in entries {
			lines.push_str(&entry.to_json_line()?);
			lines.push('\n');
		}

		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() {
				std::fs::create_dir_all(parent)?;
			}
		}

		let mut file = OpenOptions::new()
			.create(true)
			.append(true)
			.open(&self.path)?;
		file.write_all(lines.as_bytes())?;
		Ok(())
	}
}
