// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

/// Errors that can occur while reading a dictionary source.
///
/// The store never returns these to callers; a failing source contributes an
/// empty dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
	#[error("failed to read dictionary {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse dictionary '{name}': {source}")]
	Parse {
		name: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("unknown dictionary source '{0}'")]
	UnknownSource(String),
}
