// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the missing-translation log.

use std::path::PathBuf;

use thiserror::Error;

/// Failure writing buffered entries to a sink.
#[derive(Debug, Error)]
pub enum MissingLogError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Failure reading a missing log back for reporting.
#[derive(Debug, Error)]
pub enum ReportError {
	#[error("failed to read {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid entry on line {line}: {source}")]
	Parse {
		line: usize,
		#[source]
		source: serde_json::Error,
	},
}
