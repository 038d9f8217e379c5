// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors raised by a wrapped linter.
///
/// The proxy never produces these itself; they are passed through to the
/// caller exactly as the base linter reported them.
#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum LintError {
	#[error("Invalid options: {0}")]
	InvalidOptions(String),

	#[error("No files matching pattern: {0}")]
	NoFilesFound(String),

	#[error("IO error: {0}")]
	Io(String),

	#[error("Rule '{rule_id}' failed: {message}")]
	Rule { rule_id: String, message: String },

	#[error("Linter unavailable: {0}")]
	Unavailable(String),

	#[error("Internal error: {0}")]
	Internal(String),
}

impl From<std::io::Error> for LintError {
	fn from(err: std::io::Error) -> Self {
		LintError::Io(err.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn io_errors_convert_to_string_variant() {
		let err: LintError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
		assert_eq!(err, LintError::Io("gone".to_string()));
	}

	#[test]
	fn rule_error_display_names_rule() {
		let err = LintError::Rule {
			rule_id: "no-undef".to_string(),
			message: "boom".to_string(),
		};
		assert_eq!(err.to_string(), "Rule 'no-undef' failed: boom");
	}
}
