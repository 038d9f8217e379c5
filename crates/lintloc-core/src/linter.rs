// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Collaborator traits for the wrapped linter.
//!
//! A [`LinterClass`] plays the role of a constructor: it builds [`Linter`]
//! instances from variable-arity JSON arguments. A [`LinterBackend`] is the
//! module that hands out classes, including the dynamic loader that selects
//! between flat-config and legacy-config variants.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostic::LintResult;
use crate::error::LintError;

/// Options accepted by [`Linter::lint_text`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintTextOptions {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub file_path: Option<PathBuf>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub warn_ignored: Option<bool>,
}

impl LintTextOptions {
	pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.file_path = Some(path.into());
		self
	}
}

/// Which configuration system a linter class understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigMode {
	Flat,
	Legacy,
}

/// Options for [`LinterBackend::load`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadOptions {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub use_flat_config: Option<bool>,
}

impl LoadOptions {
	pub fn flat() -> Self {
		Self {
			use_flat_config: Some(true),
		}
	}

	pub fn legacy() -> Self {
		Self {
			use_flat_config: Some(false),
		}
	}

	/// Flat config is the default when the flag is not given.
	pub fn wants_flat(&self) -> bool {
		self.use_flat_config.unwrap_or(true)
	}
}

/// A constructed linter instance.
#[async_trait]
pub trait Linter: Send + Sync {
	/// Lints the files matching the given patterns.
	async fn lint_files(&self, patterns: &[String]) -> Result<Vec<LintResult>, LintError>;

	/// Lints source text, optionally attributed to a file path.
	async fn lint_text(
		&self,
		code: &str,
		options: LintTextOptions,
	) -> Result<Vec<LintResult>, LintError>;

	/// Reports whether the linter's ignore rules exclude `path`.
	async fn is_path_ignored(&self, path: &Path) -> Result<bool, LintError>;
}

/// A linter "constructor" together with its class-level metadata.
pub trait LinterClass: Send + Sync {
	fn name(&self) -> &str;

	fn version(&self) -> &str;

	fn config_mode(&self) -> ConfigMode;

	/// Builds an instance. The first argument, when present, is the
	/// configuration object.
	fn construct(&self, args: Vec<Value>) -> Result<Box<dyn Linter>, LintError>;
}

/// The module exposing linter classes.
#[async_trait]
pub trait LinterBackend: Send + Sync {
	fn flat_class(&self) -> Arc<dyn LinterClass>;

	fn legacy_class(&self) -> Arc<dyn LinterClass>;

	/// Resolves the class matching `options`.
	async fn load(&self, options: LoadOptions) -> Result<Arc<dyn LinterClass>, LintError> {
		if options.wants_flat() {
			Ok(self.flat_class())
		} else {
			Ok(self.legacy_class())
		}
	}
}
