// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::Path;

use async_trait::async_trait;
use lintloc_core::{LintError, LintResult, LintTextOptions, Linter};
use tracing::instrument;

use crate::interceptor::ResultTranslator;

/// A linter instance whose lint results come back translated.
///
/// Errors from the base instance are returned as they are.
pub struct TranslatingLinter {
	inner: Box<dyn Linter>,
	translator: ResultTranslator,
}

impl TranslatingLinter {
	pub fn new(inner: Box<dyn Linter>, translator: ResultTranslator) -> Self {
		Self { inner, translator }
	}

	pub fn inner(&self) -> &dyn Linter {
		self.inner.as_ref()
	}
}

#[async_trait]
impl Linter for TranslatingLinter {
	#[instrument(skip(self), level = "debug")]
	async fn lint_files(&self, patterns: &[String]) -> Result<Vec<LintResult>, LintError> {
		let results = self.inner.lint_files(patterns).await?;
		Ok(self.translator.translate_results(results))
	}

	#[instrument(skip(self, code), level = "debug")]
	async fn lint_text(
		&self,
		code: &str,
		options: LintTextOptions,
	) -> Result<Vec<LintResult>, LintError> {
		let results = self.inner.lint_text(code, options).await?;
		Ok(self.translator.translate_results(results))
	}

	async fn is_path_ignored(&self, path: &Path) -> Result<bool, LintError> {
		self.inner.is_path_ignored(path).await
	}
}
