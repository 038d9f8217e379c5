// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use lintloc_config::LocalizerConfig;
use lintloc_core::{LintResult, LinterBackend, LoadOptions};
use lintloc_i18n::{Dictionary, DictionaryStore};
use lintloc_missing::MissingLogger;
use lintloc_proxy::{ProxyClass, ProxyFactory, ResultTranslator};
use tracing::{debug, info};

use crate::error::LocalizerError;

/// The localizing view of a [`LinterBackend`].
///
/// Wrapped classes are cached by base class, so the backend should hand out
/// the same `Arc` for a class on every call.
pub struct Localizer {
	backend: Arc<dyn LinterBackend>,
	factory: ProxyFactory,
}

impl Localizer {
	pub fn new(config: LocalizerConfig, backend: Arc<dyn LinterBackend>) -> Self {
		let dictionary = Arc::new(DictionaryStore::new(config.dictionary));

		let logger = if config.missing_log.enabled {
			info!(path = %config.missing_log.path.display(), "logging missing translations");
			Some(MissingLogger::to_file(&config.missing_log))
		} else {
			None
		};

		Self {
			backend,
			factory: ProxyFactory::new(ResultTranslator::new(dictionary, logger)),
		}
	}

	/// Builds a localizer configured from `LINTLOC_*` environment variables.
	pub fn from_env(backend: Arc<dyn LinterBackend>) -> Self {
		Self::new(LocalizerConfig::from_env(), backend)
	}

	/// The default (flat config) linter class, wrapped.
	pub fn linter_class(&self) -> Arc<ProxyClass> {
		self.factory.wrap(self.backend.flat_class())
	}

	/// Resolves a class through the backend's loader and wraps it.
	pub async fn load_linter(&self, options: LoadOptions) -> Result<Arc<ProxyClass>, LocalizerError> {
		let base = self.backend.load(options.clone()).await?;
		debug!(flat = options.wants_flat(), class = %base.name(), "loaded linter class");
		Ok(self.factory.wrap(base))
	}

	/// Access to both configuration-mode variants.
	pub fn advanced(&self) -> Advanced<'_> {
		Advanced { localizer: self }
	}

	/// Translates results obtained outside a wrapped linter.
	pub fn translate_results(&self, results: Vec<LintResult>) -> Vec<LintResult> {
		self.factory.translator().translate_results(results)
	}

	pub fn dictionary(&self) -> Arc<Dictionary> {
		self.factory.translator().dictionary().get()
	}

	pub fn missing_logger(&self) -> Option<&MissingLogger> {
		self.factory.translator().logger()
	}

	/// Flushes pending missing-translation entries.
	pub fn shutdown(&self) {
		if let Some(logger) = self.missing_logger() {
			logger.shutdown();
		}
	}
}

impl std::fmt::Debug for Localizer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Localizer")
			.field("translator", self.factory.translator())
			.field("wrapped_classes", &self.factory.cached_len())
			.finish()
	}
}

/// Wrapped flat and legacy linter classes.
#[derive(Debug)]
pub struct Advanced<'a> {
	localizer: &'a Localizer,
}

impl Advanced<'_> {
	pub fn flat_linter_class(&self) -> Arc<ProxyClass> {
		self.localizer.linter_class()
	}

	pub fn legacy_linter_class(&self) -> Arc<ProxyClass> {
		let localizer = self.localizer;
		localizer.factory.wrap(localizer.backend.legacy_class())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use lintloc_core::{
		ConfigMode, Diagnostic, LintError, LintTextOptions, Linter, LinterClass,
	};
	use lintloc_i18n::DictionaryConfig;
	use lintloc_missing::{report, MissingLogConfig};
	use serde_json::Value;
	use std::path::Path;
	use tempfile::TempDir;

	struct FixedLinter {
		results: Vec<LintResult>,
	}

	#[async_trait]
	impl Linter for FixedLinter {
		async fn lint_files(&self, _patterns: &[String]) -> Result<Vec<LintResult>, LintError> {
			Ok(self.results.clone())
		}

		async fn lint_text(
			&self,
			_code: &str,
			_options: LintTextOptions,
		) -> Result<Vec<LintResult>, LintError> {
			Ok(self.results.clone())
		}

		async fn is_path_ignored(&self, _path: &Path) -> Result<bool, LintError> {
			Ok(false)
		}
	}

	struct FixedClass {
		mode: ConfigMode,
	}

	impl LinterClass for FixedClass {
		fn name(&self) -> &str {
			match self.mode {
				ConfigMode::Flat => "FlatLinter",
				ConfigMode::Legacy => "LegacyLinter",
			}
		}

		fn version(&self) -> &str {
			"9.1.0"
		}

		fn config_mode(&self) -> ConfigMode {
			self.mode
		}

		fn construct(&self, _args: Vec<Value>) -> Result<Box<dyn Linter>, LintError> {
			Ok(Box::new(FixedLinter { results: sample() }))
		}
	}

	struct Backend {
		flat: Arc<dyn LinterClass>,
		legacy: Arc<dyn LinterClass>,
	}

	impl Backend {
		fn new() -> Arc<Self> {
			Arc::new(Self {
				flat: Arc::new(FixedClass { mode: ConfigMode::Flat }),
				legacy: Arc::new(FixedClass { mode: ConfigMode::Legacy }),
			})
		}
	}

	#[async_trait]
	impl LinterBackend for Backend {
		fn flat_class(&self) -> Arc<dyn LinterClass> {
			Arc::clone(&self.flat)
		}

		fn legacy_class(&self) -> Arc<dyn LinterClass> {
			Arc::clone(&self.legacy)
		}
	}

	fn sample() -> Vec<LintResult> {
		vec![LintResult::new(
			"src/app.ts",
			vec![
				Diagnostic::new("Missing semicolon.").with_rule("semi", "missingSemi"),
				Diagnostic::new("Custom failure.").with_rule("local/custom", "bad"),
			],
		)]
	}

	fn config() -> LocalizerConfig {
		LocalizerConfig {
			dictionary: DictionaryConfig::default(),
			missing_log: MissingLogConfig {
				enabled: false,
				..MissingLogConfig::new("unused.jsonl")
			},
		}
	}

	#[test]
	fn linter_class_is_stable() {
		let localizer = Localizer::new(config(), Backend::new());
		let a = localizer.linter_class();
		let b = localizer.linter_class();
		assert!(Arc::ptr_eq(&a, &b));
		assert_eq!(a.name(), "FlatLinter");
	}

	#[tokio::test]
	async fn loader_returns_cached_wrappers() {
		let localizer = Localizer::new(config(), Backend::new());

		let flat = localizer.load_linter(LoadOptions::default()).await.unwrap();
		assert!(Arc::ptr_eq(&flat, &localizer.linter_class()));

		let legacy = localizer.load_linter(LoadOptions::legacy()).await.unwrap();
		assert_eq!(legacy.config_mode(), ConfigMode::Legacy);
		assert!(Arc::ptr_eq(&legacy, &localizer.advanced().legacy_linter_class()));
		assert!(!Arc::ptr_eq(&flat, &legacy));
	}

	#[test]
	fn advanced_exposes_both_variants() {
		let localizer = Localizer::new(config(), Backend::new());
		let advanced = localizer.advanced();
		assert_eq!(advanced.flat_linter_class().name(), "FlatLinter");
		assert_eq!(advanced.legacy_linter_class().name(), "LegacyLinter");
	}

	#[tokio::test]
	async fn wrapped_linter_translates_with_bundled_dictionaries() {
		let localizer = Localizer::new(config(), Backend::new());
		let linter = localizer.linter_class().instantiate(Vec::new()).unwrap();

		let results = linter
			.lint_text("let a = 1", LintTextOptions::default())
			.await
			.unwrap();

		let expected = localizer.dictionary().template("semi", "missingSemi").unwrap().to_string();
		assert_eq!(results[0].messages[0].message, expected);
		assert_eq!(results[0].messages[1].message, "Custom failure.");
	}

	#[test]
	fn shutdown_writes_missing_translations() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("logs").join("missing.jsonl");
		let config = LocalizerConfig {
			dictionary: DictionaryConfig::default(),
			missing_log: MissingLogConfig::new(&path),
		};
		let localizer = Localizer::new(config, Backend::new());
		assert!(localizer.missing_logger().is_some());

		localizer.translate_results(sample());
		localizer.shutdown();

		let entries = report::read_log(&path).unwrap();
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].rule_id, "local/custom");
		assert_eq!(entries[0].message_id.as_deref(), Some("bad"));
	}

	#[test]
	fn disabled_log_has_no_logger() {
		let localizer = Localizer::new(config(), Backend::new());
		assert!(localizer.missing_logger().is_none());
		localizer.shutdown();
	}
}
