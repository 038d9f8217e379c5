// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localizing drop-in replacement for a linter.
//!
//! A [`Localizer`] wraps the classes exposed by a [`LinterBackend`] so that
//! every diagnostic message they produce is rewritten from the configured
//! dictionaries. Everything else about the linter's interface is unchanged.
//!
//! ```no_run
//! use std::sync::Arc;
//! use lintloc::{Linter, LinterBackend, LintTextOptions, Localizer};
//!
//! # async fn example(backend: Arc<dyn LinterBackend>) -> Result<(), Box<dyn std::error::Error>> {
//! let localizer = Localizer::from_env(backend);
//! let linter = localizer.linter_class().instantiate(vec![serde_json::json!({})])?;
//!
//! for result in linter.lint_text("var x", LintTextOptions::default()).await? {
//! 	for message in result.messages {
//! 		println!("{}: {}", result.file_path, message.message);
//! 	}
//! }
//! localizer.shutdown();
//! # Ok(())
//! # }
//! ```

mod error;
mod localizer;

pub use error::LocalizerError;
pub use localizer::{Advanced, Localizer};

pub use lintloc_config::{ConfigError, LocalizerConfig};
pub use lintloc_core::{
	ConfigMode, Diagnostic, LintError, LintResult, LintTextOptions, Linter, LinterBackend,
	LinterClass, LoadOptions, TranslationData,
};
pub use lintloc_i18n::{Dictionary, Translation};
pub use lintloc_missing::MissingLogger;
pub use lintloc_proxy::{ProxyClass, TranslatingLinter};
