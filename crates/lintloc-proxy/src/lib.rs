// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translating wrappers around linter classes.
//!
//! [`ProxyFactory::wrap`] turns any [`LinterClass`](lintloc_core::LinterClass)
//! into a [`ProxyClass`] with the same interface. Instances built by the proxy
//! delegate every call to the base instance; `lint_files` and `lint_text`
//! additionally pass their results through a [`ResultTranslator`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use lintloc_core::{LinterClass, LintTextOptions};
//! use lintloc_i18n::DictionaryStore;
//! use lintloc_proxy::{ProxyFactory, ResultTranslator};
//!
//! # async fn example(base: Arc<dyn LinterClass>) -> Result<(), Box<dyn std::error::Error>> {
//! let translator = ResultTranslator::new(Arc::new(DictionaryStore::default()), None);
//! let factory = ProxyFactory::new(translator);
//!
//! let class = factory.wrap(base);
//! let linter = class.construct(vec![serde_json::json!({})])?;
//! let results = linter
//! 	.lint_text("const unused = 1;", LintTextOptions::default().with_file_path("test.js"))
//! 	.await?;
//! # let _ = results;
//! # Ok(())
//! # }
//! ```

mod class;
mod factory;
mod interceptor;
mod linter;
mod options;

pub use class::ProxyClass;
pub use factory::ProxyFactory;
pub use interceptor::ResultTranslator;
pub use linter::TranslatingLinter;
pub use options::{normalize_args, normalize_options, CWD_OPTION};
