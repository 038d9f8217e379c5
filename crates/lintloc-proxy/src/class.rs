// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use lintloc_core::{ConfigMode, LintError, Linter, LinterClass};
use serde_json::Value;

use crate::interceptor::ResultTranslator;
use crate::linter::TranslatingLinter;
use crate::options::normalize_args;

/// A linter class that builds [`TranslatingLinter`]s around its base class.
///
/// Class metadata is the base's; construction differs only in that the
/// configuration object gets a default `cwd`.
pub struct ProxyClass {
	base: Arc<dyn LinterClass>,
	translator: ResultTranslator,
}

impl ProxyClass {
	pub(crate) fn new(base: Arc<dyn LinterClass>, translator: ResultTranslator) -> Self {
		Self { base, translator }
	}

	pub fn base(&self) -> &Arc<dyn LinterClass> {
		&self.base
	}

	pub fn translator(&self) -> &ResultTranslator {
		&self.translator
	}

	/// Builds a translating instance. Returns the concrete type, unlike
	/// [`LinterClass::construct`].
	pub fn instantiate(&self, args: Vec<Value>) -> Result<TranslatingLinter, LintError> {
		let inner = self.base.construct(normalize_args(args))?;
		Ok(TranslatingLinter::new(inner, self.translator.clone()))
	}
}

impl std::fmt::Debug for ProxyClass {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ProxyClass")
			.field("base", &self.base.name())
			.field("version", &self.base.version())
			.finish()
	}
}

impl LinterClass for ProxyClass {
	fn name(&self) -> &str {
		self.base.name()
	}

	fn version(&self) -> &str {
		self.base.version()
	}

	fn config_mode(&self) -> ConfigMode {
		self.base.config_mode()
	}

	fn construct(&self, args: Vec<Value>) -> Result<Box<dyn Linter>, LintError> {
		Ok(Box::new(self.instantiate(args)?))
	}
}
