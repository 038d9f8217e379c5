// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation of whole lint results.

use std::sync::Arc;

use lintloc_core::{Diagnostic, LintResult};
use lintloc_i18n::{DictionaryStore, Translation};
use lintloc_missing::MissingLogger;
use tracing::{debug, trace};

/// Rewrites the messages of lint results and reports untranslated ones.
#[derive(Clone, Debug)]
pub struct ResultTranslator {
	dictionary: Arc<DictionaryStore>,
	logger: Option<MissingLogger>,
}

impl ResultTranslator {
	pub fn new(dictionary: Arc<DictionaryStore>, logger: Option<MissingLogger>) -> Self {
		Self { dictionary, logger }
	}

	pub fn dictionary(&self) -> &Arc<DictionaryStore> {
		&self.dictionary
	}

	pub fn logger(&self) -> Option<&MissingLogger> {
		self.logger.as_ref()
	}

	/// Translates every diagnostic of every result with the current
	/// dictionary. File order, diagnostic order and all other fields are
	/// preserved.
	pub fn translate_results(&self, results: Vec<LintResult>) -> Vec<LintResult> {
		let translator = self.dictionary.translator();

		results
			.into_iter()
			.map(|result| {
				debug!(
					file = %result.file_path,
					messages = result.messages.len(),
					"translating lint result"
				);

				let messages = translator
					.translate_all(result.messages)
					.into_iter()
					.map(|outcome| self.settle(outcome))
					.collect();

				LintResult { messages, ..result }
			})
			.collect()
	}

	fn settle(&self, outcome: Translation) -> Diagnostic {
		match outcome {
			Translation::Translated(diagnostic) => {
				trace!(
					rule_id = diagnostic.rule_id().unwrap_or("unknown"),
					message = %preview(&diagnostic.message),
					"translated diagnostic"
				);
				diagnostic
			}
			Translation::Unchanged(diagnostic) => {
				if let (Some(logger), Some(rule_id)) = (&self.logger, diagnostic.rule_id()) {
					logger.record(
						rule_id,
						diagnostic.message_id(),
						&diagnostic.message,
						diagnostic.data.as_ref(),
					);
				}
				diagnostic
			}
		}
	}
}

fn preview(message: &str) -> String {
	message.chars().take(80).collect()
}
