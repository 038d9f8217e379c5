// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Diagnostic translation.

use std::sync::Arc;

use lintloc_core::{Diagnostic, TranslationData};

use crate::dictionary::Dictionary;
use crate::template::substitute;

/// Outcome of translating one diagnostic.
///
/// `Unchanged` hands back the value that was passed in, moved rather than
/// rebuilt, so callers can tell "no dictionary entry" apart from a template
/// that happens to equal the original text.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum Translation {
	Translated(Diagnostic),
	Unchanged(Diagnostic),
}

impl Translation {
	pub fn is_translated(&self) -> bool {
		matches!(self, Translation::Translated(_))
	}

	pub fn diagnostic(&self) -> &Diagnostic {
		match self {
			Translation::Translated(d) | Translation::Unchanged(d) => d,
		}
	}

	pub fn into_diagnostic(self) -> Diagnostic {
		match self {
			Translation::Translated(d) | Translation::Unchanged(d) => d,
		}
	}
}

/// Translates a single diagnostic.
///
/// Only `message` is replaced. Diagnostics without a rule id, a message id,
/// or a dictionary entry come back as [`Translation::Unchanged`].
pub fn translate(
	diagnostic: Diagnostic,
	dictionary: &Dictionary,
	data: Option<&TranslationData>,
) -> Translation {
	let (Some(rule_id), Some(message_id)) = (diagnostic.rule_id(), diagnostic.message_id()) else {
		return Translation::Unchanged(diagnostic);
	};

	let Some(messages) = dictionary.rule(rule_id) else {
		return Translation::Unchanged(diagnostic);
	};

	let template = match messages.get(message_id) {
		Some(template) if !template.is_empty() => template,
		_ => return Translation::Unchanged(diagnostic),
	};

	let message = substitute(template, data);
	Translation::Translated(Diagnostic {
		message,
		..diagnostic
	})
}

/// Translates a sequence of diagnostics, preserving order and length.
///
/// Each diagnostic's own `data`, if the linter attached any, fills the
/// template placeholders.
pub fn translate_all(diagnostics: Vec<Diagnostic>, dictionary: &Dictionary) -> Vec<Translation> {
	diagnostics
		.into_iter()
		.map(|diagnostic| {
			let data = diagnostic.data.clone();
			translate(diagnostic, dictionary, data.as_ref())
		})
		.collect()
}

/// A translator bound to one dictionary snapshot.
#[derive(Clone, Debug)]
pub struct Translator {
	dictionary: Arc<Dictionary>,
}

impl Translator {
	pub fn new(dictionary: Arc<Dictionary>) -> Self {
		Self { dictionary }
	}

	pub fn dictionary(&self) -> &Dictionary {
		&self.dictionary
	}

	pub fn translate(&self, diagnostic: Diagnostic, data: Option<&TranslationData>) -> Translation {
		translate(diagnostic, &self.dictionary, data)
	}

	pub fn translate_all(&self, diagnostics: Vec<Diagnostic>) -> Vec<Translation> {
		translate_all(diagnostics, &self.dictionary)
	}

	/// Like [`Translator::translate_all`] but drops the outcome tags.
	pub fn translate_messages(&self, diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
		self
			.translate_all(diagnostics)
			.into_iter()
			.map(Translation::into_diagnostic)
			.collect()
	}
}
