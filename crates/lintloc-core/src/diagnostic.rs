// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Diagnostic and per-file result records, in the linter's JSON shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Placeholder values attached to a diagnostic, keyed by placeholder name.
pub type TranslationData = Map<String, Value>;

/// One finding emitted by the linter for a location in a file.
///
/// Only `message` is ever rewritten by translation. Fields the linter emits
/// that are not modelled here are kept in `extra` and serialized back
/// unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
	/// `None` when the field is absent, `Some(None)` when it is `null`.
	#[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
	pub rule_id: Option<Option<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
	pub message_id: Option<Option<String>>,
	pub message: String,
	#[serde(default)]
	pub severity: u8,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub line: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub column: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub end_line: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub end_column: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub node_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<TranslationData>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Diagnostic {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			rule_id: None,
			message_id: None,
			message: message.into(),
			severity: 0,
			line: None,
			column: None,
			end_line: None,
			end_column: None,
			node_type: None,
			data: None,
			extra: Map::new(),
		}
	}

	pub fn with_rule(mut self, rule_id: impl Into<String>, message_id: impl Into<String>) -> Self {
		self.rule_id = Some(Some(rule_id.into()));
		self.message_id = Some(Some(message_id.into()));
		self
	}

	pub fn with_severity(mut self, severity: u8) -> Self {
		self.severity = severity;
		self
	}

	pub fn with_position(mut self, line: u32, column: u32) -> Self {
		self.line = Some(line);
		self.column = Some(column);
		self
	}

	pub fn with_data(mut self, data: TranslationData) -> Self {
		self.data = Some(data);
		self
	}

	/// The rule id, treating an empty string as absent.
	pub fn rule_id(&self) -> Option<&str> {
		self.rule_id.as_ref()?.as_deref().filter(|id| !id.is_empty())
	}

	/// The message id, treating an empty string as absent.
	pub fn message_id(&self) -> Option<&str> {
		self.message_id.as_ref()?.as_deref().filter(|id| !id.is_empty())
	}
}

/// Marks a field as present, so an explicit `null` stays distinct from a
/// missing key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	T::deserialize(deserializer).map(Some)
}

/// The linter's result for a single file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
	#[serde(default)]
	pub file_path: String,
	#[serde(default)]
	pub messages: Vec<Diagnostic>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl LintResult {
	pub fn new(file_path: impl Into<String>, messages: Vec<Diagnostic>) -> Self {
		Self {
			file_path: file_path.into(),
			messages,
			extra: Map::new(),
		}
	}
}
