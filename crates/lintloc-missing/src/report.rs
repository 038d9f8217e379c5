// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Turns a missing-translation log into a dictionary patch skeleton.
//!
//! Entries are grouped by rule id and message id; each group becomes one
//! template stub marked `[TODO]` for a translator to fill in.

use std::collections::HashMap;
use std::path::Path;

use lintloc_i18n::placeholders;
use serde::{Deserialize, Serialize};

use crate::entry::MissingEntry;
use crate::error::ReportError;

/// Reads every entry from a JSON-lines missing log.
pub fn read_log(path: &Path) -> Result<Vec<MissingEntry>, ReportError> {
	let raw = std::fs::read_to_string(path).map_err(|source| ReportError::Read {
		path: path.to_path_buf(),
		source,
	})?;
	parse_log(&raw)
}

/// Parses JSON-lines content; blank lines are skipped.
pub fn parse_log(raw: &str) -> Result<Vec<MissingEntry>, ReportError> {
	raw
		.lines()
		.enumerate()
		.filter(|(_, line)| !line.trim().is_empty())
		.map(|(index, line)| {
			serde_json::from_str(line).map_err(|source| ReportError::Parse {
				line: index + 1,
				source,
			})
		})
		.collect()
}

/// All logged occurrences of one rule/message pair.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingGroup {
	pub rule_id: String,
	pub message_id: String,
	pub entries: Vec<MissingEntry>,
}

/// Groups entries by `(rule_id, message_id)` in first-seen order. Entries
/// without a message id cannot be keyed in a dictionary and are dropped.
pub fn group_entries(entries: Vec<MissingEntry>) -> Vec<MissingGroup> {
	let mut groups: Vec<MissingGroup> = Vec::new();
	let mut index: HashMap<(String, String), usize> = HashMap::new();

	for entry in entries {
		let Some(message_id) = entry.message_id.clone().filter(|id| !id.is_empty()) else {
			continue;
		};
		if entry.rule_id.is_empty() {
			continue;
		}

		let key = (entry.rule_id.clone(), message_id);
		match index.get(&key) {
			Some(&i) => groups[i].entries.push(entry),
			None => {
				index.insert(key.clone(), groups.len());
				groups.push(MissingGroup {
					rule_id: key.0,
					message_id: key.1,
					entries: vec![entry],
				});
			}
		}
	}

	groups
}

/// One template stub in a dictionary patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStub {
	pub rule_id: String,
	pub message_id: String,
	pub template: String,
	pub placeholders: Vec<String>,
	pub data_keys: Vec<String>,
	pub source_english: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

/// A set of template stubs for one plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryPatch {
	pub plugin: String,
	pub version_range: String,
	pub entries: Vec<TemplateStub>,
}

/// Builds a patch with one stub per group.
pub fn generate_patch(
	groups: &[MissingGroup],
	plugin: impl Into<String>,
	version_range: impl Into<String>,
) -> DictionaryPatch {
	let entries = groups
		.iter()
		.filter_map(|group| {
			let first = group.entries.first()?;
			let names = placeholders(&first.message);
			Some(TemplateStub {
				rule_id: group.rule_id.clone(),
				message_id: group.message_id.clone(),
				template: format!("[TODO] {}", first.message),
				placeholders: names.clone(),
				data_keys: names,
				source_english: first.message.clone(),
				notes: Some(format!("occurrences: {}", group.entries.len())),
			})
		})
		.collect();

	DictionaryPatch {
		plugin: plugin.into(),
		version_range: version_range.into(),
		entries,
	}
}
