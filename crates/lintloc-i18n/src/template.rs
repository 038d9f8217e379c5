// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `{name}` placeholder handling.

use std::sync::LazyLock;

use lintloc_core::TranslationData;
use regex::{Captures, Regex};
use serde_json::Value;

static PLACEHOLDER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap());

/// Replaces every `{name}` in `template` with the matching data value.
///
/// Placeholders without a data entry are left as written.
pub fn substitute(template: &str, data: Option<&TranslationData>) -> String {
	let Some(data) = data else {
		return template.to_string();
	};

	PLACEHOLDER
		.replace_all(template, |caps: &Captures<'_>| match data.get(&caps[1]) {
			Some(value) => stringify(value),
			None => caps[0].to_string(),
		})
		.into_owned()
}

/// Distinct placeholder names in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
	let mut names: Vec<String> = Vec::new();
	for caps in PLACEHOLDER.captures_iter(template) {
		let name = &caps[1];
		if !names.iter().any(|n| n == name) {
			names.push(name.to_string());
		}
	}
	names
}

fn stringify(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}
