// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The rule → message → template table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Translation templates keyed by rule id, then message id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
	rules: HashMap<String, HashMap<String, String>>,
}

impl Dictionary {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses a dictionary from its JSON file format.
	pub fn from_json(raw: &str) -> serde_json::Result<Self> {
		serde_json::from_str(raw)
	}

	pub fn insert(
		&mut self,
		rule_id: impl Into<String>,
		message_id: impl Into<String>,
		template: impl Into<String>,
	) {
		self
			.rules
			.entry(rule_id.into())
			.or_default()
			.insert(message_id.into(), template.into());
	}

	/// Returns the message table for a rule.
	pub fn rule(&self, rule_id: &str) -> Option<&HashMap<String, String>> {
		self.rules.get(rule_id)
	}

	pub fn template(&self, rule_id: &str, message_id: &str) -> Option<&str> {
		self
			.rules
			.get(rule_id)
			.and_then(|messages| messages.get(message_id))
			.map(String::as_str)
	}

	/// Folds `other` into `self`. Entries in `other` win per message id; rules
	/// are merged, never replaced wholesale.
	pub fn merge(&mut self, other: Dictionary) {
		for (rule_id, messages) in other.rules {
			self.rules.entry(rule_id).or_default().extend(messages);
		}
	}

	pub fn rule_count(&self) -> usize {
		self.rules.len()
	}

	/// Total number of templates across all rules.
	pub fn len(&self) -> usize {
		self.rules.values().map(HashMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Merges dictionaries left to right; later sources win per message id.
pub fn merge_dictionaries<I>(dictionaries: I) -> Dictionary
where
	I: IntoIterator<Item = Dictionary>,
{
	dictionaries
		.into_iter()
		.fold(Dictionary::new(), |mut merged, next| {
			merged.merge(next);
			merged
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn dict(entries: &[(&str, &str, &str)]) -> Dictionary {
		let mut dict = Dictionary::new();
		for (rule, message, template) in entries {
			dict.insert(*rule, *message, *template);
		}
		dict
	}

	#[test]
	fn later_source_wins_on_conflict() {
		let base = dict(&[("rule", "id", "base")]);
		let over = dict(&[("rule", "id", "override")]);

		let merged = merge_dictionaries([base, over]);
		assert_eq!(merged.template("rule", "id"), Some("override"));
	}

	#[test]
	fn merge_is_structural_per_message() {
		let base = dict(&[("rule", "a", "A"), ("rule", "b", "B")]);
		let over = dict(&[("rule", "b", "B2"), ("other", "c", "C")]);

		let merged = merge_dictionaries([base, over]);
		assert_eq!(merged.template("rule", "a"), Some("A"));
		assert_eq!(merged.template("rule", "b"), Some("B2"));
		assert_eq!(merged.template("other", "c"), Some("C"));
		assert_eq!(merged.rule_count(), 2);
		assert_eq!(merged.len(), 3);
	}

	#[test]
	fn merging_nothing_is_empty() {
		assert!(merge_dictionaries(Vec::new()).is_empty());
	}

	#[test]
	fn parses_file_format() {
		let dict =
			Dictionary::from_json(r#"{"no-undef": {"undef": "'{name}' は定義されていません。"}}"#).unwrap();
		assert_eq!(
			dict.template("no-undef", "undef"),
			Some("'{name}' は定義されていません。")
		);
		assert!(dict.template("no-undef", "other").is_none());
		assert!(dict.rule("missing").is_none());
	}

	#[test]
	fn rejects_non_string_templates() {
		assert!(Dictionary::from_json(r#"{"rule": {"id": 3}}"#).is_err());
	}

	fn arb_dict() -> impl Strategy<Value = Dictionary> {
		prop::collection::vec(("[a-c]", "[x-z]", "[a-z]{1,8}"), 0..8).prop_map(|entries| {
			let mut dict = Dictionary::new();
			for (rule, message, template) in entries {
				dict.insert(rule, message, template);
			}
			dict
		})
	}

	proptest! {
		/// Merging (a, b) then c gives the same table as a then (b, c).
		#[test]
		fn merge_is_associative(a in arb_dict(), b in arb_dict(), c in arb_dict()) {
			let left = merge_dictionaries([merge_dictionaries([a.clone(), b.clone()]), c.clone()]);
			let right = merge_dictionaries([a, merge_dictionaries([b, c])]);
			prop_assert_eq!(left, right);
		}

		/// Every entry of the last source survives a merge untouched.
		#[test]
		fn last_source_entries_survive(a in arb_dict(), b in arb_dict()) {
			let merged = merge_dictionaries([a, b.clone()]);
			for (rule, messages) in &b.rules {
				for (message, template) in messages {
					prop_assert_eq!(merged.template(rule, message), Some(template.as_str()));
				}
			}
		}
	}
}
