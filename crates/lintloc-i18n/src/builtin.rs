// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dictionaries compiled into the binary.

/// Names of the dictionaries shipped with the crate.
pub const BUNDLED_SOURCES: &[&str] = &["core", "angular", "typescript"];

/// Returns the raw JSON of a bundled dictionary.
pub fn bundled_source(name: &str) -> Option<&'static str> {
	match name {
		"core" => Some(include_str!("../dict/core.json")),
		"angular" => Some(include_str!("../dict/angular.json")),
		"typescript" => Some(include_str!("../dict/typescript.json")),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Dictionary;

	#[test]
	fn every_bundled_source_parses() {
		for name in BUNDLED_SOURCES {
			let raw = bundled_source(name).unwrap();
			let dict = Dictionary::from_json(raw).unwrap();
			assert!(!dict.is_empty(), "{name} should not be empty");
		}
	}

	#[test]
	fn unknown_source_is_none() {
		assert!(bundled_source("vue").is_none());
	}
}
