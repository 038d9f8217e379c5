// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loading and caching of the merged dictionary.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use tracing::{debug, warn};

use crate::builtin::bundled_source;
use crate::dictionary::{merge_dictionaries, Dictionary};
use crate::error::DictionaryError;
use crate::translate::Translator;

/// Sources loaded when none are configured, in merge order.
pub const DEFAULT_SOURCES: &[&str] = &["core", "angular", "typescript"];

/// Which dictionary sources to load and where to find them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DictionaryConfig {
	/// Source names, merged left to right.
	pub sources: Vec<String>,
	/// Directory holding `<name>.json` files. When unset the bundled
	/// dictionaries are used.
	pub dict_dir: Option<PathBuf>,
}

impl Default for DictionaryConfig {
	fn default() -> Self {
		Self {
			sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
			dict_dir: None,
		}
	}
}

/// Loads the configured sources once and hands out the merged dictionary.
#[derive(Debug)]
pub struct DictionaryStore {
	config: DictionaryConfig,
	cached: OnceLock<Arc<Dictionary>>,
}

impl DictionaryStore {
	pub fn new(config: DictionaryConfig) -> Self {
		Self {
			config,
			cached: OnceLock::new(),
		}
	}

	/// A store that is already loaded with `dictionary`.
	pub fn with_dictionary(dictionary: Dictionary) -> Self {
		let store = Self::new(DictionaryConfig {
			sources: Vec::new(),
			dict_dir: None,
		});
		let _ = store.cached.set(Arc::new(dictionary));
		store
	}

	pub fn config(&self) -> &DictionaryConfig {
		&self.config
	}

	/// The merged dictionary, loading it on first use.
	pub fn get(&self) -> Arc<Dictionary> {
		self
			.cached
			.get_or_init(|| Arc::new(self.load()))
			.clone()
	}

	/// A translator over the current dictionary snapshot.
	pub fn translator(&self) -> Translator {
		Translator::new(self.get())
	}

	/// Reads and merges every configured source, bypassing the cache.
	///
	/// Sources that are missing or fail to parse contribute nothing.
	pub fn load(&self) -> Dictionary {
		let dictionaries = self.config.sources.iter().map(|name| match self.read_source(name) {
			Ok(dict) => {
				debug!(source = %name, rules = dict.rule_count(), "loaded dictionary source");
				dict
			}
			Err(DictionaryError::UnknownSource(name)) => {
				debug!(source = %name, "dictionary source not found, skipping");
				Dictionary::new()
			}
			Err(e) => {
				warn!(error = %e, "skipping unreadable dictionary source");
				Dictionary::new()
			}
		});

		let merged = merge_dictionaries(dictionaries);
		debug!(
			sources = ?self.config.sources,
			rules = merged.rule_count(),
			templates = merged.len(),
			"dictionary loaded"
		);
		merged
	}

	fn read_source(&self, name: &str) -> Result<Dictionary, DictionaryError> {
		let raw = match &self.config.dict_dir {
			Some(dir) => {
				let path = dir.join(format!("{name}.json"));
				match std::fs::read_to_string(&path) {
					Ok(raw) => raw,
					Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
						return Err(DictionaryError::UnknownSource(name.to_string()));
					}
					Err(source) => return Err(DictionaryError::Read { path, source }),
				}
			}
			None => bundled_source(name)
				.ok_or_else(|| DictionaryError::UnknownSource(name.to_string()))?
				.to_string(),
		};

		Dictionary::from_json(&raw).map_err(|source| DictionaryError::Parse {
			name: name.to_string(),
			source,
		})
	}
}

impl Default for DictionaryStore {
	fn default() -> Self {
		Self::new(DictionaryConfig::default())
	}
}
