// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for lintloc, read once from the environment.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `LINTLOC_LOG_MISSING` | `true`/`1` enables the missing-translation log |
//! | `LINTLOC_MISSING_LOG_PATH` | log file, default `~/.lintloc/missing.jsonl` |
//! | `LINTLOC_DICT` (or `DICT`) | comma-separated dictionary sources |
//! | `LINTLOC_DICT_DIR` | directory of `<name>.json` dictionaries |
//! | `LINTLOC_FLUSH_DELAY_MS` | quiet period before the log is flushed |

mod error;

use std::path::PathBuf;
use std::time::Duration;

use lintloc_i18n::DictionaryConfig;
use lintloc_missing::{MissingLogConfig, DEFAULT_FLUSH_DELAY};
use tracing::{debug, warn};

pub use error::ConfigError;

pub const ENV_LOG_MISSING: &str = "LINTLOC_LOG_MISSING";
pub const ENV_MISSING_LOG_PATH: &str = "LINTLOC_MISSING_LOG_PATH";
pub const ENV_DICT: &str = "LINTLOC_DICT";
pub const ENV_DICT_FALLBACK: &str = "DICT";
pub const ENV_DICT_DIR: &str = "LINTLOC_DICT_DIR";
pub const ENV_FLUSH_DELAY_MS: &str = "LINTLOC_FLUSH_DELAY_MS";

/// Everything the localizer needs to start.
#[derive(Debug, Clone)]
pub struct LocalizerConfig {
	pub dictionary: DictionaryConfig,
	pub missing_log: MissingLogConfig,
}

impl LocalizerConfig {
	/// Loads configuration from process environment variables.
	pub fn from_env() -> Self {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Loads configuration through `lookup`, which maps a variable name to
	/// its value.
	///
	/// Settings that only concern the missing-translation log never fail:
	/// an unrecognised flag disables the log, a bad delay falls back to the
	/// default, and a missing home directory disables the log.
	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		Self::resolve(lookup, dirs::home_dir())
	}

	fn resolve<F>(lookup: F, home: Option<PathBuf>) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

		let mut enabled = match get(ENV_LOG_MISSING) {
			Some(v) => parse_bool(&v).unwrap_or_else(|| {
				warn!(key = ENV_LOG_MISSING, value = %v, "unrecognised flag, missing translation log disabled");
				false
			}),
			None => false,
		};

		let path = match get(ENV_MISSING_LOG_PATH) {
			Some(p) => PathBuf::from(p),
			None => match missing_log_path_in(home) {
				Ok(path) => path,
				Err(e) => {
					if enabled {
						warn!(error = %e, "no default path for the missing translation log, disabling it");
						enabled = false;
					}
					PathBuf::new()
				}
			},
		};

		let flush_delay = match get(ENV_FLUSH_DELAY_MS) {
			Some(v) => match v.trim().parse::<u64>() {
				Ok(ms) => Duration::from_millis(ms),
				Err(_) => {
					warn!(
						key = ENV_FLUSH_DELAY_MS,
						value = %v,
						default_ms = DEFAULT_FLUSH_DELAY.as_millis() as u64,
						"invalid flush delay, using default"
					);
					DEFAULT_FLUSH_DELAY
				}
			},
			None => DEFAULT_FLUSH_DELAY,
		};

		let mut dictionary = DictionaryConfig::default();
		if let Some(list) = get(ENV_DICT).or_else(|| get(ENV_DICT_FALLBACK)) {
			dictionary.sources = parse_source_list(&list);
		}
		dictionary.dict_dir = get(ENV_DICT_DIR).map(PathBuf::from);

		debug!(
			log_missing = enabled,
			missing_log_path = %path.display(),
			sources = ?dictionary.sources,
			dict_dir = ?dictionary.dict_dir,
			"loaded lintloc configuration"
		);

		Self {
			dictionary,
			missing_log: MissingLogConfig {
				enabled,
				path,
				flush_delay,
			},
		}
	}
}

impl Default for LocalizerConfig {
	fn default() -> Self {
		Self {
			dictionary: DictionaryConfig::default(),
			missing_log: MissingLogConfig {
				enabled: false,
				path: default_missing_log_path().unwrap_or_default(),
				flush_delay: DEFAULT_FLUSH_DELAY,
			},
		}
	}
}

/// `~/.lintloc/missing.jsonl`
pub fn default_missing_log_path() -> Result<PathBuf, ConfigError> {
	missing_log_path_in(dirs::home_dir())
}

fn missing_log_path_in(home: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
	let home = home.ok_or(ConfigError::HomeDirNotFound)?;
	Ok(home.join(".lintloc").join("missing.jsonl"))
}

fn parse_bool(value: &str) -> Option<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "1" => Some(true),
		"false" | "0" => Some(false),
		_ => None,
	}
}

fn parse_source_list(list: &str) -> Vec<String> {
	list
		.split(',')
		.map(str::trim)
		.filter(|name| !name.is_empty())
		.map(str::to_string)
		.collect()
}
