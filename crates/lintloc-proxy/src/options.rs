// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Constructor argument normalization.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

/// Name of the working-directory option in a linter configuration object.
pub const CWD_OPTION: &str = "cwd";

/// Fills in `cwd` on a configuration object that lacks one.
///
/// Only JSON objects are touched; arrays, null and scalars are returned as
/// given. An explicit non-null `cwd` is kept.
pub fn normalize_options(options: Value, cwd: &Path) -> Value {
	match options {
		Value::Object(mut map) => {
			let missing = map.get(CWD_OPTION).map_or(true, Value::is_null);
			if missing {
				map.insert(
					CWD_OPTION.to_string(),
					Value::String(cwd.to_string_lossy().into_owned()),
				);
			}
			Value::Object(map)
		}
		other => other,
	}
}

/// Normalizes the first constructor argument against the process working
/// directory. Remaining arguments are passed through.
pub fn normalize_args(mut args: Vec<Value>) -> Vec<Value> {
	if args.is_empty() {
		return args;
	}

	let cwd = match std::env::current_dir() {
		Ok(cwd) => cwd,
		Err(e) => {
			warn!(error = %e, "could not read working directory, leaving options as given");
			return args;
		}
	};

	let first = std::mem::take(&mut args[0]);
	args[0] = normalize_options(first, &cwd);
	debug!(cwd = %cwd.display(), "normalized linter options");
	args
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	const CWD: &str = "/work/project";

	#[test]
	fn injects_cwd_when_absent() {
		let options = normalize_options(json!({ "fix": true }), Path::new(CWD));
		assert_eq!(options, json!({ "fix": true, "cwd": CWD }));
	}

	#[test]
	fn replaces_null_cwd() {
		let options = normalize_options(json!({ "cwd": null }), Path::new(CWD));
		assert_eq!(options, json!({ "cwd": CWD }));
	}

	#[test]
	fn keeps_explicit_cwd() {
		let options = normalize_options(json!({ "cwd": "/elsewhere" }), Path::new(CWD));
		assert_eq!(options, json!({ "cwd": "/elsewhere" }));
	}

	#[test]
	fn leaves_non_objects_alone() {
		for value in [json!(null), json!([1, 2]), json!("str"), json!(3)] {
			assert_eq!(normalize_options(value.clone(), Path::new(CWD)), value);
		}
	}

	#[test]
	fn only_first_argument_is_normalized() {
		let args = normalize_args(vec![json!({}), json!({})]);
		assert!(args[0].get(CWD_OPTION).is_some());
		assert_eq!(args[1], json!({}));
	}

	#[test]
	fn no_arguments_stay_empty() {
		assert!(normalize_args(Vec::new()).is_empty());
	}
}
