// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use lintloc_config::LocalizerConfig;
use lintloc_core::LintResult;
use lintloc_i18n::DictionaryStore;
use lintloc_missing::{report, MissingLogger};
use lintloc_proxy::ResultTranslator;
use tracing::info;

pub const DEFAULT_PATCH_PATH: &str = "PR_templates/dict.patch.json";

pub fn translate(file: Option<&Path>, pretty: bool) -> Result<()> {
	let raw = match file {
		Some(path) => std::fs::read_to_string(path)
			.with_context(|| format!("failed to read {}", path.display()))?,
		None => {
			let mut raw = String::new();
			std::io::stdin()
				.read_to_string(&mut raw)
				.context("failed to read stdin")?;
			raw
		}
	};

	let config = LocalizerConfig::from_env();
	let translator = translator_from_config(config);
	let output = translate_json(&translator, &raw, pretty)?;

	if let Some(logger) = translator.logger() {
		logger.shutdown();
	}
	println!("{output}");
	Ok(())
}

pub fn keys(missing_log: &Path, out: &Path, plugin: &str, version_range: &str) -> Result<()> {
	let entries = report::read_log(missing_log)?;
	let groups = report::group_entries(entries);
	let patch = report::generate_patch(&groups, plugin, version_range);

	if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent)
			.with_context(|| format!("failed to create {}", parent.display()))?;
	}
	let json = serde_json::to_string_pretty(&patch)?;
	std::fs::write(out, json + "\n").with_context(|| format!("failed to write {}", out.display()))?;

	info!(entries = patch.entries.len(), path = %out.display(), "wrote dictionary patch");
	println!("Wrote {} template stub(s) to {}", patch.entries.len(), out.display());
	Ok(())
}

fn translator_from_config(config: LocalizerConfig) -> ResultTranslator {
	let logger = config
		.missing_log
		.enabled
		.then(|| MissingLogger::to_file(&config.missing_log));
	ResultTranslator::new(Arc::new(DictionaryStore::new(config.dictionary)), logger)
}

fn translate_json(translator: &ResultTranslator, raw: &str, pretty: bool) -> Result<String> {
	let results: Vec<LintResult> =
		serde_json::from_str(raw).context("input is not a JSON array of lint results")?;
	let translated = translator.translate_results(results);

	let output = if pretty {
		serde_json::to_string_pretty(&translated)?
	} else {
		serde_json::to_string(&translated)?
	};
	Ok(output)
}
