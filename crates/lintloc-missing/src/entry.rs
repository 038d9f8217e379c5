// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use chrono::{DateTime, Utc};
use lintloc_core::TranslationData;
use serde::{Deserialize, Serialize};

/// One untranslated diagnostic, as written to the missing log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingEntry {
	pub rule_id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message_id: Option<String>,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<TranslationData>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub plugin_version: Option<String>,
	pub timestamp: DateTime<Utc>,
}

impl MissingEntry {
	pub fn new(
		rule_id: impl Into<String>,
		message_id: Option<String>,
		message: impl Into<String>,
		data: Option<TranslationData>,
	) -> Self {
		Self {
			rule_id: rule_id.into(),
			message_id,
			message: message.into(),
			data,
			plugin_version: None,
			timestamp: Utc::now(),
		}
	}

	/// Serializes the entry as a single JSON line, without the newline.
	pub fn to_json_line(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}
}
