// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use lintloc_core::LintError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalizerError {
	#[error(transparent)]
	Lint(#[from] LintError),
}
