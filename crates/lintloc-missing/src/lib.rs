// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Collection of untranslated lint messages.
//!
//! [`MissingLogger`] buffers one [`MissingEntry`] per untranslated diagnostic
//! and appends them to a JSON-lines file once the burst of calls has been
//! quiet for the flush delay. [`report`] turns such a log back into a
//! dictionary patch skeleton for translators.

mod entry;
mod error;
mod logger;
pub mod report;
mod sink;

pub use entry::MissingEntry;
pub use error::{MissingLogError, ReportError};
pub use logger::{FlushPhase, MissingLogConfig, MissingLogger, DEFAULT_FLUSH_DELAY};
pub use sink::{JsonlFileSink, MissingSink};
