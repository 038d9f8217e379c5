// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared types for lintloc.
//!
//! This crate defines the diagnostic records produced by a linter and the
//! collaborator traits ([`Linter`], [`LinterClass`], [`LinterBackend`]) that
//! the translating proxy wraps.

pub mod diagnostic;
pub mod error;
pub mod linter;

pub use diagnostic::*;
pub use error::*;
pub use linter::*;
