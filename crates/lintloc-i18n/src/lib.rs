// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation support for lint diagnostics.
//!
//! Dictionaries map a rule id and message id to a translation template.
//! Templates use `{name}` placeholders which are filled from the
//! diagnostic's data:
//!
//! ```
//! use lintloc_core::Diagnostic;
//! use lintloc_i18n::{translate, Dictionary};
//!
//! let mut dict = Dictionary::new();
//! dict.insert("no-undef", "undef", "'{name}' は定義されていません。");
//!
//! let data = serde_json::json!({ "name": "foo" });
//! let diagnostic = Diagnostic::new("'foo' is not defined.").with_rule("no-undef", "undef");
//! let translated = translate(diagnostic, &dict, data.as_object());
//!
//! assert!(translated.is_translated());
//! assert_eq!(translated.diagnostic().message, "'foo' は定義されていません。");
//! ```

mod builtin;
mod dictionary;
mod error;
mod store;
mod template;
mod translate;

pub use builtin::{bundled_source, BUNDLED_SOURCES};
pub use dictionary::{merge_dictionaries, Dictionary};
pub use error::DictionaryError;
pub use store::{DictionaryConfig, DictionaryStore, DEFAULT_SOURCES};
pub use template::{placeholders, substitute};
pub use translate::{translate, translate_all, Translation, Translator};
