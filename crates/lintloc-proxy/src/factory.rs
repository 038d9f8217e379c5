// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use lintloc_core::LinterClass;
use tracing::debug;

use crate::class::ProxyClass;
use crate::interceptor::ResultTranslator;

/// Builds and caches one [`ProxyClass`] per base class.
///
/// Base classes are identified by the address of their `Arc`. Each cached
/// proxy keeps its base alive, so an address is never reused for a different
/// class while its entry exists.
pub struct ProxyFactory {
	translator: ResultTranslator,
	cache: Mutex<HashMap<usize, Arc<ProxyClass>>>,
}

impl ProxyFactory {
	pub fn new(translator: ResultTranslator) -> Self {
		Self {
			translator,
			cache: Mutex::new(HashMap::new()),
		}
	}

	pub fn translator(&self) -> &ResultTranslator {
		&self.translator
	}

	/// Returns the proxy for `base`, creating it on first request. Repeated
	/// calls with the same base return the same `Arc`.
	pub fn wrap(&self, base: Arc<dyn LinterClass>) -> Arc<ProxyClass> {
		let key = class_key(&base);
		let mut cache = self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

		if let Some(existing) = cache.get(&key) {
			return Arc::clone(existing);
		}

		debug!(class = %base.name(), version = %base.version(), "creating proxy class");
		let proxy = Arc::new(ProxyClass::new(base, self.translator.clone()));
		cache.insert(key, Arc::clone(&proxy));
		proxy
	}

	/// Number of distinct base classes wrapped so far.
	pub fn cached_len(&self) -> usize {
		self.cache.lock().map(|c| c.len()).unwrap_or_else(|p| p.into_inner().len())
	}
}

fn class_key(class: &Arc<dyn LinterClass>) -> usize {
	Arc::as_ptr(class) as *const () as usize
}
