// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Debounced buffering of missing-translation entries.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use lintloc_core::TranslationData;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::entry::MissingEntry;
use crate::sink::{JsonlFileSink, MissingSink};

/// Quiet period after the last record before the buffer is flushed.
pub const DEFAULT_FLUSH_DELAY: Duration = Duration::from_secs(1);

/// Configuration for the missing-translation logger.
#[derive(Debug, Clone)]
pub struct MissingLogConfig {
	pub enabled: bool,
	pub path: PathBuf,
	pub flush_delay: Duration,
}

impl MissingLogConfig {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			enabled: true,
			path: path.into(),
			flush_delay: DEFAULT_FLUSH_DELAY,
		}
	}
}

/// Observable state of the flush timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushPhase {
	/// Nothing buffered.
	Idle,
	/// Entries are buffered but no timer is armed (no runtime was available).
	Buffering,
	/// Entries are buffered and a flush timer is armed.
	FlushScheduled,
}

enum FlushTimer {
	Idle,
	Buffering,
	Scheduled { generation: u64, handle: JoinHandle<()> },
}

struct LoggerState {
	buffer: Vec<MissingEntry>,
	timer: FlushTimer,
	generation: u64,
}

struct Inner {
	enabled: bool,
	flush_delay: Duration,
	sink: Arc<dyn MissingSink>,
	state: Mutex<LoggerState>,
}

impl Inner {
	fn lock(&self) -> MutexGuard<'_, LoggerState> {
		self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	/// Takes the buffer and writes it to the sink. Errors are logged, never
	/// returned.
	fn flush_entries(&self, entries: Vec<MissingEntry>) {
		if entries.is_empty() {
			return;
		}

		debug!(count = entries.len(), "flushing missing translations");
		if let Err(e) = self.sink.append(&entries) {
			warn!(error = %e, dropped = entries.len(), "failed to flush missing translation log");
		}
	}

	/// Takes the buffer for the timer armed as `generation`. A timer that was
	/// replaced gets nothing.
	fn drain_for_timer(&self, generation: u64) -> Option<Vec<MissingEntry>> {
		let mut state = self.lock();
		match state.timer {
			FlushTimer::Scheduled { generation: g, .. } if g == generation => {
				state.timer = FlushTimer::Idle;
				Some(std::mem::take(&mut state.buffer))
			}
			_ => None,
		}
	}

	fn cancel_timer(state: &mut LoggerState) {
		if let FlushTimer::Scheduled { handle, .. } =
			std::mem::replace(&mut state.timer, FlushTimer::Idle)
		{
			handle.abort();
		}
	}
}

impl Drop for Inner {
	fn drop(&mut self) {
		let entries = {
			let state = self.state.get_mut().unwrap_or_else(|poisoned| poisoned.into_inner());
			Self::cancel_timer(state);
			std::mem::take(&mut state.buffer)
		};
		self.flush_entries(entries);
	}
}

/// Records untranslated diagnostics and flushes them after a quiet period.
///
/// Every call to [`MissingLogger::record`] cancels the pending flush timer
/// and arms a new one, so a burst of calls produces a single write. Writing
/// never blocks or fails the caller. Dropping the last handle flushes
/// whatever is still buffered.
#[derive(Clone)]
pub struct MissingLogger {
	inner: Arc<Inner>,
}

impl std::fmt::Debug for MissingLogger {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MissingLogger")
			.field("enabled", &self.inner.enabled)
			.field("flush_delay", &self.inner.flush_delay)
			.finish()
	}
}

impl MissingLogger {
	pub fn new(config: &MissingLogConfig, sink: Arc<dyn MissingSink>) -> Self {
		Self {
			inner: Arc::new(Inner {
				enabled: config.enabled,
				flush_delay: config.flush_delay,
				sink,
				state: Mutex::new(LoggerState {
					buffer: Vec::new(),
					timer: FlushTimer::Idle,
					generation: 0,
				}),
			}),
		}
	}

	/// A logger appending to the JSON-lines file at `config.path`.
	pub fn to_file(config: &MissingLogConfig) -> Self {
		Self::new(config, Arc::new(JsonlFileSink::new(config.path.clone())))
	}

	/// A logger that ignores every record.
	pub fn disabled() -> Self {
		let config = MissingLogConfig {
			enabled: false,
			path: PathBuf::new(),
			flush_delay: DEFAULT_FLUSH_DELAY,
		};
		Self::new(&config, Arc::new(JsonlFileSink::new(PathBuf::new())))
	}

	pub fn is_enabled(&self) -> bool {
		self.inner.enabled
	}

	/// Buffers an entry and re-arms the flush timer.
	pub fn record(
		&self,
		rule_id: &str,
		message_id: Option<&str>,
		message: &str,
		data: Option<&TranslationData>,
	) {
		if !self.inner.enabled {
			return;
		}

		let entry = MissingEntry::new(
			rule_id,
			message_id.map(str::to_string),
			message,
			data.cloned(),
		);
		trace!(rule_id = %rule_id, message_id = ?message_id, "buffering missing translation");

		let mut state = self.inner.lock();
		state.buffer.push(entry);
		Inner::cancel_timer(&mut state);

		state.timer = match Handle::try_current() {
			Ok(handle) => {
				state.generation += 1;
				let generation = state.generation;
				let weak = Arc::downgrade(&self.inner);
				let delay = self.inner.flush_delay;
				FlushTimer::Scheduled {
					generation,
					handle: handle.spawn(flush_after(weak, delay, generation)),
				}
			}
			Err(_) => {
				trace!("no async runtime, deferring missing translation flush");
				FlushTimer::Buffering
			}
		};
	}

	/// Writes everything buffered now and cancels the pending timer.
	pub fn flush(&self) {
		let entries = {
			let mut state = self.inner.lock();
			Inner::cancel_timer(&mut state);
			std::mem::take(&mut state.buffer)
		};
		self.inner.flush_entries(entries);
	}

	/// Best-effort synchronous flush for process exit.
	pub fn shutdown(&self) {
		if self.inner.enabled {
			debug!("shutting down missing translation logger");
		}
		self.flush();
	}

	pub fn buffered_len(&self) -> usize {
		self.inner.lock().buffer.len()
	}

	pub fn phase(&self) -> FlushPhase {
		match self.inner.lock().timer {
			FlushTimer::Idle => FlushPhase::Idle,
			FlushTimer::Buffering => FlushPhase::Buffering,
			FlushTimer::Scheduled { .. } => FlushPhase::FlushScheduled,
		}
	}
}

async fn flush_after(inner: Weak<Inner>, delay: Duration, generation: u64) {
	tokio::time::sleep(delay).await;
	let Some(inner) = inner.upgrade() else {
		return;
	};
	let Some(entries) = inner.drain_for_timer(generation) else {
		trace!(generation, "stale flush timer fired, skipping");
		return;
	};
	if entries.is_empty() {
		return;
	}

	// Sinks do blocking file I/O.
	let write = tokio::task::spawn_blocking(move || inner.flush_entries(entries));
	if let Err(e) = write.await {
		warn!(error = %e, "missing translation flush task failed");
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::MissingLogError;
	use tempfile::TempDir;

	#[derive(Default)]
	struct MockSink {
		batches: Mutex<Vec<Vec<MissingEntry>>>,
		fail: bool,
	}

	impl MockSink {
		fn failing() -> Self {
			Self {
				batches: Mutex::new(Vec::new()),
				fail: true,
			}
		}

		fn batches(&self) -> Vec<Vec<MissingEntry>> {
			self.batches.lock().unwrap().clone()
		}
	}

	impl MissingSink for MockSink {
		fn append(&self, entries: &[MissingEntry]) -> Result<(), MissingLogError> {
			if self.fail {
				return Err(MissingLogError::Io(std::io::Error::new(
					std::io::ErrorKind::PermissionDenied,
					"read-only",
				)));
			}
			self.batches.lock().unwrap().push(entries.to_vec());
			Ok(())
		}
	}

	fn logger(sink: Arc<MockSink>) -> MissingLogger {
		MissingLogger::new(&MissingLogConfig::new("unused.jsonl"), sink)
	}

	/// Timed flushes finish on the blocking pool; give them real time to land.
	fn wait_until(condition: impl Fn() -> bool) {
		for _ in 0..200 {
			if condition() {
				return;
			}
			std::thread::sleep(Duration::from_millis(10));
		}
	}

	/// Blocks inside `append` the way a slow disk would.
	struct SlowSink {
		delay: Duration,
		inner: MockSink,
	}

	impl MissingSink for SlowSink {
		fn append(&self, entries: &[MissingEntry]) -> Result<(), MissingLogError> {
			std::thread::sleep(self.delay);
			self.inner.append(entries)
		}
	}

	#[tokio::test(start_paused = true)]
	async fn burst_of_records_flushes_once() {
		let sink = Arc::new(MockSink::default());
		let logger = logger(sink.clone());

		for i in 0..5 {
			logger.record("rule", Some("id"), &format!("message {i}"), None);
			tokio::time::advance(Duration::from_millis(300)).await;
		}
		assert!(sink.batches().is_empty());
		assert_eq!(logger.phase(), FlushPhase::FlushScheduled);

		tokio::time::sleep(Duration::from_secs(2)).await;
		wait_until(|| !sink.batches().is_empty());

		let batches = sink.batches();
		assert_eq!(batches.len(), 1);
		assert_eq!(batches[0].len(), 5);
		assert_eq!(batches[0][4].message, "message 4");
		assert_eq!(logger.phase(), FlushPhase::Idle);
		assert_eq!(logger.buffered_len(), 0);
	}

	#[tokio::test(start_paused = true)]
	async fn quiet_period_separates_flushes() {
		let sink = Arc::new(MockSink::default());
		let logger = logger(sink.clone());

		logger.record("a", Some("id"), "first", None);
		tokio::time::sleep(Duration::from_secs(2)).await;
		wait_until(|| sink.batches().len() == 1);
		logger.record("b", Some("id"), "second", None);
		tokio::time::sleep(Duration::from_secs(2)).await;
		wait_until(|| sink.batches().len() == 2);

		let batches = sink.batches();
		assert_eq!(batches.len(), 2);
		assert_eq!(batches[0][0].rule_id, "a");
		assert_eq!(batches[1][0].rule_id, "b");
	}

	#[tokio::test(start_paused = true)]
	async fn timer_is_debounced_not_throttled() {
		let sink = Arc::new(MockSink::default());
		let logger = logger(sink.clone());

		logger.record("a", None, "first", None);
		tokio::time::advance(Duration::from_millis(900)).await;
		logger.record("a", None, "second", None);
		tokio::time::advance(Duration::from_millis(900)).await;
		tokio::task::yield_now().await;

		assert!(sink.batches().is_empty());
		assert_eq!(logger.buffered_len(), 2);
	}

	#[tokio::test(start_paused = true)]
	async fn disabled_logger_records_nothing() {
		let logger = MissingLogger::disabled();
		logger.record("rule", Some("id"), "message", None);
		assert_eq!(logger.buffered_len(), 0);
		assert_eq!(logger.phase(), FlushPhase::Idle);
		assert!(!logger.is_enabled());
	}

	#[tokio::test(start_paused = true)]
	async fn sink_failures_are_swallowed() {
		let sink = Arc::new(MockSink::failing());
		let logger = logger(sink.clone());

		logger.record("rule", Some("id"), "message", None);
		tokio::time::sleep(Duration::from_secs(2)).await;

		assert_eq!(logger.buffered_len(), 0);
		assert_eq!(logger.phase(), FlushPhase::Idle);
	}

	#[test]
	fn without_runtime_entries_wait_for_shutdown() {
		let sink = Arc::new(MockSink::default());
		let logger = logger(sink.clone());

		logger.record("rule", Some("id"), "message", None);
		assert_eq!(logger.phase(), FlushPhase::Buffering);
		assert!(sink.batches().is_empty());

		logger.shutdown();
		assert_eq!(sink.batches().len(), 1);
		assert_eq!(logger.phase(), FlushPhase::Idle);
	}

	#[test]
	fn dropping_last_handle_flushes() {
		let sink = Arc::new(MockSink::default());
		let logger = logger(sink.clone());
		let clone = logger.clone();

		logger.record("rule", Some("id"), "message", None);
		drop(logger);
		assert!(sink.batches().is_empty());

		drop(clone);
		assert_eq!(sink.batches().len(), 1);
	}

	#[tokio::test(start_paused = true)]
	async fn shutdown_cancels_pending_timer() {
		let sink = Arc::new(MockSink::default());
		let logger = logger(sink.clone());

		logger.record("rule", Some("id"), "message", None);
		logger.shutdown();
		tokio::time::sleep(Duration::from_secs(2)).await;

		assert_eq!(sink.batches().len(), 1);
	}

	#[tokio::test(start_paused = true)]
	async fn writes_json_lines_to_file() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("missing.jsonl");
		let logger = MissingLogger::to_file(&MissingLogConfig::new(&path));

		let data = serde_json::json!({ "name": "x" });
		logger.record("no-undef", Some("undef"), "'x' is not defined.", data.as_object());
		logger.record("semi", Some("missingSemi"), "Missing semicolon.", None);
		tokio::time::sleep(Duration::from_secs(2)).await;
		wait_until(|| std::fs::read_to_string(&path).is_ok_and(|c| c.lines().count() == 2));

		let content = std::fs::read_to_string(&path).unwrap();
		let entries: Vec<MissingEntry> = content
			.lines()
			.map(|line| serde_json::from_str(line).unwrap())
			.collect();
		assert_eq!(entries.len(), 2);
		assert_eq!(entries[0].data.as_ref(), data.as_object());
		assert_eq!(entries[1].rule_id, "semi");
	}

	#[tokio::test(start_paused = true)]
	async fn replaced_timer_leaves_new_entries_alone() {
		let sink = Arc::new(MockSink::default());
		let logger = logger(sink.clone());

		logger.record("a", None, "first", None);
		logger.record("b", None, "second", None);

		assert!(logger.inner.drain_for_timer(1).is_none());
		assert_eq!(logger.buffered_len(), 2);
		assert_eq!(logger.phase(), FlushPhase::FlushScheduled);

		let drained = logger.inner.drain_for_timer(2).unwrap();
		assert_eq!(drained.len(), 2);
		assert_eq!(logger.phase(), FlushPhase::Idle);
	}

	#[tokio::test(flavor = "current_thread")]
	async fn slow_sink_does_not_stall_the_runtime() {
		let sink = Arc::new(SlowSink {
			delay: Duration::from_millis(300),
			inner: MockSink::default(),
		});
		let config = MissingLogConfig {
			flush_delay: Duration::from_millis(10),
			..MissingLogConfig::new("unused.jsonl")
		};
		let logger = MissingLogger::new(&config, sink.clone());
		logger.record("rule", Some("id"), "message", None);

		let start = std::time::Instant::now();
		let mut ticks = 0u32;
		while start.elapsed() < Duration::from_millis(400) {
			tokio::time::sleep(Duration::from_millis(5)).await;
			ticks += 1;
		}

		assert!(ticks > 40, "runtime stalled during flush: {ticks} ticks");
		wait_until(|| !sink.inner.batches().is_empty());
		assert_eq!(sink.inner.batches().len(), 1);
	}
}
