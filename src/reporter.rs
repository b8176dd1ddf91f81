//! Test-reporting collaborators
//!
//! A [`Reporter`] receives failure messages and the "test failed" signal
//! from the assertions. Assertions never panic on their own, so a test can
//! keep going after a failed check and decide later whether to stop.

use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Receives failures produced by database assertions
pub trait Reporter {
	/// Report a failure message
	fn error(&self, message: &str);

	/// Mark the current test as failed
	fn fail(&self);
}

impl<R: Reporter + ?Sized> Reporter for &R {
	fn error(&self, message: &str) {
		(**self).error(message)
	}

	fn fail(&self) {
		(**self).fail()
	}
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
	fn error(&self, message: &str) {
		(**self).error(message)
	}

	fn fail(&self) {
		(**self).fail()
	}
}

/// Reporter that collects failures for later inspection
///
/// Call [`finish`](RecordingReporter::finish) at the end of a test to turn
/// collected failures into a panic, like a soft-assertion block.
///
/// # Examples
///
/// ```
/// use dbassert::{RecordingReporter, Reporter};
///
/// let reporter = RecordingReporter::new();
/// reporter.error("row missing");
/// reporter.fail();
///
/// assert!(reporter.is_failed());
/// assert_eq!(reporter.messages(), vec!["row missing".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingReporter {
	messages: Mutex<Vec<String>>,
	failed: AtomicBool,
}

impl RecordingReporter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Messages reported so far, in order
	pub fn messages(&self) -> Vec<String> {
		self.messages.lock().clone()
	}

	pub fn is_failed(&self) -> bool {
		self.failed.load(Ordering::SeqCst)
	}

	/// Forget everything recorded so far
	pub fn reset(&self) {
		self.messages.lock().clear();
		self.failed.store(false, Ordering::SeqCst);
	}

	/// Panic with every collected message if the test was marked failed
	///
	/// # Panics
	///
	/// Panics when [`fail`](Reporter::fail) has been called.
	pub fn finish(&self) {
		if self.is_failed() {
			let messages = self.messages();
			panic!(
				"{} database assertion failure(s):\n{}",
				messages.len(),
				messages.join("\n")
			);
		}
	}
}

impl Reporter for RecordingReporter {
	fn error(&self, message: &str) {
		self.messages.lock().push(message.to_string());
	}

	fn fail(&self) {
		self.failed.store(true, Ordering::SeqCst);
	}
}

/// Reporter that emits failures as `tracing` error events
#[derive(Debug, Default)]
pub struct TracingReporter {
	failed: AtomicBool,
}

impl TracingReporter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_failed(&self) -> bool {
		self.failed.load(Ordering::SeqCst)
	}
}

impl Reporter for TracingReporter {
	fn error(&self, message: &str) {
		tracing::error!(target: "dbassert", "{}", message);
	}

	fn fail(&self) {
		self.failed.store(true, Ordering::SeqCst);
	}
}
