//! Progress reporting for the loader.
//!
//! [`ProgressCallback`] keeps the loader independent of how progress is
//! drawn: the CLI plugs in an `indicatif` spinner, tests use
//! [`NullProgress`].

use std::sync::Arc;

/// Receives row-count updates while a file is being loaded.
pub trait ProgressCallback: Send + Sync {
    /// Advance progress by `delta` rows.
    fn inc(&self, delta: u64);

    /// Mark loading as complete with a final message.
    fn finish(&self, msg: String);
}

/// A [`ProgressCallback`] that ignores every update.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn inc(&self, _delta: u64) {}
    fn finish(&self, _msg: String) {}
}

/// Returns a shared [`NullProgress`] instance.
#[must_use]
pub fn null_progress() -> Arc<dyn ProgressCallback> {
    Arc::new(NullProgress)
}
