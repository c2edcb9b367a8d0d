#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal plumbing for the `crime_stats` binary.
//!
//! [`init_logger`] installs `pretty_env_logger` behind
//! `indicatif-log-bridge` so log lines are suspended while the load
//! spinner redraws, and [`IndicatifProgress`] implements the loader's
//! [`ProgressCallback`] on top of an `indicatif` spinner.

use std::sync::Arc;
use std::time::Duration;

use crime_stats_source::progress::ProgressCallback;
use indicatif::{ProgressBar, ProgressStyle};

pub use indicatif::MultiProgress;

/// An `indicatif` spinner that implements [`ProgressCallback`].
pub struct IndicatifProgress {
    bar: ProgressBar,
}

impl IndicatifProgress {
    /// Creates a spinner that shows the running row count while a file
    /// is loaded. The total is never known up front.
    #[must_use]
    pub fn rows_spinner(multi: &MultiProgress, message: &str) -> Arc<dyn ProgressCallback> {
        let bar = multi.add(ProgressBar::new_spinner());
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg} {human_pos} rows [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());

        Arc::new(Self { bar })
    }
}

impl ProgressCallback for IndicatifProgress {
    fn inc(&self, delta: u64) {
        self.bar.inc(delta);
    }

    fn finish(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}

/// Installs `pretty_env_logger` (filtered by `RUST_LOG`) as the global
/// logger, routed through a [`MultiProgress`] so spinners and log lines
/// do not overwrite each other.
///
/// Spinners created afterwards must be added to the returned handle.
#[must_use]
pub fn init_logger() -> MultiProgress {
    let multi = MultiProgress::new();
    let env_logger = pretty_env_logger::formatted_builder()
        .parse_env("RUST_LOG")
        .build();
    let max_level = env_logger.filter();

    let bridge = indicatif_log_bridge::LogWrapper::new(multi.clone(), env_logger);
    if bridge.try_init().is_err() {
        // A logger is already installed; keep it.
        return multi;
    }
    log::set_max_level(max_level);

    multi
}
