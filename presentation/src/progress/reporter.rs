//! Composing indicator shown while the host reply is outstanding

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner displayed while the session is awaiting a host reply.
///
/// Created when a backend call goes out and dropped (cleared) the moment
/// the reply is appended, so it mirrors the session's `AwaitingReply`
/// interval exactly.
pub struct ComposingIndicator {
    bar: ProgressBar,
}

impl ComposingIndicator {
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message("The host is lining up the next joke...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Quiet variant that draws nothing (one-shot / --quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} {msg:.italic}")
            .unwrap()
    }
}
