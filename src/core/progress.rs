use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Byte counters for one download, mirrored onto a single terminal line.
///
/// The bar is redrawn with the current terminal width on every tick, so a
/// resized terminal is picked up on the next chunk.
pub struct DownloadProgress {
    written: u64,
    total: u64,
    bar: ProgressBar,
}

impl DownloadProgress {
    pub fn new(label: &str, total: u64) -> Self {
        let bar = if total > 0 {
            let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stdout());
            bar.set_style(
                ProgressStyle::with_template(
                    "Downloading {msg}... [{wide_bar}] {percent}% ({bytes}/{total_bytes})",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
            );
            bar
        } else {
            let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
            bar.set_style(
                ProgressStyle::with_template("Downloading {msg}... {bytes}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar
        };
        bar.set_message(label.to_string());

        Self {
            written: 0,
            total,
            bar,
        }
    }

    /// Counters only, nothing is drawn.
    pub fn hidden(total: u64) -> Self {
        Self {
            written: 0,
            total,
            bar: ProgressBar::hidden(),
        }
    }

    pub fn advance(&mut self, bytes: u64) {
        self.written += bytes;
        self.bar.set_position(self.written);
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Completed fraction, 0.0 while the total is unknown.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.written as f64 / self.total as f64
        }
    }

    pub fn percent(&self) -> u64 {
        (self.fraction() * 100.0).round() as u64
    }

    pub fn finish(&self) {
        self.bar.finish();
    }
}
