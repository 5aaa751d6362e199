//! Progress reporting module

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::time::Duration;

/// Byte progress reporter drawn on stderr
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter that draws nothing
    pub fn disabled() -> Self {
        Self { progress_bar: None }
    }

    /// Create a byte progress bar for an input of `total_bytes`
    pub fn bytes(total_bytes: u64) -> Result<Self> {
        let pb = ProgressBar::new(total_bytes);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}) {msg}",
                )?
                .progress_chars("##-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        Ok(Self {
            progress_bar: Some(pb),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Count bytes read through `reader` on the bar
    pub fn wrap_read(&self, reader: Box<dyn Read>) -> Box<dyn Read> {
        match &self.progress_bar {
            Some(pb) => Box::new(pb.wrap_read(reader)),
            None => reader,
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }

    /// Stop the bar where it is after a failed run
    pub fn abandon(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.abandon_with_message("Failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_disabled_reporter_passes_reader_through() {
        let reporter = ProgressReporter::disabled();
        assert!(!reporter.is_enabled());

        let mut reader = reporter.wrap_read(Box::new(Cursor::new(b"abc".to_vec())));
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"abc");
        reporter.finish();
    }

    #[test]
    fn test_bytes_reporter_counts_reads() {
        let reporter = ProgressReporter::bytes(5).unwrap();
        assert!(reporter.is_enabled());

        let mut reader = reporter.wrap_read(Box::new(Cursor::new(b"hello".to_vec())));
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"hello");
        assert_eq!(reporter.progress_bar.as_ref().unwrap().position(), 5);
        reporter.finish();
    }

    #[test]
    fn test_abandon_stops_bar_at_failure_point() {
        let reporter = ProgressReporter::bytes(10).unwrap();

        let mut reader = reporter.wrap_read(Box::new(Cursor::new(b"abc".to_vec())));
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).unwrap();
        reporter.abandon();

        let pb = reporter.progress_bar.as_ref().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.position(), 3);
        assert_eq!(pb.message(), "Failed");
    }
}
