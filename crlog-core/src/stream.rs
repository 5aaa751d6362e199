//! Chunked read-filter-write driver
//!
//! [`StreamFilter`] runs a strictly sequential loop: read one chunk, feed it
//! to a [`LineFilter`], flush whatever lines it completed, repeat. All lines
//! finished by chunk N reach the sink before chunk N+1 is read.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::filter::LineFilter;
use crate::stats::FilterStats;
use std::io::{self, Read, Write};

/// Label used for standard input in error messages
pub const STDIN_NAME: &str = "<stdin>";

/// Label used for standard output in error messages
pub const STDOUT_NAME: &str = "<stdout>";

/// Drives a [`LineFilter`] over a reader and a writer
#[derive(Debug, Clone, Default)]
pub struct StreamFilter {
    config: Config,
}

impl StreamFilter {
    /// Create a stream filter with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stream filter with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Filter `reader` into `writer` until end of stream.
    ///
    /// `source_name` and `sink_name` label the two ends in errors. A failed
    /// read or write aborts immediately; output already flushed stays
    /// flushed. Every flush carries data, so its failure is an
    /// [`Error::Write`]. Releasing `writer` afterwards is left to the caller.
    pub fn run<R, W>(
        &self,
        source_name: &str,
        mut reader: R,
        sink_name: &str,
        mut writer: W,
    ) -> Result<FilterStats>
    where
        R: Read,
        W: Write,
    {
        let mut filter = LineFilter::new(self.config.mode);
        let mut chunk = vec![0u8; self.config.chunk_size];

        log::debug!(
            "Filtering {} -> {} (chunk size {} bytes, mode {})",
            source_name,
            sink_name,
            self.config.chunk_size,
            self.config.mode
        );

        loop {
            let read = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::read(source_name, e)),
            };

            filter
                .process(&chunk[..read], &mut writer)
                .and_then(|()| writer.flush())
                .map_err(|e| Error::write(sink_name, e))?;

            log::trace!(
                "chunk of {} bytes, {} bytes pending",
                read,
                filter.pending().len()
            );
        }

        filter
            .finish(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| Error::write(sink_name, e))?;

        let stats = filter.stats();
        log::info!(
            "Filtered {}: {} bytes in, {} bytes out, {} lines, {} carriage returns",
            source_name,
            stats.bytes_in,
            stats.bytes_out,
            stats.lines,
            stats.carriage_returns
        );

        Ok(stats)
    }
}
