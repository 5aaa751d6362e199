//! Carriage-return collapsing line filter
//!
//! [`LineFilter`] consumes a byte stream in arbitrary chunks and reproduces
//! what a terminal would show once each line is finished. A carriage return
//! moves the write cursor back to column zero; following bytes overwrite the
//! current line in place. A line feed emits the whole line and starts a new
//! one. Nothing else is interpreted: every byte value, NUL included, is data.
//!
//! # Overwrite semantics
//!
//! In the default [`OverwriteMode::Retain`] mode a carriage return never
//! shrinks the line, so a shorter overwrite keeps the tail of a longer
//! earlier segment:
//!
//! ```rust
//! use crlog_core::{filter_bytes, OverwriteMode};
//!
//! assert_eq!(filter_bytes(b"123\r456\r78", OverwriteMode::Retain), b"786");
//! assert_eq!(filter_bytes(b"123\r456\r78", OverwriteMode::Truncate), b"78");
//! ```
//!
//! Memory is bounded by the longest visual line, not by the length of a
//! progress sequence. Input with no separators at all is buffered whole
//! until end of stream.

use crate::config::OverwriteMode;
use crate::stats::FilterStats;
use memchr::memchr2;
use std::io::{self, Write};

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Streaming state machine that collapses carriage-return overwrites
#[derive(Debug, Default)]
pub struct LineFilter {
    /// Current visual line
    line: Vec<u8>,
    /// Next write position in `line`, never past its end
    cursor: usize,
    mode: OverwriteMode,
    stats: FilterStats,
}

impl LineFilter {
    /// Create a filter with the given carriage return handling
    pub fn new(mode: OverwriteMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Feed the next chunk of input, writing every line it completes to `sink`.
    ///
    /// Bytes after the last line feed stay buffered for the next call, so the
    /// result does not depend on where chunks are split.
    pub fn process<W: Write + ?Sized>(&mut self, chunk: &[u8], sink: &mut W) -> io::Result<()> {
        if chunk.is_empty() {
            return Ok(());
        }
        self.stats.chunks += 1;
        self.stats.bytes_in += chunk.len() as u64;

        let mut rest = chunk;
        while let Some(pos) = memchr2(CR, LF, rest) {
            let (segment, tail) = rest.split_at(pos);
            if tail[0] == LF {
                self.emit_line(segment, &rest[..=pos], sink)?;
            } else {
                self.overwrite(segment);
                self.carriage_return();
            }
            rest = &tail[1..];
        }
        self.overwrite(rest);

        Ok(())
    }

    /// Flush the unterminated final line at end of input.
    ///
    /// An empty line writes nothing. The filter is left empty and can be
    /// reused for another stream.
    pub fn finish<W: Write + ?Sized>(&mut self, sink: &mut W) -> io::Result<()> {
        if !self.line.is_empty() {
            sink.write_all(&self.line)?;
            self.stats.bytes_out += self.line.len() as u64;
        }
        self.line.clear();
        self.cursor = 0;
        Ok(())
    }

    /// Bytes of the line under construction
    pub fn pending(&self) -> &[u8] {
        &self.line
    }

    /// Position where the next byte will be written
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> OverwriteMode {
        self.mode
    }

    /// Counters accumulated since creation or the last [`reset`](Self::reset)
    pub fn stats(&self) -> FilterStats {
        self.stats
    }

    /// Drop any pending line and zero the counters
    pub fn reset(&mut self) {
        self.line.clear();
        self.cursor = 0;
        self.stats = FilterStats::default();
    }

    /// Write `bytes` at the cursor, overwriting in place and appending past the end.
    fn overwrite(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }

        let overlap = (self.line.len() - self.cursor).min(bytes.len());
        self.line[self.cursor..self.cursor + overlap].copy_from_slice(&bytes[..overlap]);
        self.line.extend_from_slice(&bytes[overlap..]);
        self.cursor += bytes.len();
        self.stats.peak_line_len = self.stats.peak_line_len.max(self.line.len());
    }

    fn carriage_return(&mut self) {
        self.stats.carriage_returns += 1;
        self.cursor = 0;
        if self.mode == OverwriteMode::Truncate {
            self.line.clear();
        }
    }

    /// Emit the finished line. `terminated` is `segment` plus its line feed,
    /// written straight from the input when nothing is buffered.
    fn emit_line<W: Write + ?Sized>(
        &mut self,
        segment: &[u8],
        terminated: &[u8],
        sink: &mut W,
    ) -> io::Result<()> {
        if self.line.is_empty() {
            sink.write_all(terminated)?;
            self.stats.bytes_out += terminated.len() as u64;
            self.stats.peak_line_len = self.stats.peak_line_len.max(segment.len());
        } else {
            self.overwrite(segment);
            // on failure the pending line must stay free of the terminator
            sink.write_all(&self.line)?;
            sink.write_all(&[LF])?;
            self.stats.bytes_out += self.line.len() as u64 + 1;
            self.line.clear();
            self.cursor = 0;
        }
        self.stats.lines += 1;
        Ok(())
    }
}

/// Filter an in-memory buffer in one pass.
pub fn filter_bytes(input: &[u8], mode: OverwriteMode) -> Vec<u8> {
    let mut filter = LineFilter::new(mode);
    let mut out = Vec::with_capacity(input.len());
    filter
        .process(input, &mut out)
        .and_then(|()| filter.finish(&mut out))
        .expect("writing to a Vec<u8> cannot fail");
    out
}
