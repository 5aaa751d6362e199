//! Error types for filtering operations

use std::io;
use thiserror::Error;

/// Error type for filter operations
#[derive(Debug, Error)]
pub enum Error {
    /// Reading from the byte source failed before end of stream
    #[error("Failed to read from {source_name}: {source}")]
    Read {
        /// File path or stream label of the source
        source_name: String,
        #[source]
        source: io::Error,
    },

    /// Writing to the sink failed or was short
    #[error("Failed to write to {sink_name}: {source}")]
    Write {
        /// File path or stream label of the sink
        sink_name: String,
        #[source]
        source: io::Error,
    },

    /// Releasing a resource after a clean end of stream failed.
    ///
    /// [`StreamFilter::run`](crate::StreamFilter::run) never returns this;
    /// callers raise it from their own release step, see [`Error::close`].
    #[error("Failed to close {name}: {source}")]
    Close {
        /// File path or stream label of the resource
        name: String,
        #[source]
        source: io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn read(source_name: impl Into<String>, source: io::Error) -> Self {
        Error::Read {
            source_name: source_name.into(),
            source,
        }
    }

    pub(crate) fn write(sink_name: impl Into<String>, source: io::Error) -> Self {
        Error::Write {
            sink_name: sink_name.into(),
            source,
        }
    }

    /// Close error for `name`, e.g. a failed `sync_all` on an output file
    pub fn close(name: impl Into<String>, source: io::Error) -> Self {
        Error::Close {
            name: name.into(),
            source,
        }
    }
}

/// Result type for filter operations
pub type Result<T> = std::result::Result<T, Error>;
