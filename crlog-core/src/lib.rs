//! Streaming carriage-return collapsing for captured terminal output
//!
//! Progress indicators redraw a terminal line by emitting a carriage return
//! and overwriting the text in place. Redirected into a file, every redraw
//! piles up on one enormous line. This crate replays those overwrites the
//! way a terminal displays them and passes ordinary lines through untouched.
//!
//! # Architecture
//!
//! - [`LineFilter`]: the byte-level state machine (line buffer plus cursor)
//! - [`StreamFilter`]: the blocking read-filter-write loop around it
//! - [`Config`]: chunk size and [`OverwriteMode`]
//! - [`Error`]: read, write, close and configuration failures
//!
//! # Example
//!
//! ```rust
//! use crlog_core::{Config, StreamFilter};
//! use std::io::Cursor;
//!
//! let input = Cursor::new(b"build\n 10%\r 60%\r100%\ndone\n".to_vec());
//! let mut output = Vec::new();
//!
//! let config = Config::builder().chunk_size(4).build().unwrap();
//! let stats = StreamFilter::with_config(config)
//!     .run("build.log", input, "<memory>", &mut output)
//!     .unwrap();
//!
//! assert_eq!(output, b"build\n100%\ndone\n");
//! assert_eq!(stats.lines, 3);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod stats;
pub mod stream;

pub use config::{defaults, Config, ConfigBuilder, OverwriteMode};
pub use error::{Error, Result};
pub use filter::{filter_bytes, LineFilter};
pub use stats::FilterStats;
pub use stream::{StreamFilter, STDIN_NAME, STDOUT_NAME};
