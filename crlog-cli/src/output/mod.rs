//! Output handling module

pub mod target;

pub use target::{OutputSink, OutputTarget};
