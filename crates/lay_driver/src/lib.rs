//! lay_driver: file-level front end.
//!
//! Reads a source file, normalizes and lexes it, and reports the result as
//! diagnostics the CLI can render.
mod frontend;

pub use frontend::{Driver, LexedFile, Timings};
