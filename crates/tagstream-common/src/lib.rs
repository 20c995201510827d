//! Common utilities for tagstream.
//!
//! This crate provides shared infrastructure used by the tokenizer and the CLI:
//! - **Warning System** - deduplicated, colored terminal output for malformed input

pub mod warning;
