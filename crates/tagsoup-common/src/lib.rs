//! Common utilities for the tagsoup workspace.
//!
//! This crate provides shared infrastructure used by the markup engine and
//! the command-line host:
//! - **Warning System** - deduplicated, colored terminal output for markup
//!   the engine had to repair or reject

pub mod warning;
