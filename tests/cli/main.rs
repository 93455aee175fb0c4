//! CLI integration tests for wpblocks.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (parse, strip)
//! - Stdin/stdout handling
//! - Exit codes
//! - Config discovery

mod common;
mod parse;
mod strip;
