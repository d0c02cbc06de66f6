//! # scour-cli
//!
//! The `scour` command-line tool: converts raw log files into bulk-index
//! records, translates free-text queries into structured search requests,
//! executes them against a REST search engine, and offers an interactive
//! query loop.
//!
//! The heavy lifting lives in the library crates: `scour-ingest` for
//! conversion, `scour-query` for translation, and `scour-registry` for the
//! collection configuration. This crate wires them to the console.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, Result};
