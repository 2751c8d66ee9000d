//! # tfdoc-cli
//!
//! Command-line front end for tfdoc.
//!
//! This crate provides the pieces behind the `tfdoc` binary:
//! - Settings loading from a TOML file and the environment
//! - Logging setup
//! - Construction of the store, model provider, and generator
//! - Console rendering of explanations and attribute tables
//! - The `explain`, `inspect`, and `ingest` command handlers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod settings;

pub use settings::Settings;
