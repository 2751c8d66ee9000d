#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! tfdoc Explain Library
//!
//! Retrieves a resource and its attributes, renders the context document,
//! and asks a language model to explain it using that document alone.

pub mod generator;
pub mod prompt;

pub use generator::{ExplainRequest, ExplanationGenerator};
pub use prompt::Language;

// Re-export core types
pub use tfdoc_core::{Error, Result};
