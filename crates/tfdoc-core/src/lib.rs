//! tfdoc Core Library
//!
//! Shared types, errors, and context rendering.
//!
//! This crate has no internal tfdoc dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`model`]: Resource and attribute records as read from the store
//! - [`context`]: Deterministic plain-text rendering of a resource

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod model;

mod proptests;

// Re-exports for convenience
pub use context::build_context;
pub use error::{Error, Result};
pub use model::{Attribute, AttributeInput, DocumentedResource, Resource, ResourceId, ResourceInput};
