//! Property-based tests for context rendering.
