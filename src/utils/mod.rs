//! Utility helpers for widget test suites.

/// Environment variables controlling snapshot behavior, and their gates.
pub mod env;
/// Widget-tree dumps for error messages and debugging.
pub mod tree;
/// Polling helper for conditions that settle asynchronously.
pub mod wait;
