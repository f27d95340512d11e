// src/core/mod.rs

// This makes the `models`, `analyzer`, and `knowledge_base` modules
// available to other parts of the crate. The `mod.rs` file acts as the root
// of the `core` module, exposing its sub-modules.

/// Contains all data structures shared by the analyzers, such as
/// `RiskLevel` and the per-analyzer result records.
pub mod models;

/// Houses the four heuristic analyzers (password strength, crack time,
/// phishing URL, SQL injection).
pub mod analyzer;

/// The static intelligence tables: denylists, rule data, signatures, and
/// canned recommendations and explanations.
pub mod knowledge_base;
