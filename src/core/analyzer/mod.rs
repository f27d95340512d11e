// src/core/analyzer/mod.rs

// This file acts as the public interface for the `analyzer` module.
// Each analyzer is an independent leaf: pure, synchronous, stateless, and
// free to run concurrently with any other invocation. They share nothing at
// runtime; the only internal reuse is the password analyzer delegating its
// crack-time label to the estimator.
pub mod crack_time;
pub mod password;
pub mod phishing_url;
pub mod sql_injection;

pub use crack_time::estimate_crack_time;
pub use password::analyze_password;
pub use phishing_url::analyze_phishing_url;
pub use sql_injection::detect_sql_injection;
