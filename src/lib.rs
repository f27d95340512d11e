//! CyberShield: an educational heuristic security-analysis engine.
//!
//! Four independent, stateless analyzers over untrusted strings:
//!
//! - [`analyze_password`] scores a password against composition criteria
//!   and a common-password denylist.
//! - [`estimate_crack_time`] derives a brute-force search space from the
//!   password's character classes and renders it as a human-readable
//!   duration at a fixed guess rate.
//! - [`analyze_phishing_url`] scans a URL string for structural and
//!   lexical phishing indicators.
//! - [`detect_sql_injection`] matches input against a signature set of
//!   SQL injection syntax patterns.
//!
//! Every analyzer is a pure, synchronous, total function: any string is a
//! valid input, including empty, control-character, and non-ASCII text, and
//! the result is deterministic. The engine is advisory and educational; it
//! performs no network access and keeps no state between calls.
//!
//! # Example
//!
//! ```
//! use cybershield::{analyze_password, RiskLevel};
//!
//! let result = analyze_password("P@ssw0rd123!");
//! assert_eq!(result.strength, RiskLevel::VeryStrong);
//! assert!(result.criteria.all_met());
//! ```

pub mod core;
pub mod logging;

// Public API
pub use crate::core::analyzer::{
    analyze_password, analyze_phishing_url, detect_sql_injection, estimate_crack_time,
};
pub use crate::core::models::{
    CrackEstimate, PasswordCriteria, PasswordResult, PhishingResult, RiskLevel,
    SqlInjectionResult,
};
