// src/core/analyzer/sql_injection.rs

use tracing::{debug, info};

use crate::core::knowledge_base::{
    compiled_sql_signatures, sql_explanation, SignatureSeverity, SQL_PREVENTION_RECOMMENDATIONS,
};
use crate::core::models::{RiskLevel, SqlInjectionResult};

/// Matches an arbitrary input string against the fixed SQL injection
/// signature set.
///
/// Matching is case-insensitive and whitespace-tolerant (both are baked
/// into the signature regexes). Each signature reports at most once, in
/// signature-definition order, and the risk level is driven by the highest
/// severity tier seen: no match is safe, low-severity fragments alone are
/// suspicious, extraction patterns are high-risk, destructive or stacked
/// constructs are dangerous.
pub fn detect_sql_injection(input: &str) -> SqlInjectionResult {
    let mut detected_patterns = Vec::new();
    let mut highest_severity: Option<SignatureSeverity> = None;

    for (regex, signature) in compiled_sql_signatures() {
        if regex.is_match(input) {
            debug!(signature = signature.label, severity = ?signature.severity, "SQL signature matched.");
            detected_patterns.push(signature.label.to_string());
            highest_severity = Some(match highest_severity {
                Some(current) => current.max(signature.severity),
                None => signature.severity,
            });
        }
    }

    let risk_level = band_severity(highest_severity);
    info!(
        risk_level = %risk_level,
        matches = detected_patterns.len(),
        "SQL injection detection finished."
    );

    SqlInjectionResult {
        input: input.to_string(),
        risk_level,
        detected_patterns,
        explanation: sql_explanation(highest_severity).to_string(),
        recommendations: SQL_PREVENTION_RECOMMENDATIONS
            .iter()
            .map(|r| r.to_string())
            .collect(),
    }
}

/// Maps the highest matched severity tier onto the detector's legal subset
/// of risk levels.
fn band_severity(severity: Option<SignatureSeverity>) -> RiskLevel {
    match severity {
        None => RiskLevel::Safe,
        Some(SignatureSeverity::Low) => RiskLevel::Suspicious,
        Some(SignatureSeverity::Medium) => RiskLevel::HighRisk,
        Some(SignatureSeverity::High) => RiskLevel::Dangerous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_safe() {
        let result = detect_sql_injection("");
        assert_eq!(result.risk_level, RiskLevel::Safe);
        assert!(result.detected_patterns.is_empty());
        assert!(!result.explanation.is_empty());
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn plain_text_yields_no_patterns() {
        let result = detect_sql_injection("Jane Doe, 42 Main Street");
        assert_eq!(result.risk_level, RiskLevel::Safe);
        assert!(result.detected_patterns.is_empty());
    }

    #[test]
    fn classic_tautology_is_dangerous() {
        let result = detect_sql_injection("' OR '1'='1");
        assert_eq!(result.risk_level, RiskLevel::Dangerous);
        assert!(result
            .detected_patterns
            .iter()
            .any(|p| p.contains("Tautology")));
    }

    #[test]
    fn bobby_tables_hits_stacked_and_destructive_signatures() {
        let result = detect_sql_injection("Robert'); DROP TABLE Students;--");
        assert_eq!(result.risk_level, RiskLevel::Dangerous);
        assert!(result
            .detected_patterns
            .iter()
            .any(|p| p.contains("Stacked query")));
        assert!(result
            .detected_patterns
            .iter()
            .any(|p| p.contains("DROP TABLE")));
    }

    #[test]
    fn lone_quote_and_comment_stay_suspicious() {
        let result = detect_sql_injection("admin'--");
        assert_eq!(result.risk_level, RiskLevel::Suspicious);
        assert!(result
            .detected_patterns
            .iter()
            .any(|p| p.contains("single quote")));
        assert!(result
            .detected_patterns
            .iter()
            .any(|p| p.contains("Comment truncation")));
    }

    #[test]
    fn union_select_is_high_risk() {
        let result = detect_sql_injection("1 UNION ALL SELECT username, password FROM users");
        assert_eq!(result.risk_level, RiskLevel::HighRisk);
        assert!(result
            .detected_patterns
            .iter()
            .any(|p| p.contains("UNION")));
    }

    #[test]
    fn matching_is_case_insensitive_and_whitespace_tolerant() {
        let result = detect_sql_injection("x'  oR   '1' = '1");
        assert_eq!(result.risk_level, RiskLevel::Dangerous);

        let shouty = detect_sql_injection("1; dRoP TaBlE users");
        assert_eq!(shouty.risk_level, RiskLevel::Dangerous);
    }

    #[test]
    fn encoded_quotes_are_flagged() {
        let result = detect_sql_injection("name%27%20OR%201=1");
        assert!(result
            .detected_patterns
            .iter()
            .any(|p| p.contains("Encoded quote")));
        assert!(result.risk_level != RiskLevel::Safe);
    }

    #[test]
    fn each_signature_reports_once() {
        let result = detect_sql_injection("'' '' '' -- -- --");
        let quote_hits = result
            .detected_patterns
            .iter()
            .filter(|p| p.contains("single quote"))
            .count();
        assert_eq!(quote_hits, 1);
    }

    #[test]
    fn patterns_follow_signature_definition_order() {
        let result = detect_sql_injection("Robert'); DROP TABLE Students;--");
        let stacked = result
            .detected_patterns
            .iter()
            .position(|p| p.contains("Stacked query"));
        let quote = result
            .detected_patterns
            .iter()
            .position(|p| p.contains("single quote"));
        // The stacked-query signature is defined before the lone-quote one.
        assert!(stacked < quote);
    }

    #[test]
    fn explanation_is_a_fixed_template_per_level() {
        let a = detect_sql_injection("' OR '1'='1");
        let b = detect_sql_injection("1; DROP TABLE users");
        assert_eq!(a.explanation, b.explanation);
    }

    #[test]
    fn detection_is_deterministic() {
        let input = "' UNION SELECT * FROM passwords--";
        assert_eq!(detect_sql_injection(input), detect_sql_injection(input));
    }
}
