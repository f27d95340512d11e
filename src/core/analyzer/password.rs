// src/core/analyzer/password.rs

use tracing::{debug, info};

use crate::core::analyzer::crack_time::estimate_crack_time;
use crate::core::knowledge_base::{criterion_recommendation, is_common_password, is_special_character};
use crate::core::models::{PasswordCriteria, PasswordResult, RiskLevel};

/// Minimum length a password must reach to satisfy the length criterion.
pub const MIN_LENGTH: usize = 12;

// Criterion weights. They sum to 100, so a password meeting everything at
// exactly the minimum length already lands in the top band; the per-character
// bonus below only matters when some criterion is missing.
const WEIGHT_LENGTH: u32 = 20;
const WEIGHT_UPPERCASE: u32 = 10;
const WEIGHT_LOWERCASE: u32 = 10;
const WEIGHT_NUMBERS: u32 = 15;
const WEIGHT_SPECIAL: u32 = 20;
const WEIGHT_NO_COMMON: u32 = 25;

/// Extra credit per character beyond [`MIN_LENGTH`], clamped with the rest
/// of the score at 100.
const LENGTH_BONUS_PER_CHAR: u32 = 2;

/// Scores a password against six composition criteria and attaches a
/// brute-force crack-time label for the same input.
///
/// Total over any input, including the empty string: degenerate input simply
/// fails every criterion it can fail and scores accordingly. The result is
/// deterministic and the function keeps no state between calls.
pub fn analyze_password(password: &str) -> PasswordResult {
    let criteria = evaluate_criteria(password);
    let score = compute_score(password, &criteria);
    let strength = RiskLevel::band_password_score(score);
    let recommendations = build_recommendations(&criteria);
    let crack_time = estimate_crack_time(password).crack_time_label;

    info!(score, strength = %strength, "Password analysis finished.");
    PasswordResult {
        score,
        strength,
        crack_time,
        criteria,
        recommendations,
    }
}

/// Evaluates the six boolean criteria in their fixed order.
fn evaluate_criteria(password: &str) -> PasswordCriteria {
    let criteria = PasswordCriteria {
        length: password.chars().count() >= MIN_LENGTH,
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        numbers: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(is_special_character),
        no_common: !is_common_password(password),
    };
    debug!(?criteria, "Password criteria evaluated.");
    criteria
}

/// Weighted sum of the met criteria plus a capped length bonus, clamped
/// to 0..=100.
fn compute_score(password: &str, criteria: &PasswordCriteria) -> u8 {
    let mut score: u32 = 0;
    if criteria.length {
        score += WEIGHT_LENGTH;
    }
    if criteria.uppercase {
        score += WEIGHT_UPPERCASE;
    }
    if criteria.lowercase {
        score += WEIGHT_LOWERCASE;
    }
    if criteria.numbers {
        score += WEIGHT_NUMBERS;
    }
    if criteria.special {
        score += WEIGHT_SPECIAL;
    }
    if criteria.no_common {
        score += WEIGHT_NO_COMMON;
    }

    let length = password.chars().count();
    if length > MIN_LENGTH {
        // Clamp before the cast: extra length beyond the 100-point cap
        // cannot change the score, and the arithmetic must never overflow
        // no matter how large the input is.
        let extra = (length - MIN_LENGTH).min(100) as u32;
        score = score.saturating_add(extra * LENGTH_BONUS_PER_CHAR);
    }

    score.min(100) as u8
}

/// One remediation string per failing criterion, in criteria order.
fn build_recommendations(criteria: &PasswordCriteria) -> Vec<String> {
    let failing = [
        (criteria.length, "PWD_TOO_SHORT"),
        (criteria.uppercase, "PWD_NO_UPPERCASE"),
        (criteria.lowercase, "PWD_NO_LOWERCASE"),
        (criteria.numbers, "PWD_NO_NUMBERS"),
        (criteria.special, "PWD_NO_SPECIAL"),
        (criteria.no_common, "PWD_COMMON"),
    ];

    failing
        .iter()
        .filter(|(met, _)| !met)
        .filter_map(|(_, code)| criterion_recommendation(code))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_reference_password_meets_every_criterion() {
        let result = analyze_password("P@ssw0rd123!");
        assert!(result.criteria.all_met(), "criteria: {:?}", result.criteria);
        assert!(result.score >= 80, "score was {}", result.score);
        assert_eq!(result.strength, RiskLevel::VeryStrong);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn empty_password_is_total_and_weak() {
        let result = analyze_password("");
        assert_eq!(result.strength, RiskLevel::Weak);
        assert!(!result.criteria.length);
        assert!(!result.criteria.uppercase);
        assert!(!result.criteria.lowercase);
        assert!(!result.criteria.numbers);
        assert!(!result.criteria.special);
        // The empty string is not on the denylist, so no_common holds.
        assert!(result.criteria.no_common);
        assert!(!result.recommendations.is_empty());
        assert_eq!(result.crack_time, "Instantly");
    }

    #[test]
    fn common_password_fails_the_denylist_criterion() {
        let result = analyze_password("password");
        assert!(!result.criteria.no_common);
        assert_eq!(result.strength, RiskLevel::Weak);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("common")));
    }

    #[test]
    fn score_stays_in_bounds_for_arbitrary_inputs() {
        let inputs = [
            "",
            "a",
            "password",
            "P@ssw0rd123!",
            "日本語のパスワード",
            "\u{0} control \u{7} chars",
            &"x".repeat(500),
        ];
        for input in inputs {
            let result = analyze_password(input);
            assert!(result.score <= 100, "score out of bounds for {input:?}");
        }
    }

    #[test]
    fn adding_a_missing_class_never_lowers_the_score() {
        let base = "abcdefghijkl";
        let with_upper = format!("{base}A");
        let with_digit = format!("{with_upper}7");
        let with_special = format!("{with_digit}!");

        let mut previous = analyze_password(base).score;
        for password in [with_upper.as_str(), with_digit.as_str(), with_special.as_str()] {
            let score = analyze_password(password).score;
            assert!(score >= previous, "score dropped for {password:?}");
            previous = score;
        }
    }

    #[test]
    fn length_bonus_rewards_passwords_beyond_the_floor() {
        // Same single class, different lengths; only the bonus can differ.
        let short = analyze_password(&"a".repeat(12)).score;
        let long = analyze_password(&"a".repeat(20)).score;
        assert!(long > short);
    }

    #[test]
    fn extreme_lengths_saturate_instead_of_overflowing() {
        // The length bonus must stay clamped however long the input gets;
        // a huge single-class password simply pins the score at the cap.
        let result = analyze_password(&"x".repeat(300_000));
        assert_eq!(result.score, 100);
        assert!(result.criteria.length);
        assert!(!result.criteria.uppercase);
    }

    #[test]
    fn recommendations_mirror_failing_criteria_in_order() {
        let result = analyze_password("abc");
        // Fails length, uppercase, numbers, special; passes lowercase and
        // no_common. Order must match criteria evaluation order.
        assert_eq!(
            result.recommendations,
            vec![
                "Use at least 12 characters",
                "Add uppercase letters (A-Z)",
                "Add numbers (0-9)",
                "Add special characters (!@#$%)",
            ]
        );
    }

    #[test]
    fn analysis_is_deterministic() {
        let first = analyze_password("Tr0ub4dor&3");
        let second = analyze_password("Tr0ub4dor&3");
        assert_eq!(first, second);
    }
}
