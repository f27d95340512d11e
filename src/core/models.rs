// src/core/models.rs

use serde::{Serialize, Deserialize};
use strum::{Display, EnumString};

// --- Core Data Models ---

// The shared severity vocabulary for every analyzer. One enumeration covers
// both scales in play (password strength and URL/injection danger); each
// analyzer only ever produces its own legal subset via the banding
// constructors below, so an invalid cross-detector label cannot be built
// through the public API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
pub enum RiskLevel {
    #[serde(rename = "safe")]
    #[strum(serialize = "safe")]
    Safe,
    #[serde(rename = "suspicious")]
    #[strum(serialize = "suspicious")]
    Suspicious,
    #[serde(rename = "high-risk")]
    #[strum(serialize = "high-risk")]
    HighRisk,
    #[serde(rename = "dangerous")]
    #[strum(serialize = "dangerous")]
    Dangerous,
    #[serde(rename = "weak")]
    #[strum(serialize = "weak")]
    Weak,
    #[serde(rename = "medium")]
    #[strum(serialize = "medium")]
    Medium,
    #[serde(rename = "strong")]
    #[strum(serialize = "strong")]
    Strong,
    #[serde(rename = "very-strong")]
    #[strum(serialize = "very-strong")]
    VeryStrong,
}

impl RiskLevel {
    /// Bands a password score into the strength subset.
    ///
    /// The thresholds are a policy choice; the bands are monotonic and
    /// partition 0..=100 with no gaps or overlaps.
    pub fn band_password_score(score: u8) -> Self {
        match score {
            0..=39 => RiskLevel::Weak,
            40..=59 => RiskLevel::Medium,
            60..=79 => RiskLevel::Strong,
            _ => RiskLevel::VeryStrong,
        }
    }

    /// Bands a phishing risk score into the danger subset.
    pub fn band_phishing_score(score: u8) -> Self {
        match score {
            0..=24 => RiskLevel::Safe,
            25..=49 => RiskLevel::Suspicious,
            50..=74 => RiskLevel::HighRisk,
            _ => RiskLevel::Dangerous,
        }
    }
}

// --- Password Analyzer Models ---

// The six boolean criteria a password is scored against. Field order matches
// evaluation order, which in turn fixes the order of recommendations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PasswordCriteria {
    pub length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
    pub no_common: bool,
}

impl PasswordCriteria {
    /// True when every criterion is satisfied.
    pub fn all_met(&self) -> bool {
        self.length
            && self.uppercase
            && self.lowercase
            && self.numbers
            && self.special
            && self.no_common
    }
}

// The full outcome of a password strength analysis. Immutable once built;
// `strength` is always the banding of `score`, and `recommendations` is
// non-empty exactly when some criterion failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordResult {
    pub score: u8,
    pub strength: RiskLevel,
    pub crack_time: String,
    pub criteria: PasswordCriteria,
    pub recommendations: Vec<String>,
}

// --- Crack Time Estimator Models ---

// The combinatorial search space derived from a password's character classes.
// `combinations` saturates at f64::MAX instead of overflowing to infinity;
// `combinations_display` is an exponential rendering computed in log space,
// so it stays well-formed for any input length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrackEstimate {
    pub charset_size: u32,
    pub combinations: f64,
    pub combinations_display: String,
    pub crack_time_label: String,
}

// --- Phishing URL Analyzer Models ---

// The outcome of a phishing-indicator scan. `indicators` holds one fixed
// description per triggered rule, in rule-definition order, never reordered
// by severity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhishingResult {
    pub url: String,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub indicators: Vec<String>,
    pub recommendations: Vec<String>,
}

// --- SQL Injection Detector Models ---

// The outcome of a SQL injection signature scan. `detected_patterns` lists
// each matched signature once, in signature-definition order; `explanation`
// is a fixed per-level summary, not a concatenation of matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SqlInjectionResult {
    pub input: String,
    pub risk_level: RiskLevel,
    pub detected_patterns: Vec<String>,
    pub explanation: String,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_bands_cover_the_whole_score_range() {
        let mut previous = RiskLevel::band_password_score(0);
        assert_eq!(previous, RiskLevel::Weak);
        for score in 1..=100u8 {
            let level = RiskLevel::band_password_score(score);
            // Only the strength subset may appear, in non-decreasing order.
            assert!(matches!(
                level,
                RiskLevel::Weak | RiskLevel::Medium | RiskLevel::Strong | RiskLevel::VeryStrong
            ));
            let rank = |l: RiskLevel| match l {
                RiskLevel::Weak => 0,
                RiskLevel::Medium => 1,
                RiskLevel::Strong => 2,
                _ => 3,
            };
            assert!(rank(level) >= rank(previous), "band regressed at score {score}");
            previous = level;
        }
        assert_eq!(RiskLevel::band_password_score(100), RiskLevel::VeryStrong);
    }

    #[test]
    fn phishing_bands_cover_the_whole_score_range() {
        assert_eq!(RiskLevel::band_phishing_score(0), RiskLevel::Safe);
        assert_eq!(RiskLevel::band_phishing_score(24), RiskLevel::Safe);
        assert_eq!(RiskLevel::band_phishing_score(25), RiskLevel::Suspicious);
        assert_eq!(RiskLevel::band_phishing_score(49), RiskLevel::Suspicious);
        assert_eq!(RiskLevel::band_phishing_score(50), RiskLevel::HighRisk);
        assert_eq!(RiskLevel::band_phishing_score(74), RiskLevel::HighRisk);
        assert_eq!(RiskLevel::band_phishing_score(75), RiskLevel::Dangerous);
        assert_eq!(RiskLevel::band_phishing_score(100), RiskLevel::Dangerous);
    }

    #[test]
    fn risk_level_serializes_to_wire_labels() {
        assert_eq!(serde_json::to_string(&RiskLevel::HighRisk).unwrap(), "\"high-risk\"");
        assert_eq!(serde_json::to_string(&RiskLevel::VeryStrong).unwrap(), "\"very-strong\"");
        assert_eq!(RiskLevel::Dangerous.to_string(), "dangerous");
    }

    #[test]
    fn criteria_all_met_requires_every_flag() {
        let mut criteria = PasswordCriteria {
            length: true,
            uppercase: true,
            lowercase: true,
            numbers: true,
            special: true,
            no_common: true,
        };
        assert!(criteria.all_met());
        criteria.no_common = false;
        assert!(!criteria.all_met());
        assert!(!PasswordCriteria::default().all_met());
    }
}
