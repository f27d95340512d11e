// src/core/knowledge_base.rs

//! This module is the static "brain" of the engine: every denylist, rule
//! table, signature set, and canned recommendation lives here as read-only
//! data. Keeping the intelligence data-driven means the scoring logic in the
//! analyzers never has to change when a new signature or suspicious TLD is
//! added, and each table can be unit-tested on its own.

use once_cell::sync::Lazy;
use regex::Regex;

// --- Shared Character Classes ---

/// The fixed punctuation set counted as "special characters" by both the
/// password analyzer and the crack-time estimator.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Search-space contribution of the special-character class. The printable
/// ASCII symbol space is modelled as 32 characters, matching the classic
/// brute-force charset breakdown (26 + 26 + 10 + 32).
pub const SPECIAL_CHARSET_SIZE: u32 = 32;

/// True when `c` belongs to the special-character set.
pub fn is_special_character(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

// --- Password Intelligence ---

/// Denylist of passwords seen at the top of every public breach corpus.
/// Matching is case-sensitive and exact, as the original checker behaved.
pub static COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "123456789", "12345678", "12345", "1234567",
    "qwerty", "qwerty123", "abc123", "password1", "password123", "admin",
    "letmein", "welcome", "monkey", "dragon", "iloveyou", "sunshine",
    "princess", "football", "baseball", "master", "shadow", "superman",
    "trustno1", "111111", "000000", "654321", "1q2w3e4r", "qazwsx",
    "starwars", "freedom", "whatever", "passw0rd", "hello123", "zaq12wsx",
    "michael", "jennifer", "charlie", "donald",
];

/// True when the password appears on the common-password denylist.
pub fn is_common_password(password: &str) -> bool {
    COMMON_PASSWORDS.contains(&password)
}

/// Remediation advice keyed by the machine-readable code of a failing
/// password criterion. Table order matches criteria evaluation order.
static CRITERION_RECOMMENDATIONS: &[(&str, &str)] = &[
    ("PWD_TOO_SHORT", "Use at least 12 characters"),
    ("PWD_NO_UPPERCASE", "Add uppercase letters (A-Z)"),
    ("PWD_NO_LOWERCASE", "Add lowercase letters (a-z)"),
    ("PWD_NO_NUMBERS", "Add numbers (0-9)"),
    ("PWD_NO_SPECIAL", "Add special characters (!@#$%)"),
    ("PWD_COMMON", "Avoid common, easily guessed passwords"),
];

/// Looks up the remediation string for a failing criterion code.
pub fn criterion_recommendation(code: &str) -> Option<&'static str> {
    CRITERION_RECOMMENDATIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, advice)| *advice)
}

// --- Phishing Intelligence ---

/// Top-level domains with a high ratio of abuse to legitimate registrations.
/// Stored without the leading dot; compared against the last host label.
pub static SUSPICIOUS_TLDS: &[&str] = &[
    "tk", "ml", "ga", "cf", "gq", "xyz", "top", "click", "link", "zip",
    "review", "country", "stream", "loan", "work", "racing",
];

/// Well-known URL shortener hosts. A shortener hides the real destination,
/// which is exactly what a phishing lure wants.
pub static URL_SHORTENERS: &[&str] = &[
    "bit.ly", "tinyurl.com", "goo.gl", "t.co", "ow.ly", "is.gd", "buff.ly",
    "rebrand.ly", "cutt.ly", "shorte.st", "rb.gy", "tiny.cc",
];

/// Keywords that phishing pages plant in paths and query strings to look
/// like a legitimate credential flow.
pub static PHISHING_KEYWORDS: &[&str] = &[
    "verify", "secure", "account", "login", "signin", "update", "confirm",
    "banking", "password", "wallet", "suspend",
];

/// Static URL-safety education shown with every phishing analysis,
/// independent of what triggered.
pub static URL_SAFETY_RECOMMENDATIONS: &[&str] = &[
    "Verify the domain name carefully before entering any credentials",
    "Look for HTTPS and a valid certificate on pages that ask for data",
    "Do not follow links from unsolicited emails or messages",
    "Type known website addresses directly into the browser",
    "Use a password manager; it will not autofill on lookalike domains",
];

// --- SQL Injection Intelligence ---

/// Severity tier of a SQL injection signature. The detector's risk level is
/// the highest tier among all matches: Low alone means suspicious, Medium
/// raises to high-risk, High means dangerous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignatureSeverity {
    Low,
    Medium,
    High,
}

/// A fixed syntactic pattern characteristic of a known injection technique.
pub struct SqlSignature {
    /// The human-readable description surfaced in `detected_patterns`.
    pub label: &'static str,
    /// Severity tier contributed when the signature matches.
    pub severity: SignatureSeverity,
    /// Case-insensitive regular expression source. The regex engine is
    /// linear-time, so matching cost stays proportional to input length.
    pub pattern: &'static str,
}

/// The ordered signature set. `detected_patterns` preserves this order, and
/// each signature reports at most once per input.
pub static SQL_SIGNATURES: &[SqlSignature] = &[
    SqlSignature {
        label: "Tautology condition (' OR '1'='1)",
        severity: SignatureSeverity::High,
        pattern: r"(?i)\b(or|and)\b\s*'[^']*'\s*=\s*'?",
    },
    SqlSignature {
        label: "Numeric tautology (OR 1=1)",
        severity: SignatureSeverity::High,
        pattern: r"(?i)\b(or|and)\b\s+\d+\s*=\s*\d+",
    },
    SqlSignature {
        label: "Stacked query (; followed by a SQL statement)",
        severity: SignatureSeverity::High,
        pattern: r"(?i);\s*(select|insert|update|delete|drop|alter|create|truncate|exec)\b",
    },
    SqlSignature {
        label: "Destructive statement (DROP TABLE / DROP DATABASE)",
        severity: SignatureSeverity::High,
        pattern: r"(?i)\bdrop\s+(table|database)\b",
    },
    SqlSignature {
        label: "Destructive statement (DELETE FROM)",
        severity: SignatureSeverity::High,
        pattern: r"(?i)\bdelete\s+from\b",
    },
    SqlSignature {
        label: "Command execution attempt (EXEC / xp_cmdshell)",
        severity: SignatureSeverity::High,
        pattern: r"(?i)\b(xp_cmdshell|exec\s*\()",
    },
    SqlSignature {
        label: "UNION-based extraction (UNION SELECT)",
        severity: SignatureSeverity::Medium,
        pattern: r"(?i)\bunion\s+(all\s+)?select\b",
    },
    SqlSignature {
        label: "Encoded quote (%27 / 0x27)",
        severity: SignatureSeverity::Medium,
        pattern: r"(?i)(%27|%22|0x27|0x22)",
    },
    SqlSignature {
        label: "Inline comment block (/* */)",
        severity: SignatureSeverity::Low,
        pattern: r"(?s)/\*.*?\*/",
    },
    SqlSignature {
        label: "Comment truncation sequence (-- or #)",
        severity: SignatureSeverity::Low,
        pattern: r"--|#",
    },
    SqlSignature {
        label: "Unescaped single quote",
        severity: SignatureSeverity::Low,
        pattern: r"'",
    },
];

/// The signature table with its regexes compiled once, in definition order.
static COMPILED_SQL_SIGNATURES: Lazy<Vec<(Regex, &'static SqlSignature)>> = Lazy::new(|| {
    SQL_SIGNATURES
        .iter()
        .map(|signature| {
            // Patterns are fixed literals validated by the tests below, so a
            // failure here is a defect in this table, not in caller input.
            let regex = Regex::new(signature.pattern)
                .unwrap_or_else(|e| panic!("invalid SQL signature '{}': {e}", signature.label));
            (regex, signature)
        })
        .collect()
});

/// Returns the compiled signature set in definition order.
pub fn compiled_sql_signatures() -> &'static [(Regex, &'static SqlSignature)] {
    &COMPILED_SQL_SIGNATURES
}

/// Fixed one-sentence summary for each risk level the detector can produce.
pub fn sql_explanation(severity: Option<SignatureSeverity>) -> &'static str {
    match severity {
        None => "No SQL injection patterns were detected in the input.",
        Some(SignatureSeverity::Low) => {
            "The input contains syntax fragments that often appear in SQL injection probes; review how it reaches your queries."
        }
        Some(SignatureSeverity::Medium) => {
            "The input matches patterns used to extract data through SQL injection."
        }
        Some(SignatureSeverity::High) => {
            "The input matches known SQL injection attack patterns that could read, modify, or destroy data."
        }
    }
}

/// Static prevention practices shown with every detection result.
pub static SQL_PREVENTION_RECOMMENDATIONS: &[&str] = &[
    "Use parameterized queries (prepared statements) instead of string concatenation",
    "Validate and constrain all user input on the server side",
    "Run application queries under a least-privilege database account",
    "Escape special characters where parameterization is not possible",
    "Keep database errors out of user-facing responses",
];
