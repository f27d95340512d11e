// src/core/analyzer/phishing_url.rs

use std::net::IpAddr;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};
use url::Url;

use crate::core::knowledge_base::{
    PHISHING_KEYWORDS, SUSPICIOUS_TLDS, URL_SAFETY_RECOMMENDATIONS, URL_SHORTENERS,
};
use crate::core::models::{PhishingResult, RiskLevel};

/// Lexical fallback for spotting a dotted-quad host when the input does not
/// parse as a URL at all.
static IPV4_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b").expect("invalid IPv4 pattern")
});

// What the rules get to look at. Parsed fields are optional: a string that
// is not a URL still goes through every lexical rule on `raw`.
struct UrlContext<'a> {
    raw: &'a str,
    scheme: Option<String>,
    host: Option<String>,
    path_and_query: String,
}

impl<'a> UrlContext<'a> {
    fn new(raw: &'a str) -> Self {
        // Scheme-less input still deserves structural checks, so retry with
        // a scheme prefix purely to extract the host. The missing scheme is
        // remembered and scored by the transport rule.
        let trimmed = raw.trim();
        let (parsed, scheme_present) = match Url::parse(trimmed) {
            Ok(url) if url.has_host() => (Some(url), true),
            _ => match Url::parse(&format!("https://{trimmed}")) {
                Ok(url) if url.has_host() => (Some(url), false),
                _ => (None, false),
            },
        };

        match parsed {
            Some(url) => Self {
                raw,
                scheme: scheme_present.then(|| url.scheme().to_string()),
                host: url.host_str().map(str::to_lowercase),
                path_and_query: format!("{}?{}", url.path(), url.query().unwrap_or("")).to_lowercase(),
            },
            None => Self {
                raw,
                scheme: None,
                host: None,
                // Lexical-only degradation: keyword checks run on the whole string.
                path_and_query: raw.to_lowercase(),
            },
        }
    }

    fn host_is_ip(&self) -> bool {
        match &self.host {
            Some(host) => host.trim_matches(['[', ']']).parse::<IpAddr>().is_ok(),
            None => IPV4_LITERAL.is_match(self.raw),
        }
    }

    fn host_is_shortener(&self) -> bool {
        match &self.host {
            Some(host) => URL_SHORTENERS
                .iter()
                .any(|s| host == s || host.ends_with(&format!(".{s}"))),
            None => false,
        }
    }
}

// A single heuristic indicator: a fixed weight, a fixed description, and an
// independently evaluable predicate. Evaluation order is table order and
// `indicators` preserves it, never reordered by severity.
struct PhishingRule {
    weight: u8,
    indicator: &'static str,
    check: fn(&UrlContext<'_>) -> bool,
}

static PHISHING_RULES: &[PhishingRule] = &[
    PhishingRule {
        weight: 25,
        indicator: "Uses an IP address instead of a domain name",
        check: |ctx| ctx.host_is_ip(),
    },
    PhishingRule {
        weight: 20,
        indicator: "Contains an '@' character that can mask the real destination",
        check: |ctx| ctx.raw.contains('@'),
    },
    PhishingRule {
        weight: 10,
        indicator: "Excessive number of subdomains",
        check: |ctx| {
            !ctx.host_is_ip()
                && ctx
                    .host
                    .as_deref()
                    .is_some_and(|host| host.split('.').filter(|l| !l.is_empty()).count() > 3)
        },
    },
    PhishingRule {
        weight: 10,
        indicator: "Unusually many hyphens in the host name",
        check: |ctx| ctx.host.as_deref().is_some_and(|host| host.matches('-').count() >= 3),
    },
    PhishingRule {
        weight: 15,
        indicator: "Top-level domain is frequently abused for phishing",
        check: |ctx| {
            ctx.host.as_deref().is_some_and(|host| {
                host.rsplit('.')
                    .next()
                    .is_some_and(|tld| SUSPICIOUS_TLDS.contains(&tld))
            })
        },
    },
    PhishingRule {
        weight: 15,
        indicator: "Uses a URL shortener that hides the destination",
        check: |ctx| ctx.host_is_shortener(),
    },
    PhishingRule {
        weight: 15,
        indicator: "Connection is not protected by HTTPS",
        check: |ctx| ctx.scheme.as_deref() != Some("https"),
    },
    PhishingRule {
        weight: 10,
        indicator: "Credential-related keywords in the path or query",
        // Only meaningful on a non-canonical host: a shortener path is an
        // opaque token, already scored by the shortener rule.
        check: |ctx| {
            !ctx.host_is_shortener()
                && PHISHING_KEYWORDS.iter().any(|k| ctx.path_and_query.contains(k))
        },
    },
    PhishingRule {
        weight: 10,
        indicator: "Abnormally long URL",
        check: |ctx| ctx.raw.chars().count() > 100,
    },
    PhishingRule {
        weight: 10,
        indicator: "Heavy percent-encoding, often used for obfuscation",
        check: |ctx| ctx.raw.matches('%').count() >= 5,
    },
];

/// Scans a URL string for structural and lexical phishing indicators.
///
/// The input is treated as raw text first: strings that do not parse as a
/// URL never fail the call, they just skip the host-based rules. Each
/// triggered rule adds its fixed weight to the risk score (clamped to 100)
/// and one fixed description to `indicators`.
pub fn analyze_phishing_url(url: &str) -> PhishingResult {
    let context = UrlContext::new(url);
    debug!(host = ?context.host, scheme = ?context.scheme, "URL context built.");

    let mut risk_score: u32 = 0;
    let mut indicators = Vec::new();
    for rule in PHISHING_RULES {
        if (rule.check)(&context) {
            debug!(indicator = rule.indicator, weight = rule.weight, "Phishing rule triggered.");
            risk_score += u32::from(rule.weight);
            indicators.push(rule.indicator.to_string());
        }
    }

    let risk_score = risk_score.min(100) as u8;
    let risk_level = RiskLevel::band_phishing_score(risk_score);
    info!(risk_score, risk_level = %risk_level, indicators = indicators.len(), "Phishing analysis finished.");

    PhishingResult {
        url: url.to_string(),
        risk_score,
        risk_level,
        indicators,
        recommendations: URL_SAFETY_RECOMMENDATIONS
            .iter()
            .map(|r| r.to_string())
            .collect(),
    }
}
