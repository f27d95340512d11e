// src/core/analyzer/crack_time.rs

use tracing::debug;

use crate::core::knowledge_base::{is_special_character, SPECIAL_CHARSET_SIZE};
use crate::core::models::CrackEstimate;

/// Fixed attacker model: a modern GPU rig testing ten billion password
/// hashes per second. A stated assumption, not a measurement.
pub const GUESSES_PER_SECOND: f64 = 10_000_000_000.0;

const SECONDS_PER_YEAR: f64 = 31_557_600.0;

/// Determines the brute-force search-space base from the character classes
/// present in the password: 26 for lowercase, 26 for uppercase, 10 for
/// digits, 32 for the special-character set. Inputs with no recognized
/// class (empty or unicode-only) fall back to 26 so the base is never zero.
pub(crate) fn charset_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if password.chars().any(is_special_character) {
        size += SPECIAL_CHARSET_SIZE;
    }
    if size == 0 { 26 } else { size }
}

/// Estimates how long a brute-force search over the password's character
/// classes would take at [`GUESSES_PER_SECOND`].
///
/// All magnitude math runs in log10 space, so no input length can overflow
/// or produce an infinity: `log10(combinations) = length * log10(charset)`.
/// An empty password yields one combination and an "Instantly" label.
pub fn estimate_crack_time(password: &str) -> CrackEstimate {
    let charset_size = charset_size(password);
    let length = password.chars().count();
    let log10_combinations = length as f64 * (charset_size as f64).log10();
    let log10_seconds = log10_combinations - GUESSES_PER_SECOND.log10();

    let estimate = CrackEstimate {
        charset_size,
        combinations: saturating_pow10(log10_combinations),
        combinations_display: format_exponential(log10_combinations),
        crack_time_label: format_duration(log10_seconds),
    };
    debug!(
        length,
        charset_size,
        label = %estimate.crack_time_label,
        "Crack time estimated."
    );
    estimate
}

/// 10^x as an f64, saturating at f64::MAX instead of overflowing to
/// infinity once the exponent leaves the representable range.
fn saturating_pow10(log10_value: f64) -> f64 {
    if log10_value > f64::MAX_10_EXP as f64 {
        f64::MAX
    } else {
        10f64.powf(log10_value)
    }
}

/// Renders 10^x in exponential notation ("9.54e+12") from the logarithm
/// alone, so the rendering stays well-formed at any magnitude.
fn format_exponential(log10_value: f64) -> String {
    let mut exponent = log10_value.floor();
    let mut mantissa = 10f64.powf(log10_value - exponent);
    // Rounding to two decimals can push the mantissa to 10.00; renormalize.
    if mantissa >= 9.995 {
        mantissa /= 10.0;
        exponent += 1.0;
    }
    format!("{mantissa:.2}e+{exponent:.0}")
}

fn plural(value: f64, unit: &str) -> String {
    let rounded = value.round();
    if rounded == 1.0 {
        format!("1 {unit}")
    } else {
        format!("{rounded:.0} {unit}s")
    }
}

/// Escalates 10^x seconds into a human-readable duration label. Small
/// magnitudes get exact units (seconds through years); astronomical ones
/// collapse into order-of-magnitude buckets.
fn format_duration(log10_seconds: f64) -> String {
    if log10_seconds < 0.0 {
        return "Instantly".to_string();
    }
    // Up to 10^9 seconds (~31 years) the value fits comfortably in an f64,
    // so the exact unit ladder applies.
    if log10_seconds < 9.0 {
        let seconds = 10f64.powf(log10_seconds);
        return if seconds < 60.0 {
            plural(seconds, "second")
        } else if seconds < 3_600.0 {
            plural(seconds / 60.0, "minute")
        } else if seconds < 86_400.0 {
            plural(seconds / 3_600.0, "hour")
        } else if seconds < SECONDS_PER_YEAR {
            plural(seconds / 86_400.0, "day")
        } else {
            plural(seconds / SECONDS_PER_YEAR, "year")
        };
    }
    let log10_years = log10_seconds - SECONDS_PER_YEAR.log10();
    if log10_years < 3.0 {
        plural(10f64.powf(log10_years), "year")
    } else if log10_years < 6.0 {
        "Thousands of years".to_string()
    } else if log10_years < 9.0 {
        "Millions of years".to_string()
    } else if log10_years < 12.0 {
        "Billions of years".to_string()
    } else {
        "Longer than the age of the universe".to_string()
    }
}
