//! Timestamp conversion for chapter boundaries.
//!
//! Chapter boundaries arrive as `H:MM:SS` strings. Two parsers exist:
//! [`time_to_seconds`] is lenient and never fails (malformed input becomes
//! `NaN` and flows into the marker arithmetic unchanged), while
//! [`parse_timestamp`] is strict and is only used to produce diagnostics.

/// Errors reported by the strict timestamp parser.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimestampError {
    #[error("expected 3 ':'-separated parts, found {found}")]
    WrongArity { found: usize },

    #[error("'{part}' is not a number")]
    NotANumber { part: String },

    #[error("'{part}' is negative")]
    Negative { part: String },
}

/// Convert an `H:MM:SS` / `HH:MM:SS` string to seconds.
///
/// Returns `hours * 3600 + minutes * 60 + seconds`. There is no validation:
/// any part that is not a number, or a string that does not split into exactly
/// three parts, yields `NaN`. Parts are trimmed, an empty part counts as zero
/// and fractional values are accepted.
///
/// # Examples
/// ```
/// use chapview::chapters::time_to_seconds;
///
/// assert_eq!(time_to_seconds("00:00:30"), 30.0);
/// assert_eq!(time_to_seconds("01:02:03"), 3723.0);
/// assert!(time_to_seconds("soon").is_nan());
/// ```
pub fn time_to_seconds(time: &str) -> f64 {
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() != 3 {
        return f64::NAN;
    }

    let hours = lenient_number(parts[0]);
    let minutes = lenient_number(parts[1]);
    let seconds = lenient_number(parts[2]);

    hours * 3600.0 + minutes * 60.0 + seconds
}

/// Lenient numeric conversion of a single timestamp part.
///
/// Accepts what a JavaScript `Number()` conversion accepts: decimal and
/// exponent forms, `0x`/`0o`/`0b` integer literals and `Infinity` with an
/// optional sign. Rust-only spellings like `inf` or `nan` are not numbers.
fn lenient_number(part: &str) -> f64 {
    let trimmed = part.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Prefixed literals take no sign
    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return u128::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    let numeric = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !numeric {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Strictly parse an `H:MM:SS` string to seconds.
///
/// Unlike [`time_to_seconds`], every part must be present and be a
/// non-negative number.
pub fn parse_timestamp(time: &str) -> Result<f64, TimestampError> {
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() != 3 {
        return Err(TimestampError::WrongArity { found: parts.len() });
    }

    let mut values = [0.0f64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        let trimmed = part.trim();
        let value = lenient_number(trimmed);
        if trimmed.is_empty() || !value.is_finite() {
            return Err(TimestampError::NotANumber {
                part: part.to_string(),
            });
        }
        if value < 0.0 {
            return Err(TimestampError::Negative {
                part: part.to_string(),
            });
        }
        *slot = value;
    }

    Ok(values[0] * 3600.0 + values[1] * 60.0 + values[2])
}

/// Format seconds as `H:MM:SS`, the way the analyzer writes chapter bounds.
///
/// Fractional seconds are truncated. Non-finite or negative input renders
/// as `--:--:--`.
pub fn format_timestamp(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "--:--:--".to_string();
    }
    let total = seconds as u64;
    format!(
        "{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Format seconds as a compact `MM:SS` clock for the progress display.
///
/// Minutes are not wrapped into hours. Unknown values render as `--:--`.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "--:--".to_string();
    }
    // Negative durations format as 0 due to the u64 cast
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}
