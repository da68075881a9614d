//! User input parsing
//!
//! Turns text typed into number fields into values. Parsing is lenient in the
//! same way browser number fields are read: the longest numeric prefix wins and
//! trailing text is ignored. Text with no numeric prefix is absent, never zero.

use thiserror::Error;

/// Reasons a form submission is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{0} must not be zero")]
    Zero(&'static str),

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
}

/// Result type for form parsing
pub type InputResult<T> = Result<T, InputError>;

/// Parse the leading integer of a text field
///
/// Examples:
/// - "25" -> Some(25)
/// - " 25 years" -> Some(25)
/// - "25.9" -> Some(25)
/// - "-3" -> Some(-3)
/// - "abc" / "" -> None
///
/// Digit runs too long for an i64 saturate at the i64 bounds.
pub fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    let negative = bytes[0] == b'-';
    Some(trimmed[..end].parse().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

/// Parse the leading decimal number of a text field
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// optional exponent. Returns None when no mantissa digits are present.
pub fn parse_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts if at least one digit follows it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    // "5." is a valid prefix for humans but not for str::parse
    let number = trimmed[..end].trim_end_matches('.');
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a required integer field, rejecting absent and zero values
pub fn required_nonzero_int(field: &'static str, text: &str) -> InputResult<i64> {
    if text.trim().is_empty() {
        return Err(InputError::Missing(field));
    }
    match parse_int(text) {
        Some(0) => Err(InputError::Zero(field)),
        Some(value) => Ok(value),
        None => Err(InputError::NotANumber { field, value: text.to_string() }),
    }
}

/// Parse a required decimal field, rejecting absent and zero values
pub fn required_nonzero_float(field: &'static str, text: &str) -> InputResult<f64> {
    let value = required_float(field, text)?;
    if value == 0.0 {
        return Err(InputError::Zero(field));
    }
    Ok(value)
}

/// Parse a required decimal field; zero is accepted
pub fn required_float(field: &'static str, text: &str) -> InputResult<f64> {
    if text.trim().is_empty() {
        return Err(InputError::Missing(field));
    }
    parse_float(text).ok_or_else(|| InputError::NotANumber { field, value: text.to_string() })
}

/// Parse a required non-negative integer that fits in a u32
pub fn required_count(field: &'static str, text: &str) -> InputResult<u32> {
    if text.trim().is_empty() {
        return Err(InputError::Missing(field));
    }
    let value = parse_int(text)
        .ok_or_else(|| InputError::NotANumber { field, value: text.to_string() })?;
    u32::try_from(value).map_err(|_| InputError::OutOfRange { field, value })
}

/// Parse an optional non-negative integer, falling back to zero
pub fn count_or_zero(text: &str) -> u32 {
    parse_int(text)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

/// Parse an optional decimal; absent or unparseable text yields None
pub fn optional_float(text: &str) -> Option<f64> {
    parse_float(text)
}

/// Trim a free-text field; blank text yields None
pub fn optional_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
