// Request parameter parsing shared by the resource handlers

use axum::extract::{rejection::PathRejection, Path};
use serde::Deserialize;

use crate::api::errors::ApiError;

/// Page size used when `limit` is absent
pub const DEFAULT_LIMIT: i64 = 10;

/// Largest accepted `limit`
pub const MAX_LIMIT: i64 = 100;

/// 2^63, the first value past `i64::MAX`
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Query string of the list endpoints
///
/// Values are kept as strings so that a non-numeric value is reported as a
/// plain 400 by [`parse_limit`] and [`parse_category`].
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub category: Option<String>,
}

/// Reads a numeric literal the way JavaScript's `Number()` does
///
/// Accepts surrounding whitespace, decimal and exponent notation, a signed
/// `Infinity`, and unsigned `0x`/`0o`/`0b` integers. Blank input is zero.
/// Returns `None` for anything `Number()` would turn into `NaN`.
fn number_literal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        });
    }

    let unsigned = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return Some(if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    // Keeps out the spellings Rust accepts but Number() does not ("inf", "NaN")
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

/// Returns the value as an `i64` if it is a whole number in range
fn integral(value: f64) -> Option<i64> {
    if value.fract() == 0.0 && value >= -I64_BOUND && value < I64_BOUND {
        Some(value as i64)
    } else {
        None
    }
}

fn parse_number(raw: &str, what: &str) -> Result<f64, ApiError> {
    number_literal(raw)
        .ok_or_else(|| ApiError::invalid_request(format!("{} is not a number: {:?}", what, raw)))
}

/// Treats an empty value the same as an absent one
fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}

/// Parses an `:id` path segment
///
/// `Ok(None)` means the segment is a number no row can have, such as `1.5`.
pub fn parse_id(raw: &str) -> Result<Option<i64>, ApiError> {
    parse_number(raw, "id").map(integral)
}

/// Extracts and parses the `:id` path segment
///
/// A segment axum cannot decode is a 400 like any other malformed id.
pub fn path_id(path: Result<Path<String>, PathRejection>) -> Result<Option<i64>, ApiError> {
    let Path(raw) = path.map_err(|e| ApiError::invalid_request(e.body_text()))?;
    parse_id(&raw)
}

/// Parses the `limit` query value
///
/// Defaults to [`DEFAULT_LIMIT`] and rejects values above [`MAX_LIMIT`].
/// Fractions are truncated toward zero. There is no lower bound; zero and
/// negative values reach the repository unchanged.
pub fn parse_limit(raw: Option<&str>) -> Result<i64, ApiError> {
    let limit = match non_empty(raw) {
        Some(raw) => parse_number(raw, "limit")?,
        None => return Ok(DEFAULT_LIMIT),
    };

    if limit > MAX_LIMIT as f64 {
        return Err(ApiError::invalid_request(format!(
            "limit {} exceeds {}",
            limit, MAX_LIMIT
        )));
    }

    // Saturates, so -Infinity becomes a negative limit
    Ok(limit.trunc() as i64)
}

/// Parses the `category` query value, defaulting to 0
///
/// `Ok(None)` means a number no category id can equal, such as `1.5`.
pub fn parse_category(raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    match non_empty(raw) {
        Some(raw) => parse_number(raw, "category").map(integral),
        None => Ok(Some(0)),
    }
}
