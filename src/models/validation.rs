use anyhow::{anyhow, Result};
use serde_json::Value;

use super::date::today;
use super::exercise::{CreateExerciseRequest, NewExercise};

/// Read a scalar body field as text. Numbers and booleans are written the way
/// a browser would print them (`42`, `1.5`, `true`); `null` counts as absent.
/// Arrays and objects have no text form and yield an error.
pub fn coerce_text(value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        Value::Number(number) => Ok(Some(match number.as_f64() {
            Some(f) if number.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
                format!("{:.0}", f)
            }
            _ => number.to_string(),
        })),
        Value::Array(_) | Value::Object(_) => Err(anyhow!("Expected a scalar, got {}", value)),
    }
}

/// Read an integer the way form fields are usually read: leading whitespace
/// and sign are accepted, digits are consumed up to the first non-digit, and
/// fractional numbers are truncated.
pub fn coerce_duration(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(text) => parse_leading_integer(text),
        _ => None,
    }
}

// `0x`/`0X` switches to hexadecimal. Digit runs that do not fit an i64 are
// rejected rather than rounded.
fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Interpret the `limit` query parameter. Zero, blank or non-numeric values
/// mean "no limit"; fractions are truncated and the sign is ignored.
pub fn parse_limit(raw: Option<&str>) -> Option<u64> {
    let limit = raw?.trim().parse::<f64>().ok()?;
    if !limit.is_finite() {
        return None;
    }

    match limit.trunc().abs() {
        l if l < 1.0 => None,
        l if l >= u64::MAX as f64 => Some(u64::MAX),
        l => Some(l as u64),
    }
}

/// Validate the body of an exercise creation request.
///
/// `description` must be present and non-empty and `duration` must yield an
/// integer. A missing or empty `date` becomes today's UTC date; any other
/// value is stored as submitted.
pub fn validate_exercise(request: CreateExerciseRequest) -> Result<NewExercise> {
    let description = optional_text(request.description.as_ref())?
        .filter(|d| !d.is_empty())
        .ok_or_else(|| anyhow!("Exercise description is required"))?;

    let duration = request
        .duration
        .as_ref()
        .ok_or_else(|| anyhow!("Exercise duration is required"))
        .and_then(|d| {
            coerce_duration(d).ok_or_else(|| anyhow!("Exercise duration must be a number, got {}", d))
        })?;

    let date = optional_text(request.date.as_ref())?
        .filter(|d| !d.is_empty())
        .unwrap_or_else(today);

    Ok(NewExercise {
        description,
        duration,
        date,
    })
}

fn optional_text(value: Option<&Value>) -> Result<Option<String>> {
    value.map_or(Ok(None), coerce_text)
}
