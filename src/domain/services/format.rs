//! Leaf value formatting
//!
//! Numbers get digit grouping, date-time strings are shown in local time,
//! everything else prints as its literal text.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde_json::{Number, Value};

use crate::domain::value_objects::ValueClass;

const MAX_FRACTION_DIGITS: usize = 3;
const DISPLAY_DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Display text of a leaf plus its styling class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedValue {
    pub text: String,
    pub class: ValueClass,
}

/// Format a leaf in the local time zone
pub fn format_leaf(value: &Value) -> FormattedValue {
    format_leaf_in(value, &Local)
}

/// Format a leaf, rendering date-times in `tz`
pub fn format_leaf_in<Tz>(value: &Value, tz: &Tz) -> FormattedValue
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let text = match value {
        Value::Number(n) => group_number(n),
        Value::String(s) => format_date_time(s, tz).unwrap_or_else(|| s.clone()),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    };
    FormattedValue {
        text,
        class: ValueClass::of(value),
    }
}

/// `1234567.8912` -> `1,234,567.891`
pub fn group_number(n: &Number) -> String {
    let plain = if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        match n.as_f64() {
            Some(f) if f.is_finite() => trim_fraction(format!("{:.*}", MAX_FRACTION_DIGITS, f)),
            _ => return n.to_string(),
        }
    };

    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, fraction) = match unsigned.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3);
    out.push_str(sign);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn trim_fraction(mut text: String) -> String {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Whether `s` contains a `YYYY-MM-DDTHH:MM` run anywhere
pub fn looks_like_date_time(s: &str) -> bool {
    const SHAPE: &[u8] = b"dddd-dd-ddTdd:dd";
    let bytes = s.as_bytes();
    bytes.windows(SHAPE.len()).any(|window| {
        window.iter().zip(SHAPE).all(|(&b, &expected)| match expected {
            b'd' => b.is_ascii_digit(),
            other => b == other,
        })
    })
}

fn format_date_time<Tz>(s: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if !looks_like_date_time(s) {
        return None;
    }
    let trimmed = s.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(tz).format(DISPLAY_DATE_TIME).to_string());
    }

    // No offset: the wall-clock time is already local
    NAIVE_FORMATS.iter().find_map(|format| {
        let naive = NaiveDateTime::parse_from_str(trimmed, format).ok()?;
        let local = tz.from_local_datetime(&naive).earliest()?;
        Some(local.format(DISPLAY_DATE_TIME).to_string())
    })
}
