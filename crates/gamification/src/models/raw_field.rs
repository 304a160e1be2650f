use serde::{Deserialize, Serialize};

/// A spreadsheet cell that should hold a number but may arrive as a JSON
/// integer, a float, or text.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawField {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawField {
    /// Leading-integer interpretation of the cell.
    ///
    /// Text is read up to the first non-digit after an optional sign, so
    /// `"12abc"` gives 12 and `"12.9"` gives 12. Floats truncate toward zero.
    /// Returns `None` when nothing integral can be read.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            Self::Float(_) => None,
            Self::Text(text) => parse_leading_integer(text),
        }
    }
}

impl From<i64> for RawField {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate rather than fail on absurdly long digit runs.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
