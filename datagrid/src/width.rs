//! Width values and the content-length width heuristic.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::data::{Header, Row};

/// Smallest width a column can be resized to, in pixels.
pub const MIN_COLUMN_WIDTH: u32 = 40;

/// Fixed width of the selection checkbox column.
pub const CHECKBOX_COLUMN_WIDTH: u32 = 48;

/// Lower bound of the heuristic width.
pub const AUTO_MIN_WIDTH: u32 = 80;

/// Upper bound of the heuristic width.
pub const AUTO_MAX_WIDTH: u32 = 400;

/// Pixels budgeted per character of content.
pub const PIXELS_PER_CHAR: u32 = 12;

/// A caller-supplied width: a pixel number or a CSS-like string (`"150px"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WidthValue {
    Pixels(f64),
    Text(String),
}

impl From<u32> for WidthValue {
    fn from(value: u32) -> Self {
        WidthValue::Pixels(value as f64)
    }
}

impl From<i32> for WidthValue {
    fn from(value: i32) -> Self {
        WidthValue::Pixels(value as f64)
    }
}

impl From<f64> for WidthValue {
    fn from(value: f64) -> Self {
        WidthValue::Pixels(value)
    }
}

impl From<&str> for WidthValue {
    fn from(value: &str) -> Self {
        WidthValue::Text(value.to_string())
    }
}

impl From<String> for WidthValue {
    fn from(value: String) -> Self {
        WidthValue::Text(value)
    }
}

/// Why a width value could not be turned into pixels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidthParseError {
    #[error("width is empty")]
    Empty,
    #[error("width '{0}' has no leading pixel count")]
    NotNumeric(String),
    #[error("width {0} is not a finite number")]
    NotFinite(String),
}

impl WidthValue {
    /// Resolve to whole pixels.
    ///
    /// `Ok(None)` means "unset" (zero or negative), which falls through to
    /// the next width source without a warning. Strings are read up to the
    /// first non-digit, so `"150px"`, `"150"` and `"150.5px"` all give 150.
    pub fn to_pixels(&self) -> Result<Option<u32>, WidthParseError> {
        match self {
            WidthValue::Pixels(px) => {
                if !px.is_finite() {
                    return Err(WidthParseError::NotFinite(px.to_string()));
                }
                let px = px.round();
                if px <= 0.0 {
                    Ok(None)
                } else {
                    Ok(Some(px.min(u32::MAX as f64) as u32))
                }
            }
            WidthValue::Text(text) => parse_leading_int(text),
        }
    }
}

fn parse_leading_int(text: &str) -> Result<Option<u32>, WidthParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(WidthParseError::Empty);
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(WidthParseError::NotNumeric(text.to_string()));
    }

    // Saturate overlong digit runs instead of failing.
    let value = digits[..end].parse::<u32>().unwrap_or(u32::MAX);
    if negative || value == 0 {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Content-based default width for a column.
///
/// Checkbox columns get `checkbox_width`. Everything else gets 12px per
/// character of the longest of the label and every cell, clamped to
/// `[80, 400]`.
pub fn heuristic_width(header: &Header, rows: &[Row], checkbox_width: u32) -> u32 {
    if header.is_checkbox() {
        return checkbox_width;
    }

    let longest = rows
        .iter()
        .map(|row| row.get(&header.key).display_len())
        .fold(header.label.chars().count(), usize::max);

    let raw = (longest as u64).saturating_mul(PIXELS_PER_CHAR as u64);
    raw.clamp(AUTO_MIN_WIDTH as u64, AUTO_MAX_WIDTH as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px_strings() {
        assert_eq!(WidthValue::from("150px").to_pixels(), Ok(Some(150)));
        assert_eq!(WidthValue::from(" 200 ").to_pixels(), Ok(Some(200)));
        assert_eq!(WidthValue::from("99.7px").to_pixels(), Ok(Some(99)));
        assert_eq!(WidthValue::from(120.6).to_pixels(), Ok(Some(121)));
    }

    #[test]
    fn test_zero_and_negative_are_unset() {
        assert_eq!(WidthValue::from(0).to_pixels(), Ok(None));
        assert_eq!(WidthValue::from("-20px").to_pixels(), Ok(None));
        assert_eq!(WidthValue::from("0px").to_pixels(), Ok(None));
    }

    #[test]
    fn test_unparsable_widths() {
        assert_eq!(
            WidthValue::from("auto").to_pixels(),
            Err(WidthParseError::NotNumeric("auto".into()))
        );
        assert_eq!(WidthValue::from("").to_pixels(), Err(WidthParseError::Empty));
        assert!(WidthValue::Pixels(f64::NAN).to_pixels().is_err());
    }

    #[test]
    fn test_heuristic_clamps() {
        let header = Header::new("name", "Nm");
        let short = vec![Row::new().field("name", "a")];
        assert_eq!(heuristic_width(&header, &short, 48), AUTO_MIN_WIDTH);

        let medium = vec![Row::new().field("name", "abcdefghij")];
        assert_eq!(heuristic_width(&header, &medium, 48), 120);

        let long = vec![Row::new().field("name", "x".repeat(100))];
        assert_eq!(heuristic_width(&header, &long, 48), AUTO_MAX_WIDTH);
    }

    #[test]
    fn test_heuristic_uses_label_and_checkbox() {
        let header = Header::new("n", "A rather long label");
        assert_eq!(heuristic_width(&header, &[], 48), 19 * 12);

        let checkbox = Header::checkbox("sel");
        assert_eq!(heuristic_width(&checkbox, &[], 48), 48);
    }
}
