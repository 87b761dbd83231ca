//! Height module - exact feet/inches arithmetic for attachment heights
//!
//! Field crews write heights as `feet-inches` tokens (`20-6`). Records carry
//! them as `feet'-inches"` strings (`20'-6"`). All arithmetic happens on a
//! total-inch integer so that raise/lower math never drifts.

use std::fmt;
use thiserror::Error;

/// Inches per foot
pub const INCHES_PER_FOOT: i32 = 12;

/// Errors produced while reading a height token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeightError {
    /// Token is not `feet-inches` with integer parts and inches in [0, 11]
    #[error("Malformed height '{token}': {reason}")]
    Malformed {
        /// The offending token
        token: String,
        /// What was wrong with it
        reason: String,
    },
}

impl HeightError {
    /// Create a malformed-height error for `token`
    pub fn malformed(token: &str, reason: impl Into<String>) -> Self {
        HeightError::Malformed {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// A height expressed as a total number of inches
///
/// May be negative when a lower operation exceeds the existing height.
///
/// # Examples
///
/// ```
/// use makeready_domain::HeightValue;
///
/// let height = HeightValue::decode("20-6").unwrap();
/// assert_eq!(height.inches(), 246);
/// assert_eq!(height.raise(18).encode(), "22'-0\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeightValue(i32);

impl HeightValue {
    /// Create a height from a total-inch value
    pub fn from_inches(inches: i32) -> Self {
        Self(inches)
    }

    /// Total inches
    pub fn inches(&self) -> i32 {
        self.0
    }

    /// Parse a `feet-inches` token
    ///
    /// # Errors
    /// Returns [`HeightError::Malformed`] unless the token splits on `-` into
    /// exactly two integers with `feet >= 0` and `0 <= inches < 12`.
    pub fn decode(token: &str) -> Result<Self, HeightError> {
        let parts: Vec<&str> = token.split('-').collect();
        if parts.len() != 2 {
            return Err(HeightError::malformed(token, "expected format 'feet-inches'"));
        }

        let feet: i32 = parts[0]
            .parse()
            .map_err(|_| HeightError::malformed(token, "feet is not an integer"))?;
        let inches: i32 = parts[1]
            .parse()
            .map_err(|_| HeightError::malformed(token, "inches is not an integer"))?;

        if !(0..INCHES_PER_FOOT).contains(&inches) {
            return Err(HeightError::malformed(token, "inches must be between 0 and 11"));
        }
        if feet < 0 {
            return Err(HeightError::malformed(token, "feet cannot be negative"));
        }

        feet.checked_mul(INCHES_PER_FOOT)
            .and_then(|total| total.checked_add(inches))
            .map(Self)
            .ok_or_else(|| HeightError::malformed(token, "height is out of range"))
    }

    /// Format as `feet'-inches"`
    ///
    /// Both components truncate toward zero, so a negative total keeps its
    /// sign on the inch component (`-6` formats as `0'--6"`).
    pub fn encode(&self) -> String {
        let feet = self.0 / INCHES_PER_FOOT;
        let inches = self.0 % INCHES_PER_FOOT;
        format!("{}'-{}\"", feet, inches)
    }

    /// Height raised by `inches`
    pub fn raise(&self, inches: i32) -> Self {
        Self(self.0.saturating_add(inches))
    }

    /// Height lowered by `inches`
    pub fn lower(&self, inches: i32) -> Self {
        Self(self.0.saturating_sub(inches))
    }
}

impl fmt::Display for HeightValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Reformat a raw `feet-inches` token as `feet'-inches"` without validating it
///
/// Splits on the first `-` only; the right-hand side is kept verbatim.
///
/// # Errors
/// Returns [`HeightError::Malformed`] if the token has no `-`.
pub fn format_raw(token: &str) -> Result<String, HeightError> {
    let (feet, inches) = token
        .split_once('-')
        .ok_or_else(|| HeightError::malformed(token, "expected format 'feet-inches'"))?;
    Ok(format!("{}'-{}\"", feet, inches))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid() {
        assert_eq!(HeightValue::decode("20-6").unwrap().inches(), 246);
        assert_eq!(HeightValue::decode("0-0").unwrap().inches(), 0);
        assert_eq!(HeightValue::decode("22-11").unwrap().inches(), 275);
    }

    #[test]
    fn test_decode_inches_out_of_range() {
        assert!(matches!(
            HeightValue::decode("5-13"),
            Err(HeightError::Malformed { .. })
        ));
        assert!(HeightValue::decode("5-12").is_err());
    }

    #[test]
    fn test_decode_non_numeric() {
        assert!(HeightValue::decode("abc-1").is_err());
        assert!(HeightValue::decode("20-x").is_err());
        assert!(HeightValue::decode("").is_err());
    }

    #[test]
    fn test_decode_wrong_shape() {
        assert!(HeightValue::decode("20").is_err());
        assert!(HeightValue::decode("20-6-1").is_err());
        // A leading minus produces three parts
        assert!(HeightValue::decode("-1-6").is_err());
    }

    #[test]
    fn test_raise_and_lower() {
        let existing = HeightValue::decode("20-6").unwrap();
        assert_eq!(existing.raise(18).encode(), "22'-0\"");

        let existing = HeightValue::decode("22-0").unwrap();
        assert_eq!(existing.lower(6).encode(), "21'-6\"");
    }

    #[test]
    fn test_encode_negative_truncates_toward_zero() {
        assert_eq!(HeightValue::from_inches(-6).encode(), "0'--6\"");
        assert_eq!(HeightValue::from_inches(-18).encode(), "-1'--6\"");
    }

    #[test]
    fn test_encode_eleven_inches_is_exact() {
        // 263 / 12 has no exact binary fraction
        assert_eq!(HeightValue::from_inches(263).encode(), "21'-11\"");
    }

    #[test]
    fn test_format_raw() {
        assert_eq!(format_raw("20-6").unwrap(), "20'-6\"");
        assert_eq!(format_raw("20-06").unwrap(), "20'-06\"");
        assert_eq!(format_raw("20-6-1").unwrap(), "20'-6-1\"");
        assert!(format_raw("206").is_err());
    }
}
