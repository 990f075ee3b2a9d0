//! Error types for switcher-core.

use thiserror::Error;

/// Errors raised when a caller violates the ratio contract.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RatioError {
    /// Ratio outside [0.0, 1.0] (or NaN).
    #[error("ratio must be in range 0.0 ~ 1.0: {value}")]
    OutOfRange {
        /// The rejected value
        value: f64,
    },
}

/// Accept `value` if it lies in [0.0, 1.0].
///
/// # Errors
///
/// Returns [`RatioError::OutOfRange`] for values outside the range and NaN.
pub fn check_ratio(value: f64) -> Result<f64, RatioError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(RatioError::OutOfRange { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_ratio_accepts_closed_range() {
        assert_eq!(check_ratio(0.0), Ok(0.0));
        assert_eq!(check_ratio(0.5), Ok(0.5));
        assert_eq!(check_ratio(1.0), Ok(1.0));
    }

    #[test]
    fn test_check_ratio_rejects_outside() {
        assert_eq!(
            check_ratio(1.5),
            Err(RatioError::OutOfRange { value: 1.5 })
        );
        assert!(check_ratio(-0.0001).is_err());
        assert!(check_ratio(f64::NAN).is_err());
        assert!(check_ratio(f64::INFINITY).is_err());
    }

    #[test]
    fn test_ratio_error_display() {
        let err = RatioError::OutOfRange { value: 2.0 };
        assert_eq!(err.to_string(), "ratio must be in range 0.0 ~ 1.0: 2");
    }
}
