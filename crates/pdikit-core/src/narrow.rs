//! Narrowing rules
//!
//! Every operation that computes in a wider type has to store its result
//! back into an 8-bit sample. Two rules are in use and they are not
//! interchangeable: correlation and the gamma transform truncate (and so
//! wrap), bit-plane accumulation saturates. Callers comparing against
//! reference output depend on the exact rule of each operation.

/// How a wide intermediate value is stored into a `u8` sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Narrowing {
    /// Keep the low 8 bits (wraps modulo 256).
    ///
    /// Floating-point values are first truncated toward zero.
    Truncate,
    /// Clamp into `[0, 255]`.
    Saturate,
}

impl Narrowing {
    /// Narrow an integer intermediate.
    ///
    /// # Example
    ///
    /// ```
    /// use pdikit_core::Narrowing;
    ///
    /// assert_eq!(Narrowing::Truncate.narrow_int(300), 44);
    /// assert_eq!(Narrowing::Saturate.narrow_int(300), 255);
    /// assert_eq!(Narrowing::Truncate.narrow_int(-1), 255);
    /// assert_eq!(Narrowing::Saturate.narrow_int(-1), 0);
    /// ```
    #[inline]
    pub fn narrow_int(self, value: i64) -> u8 {
        match self {
            Narrowing::Truncate => value as u8,
            Narrowing::Saturate => value.clamp(0, 255) as u8,
        }
    }

    /// Narrow a floating-point intermediate.
    ///
    /// The fractional part is always discarded (truncation toward zero).
    /// NaN narrows to 0 under both rules.
    #[inline]
    pub fn narrow_float(self, value: f64) -> u8 {
        match self {
            // `as i64` saturates at the i64 range and maps NaN to 0
            Narrowing::Truncate => (value as i64) as u8,
            Narrowing::Saturate => value as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_wraps() {
        assert_eq!(Narrowing::Truncate.narrow_int(255), 255);
        assert_eq!(Narrowing::Truncate.narrow_int(256), 0);
        assert_eq!(Narrowing::Truncate.narrow_int(511), 255);
        assert_eq!(Narrowing::Truncate.narrow_int(-256), 0);
    }

    #[test]
    fn test_saturate_clamps() {
        assert_eq!(Narrowing::Saturate.narrow_int(0), 0);
        assert_eq!(Narrowing::Saturate.narrow_int(255), 255);
        assert_eq!(Narrowing::Saturate.narrow_int(i64::MAX), 255);
        assert_eq!(Narrowing::Saturate.narrow_int(i64::MIN), 0);
    }

    #[test]
    fn test_narrow_float_truncates_fraction() {
        assert_eq!(Narrowing::Truncate.narrow_float(12.99), 12);
        assert_eq!(Narrowing::Saturate.narrow_float(12.99), 12);
        assert_eq!(Narrowing::Truncate.narrow_float(256.5), 0);
        assert_eq!(Narrowing::Saturate.narrow_float(256.5), 255);
        // -1.5 truncates to -1, which wraps to 255
        assert_eq!(Narrowing::Truncate.narrow_float(-1.5), 255);
        assert_eq!(Narrowing::Saturate.narrow_float(-1.5), 0);
    }

    #[test]
    fn test_narrow_float_nan() {
        assert_eq!(Narrowing::Truncate.narrow_float(f64::NAN), 0);
        assert_eq!(Narrowing::Saturate.narrow_float(f64::NAN), 0);
    }
}
