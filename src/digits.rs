//! Sum of the squares of the decimal digits of an integer.
//!
//! Two strategies compute the same value:
//! - [`DigitSquareSum::by_arithmetic`] peels digits off with `% 10` and `/ 10`
//! - [`DigitSquareSum::by_textual`] renders the number as text and maps each character
//!
//! ```
//! use digit_square_bench::DigitSquareSum;
//!
//! let sums = DigitSquareSum::new();
//! // 25 -> 2^2 + 5^2 = 4 + 25
//! assert_eq!(sums.by_arithmetic(25).unwrap(), 29);
//! assert_eq!(sums.by_textual(25).unwrap(), 29);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Smallest input accepted while validation is enabled.
pub const MIN_N: u64 = 1;

/// Largest input accepted while validation is enabled (2^31 - 1).
pub const MAX_N: u64 = (1 << 31) - 1;

/// Strategy used to compute the digit-square-sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Modulo and integer division.
    Arithmetic,
    /// Decimal string conversion.
    Textual,
}

impl Method {
    /// Both methods, in the order they are benchmarked and plotted.
    pub const ALL: [Method; 2] = [Method::Arithmetic, Method::Textual];

    /// Label used in console rows and the chart legend.
    pub fn label(self) -> &'static str {
        match self {
            Method::Arithmetic => "Math",
            Method::Textual => "String",
        }
    }
}

/// Calculator for the digit-square-sum with an optional input range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitSquareSum {
    validate: bool,
}

impl Default for DigitSquareSum {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitSquareSum {
    /// Create a calculator that rejects inputs outside `[MIN_N, MAX_N]`.
    pub fn new() -> Self {
        Self { validate: true }
    }

    /// Create a calculator that accepts any `u64`.
    pub fn unchecked() -> Self {
        Self { validate: false }
    }

    /// Enable or disable the range check.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }

    /// Whether inputs are range checked.
    pub fn validates(&self) -> bool {
        self.validate
    }

    /// Check `n` against `[MIN_N, MAX_N]`.
    ///
    /// Always succeeds when validation is disabled.
    pub fn validate(&self, n: u64) -> Result<()> {
        if !self.validate || (MIN_N..=MAX_N).contains(&n) {
            return Ok(());
        }
        Err(Error::OutOfRange {
            n,
            min: MIN_N,
            max: MAX_N,
        })
    }

    /// Compute the sum by repeatedly taking the last digit and dividing by ten.
    pub fn by_arithmetic(&self, n: u64) -> Result<u64> {
        self.validate(n)?;

        let mut n = n;
        let mut result = 0;
        while n > 0 {
            let last = n % 10;
            result += last * last;
            n /= 10;
        }
        Ok(result)
    }

    /// Compute the sum by formatting `n` and squaring each digit character.
    pub fn by_textual(&self, n: u64) -> Result<u64> {
        self.validate(n)?;

        Ok(n.to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| u64::from(d * d))
            .sum())
    }

    /// Compute the sum with the given method.
    pub fn compute(&self, method: Method, n: u64) -> Result<u64> {
        match method {
            Method::Arithmetic => self.by_arithmetic(n),
            Method::Textual => self.by_textual(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let sums = DigitSquareSum::new();
        assert_eq!(sums.by_arithmetic(25).unwrap(), 29);
        assert_eq!(sums.by_arithmetic(1).unwrap(), 1);
        assert_eq!(sums.by_arithmetic(100).unwrap(), 1);
        assert_eq!(sums.by_textual(19).unwrap(), 82);
    }

    #[test]
    fn test_bounds_accepted() {
        let sums = DigitSquareSum::new();
        assert!(sums.validate(MIN_N).is_ok());
        assert!(sums.validate(MAX_N).is_ok());
        // 2147483647 -> 4+1+16+49+16+64+9+36+16+49
        assert_eq!(sums.by_arithmetic(MAX_N).unwrap(), 260);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let sums = DigitSquareSum::new();
        for n in [0, MAX_N + 1] {
            assert!(matches!(
                sums.by_arithmetic(n),
                Err(Error::OutOfRange { n: got, .. }) if got == n
            ));
            assert!(matches!(sums.by_textual(n), Err(Error::OutOfRange { .. })));
        }
    }

    #[test]
    fn test_unchecked_accepts_anything() {
        let sums = DigitSquareSum::unchecked();
        assert!(!sums.validates());
        assert_eq!(sums.by_arithmetic(0).unwrap(), 0);
        assert_eq!(sums.by_textual(0).unwrap(), 0);
        assert_eq!(sums.by_arithmetic(MAX_N + 1).unwrap(), sums.by_textual(MAX_N + 1).unwrap());
        assert_eq!(
            sums.by_arithmetic(u64::MAX).unwrap(),
            sums.by_textual(u64::MAX).unwrap()
        );
    }

    #[test]
    fn test_compute_dispatch() {
        let sums = DigitSquareSum::default();
        for method in Method::ALL {
            assert_eq!(sums.compute(method, 442).unwrap(), 36);
        }
    }
}
