//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` with
//! the operations needed for solving linear Diophantine equations.

use dashu::base::{Abs, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// An arbitrary precision integer.
///
/// Division (`/`) and remainder (`%`) truncate toward zero, matching the
/// primitive integer types. Use [`Integer::floor_div`] when rounding
/// toward negative infinity is needed.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Creates an integer from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Computes the (nonnegative) greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns `(g, s, t)` with `g = s*self + t*other` and `g >= 0`.
    /// `extended_gcd(0, 0)` is `(0, 1, 0)`.
    #[must_use]
    pub fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let mut old_r = self.clone();
        let mut r = other.clone();
        let mut old_s = Self::one();
        let mut s = Self::zero();
        let mut old_t = Self::zero();
        let mut t = Self::one();

        while !r.is_zero() {
            let q = &old_r / &r;

            let new_r = &old_r - &(&q * &r);
            old_r = std::mem::replace(&mut r, new_r);

            let new_s = &old_s - &(&q * &s);
            old_s = std::mem::replace(&mut s, new_s);

            let new_t = &old_t - &(&q * &t);
            old_t = std::mem::replace(&mut t, new_t);
        }

        if old_r.is_negative() {
            (-old_r, -old_s, -old_t)
        } else {
            (old_r, old_s, old_t)
        }
    }

    /// Division rounding toward negative infinity.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn floor_div(&self, other: &Self) -> Self {
        let q = self / other;
        let r = self - &(&q * other);
        if !r.is_zero() && (r.is_negative() != other.is_negative()) {
            q - Self::one()
        } else {
            q
        }
    }

    /// Returns `self / other` if `other` divides `self`, `None` otherwise.
    ///
    /// Division by zero yields `None`.
    #[must_use]
    pub fn div_exact(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        let q = self / other;
        if (&q * other) == *self {
            Some(q)
        } else {
            None
        }
    }

    /// Returns true if `other` divides `self`.
    #[must_use]
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        self.div_exact(other).is_some()
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp as usize))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Div for Integer {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div for &Integer {
    type Output = Integer;

    fn div(self, rhs: Self) -> Self::Output {
        Integer(&self.0 / &rhs.0)
    }
}

impl Rem for Integer {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        Self(self.0 % rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}
