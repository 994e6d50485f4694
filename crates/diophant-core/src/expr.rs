//! Affine integer expressions.
//!
//! A [`LinearExpr`] is `c + k_1*s_1 + ... + k_m*s_m` with integer `c`, `k_i`
//! and distinct symbols `s_i`. This is exactly the shape of every component
//! of a parametric solution of a linear Diophantine equation.

use std::fmt;
use std::ops::{Add, Mul, Neg};

use hashbrown::HashMap;
use num_traits::{One, Zero};
use smallvec::SmallVec;

use diophant_integers::Integer;

use crate::symbol::Symbol;

/// Values for some symbols, used by [`LinearExpr::subs`].
pub type Assignment = HashMap<Symbol, Integer>;

/// An affine expression with integer coefficients.
///
/// Invariant: `terms` is sorted by symbol, has no duplicate symbols and no
/// zero coefficients.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct LinearExpr {
    constant: Integer,
    terms: SmallVec<[(Symbol, Integer); 4]>,
}

impl LinearExpr {
    /// The constant expression `value`.
    #[must_use]
    pub fn constant(value: Integer) -> Self {
        Self {
            constant: value,
            terms: SmallVec::new(),
        }
    }

    /// The expression `symbol`.
    #[must_use]
    pub fn symbol(symbol: Symbol) -> Self {
        Self::term(Integer::one(), symbol)
    }

    /// The expression `coeff * symbol`.
    #[must_use]
    pub fn term(coeff: Integer, symbol: Symbol) -> Self {
        let mut terms = SmallVec::new();
        if !coeff.is_zero() {
            terms.push((symbol, coeff));
        }
        Self {
            constant: Integer::zero(),
            terms,
        }
    }

    /// Builds `constant + Σ coeff * symbol`, merging repeated symbols.
    #[must_use]
    pub fn from_terms(
        constant: Integer,
        terms: impl IntoIterator<Item = (Integer, Symbol)>,
    ) -> Self {
        terms
            .into_iter()
            .fold(Self::constant(constant), |acc, (coeff, symbol)| {
                acc + Self::term(coeff, symbol)
            })
    }

    /// The constant part.
    #[must_use]
    pub fn constant_term(&self) -> &Integer {
        &self.constant
    }

    /// Coefficient of `symbol` (zero if absent).
    #[must_use]
    pub fn coefficient(&self, symbol: &Symbol) -> Integer {
        self.terms
            .binary_search_by(|(s, _)| s.cmp(symbol))
            .map_or_else(|_| Integer::zero(), |i| self.terms[i].1.clone())
    }

    /// Returns true if no symbol appears.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    /// The value of a constant expression.
    #[must_use]
    pub fn as_integer(&self) -> Option<&Integer> {
        if self.is_constant() {
            Some(&self.constant)
        } else {
            None
        }
    }

    /// Symbols with a nonzero coefficient, in ascending order.
    pub fn free_symbols(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.terms.iter().map(|(s, _)| s)
    }

    /// Multiplies every coefficient and the constant by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &Integer) -> Self {
        if factor.is_zero() {
            return Self::default();
        }
        Self {
            constant: &self.constant * factor,
            terms: self
                .terms
                .iter()
                .map(|(s, k)| (s.clone(), k * factor))
                .collect(),
        }
    }

    /// Substitutes the assigned symbols; unassigned symbols stay free.
    #[must_use]
    pub fn subs(&self, assignment: &Assignment) -> Self {
        let mut constant = self.constant.clone();
        let mut terms = SmallVec::new();
        for (symbol, coeff) in &self.terms {
            match assignment.get(symbol) {
                Some(value) => constant = constant + coeff * value,
                None => terms.push((symbol.clone(), coeff.clone())),
            }
        }
        Self { constant, terms }
    }

    /// Evaluates the expression; `None` if a free symbol is unassigned.
    #[must_use]
    pub fn eval(&self, assignment: &Assignment) -> Option<Integer> {
        self.terms
            .iter()
            .try_fold(self.constant.clone(), |acc, (symbol, coeff)| {
                assignment.get(symbol).map(|value| acc + coeff * value)
            })
    }
}

impl Add for LinearExpr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let constant = self.constant + rhs.constant;
        let mut terms: SmallVec<[(Symbol, Integer); 4]> =
            SmallVec::with_capacity(self.terms.len() + rhs.terms.len());

        let mut left = self.terms.into_iter().peekable();
        let mut right = rhs.terms.into_iter().peekable();
        loop {
            let next = match (left.peek(), right.peek()) {
                (Some((a, _)), Some((b, _))) => match a.cmp(b) {
                    std::cmp::Ordering::Less => left.next(),
                    std::cmp::Ordering::Greater => right.next(),
                    std::cmp::Ordering::Equal => match (left.next(), right.next()) {
                        (Some((symbol, x)), Some((_, y))) => Some((symbol, x + y)),
                        _ => None,
                    },
                },
                (Some(_), None) => left.next(),
                (None, Some(_)) => right.next(),
                (None, None) => break,
            };
            if let Some((symbol, coeff)) = next {
                if !coeff.is_zero() {
                    terms.push((symbol, coeff));
                }
            }
        }

        Self { constant, terms }
    }
}

impl Mul<&Integer> for &LinearExpr {
    type Output = LinearExpr;

    fn mul(self, rhs: &Integer) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for LinearExpr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(&Integer::new(-1))
    }
}

impl From<Integer> for LinearExpr {
    fn from(value: Integer) -> Self {
        Self::constant(value)
    }
}

impl fmt::Debug for LinearExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearExpr({self})")
    }
}

/// Renders `-8*t_0 - 27*t_1 + 288`: symbol terms first, constant last,
/// unit coefficients elided.
impl fmt::Display for LinearExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "{}", self.constant);
        }

        for (i, (symbol, coeff)) in self.terms.iter().enumerate() {
            let magnitude = coeff.abs();
            match (i == 0, coeff.is_negative()) {
                (true, true) => f.write_str("-")?,
                (true, false) => {}
                (false, true) => f.write_str(" - ")?,
                (false, false) => f.write_str(" + ")?,
            }
            if magnitude.is_one() {
                write!(f, "{symbol}")?;
            } else {
                write!(f, "{magnitude}*{symbol}")?;
            }
        }

        if !self.constant.is_zero() {
            let sign = if self.constant.is_negative() { '-' } else { '+' };
            write!(f, " {sign} {}", self.constant.abs())?;
        }
        Ok(())
    }
}
