//! Set-notation rendering of solution lists.
//!
//! ```text
//! {(x, y, z):
//!  (0, 3, 8)
//!  (2, 3, 6)
//! }
//! ```
//!
//! An empty list renders as `{}`. One-element tuples keep a trailing comma,
//! `(a,)`, so they read as tuples rather than parenthesized values.

use std::fmt::{self, Display};

use diophant_integers::Integer;

/// Display adapter for a list of solution tuples.
#[derive(Clone, Copy, Debug)]
pub struct SetNotation<'a> {
    values: &'a [Vec<Integer>],
    keys: Option<&'a [String]>,
}

impl<'a> SetNotation<'a> {
    /// Renders `values` with the tuple of `keys` as header.
    #[must_use]
    pub fn new(values: &'a [Vec<Integer>], keys: &'a [String]) -> Self {
        Self {
            values,
            keys: Some(keys),
        }
    }

    /// Renders `values` without a header.
    #[must_use]
    pub fn unlabeled(values: &'a [Vec<Integer>]) -> Self {
        Self { values, keys: None }
    }
}

impl Display for SetNotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            return f.write_str("{}");
        }

        f.write_str("{")?;
        if let Some(keys) = self.keys.filter(|k| !k.is_empty()) {
            write_tuple(f, keys)?;
            f.write_str(":")?;
        }
        for value in self.values {
            f.write_str("\n ")?;
            write_tuple(f, value)?;
        }
        f.write_str("\n}")
    }
}

fn write_tuple<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    if items.len() == 1 {
        f.write_str(",")?;
    }
    f.write_str(")")
}
