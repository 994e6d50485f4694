//! Parametric solution tuples.

use std::collections::BTreeSet;
use std::fmt;

use diophant_integers::Integer;

use crate::expr::{Assignment, LinearExpr};
use crate::symbol::Symbol;

/// One member of a solution family: an expression per variable.
///
/// Each assignment of integers to the free symbols yields one concrete
/// integer solution.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParametricSolution {
    components: Vec<LinearExpr>,
}

impl ParametricSolution {
    /// Creates a solution from its per-variable components.
    #[must_use]
    pub fn new(components: Vec<LinearExpr>) -> Self {
        Self { components }
    }

    /// The per-variable expressions.
    #[must_use]
    pub fn components(&self) -> &[LinearExpr] {
        &self.components
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the tuple has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The union of free symbols across all components, sorted by name.
    #[must_use]
    pub fn free_symbols(&self) -> Vec<Symbol> {
        self.components
            .iter()
            .flat_map(|c| c.free_symbols())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The concrete tuple when no free symbols remain.
    #[must_use]
    pub fn as_fixed(&self) -> Option<Vec<Integer>> {
        self.components
            .iter()
            .map(|c| c.as_integer().cloned())
            .collect()
    }

    /// Substitutes the assigned symbols in every component.
    #[must_use]
    pub fn subs(&self, assignment: &Assignment) -> Self {
        Self::new(self.components.iter().map(|c| c.subs(assignment)).collect())
    }

    /// Evaluates every component; `None` if any free symbol is unassigned.
    #[must_use]
    pub fn eval(&self, assignment: &Assignment) -> Option<Vec<Integer>> {
        self.components.iter().map(|c| c.eval(assignment)).collect()
    }
}

impl fmt::Display for ParametricSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{component}")?;
        }
        if self.components.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> Integer {
        Integer::new(v)
    }

    #[test]
    fn test_free_symbols_are_sorted_union() {
        let t0 = Symbol::new("t_0");
        let t1 = Symbol::new("t_1");
        let sol = ParametricSolution::new(vec![
            LinearExpr::from_terms(int(1), [(int(2), t1.clone())]),
            LinearExpr::from_terms(int(0), [(int(1), t0.clone()), (int(1), t1.clone())]),
            LinearExpr::constant(int(4)),
        ]);

        assert_eq!(sol.free_symbols(), vec![t0.clone(), t1.clone()]);
        assert_eq!(sol.as_fixed(), None);

        let mut assignment = Assignment::new();
        assignment.insert(t0, int(3));
        assignment.insert(t1, int(-1));
        assert_eq!(sol.eval(&assignment), Some(vec![int(-1), int(2), int(4)]));
        assert_eq!(sol.subs(&assignment).as_fixed(), Some(vec![int(-1), int(2), int(4)]));
    }

    #[test]
    fn test_fixed_solution() {
        let sol = ParametricSolution::new(vec![LinearExpr::constant(int(2))]);
        assert!(sol.free_symbols().is_empty());
        assert_eq!(sol.as_fixed(), Some(vec![int(2)]));
        assert_eq!(sol.to_string(), "(2,)");
    }

    #[test]
    fn test_display() {
        let t0 = Symbol::new("t_0");
        let sol = ParametricSolution::new(vec![
            LinearExpr::symbol(t0.clone()),
            LinearExpr::from_terms(int(5), [(int(-2), t0)]),
        ]);
        assert_eq!(sol.to_string(), "(t_0, -2*t_0 + 5)");
    }
}
