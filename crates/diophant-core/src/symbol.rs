//! Parameter symbols.

use std::fmt;
use std::sync::Arc;

use hashbrown::HashSet;

/// A named integer-valued symbol.
///
/// Symbols compare and order by name, which fixes the enumeration order of
/// free parameters (`t_0 < t_1 < t_10 < t_2`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of symbols for one solve.
///
/// Every name is handed out at most once. Fresh parameters are named
/// `{prefix}_{k}` for `k = 0, 1, ...`, skipping names already taken, so a
/// variable called `t_0` never collides with a parameter.
#[derive(Debug)]
pub struct SymbolTable {
    prefix: String,
    next: usize,
    taken: HashSet<Arc<str>>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// Creates a table whose fresh parameters are `t_0, t_1, ...`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix("t")
    }

    /// Creates a table whose fresh parameters use `prefix`.
    #[must_use]
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            next: 0,
            taken: HashSet::new(),
        }
    }

    /// Marks `name` as taken and returns its symbol.
    ///
    /// Reserving the same name twice returns equal symbols.
    pub fn reserve(&mut self, name: &str) -> Symbol {
        if let Some(existing) = self.taken.get(name) {
            return Symbol(Arc::clone(existing));
        }
        let name: Arc<str> = Arc::from(name);
        self.taken.insert(Arc::clone(&name));
        Symbol(name)
    }

    /// Returns a parameter symbol that has not been handed out before.
    pub fn fresh(&mut self) -> Symbol {
        loop {
            let name = format!("{}_{}", self.prefix, self.next);
            self.next += 1;
            if !self.taken.contains(name.as_str()) {
                return self.reserve(&name);
            }
        }
    }

    /// Returns `count` fresh parameter symbols.
    pub fn fresh_many(&mut self, count: usize) -> Vec<Symbol> {
        (0..count).map(|_| self.fresh()).collect()
    }

    /// Number of names handed out so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    /// Returns true if no names have been handed out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_symbols() {
        let mut table = SymbolTable::new();
        let params = table.fresh_many(3);
        let names: Vec<&str> = params.iter().map(Symbol::name).collect();
        assert_eq!(names, ["t_0", "t_1", "t_2"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_fresh_skips_reserved() {
        let mut table = SymbolTable::new();
        let x = table.reserve("t_0");
        let again = table.reserve("t_0");
        assert_eq!(x, again);

        assert_eq!(table.fresh().name(), "t_1");
    }

    #[test]
    fn test_ordering_is_by_name() {
        let mut symbols = vec![Symbol::new("t_2"), Symbol::new("t_10"), Symbol::new("t_0")];
        symbols.sort();
        let names: Vec<&str> = symbols.iter().map(Symbol::name).collect();
        assert_eq!(names, ["t_0", "t_10", "t_2"]);
    }
}
