///! Variable identities shared by the expression builder and the transition system.
///!
///! A [`Var`] is what a downstream engine sees: inputs and current-state latches
///! are keyed by their AIG node index, next-state latches by `max_var + node`.
use std::fmt;

/// A boolean variable identifier (1-indexed).
///
/// # Invariants
///
/// - Variable IDs must be >= 1 (node index 0 is the constant)
/// - Within one transition system, input, current-state and next-state IDs never overlap
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id == 0`. Variables must be 1-indexed.
    pub fn new(id: u32) -> Self {
        assert_ne!(id, 0, "Variable IDs must be >= 1");
        Var(id)
    }

    /// Returns the raw variable ID as a `u32`.
    pub fn id(self) -> u32 {
        self.0
    }

    /// The next-state twin of the latch at `node`, for a graph whose largest node index is `max_var`.
    ///
    /// Returns `None` if `max_var + node` does not fit in a `u32`.
    pub fn next_state(max_var: u32, node: u32) -> Option<Self> {
        max_var.checked_add(node).filter(|&id| id != 0).map(Var)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> Self {
        var.0
    }
}
