//! Node namespace resolution.
//!
//! Inputs, latches and AND-gates share one index space in an AIG. Instead of three separate
//! maps, [`NodeTable`] is a single map keyed by node index whose entries are tagged with the
//! owning namespace. Resolving a literal is then one lookup, and a second definition of an
//! occupied index is caught at insertion time.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use log::debug;

use crate::error::{Error, Result};
use crate::expr::{ExprId, ExprPool};
use crate::literal::Literal;

/// Which namespace owns a node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NodeKind {
    Input,
    Latch,
    And,
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Input => write!(f, "input"),
            NodeKind::Latch => write!(f, "latch"),
            NodeKind::And => write!(f, "AND-gate"),
        }
    }
}

/// A defined node: its namespace and its (already built) expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub expr: ExprId,
}

/// Where a literal is being resolved, for diagnostics.
///
/// Positions are 0-based offsets into the corresponding AIG table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Site {
    Input { position: usize },
    Latch { position: usize, index: u32 },
    AndGate { index: u32 },
    Output { position: usize },
    Bad { position: usize },
    Constraint { position: usize },
}

impl Display for Site {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Site::Input { position } => write!(f, "input #{}", position),
            Site::Latch { position, index } => write!(f, "latch #{} (node {})", position, index),
            Site::AndGate { index } => write!(f, "AND-gate {}", index),
            Site::Output { position } => write!(f, "output #{}", position),
            Site::Bad { position } => write!(f, "bad-state property #{}", position),
            Site::Constraint { position } => write!(f, "invariant constraint #{}", position),
        }
    }
}

/// Node index -> owning namespace and expression.
///
/// Only defined nodes take space, so a large declared `max_var` costs nothing.
#[derive(Debug, Clone)]
pub struct NodeTable {
    max_var: u32,
    nodes: HashMap<u32, Node>,
}

impl NodeTable {
    /// An empty table for node indices `1..=max_var`.
    pub fn new(max_var: u32) -> Self {
        Self {
            max_var,
            nodes: HashMap::new(),
        }
    }

    pub fn max_var(&self) -> u32 {
        self.max_var
    }

    pub fn get(&self, index: u32) -> Option<Node> {
        self.nodes.get(&index).copied()
    }

    /// Number of defined nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Defines node `index`.
    ///
    /// The caller must have checked `1 <= index <= max_var`.
    pub fn insert(&mut self, index: u32, kind: NodeKind, expr: ExprId) -> Result<()> {
        match self.nodes.entry(index) {
            Entry::Occupied(slot) => Err(Error::NamespaceCollision {
                index,
                existing: slot.get().kind,
                incoming: kind,
            }),
            Entry::Vacant(slot) => {
                debug!("insert(node = {}, kind = {}, expr = {})", index, kind, expr);
                slot.insert(Node { kind, expr });
                Ok(())
            }
        }
    }

    /// Looks up the node behind `literal`, ignoring its polarity.
    ///
    /// `site` only feeds the error message.
    pub fn resolve(&self, literal: Literal, site: Site) -> Result<Node> {
        self.get(literal.node())
            .ok_or(Error::DanglingReference { literal, site })
    }

    /// Turns `literal` into an expression: constants for 0/1, otherwise the owning node's
    /// expression, wrapped in `Not` for odd literals.
    pub fn resolve_literal(&self, pool: &mut ExprPool, literal: Literal, site: Site) -> Result<ExprId> {
        if literal == Literal::FALSE {
            return Ok(pool.constant(false));
        }
        if literal == Literal::TRUE {
            return Ok(pool.constant(true));
        }
        let node = self.resolve(literal, site)?;
        if literal.is_negated() {
            Ok(pool.not(node.expr))
        } else {
            Ok(node.expr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::types::Var;

    fn setup() -> (ExprPool, NodeTable) {
        let mut pool = ExprPool::new();
        let mut table = NodeTable::new(4);
        let i = pool.var(Var::new(1));
        let l = pool.var(Var::new(2));
        table.insert(1, NodeKind::Input, i).unwrap();
        table.insert(2, NodeKind::Latch, l).unwrap();
        let a = pool.and(i, l);
        table.insert(3, NodeKind::And, a).unwrap();
        (pool, table)
    }

    #[test]
    fn test_resolve_each_namespace() {
        let (_, table) = setup();
        let site = Site::Output { position: 0 };
        assert_eq!(table.resolve(Literal::new(2), site).unwrap().kind, NodeKind::Input);
        assert_eq!(table.resolve(Literal::new(5), site).unwrap().kind, NodeKind::Latch);
        assert_eq!(table.resolve(Literal::new(6), site).unwrap().kind, NodeKind::And);
        assert_eq!(table.len(), 3);
        assert_eq!(table.max_var(), 4);
    }

    #[test]
    fn test_sparse_indices() {
        let mut pool = ExprPool::new();
        let mut table = NodeTable::new(u32::MAX / 2);
        let x = pool.var(Var::new(7));
        table.insert(u32::MAX / 2, NodeKind::Input, x).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(u32::MAX / 2).map(|n| n.expr), Some(x));
        assert!(table.get(1).is_none());
    }

    #[test]
    fn test_exactly_one_owner_or_dangling() {
        let (_, table) = setup();
        for index in 1..=4u32 {
            let lit = Literal::positive(index);
            match table.resolve(lit, Site::Bad { position: 0 }) {
                Ok(node) => assert_eq!(table.get(index), Some(node)),
                Err(Error::DanglingReference { literal, .. }) => {
                    assert_eq!(index, 4);
                    assert_eq!(literal, lit);
                }
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
    }

    #[test]
    fn test_resolve_literal_polarity() {
        let (mut pool, table) = setup();
        let site = Site::AndGate { index: 4 };
        let pos = table.resolve_literal(&mut pool, Literal::new(2), site).unwrap();
        let neg = table.resolve_literal(&mut pool, Literal::new(3), site).unwrap();
        assert_eq!(pos, table.get(1).unwrap().expr);
        assert_eq!(pool.to_boxed(neg).to_string(), "!x1");
    }

    #[test]
    fn test_resolve_literal_constants() {
        let (mut pool, table) = setup();
        let site = Site::AndGate { index: 4 };
        let f = table.resolve_literal(&mut pool, Literal::FALSE, site).unwrap();
        let t = table.resolve_literal(&mut pool, Literal::TRUE, site).unwrap();
        assert_eq!(pool.to_boxed(f).to_string(), "false");
        assert_eq!(pool.to_boxed(t).to_string(), "true");
    }

    #[test]
    fn test_memoised_reference() {
        let (mut pool, table) = setup();
        let site = Site::Output { position: 0 };
        let a = table.resolve_literal(&mut pool, Literal::new(6), site).unwrap();
        let b = table.resolve_literal(&mut pool, Literal::new(6), site).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_dangling() {
        let (mut pool, table) = setup();
        let site = Site::AndGate { index: 4 };
        let err = table.resolve_literal(&mut pool, Literal::new(9), site).unwrap_err();
        match err {
            Error::DanglingReference { literal, site: s } => {
                assert_eq!(literal, Literal::new(9));
                assert_eq!(s, site);
            }
            e => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_collision() {
        let (mut pool, mut table) = setup();
        let x = pool.var(Var::new(3));
        let err = table.insert(3, NodeKind::Input, x).unwrap_err();
        match err {
            Error::NamespaceCollision {
                index,
                existing,
                incoming,
            } => {
                assert_eq!(index, 3);
                assert_eq!(existing, NodeKind::And);
                assert_eq!(incoming, NodeKind::Input);
            }
            e => panic!("unexpected error: {}", e),
        }
    }
}
