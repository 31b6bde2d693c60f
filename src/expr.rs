//! Shared boolean expressions.
//!
//! All expressions of one translation live in a single [`ExprPool`] and are addressed by
//! lightweight [`ExprId`] handles. Referring to the same node twice means copying its handle,
//! so the pool holds a DAG rather than a tree.
//!
//! The pool is **topologically sorted by construction**: an expression can only mention handles
//! that already exist, so every child has a smaller id than its parent. Evaluation and lowering
//! are therefore single forward sweeps with no recursion.
//!
//! Construction is purely structural. Constants and variables are memoised, everything else
//! is appended as-is: `not(not(x))` is two fresh nodes, and two `and(a, b)` calls yield two
//! distinct ids.
//!
//! ```
//! use aig_transys::expr::ExprPool;
//! use aig_transys::types::Var;
//!
//! let mut pool = ExprPool::new();
//! let x = pool.var(Var::new(1));
//! let y = pool.var(Var::new(2));
//! let not_y = pool.not(y);
//! let f = pool.and(x, not_y);
//!
//! assert_eq!(pool.var(Var::new(1)), x);
//! assert!(pool.eval(f, |v| v.id() == 1));
//! assert_eq!(pool.to_boxed(f).to_string(), "(x1 & !x2)");
//! ```

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use log::debug;

use crate::ast::ExprBoxed;
use crate::types::Var;

/// Handle of an expression inside an [`ExprPool`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ExprId(u32);

impl ExprId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for ExprId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// One expression node; children are of type `I` (handles, by default).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Expr<I = ExprId> {
    Const(bool),
    Var(Var),
    Not(I),
    And(I, I),
    Or(I, I),
    Iff(I, I),
}

impl<A> Expr<A> {
    #[inline(always)]
    pub fn fmap<B, F>(self, mut f: F) -> Expr<B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Expr::Const(b) => Expr::Const(b),
            Expr::Var(v) => Expr::Var(v),
            Expr::Not(a) => Expr::Not(f(a)),
            Expr::And(a, b) => Expr::And(f(a), f(b)),
            Expr::Or(a, b) => Expr::Or(f(a), f(b)),
            Expr::Iff(a, b) => Expr::Iff(f(a), f(b)),
        }
    }

    #[inline(always)]
    pub fn for_each_child<F>(&self, mut f: F)
    where
        F: FnMut(&A),
    {
        match self {
            Expr::Const(_) | Expr::Var(_) => {}
            Expr::Not(a) => f(a),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Iff(a, b) => {
                f(a);
                f(b);
            }
        }
    }
}

/// Arena of expressions built during one translation.
#[derive(Debug, Default, Clone)]
pub struct ExprPool {
    /// Topology sorted expressions, by construction.
    exprs: Vec<Expr>,
    constants: [Option<ExprId>; 2],
    vars: HashMap<Var, ExprId>,
}

impl ExprPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn get(&self, id: ExprId) -> Expr {
        self.exprs[id.index()]
    }

    /// All expressions with their ids, in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (ExprId, Expr)> + '_ {
        self.exprs
            .iter()
            .enumerate()
            .map(|(i, &e)| (ExprId(i as u32), e))
    }

    /// Number of distinct variables created so far.
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    fn push(&mut self, expr: Expr) -> ExprId {
        let id = ExprId(self.exprs.len() as u32);
        debug!("push({} = {:?})", id, expr);
        self.exprs.push(expr);
        id
    }
}

// Constructors
impl ExprPool {
    /// The constant `value`; each constant is allocated at most once.
    pub fn constant(&mut self, value: bool) -> ExprId {
        if let Some(id) = self.constants[value as usize] {
            return id;
        }
        let id = self.push(Expr::Const(value));
        self.constants[value as usize] = Some(id);
        id
    }

    /// The variable `var`, created on first request and returned as-is afterwards.
    pub fn var(&mut self, var: Var) -> ExprId {
        if let Some(&id) = self.vars.get(&var) {
            return id;
        }
        let id = self.push(Expr::Var(var));
        self.vars.insert(var, id);
        id
    }

    /// Looks a variable up without creating it.
    pub fn find_var(&self, var: Var) -> Option<ExprId> {
        self.vars.get(&var).copied()
    }

    pub fn not(&mut self, a: ExprId) -> ExprId {
        self.push(Expr::Not(a))
    }

    pub fn and(&mut self, a: ExprId, b: ExprId) -> ExprId {
        self.push(Expr::And(a, b))
    }

    pub fn or(&mut self, a: ExprId, b: ExprId) -> ExprId {
        self.push(Expr::Or(a, b))
    }

    pub fn iff(&mut self, a: ExprId, b: ExprId) -> ExprId {
        self.push(Expr::Iff(a, b))
    }
}

// Traversals
impl ExprPool {
    /// All ids reachable from `roots`, in increasing (i.e. topological) order.
    pub fn reachable(&self, roots: &[ExprId]) -> Vec<ExprId> {
        let mut seen = vec![false; self.exprs.len()];
        let mut stack: Vec<ExprId> = roots.to_vec();
        while let Some(id) = stack.pop() {
            if seen[id.index()] {
                continue;
            }
            seen[id.index()] = true;
            self.get(id).for_each_child(|&child| stack.push(child));
        }
        seen.iter()
            .enumerate()
            .filter(|&(_, &s)| s)
            .map(|(i, _)| ExprId(i as u32))
            .collect()
    }

    /// Evaluates `root` under the given variable assignment.
    pub fn eval<F>(&self, root: ExprId, mut assignment: F) -> bool
    where
        F: FnMut(Var) -> bool,
    {
        let mut values: Vec<bool> = Vec::with_capacity(root.index() + 1);
        for expr in &self.exprs[..=root.index()] {
            let value = match expr.fmap(|child| values[child.index()]) {
                Expr::Const(b) => b,
                Expr::Var(v) => assignment(v),
                Expr::Not(a) => !a,
                Expr::And(a, b) => a && b,
                Expr::Or(a, b) => a || b,
                Expr::Iff(a, b) => a == b,
            };
            values.push(value);
        }
        values[root.index()]
    }

    /// Unfolds the DAG below `root` into an owned tree.
    ///
    /// Shared nodes are duplicated, so the result can be exponentially larger than the pool.
    /// Meant for comparison, printing and tests.
    pub fn to_boxed(&self, root: ExprId) -> ExprBoxed {
        let mut trees: HashMap<ExprId, ExprBoxed> = HashMap::new();
        for id in self.reachable(&[root]) {
            let tree = match self.get(id).fmap(|child| trees[&child].clone()) {
                Expr::Const(b) => ExprBoxed::constant(b),
                Expr::Var(v) => ExprBoxed::var(v),
                Expr::Not(a) => ExprBoxed::not(a),
                Expr::And(a, b) => ExprBoxed::and(a, b),
                Expr::Or(a, b) => ExprBoxed::or(a, b),
                Expr::Iff(a, b) => ExprBoxed::iff(a, b),
            };
            trees.insert(id, tree);
        }
        trees.remove(&root).unwrap_or(ExprBoxed::Const(false))
    }
}
