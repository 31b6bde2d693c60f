//! Lowering expressions into a downstream formula engine.
//!
//! The translator only knows its own [`Expr`] algebra. A solver, a BDD package or a
//! pretty-printer plugs in by implementing [`Backend`], and [`ExprPool::lower`] feeds it the
//! reachable part of the DAG bottom-up, calling the backend exactly once per shared node.

use log::debug;

use crate::expr::{Expr, ExprId, ExprPool};
use crate::types::Var;

/// A formula engine that expressions can be lowered into.
pub trait Backend {
    type Term: Clone;

    fn constant(&mut self, value: bool) -> Self::Term;
    fn var(&mut self, var: Var) -> Self::Term;
    fn not(&mut self, a: Self::Term) -> Self::Term;
    fn and(&mut self, a: Self::Term, b: Self::Term) -> Self::Term;
    fn or(&mut self, a: Self::Term, b: Self::Term) -> Self::Term;
    fn iff(&mut self, a: Self::Term, b: Self::Term) -> Self::Term;
}

impl ExprPool {
    /// Lowers `roots` into `backend`, returning their terms in the same order.
    pub fn lower<B: Backend>(&self, backend: &mut B, roots: &[ExprId]) -> Vec<B::Term> {
        let reachable = self.reachable(roots);
        debug!("lower(roots = {}, reachable = {})", roots.len(), reachable.len());

        let mut terms: Vec<Option<B::Term>> = vec![None; self.len()];
        for id in reachable {
            let expr = self.get(id).fmap(|child| {
                terms[child.index()]
                    .clone()
                    .expect("children are lowered before their parents")
            });
            let term = match expr {
                Expr::Const(b) => backend.constant(b),
                Expr::Var(v) => backend.var(v),
                Expr::Not(a) => backend.not(a),
                Expr::And(a, b) => backend.and(a, b),
                Expr::Or(a, b) => backend.or(a, b),
                Expr::Iff(a, b) => backend.iff(a, b),
            };
            terms[id.index()] = Some(term);
        }

        roots
            .iter()
            .map(|r| terms[r.index()].clone().expect("roots are reachable"))
            .collect()
    }
}
