use std::fmt::{Display, Formatter};

use crate::types::Var;

/// Owned expression tree.
///
/// This is the unshared counterpart of [`ExprPool`][crate::expr::ExprPool] nodes, obtained via
/// [`ExprPool::to_boxed`][crate::expr::ExprPool::to_boxed]. Equality is structural, which makes it
/// the right tool for comparing the output of two independent translations.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum ExprBoxed {
    Const(bool),
    Var(Var),
    Not(Box<ExprBoxed>),
    And(Box<ExprBoxed>, Box<ExprBoxed>),
    Or(Box<ExprBoxed>, Box<ExprBoxed>),
    Iff(Box<ExprBoxed>, Box<ExprBoxed>),
}

impl ExprBoxed {
    pub fn constant(value: bool) -> Self {
        ExprBoxed::Const(value)
    }

    pub fn var(var: Var) -> Self {
        ExprBoxed::Var(var)
    }

    pub fn not(value: Self) -> Self {
        ExprBoxed::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        ExprBoxed::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        ExprBoxed::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        ExprBoxed::Iff(Box::new(lhs), Box::new(rhs))
    }

    /// Left-nested disjunction of `items`; `false` when empty.
    pub fn any(items: impl IntoIterator<Item = Self>) -> Self {
        items
            .into_iter()
            .reduce(ExprBoxed::or)
            .unwrap_or(ExprBoxed::Const(false))
    }

    /// Left-nested conjunction of `items`; `true` when empty.
    pub fn all(items: impl IntoIterator<Item = Self>) -> Self {
        items
            .into_iter()
            .reduce(ExprBoxed::and)
            .unwrap_or(ExprBoxed::Const(true))
    }

    pub fn eval<F>(&self, assignment: &F) -> bool
    where
        F: Fn(Var) -> bool,
    {
        match self {
            ExprBoxed::Const(b) => *b,
            ExprBoxed::Var(v) => assignment(*v),
            ExprBoxed::Not(a) => !a.eval(assignment),
            ExprBoxed::And(a, b) => a.eval(assignment) && b.eval(assignment),
            ExprBoxed::Or(a, b) => a.eval(assignment) || b.eval(assignment),
            ExprBoxed::Iff(a, b) => a.eval(assignment) == b.eval(assignment),
        }
    }
}

impl Display for ExprBoxed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprBoxed::Const(b) => write!(f, "{}", b),
            ExprBoxed::Var(v) => write!(f, "{}", v),
            ExprBoxed::Not(a) => write!(f, "!{}", a),
            ExprBoxed::And(a, b) => write!(f, "({} & {})", a, b),
            ExprBoxed::Or(a, b) => write!(f, "({} | {})", a, b),
            ExprBoxed::Iff(a, b) => write!(f, "({} <-> {})", a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let x = ExprBoxed::var(Var::new(1));
        let y = ExprBoxed::var(Var::new(2));
        let e = ExprBoxed::iff(x.clone(), ExprBoxed::not(ExprBoxed::and(x, y)));
        assert_eq!(e.to_string(), "(x1 <-> !(x1 & x2))");
    }

    #[test]
    fn test_not_keeps_double_negation() {
        let x = ExprBoxed::var(Var::new(1));
        let e = ExprBoxed::not(ExprBoxed::not(x.clone()));
        assert_ne!(e, x);
        assert_eq!(e.to_string(), "!!x1");
    }

    #[test]
    fn test_any_all() {
        let x = ExprBoxed::var(Var::new(1));
        let y = ExprBoxed::var(Var::new(2));
        assert_eq!(ExprBoxed::any(Vec::new()), ExprBoxed::Const(false));
        assert_eq!(ExprBoxed::all(Vec::new()), ExprBoxed::Const(true));
        assert_eq!(ExprBoxed::any([x.clone()]), x);
        assert_eq!(ExprBoxed::any([x.clone(), y.clone()]).to_string(), "(x1 | x2)");
        assert_eq!(ExprBoxed::all([x, y]).to_string(), "(x1 & x2)");
    }

    #[test]
    fn test_eval() {
        let x = ExprBoxed::var(Var::new(1));
        let y = ExprBoxed::var(Var::new(2));
        let e = ExprBoxed::or(ExprBoxed::not(x), y);
        assert!(e.eval(&|_| false));
        assert!(!e.eval(&|v| v.id() == 1));
        assert!(e.eval(&|_| true));
    }
}
