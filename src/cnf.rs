//! Tseitin encoding into CNF.
//!
//! [`Cnf`] is a [`Backend`] whose terms are DIMACS literals (non-zero `i32`, negative means
//! negated). Every gate gets a fresh variable constrained to be equivalent to the gate's
//! function; system variables are mapped to DIMACS variables on first use, in order.
//!
//! ```
//! use aig_transys::aiger::Aig;
//! use aig_transys::cnf::Cnf;
//! use aig_transys::config::TranslateConfig;
//! use aig_transys::transys::TransitionSystem;
//!
//! let mut aig = Aig::new(1);
//! aig.add_latch(2, 3, 0).add_bad(2);
//! let ts = TransitionSystem::from_aig(&aig, &TranslateConfig::default()).unwrap();
//!
//! let mut cnf = Cnf::new();
//! for lit in ts.pool().lower(&mut cnf, ts.init()) {
//!     cnf.assert_lit(lit);
//! }
//! assert!(cnf.to_dimacs().starts_with("p cnf"));
//! ```

use std::collections::HashMap;
use std::fmt::Write;

use crate::lower::Backend;
use crate::types::Var;

#[derive(Debug, Clone, Default)]
pub struct Cnf {
    num_vars: u32,
    clauses: Vec<Vec<i32>>,
    var_map: HashMap<Var, i32>,
    true_lit: Option<i32>,
}

impl Cnf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    pub fn clauses(&self) -> &[Vec<i32>] {
        &self.clauses
    }

    /// The DIMACS variable assigned to `var`, if it has been lowered.
    pub fn lookup(&self, var: Var) -> Option<i32> {
        self.var_map.get(&var).copied()
    }

    pub fn new_var(&mut self) -> i32 {
        self.num_vars += 1;
        self.num_vars as i32
    }

    pub fn add_clause(&mut self, clause: impl Into<Vec<i32>>) {
        self.clauses.push(clause.into());
    }

    /// Adds the unit clause `lit`.
    pub fn assert_lit(&mut self, lit: i32) {
        self.add_clause([lit]);
    }

    /// Checks every clause under `model` (indexed by DIMACS variable, index 0 unused).
    pub fn is_satisfied_by(&self, model: &[bool]) -> bool {
        self.clauses.iter().all(|clause| {
            clause.iter().any(|&lit| {
                let value = model[lit.unsigned_abs() as usize];
                if lit > 0 {
                    value
                } else {
                    !value
                }
            })
        })
    }

    pub fn to_dimacs(&self) -> String {
        let mut output = String::new();
        writeln!(output, "p cnf {} {}", self.num_vars, self.clauses.len()).unwrap();
        for clause in &self.clauses {
            for lit in clause {
                write!(output, "{} ", lit).unwrap();
            }
            writeln!(output, "0").unwrap();
        }
        output
    }
}

impl Backend for Cnf {
    type Term = i32;

    fn constant(&mut self, value: bool) -> i32 {
        let t = match self.true_lit {
            Some(t) => t,
            None => {
                let t = self.new_var();
                self.assert_lit(t);
                self.true_lit = Some(t);
                t
            }
        };
        if value {
            t
        } else {
            -t
        }
    }

    fn var(&mut self, var: Var) -> i32 {
        if let Some(&v) = self.var_map.get(&var) {
            return v;
        }
        let v = self.new_var();
        self.var_map.insert(var, v);
        v
    }

    fn not(&mut self, a: i32) -> i32 {
        -a
    }

    fn and(&mut self, a: i32, b: i32) -> i32 {
        let g = self.new_var();
        // g -> a, g -> b, a & b -> g
        self.add_clause([-g, a]);
        self.add_clause([-g, b]);
        self.add_clause([g, -a, -b]);
        g
    }

    fn or(&mut self, a: i32, b: i32) -> i32 {
        let g = self.new_var();
        // a -> g, b -> g, g -> a | b
        self.add_clause([g, -a]);
        self.add_clause([g, -b]);
        self.add_clause([-g, a, b]);
        g
    }

    fn iff(&mut self, a: i32, b: i32) -> i32 {
        let g = self.new_var();
        self.add_clause([-g, -a, b]);
        self.add_clause([-g, a, -b]);
        self.add_clause([g, a, b]);
        self.add_clause([g, -a, -b]);
        g
    }
}
