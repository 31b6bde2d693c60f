//! Transition system assembly.
//!
//! [`TransitionSystem::from_aig`] walks the decoded AIG tables once per concern:
//!
//! 1. inputs get a variable keyed by their node index;
//! 2. latches get a current-state variable (node index) and a next-state variable
//!    (`max_var + node index`), so the two key spaces never overlap;
//! 3. AND-gates are built in file order, each operand resolved through the [`NodeTable`];
//!    a reference to a node that is not defined yet is a [`DanglingReference`];
//! 4. latches get their initial constraint (from `reset`) and their transition constraint
//!    `next_var <-> f(next)`;
//! 5. outputs (if enabled) and then bad literals become bad-state properties;
//! 6. invariant constraints are resolved as-is.
//!
//! Any failure aborts the whole translation.
//!
//! [`DanglingReference`]: Error::DanglingReference

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use log::{debug, info, warn};
use num_bigint::BigUint;

use crate::aiger::{Aig, AigSource};
use crate::ast::ExprBoxed;
use crate::config::{ResetPolicy, TranslateConfig};
use crate::error::{Error, Result};
use crate::expr::{ExprId, ExprPool};
use crate::literal::Literal;
use crate::resolve::{Node, NodeKind, NodeTable, Site};
use crate::types::Var;

/// A variable of the transition system together with its origin in the AIG.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StateVar {
    /// Node index of the input or latch this variable belongs to.
    pub node: u32,
    pub var: Var,
    pub expr: ExprId,
    pub name: Option<String>,
}

/// Insertion-ordered map from a variable key to its [`StateVar`].
#[derive(Debug, Clone, Default)]
pub struct VarMap {
    entries: Vec<StateVar>,
    index: HashMap<u32, usize>,
}

impl VarMap {
    fn insert(&mut self, key: u32, entry: StateVar) {
        self.index.insert(key, self.entries.len());
        self.entries.push(entry);
    }

    pub fn get(&self, key: u32) -> Option<&StateVar> {
        self.index.get(&key).map(|&i| &self.entries[i])
    }

    pub fn contains_key(&self, key: u32) -> bool {
        self.index.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateVar> {
        self.entries.iter()
    }

    pub fn vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.entries.iter().map(|e| e.var)
    }
}

/// Where a bad-state property came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PropertyOrigin {
    /// The `i`-th circuit output, reinterpreted as bad.
    Output(usize),
    /// The `i`-th explicit bad-state literal.
    Bad(usize),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Property {
    pub expr: ExprId,
    pub origin: PropertyOrigin,
}

/// Non-fatal notes produced during translation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Diagnostic {
    /// `count` outputs were added to the bad-state list.
    OutputsAsBad { count: usize },
    /// Latch #`latch` has a non-constant reset and was left uninitialized.
    UnconstrainedReset { latch: usize, reset: Literal },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::OutputsAsBad { count } => {
                write!(f, "considering {} output(s) as bad-state properties", count)
            }
            Diagnostic::UnconstrainedReset { latch, reset } => {
                write!(f, "latch #{} has reset literal {}, leaving it unconstrained", latch, reset)
            }
        }
    }
}

/// Size summary of a translated system.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Stats {
    pub inputs: usize,
    pub latches: usize,
    pub ands: usize,
    pub exprs: usize,
    pub properties: usize,
    /// Number of distinct states, `2^latches`.
    pub state_space: BigUint,
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "inputs = {}, latches = {}, ands = {}, exprs = {}, properties = {}, state space = 2^{}",
            self.inputs,
            self.latches,
            self.ands,
            self.exprs,
            self.properties,
            self.state_space.bits().saturating_sub(1),
        )
    }
}

/// The symbolic transition system of an AIG.
///
/// All predicates are handles into [`pool`][TransitionSystem::pool]:
/// `init` and `trans` are implicit conjunctions, `bad` an implicit disjunction,
/// `constraints` must hold in every step.
#[derive(Debug, Clone)]
pub struct TransitionSystem {
    max_var: u32,
    pool: ExprPool,
    nodes: NodeTable,
    inputs: VarMap,
    latches: VarMap,
    next_states: VarMap,
    init: Vec<ExprId>,
    trans: Vec<ExprId>,
    bad: Vec<Property>,
    bad_any: Option<ExprId>,
    constraints: Vec<ExprId>,
    diagnostics: Vec<Diagnostic>,
    num_ands: usize,
}

impl TransitionSystem {
    /// Loads tables from `source` and translates them.
    ///
    /// A failing source is reported as [`Error::Decode`] and nothing is translated.
    pub fn load<S: AigSource>(source: S, config: &TranslateConfig) -> Result<Self> {
        let aig = source.load().map_err(|e| Error::Decode(Box::new(e)))?;
        Self::from_aig(&aig, config)
    }

    pub fn from_aig(aig: &Aig, config: &TranslateConfig) -> Result<Self> {
        info!(
            "translating AIG: M = {}, I = {}, L = {}, O = {}, A = {}, B = {}, C = {}",
            aig.max_var,
            aig.inputs.len(),
            aig.latches.len(),
            aig.outputs.len(),
            aig.ands.len(),
            aig.bad.len(),
            aig.constraints.len(),
        );

        let mut ts = Self {
            max_var: aig.max_var,
            pool: ExprPool::new(),
            nodes: NodeTable::new(aig.max_var),
            inputs: VarMap::default(),
            latches: VarMap::default(),
            next_states: VarMap::default(),
            init: Vec::with_capacity(aig.latches.len()),
            trans: Vec::with_capacity(aig.latches.len()),
            bad: Vec::new(),
            bad_any: None,
            constraints: Vec::new(),
            diagnostics: Vec::new(),
            num_ands: aig.ands.len(),
        };

        ts.declare_inputs(aig)?;
        ts.declare_latches(aig)?;
        ts.build_ands(aig)?;
        ts.constrain_latches(aig, config)?;
        ts.collect_properties(aig, config)?;
        ts.collect_constraints(aig)?;

        info!("translated: {}", ts.stats());
        Ok(ts)
    }

    /// Node index of a defining literal, which must be positive, non-constant and in range.
    fn define(&self, literal: Literal, site: Site) -> Result<u32> {
        if literal.is_constant() || literal.is_negated() {
            return Err(Error::InvalidDefinition { literal, site });
        }
        if literal.node() > self.max_var {
            return Err(Error::IndexOutOfRange {
                literal,
                max_var: self.max_var,
            });
        }
        Ok(literal.node())
    }

    fn declare_inputs(&mut self, aig: &Aig) -> Result<()> {
        for (position, input) in aig.inputs.iter().enumerate() {
            let node = self.define(input.lit, Site::Input { position })?;
            let var = Var::new(node);
            let expr = self.pool.var(var);
            self.nodes.insert(node, NodeKind::Input, expr)?;
            self.inputs.insert(
                node,
                StateVar {
                    node,
                    var,
                    expr,
                    name: input.name.clone(),
                },
            );
        }
        Ok(())
    }

    fn declare_latches(&mut self, aig: &Aig) -> Result<()> {
        for (position, latch) in aig.latches.iter().enumerate() {
            let site = Site::Latch {
                position,
                index: latch.lit.node(),
            };
            let node = self.define(latch.lit, site)?;

            let var = Var::new(node);
            let expr = self.pool.var(var);
            self.nodes.insert(node, NodeKind::Latch, expr)?;
            self.latches.insert(
                node,
                StateVar {
                    node,
                    var,
                    expr,
                    name: latch.name.clone(),
                },
            );

            let next = Var::next_state(self.max_var, node).ok_or(Error::IndexOutOfRange {
                literal: latch.lit,
                max_var: self.max_var,
            })?;
            let next_expr = self.pool.var(next);
            self.next_states.insert(
                next.id(),
                StateVar {
                    node,
                    var: next,
                    expr: next_expr,
                    name: latch.name.as_ref().map(|name| format!("{}'", name)),
                },
            );
        }
        Ok(())
    }

    fn build_ands(&mut self, aig: &Aig) -> Result<()> {
        let mut last: Option<u32> = None;
        for gate in aig.ands.iter() {
            let site = Site::AndGate {
                index: gate.lhs.node(),
            };
            let index = self.define(gate.lhs, site)?;
            if let Some(previous) = last {
                if index < previous {
                    return Err(Error::UnorderedAndGate { index, previous });
                }
            }
            last = Some(index);

            let rhs0 = self.nodes.resolve_literal(&mut self.pool, gate.rhs0, site)?;
            let rhs1 = self.nodes.resolve_literal(&mut self.pool, gate.rhs1, site)?;
            let expr = self.pool.and(rhs0, rhs1);
            self.nodes.insert(index, NodeKind::And, expr)?;
        }
        debug!("built {} AND-gates", aig.ands.len());
        Ok(())
    }

    fn constrain_latches(&mut self, aig: &Aig, config: &TranslateConfig) -> Result<()> {
        for (position, latch) in aig.latches.iter().enumerate() {
            let node = latch.lit.node();
            let site = Site::Latch { position, index: node };
            let current = self.nodes.resolve(latch.lit, site)?.expr;
            let next = self.next_states.entries[position].expr;

            if latch.reset == Literal::FALSE {
                let init = self.pool.not(current);
                self.init.push(init);
            } else if latch.reset == Literal::TRUE {
                self.init.push(current);
            } else {
                match config.reset_policy {
                    ResetPolicy::Reject => {
                        return Err(Error::UnsupportedResetEncoding {
                            latch: position,
                            reset: latch.reset,
                        });
                    }
                    ResetPolicy::Unconstrained => {
                        let diagnostic = Diagnostic::UnconstrainedReset {
                            latch: position,
                            reset: latch.reset,
                        };
                        warn!("{}", diagnostic);
                        self.diagnostics.push(diagnostic);
                    }
                }
            }

            let trans = if latch.next == Literal::FALSE {
                self.pool.not(next)
            } else if latch.next == Literal::TRUE {
                next
            } else {
                let update = self.nodes.resolve_literal(&mut self.pool, latch.next, site)?;
                self.pool.iff(next, update)
            };
            self.trans.push(trans);
        }
        Ok(())
    }

    fn collect_properties(&mut self, aig: &Aig, config: &TranslateConfig) -> Result<()> {
        if config.outputs_as_bad && !aig.outputs.is_empty() {
            let diagnostic = Diagnostic::OutputsAsBad {
                count: aig.outputs.len(),
            };
            info!("{}", diagnostic);
            self.diagnostics.push(diagnostic);

            for (position, output) in aig.outputs.iter().enumerate() {
                let expr = self.nodes.resolve_literal(&mut self.pool, output.lit, Site::Output { position })?;
                self.bad.push(Property {
                    expr,
                    origin: PropertyOrigin::Output(position),
                });
            }
        }

        for (position, bad) in aig.bad.iter().enumerate() {
            let expr = self.nodes.resolve_literal(&mut self.pool, bad.lit, Site::Bad { position })?;
            self.bad.push(Property {
                expr,
                origin: PropertyOrigin::Bad(position),
            });
        }

        let pool = &mut self.pool;
        self.bad_any = self.bad.iter().map(|p| p.expr).reduce(|acc, e| pool.or(acc, e));
        Ok(())
    }

    fn collect_constraints(&mut self, aig: &Aig) -> Result<()> {
        for (position, constraint) in aig.constraints.iter().enumerate() {
            let expr = self
                .nodes
                .resolve_literal(&mut self.pool, constraint.lit, Site::Constraint { position })?;
            self.constraints.push(expr);
        }
        Ok(())
    }
}

// Getters
impl TransitionSystem {
    pub fn max_var(&self) -> u32 {
        self.max_var
    }

    pub fn pool(&self) -> &ExprPool {
        &self.pool
    }

    /// Input variables in file order, keyed by node index.
    pub fn inputs(&self) -> &VarMap {
        &self.inputs
    }

    /// Current-state variables in file order, keyed by node index.
    pub fn latches(&self) -> &VarMap {
        &self.latches
    }

    /// Next-state variables in file order, keyed by `max_var + node index`.
    pub fn next_states(&self) -> &VarMap {
        &self.next_states
    }

    /// The next-state variable of the latch at `node`.
    pub fn next_var(&self, node: u32) -> Option<&StateVar> {
        if !self.latches.contains_key(node) {
            return None;
        }
        self.max_var
            .checked_add(node)
            .and_then(|key| self.next_states.get(key))
    }

    pub fn init(&self) -> &[ExprId] {
        &self.init
    }

    pub fn trans(&self) -> &[ExprId] {
        &self.trans
    }

    /// Bad-state properties: outputs (if reinterpreted) first, then explicit bad literals.
    pub fn bad(&self) -> &[Property] {
        &self.bad
    }

    pub fn bad_exprs(&self) -> impl Iterator<Item = ExprId> + '_ {
        self.bad.iter().map(|p| p.expr)
    }

    pub fn constraints(&self) -> &[ExprId] {
        &self.constraints
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The namespace and expression of node `index`.
    pub fn node(&self, index: u32) -> Option<Node> {
        self.nodes.get(index)
    }

    /// Tree view of any expression of this system, for printing and comparison.
    ///
    /// Shared sub-expressions are unfolded; see [`ExprPool::to_boxed`].
    pub fn expr(&self, id: ExprId) -> ExprBoxed {
        self.pool.to_boxed(id)
    }

    /// The whole bad-state predicate as one shared disjunction, built once during translation.
    ///
    /// `None` if there are no properties, i.e. no state is bad.
    pub fn bad_any(&self) -> Option<ExprId> {
        self.bad_any
    }

    pub fn stats(&self) -> Stats {
        Stats {
            inputs: self.inputs.len(),
            latches: self.latches.len(),
            ands: self.num_ands,
            exprs: self.pool.len(),
            properties: self.bad.len(),
            state_space: BigUint::from(1u32) << self.latches.len(),
        }
    }
}
