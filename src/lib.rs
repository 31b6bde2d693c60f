//! # aig-transys: AIGER circuits as symbolic transition systems
//!
//! **`aig-transys`** turns a decoded And-Inverter Graph (AIGER format) into the artifacts a
//! bounded or unbounded model checker works with:
//!
//! - input variables, current-state variables and next-state variables,
//! - an initial-state predicate,
//! - a transition relation,
//! - bad-state properties (and invariant constraints),
//!
//! all expressed as boolean formulas over one shared expression DAG.
//!
//! ## Literals and namespaces
//!
//! An AIG literal `l` is `2 * node + negated`; `0` and `1` are the constants false and true.
//! Inputs, latches and AND-gates share one node index space. The translator keeps them in a
//! single tagged table, so each index has exactly one owner, and any literal that points to a
//! missing node (including a not-yet-defined AND-gate) is reported with the place it was
//! found.
//!
//! ## Basic Usage
//!
//! ```rust
//! use aig_transys::aiger::Aig;
//! use aig_transys::config::TranslateConfig;
//! use aig_transys::transys::TransitionSystem;
//!
//! // One input (node 1), one latch (node 2) whose next value is the negated input.
//! let mut aig = Aig::new(2);
//! aig.add_input(2).add_latch(4, 3, 1).add_bad(4);
//!
//! let ts = TransitionSystem::from_aig(&aig, &TranslateConfig::default()).unwrap();
//!
//! assert_eq!(ts.expr(ts.init()[0]).to_string(), "x2");
//! assert_eq!(ts.expr(ts.trans()[0]).to_string(), "(x4 <-> !x1)");
//! assert_eq!(ts.bad_any(), Some(ts.bad()[0].expr));
//! ```
//!
//! ## Core Components
//!
//! - **[`literal`]**: the AIGER literal codec.
//! - **[`resolve`]**: the node table mapping indices to their namespace and expression.
//! - **[`expr`]**: the expression pool (shared DAG) and its evaluation.
//! - **[`transys`]**: the assembler producing a [`TransitionSystem`][crate::transys::TransitionSystem].
//! - **[`lower`]** and **[`cnf`]**: handing the result to a downstream engine.
//!
//! The crate logs through the [`log`] facade and never installs a logger itself.

pub mod aiger;
pub mod ast;
pub mod cnf;
pub mod config;
pub mod error;
pub mod expr;
pub mod literal;
pub mod lower;
pub mod resolve;
pub mod transys;
pub mod types;
