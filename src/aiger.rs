//! Decoded AIGER tables.
//!
//! This is the interface to whatever reads `.aag`/`.aig` files: the decoder fills an [`Aig`],
//! the translator consumes it. Field names follow the AIGER tables (`lit`, `next`, `reset`,
//! `lhs`, `rhs0`, `rhs1`).
//!
//! Tables can also be built in code:
//!
//! ```
//! use aig_transys::aiger::Aig;
//!
//! // A latch that toggles every step; bad when it is high.
//! let mut aig = Aig::new(1);
//! aig.add_latch(2, 3, 0);
//! aig.add_bad(2);
//! assert_eq!(aig.latches.len(), 1);
//! ```

use std::convert::Infallible;

use crate::literal::Literal;

/// A primary input.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Input {
    pub lit: Literal,
    pub name: Option<String>,
}

/// A latch with its next-state literal and reset value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Latch {
    pub lit: Literal,
    pub next: Literal,
    /// `0` or `1` in practice; AIGER 1.9 also allows the latch's own literal (uninitialized).
    pub reset: Literal,
    pub name: Option<String>,
}

/// A two-input AND gate, `lhs = rhs0 & rhs1`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AndGate {
    pub lhs: Literal,
    pub rhs0: Literal,
    pub rhs1: Literal,
}

/// An output, bad-state or invariant-constraint entry.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Symbol {
    pub lit: Literal,
    pub name: Option<String>,
}

/// The decoded contents of one AIGER file.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Aig {
    /// Maximum variable (node) index, `M` in the header.
    pub max_var: u32,
    pub inputs: Vec<Input>,
    pub latches: Vec<Latch>,
    pub outputs: Vec<Symbol>,
    pub bad: Vec<Symbol>,
    pub constraints: Vec<Symbol>,
    /// AND-gates, sorted by `lhs`.
    pub ands: Vec<AndGate>,
}

impl Aig {
    pub fn new(max_var: u32) -> Self {
        Self {
            max_var,
            ..Default::default()
        }
    }

    pub fn add_input(&mut self, lit: u32) -> &mut Self {
        self.inputs.push(Input {
            lit: lit.into(),
            name: None,
        });
        self
    }

    pub fn add_named_input(&mut self, lit: u32, name: &str) -> &mut Self {
        self.inputs.push(Input {
            lit: lit.into(),
            name: Some(name.to_string()),
        });
        self
    }

    pub fn add_latch(&mut self, lit: u32, next: u32, reset: u32) -> &mut Self {
        self.latches.push(Latch {
            lit: lit.into(),
            next: next.into(),
            reset: reset.into(),
            name: None,
        });
        self
    }

    pub fn add_named_latch(&mut self, lit: u32, next: u32, reset: u32, name: &str) -> &mut Self {
        self.latches.push(Latch {
            lit: lit.into(),
            next: next.into(),
            reset: reset.into(),
            name: Some(name.to_string()),
        });
        self
    }

    pub fn add_and(&mut self, lhs: u32, rhs0: u32, rhs1: u32) -> &mut Self {
        self.ands.push(AndGate {
            lhs: lhs.into(),
            rhs0: rhs0.into(),
            rhs1: rhs1.into(),
        });
        self
    }

    pub fn add_output(&mut self, lit: u32) -> &mut Self {
        self.outputs.push(Symbol {
            lit: lit.into(),
            name: None,
        });
        self
    }

    pub fn add_bad(&mut self, lit: u32) -> &mut Self {
        self.bad.push(Symbol {
            lit: lit.into(),
            name: None,
        });
        self
    }

    pub fn add_constraint(&mut self, lit: u32) -> &mut Self {
        self.constraints.push(Symbol {
            lit: lit.into(),
            name: None,
        });
        self
    }
}

/// Something that can produce decoded AIG tables: the seam to an external AIGER decoder.
///
/// A failing source never reaches the translator; its error is surfaced as
/// [`Error::Decode`][crate::error::Error::Decode].
pub trait AigSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(self) -> Result<Aig, Self::Error>;
}

impl AigSource for Aig {
    type Error = Infallible;

    fn load(self) -> Result<Aig, Self::Error> {
        Ok(self)
    }
}

impl AigSource for &Aig {
    type Error = Infallible;

    fn load(self) -> Result<Aig, Self::Error> {
        Ok(self.clone())
    }
}

impl<E> AigSource for Result<Aig, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn load(self) -> Result<Aig, Self::Error> {
        self
    }
}
