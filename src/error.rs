use thiserror::Error;

use crate::literal::Literal;
use crate::resolve::{NodeKind, Site};

/// Everything that can stop a translation.
///
/// None of these are recoverable: a translation either returns a complete
/// transition system or one of these values.
#[derive(Debug, Error)]
pub enum Error {
    /// A literal decodes to a node that no namespace owns (yet).
    #[error(
        "dangling reference: literal {} in {} refers to undefined node {}",
        .literal,
        .site,
        .literal.node()
    )]
    DanglingReference { literal: Literal, site: Site },

    /// Two definitions claim the same node index.
    #[error("node {index} is defined as {incoming} but already owned by {existing}")]
    NamespaceCollision {
        index: u32,
        existing: NodeKind,
        incoming: NodeKind,
    },

    /// Latch reset is neither 0 nor 1 and the policy rejects it.
    #[error("latch #{latch} has unsupported reset literal {reset}")]
    UnsupportedResetEncoding { latch: usize, reset: Literal },

    /// AND-gates must come in strictly increasing node order.
    #[error("AND-gate {index} follows AND-gate {previous}, gates must be sorted by node index")]
    UnorderedAndGate { index: u32, previous: u32 },

    /// A defining literal (input, latch, AND lhs) is a constant or negated.
    #[error("invalid defining literal {literal} in {site}")]
    InvalidDefinition { literal: Literal, site: Site },

    /// A literal names a node beyond the declared maximum.
    #[error("literal {literal} exceeds maximum variable index {max_var}")]
    IndexOutOfRange { literal: Literal, max_var: u32 },

    /// The upstream decoder failed; translation was not started.
    #[error("AIGER decode error: {0}")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
