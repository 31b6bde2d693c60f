use std::fmt::{Debug, Display, Formatter};
use std::ops::Not;

/// An AIGER literal: node index in the upper bits, polarity in the lowest bit.
///
/// Literals `0` and `1` are the constants false and true. For every other value,
/// `node = lit / 2` and the literal is negated iff it is odd.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Literal(u32);

// Constructors
impl Literal {
    pub const FALSE: Literal = Literal(0);
    pub const TRUE: Literal = Literal(1);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Inverse of [`Literal::decode`].
    pub const fn encode(node: u32, negated: bool) -> Self {
        Self(encode(node, negated))
    }

    pub const fn positive(node: u32) -> Self {
        Self::encode(node, false)
    }

    pub const fn negative(node: u32) -> Self {
        Self::encode(node, true)
    }
}

// Getters
impl Literal {
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn node(self) -> u32 {
        self.0 >> 1
    }

    pub const fn decode(self) -> (u32, bool) {
        decode(self.0)
    }
}

// Checks
impl Literal {
    /// True for `0` and `1`, which callers must handle before treating the literal as a node reference.
    pub const fn is_constant(self) -> bool {
        self.node() == 0
    }

    pub const fn is_negated(self) -> bool {
        self.0 & 1 != 0
    }
}

/// Splits a raw literal into `(node, negated)`.
pub const fn decode(lit: u32) -> (u32, bool) {
    (lit >> 1, lit & 1 != 0)
}

/// Packs `(node, negated)` into a raw literal.
pub const fn encode(node: u32, negated: bool) -> u32 {
    (node << 1) | negated as u32
}

impl From<u32> for Literal {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Literal> for u32 {
    fn from(lit: Literal) -> Self {
        lit.0
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        if b {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }
}

impl Not for Literal {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(self.0 ^ 1)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_constant() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{}@{}", if self.is_negated() { "~" } else { "" }, self.node())
        }
    }
}
