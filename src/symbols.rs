//! Per-hand symbols and the left/right pairs they are recorded in.

use std::fmt;

/// Which hand an observation concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// The other hand
    #[must_use]
    pub const fn opposite(self) -> Hand {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }
}

/// Instantaneous pose or motion of one hand.
///
/// `None` is "no observation" in recorded history and "don't care" inside a
/// gesture template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)] // Symbol codes are fixed four-letter mnemonics
pub enum Symbol {
    /// Right hand translated to the right
    TRHR,
    /// Right hand translated to the left
    TRHL,
    /// Right hand translated up
    TRHU,
    /// Right hand translated down
    TRHD,
    /// Left hand translated up
    TLHU,
    /// Left hand translated down
    TLHD,
    /// Right hand at right shoulder
    RHRS,
    /// Left hand at left shoulder
    LHLS,
    /// Right hand forward (punch)
    TRHF,
    /// Running, right hand in front
    RRHF,
    /// Running, left hand in front
    RLHF,
    /// Running, right hand back
    RRHB,
    /// Running, left hand back
    RLHB,
    /// Right hand start point (resting near the hip)
    RHSP,
    /// Left hand start point
    LHSP,
    /// Right hand diagonal up
    RHDU,
    /// Left hand diagonal up
    LHDU,
    /// Wildcard / no observation
    None,
}

impl Symbol {
    /// Whether this is the wildcard value
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Symbol::None)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            f.write_str("NONE")
        } else {
            fmt::Debug::fmt(self, f)
        }
    }
}

/// One slot of recognition history: `(left, right)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolPair {
    pub left: Symbol,
    pub right: Symbol,
}

impl SymbolPair {
    /// Pair with both hands set
    #[must_use]
    pub const fn new(left: Symbol, right: Symbol) -> Self {
        Self { left, right }
    }

    /// Pair carrying `symbol` on `hand` and `other` on the opposite hand
    #[must_use]
    pub const fn for_hand(hand: Hand, symbol: Symbol, other: Symbol) -> Self {
        match hand {
            Hand::Left => Self::new(symbol, other),
            Hand::Right => Self::new(other, symbol),
        }
    }

    /// Symbol recorded for `hand`
    #[must_use]
    pub const fn get(&self, hand: Hand) -> Symbol {
        match hand {
            Hand::Left => self.left,
            Hand::Right => self.right,
        }
    }

    /// Both sides are wildcards
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.left.is_wildcard() && self.right.is_wildcard()
    }

    /// Whether this template pair accepts the observed pair.
    ///
    /// Every non-wildcard side must equal the observed side; a wildcard side
    /// accepts anything. A fully wildcard pair therefore accepts every pair.
    #[must_use]
    pub fn accepts(&self, observed: &SymbolPair) -> bool {
        (self.left.is_wildcard() || self.left == observed.left)
            && (self.right.is_wildcard() || self.right == observed.right)
    }
}

impl fmt::Display for SymbolPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}
