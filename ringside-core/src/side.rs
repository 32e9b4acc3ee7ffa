//! Player sides

use serde::{Deserialize, Serialize};

/// One of the two sides of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    P1,
    P2,
}

impl Side {
    /// Both sides, P1 first
    pub const BOTH: [Side; 2] = [Side::P1, Side::P2];

    /// Slot in per-side arrays (P1 = 0, P2 = 1)
    pub fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }

    /// The other side
    pub fn opponent(self) -> Side {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }
}
