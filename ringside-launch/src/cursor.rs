//! Round-robin cursor - which roster pairing plays next
//!
//! Level 3 - Steps

use serde::{Deserialize, Serialize};

/// Owner of the roster positions used for the current match.
///
/// The configurator only reads the indices; the batch driver advances them
/// between matches.
pub trait MatchBatchDriver {
    /// Roster indices for (P1, P2)
    fn current_pair_indices(&self) -> (usize, usize);

    /// Move to the next pairing. Returns false once every pairing of a
    /// roster of `roster_len` agents has been visited.
    fn advance_pair(&mut self, roster_len: usize) -> bool;
}

/// Visits every ordered pairing `(i, j)` with `i != j`, P2 advancing fastest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRobinCursor {
    p1: usize,
    p2: usize,
}

impl Default for RoundRobinCursor {
    fn default() -> Self {
        Self { p1: 0, p2: 1 }
    }
}

impl RoundRobinCursor {
    /// Cursor at the first pairing (0, 1)
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor at an explicit position (e.g. resuming a batch)
    pub fn at(p1: usize, p2: usize) -> Self {
        Self { p1, p2 }
    }

    /// Number of ordered pairings for a roster of `n` agents
    pub fn pairings(n: usize) -> usize {
        n * n.saturating_sub(1)
    }
}

impl MatchBatchDriver for RoundRobinCursor {
    fn current_pair_indices(&self) -> (usize, usize) {
        (self.p1, self.p2)
    }

    fn advance_pair(&mut self, roster_len: usize) -> bool {
        let (mut p1, mut p2) = (self.p1, self.p2);
        loop {
            p2 += 1;
            if p2 >= roster_len {
                p2 = 0;
                p1 += 1;
            }
            if p1 >= roster_len {
                return false;
            }
            if p1 != p2 {
                break;
            }
        }
        self.p1 = p1;
        self.p2 = p2;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visit_all(roster_len: usize) -> Vec<(usize, usize)> {
        let mut cursor = RoundRobinCursor::new();
        let mut visited = vec![cursor.current_pair_indices()];
        while cursor.advance_pair(roster_len) {
            visited.push(cursor.current_pair_indices());
        }
        visited
    }

    #[test]
    fn test_starts_at_first_pair() {
        assert_eq!(RoundRobinCursor::new().current_pair_indices(), (0, 1));
    }

    #[test]
    fn test_three_agents_visit_six_pairings() {
        let visited = visit_all(3);
        assert_eq!(
            visited,
            vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]
        );
        assert_eq!(visited.len(), RoundRobinCursor::pairings(3));
    }

    #[test]
    fn test_two_agents_play_both_sides() {
        assert_eq!(visit_all(2), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_exhausted_cursor_stays_put() {
        let mut cursor = RoundRobinCursor::at(1, 0);
        assert!(!cursor.advance_pair(2));
        assert_eq!(cursor.current_pair_indices(), (1, 0));
    }

    #[test]
    fn test_pairings_count() {
        assert_eq!(RoundRobinCursor::pairings(0), 0);
        assert_eq!(RoundRobinCursor::pairings(1), 0);
        assert_eq!(RoundRobinCursor::pairings(4), 12);
    }
}
