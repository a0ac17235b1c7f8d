//! The missionaries-and-cannibals river crossing puzzle.

use std::fmt;

use serde::Serialize;

const TOTAL: u8 = 3;
const BOAT_CAPACITY: u8 = 2;

/// A bank configuration: how many missionaries and cannibals are on the west
/// bank, and which bank the boat is on. The east bank counts are implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MissionariesState {
    pub west_missionaries: u8,
    pub west_cannibals: u8,
    pub boat_west: bool,
}

impl MissionariesState {
    pub fn new(west_missionaries: u8, west_cannibals: u8, boat_west: bool) -> Self {
        Self {
            west_missionaries,
            west_cannibals,
            boat_west,
        }
    }

    /// The starting position: everyone on the west bank with the boat.
    pub fn start() -> Self {
        Self::new(TOTAL, TOTAL, true)
    }

    pub fn east_missionaries(&self) -> u8 {
        TOTAL - self.west_missionaries
    }

    pub fn east_cannibals(&self) -> u8 {
        TOTAL - self.west_cannibals
    }

    /// Everyone has crossed to the east bank.
    pub fn goal_reached(&self) -> bool {
        self.west_missionaries == 0 && self.west_cannibals == 0 && !self.boat_west
    }

    /// Cannibals may never outnumber missionaries on a bank that has any
    /// missionaries.
    pub fn is_legal(&self) -> bool {
        if self.west_missionaries > 0 && self.west_cannibals > self.west_missionaries {
            return false;
        }
        if self.east_missionaries() > 0 && self.east_cannibals() > self.east_missionaries() {
            return false;
        }
        true
    }

    /// All legal states reachable with one boat trip. The boat carries one or
    /// two passengers and never crosses empty.
    pub fn successors(&self) -> Vec<MissionariesState> {
        let mut result = Vec::new();
        for missionaries in 0..=BOAT_CAPACITY {
            for cannibals in 0..=(BOAT_CAPACITY - missionaries) {
                if missionaries + cannibals == 0 {
                    continue;
                }
                let candidate = if self.boat_west {
                    if missionaries > self.west_missionaries || cannibals > self.west_cannibals {
                        continue;
                    }
                    Self::new(
                        self.west_missionaries - missionaries,
                        self.west_cannibals - cannibals,
                        false,
                    )
                } else {
                    if missionaries > self.east_missionaries() || cannibals > self.east_cannibals()
                    {
                        continue;
                    }
                    Self::new(
                        self.west_missionaries + missionaries,
                        self.west_cannibals + cannibals,
                        true,
                    )
                };
                if candidate.is_legal() {
                    result.push(candidate);
                }
            }
        }
        result
    }
}

impl fmt::Display for MissionariesState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "west: {}M {}C | east: {}M {}C | boat on {} bank",
            self.west_missionaries,
            self.west_cannibals,
            self.east_missionaries(),
            self.east_cannibals(),
            if self.boat_west { "west" } else { "east" },
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::search::{engine::bfs, node::node_to_path};

    #[test]
    fn start_state_is_legal_and_not_the_goal() {
        let start = MissionariesState::start();
        assert!(start.is_legal());
        assert!(!start.goal_reached());
    }

    #[test]
    fn outnumbered_missionaries_are_illegal() {
        assert!(!MissionariesState::new(1, 2, true).is_legal());
        // 2M west leaves 1M 2C east.
        assert!(!MissionariesState::new(2, 0, true).is_legal());
        // No missionaries on a bank means no one to eat.
        assert!(MissionariesState::new(0, 2, true).is_legal());
    }

    #[test]
    fn successors_flip_the_boat_and_stay_legal() {
        for successor in MissionariesState::start().successors() {
            assert!(!successor.boat_west);
            assert!(successor.is_legal());
        }
    }

    #[test]
    fn bfs_crosses_everyone_in_eleven_trips() {
        let node = bfs(
            MissionariesState::start(),
            |s| s.goal_reached(),
            |s| s.successors(),
        )
        .unwrap();
        let path = node_to_path(&node);

        // The minimal solution is 11 boat trips, i.e. 12 states.
        assert_eq!(path.len(), 12);
        assert_eq!(path[0], MissionariesState::start());
        assert!(path[11].goal_reached());
        for pair in path.windows(2) {
            assert!(pair[0].successors().contains(&pair[1]));
        }
        for state in &path {
            assert!(state.is_legal());
        }
    }
}
