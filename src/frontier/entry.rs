use serde::Serialize;

use crate::frontier::NodeLabel;

/// A candidate path in the search frontier, storing what it cost to get there and
/// how far the goal is estimated to be from its terminal node.
///
/// Entries are plain values. The frontier never mutates an entry in place; it only
/// inserts and removes them.
#[derive(PartialEq, Eq, Clone, Hash, Debug, Serialize)]
pub struct FrontierEntry {
    /// Visited nodes, from the start node to the terminal node.
    pub path: Vec<NodeLabel>,

    /// Accumulated edge cost from the start node to the terminal node.
    pub path_cost: u32,

    /// Estimated remaining cost from the terminal node to a goal.
    pub heuristic: u32,
}

impl FrontierEntry {
    pub fn new(path: Vec<NodeLabel>, path_cost: u32, heuristic: u32) -> Self {
        FrontierEntry {
            path,
            path_cost,
            heuristic,
        }
    }

    /// Path cost plus heuristic, the evaluation function of A*.
    ///
    /// Computed in 64 bits so that two `u32::MAX` components cannot overflow.
    pub fn combined_score(&self) -> u64 {
        u64::from(self.path_cost) + u64::from(self.heuristic)
    }

    pub fn terminal(&self) -> Option<NodeLabel> {
        self.path.last().copied()
    }

    /// The path rendered as its label symbols, e.g. `"ABQ"`.
    pub fn path_symbols(&self) -> String {
        self.path.iter().map(|label| label.symbol()).collect()
    }
}
