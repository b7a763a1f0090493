use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::frontier::FrontierError;

/// The search algorithm deciding which frontier entry gets expanded next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strategy {
    /// First in, first out.
    BreadthFirst,
    /// Last in, first out.
    DepthFirst,
    /// Lowest path cost.
    UniformCost,
    /// Lowest heuristic.
    Greedy,
    /// Lowest path cost plus heuristic.
    AStar,
}

impl Strategy {
    /// Every strategy, in question order.
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    /// Looks a strategy up by its position in [`Strategy::ALL`].
    pub fn from_index(index: usize) -> Result<Self, FrontierError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| FrontierError::UnknownStrategy(format!("#{index}")))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Human readable name, as used in quiz prompts.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first search",
            Strategy::DepthFirst => "depth-first search",
            Strategy::UniformCost => "uniform-cost search",
            Strategy::Greedy => "greedy best-first search",
            Strategy::AStar => "A* search",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = FrontierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadthfirst" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" | "depthfirst" => Ok(Strategy::DepthFirst),
            "ucs" | "uniform-cost" | "uniformcost" => Ok(Strategy::UniformCost),
            "greedy" => Ok(Strategy::Greedy),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(FrontierError::UnknownStrategy(s.to_string())),
        }
    }
}
