use crate::{
    a_star, bidirectional, breadth_first, depth_first, greedy_best_first, uniform_cost, Error,
    Graph, Heuristic, Node, Path, Result,
};

use std::fmt;
use std::str::FromStr;

/// The interchangeable search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    GreedyBestFirst,
    AStar,
    Bidirectional,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
        Strategy::Bidirectional,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::UniformCost => "ucs",
            Strategy::GreedyBestFirst => "greedy",
            Strategy::AStar => "astar",
            Strategy::Bidirectional => "bidirectional",
        }
    }

    pub fn needs_heuristic(self) -> bool {
        matches!(self, Strategy::GreedyBestFirst | Strategy::AStar)
    }

    /// Run this strategy. Strategies that do not use a heuristic ignore
    /// `heuristic`; the ones that do fail with [`Error::MissingHeuristic`] for
    /// `start` when it is `None`, unless the query is trivial.
    pub fn search<L>(
        self,
        g: &Graph<L>,
        start: Node,
        goal: Node,
        heuristic: Option<&dyn Heuristic>,
    ) -> Result<Option<Path>> {
        match (self, heuristic) {
            (Strategy::BreadthFirst, _) => breadth_first(g, start, goal),
            (Strategy::DepthFirst, _) => depth_first(g, start, goal),
            (Strategy::UniformCost, _) => uniform_cost(g, start, goal),
            (Strategy::GreedyBestFirst, Some(h)) => greedy_best_first(g, start, goal, h),
            (Strategy::AStar, Some(h)) => a_star(g, start, goal, h),
            (Strategy::GreedyBestFirst | Strategy::AStar, None) => {
                match g.check_query(start, goal)? {
                    Some(trivial) => Ok(Some(trivial)),
                    None => Err(Error::MissingHeuristic(start)),
                }
            }
            (Strategy::Bidirectional, _) => bidirectional(g, start, goal),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
                format!("unknown strategy '{s}', expected one of {}", names.join(", "))
            })
    }
}
