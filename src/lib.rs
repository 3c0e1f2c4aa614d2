mod astar;
mod bfs;
mod bidirectional;
mod dfs;
mod error;
mod fmt;
mod frontier;
mod graph;
mod greedy;
mod heuristic;
mod map;
mod matrix;
mod path;
mod set;
mod strategy;
mod ucs;

pub use astar::a_star;
pub use bfs::breadth_first;
pub use bidirectional::bidirectional;
pub use dfs::depth_first;
pub use error::{Error, Result};
pub use graph::Graph;
pub use greedy::greedy_best_first;
pub use heuristic::{Heuristic, Zero};
pub use map::NodeMap;
pub use matrix::{from_csv, from_matrix, heuristic_from_csv};
pub use path::Path;
pub use set::NodeSet;
pub use strategy::Strategy;
pub use ucs::uniform_cost;

pub use fmt::{to_dot, to_dot_with_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node(usize);

impl Node {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("N{}", self.0))
    }
}

pub type Weight = f32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub node: Node,
    pub weight: Weight,
}

fn edge(n: Node, weight: Weight) -> Edge {
    Edge { node: n, weight }
}

impl From<(Node, Weight)> for Edge {
    fn from((node, weight): (Node, Weight)) -> Self {
        Edge { node, weight }
    }
}

/// Mutable graph under construction. Freeze it into a [`Graph`] before
/// searching.
#[derive(Clone, Default)]
pub struct AdjacencyList {
    nodes: Vec<Vec<Edge>>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cap),
        }
    }

    pub fn add_node(&mut self) -> Node {
        let n = Node(self.nodes.len());
        self.nodes.push(Vec::new());
        n
    }

    fn is_valid(&self, n: Node) -> bool {
        n.0 < self.nodes.len()
    }

    /// Add the directed edge a -> b. Adding an edge that already exists is a
    /// no-op, the first weight is kept.
    pub fn add_edge(&mut self, a: Node, b: Node, w: Weight) {
        assert!(self.is_valid(a) && self.is_valid(b));
        assert!(w.is_finite() && w >= 0.0, "Invalid edge weight {w}");
        if self.has_directed_edge_unchecked(a, b) {
            return;
        }
        self.nodes[a.0].push(edge(b, w));
    }

    fn has_directed_edge_unchecked(&self, a: Node, b: Node) -> bool {
        self.nodes[a.0].iter().any(|edge| edge.node == b)
    }

    pub fn has_edge(&self, a: Node, b: Node) -> bool {
        if !self.is_valid(a) || !self.is_valid(b) {
            return false;
        }

        self.has_directed_edge_unchecked(a, b)
    }

    /// Return the outgoing edges from n, in insertion order
    pub fn edges(&self, n: Node) -> impl Iterator<Item = &Edge> {
        assert!(self.is_valid(n));
        self.nodes[n.0].iter()
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        (0..self.nodes.len()).map(Node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
