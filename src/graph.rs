use crate::{AdjacencyList, Edge, Error, Heuristic, Node, NodeMap, NodeSet, Path, Result, Strategy, Weight};

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone, Copy)]
struct NodeInfo {
    offset: usize,
    len: usize,
}

/// Immutable, labeled graph that the search strategies run on.
///
/// Edges are stored as one jagged array, each node owning the slice
/// `offset..offset + len`, in the order they were added to the
/// [`AdjacencyList`] it was built from. Labels map to dense [`Node`] ids so the
/// searches never hash labels.
#[derive(Debug, Clone)]
pub struct Graph<L = String> {
    node_data: Vec<Edge>,
    node_info: Vec<NodeInfo>,
    labels: Vec<L>,
    index: HashMap<L, Node>,
}

// Impl for converting to jagged array
fn lock_graph<L: Clone + Eq + Hash>(g: &AdjacencyList, labels: Vec<L>) -> Graph<L> {
    let len: usize = g.nodes().map(|n| g.edges(n).count()).sum();
    let mut node_data: Vec<Edge> = Vec::with_capacity(len);
    let mut node_info: Vec<NodeInfo> = Vec::with_capacity(g.len());

    for n in g.nodes() {
        let offset = node_data.len();
        node_data.extend(g.edges(n).copied());
        node_info.push(NodeInfo {
            offset,
            len: node_data.len() - offset,
        });
    }

    let index = labels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.clone(), Node(i)))
        .collect();

    Graph {
        node_data,
        node_info,
        labels,
        index,
    }
}

impl Graph<Node> {
    /// Freeze `g` using the node ids themselves as labels.
    pub fn unlabeled(g: &AdjacencyList) -> Self {
        lock_graph(g, g.nodes().collect())
    }
}

impl<L> Graph<L> {
    pub fn len(&self) -> usize {
        self.node_info.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        (0..self.len()).map(Node)
    }

    pub fn contains(&self, n: Node) -> bool {
        n.0 < self.len()
    }

    /// Fail with [`Error::UnknownNode`] unless `n` belongs to this graph.
    pub(crate) fn check(&self, n: Node) -> Result<()> {
        if self.contains(n) {
            Ok(())
        } else {
            Err(Error::UnknownNode(n.to_string()))
        }
    }

    /// Validate a query. A query with `start == goal` is answered right away
    /// with the single node path, without expanding anything.
    pub(crate) fn check_query(&self, start: Node, goal: Node) -> Result<Option<Path>> {
        self.check(start)?;
        self.check(goal)?;
        Ok((start == goal).then(|| vec![start]))
    }

    /// Return the outgoing edges from n, in adjacency order
    pub fn edges(&self, n: Node) -> impl Iterator<Item = &Edge> {
        let NodeInfo { offset, len } = self.node_info[n.0];
        self.node_data[offset..offset + len].iter()
    }

    pub fn edge_weight(&self, a: Node, b: Node) -> Option<Weight> {
        if !self.contains(a) {
            return None;
        }
        self.edges(a).find(|e| e.node == b).map(|e| e.weight)
    }

    pub fn has_edge(&self, a: Node, b: Node) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// True if every edge a -> b has a matching b -> a. Bidirectional search
    /// only returns walks along real edges on such graphs.
    pub fn is_symmetric(&self) -> bool {
        self.nodes()
            .all(|a| self.edges(a).all(|e| self.has_edge(e.node, a)))
    }

    pub fn label(&self, n: Node) -> &L {
        &self.labels[n.0]
    }

    pub fn labels_of(&self, path: &[Node]) -> Vec<&L> {
        path.iter().map(|&n| self.label(n)).collect()
    }

    /// Sum of the edge weights along `path`, `None` if some step is not an
    /// edge of the graph or the path is empty.
    pub fn path_cost(&self, path: &[Node]) -> Option<Weight> {
        if path.is_empty() {
            return None;
        }
        path.windows(2)
            .try_fold(0.0, |acc, w| Some(acc + self.edge_weight(w[0], w[1])?))
    }

    /// True if `path` is non-empty, follows edges of the graph and never
    /// revisits a node.
    pub fn is_simple_walk(&self, path: &[Node]) -> bool {
        let mut seen = NodeSet::with_len(self.len());
        path.iter().all(|&n| self.contains(n) && seen.add(n)) && self.path_cost(path).is_some()
    }
}

impl<L: Clone + Eq + Hash + Debug> Graph<L> {
    /// Freeze `g`, naming node `i` by `labels[i]`.
    pub fn new(g: &AdjacencyList, labels: Vec<L>) -> Result<Self> {
        if labels.len() != g.len() {
            return Err(Error::malformed(format!(
                "{} labels for {} nodes",
                labels.len(),
                g.len()
            )));
        }
        let mut seen = HashSet::with_capacity(labels.len());
        for label in &labels {
            if !seen.insert(label) {
                return Err(Error::malformed(format!("duplicate node label {label:?}")));
            }
        }
        Ok(lock_graph(g, labels))
    }

    pub fn node(&self, label: &L) -> Result<Node> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownNode(format!("{label:?}")))
    }

    /// Build a heuristic table from `(label, estimate)` pairs.
    pub fn heuristic_table<I>(&self, estimates: I) -> Result<NodeMap<Weight>>
    where
        I: IntoIterator<Item = (L, Weight)>,
    {
        let mut table = NodeMap::with_len(self.len());
        for (label, h) in estimates {
            let n = self.node(&label)?;
            if !h.is_finite() || h < 0.0 {
                return Err(Error::malformed(format!(
                    "invalid heuristic estimate {h} for {label:?}"
                )));
            }
            table.insert(n, h);
        }
        Ok(table)
    }

    /// Run `strategy` between two labeled nodes.
    pub fn find(
        &self,
        strategy: Strategy,
        start: &L,
        goal: &L,
        heuristic: Option<&dyn Heuristic>,
    ) -> Result<Option<Path>> {
        let start = self.node(start)?;
        let goal = self.node(goal)?;
        strategy.search(self, start, goal, heuristic)
    }
}
