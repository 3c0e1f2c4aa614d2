use crate::path::walk_backwards;
use crate::{Graph, Node, NodeMap, NodeSet, Path, Result};

use std::collections::VecDeque;

/// Breadth-first search for the path with the fewest edges.
///
/// The queue may hold several entries for the same node; whether a node was
/// already expanded is checked when it is popped. Neighbors are queued in
/// adjacency order, so among equally short paths the one through earlier
/// listed neighbors wins. Edge weights are ignored.
#[tracing::instrument(skip_all, fields(start = %start, goal = %goal))]
pub fn breadth_first<L>(g: &Graph<L>, start: Node, goal: Node) -> Result<Option<Path>> {
    if let Some(trivial) = g.check_query(start, goal)? {
        return Ok(Some(trivial));
    }

    let mut queue: VecDeque<(Node, Option<Node>)> = VecDeque::new();
    let mut visited = NodeSet::with_len(g.len());
    let mut parents: NodeMap<Node> = NodeMap::with_len(g.len());

    queue.push_back((start, None));
    let mut expanded = 0usize;
    while let Some((n, parent)) = queue.pop_front() {
        if visited.has(n) {
            continue;
        }
        if let Some(parent) = parent {
            parents.insert(n, parent);
        }
        if n == goal {
            tracing::debug!(expanded, "goal reached");
            return Ok(Some(walk_backwards(goal, &parents)));
        }
        visited.add(n);
        expanded += 1;
        tracing::trace!(node = %n, "expand");
        for edge in g.edges(n) {
            if !visited.has(edge.node) {
                queue.push_back((edge.node, Some(n)));
            }
        }
    }

    tracing::debug!(expanded, "queue exhausted");
    Ok(None)
}
