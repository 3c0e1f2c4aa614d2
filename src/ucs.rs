use crate::frontier::best_first;
use crate::{Graph, Node, Path, Result};

/// Find the cheapest path between two nodes.
///
/// Entries are ordered by accumulated cost, so the first time `goal` is popped
/// its cost is minimal. Equal costs pop in the order they were pushed.
#[tracing::instrument(skip_all, fields(start = %start, goal = %goal))]
pub fn uniform_cost<L>(g: &Graph<L>, start: Node, goal: Node) -> Result<Option<Path>> {
    if let Some(trivial) = g.check_query(start, goal)? {
        return Ok(Some(trivial));
    }

    best_first(g, start, goal, |_, cost| Ok(cost))
}
