use crate::frontier::best_first;
use crate::heuristic::estimate;
use crate::{Graph, Heuristic, Node, Path, Result};

/// Greedy best-first search: always expand the node the heuristic rates as
/// closest to the goal, ignoring the cost paid so far. Not cost optimal.
#[tracing::instrument(skip_all, fields(start = %start, goal = %goal))]
pub fn greedy_best_first<L>(
    g: &Graph<L>,
    start: Node,
    goal: Node,
    heuristic: &dyn Heuristic,
) -> Result<Option<Path>> {
    if let Some(trivial) = g.check_query(start, goal)? {
        return Ok(Some(trivial));
    }

    best_first(g, start, goal, |node, _| estimate(heuristic, node))
}
