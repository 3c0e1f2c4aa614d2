use crate::{Graph, Node, NodeSet, Path, Result};

struct Frame {
    node: Node,
    next_edge: usize,
}

/// Depth-first search, returning the first path found.
///
/// Neighbors are tried in adjacency order. A node is never entered twice, even
/// after the branch through it was abandoned, so each node is expanded at most
/// once. The stack of frames is the current path, which keeps deep graphs off
/// the call stack.
#[tracing::instrument(skip_all, fields(start = %start, goal = %goal))]
pub fn depth_first<L>(g: &Graph<L>, start: Node, goal: Node) -> Result<Option<Path>> {
    if let Some(trivial) = g.check_query(start, goal)? {
        return Ok(Some(trivial));
    }

    let mut visited = NodeSet::with_len(g.len());
    let mut stack = vec![Frame {
        node: start,
        next_edge: 0,
    }];
    visited.add(start);

    let mut expanded = 1usize;
    while let Some(top) = stack.last_mut() {
        let child = g
            .edges(top.node)
            .enumerate()
            .skip(top.next_edge)
            .find(|(_, e)| !visited.has(e.node));

        let Some((i, edge)) = child else {
            tracing::trace!(node = %top.node, "backtrack");
            stack.pop();
            continue;
        };
        top.next_edge = i + 1;

        let child = edge.node;
        visited.add(child);
        stack.push(Frame {
            node: child,
            next_edge: 0,
        });
        if child == goal {
            tracing::debug!(expanded, depth = stack.len(), "goal reached");
            return Ok(Some(stack.iter().map(|f| f.node).collect()));
        }
        expanded += 1;
    }

    tracing::debug!(expanded, "search exhausted");
    Ok(None)
}
