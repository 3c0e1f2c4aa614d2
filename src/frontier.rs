use crate::path::walk_backwards;
use crate::{Graph, Node, NodeMap, NodeSet, Path, Result, Weight};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: Weight,
    seq: u64,
    node: Node,
    parent: Option<Node>,
    cost: Weight,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Entry {}

// Reversed so the max-heap pops the lowest priority first, and among equal
// priorities the entry pushed first.
impl Ord for Entry {
    fn cmp(&self, o: &Self) -> Ordering {
        o.priority
            .total_cmp(&self.priority)
            .then_with(|| o.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of search entries with first-in-first-out order among
/// equal priorities.
struct PriorityFrontier {
    queue: BinaryHeap<Entry>,
    next_seq: u64,
}

impl PriorityFrontier {
    fn with_capacity(cap: usize) -> Self {
        Self {
            queue: BinaryHeap::with_capacity(cap),
            next_seq: 0,
        }
    }

    fn push(&mut self, priority: Weight, node: Node, parent: Option<Node>, cost: Weight) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Entry {
            priority,
            seq,
            node,
            parent,
            cost,
        });
    }

    fn pop(&mut self) -> Option<Entry> {
        self.queue.pop()
    }
}

/// Shared loop of uniform-cost, greedy best-first and A* search.
///
/// `priority(node, cost)` gives the key of a frontier entry for `node` reached
/// with accumulated cost `cost`. Stale entries for already expanded nodes are
/// skipped when popped. The parent of a node is fixed the first time it is
/// popped, which is the same path the entry carried.
pub(crate) fn best_first<L>(
    g: &Graph<L>,
    start: Node,
    goal: Node,
    mut priority: impl FnMut(Node, Weight) -> Result<Weight>,
) -> Result<Option<Path>> {
    let mut frontier = PriorityFrontier::with_capacity(g.len());
    let mut visited = NodeSet::with_len(g.len());
    let mut parents: NodeMap<Node> = NodeMap::with_len(g.len());

    frontier.push(priority(start, 0.0)?, start, None, 0.0);

    let mut expanded = 0usize;
    while let Some(Entry {
        node: cur,
        parent,
        cost,
        priority: key,
        ..
    }) = frontier.pop()
    {
        if visited.has(cur) {
            continue;
        }
        if let Some(parent) = parent {
            parents.insert(cur, parent);
        }
        if cur == goal {
            tracing::debug!(expanded, cost, "goal reached");
            return Ok(Some(walk_backwards(goal, &parents)));
        }

        visited.add(cur);
        expanded += 1;
        tracing::trace!(node = %cur, cost, key, "expand");

        for edge in g.edges(cur) {
            if visited.has(edge.node) {
                continue;
            }
            let child_cost = cost + edge.weight;
            frontier.push(
                priority(edge.node, child_cost)?,
                edge.node,
                Some(cur),
                child_cost,
            );
        }
    }

    tracing::debug!(expanded, "frontier exhausted");
    Ok(None)
}
