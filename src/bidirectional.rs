use crate::path::splice;
use crate::{Graph, Node, NodeMap, NodeSet, Path, Result};

use std::collections::VecDeque;

/// One direction of a bidirectional search.
struct Side {
    queue: VecDeque<Node>,
    reached: NodeSet,
    parents: NodeMap<Node>,
}

impl Side {
    fn new(root: Node, len: usize) -> Self {
        let mut reached = NodeSet::with_len(len);
        reached.add(root);
        Self {
            queue: VecDeque::from([root]),
            reached,
            parents: NodeMap::with_len(len),
        }
    }
}

/// Expand every node that is queued on `side` when the call starts. Returns
/// `(near, far)` as soon as a node `near` of this side has a neighbor `far`
/// already reached by `other`.
fn expand_level<L>(g: &Graph<L>, side: &mut Side, other: &Side) -> Option<(Node, Node)> {
    for _ in 0..side.queue.len() {
        let Some(n) = side.queue.pop_front() else {
            break;
        };
        tracing::trace!(node = %n, "expand");
        for edge in g.edges(n) {
            let child = edge.node;
            if other.reached.has(child) {
                return Some((n, child));
            }
            if side.reached.add(child) {
                side.parents.insert(child, n);
                side.queue.push_back(child);
            }
        }
    }
    None
}

/// Breadth-first search from both ends at once, meeting in the middle.
///
/// Each round expands the current forward level, then the current backward
/// level. The backward half walks the outgoing edges of the graph as well, so
/// the result is only guaranteed to follow real edges when every edge has a
/// reverse edge (see [`Graph::is_symmetric`]). The path is not guaranteed to be
/// the shortest, in edges or in cost.
#[tracing::instrument(skip_all, fields(start = %start, goal = %goal))]
pub fn bidirectional<L>(g: &Graph<L>, start: Node, goal: Node) -> Result<Option<Path>> {
    if let Some(trivial) = g.check_query(start, goal)? {
        return Ok(Some(trivial));
    }

    let mut forward = Side::new(start, g.len());
    let mut backward = Side::new(goal, g.len());

    let mut rounds = 0usize;
    while !forward.queue.is_empty() || !backward.queue.is_empty() {
        rounds += 1;
        if let Some((near, far)) = expand_level(g, &mut forward, &backward) {
            tracing::debug!(rounds, junction = %far, "frontiers met");
            return Ok(Some(splice(near, &forward.parents, far, &backward.parents)));
        }
        if let Some((near, far)) = expand_level(g, &mut backward, &forward) {
            tracing::debug!(rounds, junction = %near, "frontiers met");
            return Ok(Some(splice(far, &forward.parents, near, &backward.parents)));
        }
    }

    tracing::debug!(rounds, "both frontiers exhausted");
    Ok(None)
}

#[cfg(test)]
mod test {
    use super::bidirectional;
    use crate::test::{diamond, init, init_undirected, nodes, random_graph, Lcg};
    use crate::{breadth_first, Error, Node};

    #[test]
    fn diamond_meets_on_direct_edge() {
        let g = diamond();
        assert_eq!(bidirectional(&g, Node(0), Node(3)), Ok(Some(nodes(&[0, 3]))));
    }

    #[test]
    fn chain_meets_in_the_middle() {
        let g = init_undirected(
            6,
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0), (4, 5, 1.0)],
        );
        assert_eq!(
            bidirectional(&g, Node(0), Node(5)),
            Ok(Some(nodes(&[0, 1, 2, 3, 4, 5])))
        );
        assert_eq!(
            bidirectional(&g, Node(5), Node(0)),
            Ok(Some(nodes(&[5, 4, 3, 2, 1, 0])))
        );
    }

    #[test]
    fn match_found_by_backward_side() {
        // Forward reaches 1 in the first round, then the backward expansion of
        // 2 finds it
        let g = init_undirected(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        assert_eq!(bidirectional(&g, Node(0), Node(2)), Ok(Some(nodes(&[0, 1, 2]))));
    }

    #[test]
    fn start_is_goal() {
        let g = diamond();
        assert_eq!(bidirectional(&g, Node(2), Node(2)), Ok(Some(nodes(&[2]))));
    }

    #[test]
    fn isolated_goal() {
        let g = init_undirected(4, &[(0, 1, 1.0), (1, 2, 1.0)]);
        assert_eq!(bidirectional(&g, Node(0), Node(3)), Ok(None));
        assert_eq!(bidirectional(&g, Node(3), Node(0)), Ok(None));
    }

    #[test]
    fn unknown_node() {
        let g = diamond();
        assert!(matches!(
            bidirectional(&g, Node(0), Node(4)),
            Err(Error::UnknownNode(_))
        ));
    }

    #[test]
    fn directed_chain() {
        // The goal has no outgoing edges, so only the forward side moves
        let g = init(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
        assert_eq!(bidirectional(&g, Node(0), Node(2)), Ok(Some(nodes(&[0, 1, 2]))));
    }

    #[test]
    fn asymmetric_graph_can_leave_real_edges() {
        // 0 -> 1 <- 2: the backward side steps 2 -> 1 and meets the forward
        // side, but there is no edge 1 -> 2
        let g = init(3, &[(0, 1, 1.0), (2, 1, 1.0)]);
        assert!(!g.is_symmetric());
        let path = bidirectional(&g, Node(0), Node(2)).unwrap().unwrap();
        assert_eq!(path, nodes(&[0, 1, 2]));
        assert!(!g.is_simple_walk(&path));
    }

    #[test]
    fn symmetric_graphs_give_simple_walks() {
        let mut rng = Lcg::new(3);
        for round in 0..60 {
            let g = random_graph(&mut rng, 2 + round % 7, false);
            assert!(g.is_symmetric());
            for s in g.nodes() {
                for t in g.nodes() {
                    let found = bidirectional(&g, s, t).unwrap();
                    let reachable = breadth_first(&g, s, t).unwrap().is_some();
                    match found {
                        Some(path) => {
                            assert!(g.is_simple_walk(&path), "{path:?}");
                            assert_eq!(path.first(), Some(&s));
                            assert_eq!(path.last(), Some(&t));
                        }
                        None => assert!(!reachable),
                    }
                }
            }
        }
    }
}
