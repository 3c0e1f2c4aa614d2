use crate::frontier::best_first;
use crate::heuristic::estimate;
use crate::{Graph, Heuristic, Node, Path, Result};

/// Find the shortest path between two nodes
///
/// Entries are keyed by `f = g + h`, the accumulated cost plus the estimate of
/// the remaining cost. The returned path is the cheapest one when `heuristic`
/// never overestimates and is consistent; with any other heuristic it is just
/// some path. Ties in `f` pop in insertion order.
#[tracing::instrument(skip_all, fields(start = %start, goal = %goal))]
pub fn a_star<L>(
    g: &Graph<L>,
    start: Node,
    goal: Node,
    heuristic: &dyn Heuristic,
) -> Result<Option<Path>> {
    if let Some(trivial) = g.check_query(start, goal)? {
        return Ok(Some(trivial));
    }

    best_first(g, start, goal, |node, cost| {
        Ok(cost + estimate(heuristic, node)?)
    })
}

#[cfg(test)]
mod test {
    use super::a_star;
    use crate::test::{brute_force_cost, diamond, init, init_undirected, nodes, random_graph, Lcg};
    use crate::{uniform_cost, Error, Graph, Node, NodeMap, Weight, Zero};

    /// Exact remaining cost to `goal` scaled by `scale` <= 1, which is both
    /// admissible and consistent. Nodes that cannot reach the goal get a
    /// large estimate so the triangle inequality still holds.
    fn perfect_heuristic<L>(g: &Graph<L>, goal: Node, scale: Weight) -> NodeMap<Weight> {
        g.nodes()
            .map(|n| match brute_force_cost(g, n, goal) {
                Some(c) => (n, c * scale),
                None => (n, 1.0e6),
            })
            .collect()
    }

    #[test]
    fn diamond_zero_heuristic() {
        let g = diamond();
        let path = a_star(&g, Node(0), Node(3), &Zero).unwrap().unwrap();
        assert_eq!(path, nodes(&[0, 1, 2, 3]));
        assert_eq!(g.path_cost(&path), Some(3.0));
    }

    #[test]
    fn start_is_goal() {
        let g = diamond();
        assert_eq!(a_star(&g, Node(0), Node(0), &Zero), Ok(Some(nodes(&[0]))));
    }

    #[test]
    fn unreachable() {
        let g = init_undirected(3, &[(0, 1, 4.0)]);
        assert_eq!(a_star(&g, Node(0), Node(2), &Zero), Ok(None));
    }

    #[test]
    fn missing_estimate() {
        let g = diamond();
        let h: NodeMap<Weight> = [(Node(0), 0.0)].into_iter().collect();
        assert_eq!(
            a_star(&g, Node(0), Node(3), &h),
            Err(Error::MissingHeuristic(Node(1)))
        );
    }

    #[test]
    fn missing_start_estimate() {
        let g = diamond();
        let h: NodeMap<Weight> = NodeMap::new();
        assert_eq!(
            a_star(&g, Node(0), Node(3), &h),
            Err(Error::MissingHeuristic(Node(0)))
        );
    }

    #[test]
    fn overestimate_breaks_optimality() {
        let g = diamond();
        // B and C are claimed to be very far from D
        let h: NodeMap<Weight> = [(Node(0), 0.0), (Node(1), 50.0), (Node(2), 50.0), (Node(3), 0.0)]
            .into_iter()
            .collect();
        let path = a_star(&g, Node(0), Node(3), &h).unwrap().unwrap();
        assert_eq!(path, nodes(&[0, 3]));
    }

    #[test]
    fn heuristic_steers_to_cheapest() {
        let g = init(5, &[(0, 1, 1.0), (0, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0), (1, 4, 5.0)]);
        let h = perfect_heuristic(&g, Node(4), 1.0);
        let path = a_star(&g, Node(0), Node(4), &h).unwrap().unwrap();
        assert_eq!(path, nodes(&[0, 2, 3, 4]));
    }

    #[test]
    fn zero_heuristic_equals_uniform_cost() {
        let mut rng = Lcg::new(1234);
        for round in 0..60 {
            let g = random_graph(&mut rng, 2 + round % 7, round % 3 == 0);
            for s in g.nodes() {
                for t in g.nodes() {
                    let ucs = uniform_cost(&g, s, t).unwrap();
                    let astar = a_star(&g, s, t, &Zero).unwrap();
                    assert_eq!(ucs, astar);
                }
            }
        }
    }

    #[test]
    fn admissible_heuristic_is_optimal() {
        let mut rng = Lcg::new(99);
        for round in 0..60 {
            let g = random_graph(&mut rng, 2 + round % 7, round % 2 == 1);
            for t in g.nodes() {
                for scale in [1.0, 0.5] {
                    let h = perfect_heuristic(&g, t, scale);
                    for s in g.nodes() {
                        let expected = brute_force_cost(&g, s, t);
                        match a_star(&g, s, t, &h).unwrap() {
                            Some(path) => {
                                assert!(g.is_simple_walk(&path));
                                assert_eq!(path.first(), Some(&s));
                                assert_eq!(path.last(), Some(&t));
                                assert_eq!(g.path_cost(&path), expected);
                            }
                            None => assert_eq!(expected, None),
                        }
                    }
                }
            }
        }
    }
}
