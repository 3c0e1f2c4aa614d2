use crate::{Error, Node, NodeMap, Result, Weight};

/// Estimated remaining cost from a node to the goal of the current search.
///
/// Estimates must be non-negative. A* only returns a cheapest path when the
/// estimates never overestimate and are consistent across edges; nothing here
/// checks that.
pub trait Heuristic {
    /// `None` means the node has no estimate, which the heuristic-guided
    /// strategies report as [`Error::MissingHeuristic`].
    fn estimate(&self, node: Node) -> Option<Weight>;
}

/// Estimates every node as zero. A* with this heuristic behaves like
/// uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _node: Node) -> Option<Weight> {
        Some(0.0)
    }
}

/// A heuristic table, usually built with [`crate::Graph::heuristic_table`].
impl Heuristic for NodeMap<Weight> {
    fn estimate(&self, node: Node) -> Option<Weight> {
        self.get(node).copied()
    }
}

impl<F> Heuristic for F
where
    F: Fn(Node) -> Option<Weight>,
{
    fn estimate(&self, node: Node) -> Option<Weight> {
        self(node)
    }
}

pub(crate) fn estimate(heuristic: &dyn Heuristic, node: Node) -> Result<Weight> {
    heuristic
        .estimate(node)
        .ok_or(Error::MissingHeuristic(node))
}

#[cfg(test)]
mod test {
    use super::estimate;
    use crate::{Error, Heuristic, Node, NodeMap, Zero};

    #[test]
    fn table_lookup() {
        let table: NodeMap<f32> = [(Node(0), 4.0)].into_iter().collect();
        assert_eq!(table.estimate(Node(0)), Some(4.0));
        assert_eq!(estimate(&table, Node(1)), Err(Error::MissingHeuristic(Node(1))));
    }

    #[test]
    fn zero_and_closure() {
        assert_eq!(Zero.estimate(Node(12)), Some(0.0));
        let h = |n: Node| Some(n.index() as f32 * 2.0);
        assert_eq!(estimate(&h, Node(3)), Ok(6.0));
    }
}
