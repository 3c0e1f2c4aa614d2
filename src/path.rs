use crate::{Node, NodeMap};

/// Nodes from start to goal, both inclusive.
pub type Path = Vec<Node>;

/// Follow `parents` from `end` back to its root, returning root..=end.
///
/// Every node on the chain except the root must have a parent entry; the root
/// is the first node without one.
pub(crate) fn walk_backwards(end: Node, parents: &NodeMap<Node>) -> Path {
    let mut path = Path::new();
    let mut child = end;
    path.push(child);
    while let Some(&parent) = parents.get(child) {
        path.push(parent);
        child = parent;
    }
    path.reverse();
    path
}

/// Join two search trees that meet across the edge `near -> far`.
///
/// `near_parents` lead from `near` back to the root of the near side and
/// `far_parents` from `far` back to the root of the far side. The result runs
/// from the near root to the far root.
pub(crate) fn splice(
    near: Node,
    near_parents: &NodeMap<Node>,
    far: Node,
    far_parents: &NodeMap<Node>,
) -> Path {
    let mut path = walk_backwards(near, near_parents);
    let mut tail = walk_backwards(far, far_parents);
    tail.reverse();
    path.extend(tail);
    path
}
