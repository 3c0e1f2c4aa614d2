//! Exhaustive reference answers for the sweep. Enumerates every simple path,
//! so it is only usable on small maps.

use graf_search::{Graph, Node, Weight};

pub struct Reference {
    pub cheapest: Option<Weight>,
    pub fewest_edges: Option<usize>,
}

fn enumerate<L>(
    g: &Graph<L>,
    cur: Node,
    goal: Node,
    cost: Weight,
    on_path: &mut Vec<bool>,
    depth: usize,
    best: &mut Reference,
) {
    if cur == goal {
        best.cheapest = Some(best.cheapest.map_or(cost, |c| c.min(cost)));
        best.fewest_edges = Some(best.fewest_edges.map_or(depth, |d| d.min(depth)));
        return;
    }

    for edge in g.edges(cur) {
        let i = edge.node.index();
        if on_path[i] {
            continue;
        }
        on_path[i] = true;
        enumerate(g, edge.node, goal, cost + edge.weight, on_path, depth + 1, best);
        on_path[i] = false;
    }
}

pub fn reference<L>(g: &Graph<L>, start: Node, goal: Node) -> Reference {
    let mut best = Reference {
        cheapest: None,
        fewest_edges: None,
    };
    let mut on_path = vec![false; g.len()];
    on_path[start.index()] = true;
    enumerate(g, start, goal, 0.0, &mut on_path, 0, &mut best);
    best
}
