use crate::Node;

// TODO: Bitset
/// Per-search visited set, indexed by node id.
#[derive(Clone, Debug, Default)]
pub struct NodeSet {
    v: Vec<bool>,
}

impl NodeSet {
    pub fn new() -> Self {
        Self { v: Vec::new() }
    }

    /// Empty set sized for a graph with `len` nodes.
    pub fn with_len(len: usize) -> Self {
        Self { v: vec![false; len] }
    }

    /// Add `n`, returning true if it was not already present.
    pub fn add(&mut self, n: Node) -> bool {
        let i = n.0;
        if i >= self.v.len() {
            self.v.resize(i + 1, false);
        }
        !std::mem::replace(&mut self.v[i], true)
    }

    pub fn has(&self, n: Node) -> bool {
        self.v.get(n.0).copied().unwrap_or(false)
    }

    pub fn remove(&mut self, n: Node) -> bool {
        match self.v.get_mut(n.0) {
            Some(present) => std::mem::replace(present, false),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.v.iter().filter(|&&b| b).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.v.contains(&true)
    }
}
