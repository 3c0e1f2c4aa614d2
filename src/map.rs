use crate::Node;

/// Dense map keyed by [`Node`], backed by a vector indexed by the node id.
#[derive(Clone, Debug)]
pub struct NodeMap<T> {
    v: Vec<Option<T>>,
}

impl<T> Default for NodeMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::ops::Index<Node> for NodeMap<T> {
    type Output = T;
    fn index(&self, n: Node) -> &T {
        match self.get(n) {
            Some(t) => t,
            None => panic!("Node not in map: {:?}", n),
        }
    }
}

impl<T> NodeMap<T> {
    pub fn new() -> Self {
        Self { v: Vec::new() }
    }

    /// Map with room for every node of a graph with `len` nodes, so inserts
    /// never reallocate.
    pub fn with_len(len: usize) -> Self {
        let mut v = Vec::with_capacity(len);
        v.resize_with(len, || None);
        Self { v }
    }

    /// Insert `t` for `n`, returning the previous value.
    pub fn insert(&mut self, n: Node, t: T) -> Option<T> {
        let i = n.0;
        if i >= self.v.len() {
            self.v.resize_with(i + 1, || None);
        }
        self.v[i].replace(t)
    }

    pub fn has(&self, n: Node) -> bool {
        self.get(n).is_some()
    }

    pub fn get(&self, n: Node) -> Option<&T> {
        self.v.get(n.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, n: Node) -> Option<&mut T> {
        self.v.get_mut(n.0).and_then(Option::as_mut)
    }

    pub fn remove(&mut self, n: Node) -> Option<T> {
        self.v.get_mut(n.0).and_then(Option::take)
    }

    pub fn len(&self) -> usize {
        self.v.iter().filter(|t| t.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.v.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Node, &T)> {
        self.v
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.as_ref().map(|t| (Node(i), t)))
    }
}

impl<T> FromIterator<(Node, T)> for NodeMap<T> {
    fn from_iter<I: IntoIterator<Item = (Node, T)>>(iter: I) -> Self {
        let mut map = NodeMap::new();
        for (n, t) in iter {
            map.insert(n, t);
        }
        map
    }
}
