#[cfg(test)]
#[path = "../../tests/unit/algorithms/spanning_tree_test.rs"]
mod spanning_tree_test;

use crate::utils::compare_floats;

/// A rooted spanning tree. Children of a node are linked as siblings in the order they were
/// attached.
#[derive(Clone, Debug)]
pub struct SpanningTree {
    root: usize,
    parent: Vec<Option<usize>>,
    first_child: Vec<Option<usize>>,
    last_child: Vec<Option<usize>>,
    next_sibling: Vec<Option<usize>>,
    children: Vec<usize>,
    weight: f64,
}

impl SpanningTree {
    fn new(size: usize, root: usize) -> Self {
        Self {
            root,
            parent: vec![None; size],
            first_child: vec![None; size],
            last_child: vec![None; size],
            next_sibling: vec![None; size],
            children: vec![0; size],
            weight: 0.,
        }
    }

    /// Returns the root of the tree.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns total weight of tree edges.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the parent of the node, `None` for the root.
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parent[node]
    }

    /// Returns the first attached child of the node.
    pub fn first_child(&self, node: usize) -> Option<usize> {
        self.first_child[node]
    }

    /// Returns amount of tree edges incident to the node.
    pub fn degree(&self, node: usize) -> usize {
        self.children[node] + usize::from(self.parent[node].is_some())
    }

    /// Returns nodes with exactly one incident edge.
    pub fn leaves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.parent.len()).filter(|&node| self.degree(node) == 1)
    }

    /// Returns nodes in pre-order: a node is followed by subtrees of its children in attach order.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.parent.len());
        let mut stack = vec![self.root];
        let mut children = Vec::new();

        while let Some(node) = stack.pop() {
            order.push(node);

            children.clear();
            let mut child = self.first_child[node];
            while let Some(current) = child {
                children.push(current);
                child = self.next_sibling[current];
            }
            stack.extend(children.iter().rev());
        }

        order
    }

    fn attach(&mut self, child: usize, parent: usize, weight: f64) {
        self.parent[child] = Some(parent);
        match self.last_child[parent] {
            Some(last) => self.next_sibling[last] = Some(child),
            None => self.first_child[parent] = Some(child),
        }
        self.last_child[parent] = Some(child);
        self.children[parent] += 1;
        self.weight += weight;
    }
}

/// Builds minimum spanning trees of a complete graph with dense Prim's algorithm in `O(n^2)`.
pub struct SpanningTreeBuilder {
    size: usize,
    root: usize,
}

impl SpanningTreeBuilder {
    /// Creates a builder for a complete graph of given size.
    pub fn new(size: usize, root: usize) -> Self {
        assert!(size == 0 || root < size);
        Self { size, root }
    }

    /// Builds the tree using given edge weight function. The callback is called for every attached
    /// node with its parent and can stop the process by returning false, `None` is returned then.
    pub fn build(
        &self,
        weight: impl Fn(usize, usize) -> f64,
        on_attach: &mut dyn FnMut(usize, usize) -> bool,
    ) -> Option<SpanningTree> {
        let mut tree = SpanningTree::new(self.size, self.root);
        if self.size == 0 {
            return Some(tree);
        }

        let mut pool = (0..self.size).filter(|&node| node != self.root).collect::<Vec<_>>();
        let mut keys = (0..self.size).map(|node| (weight(self.root, node), self.root)).collect::<Vec<_>>();

        while !pool.is_empty() {
            let position = (0..pool.len())
                .min_by(|&a, &b| compare_floats(keys[pool[a]].0, keys[pool[b]].0))
                .unwrap_or_default();
            let child = pool.swap_remove(position);
            let (key, parent) = keys[child];

            tree.attach(child, parent, key);
            if !on_attach(child, parent) {
                return None;
            }

            pool.iter().for_each(|&node| {
                let distance = weight(child, node);
                if distance < keys[node].0 {
                    keys[node] = (distance, child);
                }
            });
        }

        Some(tree)
    }
}
