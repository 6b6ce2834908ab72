#[cfg(test)]
#[path = "../../tests/unit/algorithms/disjoint_set_test.rs"]
mod disjoint_set_test;

#[derive(Clone, Copy, Debug)]
struct Element {
    parent: Option<usize>,
    size: usize,
    adjacent: [Option<usize>; 2],
}

/// A union-find forest over cities which also records the adjacency of the path fragments
/// assembled by the greedy edge matching.
///
/// Find does not compress paths: union by size keeps trees shallow enough.
pub struct DisjointSetForest {
    elements: Vec<Element>,
}

impl DisjointSetForest {
    /// Creates a forest of singleton sets.
    pub fn new(size: usize) -> Self {
        Self { elements: vec![Element { parent: None, size: 1, adjacent: [None; 2] }; size] }
    }

    /// Returns the root of the set containing the element.
    pub fn find(&self, element: usize) -> usize {
        let mut current = element;
        while let Some(parent) = self.elements[current].parent {
            current = parent;
        }

        current
    }

    /// Merges sets of both elements. Returns false if they already belong to the same set.
    pub fn merge(&mut self, a: usize, b: usize) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }

        let (small, large) =
            if self.elements[root_a].size < self.elements[root_b].size { (root_a, root_b) } else { (root_b, root_a) };

        self.elements[small].parent = Some(large);
        self.elements[large].size += self.elements[small].size;

        true
    }

    /// Records the edge between two elements.
    pub fn link(&mut self, a: usize, b: usize) {
        self.attach(a, b);
        self.attach(b, a);
    }

    /// Returns amount of recorded edges of the element.
    pub fn degree(&self, element: usize) -> usize {
        self.elements[element].adjacent.iter().filter(|adjacent| adjacent.is_some()).count()
    }

    /// Walks recorded edges starting from given element and returns visited elements in order.
    /// The walk stops when it returns to the start or reaches an element without a way forward.
    pub fn walk(&self, start: usize) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.elements.len());
        let (mut previous, mut current) = (None, Some(start));

        while let Some(element) = current {
            path.push(element);

            let next = self.elements[element].adjacent.iter().flatten().copied().find(|&next| Some(next) != previous);
            previous = Some(element);
            current = next.filter(|&next| next != start && path.len() < self.elements.len());
        }

        path
    }

    fn attach(&mut self, element: usize, other: usize) {
        if let Some(slot) = self.elements[element].adjacent.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(other);
        }
    }
}
