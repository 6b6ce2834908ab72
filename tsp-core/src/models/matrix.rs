#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

/// A dense symmetric matrix of distances between cities.
#[derive(Clone, Debug, Default)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Creates a matrix from given rows. Rows are expected to form a symmetric square matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Returns the size of the matrix (amount of cities).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns distance between two cities.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.rows[from][to]
    }

    /// Returns all distances from given city.
    #[inline]
    pub fn row(&self, city: usize) -> &[f64] {
        self.rows[city].as_slice()
    }

    /// Sets the distance for both directions.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.rows[from][to] = distance;
        self.rows[to][from] = distance;
    }

    /// Inserts a new city at given index with zero distances to others.
    pub fn insert(&mut self, index: usize) {
        self.rows.iter_mut().for_each(|row| row.insert(index, 0.));
        self.rows.insert(index, vec![0.; self.rows.len() + 1]);
    }

    /// Removes the city at given index and returns its former distances to the remaining cities.
    pub fn remove(&mut self, index: usize) -> Vec<f64> {
        let mut removed = self.rows.remove(index);
        removed.remove(index);
        self.rows.iter_mut().for_each(|row| {
            row.remove(index);
        });

        removed
    }

    /// Removes all distances.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
