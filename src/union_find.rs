/// Union-Find (Disjoint Sets) over a fixed universe of element indices
///
/// Weighted quick-union: the root of the smaller tree is attached under the
/// root of the larger one, and `find` compresses every path it walks. Together
/// these keep the amortized cost of each operation near constant.
use crate::error::{PercolationError, Result};

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton elements
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let size = vec![1; n];
        UnionFind {
            parent,
            size,
            components: n,
        }
    }

    /// Number of elements in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked
    pub fn components(&self) -> usize {
        self.components
    }

    fn validate(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(PercolationError::OutOfRange {
                index: x,
                count: self.parent.len(),
            })
        }
    }

    /// Find the root of element x with path compression
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.validate(x)?;

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass points every node on the path straight at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Union two sets containing x and y
    pub fn union(&mut self, x: usize, y: usize) -> Result<()> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(());
        }

        // Union by size
        let (small, large) = if self.size[root_x] < self.size[root_y] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.components -= 1;

        Ok(())
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Size of the set containing x
    pub fn set_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }
}
