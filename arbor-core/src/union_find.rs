//! Array-backed union-find (disjoint set union) with operation accounting.
//!
//! Kruskal's engine uses one [`UnionFind`] per call to detect cycles. The
//! structure applies union-by-rank and full path compression, and counts
//! every parent traversal, root comparison and pointer write so the caller
//! can report the work performed. The counter is reporting metadata only and
//! never influences which roots are linked.

/// Disjoint-set forest over the dense indices `0..len`.
///
/// # Examples
/// ```
/// use arbor_core::UnionFind;
///
/// let mut sets = UnionFind::new(4);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert_eq!(sets.find(0), sets.find(1));
/// assert_eq!(sets.components(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
    operations: u64,
}

impl UnionFind {
    /// Creates `len` singleton sets, each its own root with rank zero.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
            operations: 0,
        }
    }

    /// Returns the number of tracked elements.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the current number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns the number of primitive operations performed so far.
    #[must_use]
    #[rustfmt::skip]
    pub const fn operations(&self) -> u64 { self.operations }

    /// Zeroes the operation counter without touching the partition.
    pub const fn reset_operations(&mut self) {
        self.operations = 0;
    }

    /// Returns the root of the set containing `node`.
    ///
    /// Every node on the walked path is re-pointed directly at the root.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> usize {
        self.tick();
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
            self.tick();
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            self.tick();
            current = next;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` without mutating the partition when both already share
    /// a root. Otherwise the lower-rank root is attached under the higher-rank
    /// one; on equal ranks `right`'s root goes under `left`'s root and that
    /// root's rank grows by one.
    ///
    /// # Panics
    /// Panics when either index is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        self.tick();
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            self.parent[left_root] = right_root;
        } else {
            self.parent[right_root] = left_root;
            if left_rank == right_rank {
                self.rank[left_root] = left_rank.saturating_add(1);
                self.tick();
            }
        }
        self.tick();
        self.components = self.components.saturating_sub(1);
        true
    }

    const fn tick(&mut self) {
        self.operations = self.operations.saturating_add(1);
    }
}
