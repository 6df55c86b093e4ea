pub mod dense;
pub use self::dense::DenseAdjacency;
pub mod sparse;
pub use self::sparse::SparseAdjacency;

use crate::error::*;
use std::ops::Range;

/// A boolean `pages × pages` relation.
///
/// Cell `(from, to)` lives at linear index `from * pages + to`, so row `from`
/// holds the outgoing links of `from`.
pub trait Adjacency {
    fn pages(&self) -> usize;

    fn get(&self, from: usize, to: usize) -> Result<bool>;

    /// Sets or clears a cell. Returns whether the cell changed.
    fn set(&mut self, from: usize, to: usize, present: bool) -> Result<bool>;

    /// Number of set cells in row `page`, self-loop included.
    fn out_degree(&self, page: usize) -> Result<usize>;

    fn edge_count(&self) -> usize;
}

/// Linear indices of row `page`. Rows whose end does not fit in `usize`
/// are out of range.
pub(crate) fn row_range(pages: usize, page: usize) -> Result<Range<usize>> {
    check_index(page, pages)?;
    let unreachable = || Error::IndexOutOfRange {
        index: page,
        bound: usize::MAX / pages,
    };
    let start = page.checked_mul(pages).ok_or_else(unreachable)?;
    let end = start.checked_add(pages).ok_or_else(unreachable)?;
    Ok(start..end)
}

pub(crate) fn linear_index(pages: usize, from: usize, to: usize) -> Result<usize> {
    check_index(to, pages)?;
    Ok(row_range(pages, from)?.start + to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::Arbitrary;
    use quickcheck_macros::quickcheck;
    use rand::{prelude::*, rngs::SmallRng};
    use std::collections::HashSet;

    #[derive(Debug, Clone)]
    struct RandomEdges {
        pages: usize,
        edges: Vec<(usize, usize, bool)>,
    }

    impl Arbitrary for RandomEdges {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            const N: usize = 40;

            let pages = usize::arbitrary(g) % N + 1;
            let edges = (0..pages * 3)
                .map(|_| {
                    let from = usize::arbitrary(g) % pages;
                    let to = usize::arbitrary(g) % pages;
                    // mostly insertions, some removals
                    let present = u8::arbitrary(g) % 4 != 0;
                    (from, to, present)
                })
                .collect();
            Self { pages, edges }
        }
    }

    fn build<A: Adjacency>(mut adj: A, edges: &[(usize, usize, bool)]) -> A {
        for (from, to, present) in edges.iter() {
            adj.set(*from, *to, *present).unwrap();
        }
        adj
    }

    fn agree<A: Adjacency, B: Adjacency>(a: &A, b: &B) -> bool {
        let n = a.pages();
        if n != b.pages() || a.edge_count() != b.edge_count() {
            return false;
        }
        for i in 0..n {
            if a.out_degree(i).unwrap() != b.out_degree(i).unwrap() {
                return false;
            }
            for j in 0..n {
                if a.get(i, j).unwrap() != b.get(i, j).unwrap() {
                    return false;
                }
            }
        }
        true
    }

    #[quickcheck]
    fn dense_and_sparse_agree(input: RandomEdges) -> bool {
        let dense = build(DenseAdjacency::new(input.pages), &input.edges);
        let sparse = build(SparseAdjacency::new(input.pages), &input.edges);
        agree(&dense, &sparse)
    }

    #[test]
    fn dense_and_sparse_agree_on_seeded_graphs() {
        let mut rng = SmallRng::seed_from_u64(3407);
        for pages in [1usize, 7, 8, 9, 63, 64, 65, 130] {
            let mut dense = DenseAdjacency::new(pages);
            let mut sparse = SparseAdjacency::with_capacity(pages, pages * 2);
            let mut oracle: HashSet<(usize, usize), ahash::RandomState> = HashSet::default();
            for _ in 0..pages * 4 {
                let from = rng.random_range(0..pages);
                let to = rng.random_range(0..pages);
                let present = rng.random_bool(0.8);
                let changed = if present {
                    oracle.insert((from, to))
                } else {
                    oracle.remove(&(from, to))
                };
                assert_eq!(dense.set(from, to, present), Ok(changed));
                assert_eq!(sparse.set(from, to, present), Ok(changed));
            }
            assert!(agree(&dense, &sparse), "pages={pages}");
            assert_eq!(dense.edge_count(), oracle.len());
            for page in 0..pages {
                let oracle_degree = oracle.iter().filter(|(u, _)| *u == page).count();
                assert_eq!(dense.out_degree(page), Ok(oracle_degree), "page={page}");
            }
        }
    }

    #[test]
    fn rejects_out_of_range_cells() {
        let mut dense = DenseAdjacency::new(3);
        let mut sparse = SparseAdjacency::new(3);
        let err = Err(Error::IndexOutOfRange { index: 3, bound: 3 });
        assert_eq!(dense.get(3, 0), err);
        assert_eq!(sparse.get(0, 3), err);
        assert_eq!(dense.set(0, 3, true).map(|_| false), err);
        assert_eq!(sparse.set(3, 0, true).map(|_| false), err);
        assert_eq!(dense.out_degree(3).map(|_| false), err);
        assert_eq!(sparse.out_degree(3).map(|_| false), err);
        assert_eq!(dense.edge_count(), 0);
        assert_eq!(sparse.edge_count(), 0);
    }

    #[test]
    fn clones_are_independent() {
        let mut dense = DenseAdjacency::new(5);
        let mut sparse = SparseAdjacency::new(5);
        for (u, v) in [(0, 1), (1, 2), (4, 0)] {
            dense.set(u, v, true).unwrap();
            sparse.set(u, v, true).unwrap();
        }
        let dense_orig = dense.clone();
        let sparse_orig = sparse.clone();

        let mut dense_copy = dense.clone();
        let mut sparse_copy = sparse.clone();
        dense_copy.set(0, 1, false).unwrap();
        dense_copy.set(3, 3, true).unwrap();
        sparse_copy.set(1, 2, false).unwrap();
        sparse_copy.set(2, 4, true).unwrap();

        assert_eq!(dense, dense_orig);
        assert_eq!(sparse, sparse_orig);
        assert!(agree(&dense, &sparse));
        assert!(!agree(&dense, &dense_copy));
        assert!(!agree(&sparse, &sparse_copy));
    }
}
