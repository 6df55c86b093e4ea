use super::*;
use crate::index_set::SortedIndexSet;

/// Adjacency keeping only the linear indices of set cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseAdjacency {
    pages: usize,
    entries: SortedIndexSet,
}

impl SparseAdjacency {
    pub fn new(pages: usize) -> Self {
        Self::with_capacity(pages, 0)
    }

    /// `expected_entries` only sizes the initial buffer.
    pub fn with_capacity(pages: usize, expected_entries: usize) -> Self {
        Self {
            pages,
            entries: SortedIndexSet::with_capacity(expected_entries),
        }
    }

    pub fn entries(&self) -> &SortedIndexSet {
        &self.entries
    }
}

impl Adjacency for SparseAdjacency {
    fn pages(&self) -> usize {
        self.pages
    }

    fn get(&self, from: usize, to: usize) -> Result<bool> {
        let ind = linear_index(self.pages, from, to)?;
        Ok(self.entries.contains(ind))
    }

    fn set(&mut self, from: usize, to: usize, present: bool) -> Result<bool> {
        let ind = linear_index(self.pages, from, to)?;
        if present {
            self.entries.insert(ind)
        } else {
            Ok(self.entries.remove(ind))
        }
    }

    fn out_degree(&self, page: usize) -> Result<usize> {
        Ok(self.entries.count_in(row_range(self.pages, page)?))
    }

    fn edge_count(&self) -> usize {
        self.entries.len()
    }
}
