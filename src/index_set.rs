use crate::error::{Error, Result};
use std::ops::Range;

/// Strictly increasing, compacted after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedIndexSet {
    indices: Vec<usize>,
}

impl SortedIndexSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.indices.binary_search(&v).is_ok()
    }

    pub fn insert(&mut self, v: usize) -> Result<bool> {
        let Err(pos) = self.indices.binary_search(&v) else {
            return Ok(false);
        };
        self.indices
            .try_reserve(1)
            .map_err(|_| Error::AllocationFailure { requested: 1 })?;
        self.indices.insert(pos, v);
        Ok(true)
    }

    pub fn remove(&mut self, v: usize) -> bool {
        match self.indices.binary_search(&v) {
            Ok(pos) => {
                self.indices.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    pub fn count_in(&self, range: Range<usize>) -> usize {
        if range.start >= range.end {
            return 0;
        }
        let lo = self.indices.partition_point(|x| *x < range.start);
        let hi = self.indices.partition_point(|x| *x < range.end);
        hi - lo
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}

impl<'a> IntoIterator for &'a SortedIndexSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter().copied()
    }
}
