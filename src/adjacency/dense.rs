use super::*;
use crate::bits::*;

/// Bit-packed adjacency, one bit per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseAdjacency {
    pages: usize,
    words: Vec<Word>,
}

impl DenseAdjacency {
    /// Panics where [`DenseAdjacency::try_new`] fails.
    pub fn new(pages: usize) -> Self {
        match Self::try_new(pages) {
            Ok(adj) => adj,
            Err(e) => panic!("pages={pages}: {e}"),
        }
    }

    pub fn try_new(pages: usize) -> Result<Self> {
        let cells = pages
            .checked_mul(pages)
            .ok_or(Error::AllocationFailure {
                requested: usize::MAX,
            })?;
        let len = cells.div_ceil(WORD_BITS);
        let mut words = Vec::new();
        words
            .try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailure { requested: len })?;
        words.resize(len, 0);
        Ok(Self { pages, words })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl Adjacency for DenseAdjacency {
    fn pages(&self) -> usize {
        self.pages
    }

    fn get(&self, from: usize, to: usize) -> Result<bool> {
        let ind = linear_index(self.pages, from, to)?;
        Ok(self.words[ind / WORD_BITS] & bit(ind) != 0)
    }

    fn set(&mut self, from: usize, to: usize, present: bool) -> Result<bool> {
        let ind = linear_index(self.pages, from, to)?;
        let word = &mut self.words[ind / WORD_BITS];
        let old = *word;
        if present {
            *word |= bit(ind);
        } else {
            *word &= !bit(ind);
        }
        Ok(old != *word)
    }

    fn out_degree(&self, page: usize) -> Result<usize> {
        let row = row_range(self.pages, page)?;
        count_set_bits_span(&self.words, row.start, row.end)
    }

    fn edge_count(&self) -> usize {
        self.words.iter().map(|w| count_set_bits(*w)).sum()
    }
}

fn bit(ind: usize) -> Word {
    (1 as Word) << (ind % WORD_BITS)
}
