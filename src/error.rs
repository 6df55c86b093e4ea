use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A page, bit or linear index at or past its bound.
    #[error("index {index} out of range (bound {bound})")]
    IndexOutOfRange { index: usize, bound: usize },

    /// Growing a buffer failed; the structure is left as it was.
    #[error("failed to allocate room for {requested} more elements")]
    AllocationFailure { requested: usize },

    /// Adjacency and weight vector disagree on the number of pages.
    #[error("dimension mismatch: expected {expected} pages, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_index(index: usize, bound: usize) -> Result<()> {
    if index < bound {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, bound })
    }
}
