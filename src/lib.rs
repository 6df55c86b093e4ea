pub mod error;
pub use self::error::{Error, Result};
pub mod bits;
pub mod index_set;
pub use self::index_set::SortedIndexSet;
pub mod adjacency;
pub use self::adjacency::{Adjacency, DenseAdjacency, SparseAdjacency};

pub mod graph;
pub mod page_rank;
