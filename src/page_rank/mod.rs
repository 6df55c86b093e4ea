pub mod engine;
pub use self::engine::RankEngine;
pub mod ranked;
pub use self::ranked::{DenseRankedGraph, RankedGraph, SparseRankedGraph};
pub mod ranking;
pub use self::ranking::Ranking;

pub const DEFAULT_DAMPING: f64 = 0.85;

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub mode: UpdateMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            mode: UpdateMode::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// `weight[i] += next[i]`: weights track cumulative rank mass.
    #[default]
    Accumulate,
    /// `weight[i] = next[i]`
    Replace,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub cycles: usize,
    /// Pages without outgoing links.
    pub dangling: Vec<usize>,
}
