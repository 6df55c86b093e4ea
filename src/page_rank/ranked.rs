use super::*;
use crate::adjacency::*;
use crate::error::*;

/// An adjacency store together with the weights ranked over it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGraph<A: Adjacency> {
    adjacency: A,
    engine: RankEngine,
}

pub type DenseRankedGraph = RankedGraph<DenseAdjacency>;
pub type SparseRankedGraph = RankedGraph<SparseAdjacency>;

impl RankedGraph<DenseAdjacency> {
    /// No links yet, every weight 1.0.
    pub fn dense(pages: usize, config: &Config) -> Self {
        Self {
            adjacency: DenseAdjacency::new(pages),
            engine: RankEngine::new(pages, 1.0, config),
        }
    }

    pub fn try_dense(pages: usize, config: &Config) -> Result<Self> {
        Ok(Self {
            adjacency: DenseAdjacency::try_new(pages)?,
            engine: RankEngine::new(pages, 1.0, config),
        })
    }
}

impl RankedGraph<SparseAdjacency> {
    /// No links yet, every weight 0.0. Seed the weights before iterating
    /// unless rank should only come from the `1 - d` term.
    pub fn sparse(pages: usize, expected_entries: usize, config: &Config) -> Self {
        Self {
            adjacency: SparseAdjacency::with_capacity(pages, expected_entries),
            engine: RankEngine::new(pages, 0.0, config),
        }
    }
}

impl<A: Adjacency> RankedGraph<A> {
    pub fn from_parts(adjacency: A, engine: RankEngine) -> Result<Self> {
        if adjacency.pages() != engine.pages() {
            return Err(Error::DimensionMismatch {
                expected: engine.pages(),
                got: adjacency.pages(),
            });
        }
        Ok(Self { adjacency, engine })
    }

    pub fn into_parts(self) -> (A, RankEngine) {
        (self.adjacency, self.engine)
    }

    pub fn pages(&self) -> usize {
        self.engine.pages()
    }

    pub fn adjacency(&self) -> &A {
        &self.adjacency
    }

    pub fn engine(&self) -> &RankEngine {
        &self.engine
    }

    pub fn set_edge(&mut self, from: usize, to: usize, present: bool) -> Result<bool> {
        self.adjacency.set(from, to, present)
    }

    pub fn has_edge(&self, from: usize, to: usize) -> Result<bool> {
        self.adjacency.get(from, to)
    }

    pub fn out_degree(&self, page: usize) -> Result<usize> {
        self.adjacency.out_degree(page)
    }

    pub fn iterate(&mut self, cycles: usize) -> Result<Report> {
        self.engine.iterate(&self.adjacency, cycles)
    }

    pub fn weight_of(&self, page: usize) -> Result<f64> {
        self.engine.weight_of(page)
    }

    pub fn weights(&self) -> &[f64] {
        self.engine.weights()
    }

    pub fn weights_mut(&mut self) -> &mut [f64] {
        self.engine.weights_mut()
    }

    pub fn set_weight(&mut self, page: usize, weight: f64) -> Result<()> {
        self.engine.set_weight(page, weight)
    }

    /// Pages by descending weight.
    pub fn ranking(&self) -> Ranking {
        Ranking::new(self.engine.weights())
    }

    pub fn top(&self, k: usize) -> Vec<(usize, f64)> {
        self.ranking().take(k).collect()
    }

    pub fn debug(&self) -> impl std::fmt::Debug + '_ {
        self.engine.debug(&self.adjacency)
    }
}
