use super::*;
use crate::adjacency::Adjacency;
use crate::error::*;

/// Weights and damping of a PageRank run.
///
/// The adjacency is only borrowed by [`RankEngine::iterate`]; the engine
/// never holds on to it, so a store cannot change under a running iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEngine {
    damping: f64,
    mode: UpdateMode,
    weights: Vec<f64>,
}

impl RankEngine {
    pub fn new(pages: usize, initial_weight: f64, config: &Config) -> Self {
        let damping = config.damping;
        assert!((0.0..=1.0).contains(&damping), "damping={damping}");
        Self {
            damping,
            mode: config.mode,
            weights: vec![initial_weight; pages],
        }
    }

    pub fn pages(&self) -> usize {
        self.weights.len()
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn mode(&self) -> UpdateMode {
        self.mode
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Mutable view for seeding; the length stays fixed.
    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    pub fn weight_of(&self, page: usize) -> Result<f64> {
        check_index(page, self.weights.len())?;
        Ok(self.weights[page])
    }

    pub fn set_weight(&mut self, page: usize, weight: f64) -> Result<()> {
        check_index(page, self.weights.len())?;
        self.weights[page] = weight;
        Ok(())
    }

    /// Runs `cycles` power-iteration steps over `adjacency`.
    ///
    /// Each cycle computes, from the weights as they were before the cycle,
    /// `next[i] = d * sum(weight[j] / out_degree(j)) + (1 - d)` over every
    /// `j != i` linking to `i`, then commits `next` according to the
    /// [`UpdateMode`]. Self-loops never feed their own page, and a page with
    /// no outgoing links feeds nobody.
    ///
    /// Dimensions are checked even when `cycles` is zero.
    pub fn iterate<A: Adjacency>(&mut self, adjacency: &A, cycles: usize) -> Result<Report> {
        let n = self.weights.len();
        if adjacency.pages() != n {
            return Err(Error::DimensionMismatch {
                expected: n,
                got: adjacency.pages(),
            });
        }
        if cycles == 0 {
            return Ok(Report::default());
        }

        let degrees = (0..n)
            .map(|page| adjacency.out_degree(page))
            .collect::<Result<Vec<_>>>()?;
        let dangling: Vec<_> = (0..n).filter(|page| degrees[*page] == 0).collect();
        log::debug!(
            "iterating {cycles} cycles over {n} pages, {} edges, {} dangling",
            adjacency.edge_count(),
            dangling.len()
        );

        for cycle in 0..cycles {
            let mut next = Vec::new();
            next.try_reserve_exact(n)
                .map_err(|_| Error::AllocationFailure { requested: n })?;
            next.resize(n, 0.0);

            for (i, rank) in next.iter_mut().enumerate() {
                for j in 0..n {
                    if i == j || degrees[j] == 0 || !adjacency.get(j, i)? {
                        continue;
                    }
                    *rank += self.weights[j] / degrees[j] as f64;
                }
                *rank = *rank * self.damping + (1.0 - self.damping);
            }

            match self.mode {
                UpdateMode::Accumulate => {
                    for (w, r) in self.weights.iter_mut().zip(next.iter()) {
                        *w += r;
                    }
                }
                UpdateMode::Replace => self.weights = next,
            }
            log::trace!("cycle {cycle}: {:?}", self.weights);
        }

        log::debug!("finished {cycles} cycles");
        Ok(Report { cycles, dangling })
    }

    pub fn debug<'a, A: Adjacency>(&'a self, adjacency: &'a A) -> impl std::fmt::Debug + 'a {
        EngineDebug {
            adjacency,
            engine: self,
        }
    }
}

pub struct EngineDebug<'a, A: Adjacency> {
    adjacency: &'a A,
    engine: &'a RankEngine,
}

impl<A: Adjacency> std::fmt::Debug for EngineDebug<'_, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (page, w) in self.engine.weights.iter().enumerate() {
            match self.adjacency.out_degree(page) {
                Ok(d) => writeln!(f, "{page}: {w:?}, out={d}")?,
                Err(_) => writeln!(f, "{page}: {w:?}, out=?")?,
            }
        }
        Ok(())
    }
}
