//! Ranking the vertices of an `algograph` graph.
//!
//! Vertices become pages in `iter_vertices` order. Undirected edges are
//! stored in both directions.

use crate::adjacency::Adjacency;
use crate::error::{Error, Result};
use crate::page_rank::{Config, DenseRankedGraph, RankedGraph, SparseRankedGraph};
use algograph::graph::*;
use std::collections::HashMap;

/// Two-way mapping between vertex ids and page numbers.
#[derive(Debug, Clone)]
pub struct VertexIndex {
    vertices: Vec<VertexId>,
    pages: HashMap<VertexId, usize, ahash::RandomState>,
}

impl VertexIndex {
    pub fn new<G: QueryableGraph>(graph: &G) -> Self {
        let vertices: Vec<_> = graph.iter_vertices().collect();
        let pages = vertices.iter().enumerate().map(|(i, v)| (*v, i)).collect();
        Self { vertices, pages }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn page(&self, v: &VertexId) -> Option<usize> {
        self.pages.get(v).copied()
    }

    pub fn vertex(&self, page: usize) -> Option<VertexId> {
        self.vertices.get(page).copied()
    }

    /// Pairs every vertex with its weight.
    pub fn weights<'a>(
        &'a self,
        weights: &'a [f64],
    ) -> impl Iterator<Item = (VertexId, f64)> + 'a {
        self.vertices.iter().copied().zip(weights.iter().copied())
    }
}

pub fn dense_from_graph<G>(graph: &G, config: &Config) -> Result<(DenseRankedGraph, VertexIndex)>
where
    G: QueryableGraph + DirectedOrNot,
{
    let index = VertexIndex::new(graph);
    let mut ranked = DenseRankedGraph::dense(index.len(), config);
    copy_edges(graph, &index, &mut ranked)?;
    Ok((ranked, index))
}

pub fn sparse_from_graph<G>(
    graph: &G,
    config: &Config,
) -> Result<(SparseRankedGraph, VertexIndex)>
where
    G: QueryableGraph + DirectedOrNot,
{
    let index = VertexIndex::new(graph);
    let hint = if G::DIRECTED_OR_NOT {
        graph.edge_size()
    } else {
        graph.edge_size() * 2
    };
    let mut ranked = SparseRankedGraph::sparse(index.len(), hint, config);
    copy_edges(graph, &index, &mut ranked)?;
    Ok((ranked, index))
}

fn copy_edges<G, A>(graph: &G, index: &VertexIndex, ranked: &mut RankedGraph<A>) -> Result<()>
where
    G: QueryableGraph + DirectedOrNot,
    A: Adjacency,
{
    let bound = index.len();
    let page = |v: &VertexId| {
        index
            .page(v)
            .ok_or(Error::IndexOutOfRange { index: bound, bound })
    };
    for e in graph.iter_edges() {
        let u = page(&e.source)?;
        let v = page(&e.sink)?;
        ranked.set_edge(u, v, true)?;
        if !G::DIRECTED_OR_NOT {
            ranked.set_edge(v, u, true)?;
        }
    }
    log::debug!(
        "imported {} vertices, {} edges",
        index.len(),
        ranked.adjacency().edge_count()
    );
    Ok(())
}
