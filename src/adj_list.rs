use crate::adj_matrix::AdjMatrix;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, Weight};
use std::fmt;
use tracing::warn;

/// Sparse graph over a fixed number of vertices. Each vertex keeps its
/// outgoing `(neighbor, weight)` pairs in insertion order, with at most one
/// entry per neighbor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList {
    num_nodes: usize,
    is_undirected: bool,
    adj: Vec<Vec<(usize, Weight)>>,
}

impl AdjList {
    pub fn new(num_nodes: usize, is_undirected: bool) -> Self {
        Self {
            num_nodes,
            is_undirected,
            adj: vec![Vec::new(); num_nodes],
        }
    }

    /// Borrowed neighbor entries of `u`, empty for unknown vertices.
    pub fn entries(&self, u: usize) -> &[(usize, Weight)] {
        self.adj.get(u).map(Vec::as_slice).unwrap_or(&[])
    }

    fn contains(&self, u: usize, v: usize) -> bool {
        self.entries(u).iter().any(|&(neighbor, _)| neighbor == v)
    }

    fn push(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        let num_nodes = self.num_nodes;
        self.adj
            .get_mut(u)
            .ok_or_else(|| GraphError::node_out_of_range(u, v, num_nodes))?
            .push((v, weight));
        Ok(())
    }

    fn retain_without(&mut self, u: usize, v: usize) -> bool {
        let Some(entries) = self.adj.get_mut(u) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|&(neighbor, _)| neighbor != v);
        entries.len() != before
    }
}

impl Graph for AdjList {
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn is_undirected(&self) -> bool {
        self.is_undirected
    }

    fn store_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        self.check_endpoints(u, v)?;
        if self.contains(u, v) {
            return Err(GraphError::duplicate_edge(u, v));
        }
        self.push(u, v, weight)?;
        if self.is_undirected && u != v && !self.contains(v, u) {
            self.push(v, u, weight)?;
        }
        Ok(())
    }

    fn clear_edge(&mut self, u: usize, v: usize) -> bool {
        if self.check_endpoints(u, v).is_err() {
            return false;
        }
        let removed = self.retain_without(u, v);
        if self.is_undirected {
            self.retain_without(v, u);
        }
        removed
    }

    fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        self.entries(u)
            .iter()
            .find(|&&(neighbor, _)| neighbor == v)
            .map(|&(_, weight)| weight)
    }

    fn neighbors(&self, u: usize) -> Vec<(usize, Weight)> {
        self.entries(u).to_vec()
    }
}

impl From<&AdjMatrix> for AdjList {
    fn from(matrix: &AdjMatrix) -> Self {
        let mut list = AdjList::new(matrix.num_nodes(), matrix.is_undirected());
        for (u, v, weight) in matrix.edges() {
            if let Err(err) = list.store_edge(u, v, weight) {
                warn!(%err, "edge dropped while converting to a list");
            }
        }
        list
    }
}

/// One line per vertex, e.g. `1: 0 (w=1), 2 (w=4)`.
impl fmt::Display for AdjList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, entries) in self.adj.iter().enumerate() {
            if u > 0 {
                writeln!(f)?;
            }
            write!(f, "{u}:")?;
            for (i, (v, weight)) in entries.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{v} (w={weight})")?;
            }
        }
        Ok(())
    }
}
