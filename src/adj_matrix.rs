use crate::adj_list::AdjList;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, Weight};
use std::fmt;
use tracing::warn;

/// Dense graph over a fixed number of vertices. A weight of `0` means "no edge".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjMatrix {
    num_nodes: usize,
    is_undirected: bool,
    matrix: Vec<Vec<Weight>>,
}

impl AdjMatrix {
    pub fn new(num_nodes: usize, is_undirected: bool) -> Self {
        Self {
            num_nodes,
            is_undirected,
            matrix: vec![vec![0; num_nodes]; num_nodes],
        }
    }

    /// The raw weight grid, one row per source vertex.
    pub fn rows(&self) -> &[Vec<Weight>] {
        &self.matrix
    }

    fn cell_mut(&mut self, u: usize, v: usize) -> Result<&mut Weight> {
        let num_nodes = self.num_nodes;
        self.matrix
            .get_mut(u)
            .and_then(|row| row.get_mut(v))
            .ok_or_else(|| GraphError::node_out_of_range(u, v, num_nodes))
    }
}

impl Graph for AdjMatrix {
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn is_undirected(&self) -> bool {
        self.is_undirected
    }

    // Overwrites any existing weight; storing 0 leaves no edge behind.
    fn store_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        self.check_endpoints(u, v)?;
        *self.cell_mut(u, v)? = weight;
        if self.is_undirected {
            *self.cell_mut(v, u)? = weight;
        }
        Ok(())
    }

    fn clear_edge(&mut self, u: usize, v: usize) -> bool {
        if self.check_endpoints(u, v).is_err() {
            return false;
        }
        let removed = self.has_edge(u, v);
        let undirected = self.is_undirected;
        if let Ok(cell) = self.cell_mut(u, v) {
            *cell = 0;
        }
        if undirected {
            if let Ok(cell) = self.cell_mut(v, u) {
                *cell = 0;
            }
        }
        removed
    }

    fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        self.matrix
            .get(u)
            .and_then(|row| row.get(v))
            .copied()
            .filter(|&weight| weight != 0)
    }

    fn neighbors(&self, u: usize) -> Vec<(usize, Weight)> {
        self.matrix
            .get(u)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &weight)| weight != 0)
                    .map(|(v, &weight)| (v, weight))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl From<&AdjList> for AdjMatrix {
    fn from(list: &AdjList) -> Self {
        let mut matrix = AdjMatrix::new(list.num_nodes(), list.is_undirected());
        for (u, v, weight) in list.edges() {
            if let Err(err) = matrix.store_edge(u, v, weight) {
                warn!(%err, "edge dropped while converting to a matrix");
            }
        }
        matrix
    }
}

/// Renders the grid with aligned columns:
///
/// ```text
/// [[0 1 0]
///  [1 0 2]
///  [0 2 0]]
/// ```
impl fmt::Display for AdjMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matrix.is_empty() {
            return write!(f, "[]");
        }
        let width = self
            .matrix
            .iter()
            .flatten()
            .map(|weight| weight.to_string().len())
            .max()
            .unwrap_or(1);

        write!(f, "[")?;
        for (i, row) in self.matrix.iter().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[")?;
            for (j, weight) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{weight:>width$}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
