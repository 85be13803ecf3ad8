use thiserror::Error;

/// Reasons a graph mutation is rejected. A rejected mutation leaves the
/// container unchanged and usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("nodes u ({u}) and v ({v}) must be in the range [0, {num_nodes}); skipping")]
    NodeOutOfRange { u: usize, v: usize, num_nodes: usize },

    #[error("edge {u} -> {v} already exists; skipping")]
    DuplicateEdge { u: usize, v: usize },
}

impl GraphError {
    pub fn node_out_of_range(u: usize, v: usize, num_nodes: usize) -> Self {
        Self::NodeOutOfRange { u, v, num_nodes }
    }

    pub fn duplicate_edge(u: usize, v: usize) -> Self {
        Self::DuplicateEdge { u, v }
    }
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
