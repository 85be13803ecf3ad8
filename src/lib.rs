//! Classic data-structure exercises: depth-first walks and path queries over
//! an owned [`BinaryTree`], plus adjacency matrix and adjacency list graphs.

pub mod adj_list;
pub mod adj_matrix;
pub mod binary_tree;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod path_sum;
pub mod traversal;

#[cfg(test)]
mod test_support;

pub use adj_list::AdjList;
pub use adj_matrix::AdjMatrix;
pub use binary_tree::BinaryTree;
pub use error::{GraphError, Result};
pub use graph::{Graph, Weight, DEFAULT_WEIGHT};
pub use traversal::Order;
