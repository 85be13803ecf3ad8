//! Shared behaviour of the fixed-size graph containers in [`crate::adj_matrix`]
//! and [`crate::adj_list`].
//!
//! Vertices are the indices `0..num_nodes`. Mutations with an endpoint
//! outside that range are rejected with a [`GraphError`], logged at `warn`,
//! and leave the container untouched.

use crate::error::{GraphError, Result};
use petgraph::dot::Dot;
use petgraph::graph::NodeIndex;
use petgraph::{Directed, EdgeType, Graph as PetGraph, Undirected};
use std::fmt;
use tracing::{debug, info, warn};

pub type Weight = i64;

/// Weight used by [`Graph::add_edge`].
pub const DEFAULT_WEIGHT: Weight = 1;

pub trait Graph: fmt::Display {
    fn num_nodes(&self) -> usize;

    fn is_undirected(&self) -> bool;

    /// Writes the edge `u -> v` (and `v -> u` when undirected) without
    /// logging. Out-of-range endpoints are rejected before anything is written.
    fn store_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<()>;

    /// Clears `u -> v` (and `v -> u` when undirected) without logging,
    /// returning whether an edge was present. Out-of-range endpoints clear nothing.
    fn clear_edge(&mut self, u: usize, v: usize) -> bool;

    /// Weight of `u -> v`, or `None` if there is no such edge.
    fn weight(&self, u: usize, v: usize) -> Option<Weight>;

    /// Outgoing `(neighbor, weight)` pairs of `u`. Empty for unknown vertices.
    fn neighbors(&self, u: usize) -> Vec<(usize, Weight)>;

    fn check_endpoints(&self, u: usize, v: usize) -> Result<()> {
        let num_nodes = self.num_nodes();
        if u < num_nodes && v < num_nodes {
            Ok(())
        } else {
            Err(GraphError::node_out_of_range(u, v, num_nodes))
        }
    }

    /// Adds `u -> v` with weight [`DEFAULT_WEIGHT`].
    fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT)
    }

    fn add_weighted_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        let outcome = self
            .check_endpoints(u, v)
            .and_then(|()| self.store_edge(u, v, weight));
        match &outcome {
            Ok(()) if self.has_edge(u, v) => debug!(u, v, weight, "edge added"),
            // The matrix form stores a zero weight as "no edge".
            Ok(()) => debug!(u, v, weight, "edge cleared by zero weight"),
            Err(err) => warn!(%err, "edge not added"),
        }
        outcome
    }

    /// Removes `u -> v`. Endpoints are validated the same way as for
    /// [`Graph::add_edge`]; removing an absent edge is not an error.
    fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        if let Err(err) = self.check_endpoints(u, v) {
            warn!(%err, "edge not removed");
            return Err(err);
        }
        let removed = self.clear_edge(u, v);
        debug!(u, v, removed, "edge removed");
        Ok(removed)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v).is_some()
    }

    /// All edges as `(u, v, weight)`. Undirected edges are listed once, with `u <= v`.
    fn edges(&self) -> Vec<(usize, usize, Weight)> {
        let mut edges = Vec::new();
        for u in 0..self.num_nodes() {
            for (v, weight) in self.neighbors(u) {
                if !self.is_undirected() || u <= v {
                    edges.push((u, v, weight));
                }
            }
        }
        edges
    }

    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Logs the human-readable rendering.
    fn display(&self) {
        info!("\n{}", self);
    }

    /// Copies the edges into a petgraph graph whose node weights are the
    /// vertex indices.
    fn to_petgraph<Ty: EdgeType>(&self) -> PetGraph<usize, Weight, Ty>
    where
        Self: Sized,
    {
        let edges = self.edges();
        let mut graph = PetGraph::with_capacity(self.num_nodes(), edges.len());
        for index in 0..self.num_nodes() {
            graph.add_node(index);
        }
        for (u, v, weight) in edges {
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), weight);
        }
        graph
    }

    /// Renders the graph in Graphviz DOT format with weights as edge labels.
    fn to_dot(&self) -> String
    where
        Self: Sized,
    {
        if self.is_undirected() {
            format!("{}", Dot::new(&self.to_petgraph::<Undirected>()))
        } else {
            format!("{}", Dot::new(&self.to_petgraph::<Directed>()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adj_list::AdjList;
    use crate::adj_matrix::AdjMatrix;
    use crate::test_support::capture_logs;
    use proptest::prelude::*;

    // Contract checks shared by both containers.
    fn check_undirected_add_remove<G: Graph>(mut graph: G) {
        assert!(graph.add_weighted_edge(0, 2, 7).is_ok());
        assert!(graph.has_edge(0, 2));
        assert!(graph.has_edge(2, 0));
        assert_eq!(graph.weight(2, 0), Some(7));
        assert_eq!(graph.edge_count(), 1);

        assert_eq!(graph.remove_edge(0, 2), Ok(true));
        assert!(!graph.has_edge(0, 2));
        assert!(!graph.has_edge(2, 0));
        assert_eq!(graph.remove_edge(0, 2), Ok(false));
    }

    fn check_directed_is_one_way<G: Graph>(mut graph: G) {
        assert!(graph.add_edge(1, 3).is_ok());
        assert!(graph.has_edge(1, 3));
        assert!(!graph.has_edge(3, 1));
        assert_eq!(graph.weight(1, 3), Some(DEFAULT_WEIGHT));
        assert_eq!(graph.edges(), vec![(1, 3, DEFAULT_WEIGHT)]);
    }

    fn check_out_of_range_is_rejected<G: Graph>(mut graph: G) {
        let before = graph.to_string();
        assert_eq!(graph.add_edge(0, 4), Err(GraphError::node_out_of_range(0, 4, 4)));
        assert_eq!(graph.add_edge(9, 1), Err(GraphError::node_out_of_range(9, 1, 4)));
        assert_eq!(graph.remove_edge(4, 0), Err(GraphError::node_out_of_range(4, 0, 4)));
        assert!(!graph.has_edge(0, 4));
        assert!(!graph.has_edge(9, 1));
        assert!(graph.neighbors(9).is_empty());
        assert_eq!(graph.to_string(), before);

        // Still usable afterwards.
        assert!(graph.add_edge(0, 1).is_ok());
        assert!(graph.has_edge(0, 1));
    }

    fn check_display_does_not_mutate<G: Graph>(mut graph: G) {
        graph.add_weighted_edge(0, 1, 3).unwrap();
        let edges = graph.edges();
        graph.display();
        let _ = graph.to_string();
        assert_eq!(graph.edges(), edges);
    }

    #[test]
    fn test_undirected_add_remove() {
        check_undirected_add_remove(AdjMatrix::new(4, true));
        check_undirected_add_remove(AdjList::new(4, true));
    }

    #[test]
    fn test_directed_is_one_way() {
        check_directed_is_one_way(AdjMatrix::new(4, false));
        check_directed_is_one_way(AdjList::new(4, false));
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        check_out_of_range_is_rejected(AdjMatrix::new(4, true));
        check_out_of_range_is_rejected(AdjList::new(4, false));
    }

    #[test]
    fn test_display_does_not_mutate() {
        check_display_does_not_mutate(AdjMatrix::new(3, true));
        check_display_does_not_mutate(AdjList::new(3, true));
    }

    #[test]
    fn test_zero_weight_is_not_logged_as_added_on_matrix() {
        let logs = capture_logs(|| {
            let mut matrix = AdjMatrix::new(2, true);
            matrix.add_edge(0, 1).unwrap();
            matrix.add_weighted_edge(0, 1, 0).unwrap();
            assert!(!matrix.has_edge(0, 1));
        });
        assert_eq!(logs.matches("edge added").count(), 1);
        assert!(logs.contains("edge cleared by zero weight"));

        // The list keeps zero-weight edges, so this one really was added.
        let logs = capture_logs(|| {
            let mut list = AdjList::new(2, false);
            list.add_weighted_edge(0, 1, 0).unwrap();
        });
        assert!(logs.contains("edge added"));
        assert!(!logs.contains("cleared"));
    }

    #[test]
    fn test_rejected_edge_is_logged_as_warning() {
        let logs = capture_logs(|| {
            let mut list = AdjList::new(2, false);
            assert!(list.add_edge(0, 5).is_err());
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("edge not added"));
    }

    #[test]
    fn test_empty_graph_rejects_everything() {
        let mut graph = AdjMatrix::new(0, true);
        assert!(graph.add_edge(0, 0).is_err());
        assert!(!graph.has_edge(0, 0));
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_to_petgraph_copies_edges() {
        let mut graph = AdjList::new(3, false);
        graph.add_weighted_edge(0, 1, 4).unwrap();
        graph.add_weighted_edge(1, 2, 5).unwrap();

        let pg = graph.to_petgraph::<Directed>();
        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 2);
        let edge = pg.find_edge(NodeIndex::new(1), NodeIndex::new(2)).unwrap();
        assert_eq!(pg[edge], 5);
        assert!(pg.find_edge(NodeIndex::new(2), NodeIndex::new(1)).is_none());
    }

    #[test]
    fn test_to_dot_uses_graph_kind() {
        let mut undirected = AdjMatrix::new(2, true);
        undirected.add_weighted_edge(0, 1, 9).unwrap();
        let dot = undirected.to_dot();
        assert!(dot.starts_with("graph {"));
        assert!(dot.contains("0 -- 1"));
        assert!(dot.contains("label = \"9\""));

        let mut directed = AdjMatrix::new(2, false);
        directed.add_edge(1, 0).unwrap();
        let dot = directed.to_dot();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("1 -> 0"));
    }

    proptest! {
        #[test]
        fn prop_undirected_containers_stay_symmetric(
            ops in proptest::collection::vec((any::<bool>(), 0usize..7, 0usize..7, 1i64..5), 0..40)
        ) {
            let mut matrix = AdjMatrix::new(5, true);
            let mut list = AdjList::new(5, true);
            for (add, u, v, weight) in ops {
                if add {
                    let in_range = matrix.add_weighted_edge(u, v, weight).is_ok();
                    let _ = list.add_weighted_edge(u, v, weight);
                    prop_assert_eq!(in_range, u < 5 && v < 5);
                } else {
                    let _ = matrix.remove_edge(u, v);
                    let _ = list.remove_edge(u, v);
                }
            }
            for u in 0..5 {
                for v in 0..5 {
                    prop_assert_eq!(matrix.has_edge(u, v), matrix.has_edge(v, u));
                    prop_assert_eq!(list.has_edge(u, v), list.has_edge(v, u));
                    // Both containers see the same edge set.
                    prop_assert_eq!(matrix.has_edge(u, v), list.has_edge(u, v));
                }
            }
        }
    }
}
