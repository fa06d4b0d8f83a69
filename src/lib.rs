//! Labeled Graph
//!
//! A small directed graph library with labeled vertices and labeled edges.
//!
//! # Architecture
//!
//! - `graph::traits`: the `LabeledGraph` (read-only) and `EditableGraph`
//!   (mutating) contracts, plus the `LabeledVertex`/`LabeledEdge` element traits
//! - `graph::store`: `AdjacencyMapGraph`, which maps every vertex to an
//!   insertion-ordered map of destination vertex to edge
//! - `graph::config`: `GraphConfig`, including the destination validation policy
//!
//! Vertices are addressed by `VertexId` handles. A graph holds at most one edge
//! per ordered `(from, to)` pair; adding another replaces it.
//!
//! ## Example Usage
//!
//! ```rust
//! use labeled_graph::graph::{AdjacencyMapGraph, EditableGraph, LabeledEdge, LabeledGraph};
//!
//! let mut graph = AdjacencyMapGraph::new();
//!
//! let a = graph.add_vertex("A");
//! let b = graph.add_vertex("B");
//!
//! graph.add_edge(a, b, 35.0).unwrap();
//!
//! let edge = graph.get_edge(a, b).unwrap().unwrap();
//! assert_eq!(*edge.label(), 35.0);
//!
//! // No edge between valid vertices is not an error
//! assert!(graph.get_edge(b, a).unwrap().is_none());
//!
//! graph.remove_vertex(b);
//! assert_eq!(graph.edge_count(), 0);
//! ```

#![warn(clippy::all)]

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    AdjacencyMapGraph, Edge, EditableGraph, GraphConfig, GraphError, GraphResult, LabeledEdge,
    LabeledGraph, LabeledVertex, TargetPolicy, Vertex, VertexId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
