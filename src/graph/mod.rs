//! Labeled directed graph
//!
//! This module implements:
//! - Vertices and edges carrying mutable labels of any type
//! - The read-only `LabeledGraph` and mutating `EditableGraph` contracts
//! - `AdjacencyMapGraph`, an insertion-ordered adjacency-map backing

pub mod config;
pub mod edge;
pub mod store;
pub mod traits;
pub mod types;
pub mod vertex;

// Re-export main types
pub use config::{GraphConfig, TargetPolicy};
pub use edge::Edge;
pub use store::{AdjacencyMapGraph, EdgeDisplay, GraphError, GraphResult};
pub use traits::{EditableGraph, LabeledEdge, LabeledGraph, LabeledVertex, Vertices};
pub use types::VertexId;
pub use vertex::Vertex;
