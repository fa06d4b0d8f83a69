//! Vertex implementation for the labeled graph

use super::traits::LabeledVertex;
use super::types::VertexId;
use std::fmt;

/// A vertex in the labeled graph
///
/// Vertices have:
/// - A unique handle, assigned by the owning graph
/// - A single mutable label of any type
///
/// Identity is the handle alone: two vertices carrying equal labels are still
/// distinct, and relabeling a vertex never moves it inside its graph.
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    id: VertexId,
    label: V,
}

impl<V> Vertex<V> {
    /// Vertices are only created by a graph
    pub(crate) fn new(id: VertexId, label: V) -> Self {
        Vertex { id, label }
    }

    /// Handle of this vertex within its graph
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Consume the vertex, keeping its label
    pub fn into_label(self) -> V {
        self.label
    }
}

impl<V> LabeledVertex for Vertex<V> {
    type Label = V;

    fn label(&self) -> &V {
        &self.label
    }

    fn set_label(&mut self, label: V) {
        self.label = label;
    }
}

impl<V: fmt::Display> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label.fmt(f)
    }
}

impl<V> PartialEq for Vertex<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for Vertex<V> {}

impl<V> std::hash::Hash for Vertex<V> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
