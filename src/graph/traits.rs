//! Abstract graph contracts
//!
//! `LabeledVertex` and `LabeledEdge` describe graph elements. `LabeledGraph`
//! is the read-only capability every backing must provide, and `EditableGraph`
//! adds mutation. Callers written against these traits do not depend on how
//! adjacency is stored.

use super::store::GraphResult;
use super::types::VertexId;

/// A vertex carrying a mutable label
pub trait LabeledVertex {
    type Label;

    fn label(&self) -> &Self::Label;

    /// Replace the label. Identity and position in the graph are unaffected.
    fn set_label(&mut self, label: Self::Label);
}

/// A directed edge carrying a mutable label and fixed endpoints
pub trait LabeledEdge {
    type Label;

    /// Source vertex
    fn from(&self) -> VertexId;

    /// Destination vertex
    fn to(&self) -> VertexId;

    fn label(&self) -> &Self::Label;

    fn set_label(&mut self, label: Self::Label);
}

/// Owned snapshot of vertex handles, taken when the iterator is created
pub type Vertices = std::vec::IntoIter<VertexId>;

/// Read-only graph capability
pub trait LabeledGraph {
    type Vertex: LabeledVertex;
    type Edge: LabeledEdge;

    /// All vertices in insertion order.
    ///
    /// Each call returns a fresh snapshot, so the graph may be mutated while
    /// the returned iterator is consumed. The iterator never reflects such
    /// mutations.
    fn vertex_iter(&self) -> Vertices;

    /// Outgoing edges of `vertex` in insertion order.
    ///
    /// Fails with `NotFound` if `vertex` is not in the graph.
    fn edge_iter(&self, vertex: VertexId) -> GraphResult<impl Iterator<Item = &Self::Edge> + '_>;

    /// The edge from `from` to `to`, if one exists.
    ///
    /// A missing edge between valid vertices is `Ok(None)`. A missing `from`
    /// vertex is `Err(NotFound)`.
    fn get_edge(&self, from: VertexId, to: VertexId) -> GraphResult<Option<&Self::Edge>>;

    fn vertex(&self, id: VertexId) -> Option<&Self::Vertex>;

    fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;
}

/// Graph capability with vertex and edge mutation
pub trait EditableGraph: LabeledGraph {
    /// Create a vertex with no outgoing edges. Always succeeds.
    fn add_vertex(&mut self, label: <Self::Vertex as LabeledVertex>::Label) -> VertexId;

    /// Create the edge `from -> to`, replacing any existing edge for that pair.
    ///
    /// Fails with `NotFound` if `from` is not in the graph. Implementations
    /// may also reject a destination that is not in the graph.
    fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        label: <Self::Edge as LabeledEdge>::Label,
    ) -> GraphResult<&mut Self::Edge>;

    /// Remove `vertex` together with every edge leaving or entering it.
    ///
    /// Removing a vertex that is not in the graph is a no-op returning `None`.
    fn remove_vertex(&mut self, vertex: VertexId) -> Option<Self::Vertex>;

    /// Remove and return the edge `from -> to`.
    ///
    /// A missing edge is `Ok(None)`; a missing `from` vertex is `Err(NotFound)`.
    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<Option<Self::Edge>>;

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Self::Vertex>;

    fn get_edge_mut(
        &mut self,
        from: VertexId,
        to: VertexId,
    ) -> GraphResult<Option<&mut Self::Edge>>;
}
