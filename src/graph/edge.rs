//! Edge implementation for the labeled graph
//!
//! An edge is directed and identified by its ordered endpoint pair; a graph
//! holds at most one edge per pair.

use super::traits::LabeledEdge;
use super::types::VertexId;
use std::fmt;

/// A directed, labeled edge
///
/// Edges have:
/// - A source vertex (edge goes FROM this vertex)
/// - A destination vertex
/// - A single mutable label
///
/// The endpoints are fixed at creation. To move an edge, remove it and add a
/// new one.
///
/// Equality is structural: two edges are equal when their endpoints and labels
/// are. This differs from `Vertex`, which compares by handle alone. Compare
/// `endpoints()` to ask whether two edges occupy the same slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<E> {
    from: VertexId,
    to: VertexId,
    label: E,
}

impl<E> Edge<E> {
    /// Edges are only created by a graph
    pub(crate) fn new(from: VertexId, to: VertexId, label: E) -> Self {
        Edge { from, to, label }
    }

    /// Both endpoints as `(from, to)`
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }

    /// Check if this edge starts and ends at the same vertex
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// Consume the edge, keeping its label
    pub fn into_label(self) -> E {
        self.label
    }
}

impl<E> LabeledEdge for Edge<E> {
    type Label = E;

    fn from(&self) -> VertexId {
        self.from
    }

    fn to(&self) -> VertexId {
        self.to
    }

    fn label(&self) -> &E {
        &self.label
    }

    fn set_label(&mut self, label: E) {
        self.label = label;
    }
}

/// Renders `<from>-<label>-><to>` using vertex handles
///
/// Use `AdjacencyMapGraph::display_edge` to render vertex labels instead.
impl<E: fmt::Display> fmt::Display for Edge<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}->{}", self.from, self.label, self.to)
    }
}
