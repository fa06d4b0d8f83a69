//! Adjacency-map graph storage
//!
//! Every vertex owns an insertion-ordered map from destination handle to the
//! edge leading there:
//! - vertices: VertexId -> (Vertex, neighbours)
//! - neighbours: VertexId -> Edge (at most one edge per ordered pair)
//!
//! Both levels keep insertion order, and removals shift later entries down
//! instead of swapping, so iteration order survives deletes.

use super::config::{GraphConfig, TargetPolicy};
use super::edge::Edge;
use super::traits::{EditableGraph, LabeledEdge, LabeledGraph, Vertices};
use super::types::VertexId;
use super::vertex::Vertex;
use indexmap::map::Entry;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    NotFound(VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Insertion-ordered map with the fast integer hasher
type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A vertex together with its outgoing edges
#[derive(Debug, Clone)]
struct Slot<V, E> {
    vertex: Vertex<V>,
    neighbours: FxIndexMap<VertexId, Edge<E>>,
}

/// Directed graph with labeled vertices and edges, stored as nested maps
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `add_vertex` | O(1) amortized |
/// | `add_edge` | O(1) amortized |
/// | `get_edge` | O(1) |
/// | `remove_edge` | O(out-degree) |
/// | `remove_vertex` | O(V + out-degree of every vertex) |
#[derive(Debug, Clone)]
pub struct AdjacencyMapGraph<V, E> {
    vertices: FxIndexMap<VertexId, Slot<V, E>>,
    config: GraphConfig,
    next_vertex_id: u64,
}

impl<V, E> AdjacencyMapGraph<V, E> {
    /// Create a new empty graph with the default configuration
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        let capacity = config.vertex_capacity_hint();
        AdjacencyMapGraph {
            vertices: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            config,
            next_vertex_id: 1,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Walk the whole adjacency table in vertex insertion order
    pub fn adjacency(
        &self,
    ) -> impl Iterator<Item = (&Vertex<V>, indexmap::map::Values<'_, VertexId, Edge<E>>)> + '_ {
        self.vertices
            .values()
            .map(|slot| (&slot.vertex, slot.neighbours.values()))
    }

    /// Number of edges leaving `vertex`
    pub fn out_degree(&self, vertex: VertexId) -> GraphResult<usize> {
        Ok(self.slot(vertex)?.neighbours.len())
    }

    /// Remove every vertex and edge. Handles are not recycled afterwards.
    pub fn clear(&mut self) {
        debug!("Clearing graph with {} vertices", self.vertices.len());
        self.vertices.clear();
    }

    /// Diagnostic rendering of `edge` as `<from>-<label>-><to>` with vertex labels
    pub fn display_edge<'a>(&'a self, edge: &'a Edge<E>) -> EdgeDisplay<'a, V, E> {
        EdgeDisplay { graph: self, edge }
    }

    fn slot(&self, id: VertexId) -> GraphResult<&Slot<V, E>> {
        self.vertices.get(&id).ok_or(GraphError::NotFound(id))
    }

    fn slot_mut(&mut self, id: VertexId) -> GraphResult<&mut Slot<V, E>> {
        self.vertices.get_mut(&id).ok_or(GraphError::NotFound(id))
    }
}

impl<V, E> Default for AdjacencyMapGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> LabeledGraph for AdjacencyMapGraph<V, E> {
    type Vertex = Vertex<V>;
    type Edge = Edge<E>;

    fn vertex_iter(&self) -> Vertices {
        self.vertices
            .keys()
            .copied()
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn edge_iter(&self, vertex: VertexId) -> GraphResult<impl Iterator<Item = &Edge<E>> + '_> {
        Ok(self.slot(vertex)?.neighbours.values())
    }

    fn get_edge(&self, from: VertexId, to: VertexId) -> GraphResult<Option<&Edge<E>>> {
        Ok(self.slot(from)?.neighbours.get(&to))
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.vertices.get(&id).map(|slot| &slot.vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices
            .values()
            .map(|slot| slot.neighbours.len())
            .sum()
    }
}

impl<V, E> EditableGraph for AdjacencyMapGraph<V, E> {
    fn add_vertex(&mut self, label: V) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;

        let slot = Slot {
            vertex: Vertex::new(id, label),
            // Allocated on the first outgoing edge
            neighbours: FxIndexMap::default(),
        };
        self.vertices.insert(id, slot);

        debug!("Added vertex {}", id);
        id
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, label: E) -> GraphResult<&mut Edge<E>> {
        // Validate before touching anything so a failure leaves no trace
        if !self.vertices.contains_key(&from) {
            return Err(GraphError::NotFound(from));
        }
        if !self.vertices.contains_key(&to) {
            match self.config.target_policy {
                TargetPolicy::Strict => return Err(GraphError::NotFound(to)),
                TargetPolicy::Permissive => {
                    trace!("Edge {} -> {} has a dangling destination", from, to);
                }
            }
        }

        let edge_hint = self.config.edge_capacity_hint();
        let neighbours = &mut self.slot_mut(from)?.neighbours;
        if neighbours.capacity() == 0 {
            neighbours.reserve(edge_hint);
        }
        let edge = Edge::new(from, to, label);

        let stored = match neighbours.entry(to) {
            Entry::Occupied(mut occupied) => {
                debug!("Replaced edge {} -> {}", from, to);
                occupied.insert(edge);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => {
                debug!("Added edge {} -> {}", from, to);
                vacant.insert(edge)
            }
        };
        Ok(stored)
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Option<Vertex<V>> {
        let removed = self.vertices.shift_remove(&vertex)?;

        let incoming = self
            .vertices
            .values_mut()
            .filter_map(|slot| slot.neighbours.shift_remove(&vertex))
            .count();

        debug!(
            "Removed vertex {} with {} outgoing and {} incoming edges",
            vertex,
            removed.neighbours.len(),
            incoming
        );
        Some(removed.vertex)
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<Option<Edge<E>>> {
        let removed = self.slot_mut(from)?.neighbours.shift_remove(&to);
        if removed.is_some() {
            debug!("Removed edge {} -> {}", from, to);
        }
        Ok(removed)
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<V>> {
        self.vertices.get_mut(&id).map(|slot| &mut slot.vertex)
    }

    fn get_edge_mut(&mut self, from: VertexId, to: VertexId) -> GraphResult<Option<&mut Edge<E>>> {
        Ok(self.slot_mut(from)?.neighbours.get_mut(&to))
    }
}

impl<V: fmt::Display, E> AdjacencyMapGraph<V, E> {
    /// Vertex label, or the bare handle for a vertex no longer in the graph
    fn fmt_vertex(&self, id: VertexId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.vertex(id) {
            Some(vertex) => write!(f, "{}", vertex),
            None => write!(f, "{}", id),
        }
    }
}

/// Display adapter returned by [`AdjacencyMapGraph::display_edge`]
pub struct EdgeDisplay<'a, V, E> {
    graph: &'a AdjacencyMapGraph<V, E>,
    edge: &'a Edge<E>,
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for EdgeDisplay<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.graph.fmt_vertex(self.edge.from(), f)?;
        write!(f, "-{}->", self.edge.label())?;
        self.graph.fmt_vertex(self.edge.to(), f)
    }
}

/// Renders `{A={B=A-1->B}, B={}}`, one entry per vertex in insertion order
impl<V: fmt::Display, E: fmt::Display> fmt::Display for AdjacencyMapGraph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, slot) in self.vertices.values().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={{", slot.vertex)?;
            for (j, (&to, edge)) in slot.neighbours.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                self.fmt_vertex(to, f)?;
                write!(f, "={}", self.display_edge(edge))?;
            }
            write!(f, "}}")?;
        }
        write!(f, "}}")
    }
}
