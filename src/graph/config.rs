//! Graph configuration

use serde::{Deserialize, Serialize};

/// How `add_edge` treats a destination vertex that is not in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPolicy {
    /// Reject the edge with `NotFound`
    #[default]
    Strict,
    /// Store the edge anyway, leaving a dangling destination
    Permissive,
}

/// Upper bound applied to `vertex_capacity` before pre-allocating
pub const MAX_VERTEX_CAPACITY_HINT: usize = 1 << 16;

/// Upper bound applied to `edge_capacity` before pre-allocating
pub const MAX_EDGE_CAPACITY_HINT: usize = 1 << 10;

/// Graph configuration
///
/// Capacities are hints. Values above the `MAX_*_CAPACITY_HINT` bounds are
/// clamped, so any parsed configuration is safe to build a graph from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of vertices to pre-allocate room for
    pub vertex_capacity: usize,
    /// Number of outgoing edges to pre-allocate once a vertex gets its first edge
    pub edge_capacity: usize,
    /// Destination validation for new edges
    pub target_policy: TargetPolicy,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: 64,
            edge_capacity: 4,
            target_policy: TargetPolicy::Strict,
        }
    }
}

impl GraphConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// `vertex_capacity` clamped to `MAX_VERTEX_CAPACITY_HINT`
    pub fn vertex_capacity_hint(&self) -> usize {
        self.vertex_capacity.min(MAX_VERTEX_CAPACITY_HINT)
    }

    /// `edge_capacity` clamped to `MAX_EDGE_CAPACITY_HINT`
    pub fn edge_capacity_hint(&self) -> usize {
        self.edge_capacity.min(MAX_EDGE_CAPACITY_HINT)
    }

    pub fn with_target_policy(mut self, policy: TargetPolicy) -> Self {
        self.target_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let config = GraphConfig::default();
        assert_eq!(config.target_policy, TargetPolicy::Strict);
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{"target_policy": "permissive"}"#;
        let config = GraphConfig::from_json(json).unwrap();
        let defaults = GraphConfig::default();

        assert_eq!(config.target_policy, TargetPolicy::Permissive);
        assert_eq!(config.vertex_capacity, defaults.vertex_capacity);
    }

    #[test]
    fn test_from_json_rejects_unknown_policy() {
        assert!(GraphConfig::from_json(r#"{"target_policy": "lenient"}"#).is_err());
    }

    #[test]
    fn test_capacity_hints_are_clamped() {
        let config = GraphConfig {
            vertex_capacity: usize::MAX,
            edge_capacity: 2,
            ..GraphConfig::default()
        };

        assert_eq!(config.vertex_capacity_hint(), MAX_VERTEX_CAPACITY_HINT);
        assert_eq!(config.edge_capacity_hint(), 2);
    }

    #[test]
    fn test_with_target_policy() {
        let config = GraphConfig::default().with_target_policy(TargetPolicy::Permissive);
        assert_eq!(config.target_policy, TargetPolicy::Permissive);
    }
}
