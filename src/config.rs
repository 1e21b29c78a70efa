// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Graph construction configuration.
//!
//! This module defines [`GraphConfig`], which selects the labeling mode and
//! the optional hop cap applied by distance partitioning.

use crate::mode::LabelingMode;

/// Configuration for building a skeleton graph.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use stgcn_graph::{GraphConfig, LabelingMode};
///
/// let config = GraphConfig::new()
///     .with_labeling_mode(LabelingMode::Distance)
///     .with_max_hop(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// Strategy used to build the adjacency matrix.
    pub labeling_mode: LabelingMode,
    /// Largest hop distance kept by [`LabelingMode::Distance`].
    /// If `None`, the layers run up to the graph diameter.
    pub max_hop: Option<usize>,
}

impl GraphConfig {
    /// Create a new configuration with default values.
    ///
    /// # Returns
    ///
    /// * A `GraphConfig` using uniform labeling and no hop cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the labeling mode.
    #[must_use]
    pub const fn with_labeling_mode(mut self, mode: LabelingMode) -> Self {
        self.labeling_mode = mode;
        self
    }

    /// Cap distance partitioning at `max_hop` hops.
    ///
    /// Pairs farther apart are left out of every layer.
    ///
    /// # Arguments
    ///
    /// * `max_hop` - Largest kept hop distance.
    #[must_use]
    pub const fn with_max_hop(mut self, max_hop: usize) -> Self {
        self.max_hop = Some(max_hop);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GraphConfig::default();
        assert_eq!(config.labeling_mode, LabelingMode::Uniform);
        assert_eq!(config.max_hop, None);
    }

    #[test]
    fn test_config_builder() {
        let config = GraphConfig::new()
            .with_labeling_mode(LabelingMode::Spatial)
            .with_max_hop(3);
        assert_eq!(config.labeling_mode, LabelingMode::Spatial);
        assert_eq!(config.max_hop, Some(3));
    }
}
