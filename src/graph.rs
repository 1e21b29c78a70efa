// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton graph with a cached adjacency matrix.
//!
//! [`Graph`] pairs the shared HDM05 topology with the matrix produced by one
//! labeling mode. The mode is fixed at construction; the matrix is only
//! rebuilt when a new mode is requested explicitly.

use crate::adjacency::Adjacency;
use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::mode::LabelingMode;
use crate::tools;
use crate::topology::{Edge, Topology};
use crate::warn;

/// The skeleton graph consumed by graph convolution layers.
///
/// # Example
///
/// ```rust
/// use stgcn_graph::Graph;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = Graph::new("spatial")?;
/// let a = graph.adjacency_matrix()?;
/// assert_eq!(a.shape(), &[3, 24, 24]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    topology: &'static Topology,
    config: GraphConfig,
    a: Option<Adjacency>,
}

impl Graph {
    /// Build the graph for a labeling mode tag.
    ///
    /// # Arguments
    ///
    /// * `labeling_mode` - One of `uniform`, `distance*`, `distance`, `spatial`, `DAD`, `DLD`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if the tag is not recognized.
    pub fn new(labeling_mode: &str) -> Result<Self> {
        let mode: LabelingMode = labeling_mode.parse()?;
        Ok(Self::from_mode(mode))
    }

    /// Build the graph for a labeling mode.
    #[must_use]
    pub fn from_mode(mode: LabelingMode) -> Self {
        Self::from_config(GraphConfig::new().with_labeling_mode(mode))
    }

    /// Build the graph from a full configuration.
    #[must_use]
    pub fn from_config(config: GraphConfig) -> Self {
        let topology = Topology::hdm05();
        let a = build(topology, config);
        Self {
            topology,
            config,
            a: Some(a),
        }
    }

    /// A graph holding the topology but no adjacency matrix yet.
    ///
    /// [`Graph::adjacency_matrix`] fails until a mode is requested through
    /// [`Graph::get_adjacency_matrix`] or [`Graph::relabel`].
    #[must_use]
    pub fn unlabeled() -> Self {
        Self {
            topology: Topology::hdm05(),
            config: GraphConfig::default(),
            a: None,
        }
    }

    /// The stored adjacency matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::IllegalState`] if no matrix was ever computed.
    pub fn adjacency_matrix(&self) -> Result<&Adjacency> {
        self.a.as_ref().ok_or_else(|| {
            GraphError::IllegalState("adjacency matrix requested before any labeling mode".into())
        })
    }

    /// Return the stored matrix, or rebuild it for a new mode.
    ///
    /// With `None`, behaves like [`Graph::adjacency_matrix`]. With a mode tag,
    /// recomputes the matrix, replaces the stored one and returns it. An
    /// invalid tag leaves the graph unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] for an unknown tag and
    /// [`GraphError::IllegalState`] for `None` before any matrix exists.
    pub fn get_adjacency_matrix(&mut self, labeling_mode: Option<&str>) -> Result<&Adjacency> {
        match labeling_mode {
            None => self.adjacency_matrix(),
            Some(tag) => {
                let mode: LabelingMode = tag.parse()?;
                Ok(self.relabel(mode))
            }
        }
    }

    /// Rebuild the stored matrix for `mode` and return it.
    pub fn relabel(&mut self, mode: LabelingMode) -> &Adjacency {
        self.config = self.config.with_labeling_mode(mode);
        self.a.insert(build(self.topology, self.config))
    }

    /// Mode of the stored matrix, if any.
    #[must_use]
    pub const fn labeling_mode(&self) -> Option<LabelingMode> {
        if self.a.is_some() {
            Some(self.config.labeling_mode)
        } else {
            None
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// The underlying skeleton topology.
    #[must_use]
    pub const fn topology(&self) -> &'static Topology {
        self.topology
    }

    #[must_use]
    pub const fn num_node(&self) -> usize {
        self.topology.num_node()
    }

    #[must_use]
    pub fn self_link(&self) -> &'static [Edge] {
        self.topology.self_link()
    }

    #[must_use]
    pub fn inward(&self) -> &'static [Edge] {
        self.topology.inward()
    }

    #[must_use]
    pub fn outward(&self) -> &'static [Edge] {
        self.topology.outward()
    }

    #[must_use]
    pub fn neighbor(&self) -> &'static [Edge] {
        self.topology.neighbor()
    }
}

/// Dispatch a labeling mode to its matrix construction.
fn build(topology: &Topology, config: GraphConfig) -> Adjacency {
    let n = topology.num_node();
    let self_link = topology.self_link();
    let neighbor = topology.neighbor();

    match config.labeling_mode {
        LabelingMode::Uniform => tools::uniform_graph(n, self_link, neighbor).into(),
        LabelingMode::UniformDistance => {
            tools::uniform_distance_graph(n, self_link, neighbor).into()
        }
        LabelingMode::Distance => {
            let hop = tools::hop_distance(n, neighbor, None);
            if let Some(max_hop) = config.max_hop {
                let diameter = tools::max_distance(&hop);
                if max_hop < diameter {
                    warn!(
                        "max_hop={max_hop} is below the graph diameter ({diameter}), farther joint pairs are dropped"
                    );
                }
            }
            tools::distance_layers(&hop, config.max_hop).into()
        }
        LabelingMode::Spatial => {
            tools::spatial_graph(n, self_link, topology.inward(), topology.outward()).into()
        }
        LabelingMode::Dad => tools::dad_graph(n, self_link, neighbor).into(),
        LabelingMode::Dld => tools::dld_graph(n, neighbor).into(),
    }
}
