// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Labeling modes for converting the skeleton into adjacency matrices.
//!
//! Each mode names one partition strategy. The graph convolution layer
//! consumes the resulting matrix (or stack of matrices) as fixed edge weights.

use std::fmt;
use std::str::FromStr;

/// Strategy used to turn the joint graph into a weight matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelingMode {
    /// Uniform labeling - binary adjacency including self-links.
    Uniform,
    /// Distance partitioning* - uniform adjacency, row-normalized.
    UniformDistance,
    /// Distance partitioning - one normalized layer per hop distance.
    Distance,
    /// Spatial configuration - self, centripetal and centrifugal layers.
    Spatial,
    /// Symmetric normalized adjacency `D^-1/2 (A + I) D^-1/2`, `D` the degree of `A`.
    Dad,
    /// Symmetric normalized Laplacian `D^-1/2 (D - A) D^-1/2`.
    Dld,
}

impl LabelingMode {
    /// Every mode, in the order the diagnostic listing prints them.
    pub const ALL: [Self; 6] = [
        Self::Uniform,
        Self::UniformDistance,
        Self::Distance,
        Self::Spatial,
        Self::Dad,
        Self::Dld,
    ];

    /// Returns the tag accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::UniformDistance => "distance*",
            Self::Distance => "distance",
            Self::Spatial => "spatial",
            Self::Dad => "DAD",
            Self::Dld => "DLD",
        }
    }

    /// Returns whether this mode produces a stack of matrices.
    #[must_use]
    pub const fn is_stacked(&self) -> bool {
        matches!(self, Self::Distance | Self::Spatial)
    }

    /// Number of stacked layers, when it does not depend on the graph.
    ///
    /// `None` for [`LabelingMode::Distance`], whose depth is the graph diameter plus one.
    #[must_use]
    pub const fn num_subsets(&self) -> Option<usize> {
        match self {
            Self::Uniform | Self::UniformDistance | Self::Dad | Self::Dld => Some(1),
            Self::Spatial => Some(3),
            Self::Distance => None,
        }
    }
}

impl fmt::Display for LabelingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LabelingMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Self::Uniform),
            "distance*" => Ok(Self::UniformDistance),
            "distance" => Ok(Self::Distance),
            "spatial" => Ok(Self::Spatial),
            "DAD" => Ok(Self::Dad),
            "DLD" => Ok(Self::Dld),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

impl Default for LabelingMode {
    fn default() -> Self {
        Self::Uniform
    }
}

/// Error returned when parsing an invalid labeling mode string.
#[derive(Debug, Clone)]
pub struct ModeParseError(String);

impl fmt::Display for ModeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid labeling mode '{}', expected one of: uniform, distance*, distance, spatial, DAD, DLD",
            self.0
        )
    }
}

impl std::error::Error for ModeParseError {}
