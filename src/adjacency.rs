// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Adjacency matrices produced by the graph builder.

use std::fmt;

use ndarray::{Array2, Array3, Axis};

/// Weight matrix for graph convolution.
///
/// Single-relation modes return one `(N, N)` matrix; partitioned modes return
/// a `(K, N, N)` stack with one matrix per subset.
#[derive(Debug, Clone, PartialEq)]
pub enum Adjacency {
    /// One `(N, N)` matrix.
    Single(Array2<f32>),
    /// `(K, N, N)` stack of matrices.
    Stacked(Array3<f32>),
}

impl Adjacency {
    /// Array shape, `[N, N]` or `[K, N, N]`.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Single(a) => a.shape(),
            Self::Stacked(a) => a.shape(),
        }
    }

    /// Number of stacked subsets `K`; `1` for a single matrix.
    #[must_use]
    pub fn num_subsets(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Stacked(a) => a.len_of(Axis(0)),
        }
    }

    /// Number of joints `N`.
    #[must_use]
    pub fn num_node(&self) -> usize {
        match self {
            Self::Single(a) => a.nrows(),
            Self::Stacked(a) => a.len_of(Axis(1)),
        }
    }

    /// The matrix, if this is a single relation.
    #[must_use]
    pub const fn as_single(&self) -> Option<&Array2<f32>> {
        match self {
            Self::Single(a) => Some(a),
            Self::Stacked(_) => None,
        }
    }

    /// The stack, if this is a partitioned relation.
    #[must_use]
    pub const fn as_stacked(&self) -> Option<&Array3<f32>> {
        match self {
            Self::Single(_) => None,
            Self::Stacked(a) => Some(a),
        }
    }

    /// `(K, N, N)` view of the weights, as consumed by graph convolution.
    ///
    /// A single matrix becomes a stack of depth one.
    #[must_use]
    pub fn to_stacked(&self) -> Array3<f32> {
        match self {
            Self::Single(a) => a.clone().insert_axis(Axis(0)),
            Self::Stacked(a) => a.clone(),
        }
    }
}

impl From<Array2<f32>> for Adjacency {
    fn from(a: Array2<f32>) -> Self {
        Self::Single(a)
    }
}

impl From<Array3<f32>> for Adjacency {
    fn from(a: Array3<f32>) -> Self {
        Self::Stacked(a)
    }
}

/// Prints every element; precision is forwarded to each entry (`{:.3}`).
impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        match self {
            Self::Single(a) => write!(f, "{a:#.precision$}"),
            Self::Stacked(a) => {
                for (k, layer) in a.axis_iter(Axis(0)).enumerate() {
                    if k > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "[{k}]")?;
                    write!(f, "{layer:#.precision$}")?;
                }
                Ok(())
            }
        }
    }
}
