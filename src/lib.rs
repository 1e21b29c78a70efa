// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # ST-GCN Skeleton Graph
//!
//! Skeleton topology and adjacency matrices for spatio-temporal graph
//! convolutional networks (ST-GCN) used in skeleton-based action recognition.
//!
//! The crate models the 24-joint HDM05 skeleton as a tree and converts it into
//! the weight tensors a graph convolution layer consumes. Each conversion is a
//! *labeling mode*:
//!
//! | Mode | Output | Description |
//! |------|--------|-------------|
//! | `uniform` | `(N, N)` | Binary adjacency including self-links |
//! | `distance*` | `(N, N)` | Uniform adjacency, row-normalized |
//! | `distance` | `(K, N, N)` | One row-normalized layer per hop distance |
//! | `spatial` | `(3, N, N)` | Self, centripetal and centrifugal subsets, column-normalized |
//! | `DAD` | `(N, N)` | `D^-1/2 (A + I) D^-1/2`, `D` the degree of `A` |
//! | `DLD` | `(N, N)` | `D^-1/2 (D - A) D^-1/2` |
//!
//! An edge `(i, j)` sets entry `[j, i]`: rows are receiving joints, columns
//! are sending joints.
//!
//! ## Quick Start
//!
//! ```rust
//! use stgcn_graph::Graph;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut graph = Graph::new("uniform")?;
//!
//!     // HeadTop and Head are connected, HeadTop and RHip are not
//!     let a = graph.adjacency_matrix()?.as_single().unwrap();
//!     assert_eq!(a[[0, 1]], 1.0);
//!     assert_eq!(a[[0, 16]], 0.0);
//!
//!     // Switch to spatial partitioning; the stored matrix is replaced
//!     let a = graph.get_adjacency_matrix(Some("spatial"))?;
//!     assert_eq!(a.shape(), &[3, 24, 24]);
//!
//!     // (K, N, N) tensor for a graph convolution layer
//!     let weights = a.to_stacked();
//!     assert_eq!(weights.shape(), &[3, 24, 24]);
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use stgcn_graph::{Graph, GraphConfig, LabelingMode};
//!
//! let config = GraphConfig::new()
//!     .with_labeling_mode(LabelingMode::Distance)
//!     .with_max_hop(2);
//! let graph = Graph::from_config(config);
//! assert_eq!(graph.adjacency_matrix().unwrap().num_subsets(), 3);
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! # Print every labeling mode
//! stgcn-graph inspect
//!
//! # One mode with two decimals
//! stgcn-graph inspect --mode DAD --precision 2
//!
//! # Joint names and bones
//! stgcn-graph topology
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`graph`] | [`Graph`] with its cached adjacency matrix |
//! | [`topology`] | HDM05 joints and edge sets ([`Topology`]) |
//! | [`mode`] | Labeling modes ([`LabelingMode`]) |
//! | [`tools`] | Matrix construction algorithms |
//! | [`adjacency`] | Output type ([`Adjacency`]) |
//! | [`config`] | [`GraphConfig`] builder |
//! | [`error`] | Error types ([`GraphError`], [`Result`]) |
//! | [`cli`] | Command-line interface and logging macros |

// Modules
pub mod adjacency;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod mode;
pub mod tools;
pub mod topology;

// Re-export main types for convenience
pub use adjacency::Adjacency;
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use mode::{LabelingMode, ModeParseError};
pub use topology::{Edge, NUM_NODE, Topology};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
