// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Adjacency matrix construction algorithms.
//!
//! All matrices use the convention that an edge `(i, j)` sets `A[[j, i]] = 1`:
//! rows are receiving joints and columns are sending joints, so a graph
//! convolution computes `y = A x`.

use std::collections::VecDeque;

use ndarray::{Array1, Array2, Array3, Axis};

use crate::topology::Edge;

/// Build a binary matrix from an edge list.
///
/// # Arguments
///
/// * `link` - Edges `(origin, neighbor)`.
/// * `num_node` - Matrix dimension.
#[must_use]
pub fn edge2mat(link: &[Edge], num_node: usize) -> Array2<f32> {
    let mut a = Array2::zeros((num_node, num_node));
    for &(i, j) in link {
        a[[j, i]] = 1.0;
    }
    a
}

/// Normalize a directed adjacency matrix by its column sums: `A D^-1`.
///
/// Each column holds what one joint sends, so every non-zero column sums to
/// one. Columns summing to zero stay zero.
#[must_use]
pub fn normalize_digraph(a: &Array2<f32>) -> Array2<f32> {
    let degree = a.sum_axis(Axis(0));
    let mut out = a.clone();
    for (mut column, &d) in out.axis_iter_mut(Axis(1)).zip(&degree) {
        if d > 0.0 {
            column /= d;
        }
    }
    out
}

/// Row-normalize a matrix: `D^-1 A` with `D` the diagonal of row sums.
///
/// Rows summing to zero stay zero.
#[must_use]
pub fn normalize_rows(a: &Array2<f32>) -> Array2<f32> {
    let degree = a.sum_axis(Axis(1));
    let mut out = a.clone();
    for (mut row, &d) in out.axis_iter_mut(Axis(0)).zip(&degree) {
        if d > 0.0 {
            row /= d;
        }
    }
    out
}

/// Symmetric normalization `D^-1/2 A D^-1/2` with `D` the diagonal of row sums.
///
/// Rows and columns of zero-degree nodes stay zero.
#[must_use]
pub fn normalize_undigraph(a: &Array2<f32>) -> Array2<f32> {
    scale_symmetric(a, &a.sum_axis(Axis(1)))
}

/// `D^-1/2 M D^-1/2` for the given degree vector.
fn scale_symmetric(m: &Array2<f32>, degree: &Array1<f32>) -> Array2<f32> {
    let inv_sqrt = degree.mapv(|d| if d > 0.0 { d.sqrt().recip() } else { 0.0 });
    let mut out = m.clone();
    for ((i, j), v) in out.indexed_iter_mut() {
        *v *= inv_sqrt[i] * inv_sqrt[j];
    }
    out
}

/// Shortest-path hop distance between every pair of nodes.
///
/// Runs a breadth-first search from each node over `edges`, treated as
/// undirected. Pairs that are unreachable, or farther apart than `max_hop`,
/// are `None`.
#[must_use]
pub fn hop_distance(
    num_node: usize,
    edges: &[Edge],
    max_hop: Option<usize>,
) -> Array2<Option<usize>> {
    let mut adjacency = vec![Vec::new(); num_node];
    for &(i, j) in edges {
        adjacency[i].push(j);
        adjacency[j].push(i);
    }

    let limit = max_hop.unwrap_or(usize::MAX);
    let mut dist = Array2::from_elem((num_node, num_node), None);
    let mut queue = VecDeque::new();

    for source in 0..num_node {
        dist[[source, source]] = Some(0);
        queue.push_back((source, 0));

        while let Some((node, d)) = queue.pop_front() {
            if d == limit {
                continue;
            }
            for &next in &adjacency[node] {
                if dist[[source, next]].is_none() {
                    dist[[source, next]] = Some(d + 1);
                    queue.push_back((next, d + 1));
                }
            }
        }
    }

    dist
}

/// Longest finite entry of a hop distance matrix.
///
/// For an uncapped matrix from [`hop_distance`] this is the graph diameter.
#[must_use]
pub fn max_distance(hop: &Array2<Option<usize>>) -> usize {
    hop.iter().flatten().copied().max().unwrap_or(0)
}

/// Uniform labeling: binary adjacency of self-links and neighbors.
#[must_use]
pub fn uniform_graph(num_node: usize, self_link: &[Edge], neighbor: &[Edge]) -> Array2<f32> {
    edge2mat(&[self_link, neighbor].concat(), num_node)
}

/// Uniform labeling, row-normalized so every row sums to one.
#[must_use]
pub fn uniform_distance_graph(
    num_node: usize,
    self_link: &[Edge],
    neighbor: &[Edge],
) -> Array2<f32> {
    normalize_rows(&uniform_graph(num_node, self_link, neighbor))
}

/// Distance partitioning from a precomputed hop matrix.
///
/// Layer `d` marks exactly the pairs at distance `d` and is row-normalized.
/// `D_max` is the longest distance in `hop`, capped at `max_hop` when given.
///
/// # Returns
///
/// * Array of shape `(D_max + 1, num_node, num_node)`.
#[must_use]
pub fn distance_layers(hop: &Array2<Option<usize>>, max_hop: Option<usize>) -> Array3<f32> {
    let num_node = hop.nrows();
    let mut d_max = max_distance(hop);
    if let Some(max_hop) = max_hop {
        d_max = d_max.min(max_hop);
    }

    let mut layers = Array3::zeros((d_max + 1, num_node, num_node));
    for ((i, j), d) in hop.indexed_iter() {
        if let Some(d) = d.filter(|&d| d <= d_max) {
            layers[[d, j, i]] = 1.0;
        }
    }

    for mut layer in layers.axis_iter_mut(Axis(0)) {
        let normalized = normalize_rows(&layer.to_owned());
        layer.assign(&normalized);
    }

    layers
}

/// Spatial configuration partitioning.
///
/// Layer 0 is the root (self-link) subset, layer 1 the centripetal subset
/// built from inward edges, layer 2 the centrifugal subset built from outward
/// edges. The two directed layers go through [`normalize_digraph`], so a
/// parent splits its weight evenly across its children.
///
/// # Returns
///
/// * Array of shape `(3, num_node, num_node)`.
#[must_use]
pub fn spatial_graph(
    num_node: usize,
    self_link: &[Edge],
    inward: &[Edge],
    outward: &[Edge],
) -> Array3<f32> {
    let identity = edge2mat(self_link, num_node);
    let centripetal = normalize_digraph(&edge2mat(inward, num_node));
    let centrifugal = normalize_digraph(&edge2mat(outward, num_node));

    let mut a = Array3::zeros((3, num_node, num_node));
    a.index_axis_mut(Axis(0), 0).assign(&identity);
    a.index_axis_mut(Axis(0), 1).assign(&centripetal);
    a.index_axis_mut(Axis(0), 2).assign(&centrifugal);
    a
}

/// Symmetric normalized adjacency `D^-1/2 (A + I) D^-1/2`.
///
/// `D` is the degree of `A` alone, without self-links. Isolated nodes get
/// zero rows and columns.
#[must_use]
pub fn dad_graph(num_node: usize, self_link: &[Edge], neighbor: &[Edge]) -> Array2<f32> {
    let degree = edge2mat(neighbor, num_node).sum_axis(Axis(1));
    scale_symmetric(&uniform_graph(num_node, self_link, neighbor), &degree)
}

/// Symmetric normalized Laplacian `D^-1/2 (D - A) D^-1/2`.
///
/// `A` excludes self-links. Isolated nodes get zero rows and columns.
#[must_use]
pub fn dld_graph(num_node: usize, neighbor: &[Edge]) -> Array2<f32> {
    let a = edge2mat(neighbor, num_node);
    let degree = a.sum_axis(Axis(1));
    let laplacian = Array2::from_diag(&degree) - &a;
    scale_symmetric(&laplacian, &degree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;

    const EPS: f32 = 1e-6;

    fn is_symmetric(a: &Array2<f32>) -> bool {
        a.indexed_iter().all(|((i, j), &v)| (v - a[[j, i]]).abs() < EPS)
    }

    /// Path 0 - 1 - 2 plus an isolated node 3.
    fn path_with_isolated() -> Topology {
        Topology::new(4, &[(0, 1), (2, 1)])
    }

    #[test]
    fn test_edge2mat_orientation() {
        let a = edge2mat(&[(0, 1)], 2);
        assert!((a[[1, 0]] - 1.0).abs() < EPS);
        assert!(a[[0, 1]].abs() < EPS);
    }

    #[test]
    fn test_normalize_rows() {
        let a = edge2mat(&[(0, 1), (2, 1)], 3);
        let n = normalize_rows(&a);
        assert!((n[[1, 0]] - 0.5).abs() < EPS);
        assert!((n[[1, 2]] - 0.5).abs() < EPS);
        // Rows with no incoming edges stay zero.
        assert!(n.row(0).sum().abs() < EPS);
    }

    #[test]
    fn test_normalize_digraph_columns() {
        let a = edge2mat(&[(1, 0), (1, 2)], 3);
        let n = normalize_digraph(&a);
        // Node 1 sends to two nodes, each gets half.
        assert!((n[[0, 1]] - 0.5).abs() < EPS);
        assert!((n[[2, 1]] - 0.5).abs() < EPS);
        assert!((n.column(1).sum() - 1.0).abs() < EPS);
        // Columns with no outgoing edges stay zero.
        assert!(n.column(0).sum().abs() < EPS);
        assert!(n.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_normalize_undigraph_zero_degree() {
        let topo = path_with_isolated();
        let n = normalize_undigraph(&edge2mat(topo.neighbor(), topo.num_node()));
        assert!(n.iter().all(|v| v.is_finite()));
        assert!(n.row(3).iter().all(|&v| v == 0.0));
        assert!(n.column(3).iter().all(|&v| v == 0.0));
        // Middle node has degree 2, ends degree 1.
        assert!((n[[1, 0]] - 0.5f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_hop_distance() {
        let topo = path_with_isolated();
        let hop = hop_distance(topo.num_node(), topo.neighbor(), None);
        assert_eq!(hop[[0, 0]], Some(0));
        assert_eq!(hop[[0, 1]], Some(1));
        assert_eq!(hop[[0, 2]], Some(2));
        assert_eq!(hop[[0, 3]], None);
        assert_eq!(hop[[3, 3]], Some(0));

        let capped = hop_distance(topo.num_node(), topo.neighbor(), Some(1));
        assert_eq!(capped[[0, 1]], Some(1));
        assert_eq!(capped[[0, 2]], None);
    }

    #[test]
    fn test_max_distance() {
        let topo = path_with_isolated();
        let hop = hop_distance(topo.num_node(), topo.neighbor(), None);
        assert_eq!(max_distance(&hop), 2);

        // RFingers to either foot's toes.
        let topo = Topology::hdm05();
        let hop = hop_distance(topo.num_node(), topo.neighbor(), None);
        assert_eq!(max_distance(&hop), 12);
    }

    #[test]
    fn test_uniform_distance_rows_sum_to_one() {
        let topo = Topology::hdm05();
        let a = uniform_distance_graph(topo.num_node(), topo.self_link(), topo.neighbor());
        for row in a.rows() {
            assert!((row.sum() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_distance_layers_on_path() {
        let topo = path_with_isolated();
        let hop = hop_distance(topo.num_node(), topo.neighbor(), None);
        let layers = distance_layers(&hop, None);
        assert_eq!(layers.shape(), &[3, 4, 4]);
        assert!((layers[[2, 0, 2]] - 1.0).abs() < EPS);
        assert!((layers[[2, 2, 0]] - 1.0).abs() < EPS);
        // The isolated node only reaches itself.
        assert!((layers[[0, 3, 3]] - 1.0).abs() < EPS);
        assert!(layers.slice(ndarray::s![1.., 3, ..]).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_distance_layers_capped() {
        let topo = path_with_isolated();
        let hop = hop_distance(topo.num_node(), topo.neighbor(), None);

        let capped = distance_layers(&hop, Some(1));
        assert_eq!(capped.shape(), &[2, 4, 4]);
        // The two path ends are two hops apart and fall out.
        assert!(capped[[1, 2, 0]].abs() < EPS);
        assert!((capped[[1, 1, 0]] - 0.5).abs() < EPS);

        // A cap above the diameter changes nothing.
        assert_eq!(distance_layers(&hop, Some(5)), distance_layers(&hop, None));
    }

    #[test]
    fn test_spatial_layers() {
        let topo = path_with_isolated();
        let a = spatial_graph(
            topo.num_node(),
            topo.self_link(),
            topo.inward(),
            topo.outward(),
        );
        assert_eq!(a.shape(), &[3, 4, 4]);
        // Each child sends all of its weight to its single parent.
        assert!((a[[1, 1, 0]] - 1.0).abs() < EPS);
        assert!((a[[1, 1, 2]] - 1.0).abs() < EPS);
        // Node 1 splits its weight between two children.
        assert!((a[[2, 0, 1]] - 0.5).abs() < EPS);
        assert!((a[[2, 2, 1]] - 0.5).abs() < EPS);
        // The isolated node has no directed edges.
        assert!(a.slice(ndarray::s![1.., .., 3]).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_dld_zero_degree() {
        let topo = path_with_isolated();
        let l = dld_graph(topo.num_node(), topo.neighbor());
        assert!(is_symmetric(&l));
        assert!(l.iter().all(|v| v.is_finite()));
        assert!(l.row(3).iter().all(|&v| v == 0.0));
        assert!(l.column(3).iter().all(|&v| v == 0.0));
        assert!((l[[0, 0]] - 1.0).abs() < EPS);
        assert!((l[[1, 1]] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_dad_symmetric() {
        let topo = Topology::hdm05();
        let a = dad_graph(topo.num_node(), topo.self_link(), topo.neighbor());
        assert!(is_symmetric(&a));
        assert!(a.iter().all(|v| v.is_finite()));
        // HeadTop has degree 1, Head degree 2, Neck degree 4.
        assert!((a[[0, 0]] - 1.0).abs() < EPS);
        assert!((a[[0, 1]] - 0.5f32.sqrt()).abs() < EPS);
        assert!((a[[2, 2]] - 0.25).abs() < EPS);
    }

    #[test]
    fn test_dad_zero_degree() {
        let topo = path_with_isolated();
        let a = dad_graph(topo.num_node(), topo.self_link(), topo.neighbor());
        assert!(is_symmetric(&a));
        assert!(a.iter().all(|v| v.is_finite()));
        assert!(a.row(3).iter().all(|&v| v == 0.0));
        assert!(a.column(3).iter().all(|&v| v == 0.0));
        // End nodes have degree 1, the middle node degree 2.
        assert!((a[[0, 0]] - 1.0).abs() < EPS);
        assert!((a[[1, 1]] - 0.5).abs() < EPS);
        assert!((a[[0, 1]] - 0.5f32.sqrt()).abs() < EPS);
    }
}
