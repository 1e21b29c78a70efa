// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! HDM05 skeleton topology.
//!
//! The skeleton is a tree of 24 joints. Edges are stored as `(origin, neighbor)`
//! pairs; inward edges point from a distal joint toward its parent.

use std::sync::LazyLock;

/// Directed edge `(origin, neighbor)` between two joint indices.
pub type Edge = (usize, usize);

/// Number of joints in the HDM05 skeleton.
pub const NUM_NODE: usize = 24;

/// Joint names, indexed by node id.
pub const JOINT_NAMES: [&str; NUM_NODE] = [
    "HeadTop",   // 0
    "Head",      // 1
    "Neck",      // 2
    "RClavicle", // 3
    "RShoulder", // 4
    "RElbow",    // 5
    "RWrist",    // 6
    "RFingers",  // 7
    "LClavicle", // 8
    "LShoulder", // 9
    "LElbow",    // 10
    "LWrist",    // 11
    "LFingers",  // 12
    "Chest",     // 13
    "Belly",     // 14
    "Root",      // 15
    "RHip",      // 16
    "RKnee",     // 17
    "RAnkle",    // 18
    "RToes",     // 19
    "LHip",      // 20
    "LKnee",     // 21
    "LAnkle",    // 22
    "LToes",     // 23
];

/// Child-to-parent edges of the HDM05 skeleton.
pub const INWARD: [Edge; 23] = [
    // head and right arm
    (0, 1),
    (1, 2),
    (3, 2),
    (8, 2),
    (13, 2),
    (4, 3),
    (5, 4),
    (6, 5),
    (7, 6),
    // left arm and torso
    (9, 8),
    (10, 9),
    (11, 10),
    (12, 11),
    (14, 13),
    (15, 14),
    (16, 15),
    (20, 15),
    // legs
    (17, 16),
    (18, 17),
    (19, 18),
    (21, 20),
    (22, 21),
    (23, 22),
];

/// Shared HDM05 topology, built on first access.
pub static HDM05: LazyLock<Topology> = LazyLock::new(|| Topology::new(NUM_NODE, &INWARD));

/// Name of an HDM05 joint, or `None` if the index is out of range.
#[must_use]
pub fn joint_name(index: usize) -> Option<&'static str> {
    JOINT_NAMES.get(index).copied()
}

/// Edge sets of a skeleton graph.
///
/// Only the inward edges are authored; self-links, outward edges and the
/// undirected neighbor list are derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    num_node: usize,
    self_link: Vec<Edge>,
    inward: Vec<Edge>,
    outward: Vec<Edge>,
    neighbor: Vec<Edge>,
}

impl Topology {
    /// Build a topology from its node count and inward edges.
    ///
    /// # Arguments
    ///
    /// * `num_node` - Number of joints.
    /// * `inward` - Child-to-parent edges.
    #[must_use]
    pub fn new(num_node: usize, inward: &[Edge]) -> Self {
        let self_link = (0..num_node).map(|i| (i, i)).collect();
        let inward = inward.to_vec();
        let outward: Vec<Edge> = inward.iter().map(|&(i, j)| (j, i)).collect();
        let neighbor = inward.iter().chain(&outward).copied().collect();

        Self {
            num_node,
            self_link,
            inward,
            outward,
            neighbor,
        }
    }

    /// The process-wide HDM05 skeleton.
    #[must_use]
    pub fn hdm05() -> &'static Self {
        &HDM05
    }

    /// Number of joints.
    #[must_use]
    pub const fn num_node(&self) -> usize {
        self.num_node
    }

    /// `(i, i)` for every joint.
    #[must_use]
    pub fn self_link(&self) -> &[Edge] {
        &self.self_link
    }

    /// Child-to-parent edges.
    #[must_use]
    pub fn inward(&self) -> &[Edge] {
        &self.inward
    }

    /// Parent-to-child edges, the reversal of [`Topology::inward`].
    #[must_use]
    pub fn outward(&self) -> &[Edge] {
        &self.outward
    }

    /// Inward edges followed by outward edges.
    #[must_use]
    pub fn neighbor(&self) -> &[Edge] {
        &self.neighbor
    }

    /// The joint with no parent, if exactly one exists.
    #[must_use]
    pub fn root(&self) -> Option<usize> {
        let mut roots = (0..self.num_node).filter(|&n| self.parent(n).is_none());
        match (roots.next(), roots.next()) {
            (Some(root), None) => Some(root),
            _ => None,
        }
    }

    /// Parent of `node` along the inward edges.
    #[must_use]
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.inward
            .iter()
            .find(|&&(child, _)| child == node)
            .map(|&(_, parent)| parent)
    }

    /// Number of inward hops from `node` to the root.
    ///
    /// Returns `None` when the walk does not terminate within `num_node` steps.
    #[must_use]
    pub fn depth(&self, node: usize) -> Option<usize> {
        let mut current = node;
        for depth in 0..self.num_node {
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return Some(depth),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hdm05_counts() {
        let topo = Topology::hdm05();
        assert_eq!(topo.num_node(), 24);
        assert_eq!(topo.self_link().len(), 24);
        assert_eq!(topo.inward().len(), 23);
        assert_eq!(topo.outward().len(), 23);
        assert_eq!(topo.neighbor().len(), 46);
    }

    #[test]
    fn test_self_link_one_per_node() {
        let topo = Topology::hdm05();
        for (i, &(a, b)) in topo.self_link().iter().enumerate() {
            assert_eq!((a, b), (i, i));
        }
    }

    #[test]
    fn test_outward_reverses_inward() {
        let topo = Topology::hdm05();
        for (k, &(i, j)) in topo.inward().iter().enumerate() {
            assert_eq!(topo.outward()[k], (j, i));
        }
    }

    #[test]
    fn test_neighbor_is_symmetric() {
        let topo = Topology::hdm05();
        for &(i, j) in topo.neighbor() {
            assert!(topo.neighbor().contains(&(j, i)), "missing ({j}, {i})");
        }
    }

    #[test]
    fn test_inward_forms_tree() {
        let topo = Topology::hdm05();
        assert_eq!(topo.root(), Some(2));

        for node in 0..topo.num_node() {
            let outgoing = topo.inward().iter().filter(|&&(c, _)| c == node).count();
            if node == 2 {
                assert_eq!(outgoing, 0);
            } else {
                assert_eq!(outgoing, 1, "{} has {outgoing} parents", JOINT_NAMES[node]);
            }
            assert!(topo.depth(node).is_some(), "cycle through {node}");
        }
    }

    #[test]
    fn test_depths() {
        let topo = Topology::hdm05();
        assert_eq!(topo.depth(2), Some(0));
        assert_eq!(topo.depth(0), Some(2));
        assert_eq!(topo.depth(7), Some(5));
        assert_eq!(topo.depth(19), Some(7));
    }

    #[test]
    fn test_joint_names() {
        assert_eq!(joint_name(0), Some("HeadTop"));
        assert_eq!(joint_name(16), Some("RHip"));
        assert_eq!(joint_name(23), Some("LToes"));
        assert_eq!(joint_name(24), None);
    }

    #[test]
    fn test_cycle_has_no_depth() {
        let topo = Topology::new(2, &[(0, 1), (1, 0)]);
        assert_eq!(topo.depth(0), None);
        assert_eq!(topo.root(), None);
    }
}
