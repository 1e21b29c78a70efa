// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::fmt::Write;

use crate::cli::args::InspectArgs;
use crate::cli::logging::set_verbose;
use crate::topology::{Topology, joint_name};
use crate::{Graph, GraphConfig, LabelingMode, Result, VERSION};
use crate::{info, section, verbose};

/// Print the adjacency matrix for the requested labeling modes.
///
/// # Errors
///
/// Returns [`crate::GraphError::InvalidArgument`] if `--mode` is not a known tag.
pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    set_verbose(args.verbose);

    let modes = match &args.mode {
        Some(tag) => vec![tag.parse::<LabelingMode>()?],
        None => LabelingMode::ALL.to_vec(),
    };

    section!("stgcn-graph v{VERSION}");
    for mode in modes {
        let mut config = GraphConfig::new().with_labeling_mode(mode);
        if let Some(max_hop) = args.max_hop {
            config = config.with_max_hop(max_hop);
        }
        let graph = Graph::from_config(config);
        info!("{}", render(&graph, args.precision)?);
    }
    Ok(())
}

/// Print joints and bones of the HDM05 skeleton.
pub fn run_topology() {
    info!("{}", topology_table(Topology::hdm05()));
}

/// Banner line followed by the full matrix of `graph`.
///
/// # Errors
///
/// Returns [`crate::GraphError::IllegalState`] if the graph holds no matrix.
pub fn render(graph: &Graph, precision: usize) -> Result<String> {
    let a = graph.adjacency_matrix()?;
    let mode = graph
        .labeling_mode()
        .map_or("unlabeled", |mode| mode.as_str());

    verbose!("{mode}: shape {:?}", a.shape());
    Ok(format!("{0}{mode}{0}\n{a:.precision$}", "=".repeat(10)))
}

/// One line per joint with its parent, then the root.
#[must_use]
pub fn topology_table(topology: &Topology) -> String {
    let mut out = String::new();
    for node in 0..topology.num_node() {
        let name = joint_name(node).unwrap_or("?");
        let _ = match topology.parent(node) {
            Some(parent) => writeln!(
                out,
                "{node:>2} {name:<10} -> {parent:>2} {}",
                joint_name(parent).unwrap_or("?")
            ),
            None => writeln!(out, "{node:>2} {name:<10} (root)"),
        };
    }
    let _ = write!(
        out,
        "{} joints, {} bones",
        topology.num_node(),
        topology.inward().len()
    );
    out
}
