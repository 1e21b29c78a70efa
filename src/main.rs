// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use clap::Parser;

use stgcn_graph::cli::args::{Cli, Commands};
use stgcn_graph::cli::inspect::{run_inspect, run_topology};
use stgcn_graph::error;

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Inspect(args) => {
            if let Err(err) = run_inspect(args) {
                error!("{err}");
                process::exit(1);
            }
        }
        Commands::Topology => run_topology(),
    }
}
