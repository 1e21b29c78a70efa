// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Inspect Options:
    --mode, -m <MODE>      Labeling mode (uniform, distance*, distance, spatial, DAD, DLD) [default: all]
    --max-hop <MAX_HOP>    Largest hop distance kept by distance partitioning
    --precision <DIGITS>   Digits printed after the decimal point [default: 4]
    --verbose              Show verbose output

Examples:
    stgcn-graph inspect
    stgcn-graph inspect --mode spatial
    stgcn-graph inspect -m distance --max-hop 3 --precision 2
    stgcn-graph topology"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency matrix of every (or one) labeling mode
    Inspect(InspectArgs),
    /// Print the skeleton joints and bones
    Topology,
}

/// Arguments for the inspect command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Labeling mode to print; all modes when omitted
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Largest hop distance kept by distance partitioning
    #[arg(long)]
    pub max_hop: Option<usize>,

    /// Digits printed after the decimal point
    #[arg(long, default_value_t = 4)]
    pub precision: usize,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}
