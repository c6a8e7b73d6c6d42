//! Command-line interface for the minspan spanning forest tool.
//!
//! Offers a `run` command that reads a line-oriented edge list from a
//! file or stdin, computes a minimum spanning forest, and renders the
//! selected edges with their total cost.

mod commands;

pub use commands::{
    Cli, CliError, Command, EdgeList, RunCommand, parse_edge_list, render_forest, run_cli,
};
