//! Command implementations and edge list parsing for the minspan CLI.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use minspan_core::{Edge, GraphError, SpanningForest, minimum_spanning_forest};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "minspan", about = "Compute minimum spanning forests over edge lists.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning forest of an edge list.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to the edge list, or `-` to read stdin. Each line declares a
    /// vertex (one token) or an edge (`u v weight`); `#` starts a
    /// comment.
    pub path: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading from the input stream failed mid-parse.
    #[error("failed to read input: {source}")]
    Read {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A line was neither a vertex declaration nor an edge.
    #[error("line {line}: expected a vertex or `u v weight`, found {tokens} tokens")]
    MalformedLine {
        /// One-based line number of the offending record.
        line: usize,
        /// Number of whitespace-separated tokens on the line.
        tokens: usize,
    },
    /// An edge weight token did not parse as a number.
    #[error("line {line}: `{token}` is not a valid weight")]
    InvalidWeight {
        /// One-based line number of the offending record.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },
    /// The core computation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A parsed edge list: vertices in first-mention order plus the edges.
///
/// Vertices are collected from bare declarations and from edge
/// endpoints alike, with repeated mentions ignored at this layer; the
/// core's strict duplicate check only sees each identifier once.
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    /// Vertices in first-mention order.
    pub vertices: Vec<String>,
    /// Edges in input order.
    pub edges: Vec<Edge<String>>,
}

impl EdgeList {
    fn mention(&mut self, seen: &mut HashSet<String>, vertex: &str) {
        if seen.insert(vertex.to_owned()) {
            self.vertices.push(vertex.to_owned());
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing, or the core computation
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use minspan_cli::cli::{Cli, Command, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a b 1.0\nb c 2.0\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///     }),
/// };
/// let forest = run_cli(cli)?;
/// assert!(forest.is_tree());
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<SpanningForest<String>, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(&run)
        }
    }
}

#[instrument(name = "cli.execute", err, skip(command), fields(path = field::Empty))]
pub(super) fn run_command(command: &RunCommand) -> Result<SpanningForest<String>, CliError> {
    let span = Span::current();
    span.record("path", field::display(command.path.display()));

    let edge_list = if command.path.as_os_str() == "-" {
        let stdin = io::stdin();
        parse_edge_list(stdin.lock())?
    } else {
        parse_edge_list(open_reader(&command.path)?)?
    };

    let forest = minimum_spanning_forest(edge_list.vertices, &edge_list.edges)?;
    info!(
        selected = forest.edges().len(),
        components = forest.component_count(),
        total_cost = forest.total_weight(),
        "spanning forest computed"
    );
    Ok(forest)
}

fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Parses a line-oriented edge list.
///
/// One record per line: a single token declares a vertex, three tokens
/// `u v weight` declare an edge. Blank lines are skipped and `#` starts
/// a comment. Edge endpoints register their vertices implicitly, so a
/// plain edge list works without declarations; bare tokens exist for
/// isolated vertices.
///
/// # Errors
/// Returns [`CliError`] when reading fails, a line has an unsupported
/// token count, or a weight does not parse.
pub fn parse_edge_list(reader: impl BufRead) -> Result<EdgeList, CliError> {
    let mut list = EdgeList::default();
    let mut seen = HashSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Read { source })?;
        let number = index + 1;
        let record = line.split('#').next().unwrap_or("");
        let tokens: Vec<&str> = record.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            [vertex] => list.mention(&mut seen, vertex),
            [source, target, weight] => {
                let weight: f64 =
                    weight.parse().map_err(|_| CliError::InvalidWeight {
                        line: number,
                        token: (*weight).to_owned(),
                    })?;
                list.mention(&mut seen, source);
                list.mention(&mut seen, target);
                list.edges
                    .push(Edge::new((*source).to_owned(), (*target).to_owned(), weight));
            }
            other => {
                return Err(CliError::MalformedLine {
                    line: number,
                    tokens: other.len(),
                });
            }
        }
    }

    Ok(list)
}

/// Renders `forest` to `writer` as one line per selected edge followed
/// by the total cost and component count.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use minspan_cli::cli::render_forest;
/// # use minspan_core::{Edge, minimum_spanning_forest};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let forest = minimum_spanning_forest(["a", "b"], &[Edge::new("a", "b", 1.5)])?;
/// let mut buffer = Cursor::new(Vec::new());
/// render_forest(&forest, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.starts_with("a -- b (cost: 1.5)\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_forest<V: fmt::Display>(
    forest: &SpanningForest<V>,
    mut writer: impl Write,
) -> io::Result<()> {
    for edge in forest.edges() {
        writeln!(
            writer,
            "{} -- {} (cost: {})",
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    writeln!(writer, "total cost: {}", forest.total_weight())?;
    writeln!(writer, "components: {}", forest.component_count())?;
    Ok(())
}
