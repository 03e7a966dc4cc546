use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Inspect TestRail API response bodies
///
/// Reads a JSON response body (a single object or a list) from a file or
/// stdin, maps it onto typed records and either renders it as markdown or
/// prints the sparse request payload the record would send back.
#[derive(Parser)]
#[command(version, about, name = "trm")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Record type of the input body
    #[arg(long, global = true, value_enum, default_value_t = Kind::Plan)]
    pub kind: Kind,

    #[command(subcommand)]
    pub command: Commands,
}

/// Record types understood by the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// A test plan (`get_plan`, `get_plans`)
    Plan,
    /// A plan entry (`add_plan_entry`)
    Entry,
    /// A test run (`get_run`, `get_runs`)
    Run,
}

/// Available commands for the trm CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render a response body as markdown
    #[command(alias = "s")]
    Show {
        /// Input file; omit or pass `-` to read stdin
        file: Option<PathBuf>,
    },
    /// Print the request payload built from a response body
    #[command(alias = "p")]
    Payload {
        /// Input file; omit or pass `-` to read stdin
        file: Option<PathBuf>,

        /// Print the payload on a single line
        #[arg(long)]
        compact: bool,
    },
}
