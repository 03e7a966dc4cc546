//! trm: TestRail record inspector
//!
//! Command-line interface for rendering TestRail response bodies and
//! building request payloads from them.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        kind,
        command,
    } = Args::parse();

    info!("trm started for {kind:?} records");

    let cli = Cli::new(kind, TerminalRenderer::new(!no_color));

    match command {
        Commands::Show { file } => cli.show(file.as_deref()),
        Commands::Payload { file, compact } => cli.payload(file.as_deref(), compact),
    }
}
