//! Command handlers for the trm CLI
//!
//! Each handler reads a response body, maps it onto the record type chosen
//! with `--kind`, and hands the result to the terminal renderer.

use std::{
    fmt::Display,
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use testrail_core::{parse_list, Plan, PlanEntry, Record, Run};

use crate::{args::Kind, renderer::TerminalRenderer};

/// CLI handler that owns the output renderer
pub struct Cli {
    kind: Kind,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler for the given record type
    pub fn new(kind: Kind, renderer: TerminalRenderer) -> Self {
        Self { kind, renderer }
    }

    /// Render a single record or a list of records as markdown
    pub fn show(&self, file: Option<&Path>) -> Result<()> {
        let body = read_body(file)?;
        let markdown = match self.kind {
            Kind::Plan => render::<Plan>(&body)?,
            Kind::Entry => render::<PlanEntry>(&body)?,
            Kind::Run => render::<Run>(&body)?,
        };
        self.renderer.render(&markdown)
    }

    /// Print the sparse request payload for a single record
    pub fn payload(&self, file: Option<&Path>, compact: bool) -> Result<()> {
        let body = read_body(file)?;
        let payload = match self.kind {
            Kind::Plan => request_payload::<Plan>(&body)?,
            Kind::Entry => request_payload::<PlanEntry>(&body)?,
            Kind::Run => request_payload::<Run>(&body)?,
        };

        let text = if compact {
            serde_json::to_string(&payload)?
        } else {
            serde_json::to_string_pretty(&payload)?
        };
        self.renderer.print_plain(&text)
    }
}

/// Read and decode the JSON body from a file, or stdin for `None` and `-`
fn read_body(file: Option<&Path>) -> Result<Value> {
    let text = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };
    debug!("Read {} bytes of input", text.len());

    serde_json::from_str(&text).context("Input is not valid JSON")
}

fn render<R: Record + Display>(body: &Value) -> Result<String> {
    if body.is_array() {
        let records: Vec<R> = parse_list(body)
            .with_context(|| format!("Failed to parse {} list", R::KIND))?;
        info!("Parsed {} {} records", records.len(), R::KIND);

        if records.is_empty() {
            return Ok(format!("No {} records found.\n", R::KIND));
        }
        let sections: Vec<String> = records.iter().map(ToString::to_string).collect();
        return Ok(sections.join("\n"));
    }

    let record = R::parse(body).with_context(|| format!("Failed to parse {}", R::KIND))?;
    Ok(record.to_string())
}

fn request_payload<R: Record>(body: &Value) -> Result<Value> {
    let record = R::parse(body).with_context(|| format!("Failed to parse {}", R::KIND))?;
    Ok(record.to_json())
}
