use std::io::Write;

use anyhow::Result;
use capi_docgen_engine::Endpoint;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty printed JSON array of every endpoint
    Json,
    /// One line per endpoint
    Summary,
    /// The parsed document tree of every file, for debugging the extractor
    Tree,
}

/// `RESOURCE METHOD ROUTE (n params)`
pub fn summary_line(endpoint: &Endpoint) -> String {
    let count = endpoint.body_parameters.len();
    let noun = if count == 1 { "param" } else { "params" };
    format!(
        "{} {} {} ({count} {noun})",
        endpoint.resource, endpoint.http_method, endpoint.route
    )
}

pub fn write_endpoints<W: Write>(out: &mut W, endpoints: &[Endpoint], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, endpoints)?;
            writeln!(out)?;
        }
        OutputFormat::Summary => {
            for endpoint in endpoints {
                writeln!(out, "{}", summary_line(endpoint))?;
            }
        }
        // Trees are written per file while scanning.
        OutputFormat::Tree => {}
    }
    Ok(())
}
