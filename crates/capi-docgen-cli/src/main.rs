use anyhow::{Context, Result, bail};
use capi_docgen_config::Config;
use capi_docgen_engine::{Document, Endpoint, io};
use clap::Parser;
use relative_path::RelativePathBuf;
use std::io::{Write, stdout};
use std::path::PathBuf;

mod output;

use output::{OutputFormat, write_endpoints};

#[derive(Parser)]
#[command(
    version,
    name = "capi-docgen",
    about = "Extract endpoint models from the Cloud Controller v3 API docs"
)]
struct Cli {
    /// Checkout of the v3 API docs (defaults to `docs_path` from the config file)
    docs_path: Option<PathBuf>,

    /// Config file to use instead of ~/.config/capi-docgen/config.toml
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Resource directory relative to the docs checkout
    #[arg(long)]
    resources_dir: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    run(&cli, &mut stdout().lock())
}

/// Extracts every matching doc file and writes the result to `out`.
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = resolve_config(cli)?;

    let resources_root = config.resources_root();
    io::validate_docs_dir(&resources_root)
        .with_context(|| format!("Can't find directory '{}'", resources_root.display()))?;
    log::info!("Reading API docs from {}", resources_root.display());

    let files = matching_files(&config, &resources_root)?;
    log::info!("Found {} doc file(s)", files.len());

    if cli.format == OutputFormat::Tree {
        for file in &files {
            let content = io::read_file(file, &resources_root)
                .with_context(|| format!("Couldn't open markdown file '{file}'"))?;
            writeln!(out, "== {file}")?;
            write!(out, "{}", Document::parse(&content).outline())?;
        }
        return Ok(());
    }

    let mut endpoints: Vec<Endpoint> = Vec::new();
    for file in &files {
        let found = io::extract_file(file, &resources_root)
            .with_context(|| format!("Couldn't open markdown file '{file}'"))?;
        endpoints.extend(found);
    }

    log::info!("Extracted {} endpoint(s)", endpoints.len());
    write_endpoints(out, &endpoints, cli.format)
}

/// Merges the command line over the config file.
///
/// A docs path on the command line wins over the config file, which is then
/// only used for its other settings.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let loaded = Config::load_from_path(&config_path)
        .with_context(|| format!("Failed to load config file '{}'", config_path.display()))?;

    let mut config = match (&cli.docs_path, loaded) {
        (Some(docs_path), Some(loaded)) => Config {
            docs_path: docs_path.clone(),
            ..loaded
        },
        (Some(docs_path), None) => Config::new(docs_path.clone()),
        (None, Some(loaded)) => {
            log::info!("Using docs path from config file: {}", loaded.docs_path.display());
            loaded
        }
        (None, None) => bail!(
            "No docs path provided and no config file found at {}",
            config_path.display()
        ),
    };

    if let Some(resources_dir) = &cli.resources_dir {
        config.resources_dir = resources_dir.clone();
    }
    Ok(config)
}

fn matching_files(config: &Config, resources_root: &std::path::Path) -> Result<Vec<RelativePathBuf>> {
    let matcher = config.file_matcher()?;
    let files = io::scan_markdown_files(resources_root)?
        .into_iter()
        .filter(|file| file.file_name().is_some_and(|name| matcher.matches(name)))
        .collect();
    Ok(files)
}
