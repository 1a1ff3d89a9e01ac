//! `ontdoc` — Renders ontology documentation from RDF sources.
//!
//! **Outputs:**
//! - `<out>/<subdir>/<stem>.html|md|adoc` — one document per source file,
//!   mirroring the source's directory under `<input>`
//! - `ontdoc.css` next to each HTML document, unless `--include-css`
//!
//! **Usage:**
//! ```
//! ontdoc <input> [--out <path>] [--format html|md|adoc] [--config <file>]
//! ```
//!
//! `<input>` is a `.ttl`/`.nt` file or a directory searched recursively for
//! them.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use ontdoc::loader::discover_sources;
use ontdoc::{generate_file, writer, Config, PrefixPolicy};
use ontdoc_model::OutputFormat;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Generate documentation for OWL/RDFS ontologies.
#[derive(Parser)]
#[command(
    name = "ontdoc",
    about = "Generate HTML, Markdown or AsciiDoc documentation for ontologies"
)]
struct Args {
    /// Ontology file, or a directory of ontology files.
    input: PathBuf,

    /// Output directory.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// TOML configuration file; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: html, md or adoc.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Inline the stylesheet into HTML output.
    #[arg(long)]
    include_css: bool,

    /// Preferred language tag for titles and descriptions.
    #[arg(long)]
    lang: Option<String>,

    /// Prefix resolution: stored or online.
    #[arg(long)]
    prefix_policy: Option<PrefixPolicy>,

    /// URL of the RDF source, linked from the metadata.
    #[arg(long)]
    source_link: Option<String>,

    /// Log pipeline stages.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.include_css {
            config.include_css = true;
        }
        if let Some(lang) = &self.lang {
            config.default_language = lang.clone();
        }
        if let Some(policy) = self.prefix_policy {
            config.prefix_policy = policy;
        }
        if let Some(link) = &self.source_link {
            config.source_link = Some(link.clone());
        }
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn sources(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_dir() {
        let found = discover_sources(input);
        if found.is_empty() {
            bail!("No .ttl or .nt files under {}", input.display());
        }
        Ok(found)
    } else if input.is_file() {
        Ok(vec![input.to_path_buf()])
    } else {
        bail!("Input not found: {}", input.display())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = args.config()?;
    debug!(?config, "configuration");

    let sources = sources(&args.input)?;
    let root = if args.input.is_dir() {
        args.input.as_path()
    } else {
        args.input.parent().unwrap_or_else(|| Path::new(""))
    };
    let mut output_dirs = BTreeSet::new();
    for source in &sources {
        let document = generate_file(source, &config)
            .with_context(|| format!("Failed to document {}", source.display()))?;
        let path = writer::mirrored_output_path(&args.out, root, source, config.format);
        writer::write_document(&path, &document)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  Written: {}", path.display());
        if let Some(dir) = path.parent() {
            output_dirs.insert(dir.to_path_buf());
        }
    }

    // Each HTML document links the stylesheet from its own directory.
    if config.format == OutputFormat::Html && !config.include_css {
        for dir in &output_dirs {
            let css = writer::write_stylesheet(dir)
                .with_context(|| format!("Failed to write stylesheet into {}", dir.display()))?;
            println!("  Written: {}", css.display());
        }
    }

    println!(
        "Documented {} ontolog{} as {}.",
        sources.len(),
        if sources.len() == 1 { "y" } else { "ies" },
        config.format
    );
    Ok(())
}
