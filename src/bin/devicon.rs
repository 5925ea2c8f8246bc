//! Resolves tag names to devicon classes from the command line.
//!
//! ```sh
//! devicon js reactjs " Rust "
//! devicon --monochrome --registry devicon.json postgres
//! RUST_LOG=debug devicon --list
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use devflow_kit::{ResolverConfig, TagIconResolver, load_definitions_from_path};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Tag names to resolve.
    tags: Vec<String>,

    /// Registry JSON to load instead of the bundled one.
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Resolver config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Omit the colored modifier.
    #[arg(long)]
    monochrome: bool,

    /// Print every icon with its aliases and styles.
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let resolver = match build_resolver(&args) {
        Ok(resolver) => resolver,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let report = run(&resolver, &args);
    for line in &report.lines {
        println!("{line}");
    }
    for tag in &report.missing {
        eprintln!("{tag}: no icon");
    }

    if report.missing.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Output of one invocation: stdout lines and the tags that had no icon.
#[derive(Debug, Default)]
struct Report {
    lines: Vec<String>,
    missing: Vec<String>,
}

fn run(resolver: &TagIconResolver, args: &Args) -> Report {
    let mut report = Report::default();

    if args.list {
        for def in resolver.definitions() {
            let styles: Vec<_> = def.styles().iter().map(|s| s.as_str()).collect();
            report.lines.push(format!(
                "{}\t[{}]\t{}",
                def.name(),
                def.aliases().join(", "),
                styles.join(", ")
            ));
        }
    }

    for tag in &args.tags {
        match resolver.resolve(tag, !args.monochrome) {
            Some(class) => report.lines.push(class.to_string()),
            None => report.missing.push(tag.clone()),
        }
    }

    report
}

fn build_resolver(args: &Args) -> Result<TagIconResolver, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => ResolverConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => ResolverConfig::default(),
    };

    let resolver = match &args.registry {
        Some(path) => {
            let definitions = load_definitions_from_path(path, config.malformed)?;
            TagIconResolver::new(definitions, &config)?
        }
        None => TagIconResolver::from_json(devflow_kit::BUNDLED_REGISTRY, &config)?,
    };

    Ok(resolver)
}
