use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use vodsites_core::{builtin_registry, logging, Config, MergeReport, SiteBundle, SiteRegistry};

/// Inspect and validate VOD API-site bundles
#[derive(Parser)]
#[command(name = "vodsites", version, about)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "VODSITES_CONFIG")]
    config: Option<String>,

    /// Extra bundle file, merged after those listed in the config
    /// (repeatable)
    #[arg(long = "bundle", value_name = "PATH")]
    bundles: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the merged registry as a table
    List,
    /// Validate bundle files and report conflicts
    Check,
    /// Print the merged registry as JSON
    Export,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    logging::init_logging(&config.logging)?;

    let mut paths: Vec<PathBuf> = config.sites.bundles.iter().map(PathBuf::from).collect();
    paths.extend(cli.bundles.iter().cloned());

    match cli.command {
        Command::List => list(&paths),
        Command::Check => check(&paths),
        Command::Export => export(&paths),
    }
}

fn load_bundles(paths: &[PathBuf]) -> Result<Vec<SiteBundle>> {
    paths
        .iter()
        .map(|path| {
            SiteBundle::from_path(path)
                .with_context(|| format!("failed to load bundle {}", path.display()))
        })
        .collect()
}

/// Builtin catalog first, then each bundle in order
fn merged_registry(bundles: &[SiteBundle]) -> (SiteRegistry, Vec<(String, MergeReport)>) {
    let mut registry = builtin_registry();
    let mut reports = Vec::with_capacity(bundles.len());
    for bundle in bundles {
        let report = registry.extend(bundle);
        reports.push((bundle.namespace.clone(), report));
    }
    (registry, reports)
}

fn list(paths: &[PathBuf]) -> Result<()> {
    let bundles = load_bundles(paths)?;
    let (registry, _) = merged_registry(&bundles);

    let id_width = registry
        .iter()
        .map(|(id, _)| id.len())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let ns_width = registry
        .iter()
        .map(|(_, site)| site.namespace.len())
        .max()
        .unwrap_or(0)
        .max("NAMESPACE".len());

    println!("{:<id_width$}  {:<ns_width$}  NAME / API", "ID", "NAMESPACE");
    for (id, site) in registry.iter() {
        println!(
            "{:<id_width$}  {:<ns_width$}  {}  {}",
            id, site.namespace, site.entry.name, site.entry.api
        );
    }
    Ok(())
}

fn check(paths: &[PathBuf]) -> Result<()> {
    let bundles = load_bundles(paths)?;
    let (_, reports) = merged_registry(&bundles);

    let mut conflicts = 0usize;
    for (namespace, report) in &reports {
        info!(
            namespace = %namespace,
            merged = report.merged(),
            clean = report.is_clean(),
            "bundle merged"
        );
        for replaced in &report.replaced {
            conflicts += 1;
            println!(
                "conflict: '{}' from bundle '{}' overwrites entry owned by '{}'",
                replaced.id, namespace, replaced.previous_namespace
            );
        }
    }

    if conflicts == 0 {
        info!(bundles = bundles.len(), "all bundles valid, no conflicts");
        println!("ok: {} bundle(s), no conflicts", bundles.len());
    } else {
        println!("ok with {conflicts} conflict(s) (last write wins)");
    }
    Ok(())
}

fn export(paths: &[PathBuf]) -> Result<()> {
    let bundles = load_bundles(paths)?;
    let (registry, _) = merged_registry(&bundles);

    let json = serde_json::to_string_pretty(&registry)?;
    println!("{json}");
    Ok(())
}
