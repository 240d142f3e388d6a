use anyhow::{Context, Result};
use clap::Parser;
use quickopen_core::types::{AppConfig, Candidate};
use quickopen_core::workspace::Workspace;
use quickopen_search::{RankedResult, Ranker, SearchConfig, SearchEngine, SearchQuery};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod logging;

#[derive(Parser)]
#[command(name = "quickopen")]
#[command(about = "Fuzzy-find files in a workspace", long_about = None)]
#[command(version)]
struct Cli {
    /// Query to rank files against. Reads one query per stdin line when omitted
    query: Option<String>,

    /// Workspace root
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Config file (default: <root>/quickopen.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of results per query
    #[arg(long)]
    limit: Option<usize>,

    /// Print one JSON object per result
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| AppConfig::path(&cli.root));
    let config = load_config(&config_path)?;

    let mut search_config = SearchConfig::from(&config);
    if let Some(limit) = cli.limit {
        search_config.result_limit = limit;
    }

    let workspace = Workspace::new(&cli.root, &config.workspace);
    let scan = workspace
        .scan()
        .with_context(|| format!("failed to scan workspace {}", cli.root.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.query {
        Some(query) => {
            let ranker = Ranker::new(search_config);
            let results = ranker.rank(&SearchQuery::from(query.as_str()), &scan.candidates);
            print_results(&mut out, &results, cli.json)?;
        }
        None => interactive(scan.candidates, search_config, cli.json, &mut out)?,
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<AppConfig> {
    let config = AppConfig::load(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;

    let problems = config.validate();
    if problems.is_empty() {
        return Ok(config);
    }
    for problem in &problems {
        tracing::warn!("invalid config value, using default: {problem}");
    }
    Ok(config.with_defaults_for_invalid())
}

/// Ranks each stdin line as a new query, printing a blank line after each
/// result block.
fn interactive(
    candidates: Vec<Candidate>,
    config: SearchConfig,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut engine = SearchEngine::new(candidates, config, Arc::new(|| {}));

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read query from stdin")?;
        engine.set_query(SearchQuery::Fuzzy(line.trim().to_string()));
        engine.wait();

        if let Some(results) = engine.results() {
            let entries: Vec<RankedResult> = results.iter().cloned().collect();
            print_results(out, &entries, json)?;
        }
        writeln!(out)?;
        out.flush()?;
    }
    Ok(())
}

fn print_results(out: &mut impl Write, results: &[RankedResult], json: bool) -> Result<()> {
    for result in results {
        if json {
            writeln!(out, "{}", serde_json::to_string(result)?)?;
        } else {
            writeln!(out, "{}\t{}", result.score, result.id)?;
        }
    }
    Ok(())
}
