mod args;

use args::Cli;
use cardsift_core::{Card, Dataset, FilterConfig, FilterHandle, TextInput, activate_with};
use cardsift_search::FuzzyIndexFactory;
use clap::Parser;
use eyre::{Result, WrapErr};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Serialize)]
struct Report<'a> {
    query: &'a str,
    visible: Vec<String>,
    hidden: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    run(cli)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_filter(filter))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let dataset = Dataset::from_path(&cli.projects)
        .wrap_err_with(|| format!("cannot load projects from {}", cli.projects.display()))?;

    // One rendered card per project, in dataset order.
    let cards: Vec<(_, Card)> = dataset
        .projects()
        .iter()
        .map(|project| (project.id.clone(), Card::with_classes(["card"])))
        .collect();

    let mut input = TextInput::new();
    let handle = activate_with(&dataset, &FuzzyIndexFactory, &config, &mut input, cards);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.queries.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.wrap_err("cannot read query from stdin")?;
            input.set_value(line.trim_end_matches('\r'));
            report(&mut out, &cli, &handle)?;
        }
    } else {
        for query in &cli.queries {
            input.set_value(query.as_str());
            report(&mut out, &cli, &handle)?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FilterConfig> {
    let Some(path) = &cli.config else {
        return Ok(FilterConfig::default());
    };

    let config = FilterConfig::load(path)
        .wrap_err_with(|| format!("cannot load config from {}", path.display()))?;

    let problems = config.validate();
    if problems.is_empty() {
        return Ok(config);
    }
    for problem in &problems {
        tracing::warn!(path = %path.display(), "{problem}; using default");
    }
    Ok(config.with_defaults_for_invalid())
}

fn report(out: &mut impl Write, cli: &Cli, handle: &FilterHandle<Card>) -> Result<()> {
    let query = handle.query();
    let visible: Vec<String> = handle.visible_ids().iter().map(ToString::to_string).collect();
    let hidden: Vec<String> = handle.hidden_ids().iter().map(ToString::to_string).collect();

    if cli.json {
        let line = serde_json::to_string(&Report {
            query: &query,
            visible,
            hidden,
        })?;
        writeln!(out, "{line}")?;
        return Ok(());
    }

    writeln!(
        out,
        "{query:?}: {} of {} visible",
        visible.len(),
        visible.len() + hidden.len()
    )?;
    for id in &visible {
        writeln!(out, "  + {id}")?;
    }
    if cli.show_hidden {
        for id in &hidden {
            writeln!(out, "  - {id}")?;
        }
    }
    Ok(())
}
