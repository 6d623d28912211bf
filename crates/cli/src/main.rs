use anyhow::Result;
use clap::{Parser, Subcommand};
use collector_core::config::{self, AppConfig};
use collector_core::pipeline;
use std::path::{Path, PathBuf};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Collect {
            skip_web,
            skip_github,
            output,
            json,
        } => run_collect(cfg, skip_web, skip_github, output, json).await,
        Commands::Render { resources, output } => run_render(cfg, &resources, output),
    }
}

#[derive(Parser)]
#[command(name = "mcp-collector")]
#[command(about = "Collect and catalog MCP resources from the web", long_about = None)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search all sources, build the catalog, write all reports
    Collect {
        /// Skip the web search source
        #[arg(long)]
        skip_web: bool,
        /// Skip the GitHub repository source
        #[arg(long)]
        skip_github: bool,
        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Regenerate HTML and statistics from an existing resource dump
    Render {
        /// Path to a previously written mcp_resources_*.json file
        resources: PathBuf,
        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

async fn run_collect(
    mut cfg: AppConfig,
    skip_web: bool,
    skip_github: bool,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    if skip_web {
        cfg.search.web_enabled = false;
    }
    if skip_github {
        cfg.search.github_enabled = false;
    }
    let out_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output.dir));

    let registry = pipeline::build_registry(&cfg);
    anyhow::ensure!(!registry.is_empty(), "all sources are disabled");

    let batches = pipeline::plan(&cfg, &registry);
    let run = pipeline::run(&cfg, &batches).await?;

    report::write_json(&run.catalog, &out_dir)?;
    report::write_html(&run.catalog, &out_dir)?;
    report::write_stats(&run.catalog, &out_dir)?;
    info!(
        kept = run.summary.kept_resources,
        dir = %out_dir.display(),
        "collection complete"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&run.summary)?);
    } else {
        println!(
            "Collected {} resources ({} hits over {} queries, {} fetch failures). Reports in {}.",
            run.summary.kept_resources,
            run.summary.hits_seen,
            run.summary.queries_run,
            run.summary.fetch_failures,
            out_dir.display()
        );
    }
    Ok(())
}

fn run_render(cfg: AppConfig, resources: &Path, output: Option<PathBuf>) -> Result<()> {
    let out_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output.dir));

    let mut catalog = report::load_resources(resources)?;
    catalog.deduplicate();

    let html = report::write_html(&catalog, &out_dir)?;
    let stats = report::write_stats(&catalog, &out_dir)?;
    println!(
        "Rendered {} resources: {} and {}",
        catalog.len(),
        html.display(),
        stats.display()
    );
    Ok(())
}
