// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{ArgAction, Parser, Subcommand};
use org_profile::utils::logging::{format_error, format_section, format_success};
use org_profile::{Config, FetchProgress, ProfilePipeline};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "org_profile")]
#[command(author = "cipher")]
#[command(version)]
#[command(about = "Generate a GitHub organization profile README", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = org_profile::config::DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,

    /// Organization to list; overrides config and GITHUB_ORG
    #[arg(long, value_name = "ORG")]
    org: Option<String>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch repositories and overwrite the profile README
    Generate {
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the generated README to stdout without writing it
    Preview,

    /// Verify the organization is reachable with the configured token
    Check,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    org_profile::utils::logging::init_logger(cli.color, cli.verbose);

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        eprintln!("{}", format_error("Profile generation failed"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    info!("Organization profile generator");

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using defaults and environment",
            cli.config.display()
        );
        Config::load(None).context("Failed to load configuration")?
    };

    let output = match &cli.command {
        Commands::Generate { output } => output.clone(),
        _ => None,
    };
    let config = config
        .with_overrides(cli.org, output)
        .context("Invalid command line overrides")?;

    if config.github.token.is_none() {
        warn!("No GITHUB_TOKEN set; only public repositories are visible and rate limits are low");
    }

    let show_progress = std::io::stderr().is_terminal();

    match cli.command {
        Commands::Generate { .. } => cmd_generate(config, cli.color, show_progress).await,
        Commands::Preview => cmd_preview(config, cli.color, show_progress).await,
        Commands::Check => cmd_check(config).await,
    }
}

fn progress(colored: bool, visible: bool) -> FetchProgress {
    if visible {
        FetchProgress::new(colored)
    } else {
        FetchProgress::hidden()
    }
}

async fn cmd_generate(config: Config, colored: bool, show_progress: bool) -> Result<()> {
    let output_path = config.profile.output_path.clone();
    let org = config.github.org.clone();
    let pipeline = ProfilePipeline::from_config(config).context("Failed to create GitHub client")?;

    let mut progress = progress(colored, show_progress);
    let stats = pipeline
        .run(&mut progress, Utc::now())
        .await
        .with_context(|| format!("Failed to generate profile for {}", org))?;

    eprintln!(
        "{}",
        format_success(&format!(
            "Wrote {} ({} repositories from {} page(s) in {:.2}s)",
            output_path.display(),
            stats.repositories_rendered,
            stats.pages_fetched,
            stats.duration.as_secs_f64()
        ))
    );

    Ok(())
}

async fn cmd_preview(config: Config, colored: bool, show_progress: bool) -> Result<()> {
    let org = config.github.org.clone();
    let pipeline = ProfilePipeline::from_config(config).context("Failed to create GitHub client")?;

    let mut progress = progress(colored, show_progress);
    let (document, _stats) = pipeline
        .generate(&mut progress, Utc::now())
        .await
        .with_context(|| format!("Failed to generate profile for {}", org))?;

    for section in &document.sections {
        eprintln!("{}", format_section(&section.title, section.count));
    }
    print!("{}", document.content);

    Ok(())
}

async fn cmd_check(config: Config) -> Result<()> {
    let org = config.github.org.clone();
    let pipeline = ProfilePipeline::from_config(config).context("Failed to create GitHub client")?;

    let count = pipeline
        .check()
        .await
        .with_context(|| format!("Organization {} is not reachable", org))?;

    eprintln!(
        "{}",
        format_success(&format!("{} is reachable ({} repositories on first page)", org, count))
    );
    Ok(())
}
