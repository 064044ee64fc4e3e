use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::analysis::{MetaAnalysis, analyze_project_interviews, plan_project};
use crate::config::QraiConfig;
use crate::gateway::{OpenAiGateway, SpinnerGateway};
use crate::planner::CharRatioEstimator;
use crate::storage::ProjectStore;
use crate::utils::{format_path_with_tilde, resolve_data_dir};

const LOG_ENV_VAR: &str = "QRAI_LOG";

#[derive(Parser)]
#[command(name = "qr-ai")]
#[command(version = "0.1.0")]
#[command(about = "Answer research learning goals from customer interview transcripts", long_about = None)]
pub struct Cli {
    /// Directory holding projects.json (overrides storage.data_dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects with their learning goal and interview counts
    Projects,
    /// Show how a project's transcripts would be grouped into chunks
    Plan {
        project: String,
        /// Token budget per chunk (overrides analysis.token_budget)
        #[arg(long)]
        budget: Option<usize>,
    },
    /// Analyze each interview of a project on its own
    Analyze {
        project: String,
        /// Only analyze the interview with this name
        #[arg(long)]
        interview: Option<String>,
    },
    /// Run the chunked meta-analysis and synthesize one answer per learning goal
    Meta {
        project: String,
        /// Token budget per chunk (overrides analysis.token_budget)
        #[arg(long)]
        budget: Option<usize>,
    },
    /// Print the last saved meta-analysis of a project
    Show { project: String },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let mut config = QraiConfig::load().context("Failed to load configuration")?;
    if let Some(data_dir) = &cli.data_dir {
        config.storage.data_dir = data_dir.clone();
    }
    if let Commands::Plan { budget: Some(budget), .. } | Commands::Meta { budget: Some(budget), .. } =
        command
    {
        config.analysis.token_budget = *budget;
        config.validate()?;
    }
    let store = ProjectStore::new(resolve_data_dir(&config.storage.data_dir)?);

    match command {
        Commands::Projects => list_projects(&store),
        Commands::Plan { project, .. } => show_plan(&store, project, config.analysis.token_budget),
        Commands::Analyze { project, interview } => {
            analyze_interviews(&store, &config, project, interview.as_deref())
        }
        Commands::Meta { project, .. } => run_meta_analysis(&store, &config, project),
        Commands::Show { project } => show_meta_analysis(&store, project),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn model_gateway(config: &QraiConfig) -> Result<SpinnerGateway<OpenAiGateway>> {
    config.model.require_api_key()?;
    let gateway = OpenAiGateway::new(&config.model)?;
    Ok(SpinnerGateway::new(gateway, format!("Waiting for {}", config.model.name), config.ui.progress))
}

fn list_projects(store: &ProjectStore) -> Result<()> {
    let projects = store.load_projects()?.projects;

    if projects.is_empty() {
        println!("No projects found in {}", format_path_with_tilde(store.data_dir()));
        return Ok(());
    }

    println!("Projects");
    println!("========");
    for project in &projects {
        println!(
            "{} ({} learning goals, {} interviews)",
            project.name,
            project.learning_goals.len(),
            project.interviews.len()
        );
    }

    Ok(())
}

fn show_plan(store: &ProjectStore, project: &str, budget: usize) -> Result<()> {
    let plan = plan_project(store, project, budget, &CharRatioEstimator)?;

    println!("Chunk plan for {}", project);
    println!("================================");
    println!("Learning goals: {}", plan.goals.len());
    println!("Interviews: {}", plan.interview_count);
    println!("Token budget: {} (estimated at 4 characters per token)", plan.token_budget);
    println!("Chunks: {}", plan.chunks.len());

    for (i, chunk) in plan.chunks.iter().enumerate() {
        let names: Vec<&str> = chunk.units().iter().map(|u| u.interview.as_str()).collect();
        let marker = if chunk.is_oversized_singleton(plan.token_budget) { " [over budget]" } else { "" };
        println!(
            "  Chunk {}: {} interviews, ~{} tokens{}: {}",
            i + 1,
            chunk.len(),
            chunk.total_tokens(),
            marker,
            names.join(", ")
        );
    }

    Ok(())
}

fn analyze_interviews(
    store: &ProjectStore,
    config: &QraiConfig,
    project: &str,
    interview: Option<&str>,
) -> Result<()> {
    let gateway = model_gateway(config)?;
    let analyses = analyze_project_interviews(&gateway, store, project, interview)?;

    if analyses.is_empty() {
        println!("No interviews with readable transcripts in {}", project);
        return Ok(());
    }

    for analysis in &analyses {
        println!("Interview: {}", analysis.interview);
        println!("================================");
        for record in &analysis.records {
            println!("{}\n", record);
        }
    }

    Ok(())
}

fn run_meta_analysis(store: &ProjectStore, config: &QraiConfig, project: &str) -> Result<()> {
    let gateway = model_gateway(config)?;
    let results = MetaAnalysis::new(&gateway, config.analysis.clone()).run(store, project)?;

    println!("Meta-analysis for {}", project);
    println!("================================");
    for record in &results {
        println!("{}\n", record);
    }

    Ok(())
}

fn show_meta_analysis(store: &ProjectStore, project: &str) -> Result<()> {
    let Some(report) = store.load_meta_analysis(project)? else {
        println!("No meta-analysis found for {}", project);
        return Ok(());
    };

    println!("Meta-analysis for {}", report.project);
    println!("================================");
    println!("Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S"));
    println!(
        "Interviews: {} in {} chunks (token budget {})",
        report.interview_count, report.chunk_count, report.token_budget
    );
    println!();
    for record in &report.results {
        println!("{}\n", record);
    }

    Ok(())
}
