use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use futures::StreamExt;
use log::info;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use namesmith::compliance::ComplianceChecker;
use namesmith::config::Config;
use namesmith::domain::{Candidate, CandidateStatus, GenerationReport, GenerationRequest};
use namesmith::llm::OpenAiCompatibleClient;
use namesmith::lookup::build_lookup_url;
use namesmith::runner::{GenerationLoop, StreamRelay};

mod cli;

use cli::Cli;
use cli::commands::Commands;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("namesmith")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("namesmith.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Generate {
            industry,
            keywords,
            json,
        } => {
            let request = GenerationRequest::new(industry, keywords);
            handle_generate_command(request, *json, cli.is_verbose(), config).await
        }
        Commands::Stream { industry, keywords } => {
            handle_stream_command(GenerationRequest::new(industry, keywords), config).await
        }
        Commands::Check { names } => handle_check_command(names, config),
        Commands::Lookup { name } => handle_lookup_command(name),
    }
}

fn checker_for(config: &Config) -> ComplianceChecker {
    ComplianceChecker::with_forbidden_token(config.compliance.forbidden_token.clone())
}

fn status_label(status: CandidateStatus) -> ColoredString {
    match status {
        CandidateStatus::Pass => "PASS".green(),
        CandidateStatus::Fail => "FAIL".red(),
        CandidateStatus::Unknown => "----".dimmed(),
    }
}

async fn handle_generate_command(request: GenerationRequest, json: bool, verbose: bool, config: &Config) -> Result<()> {
    info!("Generating names for {:?}", request);
    let client = OpenAiCompatibleClient::new(config.llm.clone()).context("Failed to create model client")?;
    let runner = GenerationLoop::with_checker(Arc::new(client), checker_for(config));

    let state = match runner.run(request).await {
        Ok(state) => state,
        Err(e) => {
            if e.is_upstream() {
                eprintln!(
                    "{} check llm.base_url and the {} environment variable",
                    "Model service unavailable:".red(),
                    config.llm.api_key_env
                );
            }
            return Err(e).context("Generation failed");
        }
    };
    let report = GenerationReport::from_state(&state).context("Failed to build report")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.is_empty() {
        println!("{}", "The model returned no usable names".yellow());
    }
    for candidate in &report.candidates {
        println!("{} {}", status_label(candidate.status), candidate.name.bold());
        if !candidate.reason.is_empty() {
            println!("     {}", candidate.reason);
        }
        if verbose {
            println!("     {}", candidate.query_url.dimmed());
        }
    }
    if !report.error_msg.is_empty() {
        println!("{}", report.error_msg.red());
    }
    println!("{} {}", "Rounds:".cyan(), report.retry_count);
    Ok(())
}

async fn handle_stream_command(request: GenerationRequest, config: &Config) -> Result<()> {
    info!("Streaming names for {:?}", request);
    let client = OpenAiCompatibleClient::new(config.llm.clone()).context("Failed to create model client")?;
    let relay = StreamRelay::with_checker(Arc::new(client), checker_for(config));

    let mut events = relay.stream(request);
    let mut stdout = std::io::stdout();
    while let Some(event) = events.next().await {
        let frame = event.to_frame().context("Failed to encode event")?;
        stdout.write_all(frame.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

fn handle_check_command(names: &[String], config: &Config) -> Result<()> {
    info!("Checking {} name(s)", names.len());
    let mut candidates: Vec<Candidate> = names.iter().map(|name| Candidate::new(name.as_str(), "")).collect();
    let error_message = checker_for(config).check(&mut candidates);

    for candidate in &candidates {
        println!("{} {}", status_label(candidate.status), candidate.name);
    }
    if !error_message.is_empty() {
        println!("{}", error_message.red());
    }
    Ok(())
}

fn handle_lookup_command(name: &str) -> Result<()> {
    info!("Building lookup URL for: {}", name);
    println!("{}", build_lookup_url(name)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
