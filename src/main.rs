mod cli_args;
mod config;
mod diff;
mod error;
mod git;
mod llm;
mod logging;
mod setup;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::ProgressBar;
use log::{debug, info};

use cli_args::Cli;
use config::Config;

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", format!("Error: {err:#}").red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    cli_args::reject_message_args(&cli.git_args)?;

    let cfg = Config::from_sources(&cli)?;

    let raw_diff = git::head_diff(cfg.options.context_lines)?;
    if raw_diff.len() <= cfg.options.min_diff_length {
        println!("No changes to summarize; nothing committed.");
        return Ok(());
    }

    // Built only once there is something to summarize, so a clean tree never
    // demands an API key.
    let client = setup::build_client(&cfg, cli.no_model)?;

    let compressed = diff::compress_diff(&raw_diff, &cfg.options, &mut rand::thread_rng());
    info!(
        "Compressed diff from {} to {} chars",
        raw_diff.len(),
        compressed.len()
    );
    debug!("Compressed diff:\n{compressed}");

    let spinner = ProgressBar::new_spinner().with_message("Generating commit message...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let message = client.commit_message(&compressed);
    spinner.finish_and_clear();
    let message = message?;

    if cli.dry_run {
        println!("{}", message.green());
        return Ok(());
    }

    let commit_output = git::commit(&message, &cli.git_args)?;
    let commit_output = commit_output.trim_end();
    if !commit_output.is_empty() {
        println!("{}", commit_output.green());
    }
    println!("{}", message.green());

    Ok(())
}
