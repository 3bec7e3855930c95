//! Command-line consumer of the recipe retrieval pipeline.
//!
//! Builds the same cache and remote source as the server, retrieves one recipe
//! and prints every state as it arrives.
//!
//! # Usage
//!
//! ```bash
//! # Use RECIPE_API_TOKEN from the environment
//! cargo run --bin fetch -- 583
//!
//! # Explicit credential, no loading pause
//! cargo run --bin fetch -- 583 --token "Token 9c8b06d3..." --no-delay
//! ```
//!
//! Exits with status 1 if the retrieval ends in an error.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use futures::StreamExt;
use std::process::ExitCode;

use recipe_retrieval::config;
use recipe_retrieval::domain::entities::Recipe;
use recipe_retrieval::domain::retrieval_state::RetrievalState;
use recipe_retrieval::server::build_state;
use recipe_retrieval::telemetry;

/// Retrieve a recipe, cache first.
#[derive(Parser)]
#[command(name = "fetch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Recipe id
    id: i32,

    /// Credential for the remote recipe API (defaults to RECIPE_API_TOKEN)
    #[arg(short, long)]
    token: Option<String>,

    /// Skip the startup delay before the cache read
    #[arg(long)]
    no_delay: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if cli.no_delay {
        config.startup_delay_ms = 0;
    }
    telemetry::init("warn", &config.log_format)?;

    let token = cli
        .token
        .or_else(|| config.recipe_api_token.clone())
        .context("Pass --token or set RECIPE_API_TOKEN")?;

    let state = build_state(&config).await?;
    let mut states = Box::pin(state.retrieval.retrieve(cli.id, token));

    let mut failed = false;
    while let Some(state) = states.next().await {
        match state {
            RetrievalState::Loading => {
                println!("{}", format!("⏳ Loading recipe {}...", cli.id).cyan());
            }
            RetrievalState::Success(recipe) => print_recipe(&recipe),
            RetrievalState::Error { kind, message } => {
                failed = true;
                println!("{} {}", format!("✗ {} error:", kind).red().bold(), message);
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", format!("✓ {}", recipe.title).green().bold());
    println!("  {} {}", "id:".bright_black(), recipe.id);
    if !recipe.publisher.is_empty() {
        println!("  {} {}", "publisher:".bright_black(), recipe.publisher);
    }
    println!("  {} {}", "rating:".bright_black(), recipe.rating);
    if !recipe.source_url.is_empty() {
        println!("  {} {}", "source:".bright_black(), recipe.source_url);
    }
    println!(
        "  {} {}",
        "updated:".bright_black(),
        recipe.date_updated.format("%Y-%m-%d")
    );

    if !recipe.ingredients.is_empty() {
        println!("  {}", "ingredients:".bright_black());
        for ingredient in &recipe.ingredients {
            println!("    - {}", ingredient);
        }
    }
}
