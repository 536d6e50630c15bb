use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod answer;
mod api;
mod config;
mod error;
mod mcp;
mod persona;
mod prompt;
mod repo;
mod session;

use config::Settings;

/// RepoQA CLI - repository Q&A with MCP server support
#[derive(Parser)]
#[command(name = "repoqa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Run as MCP server over stdio
    #[arg(long)]
    mcp: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Select inference model to use
    #[arg(short = 'm', long)]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration status
    Status,
    /// Preview the files a repository load would collect (dry-run)
    Preview {
        /// URL of the public GitHub repository
        repo_url: String,

        /// List every skipped file (not just a summary)
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env(cli.model);

    // If --mcp flag is set, run as MCP server
    if cli.mcp {
        let store = session::create_shared_session_store();
        return mcp::run_mcp_server(store, settings).await;
    }

    // Otherwise, handle subcommands
    match cli.command {
        Some(Commands::Status) => {
            run_status(&settings);
        }
        Some(Commands::Preview { repo_url, verbose }) => {
            run_preview(&repo_url, verbose).await?;
        }
        None => {
            // No command specified, show help
            eprintln!("No command specified. Use --help for usage information.");
            eprintln!("Use 'repoqa --mcp' to start the MCP server.");
        }
    }

    Ok(())
}

fn run_status(settings: &Settings) {
    if settings.has_api_key() {
        println!("✅ Inference credential configured");
    } else {
        println!("❌ GEMINI_API_KEY is not set; ask requests will fail");
    }
    println!("   Model: {}", settings.model);
    println!("   Context budget: {} chars", settings.max_context_chars);
}

async fn run_preview(repo_url: &str, verbose: bool) -> Result<()> {
    let repo_url = api::RepoUrl::parse(repo_url)?;

    let snapshot = repo::fetch_snapshot(repo_url.as_str()).await?;
    let report = repo::collect_files(snapshot.path());

    println!(
        "Collected {} files from {}:",
        report.records.len(),
        repo_url.full_name()
    );
    for path in report.paths() {
        println!("  {}", path);
    }

    if !report.skipped.is_empty() {
        println!("Skipped {} files", report.skipped.len());
        if verbose {
            for skip in &report.skipped {
                println!("  {} ({:?})", skip.path, skip.reason);
            }
        }
    }

    Ok(())
}
