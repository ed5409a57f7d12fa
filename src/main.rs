use anyhow::Context;
use clap::Parser;
use colored::*;
use github_profile_viewer::cli::{Cli, Commands, OutputFormat};
use github_profile_viewer::config::ViewerConfig;
use github_profile_viewer::controller::{Outcome, PageController};
use github_profile_viewer::github::GitHubClient;
use github_profile_viewer::server::{start_server, AppState};
use github_profile_viewer::terminal::TerminalView;
use github_profile_viewer::view::HtmlView;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so `show` output stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ViewerConfig::from_cli(&cli)?;
    let client = GitHubClient::with_base_url(config.api_base_url.as_str())
        .context("Failed to create GitHub client")?;

    match cli.command {
        Commands::Show { username, page, format } => {
            let exit_code = match format {
                OutputFormat::Text => {
                    let controller = PageController::new(client, TerminalView::new())
                        .with_page_reset(config.page_reset)
                        .with_page_size(config.default_page_size);
                    let code = show(&controller, &username, page).await;
                    print!("{}", controller.view().render());
                    code
                }
                OutputFormat::Html => {
                    let controller = PageController::new(client, HtmlView::new())
                        .with_page_reset(config.page_reset)
                        .with_page_size(config.default_page_size);
                    let code = show(&controller, &username, page).await;
                    print!("{}", controller.view().document(&controller.snapshot()));
                    code
                }
            };
            std::process::exit(exit_code);
        }
        Commands::Serve { host, port } => {
            println!("{}", "GitHub Profile Viewer".bold().green());
            println!("{}\n", "=".repeat(50).dimmed());
            println!("🌐 Open http://{}:{}/ in your browser", host, port);
            println!("\nPress Ctrl+C to stop the server\n");

            let controller = PageController::new(client, HtmlView::new())
                .with_page_reset(config.page_reset)
                .with_page_size(config.default_page_size);
            let state = Arc::new(AppState { controller });

            tokio::select! {
                result = start_server(state, &host, port) => {
                    result.context("Viewer server stopped")?;
                }
                _ = tokio::signal::ctrl_c() => {
                    println!("\n🛑 Shutting down viewer...");
                }
            }
        }
    }

    Ok(())
}

/// Runs `show` and returns the exit code.
async fn show<V>(controller: &PageController<GitHubClient, V>, username: &str, page: u32) -> i32
where
    V: github_profile_viewer::view::ViewPort,
{
    match controller.open(username, page).await {
        Outcome::Loaded => 0,
        Outcome::Rejected => 2,
        Outcome::Ignored => {
            let total = controller.snapshot().total_pages().unwrap_or(0);
            eprintln!("{}", format!("Page {} is out of range (1-{})", page, total).yellow());
            1
        }
        _ => 1,
    }
}
