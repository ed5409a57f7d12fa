use crate::config::PageReset;
use crate::pagination::PageSize;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "github-profile-viewer")]
#[command(about = "GitHub Profile Viewer - Looks up a GitHub user and pages through their repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com", global = true)]
    pub api_url: String,

    /// Repositories per page (10, 20, 30, 50 or 100)
    #[arg(long, env = "VIEWER_PER_PAGE", default_value_t = PageSize::default(), global = true)]
    pub per_page: PageSize,

    /// Whether a new search starts from page 1 or keeps the current page
    #[arg(long, env = "VIEWER_PAGE_RESET", value_enum, default_value_t = PageReset::Reset, global = true)]
    pub page_reset: PageReset,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a user once and print the requested page
    Show {
        /// GitHub username
        username: String,

        /// Page of repositories to show
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Serve the viewer to a browser
    Serve {
        /// Address to bind
        #[arg(long, env = "VIEWER_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, env = "VIEWER_PORT", default_value_t = 3000)]
        port: u16,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}
