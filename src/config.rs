use crate::cli::Cli;
use crate::error::{Result, ViewerError};
use crate::pagination::PageSize;
use clap::ValueEnum;
use url::Url;

/// What a fresh search does with the page left over from the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PageReset {
    /// Every new search starts on page 1.
    #[default]
    Reset,
    /// Keep whatever page was current.
    Preserve,
}

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub api_base_url: Url,
    pub page_reset: PageReset,
    pub default_page_size: PageSize,
}

impl ViewerConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_base_url = Url::parse(&cli.api_url)
            .map_err(|e| ViewerError::ConfigError(format!("Invalid --api-url '{}': {}", cli.api_url, e)))?;

        if !matches!(api_base_url.scheme(), "http" | "https") {
            return Err(ViewerError::ConfigError(format!(
                "API URL must be http or https: {}",
                api_base_url
            )));
        }

        Ok(ViewerConfig {
            api_base_url,
            page_reset: cli.page_reset,
            default_page_size: cli.per_page,
        })
    }
}
