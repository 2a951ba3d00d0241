use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Search TMDB movies from the terminal.
#[derive(Debug, Parser)]
#[command(name = "moviefinder", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Result language, e.g. "en-US"
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Include adult titles in results
    #[arg(long)]
    pub include_adult: bool,

    /// Override the TMDB API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Search to run on startup
    #[arg(value_name = "QUERY", trailing_var_arg = true)]
    pub query: Vec<String>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(language) = &self.language {
            config.api.language = Some(language.clone());
        }
        if self.include_adult {
            config.api.include_adult = Some(true);
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
    }

    /// Startup query, or `None` when no words were given.
    pub fn query_text(&self) -> Option<String> {
        let query = self.query.join(" ");
        (!query.trim().is_empty()).then_some(query)
    }
}
