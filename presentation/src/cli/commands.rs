//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for search and fetch results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable output
    #[default]
    Pretty,
    /// The exact JSON an agent would receive
    Json,
}

/// CLI arguments for support-scout
#[derive(Parser, Debug)]
#[command(name = "support-scout")]
#[command(author, version, about = "Search a support knowledge base and fetch its articles")]
#[command(long_about = r#"
support-scout exposes two retrieval tools to an agent and lets you run them
by hand:

1. search  Search support articles through the web search API
2. fetch   Fetch the content of an article surfaced by a search

The search API key is read from the environment (TAVILY_API_KEY by default).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./scout.toml        Project-level config
3. ~/.config/support-scout/config.toml   Global config

Example:
  support-scout search "rate limit error"
  support-scout search "streaming callbacks" -n 8 --format json
  support-scout fetch https://support.langchain.com/articles/123 --max-chars 2000
  support-scout call search --args '{"query": "pricing"}'
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search support articles
    Search {
        /// What to search for
        query: String,

        /// Number of results (clamped to the configured limit)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        max_results: Option<i64>,

        /// Search these domains instead of the support site (repeatable)
        #[arg(short, long = "domain", value_name = "DOMAIN")]
        domains: Vec<String>,

        /// Search the whole web instead of the support site
        #[arg(long, conflicts_with = "domains")]
        anywhere: bool,

        #[arg(short, long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Fetch the content of an article by its URL
    Fetch {
        /// Article URL, as returned by a search
        url: String,

        /// Maximum characters to return
        #[arg(short, long, allow_negative_numbers = true)]
        max_chars: Option<i64>,

        #[arg(short, long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Invoke a tool the way an agent would and print its raw output
    Call {
        /// Tool name or alias
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, value_name = "JSON", default_value = "{}")]
        args: String,
    },

    /// List the available tools and their JSON schemas
    Tools {
        /// Print the schemas as JSON
        #[arg(long)]
        json: bool,
    },
}
