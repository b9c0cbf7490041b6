//! Output formatter trait

use crate::cli::commands::OutputFormat;
use crate::output::console::ConsoleFormatter;
use scout_domain::{ArticleContent, SearchEnvelope};

/// Trait for formatting search and fetch results
pub trait OutputFormatter {
    /// Format a search envelope
    fn format_search(&self, envelope: &SearchEnvelope) -> String;

    /// Format fetched article content
    fn format_article(&self, article: &ArticleContent) -> String;
}

/// Formatter matching the selected [`OutputFormat`]
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Pretty => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Machine-readable output
///
/// Search results print as the same envelope JSON the search tool returns.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_search(&self, envelope: &SearchEnvelope) -> String {
        envelope
            .to_json_pretty()
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn format_article(&self, article: &ArticleContent) -> String {
        serde_json::to_string_pretty(article).unwrap_or_else(|_| "{}".to_string())
    }
}
