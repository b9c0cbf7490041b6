//! Console output formatter for search and fetch results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use scout_domain::{
    ArticleContent, ConfigIssue, RetrievalError, SearchEnvelope, Severity, ToolDefinition,
    ToolResult,
};

/// Width of the snippet preview under each search hit
const SNIPPET_PREVIEW_CHARS: usize = 240;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors off (or back to terminal detection) for all output
    pub fn set_color_enabled(enabled: bool) {
        if enabled {
            colored::control::unset_override();
        } else {
            colored::control::set_override(false);
        }
    }

    /// Format a search envelope as a numbered list
    pub fn format_search(envelope: &SearchEnvelope) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Support Articles"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Query:".cyan().bold(),
            envelope.query()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Results:".cyan().bold(),
            envelope.total()
        ));

        for (index, article) in envelope.articles().iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("{:>2}.", index + 1).yellow().bold(),
                article.title.bold()
            ));
            output.push_str(&format!("    {}\n", article.url.blue().underline()));
            if let Some(source) = &article.source {
                output.push_str(&format!("    {} {}\n", "source:".dimmed(), source));
            }
            if let Some(score) = article.score {
                output.push_str(&format!("    {} {:.2}\n", "score:".dimmed(), score));
            }
            if let Some(raw) = &article.raw_content {
                output.push_str(&format!(
                    "    {} {} chars\n",
                    "raw content:".dimmed(),
                    raw.chars().count()
                ));
            }
            let snippet = Self::preview(&article.snippet, SNIPPET_PREVIEW_CHARS);
            if !snippet.is_empty() {
                output.push_str(&Self::indent(&snippet, "    "));
                output.push('\n');
            }
        }

        if let Some(note) = envelope.note() {
            output.push_str(&format!("\n{}\n", note.dimmed()));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format fetched article content
    pub fn format_article(article: &ArticleContent) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "URL:".cyan().bold(), article.url));
        let size = if article.truncated {
            format!(
                "{} chars (truncated, {} read)",
                article.content_chars(),
                article.original_chars
            )
        } else {
            format!("{} chars", article.original_chars)
        };
        output.push_str(&format!("{} {}\n", "Size:".cyan().bold(), size));
        output.push_str(&Self::section_header("Content"));
        output.push_str(&article.content);
        output.push('\n');

        output
    }

    /// Format a tool's name, description and parameters
    pub fn format_tool(tool: &ToolDefinition, aliases: &[&str]) -> String {
        let mut output = format!("{}", tool.name.yellow().bold());
        if !aliases.is_empty() {
            output.push_str(&format!(
                " {}",
                format!("(aliases: {})", aliases.join(", ")).dimmed()
            ));
        }
        output.push('\n');
        output.push_str(&Self::indent(&tool.description, "  "));
        output.push('\n');

        for param in &tool.parameters {
            let required = if param.required {
                "required".red().to_string()
            } else {
                "optional".dimmed().to_string()
            };
            output.push_str(&format!(
                "    {} <{}> [{}] {}\n",
                param.name.bold(),
                param.param_type,
                required,
                param.description
            ));
        }

        output
    }

    /// Format a tool result exactly as the agent sees it, plus a status line
    pub fn format_tool_result(result: &ToolResult) -> String {
        let status = if result.is_success() {
            format!("{} {}", "v".green(), result.tool_name)
        } else {
            let code = result
                .error()
                .map(|e| e.code.as_str())
                .unwrap_or("UNKNOWN");
            format!("{} {} ({})", "x".red(), result.tool_name, code)
        };

        let mut timing = Vec::new();
        if let Some(ms) = result.metadata.duration_ms {
            timing.push(format!("{}ms", ms));
        }
        if let Some(count) = result.metadata.match_count {
            timing.push(format!("{} matches", count));
        }
        if let Some(bytes) = result.metadata.bytes {
            timing.push(format!("{} bytes", bytes));
        }

        let mut output = status;
        if !timing.is_empty() {
            output.push_str(&format!(" {}", timing.join(", ").dimmed()));
        }
        output.push('\n');
        output.push_str(&result.render());
        output.push('\n');
        output
    }

    /// Format configuration issues, one per line
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a retrieval error with its kind
    pub fn format_error(error: &RetrievalError) -> String {
        format!(
            "{} {}\n{}",
            "Error:".red().bold(),
            error,
            format!("kind: {}", error.kind()).dimmed()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Collapse whitespace and cut to `max_chars`, marking the cut
    fn preview(text: &str, max_chars: usize) -> String {
        let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.chars().count() <= max_chars {
            return flat;
        }
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_search(&self, envelope: &SearchEnvelope) -> String {
        Self::format_search(envelope)
    }

    fn format_article(&self, article: &ArticleContent) -> String {
        Self::format_article(article)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_domain::{ConfigIssueCode, ResultFormatter, SearchResult, ToolError};

    fn envelope() -> SearchEnvelope {
        let results = vec![
            SearchResult::new(
                "https://support.example.com/a",
                Some("Handling 429s".to_string()),
                "Back off   and\nretry.",
            ),
            SearchResult::new("https://support.example.com/b", Some("Quotas".to_string()), ""),
        ];
        ResultFormatter::format(&results, "rate limit", Some("support.example.com"))
    }

    #[test]
    fn test_format_search_lists_articles() {
        let output = ConsoleFormatter::format_search(&envelope());
        assert!(output.contains("rate limit"));
        assert!(output.contains("Handling 429s"));
        assert!(output.contains("https://support.example.com/b"));
        assert!(output.contains("Back off and retry."));
        assert!(output.contains("get_article_content"));
    }

    #[test]
    fn test_format_search_shows_score_and_raw_content() {
        ConsoleFormatter::set_color_enabled(false);
        let results = vec![
            SearchResult::new("https://support.example.com/a", Some("Scored".to_string()), "s")
                .with_score(0.876)
                .with_raw_content("<p>full page</p>"),
            SearchResult::new("https://support.example.com/b", Some("Plain".to_string()), "p"),
        ];
        let output = ConsoleFormatter::format_search(&ResultFormatter::format(&results, "q", None));

        assert!(output.contains("score: 0.88"));
        assert!(output.contains("raw content: 16 chars"));
        assert_eq!(output.matches("score:").count(), 1);
    }

    #[test]
    fn test_format_search_empty() {
        let output = ConsoleFormatter::format_search(&ResultFormatter::empty("nothing"));
        assert!(output.contains("nothing"));
        assert!(output.contains("No results found."));
    }

    #[test]
    fn test_format_article_truncated() {
        let article = ArticleContent::truncate("https://e.com/a", &"x".repeat(50), 10);
        let output = ConsoleFormatter::format_article(&article);
        assert!(output.contains("10 chars (truncated, 50 read)"));
        assert!(output.contains(&"x".repeat(10)));
        assert!(!output.contains(&"x".repeat(11)));
    }

    #[test]
    fn test_format_tool_result_failure() {
        let result = ToolResult::failure("get_article_content", ToolError::invalid_argument("bad"))
            .with_output("Error: bad");
        let output = ConsoleFormatter::format_tool_result(&result);
        assert!(output.contains("INVALID_ARGUMENT"));
        assert!(output.contains("Error: bad"));
    }

    #[test]
    fn test_format_issues() {
        let issues = vec![
            ConfigIssue::error(
                ConfigIssueCode::BlankValue {
                    field: "support.domain".into(),
                },
                "support.domain must not be blank",
            ),
            ConfigIssue::warning(
                ConfigIssueCode::ZeroLimit {
                    field: "search.default_max_results".into(),
                },
                "search.default_max_results is 0",
            ),
        ];
        let output = ConsoleFormatter::format_issues(&issues);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("support.domain must not be blank"));
    }

    #[test]
    fn test_preview_cuts_long_text() {
        let preview = ConsoleFormatter::preview(&"word ".repeat(100), 20);
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= 23);
    }

    #[test]
    fn test_format_error_includes_kind() {
        let output = ConsoleFormatter::format_error(&RetrievalError::Timeout("30s".into()));
        assert!(output.contains("Request timed out: 30s"));
        assert!(output.contains("kind: timeout"));
    }
}
