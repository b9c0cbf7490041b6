//! Agent-facing tools
//!
//! Two tools, each with a few aliases for the names models tend to guess:
//!
//! | Tool | Aliases |
//! |------|---------|
//! | `search_support_articles` | `search`, `web_search`, `support_search` |
//! | `get_article_content` | `fetch`, `get_article`, `web_fetch` |

mod executor;
mod schema;
pub mod support;

pub use executor::{HttpSupportToolExecutor, SupportToolExecutor};
pub use schema::JsonSchemaToolConverter;
pub use support::{GET_ARTICLE_CONTENT, SEARCH_SUPPORT_ARTICLES};

use scout_application::RetrievalConfig;
use scout_domain::tool::entities::ToolSpec;

/// Create the tool specification with both tools and their aliases
pub fn support_tool_spec(config: &RetrievalConfig) -> ToolSpec {
    ToolSpec::new()
        .register(support::search_support_articles_definition(config))
        .register(support::get_article_content_definition(config))
        .register_aliases([
            ("search", SEARCH_SUPPORT_ARTICLES),
            ("web_search", SEARCH_SUPPORT_ARTICLES),
            ("support_search", SEARCH_SUPPORT_ARTICLES),
            ("fetch", GET_ARTICLE_CONTENT),
            ("get_article", GET_ARTICLE_CONTENT),
            ("web_fetch", GET_ARTICLE_CONTENT),
        ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_resolve() {
        let spec = support_tool_spec(&RetrievalConfig::default());
        for alias in ["search", "web_search", "support_search"] {
            assert_eq!(spec.resolve(alias), Some(SEARCH_SUPPORT_ARTICLES));
        }
        for alias in ["fetch", "get_article", "web_fetch"] {
            assert_eq!(spec.resolve(alias), Some(GET_ARTICLE_CONTENT));
        }
        assert_eq!(spec.names().count(), 2);
    }
}
