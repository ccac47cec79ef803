//! Vocabulary constants for schema.org structured data
//!
//! Discriminant values emitted in `@type` and the fixed markers the
//! builders inject.

/// Default `@context` for every emitted document
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

pub const ARTICLE_TYPE: &str = "Article";
pub const BLOG_POSTING_TYPE: &str = "BlogPosting";
pub const NEWS_ARTICLE_TYPE: &str = "NewsArticle";
pub const BLOG_TYPE: &str = "Blog";
pub const WEBSITE_TYPE: &str = "WebSite";
pub const WEBPAGE_TYPE: &str = "WebPage";
pub const WEBAPP_TYPE: &str = "WebApplication";
pub const BREADCRUMB_LIST_TYPE: &str = "BreadcrumbList";
pub const LIST_ITEM_TYPE: &str = "ListItem";

/// Ordering marker carried by every BreadcrumbList
/// Not computed: item order always follows the input.
pub const ITEM_LIST_ORDER: &str = "Descending";

/// JSON-LD keywords
pub const TYPE_KEY: &str = "@type";
pub const ID_KEY: &str = "@id";
pub const CONTEXT_KEY: &str = "@context";
pub const GRAPH_KEY: &str = "@graph";

/// The `@context` value as JSON
pub fn context() -> serde_json::Value {
    serde_json::Value::String(SCHEMA_ORG_CONTEXT.to_string())
}
