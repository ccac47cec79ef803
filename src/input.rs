//! Node descriptions read from JSON
//!
//! A [`NodeSpec`] names a node kind in its `"kind"` field and carries that
//! kind's fields alongside, e.g.
//!
//! ```json
//! {"kind": "breadcrumbs", "items": [{"name": "Home", "item": "/"}]}
//! ```

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::articles::{article, blog_posting, news_article, ArticleFields};
use crate::blog::blog;
use crate::breadcrumbs::{breadcrumbs, resolve_breadcrumbs, BreadcrumbItem};
use crate::error::SchemaError;
use crate::tagged::Properties;
use crate::website::{webapp, webpage, website};

/// Description of a single node to build
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeSpec {
    Article(ArticleFields),
    BlogPosting(ArticleFields),
    NewsArticle(ArticleFields),
    Blog(Properties),
    Website(Properties),
    Webpage(Properties),
    Webapp(Properties),
    Breadcrumbs { items: Vec<BreadcrumbItem> },
}

impl NodeSpec {
    /// Build the node this spec describes
    pub fn build(self) -> Result<Value, SchemaError> {
        match self {
            NodeSpec::Article(fields) => article(fields).to_value(),
            NodeSpec::BlogPosting(fields) => blog_posting(fields).to_value(),
            NodeSpec::NewsArticle(fields) => news_article(fields).to_value(),
            NodeSpec::Blog(props) => blog(props).to_value(),
            NodeSpec::Website(props) => website(props).to_value(),
            NodeSpec::Webpage(props) => webpage(props).to_value(),
            NodeSpec::Webapp(props) => webapp(props).to_value(),
            NodeSpec::Breadcrumbs { items } => Ok(serde_json::to_value(breadcrumbs(items))?),
        }
    }

    /// Resolve relative breadcrumb targets against a base URL
    ///
    /// Other kinds are returned unchanged.
    pub fn resolve_against(self, base: &Url) -> Result<NodeSpec, SchemaError> {
        match self {
            NodeSpec::Breadcrumbs { items } => Ok(NodeSpec::Breadcrumbs {
                items: resolve_breadcrumbs(&items, base)?,
            }),
            other => Ok(other),
        }
    }
}

/// Parse one spec or an array of specs
pub fn parse_specs(input: &str) -> Result<Vec<NodeSpec>, SchemaError> {
    match serde_json::from_str::<Value>(input)? {
        Value::Array(entries) => entries
            .into_iter()
            .map(|entry| serde_json::from_value::<NodeSpec>(entry).map_err(SchemaError::from))
            .collect(),
        entry @ Value::Object(_) => Ok(vec![serde_json::from_value(entry)?]),
        other => Err(SchemaError::InvalidInput(format!(
            "expected a node object or an array of nodes, got {}",
            other
        ))),
    }
}
