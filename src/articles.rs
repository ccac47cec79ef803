//! Article, BlogPosting and NewsArticle nodes
//!
//! All three share the fields search engines need for an Article display.
//! See <https://developers.google.com/search/docs/appearance/structured-data/article>.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tagged::{strip_type_override, Properties, Tagged};
use crate::vocab::{ARTICLE_TYPE, BLOG_POSTING_TYPE, NEWS_ARTICLE_TYPE};

/// Fields of an article-like node
///
/// `headline`, `author`, `datePublished` and `dateModified` are required;
/// any other vocabulary property goes in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFields {
    pub headline: String,
    pub author: Value,
    pub date_published: String,
    pub date_modified: String,
    #[serde(flatten)]
    pub extra: Properties,
}

impl ArticleFields {
    pub fn new(
        headline: impl Into<String>,
        author: impl Into<Value>,
        date_published: impl Into<String>,
        date_modified: impl Into<String>,
    ) -> Self {
        Self {
            headline: headline.into(),
            author: author.into(),
            date_published: date_published.into(),
            date_modified: date_modified.into(),
            extra: Properties::new(),
        }
    }

    /// Add an optional property
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Keys owned by the typed fields; an `extra` entry must not repeat them
const REQUIRED_KEYS: [&str; 4] = ["headline", "author", "datePublished", "dateModified"];

fn tag(kind: &'static str, mut fields: ArticleFields) -> Tagged<ArticleFields> {
    strip_type_override(&mut fields.extra, kind);
    for key in REQUIRED_KEYS {
        if let Some(shadowed) = fields.extra.remove(key) {
            log::warn!(
                "ignoring extra {} {} supplied to {} builder",
                key,
                shadowed,
                kind
            );
        }
    }
    Tagged::new(kind, fields)
}

/// https://schema.org/Article
pub fn article(fields: ArticleFields) -> Tagged<ArticleFields> {
    tag(ARTICLE_TYPE, fields)
}

/// https://schema.org/BlogPosting
pub fn blog_posting(fields: ArticleFields) -> Tagged<ArticleFields> {
    tag(BLOG_POSTING_TYPE, fields)
}

/// https://schema.org/NewsArticle
pub fn news_article(fields: ArticleFields) -> Tagged<ArticleFields> {
    tag(NEWS_ARTICLE_TYPE, fields)
}
