//! schema.org Structured Data Builders
//!
//! Typed constructors for the JSON-LD nodes a static site embeds in its
//! pages: Article, BlogPosting, NewsArticle, Blog, WebSite, WebPage,
//! WebApplication and BreadcrumbList.
//!
//! # Overview
//!
//! Each constructor takes the fields of one vocabulary kind and returns
//! them with the fixed `@type` discriminant injected. Required fields are
//! enforced by the field types; optional vocabulary properties travel in
//! an open property map and are passed through untouched.
//!
//! Breadcrumb lists are the one builder with logic of its own: items keep
//! their input order and are numbered from 1.
//!
//! # Usage
//!
//! ## Breadcrumbs
//!
//! ```ignore
//! use schema_ld::{breadcrumbs, with_context, BreadcrumbItem};
//!
//! let list = breadcrumbs(vec![
//!     BreadcrumbItem::new("Home", "/"),
//!     BreadcrumbItem::new("Blog", "/blog"),
//! ]);
//! assert_eq!(list.count(), 2);
//!
//! let doc = with_context(&list)?;
//! ```
//!
//! ## Articles
//!
//! ```ignore
//! use schema_ld::{article, id_ref, ArticleFields};
//!
//! let node = article(
//!     ArticleFields::new("Title", id_ref("#author"), "2024-01-01", "2024-01-02")
//!         .with("image", "https://example.com/cover.jpg"),
//! );
//! println!("{}", node.to_value()?);
//! ```

pub mod articles;
pub mod blog;
pub mod breadcrumbs;
pub mod document;
pub mod error;
pub mod id;
pub mod input;
pub mod tagged;
pub mod vocab;
pub mod website;

// Re-export main types for convenience
pub use crate::articles::{article, blog_posting, news_article, ArticleFields};
pub use crate::blog::blog;
pub use crate::breadcrumbs::{
    breadcrumbs, resolve_breadcrumbs, BreadcrumbItem, BreadcrumbList, ListItem,
};
pub use crate::document::{graph, to_json_string, to_jsonld, with_context, RenderOptions};
pub use crate::error::SchemaError;
pub use crate::id::{classify_target, id_ref, parse_base_url, IdReference, Target, TargetKind};
pub use crate::input::{parse_specs, NodeSpec};
pub use crate::tagged::{Properties, Tagged};
pub use crate::vocab::SCHEMA_ORG_CONTEXT;
pub use crate::website::{webapp, webpage, website};
