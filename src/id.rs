//! Node references and link targets
//!
//! `@id` references to other structured-data nodes, and the two forms a
//! breadcrumb target can take.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::error::SchemaError;
use crate::vocab::ID_KEY;

/// A reference to another node by its `@id`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdReference {
    #[serde(rename = "@id")]
    pub id: String,
}

/// Build an `{"@id": ...}` reference
pub fn id_ref(id: impl Into<String>) -> IdReference {
    IdReference { id: id.into() }
}

impl From<IdReference> for Value {
    fn from(reference: IdReference) -> Self {
        let mut obj = Map::new();
        obj.insert(ID_KEY.to_string(), Value::String(reference.id));
        Value::Object(obj)
    }
}

/// Where a breadcrumb points: a structured entity or a plain URL
///
/// Serialized untagged, so a URL is a JSON string and a Thing is an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    Url(String),
    Thing(Map<String, Value>),
}

impl Target {
    pub fn url(url: impl Into<String>) -> Self {
        Target::Url(url.into())
    }

    pub fn thing(properties: Map<String, Value>) -> Self {
        Target::Thing(properties)
    }

    /// Resolve a relative URL target against a site base URL
    ///
    /// Absolute URLs, fragments and Things are returned unchanged.
    pub fn resolve_against(&self, base: &Url) -> Result<Target, SchemaError> {
        match self {
            Target::Url(s) if classify_target(s) == TargetKind::Relative => {
                // "localhost:8080/x" would otherwise parse as scheme "localhost"
                let path = if Url::parse(s).is_ok() {
                    format!("./{}", s)
                } else {
                    s.clone()
                };
                let joined = base.join(&path).map_err(|source| SchemaError::InvalidUrl {
                    url: s.clone(),
                    source,
                })?;
                log::debug!("resolved breadcrumb target '{}' to '{}'", s, joined);
                Ok(Target::Url(joined.to_string()))
            }
            other => Ok(other.clone()),
        }
    }
}

impl From<IdReference> for Target {
    fn from(reference: IdReference) -> Self {
        let mut obj = Map::new();
        obj.insert(ID_KEY.to_string(), Value::String(reference.id));
        Target::Thing(obj)
    }
}

impl From<&str> for Target {
    fn from(url: &str) -> Self {
        Target::Url(url.to_string())
    }
}

impl From<String> for Target {
    fn from(url: String) -> Self {
        Target::Url(url)
    }
}

/// Classification of a URL target string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Fragment identifier: "#main"
    Fragment,
    /// Absolute URI: "https://...", "mailto:..."
    Absolute,
    /// Anything needing a base: "/blog", "post/", ""
    Relative,
}

/// Schemes treated as absolute targets
const KNOWN_SCHEMES: [&str; 7] = ["http", "https", "urn", "mailto", "tel", "ftp", "data"];

/// Classify a URL target string
///
/// Only known schemes count as absolute, so a bare "host:port/path" is relative.
pub fn classify_target(target: &str) -> TargetKind {
    if target.starts_with('#') {
        TargetKind::Fragment
    } else if Url::parse(target).is_ok_and(|url| KNOWN_SCHEMES.contains(&url.scheme())) {
        TargetKind::Absolute
    } else {
        TargetKind::Relative
    }
}

/// Parse a site base URL
pub fn parse_base_url(base: &str) -> Result<Url, SchemaError> {
    Url::parse(base).map_err(|source| SchemaError::InvalidUrl {
        url: base.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_ref_serializes_as_reference() {
        let reference = id_ref("#author");
        assert_eq!(serde_json::to_value(&reference).unwrap(), json!({"@id": "#author"}));
        assert_eq!(Value::from(reference), json!({"@id": "#author"}));
    }

    #[test]
    fn test_target_untagged_forms() {
        assert_eq!(serde_json::to_value(Target::url("/blog")).unwrap(), json!("/blog"));

        let thing: Target = id_ref("https://example.com/#org").into();
        assert_eq!(
            serde_json::to_value(&thing).unwrap(),
            json!({"@id": "https://example.com/#org"})
        );

        let parsed: Target = serde_json::from_value(json!({"@id": "#x", "name": "X"})).unwrap();
        assert!(matches!(parsed, Target::Thing(_)));
        let parsed: Target = serde_json::from_value(json!("/x")).unwrap();
        assert_eq!(parsed, Target::url("/x"));
    }

    #[test]
    fn test_classify_target() {
        assert_eq!(classify_target("#main"), TargetKind::Fragment);
        assert_eq!(classify_target("https://example.com/blog"), TargetKind::Absolute);
        assert_eq!(classify_target("mailto:someone@example.com"), TargetKind::Absolute);
        assert_eq!(classify_target("/blog"), TargetKind::Relative);
        assert_eq!(classify_target("localhost:8080/x"), TargetKind::Relative);
        assert_eq!(classify_target("blog/post"), TargetKind::Relative);
        assert_eq!(classify_target(""), TargetKind::Relative);
    }

    #[test]
    fn test_resolve_relative() {
        let base = parse_base_url("https://example.com/").unwrap();

        let resolved = Target::url("/blog/post-title").resolve_against(&base).unwrap();
        assert_eq!(resolved, Target::url("https://example.com/blog/post-title"));

        let resolved = Target::url("/").resolve_against(&base).unwrap();
        assert_eq!(resolved, Target::url("https://example.com/"));
    }

    #[test]
    fn test_resolve_host_without_scheme() {
        let base = parse_base_url("https://example.com/").unwrap();

        let resolved = Target::url("localhost:8080/x").resolve_against(&base).unwrap();
        assert_eq!(resolved, Target::url("https://example.com/localhost:8080/x"));
    }

    #[test]
    fn test_resolve_leaves_absolute_fragment_and_thing() {
        let base = parse_base_url("https://example.com/").unwrap();

        let absolute = Target::url("https://other.org/x");
        assert_eq!(absolute.resolve_against(&base).unwrap(), absolute);

        let fragment = Target::url("#top");
        assert_eq!(fragment.resolve_against(&base).unwrap(), fragment);

        let thing: Target = id_ref("./data/").into();
        assert_eq!(thing.resolve_against(&base).unwrap(), thing);
    }

    #[test]
    fn test_parse_base_url_invalid() {
        let err = parse_base_url("/not-absolute").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidUrl { .. }));
    }
}
