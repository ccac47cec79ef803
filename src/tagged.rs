//! Discriminant injection
//!
//! Every node constructor returns a [`Tagged`] value: the caller's fields
//! with a fixed `@type` placed alongside them.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::vocab::TYPE_KEY;

/// Open property map for vocabulary kinds whose fields are all optional
pub type Properties = Map<String, Value>;

/// A node of a fixed schema.org type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tagged<T> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(flatten)]
    fields: T,
}

impl<T> Tagged<T> {
    pub(crate) fn new(kind: &'static str, fields: T) -> Self {
        Self { kind, fields }
    }

    /// The injected `@type` discriminant
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The caller-supplied fields
    pub fn fields(&self) -> &T {
        &self.fields
    }

    pub fn into_fields(self) -> T {
        self.fields
    }
}

impl<T: Serialize> Tagged<T> {
    pub fn to_value(&self) -> Result<Value, SchemaError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Remove a caller-supplied `@type` so it cannot shadow the discriminant
pub(crate) fn strip_type_override(properties: &mut Properties, kind: &'static str) {
    if let Some(overridden) = properties.remove(TYPE_KEY) {
        log::warn!(
            "ignoring @type {} supplied to {} builder",
            overridden,
            kind
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tagged_flattens_fields() {
        let mut props = Properties::new();
        props.insert("name".to_string(), json!("Site"));

        let tagged = Tagged::new("WebSite", props);
        assert_eq!(tagged.kind(), "WebSite");
        assert_eq!(
            tagged.to_value().unwrap(),
            json!({"@type": "WebSite", "name": "Site"})
        );
    }

    #[test]
    fn test_strip_type_override() {
        let mut props = Properties::new();
        props.insert("@type".to_string(), json!("Thing"));
        props.insert("name".to_string(), json!("Keep"));

        strip_type_override(&mut props, "Blog");

        assert!(!props.contains_key("@type"));
        assert_eq!(props.get("name"), Some(&json!("Keep")));
    }
}
