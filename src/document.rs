//! JSON-LD document assembly
//!
//! Wraps built nodes in the `@context` envelope expected inside an
//! `application/ld+json` block, either as a single node or an `@graph`.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::vocab::{context, CONTEXT_KEY, GRAPH_KEY};

/// Options for document output
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Add the schema.org `@context` envelope
    pub include_context: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_context: true,
            pretty: false,
        }
    }
}

/// Add `"@context": "https://schema.org"` to a single node
pub fn with_context<T: Serialize>(node: &T) -> Result<Value, SchemaError> {
    match serde_json::to_value(node)? {
        Value::Object(mut obj) => {
            if let Some(previous) = obj.insert(CONTEXT_KEY.to_string(), context()) {
                log::warn!("replacing @context {} with {}", previous, context());
            }
            Ok(Value::Object(obj))
        }
        other => Err(SchemaError::InvalidInput(format!(
            "expected a JSON object node, got {}",
            other
        ))),
    }
}

/// Build a document holding several nodes in one `@graph`
pub fn graph(nodes: Vec<Value>) -> Value {
    let mut doc = Map::new();
    doc.insert(CONTEXT_KEY.to_string(), context());
    doc.insert(GRAPH_KEY.to_string(), Value::Array(nodes));
    Value::Object(doc)
}

/// Assemble built nodes into the value to embed in a page
///
/// A single node is enveloped directly; several nodes become an `@graph`.
/// Without the context envelope, a single node is returned bare and
/// several nodes as a plain array.
pub fn to_jsonld(mut nodes: Vec<Value>, options: &RenderOptions) -> Result<Value, SchemaError> {
    match (nodes.len(), options.include_context) {
        (1, true) => with_context(&nodes.remove(0)),
        (1, false) => Ok(nodes.remove(0)),
        (_, true) => Ok(graph(nodes)),
        (_, false) => Ok(Value::Array(nodes)),
    }
}

/// Serialize a document to a JSON string
pub fn to_json_string(document: &Value, pretty: bool) -> Result<String, SchemaError> {
    if pretty {
        Ok(serde_json::to_string_pretty(document)?)
    } else {
        Ok(serde_json::to_string(document)?)
    }
}
