//! BreadcrumbList construction
//!
//! Turns an ordered navigation trail into a schema.org BreadcrumbList.
//! See <https://developers.google.com/search/docs/appearance/structured-data/breadcrumb>.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SchemaError;
use crate::id::Target;
use crate::vocab::{BREADCRUMB_LIST_TYPE, ITEM_LIST_ORDER, LIST_ITEM_TYPE};

/// One step in a navigation trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    #[serde(rename = "item")]
    pub target: Target,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, target: impl Into<Target>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }
}

/// A positioned entry of a BreadcrumbList
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub position: usize,
    pub name: String,
    #[serde(rename = "item")]
    pub target: Target,
}

impl ListItem {
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

/// https://schema.org/BreadcrumbList
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "itemListElement")]
    items: Vec<ListItem>,
    #[serde(rename = "itemListOrder")]
    order: &'static str,
    #[serde(rename = "numberOfItems")]
    count: usize,
}

impl BreadcrumbList {
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn order(&self) -> &'static str {
        self.order
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Build a BreadcrumbList from an ordered trail
///
/// Positions are 1-based and follow the input order; nothing is sorted.
pub fn breadcrumbs(items: impl IntoIterator<Item = BreadcrumbItem>) -> BreadcrumbList {
    let items: Vec<ListItem> = items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| ListItem {
            kind: LIST_ITEM_TYPE,
            position: idx + 1,
            name: item.name,
            target: item.target,
        })
        .collect();

    log::trace!("built BreadcrumbList with {} items", items.len());

    BreadcrumbList {
        kind: BREADCRUMB_LIST_TYPE,
        count: items.len(),
        items,
        order: ITEM_LIST_ORDER,
    }
}

/// Resolve every relative URL target in a trail against a site base URL
pub fn resolve_breadcrumbs(
    items: &[BreadcrumbItem],
    base: &Url,
) -> Result<Vec<BreadcrumbItem>, SchemaError> {
    items
        .iter()
        .map(|item| {
            Ok(BreadcrumbItem {
                name: item.name.clone(),
                target: item.target.resolve_against(base)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{id_ref, parse_base_url};
    use serde_json::json;

    fn sample_trail() -> Vec<BreadcrumbItem> {
        vec![
            BreadcrumbItem::new("Home", "/"),
            BreadcrumbItem::new("Blog", "/blog"),
            BreadcrumbItem::new("Post Title", "/blog/post-title"),
        ]
    }

    #[test]
    fn test_breadcrumbs_positions_and_count() {
        let list = breadcrumbs(sample_trail());

        assert_eq!(list.kind(), "BreadcrumbList");
        assert_eq!(list.count(), 3);
        assert_eq!(list.items().len(), 3);

        for (idx, (entry, input)) in list.items().iter().zip(sample_trail()).enumerate() {
            assert_eq!(entry.kind(), "ListItem");
            assert_eq!(entry.position, idx + 1);
            assert_eq!(entry.name, input.name);
            assert_eq!(entry.target, input.target);
        }
    }

    #[test]
    fn test_breadcrumbs_json_shape() {
        let value = serde_json::to_value(breadcrumbs(sample_trail())).unwrap();

        assert_eq!(
            value,
            json!({
                "@type": "BreadcrumbList",
                "itemListElement": [
                    {"@type": "ListItem", "position": 1, "name": "Home", "item": "/"},
                    {"@type": "ListItem", "position": 2, "name": "Blog", "item": "/blog"},
                    {"@type": "ListItem", "position": 3, "name": "Post Title", "item": "/blog/post-title"}
                ],
                "itemListOrder": "Descending",
                "numberOfItems": 3
            })
        );
    }

    #[test]
    fn test_breadcrumbs_empty() {
        let list = breadcrumbs(Vec::<BreadcrumbItem>::new());

        assert!(list.items().is_empty());
        assert_eq!(list.count(), 0);
        assert_eq!(list.order(), "Descending");
    }

    #[test]
    fn test_breadcrumbs_keeps_duplicates_and_order() {
        // Deliberately not alphabetical, with a repeated name
        let list = breadcrumbs(vec![
            BreadcrumbItem::new("Zeta", "/z"),
            BreadcrumbItem::new("Alpha", "/a"),
            BreadcrumbItem::new("Zeta", "/z"),
        ]);

        let names: Vec<&str> = list.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Zeta"]);
        let positions: Vec<usize> = list.items().iter().map(|i| i.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_breadcrumbs_thing_target() {
        let list = breadcrumbs(vec![BreadcrumbItem::new(
            "Docs",
            id_ref("https://example.com/docs/"),
        )]);

        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(
            value["itemListElement"][0]["item"],
            json!({"@id": "https://example.com/docs/"})
        );
    }

    #[test]
    fn test_breadcrumb_item_from_json() {
        let item: BreadcrumbItem =
            serde_json::from_value(json!({"name": "Home", "item": "/"})).unwrap();
        assert_eq!(item, BreadcrumbItem::new("Home", "/"));
    }

    #[test]
    fn test_resolve_breadcrumbs() {
        let base = parse_base_url("https://example.com/").unwrap();
        let resolved = resolve_breadcrumbs(&sample_trail(), &base).unwrap();

        assert_eq!(resolved[0].target, Target::url("https://example.com/"));
        assert_eq!(
            resolved[2].target,
            Target::url("https://example.com/blog/post-title")
        );
        assert_eq!(resolved[1].name, "Blog");
    }
}
