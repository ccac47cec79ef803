//! WebSite, WebPage and WebApplication nodes

use crate::tagged::{strip_type_override, Properties, Tagged};
use crate::vocab::{WEBAPP_TYPE, WEBPAGE_TYPE, WEBSITE_TYPE};

fn tag(kind: &'static str, mut properties: Properties) -> Tagged<Properties> {
    strip_type_override(&mut properties, kind);
    Tagged::new(kind, properties)
}

/// A set of related web pages
///
/// https://schema.org/WebSite
pub fn website(properties: Properties) -> Tagged<Properties> {
    tag(WEBSITE_TYPE, properties)
}

/// The default node for a page
///
/// https://schema.org/WebPage
pub fn webpage(properties: Properties) -> Tagged<Properties> {
    tag(WEBPAGE_TYPE, properties)
}

/// Takes WebPage-shaped properties and tags them as an application
///
/// https://schema.org/WebApplication
pub fn webapp(properties: Properties) -> Tagged<Properties> {
    tag(WEBAPP_TYPE, properties)
}
