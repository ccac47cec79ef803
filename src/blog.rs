//! Blog node

use crate::tagged::{strip_type_override, Properties, Tagged};
use crate::vocab::BLOG_TYPE;

/// A blog that may contain BlogPosting nodes
///
/// https://schema.org/Blog
pub fn blog(mut properties: Properties) -> Tagged<Properties> {
    strip_type_override(&mut properties, BLOG_TYPE);
    Tagged::new(BLOG_TYPE, properties)
}
