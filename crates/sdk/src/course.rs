//! Course contexts and their URL spaces.

use serde::{Deserialize, Serialize};
use url::Url;

/// One course instance with its own canonical URL space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseContext {
    /// Course title shown in the switcher.
    pub title: String,

    /// URL namespace root (e.g., "/", "/physics").
    pub slug: String,
}

impl CourseContext {
    pub fn new(title: &str, slug: &str) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
        }
    }

    /// Map `location` into this course's URL space.
    ///
    /// Absolute URLs are returned unchanged. For the root course (`/`) the
    /// result is `location` with a single leading slash; otherwise the slug
    /// is prepended.
    pub fn canonical_url(&self, location: &str) -> String {
        if Url::parse(location).is_ok() {
            return location.to_string();
        }

        let relative = location.trim_start_matches('/');
        let slug = self.slug.trim_end_matches('/');
        if slug.is_empty() {
            format!("/{relative}")
        } else if slug.starts_with('/') {
            format!("{slug}/{relative}")
        } else {
            format!("/{slug}/{relative}")
        }
    }

    /// True when both contexts own the same URL space.
    pub fn same_course(&self, other: &CourseContext) -> bool {
        self.slug.trim_end_matches('/') == other.slug.trim_end_matches('/')
    }
}
