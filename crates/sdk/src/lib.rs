//! Coursedesk SDK
//!
//! Data model consumed by the dashboard renderers. Callers build these
//! values fresh for every request; the kernel only reads them.

pub mod course;
pub mod menu;
pub mod page;
pub mod section;

// Re-export serde_json for callers assembling pages from JSON
#[doc(hidden)]
pub use serde_json;

pub mod prelude {
    pub use crate::course::CourseContext;
    pub use crate::menu::{MenuNode, MenuPath, NodeKind};
    pub use crate::page::PageModel;
    pub use crate::section::{Action, ContentSection, SectionBody};
}
