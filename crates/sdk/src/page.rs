//! Complete input for one dashboard page render.

use serde::{Deserialize, Serialize};

use crate::course::CourseContext;
use crate::menu::{MenuNode, MenuPath};
use crate::section::ContentSection;

/// Everything the page shell needs, prepared by the request handler.
///
/// Markup-typed fields (`main_content`, `page_headers`) are spliced into the
/// page verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageModel {
    pub page_title: String,

    /// Dashboard action being rendered (e.g., "i18n_dashboard").
    #[serde(default)]
    pub action: Option<String>,

    /// Course the page belongs to.
    pub course: CourseContext,

    /// All courses the viewer may switch to, the current one included.
    #[serde(default)]
    pub courses: Vec<CourseContext>,

    /// Root group of the navigation drawer.
    #[serde(default = "MenuNode::root")]
    pub menu: MenuNode,

    #[serde(default)]
    pub current_item: Option<MenuPath>,

    #[serde(default)]
    pub sections: Vec<ContentSection>,

    #[serde(default)]
    pub can_highlight_code: bool,

    #[serde(default)]
    pub is_global_admin: bool,

    #[serde(default)]
    pub extra_css_urls: Vec<String>,

    #[serde(default)]
    pub extra_js_urls: Vec<String>,

    /// Message shown in the butterbar on load.
    #[serde(default)]
    pub alerts: Option<String>,

    #[serde(default)]
    pub application_id: String,

    #[serde(default)]
    pub application_version: String,

    /// Product version for the footer; the configured default when absent.
    #[serde(default)]
    pub product_version: Option<String>,

    #[serde(default)]
    pub main_content: Option<String>,

    #[serde(default)]
    pub page_headers: Vec<String>,
}

impl PageModel {
    /// A page with an empty menu and no sections.
    pub fn new(page_title: &str, course: CourseContext) -> Self {
        Self {
            page_title: page_title.into(),
            action: None,
            courses: vec![course.clone()],
            course,
            menu: MenuNode::root(),
            current_item: None,
            sections: Vec::new(),
            can_highlight_code: false,
            is_global_admin: false,
            extra_css_urls: Vec::new(),
            extra_js_urls: Vec::new(),
            alerts: None,
            application_id: String::new(),
            application_version: String::new(),
            product_version: None,
            main_content: None,
            page_headers: Vec::new(),
        }
    }

    /// True if any section needs the code highlighter.
    pub fn has_code(&self) -> bool {
        self.sections.iter().any(ContentSection::has_code)
    }
}
