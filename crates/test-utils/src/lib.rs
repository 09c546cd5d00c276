//! Coursedesk test utilities.
//!
//! Helpers for integration testing: menu and page fixtures, access
//! predicates, and assertion utilities for rendered HTML.

use coursedesk_sdk::course::CourseContext;
use coursedesk_sdk::menu::{MenuNode, MenuPath};
use coursedesk_sdk::page::PageModel;
use coursedesk_sdk::section::ContentSection;

/// The default course, mounted at `/`.
pub fn default_course() -> CourseContext {
    CourseContext::new("Default Course", "/")
}

/// A course mounted under its own slug.
pub fn test_course(title: &str, slug: &str) -> CourseContext {
    CourseContext::new(title, slug)
}

/// Three courses: default, physics, and chemistry.
pub fn test_courses() -> Vec<CourseContext> {
    vec![
        default_course(),
        test_course("Physics", "/physics"),
        test_course("Chemistry", "/chem"),
    ]
}

/// Root{A, B{C, D}}, with every node linked into the dashboard.
pub fn sample_menu() -> MenuNode {
    MenuNode::root()
        .child(MenuNode::leaf("a", "A").with_href("dashboard?action=a"))
        .child(
            MenuNode::group("b", "B")
                .with_href("dashboard?action=b")
                .child(MenuNode::leaf("c", "C").with_href("dashboard?action=c"))
                .child(MenuNode::leaf("d", "D").with_href("dashboard?action=d")),
        )
}

/// A chain of nested groups `depth` levels deep ending in a leaf named
/// `leaf`.
pub fn nested_menu(depth: usize) -> MenuNode {
    let mut node = MenuNode::leaf("leaf", "Leaf");
    for level in (0..depth).rev() {
        let name = format!("g{level}");
        node = MenuNode::group(&name, &name.to_uppercase()).child(node);
    }
    MenuNode::root().child(node)
}

/// Access predicate hiding every node whose name is in `names`.
pub fn hide_named(
    names: &[&str],
) -> impl Fn(&MenuNode, &CourseContext) -> bool + Send + Sync + 'static {
    let hidden: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    move |node: &MenuNode, _course: &CourseContext| !hidden.iter().any(|h| *h == node.name)
}

/// Create a test page in the default course.
pub fn test_page(title: &str) -> TestPage {
    let mut page = PageModel::new(title, default_course());
    page.courses = test_courses();
    page.menu = sample_menu();
    TestPage { page }
}

/// A test page builder for creating page fixtures.
#[derive(Debug, Clone)]
pub struct TestPage {
    pub page: PageModel,
}

impl TestPage {
    /// Set the dashboard action.
    pub fn with_action(mut self, action: &str) -> Self {
        self.page.action = Some(action.to_string());
        self
    }

    /// Switch to another course.
    pub fn in_course(mut self, course: CourseContext) -> Self {
        self.page.course = course;
        self
    }

    /// Mark the item at `path` as current.
    pub fn with_current(mut self, path: &str) -> Self {
        self.page.current_item = Some(MenuPath::parse(path));
        self
    }

    /// Append a section.
    pub fn with_section(mut self, section: ContentSection) -> Self {
        self.page.sections.push(section);
        self
    }

    /// Set the alert message.
    pub fn with_alerts(mut self, alerts: &str) -> Self {
        self.page.alerts = Some(alerts.to_string());
        self
    }

    /// Enable the code highlighter.
    pub fn highlighted(mut self) -> Self {
        self.page.can_highlight_code = true;
        self
    }

    /// View as a global administrator.
    pub fn global_admin(mut self) -> Self {
        self.page.is_global_admin = true;
        self
    }

    /// Add a raw `<head>` fragment.
    pub fn with_header(mut self, header: &str) -> Self {
        self.page.page_headers.push(header.to_string());
        self
    }

    pub fn build(self) -> PageModel {
        self.page
    }
}

/// A page model in the JSON form the CLI accepts.
pub fn page_json() -> serde_json::Value {
    serde_json::json!({
        "page_title": "Outline",
        "action": "outline",
        "course": {"title": "Physics", "slug": "/physics"},
        "courses": [
            {"title": "Default Course", "slug": "/"},
            {"title": "Physics", "slug": "/physics"}
        ],
        "menu": {
            "name": "",
            "title": "",
            "kind": "group",
            "children": [
                {"name": "edit", "title": "Create", "kind": "group", "children": [
                    {"name": "outline", "title": "Outline", "kind": "leaf",
                     "href": "dashboard?action=outline"}
                ]}
            ]
        },
        "current_item": "edit/outline",
        "sections": [
            {"title": "Units", "body": {"children": ["Unit 1", "Unit 2"]}}
        ],
        "application_id": "physics-app",
        "application_version": "42"
    })
}

/// Assertion helpers for rendered HTML.
pub mod assert {
    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that `needle` occurs exactly `count` times.
    pub fn occurs(haystack: &str, needle: &str, count: usize) {
        let actual = haystack.matches(needle).count();
        assert_eq!(
            actual, count,
            "Expected '{needle}' {count} time(s), found {actual}\nActual: {haystack}"
        );
    }

    /// Assert that `first` appears before `second`.
    pub fn in_order(haystack: &str, first: &str, second: &str) {
        match (haystack.find(first), haystack.find(second)) {
            (Some(a), Some(b)) => assert!(
                a < b,
                "Expected '{first}' before '{second}'\nActual: {haystack}"
            ),
            _ => panic!("Expected both '{first}' and '{second}'\nActual: {haystack}"),
        }
    }
}
