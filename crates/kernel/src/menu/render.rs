//! Menu tree → drawer HTML.

use std::fmt::Write;

use coursedesk_sdk::course::CourseContext;
use coursedesk_sdk::menu::{MenuNode, MenuPath, NodeKind};

use super::access::MenuAccess;
use crate::markup::{Markup, html_escape};

/// Read-only request context for one menu render.
pub struct MenuContext<'a> {
    /// Path of the selected item, if any.
    pub current: Option<&'a MenuPath>,
    /// Course whose URL space relative hrefs resolve into.
    pub course: &'a CourseContext,
    pub access: &'a dyn MenuAccess,
}

impl<'a> MenuContext<'a> {
    pub fn new(course: &'a CourseContext, access: &'a dyn MenuAccess) -> Self {
        Self {
            current: None,
            course,
            access,
        }
    }

    pub fn with_current(mut self, current: Option<&'a MenuPath>) -> Self {
        self.current = current;
        self
    }

    fn is_current(&self, path: &MenuPath) -> bool {
        self.current == Some(path)
    }

    /// Group directly containing the current item.
    fn is_current_group(&self, path: &MenuPath) -> bool {
        self.current.and_then(MenuPath::parent).as_ref() == Some(path)
    }

    fn is_on_current_path(&self, path: &MenuPath) -> bool {
        self.current.is_some_and(|c| path.is_ancestor_of(c))
    }
}

/// Id qualifier for the children of the group at `path`.
///
/// Each ancestor segment is followed by `__`, so the root's qualifier is
/// empty and `b/c` gives `b__c__`.
pub fn qualifier(path: &MenuPath) -> String {
    path.segments().iter().map(|s| format!("{s}__")).collect()
}

/// Render the whole drawer list for the menu rooted at `root`.
pub fn render_menu(root: &MenuNode, ctx: &MenuContext<'_>) -> Markup {
    let items = render_group(root, &MenuPath::default(), ctx);
    Markup::new(format!("<ul class=\"gcb-menu\">{items}</ul>"))
}

/// Render the children of the group at `path` as `<li>` elements.
///
/// Children failing the access check are skipped with their subtrees. A
/// current item that does not resolve below `group` marks nothing.
pub fn render_group(group: &MenuNode, path: &MenuPath, ctx: &MenuContext<'_>) -> Markup {
    let ctx = MenuContext {
        current: ctx.current.filter(|c| resolves_below(group, path, c)),
        course: ctx.course,
        access: ctx.access,
    };

    let mut html = String::new();
    write_children(&mut html, group, path, &qualifier(path), &ctx);
    Markup::new(html)
}

fn resolves_below(group: &MenuNode, path: &MenuPath, current: &MenuPath) -> bool {
    let Some(relative) = current.segments().strip_prefix(path.segments()) else {
        return false;
    };
    group.find(&MenuPath::new(relative.to_vec())).is_some()
}

fn write_children(
    html: &mut String,
    group: &MenuNode,
    path: &MenuPath,
    qualifier: &str,
    ctx: &MenuContext<'_>,
) {
    for node in group.children() {
        if !ctx.access.can_view(node, ctx.course) {
            continue;
        }

        let node_path = path.join(&node.name);
        match &node.kind {
            NodeKind::Leaf => write_leaf(html, node, &node_path, qualifier, ctx),
            NodeKind::Group { .. } => write_group(html, node, &node_path, qualifier, ctx),
        }
    }
}

fn write_leaf(
    html: &mut String,
    node: &MenuNode,
    path: &MenuPath,
    qualifier: &str,
    ctx: &MenuContext<'_>,
) {
    let class = if ctx.is_current(path) {
        "menu-item active"
    } else {
        "menu-item"
    };

    // SAFETY: write!() to String is infallible
    #[allow(clippy::unwrap_used)]
    write!(
        html,
        "<li id=\"menu-item__{}{}\" class=\"{class}\">{}</li>",
        html_escape(qualifier),
        html_escape(&node.name),
        link(node, ctx),
    )
    .unwrap();
}

fn write_group(
    html: &mut String,
    node: &MenuNode,
    path: &MenuPath,
    qualifier: &str,
    ctx: &MenuContext<'_>,
) {
    let mut class = String::from("menu-group");
    if ctx.is_on_current_path(path) {
        class.push_str(" expanded");
    }
    if ctx.is_current_group(path) {
        class.push_str(" active");
    }

    let child_qualifier = format!("{qualifier}{}__", node.name);
    let mut children = String::new();
    write_children(&mut children, node, path, &child_qualifier, ctx);

    // SAFETY: write!() to String is infallible
    #[allow(clippy::unwrap_used)]
    write!(
        html,
        "<li id=\"menu-group__{}{}\" class=\"{class}\">\
         <div class=\"menu-group-title\">{}</div>\
         <ul class=\"menu-group-items\">{children}</ul></li>",
        html_escape(qualifier),
        html_escape(&node.name),
        link(node, ctx),
    )
    .unwrap();
}

/// Anchor for a node. Relative hrefs resolve into the current course.
fn link(node: &MenuNode, ctx: &MenuContext<'_>) -> String {
    let href = node
        .href
        .as_deref()
        .map(|h| format!(" href=\"{}\"", html_escape(&ctx.course.canonical_url(h))))
        .unwrap_or_default();
    let target = node
        .target
        .as_deref()
        .map(|t| format!(" target=\"{}\"", html_escape(t)))
        .unwrap_or_default();

    format!("<a{href}{target}>{}</a>", html_escape(&node.title))
}
