//! Header breadcrumb for the current menu item.

use serde::Serialize;

use coursedesk_sdk::course::CourseContext;
use coursedesk_sdk::menu::{MenuNode, MenuPath};

use super::access::MenuAccess;

/// "group › item" trail shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Title of the group directly containing the item, if any.
    pub group: Option<String>,
    pub item: String,
}

/// Resolve the breadcrumb for `current` in the tree rooted at `root`.
///
/// Returns `None` when the path is empty, does not resolve, or passes
/// through a node `access` hides in `course`.
pub fn breadcrumb(
    root: &MenuNode,
    current: &MenuPath,
    access: &dyn MenuAccess,
    course: &CourseContext,
) -> Option<Breadcrumb> {
    let trail = root.trail(current)?;
    if !trail.iter().all(|node| access.can_view(node, course)) {
        return None;
    }
    let (item, ancestors) = trail.split_last()?;
    Some(Breadcrumb {
        group: ancestors.last().map(|g| g.title.clone()),
        item: item.title.clone(),
    })
}
