//! Visibility checks for menu nodes.

use coursedesk_sdk::course::CourseContext;
use coursedesk_sdk::menu::MenuNode;

/// Decides whether the current viewer may see a menu node.
///
/// A node that fails the check is dropped together with its whole
/// subtree.
pub trait MenuAccess: Send + Sync {
    fn can_view(&self, node: &MenuNode, course: &CourseContext) -> bool;
}

/// Access check that shows every node.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl MenuAccess for AllowAll {
    fn can_view(&self, _node: &MenuNode, _course: &CourseContext) -> bool {
        true
    }
}

impl<F> MenuAccess for F
where
    F: Fn(&MenuNode, &CourseContext) -> bool + Send + Sync,
{
    fn can_view(&self, node: &MenuNode, course: &CourseContext) -> bool {
        self(node, course)
    }
}
