//! Navigation drawer rendering.
//!
//! The drawer is rendered from a [`MenuNode`](coursedesk_sdk::menu::MenuNode)
//! tree:
//! - Nodes are filtered through an injected [`MenuAccess`] check
//! - DOM ids are derived from the node's path (`menu-item__group__name`)
//! - The current item and the groups leading to it are highlighted

mod access;
mod breadcrumb;
mod render;

pub use access::{AllowAll, MenuAccess};
pub use breadcrumb::{Breadcrumb, breadcrumb};
pub use render::{MenuContext, qualifier, render_group, render_menu};
