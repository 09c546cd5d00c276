//! Menu tree model for the navigation drawer.
//!
//! A menu is a tree of [`MenuNode`]s. The root is always a group whose
//! children are the top-level drawer entries; the root itself is never
//! rendered. Node names only need to be unique among siblings, which is
//! enough to make the path-qualified DOM ids unique across the tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A node in the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Stable identifier segment (e.g., "settings", "i18n_dashboard").
    pub name: String,

    /// Display label.
    pub title: String,

    /// Link target (e.g., "_blank").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Link URL. Relative URLs are resolved against the current course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(flatten)]
    pub kind: NodeKind,
}

/// Leaf or group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    Leaf,
    Group {
        #[serde(default)]
        children: Vec<MenuNode>,
    },
}

impl MenuNode {
    /// Create a leaf node.
    pub fn leaf(name: &str, title: &str) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            target: None,
            href: None,
            kind: NodeKind::Leaf,
        }
    }

    /// Create an empty group node.
    pub fn group(name: &str, title: &str) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            target: None,
            href: None,
            kind: NodeKind::Group {
                children: Vec::new(),
            },
        }
    }

    /// Create the unnamed root group of a menu.
    pub fn root() -> Self {
        Self::group("", "")
    }

    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Append a child. Has no effect on leaves.
    pub fn child(mut self, node: MenuNode) -> Self {
        if let NodeKind::Group { children } = &mut self.kind {
            children.push(node);
        }
        self
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group { .. })
    }

    /// Children in order; empty for leaves.
    pub fn children(&self) -> &[MenuNode] {
        match &self.kind {
            NodeKind::Group { children } => children,
            NodeKind::Leaf => &[],
        }
    }

    /// Nodes visited when walking `path` down from this node, excluding
    /// this node itself.
    ///
    /// Returns `None` if any segment does not resolve.
    pub fn trail(&self, path: &MenuPath) -> Option<Vec<&MenuNode>> {
        let mut trail = Vec::with_capacity(path.len());
        let mut node = self;
        for segment in path.segments() {
            node = node.children().iter().find(|c| &c.name == segment)?;
            trail.push(node);
        }
        Some(trail)
    }

    /// Find the node at `path` below this node.
    pub fn find(&self, path: &MenuPath) -> Option<&MenuNode> {
        if path.is_empty() {
            return None;
        }
        self.trail(path).and_then(|t| t.last().copied())
    }
}

/// Path of node names from the root to a node.
///
/// Serialized as a `/`-separated string (e.g., `"settings/i18n"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MenuPath(Vec<String>);

impl MenuPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Parse a `/`-separated path. Empty segments are ignored.
    pub fn parse(path: &str) -> Self {
        Self(
            path.split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Path extended by one segment.
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.to_string());
        Self(segments)
    }

    /// Path of the containing group. `None` for top-level and empty paths.
    pub fn parent(&self) -> Option<MenuPath> {
        match self.0.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self(rest.to_vec())),
            _ => None,
        }
    }

    /// True if `self` is a proper prefix of `other`.
    pub fn is_ancestor_of(&self, other: &MenuPath) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }
}

impl fmt::Display for MenuPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

impl From<String> for MenuPath {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for MenuPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<MenuPath> for String {
    fn from(path: MenuPath) -> Self {
        path.to_string()
    }
}
