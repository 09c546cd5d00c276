//! Content sections and their toolbar actions.
//!
//! The kernel renders sections via Tera templates; callers never hand it
//! raw section HTML, except for the trusted [`SectionBody::Pre`] body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A generic content section on the dashboard page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub body: SectionBody,

    #[serde(default)]
    pub actions: Vec<Action>,
}

/// Section body. Exactly one variant per section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionBody {
    /// Preformatted markup, emitted verbatim. The caller vouches for it.
    Pre(String),
    /// Read-only source text, highlighted client-side according to `mode`.
    Code { text: String, mode: String },
    /// Ordered list of plain-text entries.
    Children(Vec<String>),
}

/// A toolbar control attached to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Plain navigation.
    Link {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        href: String,
        caption: String,
    },
    /// POST form carrying the anti-forgery token and hidden parameters.
    Form {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        action: String,
        xsrf_token: String,
        #[serde(default)]
        params: BTreeMap<String, String>,
        caption: String,
    },
    /// Disabled control that explains itself in an alert box.
    Alert {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        message: String,
        caption: String,
    },
}

impl ContentSection {
    fn with_body(body: SectionBody) -> Self {
        Self {
            title: None,
            description: None,
            body,
            actions: Vec::new(),
        }
    }

    /// Section with a list body.
    pub fn list<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_body(SectionBody::Children(
            children.into_iter().map(Into::into).collect(),
        ))
    }

    /// Section with a preformatted body.
    pub fn pre(markup: &str) -> Self {
        Self::with_body(SectionBody::Pre(markup.into()))
    }

    /// Section with a code body.
    pub fn code(text: &str, mode: &str) -> Self {
        Self::with_body(SectionBody::Code {
            text: text.into(),
            mode: mode.into(),
        })
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn has_code(&self) -> bool {
        matches!(self.body, SectionBody::Code { .. })
    }
}

impl Action {
    pub fn link(caption: &str, href: &str) -> Self {
        Action::Link {
            id: None,
            href: href.into(),
            caption: caption.into(),
        }
    }

    pub fn form(caption: &str, action: &str, xsrf_token: &str) -> Self {
        Action::Form {
            id: None,
            action: action.into(),
            xsrf_token: xsrf_token.into(),
            params: BTreeMap::new(),
            caption: caption.into(),
        }
    }

    pub fn alert(caption: &str, message: &str) -> Self {
        Action::Alert {
            id: None,
            message: message.into(),
            caption: caption.into(),
        }
    }

    /// Set the control's DOM id.
    pub fn with_id(mut self, new_id: &str) -> Self {
        match &mut self {
            Action::Link { id, .. } | Action::Form { id, .. } | Action::Alert { id, .. } => {
                *id = Some(new_id.into());
            }
        }
        self
    }

    /// Add a hidden form parameter. Has no effect on non-form actions.
    pub fn param(mut self, name: &str, value: &str) -> Self {
        if let Action::Form { params, .. } = &mut self {
            params.insert(name.into(), value.into());
        }
        self
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Action::Link { id, .. } | Action::Form { id, .. } | Action::Alert { id, .. } => {
                id.as_deref()
            }
        }
    }

    pub fn caption(&self) -> &str {
        match self {
            Action::Link { caption, .. }
            | Action::Form { caption, .. }
            | Action::Alert { caption, .. } => caption,
        }
    }

    /// Replace the action with a disabled control showing `message`.
    ///
    /// Id and caption are kept.
    pub fn disabled(self, message: &str) -> Self {
        Action::Alert {
            id: self.id().map(str::to_string),
            message: message.into(),
            caption: self.caption().to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn body_uses_external_tagging() {
        let section = ContentSection::list(["x", "y"]);
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["body"]["children"][1], "y");

        let code = ContentSection::code("print(1)", "python");
        let json = serde_json::to_value(&code).unwrap();
        assert_eq!(json["body"]["code"]["mode"], "python");
    }

    #[test]
    fn action_tagged_by_type() {
        let json = r#"{"type": "form", "action": "/rest/delete", "xsrf_token": "tok",
                       "params": {"locale": "fr"}, "caption": "Delete"}"#;
        let action: Action = serde_json::from_str(json).unwrap();
        match action {
            Action::Form { params, .. } => assert_eq!(params["locale"], "fr"),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn param_only_applies_to_forms() {
        let link = Action::link("Go", "/go").param("a", "b");
        assert_eq!(link, Action::link("Go", "/go"));
    }

    #[test]
    fn disabled_keeps_id_and_caption() {
        let action = Action::link("Upload", "dashboard?action=upload")
            .with_id("upload")
            .disabled("Too slow here");
        assert_eq!(
            action,
            Action::Alert {
                id: Some("upload".into()),
                message: "Too slow here".into(),
                caption: "Upload".into(),
            }
        );
    }

    #[test]
    fn has_code() {
        assert!(ContentSection::code("x", "js").has_code());
        assert!(!ContentSection::pre("<b>x</b>").has_code());
    }
}
