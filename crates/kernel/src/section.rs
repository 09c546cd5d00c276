//! Content section renderer.
//!
//! Sections are flattened into template-friendly views and rendered through
//! `sections.html`. Each body variant maps to exactly one branch of the
//! template:
//! - `Pre`: emitted verbatim, no sanitization
//! - `Code`: escaped into a read-only editor hook, only when highlighting is on
//! - `Children`: ordered list, with a "none" placeholder when empty

use serde::Serialize;

use coursedesk_sdk::section::{Action, ContentSection, SectionBody};

use crate::error::RenderResult;
use crate::markup::Markup;
use crate::theme::ThemeEngine;

/// Template used for section lists.
pub const SECTIONS_TEMPLATE: &str = "sections.html";

/// Caller toggles for section rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionOptions {
    /// Whether the client-side code highlighter is available on the page.
    pub can_highlight_code: bool,
}

impl SectionOptions {
    /// True if the highlighter init script is needed for `sections`.
    pub fn needs_highlighter(&self, sections: &[ContentSection]) -> bool {
        self.can_highlight_code && sections.iter().any(ContentSection::has_code)
    }
}

/// Renders content sections with the theme's `sections.html`.
pub struct SectionRenderer<'a> {
    theme: &'a ThemeEngine,
}

impl<'a> SectionRenderer<'a> {
    pub fn new(theme: &'a ThemeEngine) -> Self {
        Self { theme }
    }

    /// Render `sections` in order.
    pub fn render(
        &self,
        sections: &[ContentSection],
        options: &SectionOptions,
    ) -> RenderResult<Markup> {
        let values = SectionsTemplate {
            sections: sections.iter().map(SectionView::from).collect(),
            can_highlight_code: options.can_highlight_code,
        };
        self.theme.render(SECTIONS_TEMPLATE, &values)
    }
}

#[derive(Serialize)]
struct SectionsTemplate<'a> {
    sections: Vec<SectionView<'a>>,
    can_highlight_code: bool,
}

/// Flattened section for the template; `kind` selects the body branch.
#[derive(Debug, Serialize)]
struct SectionView<'a> {
    title: Option<&'a str>,
    description: Option<&'a str>,
    kind: &'static str,
    pre: Option<&'a str>,
    code: Option<&'a str>,
    mode: Option<&'a str>,
    children: &'a [String],
    actions: Vec<ActionView<'a>>,
}

impl<'a> From<&'a ContentSection> for SectionView<'a> {
    fn from(section: &'a ContentSection) -> Self {
        let mut view = SectionView {
            title: non_empty(section.title.as_deref()),
            description: non_empty(section.description.as_deref()),
            kind: "children",
            pre: None,
            code: None,
            mode: None,
            children: &[],
            actions: section.actions.iter().map(ActionView::from).collect(),
        };

        match &section.body {
            SectionBody::Pre(markup) => {
                view.kind = "pre";
                view.pre = Some(markup.as_str());
            }
            SectionBody::Code { text, mode } => {
                view.kind = "code";
                view.code = Some(text.as_str());
                view.mode = Some(mode.as_str());
            }
            SectionBody::Children(children) => {
                view.children = children.as_slice();
            }
        }

        view
    }
}

#[derive(Debug, Serialize)]
struct ActionView<'a> {
    kind: &'static str,
    id: Option<&'a str>,
    caption: &'a str,
    href: Option<&'a str>,
    action: Option<&'a str>,
    xsrf_token: Option<&'a str>,
    params: Vec<ParamView<'a>>,
    message: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ParamView<'a> {
    name: &'a str,
    value: &'a str,
}

impl<'a> From<&'a Action> for ActionView<'a> {
    fn from(action: &'a Action) -> Self {
        let mut view = ActionView {
            kind: "link",
            id: action.id(),
            caption: action.caption(),
            href: None,
            action: None,
            xsrf_token: None,
            params: Vec::new(),
            message: None,
        };

        match action {
            Action::Link { href, .. } => {
                view.href = Some(href.as_str());
            }
            Action::Form {
                action,
                xsrf_token,
                params,
                ..
            } => {
                view.kind = "form";
                view.action = Some(action.as_str());
                view.xsrf_token = Some(xsrf_token.as_str());
                view.params = params
                    .iter()
                    .map(|(name, value)| ParamView { name, value })
                    .collect();
            }
            Action::Alert { message, .. } => {
                view.kind = "alert";
                view.message = Some(message.as_str());
            }
        }

        view
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
