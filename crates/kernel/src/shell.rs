//! Page shell: composes header, drawer, sections, and footer into one
//! complete HTML document.

use serde::Serialize;
use tracing::debug;

use coursedesk_sdk::course::CourseContext;
use coursedesk_sdk::page::PageModel;

use crate::config::Config;
use crate::error::RenderResult;
use crate::markup::Markup;
use crate::menu::{Breadcrumb, MenuAccess, MenuContext, breadcrumb, render_menu};
use crate::section::{SectionOptions, SectionRenderer};
use crate::theme::ThemeEngine;

/// Settings the shell needs beyond the page itself.
#[derive(Debug, Clone)]
pub struct ShellSettings {
    /// Footer product version when the page has none.
    pub product_version: String,
    /// Course-relative path each course switcher entry links to.
    pub switcher_path: String,
    pub site_admin_url: String,
}

impl From<&Config> for ShellSettings {
    fn from(config: &Config) -> Self {
        Self {
            product_version: config.product_version.clone(),
            switcher_path: config.switcher_path.clone(),
            site_admin_url: config.site_admin_url.clone(),
        }
    }
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Renders whole dashboard pages.
pub struct PageShell<'a> {
    theme: &'a ThemeEngine,
    settings: ShellSettings,
}

/// One entry of the course switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitcherEntry {
    pub title: String,
    pub href: String,
}

#[derive(Serialize)]
struct PageTemplate<'a> {
    page_title: &'a str,
    action: Option<&'a str>,
    course_title: &'a str,
    breadcrumb: Option<Breadcrumb>,
    switcher: Vec<SwitcherEntry>,
    is_global_admin: bool,
    site_admin_url: &'a str,
    extra_css_urls: &'a [String],
    extra_js_urls: &'a [String],
    page_headers: &'a [String],
    menu: Markup,
    main_content: &'a str,
    sections: Markup,
    alerts: Option<&'a str>,
    can_highlight_code: bool,
    needs_highlighter: bool,
    product_version: &'a str,
    application_id: &'a str,
    application_version: &'a str,
}

impl<'a> PageShell<'a> {
    pub fn new(theme: &'a ThemeEngine, settings: ShellSettings) -> Self {
        Self { theme, settings }
    }

    /// Render `page` as a complete HTML document.
    ///
    /// `access` decides which menu nodes the viewer sees.
    pub fn render(&self, page: &PageModel, access: &dyn MenuAccess) -> RenderResult<Markup> {
        let menu_ctx =
            MenuContext::new(&page.course, access).with_current(page.current_item.as_ref());
        let menu = render_menu(&page.menu, &menu_ctx);

        let options = SectionOptions {
            can_highlight_code: page.can_highlight_code,
        };
        let sections = SectionRenderer::new(self.theme).render(&page.sections, &options)?;

        let switcher = self.switcher(&page.course, &page.courses);
        debug!(
            action = page.action.as_deref().unwrap_or(""),
            sections = page.sections.len(),
            courses = switcher.len(),
            "rendering dashboard page"
        );

        let values = PageTemplate {
            page_title: &page.page_title,
            action: page.action.as_deref(),
            course_title: &page.course.title,
            breadcrumb: page
                .current_item
                .as_ref()
                .and_then(|current| breadcrumb(&page.menu, current, access, &page.course)),
            switcher,
            is_global_admin: page.is_global_admin,
            site_admin_url: &self.settings.site_admin_url,
            extra_css_urls: &page.extra_css_urls,
            extra_js_urls: &page.extra_js_urls,
            page_headers: &page.page_headers,
            menu,
            main_content: page.main_content.as_deref().unwrap_or_default(),
            sections,
            alerts: page.alerts.as_deref().filter(|a| !a.trim().is_empty()),
            can_highlight_code: page.can_highlight_code,
            needs_highlighter: options.needs_highlighter(&page.sections),
            product_version: page
                .product_version
                .as_deref()
                .unwrap_or(&self.settings.product_version),
            application_id: &page.application_id,
            application_version: &page.application_version,
        };

        let suggestions = ThemeEngine::page_suggestions(page.action.as_deref());
        self.theme.render_suggested(&suggestions, &values)
    }

    /// Every course except `current`, linked into its own URL space.
    pub fn switcher(&self, current: &CourseContext, courses: &[CourseContext]) -> Vec<SwitcherEntry> {
        courses
            .iter()
            .filter(|course| !course.same_course(current))
            .map(|course| SwitcherEntry {
                title: course.title.clone(),
                href: course.canonical_url(&self.settings.switcher_path),
            })
            .collect()
    }
}
