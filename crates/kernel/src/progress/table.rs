//! Translation progress table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RenderResult;
use crate::markup::Markup;
use crate::theme::ThemeEngine;

/// Template used for the progress table.
pub const PROGRESS_TEMPLATE: &str = "progress.html";

/// Dashboard action of the per-resource translation console.
pub const CONSOLE_ACTION: &str = "i18_console";

/// Shown instead of edit controls when translation edits are disabled.
pub const READONLY_MESSAGE: &str = "Translation console is currently disabled. \
     Course administrator can enable it via I18N Settings.";

/// Translation state of one resource in one locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Progress {
    #[default]
    NotStarted,
    InProgress,
    Done,
}

impl Progress {
    pub fn class_name(self) -> &'static str {
        match self {
            Progress::NotStarted => "not-started",
            Progress::InProgress => "in-progress",
            Progress::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Progress::NotStarted => "Not started",
            Progress::InProgress => "In progress",
            Progress::Done => "Done",
        }
    }
}

/// One translatable course resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRow {
    /// Resource key (e.g., "unit:12").
    pub key: String,
    pub title: String,
    /// Where the resource is viewed; the locale is appended as `hl=`.
    #[serde(default)]
    pub view_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_translatable: bool,
    /// Per-locale progress; missing locales have not been started.
    #[serde(default)]
    pub progress: BTreeMap<String, Progress>,
}

fn default_true() -> bool {
    true
}

impl ResourceRow {
    pub fn new(key: &str, title: &str) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            view_url: None,
            is_translatable: true,
            progress: BTreeMap::new(),
        }
    }

    pub fn with_view_url(mut self, url: &str) -> Self {
        self.view_url = Some(url.into());
        self
    }

    pub fn with_progress(mut self, locale: &str, progress: Progress) -> Self {
        self.progress.insert(locale.into(), progress);
        self
    }

    pub fn not_translatable(mut self) -> Self {
        self.is_translatable = false;
        self
    }

    pub fn progress_for(&self, locale: &str) -> Progress {
        self.progress.get(locale).copied().unwrap_or_default()
    }

    pub fn class_name(&self) -> &'static str {
        if self.is_translatable {
            ""
        } else {
            "not-translatable"
        }
    }

    /// Translation console URL for this resource in `locale`.
    ///
    /// The console addresses a bundle as `type:id:locale` in one `key`
    /// parameter.
    pub fn edit_url(&self, locale: &str) -> String {
        let bundle_key = format!("{}:{locale}", self.key);
        format!(
            "dashboard?action={CONSOLE_ACTION}&key={}",
            urlencoding::encode(&bundle_key)
        )
    }

    /// View URL with the display language forced to `locale`.
    pub fn view_url_for(&self, locale: &str) -> Option<String> {
        self.view_url.as_ref().map(|url| {
            let separator = if url.contains('?') { '&' } else { '?' };
            format!("{url}{separator}hl={}", urlencoding::encode(locale))
        })
    }
}

/// Resources of one type (units, lessons, questions, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub title: String,
    #[serde(default)]
    pub rows: Vec<ResourceRow>,
}

impl ResourceGroup {
    pub fn new(title: &str, rows: Vec<ResourceRow>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}

/// A row of the progress table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Spacer before each section.
    Blank,
    /// Section heading spanning all columns.
    Section(String),
    /// Placeholder spanning all columns.
    Empty { name: String, class_name: String },
    Resource(ResourceRow),
}

impl TableRow {
    fn empty(name: &str) -> Self {
        TableRow::Empty {
            name: name.into(),
            class_name: "empty_section".into(),
        }
    }

    pub fn class_name(&self) -> &str {
        match self {
            TableRow::Blank => "blank-row",
            TableRow::Section(_) => "section-row",
            TableRow::Empty { class_name, .. } => class_name,
            TableRow::Resource(row) => row.class_name(),
        }
    }
}

/// Per-locale translation status of every course resource.
#[derive(Debug, Clone)]
pub struct ProgressTable {
    rows: Vec<TableRow>,
    /// Locales the viewer may translate into, excluding the main locale.
    locales: Vec<String>,
    /// Shown to course admins, with the translatable toggles.
    main_locale: Option<String>,
    translatable_xsrf_token: Option<String>,
    is_readonly: bool,
}

impl ProgressTable {
    /// Lay out `groups` as sections of the table.
    ///
    /// Each group becomes a spacer, a heading, and its rows (or an
    /// "Empty section" placeholder). A table with no resources at all
    /// collapses to a single "No course content" row.
    pub fn build(groups: Vec<ResourceGroup>, locales: Vec<String>) -> Self {
        let mut rows = Vec::new();
        for group in groups {
            rows.push(TableRow::Blank);
            rows.push(TableRow::Section(group.title));
            if group.rows.is_empty() {
                rows.push(TableRow::empty("Empty section"));
            } else {
                rows.extend(group.rows.into_iter().map(TableRow::Resource));
            }
        }

        if !rows.iter().any(|r| matches!(r, TableRow::Resource(_))) {
            rows = vec![TableRow::empty("No course content")];
        }

        Self {
            rows,
            locales,
            main_locale: None,
            translatable_xsrf_token: None,
            is_readonly: false,
        }
    }

    /// Add the main-locale column with translatable toggles (course admins).
    pub fn with_admin_column(mut self, main_locale: &str, xsrf_token: &str) -> Self {
        self.main_locale = Some(main_locale.into());
        self.translatable_xsrf_token = Some(xsrf_token.into());
        self
    }

    pub fn readonly(mut self, is_readonly: bool) -> Self {
        self.is_readonly = is_readonly;
        self
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn is_readonly(&self) -> bool {
        self.is_readonly
    }

    /// Resource column plus one per locale, plus the admin column.
    pub fn num_columns(&self) -> usize {
        1 + self.locales.len() + usize::from(self.main_locale.is_some())
    }

    pub fn render(&self, theme: &ThemeEngine) -> RenderResult<Markup> {
        let values = ProgressTemplate {
            locales: &self.locales,
            main_locale: self.main_locale.as_deref(),
            translatable_xsrf_token: self.translatable_xsrf_token.as_deref(),
            is_readonly: self.is_readonly,
            readonly_message: READONLY_MESSAGE,
            num_columns: self.num_columns(),
            rows: self.rows.iter().map(|r| self.row_view(r)).collect(),
        };
        theme.render(PROGRESS_TEMPLATE, &values)
    }

    fn row_view<'a>(&'a self, row: &'a TableRow) -> RowView<'a> {
        let mut view = RowView {
            kind: "heading",
            class_name: row.class_name(),
            name: "",
            key: None,
            is_translatable: true,
            view_url: None,
            cells: Vec::new(),
        };

        match row {
            TableRow::Blank => {}
            TableRow::Section(title) => view.name = title.as_str(),
            TableRow::Empty { name, .. } => view.name = name.as_str(),
            TableRow::Resource(resource) => {
                view.kind = "resource";
                view.name = resource.title.as_str();
                view.key = Some(resource.key.as_str());
                view.is_translatable = resource.is_translatable;
                view.view_url = self
                    .main_locale
                    .as_deref()
                    .and_then(|main| resource.view_url_for(main))
                    .or_else(|| resource.view_url.clone());
                view.cells = self
                    .locales
                    .iter()
                    .map(|locale| {
                        let progress = resource.progress_for(locale);
                        CellView {
                            class_name: progress.class_name(),
                            label: progress.label(),
                            edit_url: (!self.is_readonly && resource.is_translatable)
                                .then(|| resource.edit_url(locale)),
                        }
                    })
                    .collect();
            }
        }

        view
    }
}

#[derive(Serialize)]
struct ProgressTemplate<'a> {
    locales: &'a [String],
    main_locale: Option<&'a str>,
    translatable_xsrf_token: Option<&'a str>,
    is_readonly: bool,
    readonly_message: &'a str,
    num_columns: usize,
    rows: Vec<RowView<'a>>,
}

#[derive(Serialize)]
struct RowView<'a> {
    kind: &'static str,
    class_name: &'a str,
    name: &'a str,
    key: Option<&'a str>,
    is_translatable: bool,
    view_url: Option<String>,
    cells: Vec<CellView>,
}

#[derive(Serialize)]
struct CellView {
    class_name: &'static str,
    label: &'static str,
    edit_url: Option<String>,
}
