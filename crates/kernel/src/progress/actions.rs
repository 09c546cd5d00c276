//! Toolbar and page assembly for the translation progress dashboard.

use coursedesk_sdk::page::PageModel;
use coursedesk_sdk::section::{Action, ContentSection};

use super::table::ProgressTable;
use crate::error::RenderResult;
use crate::theme::ThemeEngine;

/// Dashboard action name of the progress page.
pub const DASHBOARD_ACTION: &str = "i18n_dashboard";

/// Replaces the long-running actions when running in production.
pub const PRODUCTION_ALERT: &str = "This operation takes a substantial amount of time, and \
     is very likely to time out when executed from a web browser talking to a \
     production server. Alternatives are to work with a development server or \
     use the ETL scripts to do translation upload/download. See the file \
     .../scripts/etl.sh in your Coursedesk download for complete instructions \
     on usage.";

/// What the viewer and course allow on the progress dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionPolicy {
    /// Translation edits are disabled for the course.
    pub is_readonly: bool,
    /// Number of locales the course is offered in, the main one included.
    pub locale_count: usize,
    pub production_mode: bool,
    /// The viewer may open the I18N settings editor.
    pub can_edit_settings: bool,
}

/// Toolbar actions of the progress dashboard, in display order.
///
/// Translation actions need a writable course; file actions additionally
/// need more than one locale. In production all of them turn into alerts.
/// The settings link is never disabled.
pub fn dashboard_actions(policy: &ActionPolicy) -> Vec<Action> {
    let mut actions = Vec::new();

    if !policy.is_readonly {
        actions.push(
            Action::link(
                "\"Translate\" to rEVERSED cAPS",
                &action_url("i18n_reverse_case"),
            )
            .with_id("translate_to_reverse_case"),
        );
        if policy.locale_count > 1 {
            actions.push(
                Action::link("Delete Translations", &action_url("i18n_delete"))
                    .with_id("delete_translation"),
            );
            actions.push(
                Action::link("Upload Translation Files", &action_url("i18n_upload"))
                    .with_id("upload_translation_files"),
            );
            actions.push(
                Action::link("Download Translation Files", &action_url("i18n_download"))
                    .with_id("download_translation_files"),
            );
        }
    }

    if policy.production_mode {
        actions = actions
            .into_iter()
            .map(|a| a.disabled(PRODUCTION_ALERT))
            .collect();
    }

    if policy.can_edit_settings {
        let exit_url = format!("dashboard?action={DASHBOARD_ACTION}");
        actions.push(
            Action::link(
                "Edit I18N Settings",
                &format!(
                    "{}&exit_url={}",
                    action_url("settings_i18n"),
                    urlencoding::encode(&exit_url)
                ),
            )
            .with_id("edit_18n_settings"),
        );
    }

    actions
}

fn action_url(action: &str) -> String {
    format!("dashboard?action={action}")
}

/// Fill `page` with the progress dashboard: the rendered table as main
/// content and a single toolbar section.
pub fn apply_dashboard(
    page: &mut PageModel,
    theme: &ThemeEngine,
    table: &ProgressTable,
    policy: &ActionPolicy,
) -> RenderResult<()> {
    page.action = Some(DASHBOARD_ACTION.to_string());
    page.main_content = Some(table.render(theme)?.into_string());

    let mut toolbar = ContentSection::pre(" ");
    toolbar.actions = dashboard_actions(policy);
    page.sections = vec![toolbar];

    Ok(())
}
