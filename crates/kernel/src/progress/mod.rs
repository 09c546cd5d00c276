//! Translation progress dashboard.
//!
//! Builds the i18n workflow page content: a per-locale status table for
//! every translatable resource and the toolbar of translation actions.

mod actions;
mod table;

pub use actions::{
    ActionPolicy, DASHBOARD_ACTION, PRODUCTION_ALERT, apply_dashboard, dashboard_actions,
};
pub use table::{
    CONSOLE_ACTION, Progress, ProgressTable, READONLY_MESSAGE, ResourceGroup, ResourceRow,
    TableRow,
};
