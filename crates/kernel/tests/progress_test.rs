#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Translation progress dashboard tests.

use coursedesk_kernel::menu::AllowAll;
use coursedesk_kernel::progress::{
    ActionPolicy, Progress, ProgressTable, READONLY_MESSAGE, ResourceGroup, ResourceRow,
    apply_dashboard, dashboard_actions,
};
use coursedesk_kernel::{PageShell, ShellSettings, ThemeEngine};
use coursedesk_test_utils::{assert, test_page};

fn groups() -> Vec<ResourceGroup> {
    vec![
        ResourceGroup::new(
            "Units and Lessons",
            vec![
                ResourceRow::new("unit:1", "Unit 1")
                    .with_view_url("unit?unit=1")
                    .with_progress("fr", Progress::Done)
                    .with_progress("de", Progress::InProgress),
                ResourceRow::new("lesson:2", "Lesson <2>").with_view_url("unit?unit=1&lesson=2"),
            ],
        ),
        ResourceGroup::new("Questions", Vec::new()),
    ]
}

fn locales() -> Vec<String> {
    vec!["fr".into(), "de".into()]
}

#[test]
fn test_table_sections_and_status() {
    let theme = ThemeEngine::builtin().unwrap();
    let html = ProgressTable::build(groups(), locales())
        .render(&theme)
        .unwrap()
        .into_string();

    assert::contains(&html, "Units and Lessons");
    assert::contains(&html, "Empty section");
    assert::contains(&html, "Lesson &lt;2&gt;");
    assert::contains(&html, "class=\"status done\"");
    assert::contains(&html, "class=\"status in-progress\"");
    assert::occurs(&html, "class=\"status not-started\"", 2);
    assert::in_order(&html, "<th>fr</th>", "<th>de</th>");
    assert::in_order(&html, "Unit 1", "Questions");
}

#[test]
fn test_admin_column_links_main_locale_view() {
    let theme = ThemeEngine::builtin().unwrap();
    let html = ProgressTable::build(groups(), locales())
        .with_admin_column("en_US", "tok-1")
        .render(&theme)
        .unwrap()
        .into_string();

    assert::contains(&html, "data-is-translatable-xsrf-token=\"tok-1\"");
    assert::contains(&html, "<th class=\"main-locale\">en_US</th>");
    assert::contains(&html, "unit?unit=1&amp;hl=en_US");
    assert::occurs(&html, "class=\"is-translatable\"", 2);
    assert::contains(&html, "colspan=\"4\"");
}

#[test]
fn test_empty_course() {
    let theme = ThemeEngine::builtin().unwrap();
    let html = ProgressTable::build(Vec::new(), locales())
        .render(&theme)
        .unwrap()
        .into_string();

    assert::occurs(&html, "<tr class=", 1);
    assert::contains(&html, "No course content");
}

#[test]
fn test_readonly_table() {
    let theme = ThemeEngine::builtin().unwrap();
    let html = ProgressTable::build(groups(), locales())
        .with_admin_column("en_US", "tok-1")
        .readonly(true)
        .render(&theme)
        .unwrap()
        .into_string();

    assert::contains(&html, READONLY_MESSAGE);
    assert::not_contains(&html, "i18_console");
    assert::occurs(&html, " disabled>", 2);
}

#[test]
fn test_dashboard_page() {
    let theme = ThemeEngine::builtin().unwrap();
    let policy = ActionPolicy {
        is_readonly: false,
        locale_count: 3,
        production_mode: false,
        can_edit_settings: true,
    };
    let table = ProgressTable::build(groups(), locales());

    let mut page = test_page("I18n Workflow").build();
    apply_dashboard(&mut page, &theme, &table, &policy).unwrap();
    let html = PageShell::new(&theme, ShellSettings::default())
        .render(&page, &AllowAll)
        .unwrap()
        .into_string();

    assert::contains(&html, "gcb-action-i18n_dashboard");
    assert::contains(&html, "i18n-progress-table");
    assert::contains(&html, "id=\"translate_to_reverse_case\"");
    assert::contains(&html, "id=\"download_translation_files\"");
    assert::contains(&html, "id=\"edit_18n_settings\"");
    assert::in_order(&html, "i18n-progress-table", "gcb-toolbar");
}

#[test]
fn test_production_dashboard_uses_alerts() {
    let theme = ThemeEngine::builtin().unwrap();
    let policy = ActionPolicy {
        is_readonly: false,
        locale_count: 2,
        production_mode: true,
        can_edit_settings: false,
    };
    assert_eq!(dashboard_actions(&policy).len(), 4);

    let mut page = test_page("I18n Workflow").build();
    let table = ProgressTable::build(groups(), locales());
    apply_dashboard(&mut page, &theme, &table, &policy).unwrap();
    let html = PageShell::new(&theme, ShellSettings::default())
        .render(&page, &AllowAll)
        .unwrap()
        .into_string();

    assert::occurs(&html, "gcb-button-disabled", 4);
    assert::contains(&html, "onclick=\"alert(&quot;This operation takes");
    assert::not_contains(&html, "edit_18n_settings");
}
