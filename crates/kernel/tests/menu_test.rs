#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Navigation drawer tests.

use std::collections::HashSet;

use coursedesk_kernel::menu::{AllowAll, MenuContext, breadcrumb, render_menu};
use coursedesk_sdk::course::CourseContext;
use coursedesk_sdk::menu::{MenuNode, MenuPath};
use coursedesk_test_utils::{assert, default_course, hide_named, nested_menu, sample_menu};

fn ids(html: &str) -> Vec<&str> {
    html.split("id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

#[test]
fn test_sample_tree_ids_and_classes() {
    let course = default_course();
    let current = MenuPath::parse("b/d");
    let ctx = MenuContext::new(&course, &AllowAll).with_current(Some(&current));
    let html = render_menu(&sample_menu(), &ctx).into_string();

    assert_eq!(
        ids(&html),
        vec!["menu-item__a", "menu-group__b", "menu-item__b__c", "menu-item__b__d"]
    );
    assert::contains(&html, "id=\"menu-item__a\" class=\"menu-item\"");
    assert::contains(&html, "id=\"menu-group__b\" class=\"menu-group expanded active\"");
    assert::contains(&html, "id=\"menu-item__b__c\" class=\"menu-item\"");
    assert::contains(&html, "id=\"menu-item__b__d\" class=\"menu-item active\"");
    assert::occurs(&html, "active", 2);
}

#[test]
fn test_current_leaf_marks_its_group() {
    let root = MenuNode::root().child(MenuNode::leaf("A", "A")).child(
        MenuNode::group("B", "B")
            .child(MenuNode::leaf("C", "C"))
            .child(MenuNode::leaf("D", "D")),
    );
    let course = default_course();
    let current = MenuPath::parse("B/C");
    let ctx = MenuContext::new(&course, &AllowAll).with_current(Some(&current));
    let html = render_menu(&root, &ctx).into_string();

    assert::contains(&html, "id=\"menu-item__A\" class=\"menu-item\"");
    assert::contains(&html, "id=\"menu-group__B\" class=\"menu-group expanded active\"");
    assert::contains(&html, "id=\"menu-item__B__C\" class=\"menu-item active\"");
    assert::contains(&html, "id=\"menu-item__B__D\" class=\"menu-item\"");
}

#[test]
fn test_children_keep_order() {
    let course = default_course();
    let ctx = MenuContext::new(&course, &AllowAll);
    let html = render_menu(&sample_menu(), &ctx).into_string();

    assert::in_order(&html, "menu-item__a", "menu-group__b");
    assert::in_order(&html, "menu-item__b__c", "menu-item__b__d");
}

#[test]
fn test_no_current_item_marks_nothing() {
    let course = default_course();
    let ctx = MenuContext::new(&course, &AllowAll);
    let html = render_menu(&sample_menu(), &ctx).into_string();

    assert::not_contains(&html, "active");
    assert::not_contains(&html, "expanded");
}

#[test]
fn test_unknown_current_item_marks_nothing() {
    let course = default_course();
    let current = MenuPath::parse("b/zzz");
    let ctx = MenuContext::new(&course, &AllowAll).with_current(Some(&current));
    let html = render_menu(&sample_menu(), &ctx).into_string();

    assert::not_contains(&html, "active");
    assert::not_contains(&html, "expanded");
}

#[test]
fn test_hidden_leaf_is_skipped() {
    let course = default_course();
    let access = hide_named(&["c"]);
    let ctx = MenuContext::new(&course, &access);
    let html = render_menu(&sample_menu(), &ctx).into_string();

    assert_eq!(ids(&html), vec!["menu-item__a", "menu-group__b", "menu-item__b__d"]);
}

#[test]
fn test_hidden_group_hides_visible_descendants() {
    let course = default_course();
    let access = hide_named(&["b"]);
    let ctx = MenuContext::new(&course, &access);
    let html = render_menu(&sample_menu(), &ctx).into_string();

    assert_eq!(ids(&html), vec!["menu-item__a"]);
    assert::not_contains(&html, "menu-item__b__c");
    assert::not_contains(&html, "menu-item__b__d");
}

#[test]
fn test_access_sees_course() {
    let physics = CourseContext::new("Physics", "/physics");
    let access = |node: &MenuNode, course: &CourseContext| {
        node.name != "a" || course.slug == "/physics"
    };

    let ctx = MenuContext::new(&physics, &access);
    let html = render_menu(&sample_menu(), &ctx).into_string();
    assert::contains(&html, "menu-item__a");
    assert::contains(&html, "href=\"/physics/dashboard?action=a\"");

    let course = default_course();
    let ctx = MenuContext::new(&course, &access);
    let html = render_menu(&sample_menu(), &ctx).into_string();
    assert::not_contains(&html, "menu-item__a");
}

#[test]
fn test_deep_nesting_qualifies_ids() {
    let course = default_course();
    let current = MenuPath::parse("g0/g1/g2/g3/g4/leaf");
    let ctx = MenuContext::new(&course, &AllowAll).with_current(Some(&current));
    let html = render_menu(&nested_menu(5), &ctx).into_string();

    assert::contains(
        &html,
        "id=\"menu-item__g0__g1__g2__g3__g4__leaf\" class=\"menu-item active\"",
    );
    assert::contains(&html, "id=\"menu-group__g0\" class=\"menu-group expanded\"");
    assert::contains(
        &html,
        "id=\"menu-group__g0__g1__g2__g3\" class=\"menu-group expanded\"",
    );
    assert::contains(
        &html,
        "id=\"menu-group__g0__g1__g2__g3__g4\" class=\"menu-group expanded active\"",
    );
    assert::occurs(&html, " active\"", 2);
}

#[test]
fn test_ids_are_unique() {
    // Same names under different groups
    let root = MenuNode::root()
        .child(MenuNode::leaf("edit", "Edit"))
        .child(MenuNode::group("units", "Units").child(MenuNode::leaf("edit", "Edit")))
        .child(MenuNode::group("lessons", "Lessons").child(MenuNode::leaf("edit", "Edit")))
        .child(
            MenuNode::group("units__x", "Odd")
                .child(MenuNode::group("units", "Units").child(MenuNode::leaf("edit", "Edit"))),
        );

    let course = default_course();
    let ctx = MenuContext::new(&course, &AllowAll);
    let html = render_menu(&root, &ctx).into_string();

    let ids = ids(&html);
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), 8);
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_render_is_deterministic() {
    let course = default_course();
    let current = MenuPath::parse("b/c");
    let ctx = MenuContext::new(&course, &AllowAll).with_current(Some(&current));

    let first = render_menu(&sample_menu(), &ctx);
    let second = render_menu(&sample_menu(), &ctx);
    assert_eq!(first, second);
}

#[test]
fn test_absolute_href_kept() {
    let root = MenuNode::root()
        .child(MenuNode::leaf("help", "Help").with_href("https://example.com/help?a=1&b=2"));
    let course = CourseContext::new("Physics", "/physics");
    let ctx = MenuContext::new(&course, &AllowAll);
    let html = render_menu(&root, &ctx).into_string();

    assert::contains(&html, "href=\"https://example.com/help?a=1&amp;b=2\"");
}

#[test]
fn test_breadcrumb_for_sample_tree() {
    let menu = sample_menu();
    let course = default_course();

    let crumb = breadcrumb(&menu, &MenuPath::parse("b/d"), &AllowAll, &course).unwrap();
    assert_eq!(crumb.group.as_deref(), Some("B"));
    assert_eq!(crumb.item, "D");

    let crumb = breadcrumb(&menu, &MenuPath::parse("a"), &AllowAll, &course).unwrap();
    assert!(crumb.group.is_none());
    assert_eq!(crumb.item, "A");

    assert!(breadcrumb(&menu, &MenuPath::parse("nope"), &AllowAll, &course).is_none());
}

#[test]
fn test_breadcrumb_respects_access() {
    let menu = sample_menu();
    let course = default_course();
    let access = hide_named(&["b"]);

    assert!(breadcrumb(&menu, &MenuPath::parse("b/d"), &access, &course).is_none());
    assert!(breadcrumb(&menu, &MenuPath::parse("a"), &access, &course).is_some());
}
