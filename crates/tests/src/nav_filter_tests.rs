use pretty_assertions::assert_eq;
use shared_types::{filter_tree, strip_permissions, NavNode, Session};

use crate::common;

#[test]
fn test_no_permissions_drops_admin_group() {
    let session = Session::new(1, Vec::<String>::new());
    let visible = filter_tree(&common::dashboard_and_admin(), &session);
    assert_eq!(visible, vec![NavNode::leaf("Dashboard", "/d")]);
}

#[test]
fn test_user_manage_keeps_admin_with_users() {
    let session = Session::new(1, ["user.manage"]);
    let visible = filter_tree(&common::dashboard_and_admin(), &session);
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].label, "Dashboard");
    assert_eq!(visible[1].label, "Admin");
    assert_eq!(
        visible[1].children,
        Some(vec![NavNode::leaf("Users", "/u").requires("user.manage")])
    );
}

#[test]
fn test_absent_session_denies_every_gate() {
    let none: Option<Session> = None;
    let visible = filter_tree(&common::dashboard_and_admin(), &none);
    assert_eq!(visible, vec![NavNode::leaf("Dashboard", "/d")]);
}

#[test]
fn test_accessor_backed_filter_follows_storage() {
    let accessor = common::accessor_with(&Session::new(2, ["user.manage"]));
    assert_eq!(filter_tree(&common::dashboard_and_admin(), &accessor).len(), 2);

    accessor.clear_session().unwrap();
    assert_eq!(filter_tree(&common::dashboard_and_admin(), &accessor).len(), 1);
}

#[test]
fn test_malformed_session_filters_as_signed_out() {
    let accessor = common::accessor_with_raw(r#"{"roleId": "owner", "permissions": ["user.manage"]}"#);
    let visible = filter_tree(&common::dashboard_and_admin(), &accessor);
    assert_eq!(visible, vec![NavNode::leaf("Dashboard", "/d")]);
}

#[test]
fn test_ungated_child_under_granted_parent_is_shown() {
    let tree = vec![NavNode::group(
        "Finance",
        vec![
            NavNode::leaf("Overview", "/finance"),
            NavNode::leaf("Payroll", "/finance/payroll").requires("payroll.view"),
        ],
    )
    .requires("finance.view")];

    let visible = filter_tree(&tree, &Session::new(1, ["finance.view"]));
    let children = visible[0].children.as_deref().unwrap();
    assert_eq!(children, &[NavNode::leaf("Overview", "/finance")]);
}

#[test]
fn test_filtering_a_fully_visible_tree_is_a_noop() {
    let session = Session::new(1, ["user.manage"]);
    let visible = filter_tree(&common::dashboard_and_admin(), &session);
    let reinterpreted = strip_permissions(&visible);
    let nobody = Session::new(1, Vec::<String>::new());
    assert_eq!(filter_tree(&reinterpreted, &nobody), reinterpreted);
}

#[test]
fn test_filter_does_not_touch_shared_input() {
    let tree = common::dashboard_and_admin();
    let snapshot = tree.clone();
    for perms in [vec![], vec!["user.manage"]] {
        let _ = filter_tree(&tree, &Session::new(1, perms));
    }
    assert_eq!(tree, snapshot);
}
