use shared_types::{select_shell, Role, Session, ShellId, ALL_ROLES};

use crate::common;

fn shell_for_id(role_id: u32) -> ShellId {
    select_shell(Some(&Session::new(role_id, Vec::<String>::new())))
}

#[test]
fn test_no_session_is_unauthenticated() {
    assert_eq!(select_shell(None), ShellId::Unauthenticated);
}

#[test]
fn test_unmapped_role_gets_bare_shell() {
    assert_eq!(shell_for_id(99), ShellId::Bare);
    assert_ne!(shell_for_id(99), ShellId::Owner);
}

#[test]
fn test_ids_next_to_known_roles_are_bare() {
    let max = ALL_ROLES.iter().map(Role::id).max().unwrap();
    for id in [0, max + 1, max + 2, 100, 1000, u32::MAX] {
        let shell = shell_for_id(id);
        assert_eq!(shell, ShellId::Bare, "role id {id}");
        assert!(!shell.has_chrome());
    }
}

#[test]
fn test_every_known_role_gets_its_table_entry() {
    for role in ALL_ROLES {
        assert_eq!(shell_for_id(role.id()), role.shell());
    }
}

#[test]
fn test_dispatch_table() {
    let expected = [
        (1, ShellId::Owner),
        (2, ShellId::Admin),
        (3, ShellId::Accountant),
        (4, ShellId::Reception),
        (5, ShellId::Technician),
        (6, ShellId::Sales),
        (7, ShellId::Controller),
        (8, ShellId::Owner),
        (9, ShellId::Technician),
        (10, ShellId::Marketing),
        (11, ShellId::Pos),
        (12, ShellId::Support),
        (13, ShellId::Inventory),
    ];
    for (id, shell) in expected {
        assert_eq!(shell_for_id(id), shell, "role id {id}");
    }
}

#[test]
fn test_shell_follows_latest_persisted_session() {
    let accessor = common::accessor_with(&Session::new(Role::Sales.id(), ["order.view"]));
    assert_eq!(select_shell(accessor.get_session().as_ref()), ShellId::Sales);

    accessor
        .save_session(&Session::new(Role::Accountant.id(), ["invoice.view"]))
        .unwrap();
    assert_eq!(
        select_shell(accessor.get_session().as_ref()),
        ShellId::Accountant
    );

    accessor.clear_session().unwrap();
    assert_eq!(
        select_shell(accessor.get_session().as_ref()),
        ShellId::Unauthenticated
    );
}

#[test]
fn test_malformed_session_is_unauthenticated_not_bare() {
    let accessor = common::accessor_with_raw(r#"{"roleId": 1}"#);
    assert_eq!(
        select_shell(accessor.get_session().as_ref()),
        ShellId::Unauthenticated
    );
}
