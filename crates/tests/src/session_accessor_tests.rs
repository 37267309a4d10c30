use chrono::{Duration, Utc};
use shared_types::{MemoryStore, Role, Session, SessionAccessor, SessionStore};

use crate::common;

#[test]
fn test_signed_out_accessor_denies_every_code() {
    let accessor = SessionAccessor::new(MemoryStore::new());
    for code in ["", "order.view", "role.manage", "*", "user.manage"] {
        assert!(!accessor.has_permission(code), "granted {code:?}");
    }
}

#[test]
fn test_backend_login_payload_is_read() {
    let payload = serde_json::json!({
        "roleId": Role::Marketing.id(),
        "permissions": ["campaign.view", "lead.view"],
        "name": "Grace",
    });
    let accessor = common::accessor_with_raw(&payload.to_string());
    let session = accessor.get_session().expect("session present");
    assert_eq!(session.role(), Some(Role::Marketing));
    assert_eq!(session.display_name.as_deref(), Some("Grace"));
    assert!(accessor.has_permission("campaign.view"));
    assert!(!accessor.has_permission("campaign.manage"));
}

#[test]
fn test_extra_backend_fields_are_ignored() {
    let accessor = common::accessor_with_raw(
        r#"{"roleId": 6, "permissions": ["order.view"], "token": "abc", "email": "a@b.c"}"#,
    );
    assert!(accessor.has_permission("order.view"));
}

#[test]
fn test_logout_then_login_replaces_session_wholesale() {
    let accessor = common::accessor_with(&Session::new(1, ["role.manage", "order.view"]));
    accessor.clear_session().unwrap();
    accessor
        .save_session(&Session::new(6, ["order.view"]))
        .unwrap();

    let session = accessor.get_session().unwrap();
    assert_eq!(session.role_id, 6);
    assert!(!accessor.has_permission("role.manage"));
}

#[test]
fn test_clear_without_session_is_noop() {
    let accessor = SessionAccessor::new(MemoryStore::new());
    accessor.clear_session().unwrap();
    accessor.clear_session().unwrap();
    assert!(accessor.store().load().unwrap().is_none());
}

#[test]
fn test_expired_session_reads_as_signed_out() {
    let expired = Session::new(1, ["order.view"]).with_expiry(Utc::now() - Duration::hours(1));
    let accessor = common::accessor_with(&expired);
    assert!(accessor.get_session().is_none());
    assert!(!accessor.has_permission("order.view"));
}

#[test]
fn test_external_storage_change_is_seen_immediately() {
    let accessor = common::accessor_with(&Session::new(1, ["order.view"]));
    assert!(accessor.has_permission("order.view"));
    accessor.store().save("garbage").unwrap();
    assert!(!accessor.has_permission("order.view"));
    assert!(accessor.get_session().is_none());
}
