use shared_types::{MemoryStore, NavNode, PermissionCheck, Session, SessionAccessor};

/// Two-entry tree: an open Dashboard link and an Admin group whose only
/// child needs `user.manage`.
pub fn dashboard_and_admin() -> Vec<NavNode> {
    vec![
        NavNode::leaf("Dashboard", "/d"),
        NavNode::group(
            "Admin",
            vec![NavNode::leaf("Users", "/u").requires("user.manage")],
        ),
    ]
}

/// Accessor over an in-memory store holding `session`.
pub fn accessor_with(session: &Session) -> SessionAccessor<MemoryStore> {
    let accessor = SessionAccessor::new(MemoryStore::new());
    accessor
        .save_session(session)
        .expect("memory store never fails");
    accessor
}

/// Accessor over an in-memory store holding raw, possibly malformed, text.
pub fn accessor_with_raw(raw: &str) -> SessionAccessor<MemoryStore> {
    SessionAccessor::new(MemoryStore::with_raw(raw))
}

/// Walk the tree and assert every node passes `check` and no group is empty.
pub fn assert_visible_tree_sound(nodes: &[NavNode], check: &impl PermissionCheck) {
    for node in nodes {
        if let Some(code) = &node.required_permission {
            assert!(
                check.has_permission(code),
                "{} survived without {code}",
                node.label
            );
        }
        if let Some(children) = &node.children {
            assert!(!children.is_empty(), "empty group {} survived", node.label);
            assert_visible_tree_sound(children, check);
        }
    }
}

/// Grant every permission in `codes` whose index satisfies `keep`.
pub fn session_with_subset(role_id: u32, codes: &[String], keep: impl Fn(usize) -> bool) -> Session {
    Session::new(
        role_id,
        codes
            .iter()
            .enumerate()
            .filter(|(i, _)| keep(*i))
            .map(|(_, c)| c.clone()),
    )
}
