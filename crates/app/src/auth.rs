use dioxus::prelude::*;
use shared_types::{
    filter_tree, menu_for, select_shell, NavNode, Session, SessionAccessor, SessionStore,
    ShellId,
};
use std::rc::Rc;

/// Global authentication state.
///
/// The store stays the source of truth; `revision` only tells Dioxus to
/// re-render after this client signs out.
#[derive(Clone)]
pub struct AuthState {
    accessor: Rc<SessionAccessor<Box<dyn SessionStore>>>,
    revision: Signal<u64>,
}

impl AuthState {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        let store: Box<dyn SessionStore> = Box::new(store);
        Self {
            accessor: Rc::new(SessionAccessor::new(store)),
            revision: Signal::new(0),
        }
    }

    /// Fresh snapshot of the persisted session.
    pub fn session(&self) -> Option<Session> {
        let _ = self.revision.read();
        self.accessor.get_session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn sign_out(&self) {
        if let Err(e) = self.accessor.clear_session() {
            tracing::warn!(error = %e, "failed to clear session");
        }
        self.bump();
    }

    fn bump(&self) {
        let mut revision = self.revision;
        revision += 1;
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Shell plus the part of its menu the session may see.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellView {
    pub shell: ShellId,
    pub nodes: Vec<NavNode>,
}

/// Dispatch the shell for `session` and filter that shell's menu.
pub fn shell_view(session: Option<&Session>) -> ShellView {
    let shell = select_shell(session);
    let nodes = match session {
        Some(session) => filter_tree(menu_for(shell), session),
        None => Vec::new(),
    };
    ShellView { shell, nodes }
}

/// Hook computing the [`ShellView`] for the current session.
/// Re-evaluated on every render; nothing is cached across sign-in changes.
pub fn use_shell_view() -> (Option<Session>, ShellView) {
    let auth = use_auth();
    let session = auth.session();
    let view = shell_view(session.as_ref());
    (session, view)
}
