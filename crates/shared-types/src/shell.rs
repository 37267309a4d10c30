use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;
use crate::session::Session;

/// Layout shell wrapping page content: a top bar plus a role sidebar.
///
/// - `Bare` renders content with no chrome. Unknown role ids land here.
/// - `Unauthenticated` renders nothing but a redirect notice; the caller
///   sends the user to the login page.
/// - Every other variant is a role shell with navigation chrome.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ShellId {
    Owner,
    Admin,
    Accountant,
    Controller,
    Marketing,
    Inventory,
    Reception,
    Technician,
    Support,
    Sales,
    Pos,
    Bare,
    Unauthenticated,
}

/// Shells that carry navigation chrome.
pub const ROLE_SHELLS: &[ShellId] = &[
    ShellId::Owner,
    ShellId::Admin,
    ShellId::Accountant,
    ShellId::Controller,
    ShellId::Marketing,
    ShellId::Inventory,
    ShellId::Reception,
    ShellId::Technician,
    ShellId::Support,
    ShellId::Sales,
    ShellId::Pos,
];

impl ShellId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShellId::Owner => "owner",
            ShellId::Admin => "admin",
            ShellId::Accountant => "accountant",
            ShellId::Controller => "controller",
            ShellId::Marketing => "marketing",
            ShellId::Inventory => "inventory",
            ShellId::Reception => "reception",
            ShellId::Technician => "technician",
            ShellId::Support => "support",
            ShellId::Sales => "sales",
            ShellId::Pos => "pos",
            ShellId::Bare => "bare",
            ShellId::Unauthenticated => "unauthenticated",
        }
    }

    /// Heading shown in the shell's top bar.
    pub fn title(&self) -> &'static str {
        match self {
            ShellId::Owner => "Owner Console",
            ShellId::Admin => "Administration",
            ShellId::Accountant => "Accounting",
            ShellId::Controller => "Controlling",
            ShellId::Marketing => "Marketing",
            ShellId::Inventory => "Inventory",
            ShellId::Reception => "Front Desk",
            ShellId::Technician => "Production Floor",
            ShellId::Support => "Support Desk",
            ShellId::Sales => "Sales",
            ShellId::Pos => "Point of Sale",
            ShellId::Bare | ShellId::Unauthenticated => "",
        }
    }

    /// Whether this shell renders top and side navigation.
    pub fn has_chrome(&self) -> bool {
        !matches!(self, ShellId::Bare | ShellId::Unauthenticated)
    }

    /// The dispatch table. Exhaustive over [`Role`], so adding a role
    /// without choosing its shell fails to compile.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Owner | Role::Manager => ShellId::Owner,
            Role::Admin => ShellId::Admin,
            Role::Accountant => ShellId::Accountant,
            Role::Controller => ShellId::Controller,
            Role::Marketing => ShellId::Marketing,
            Role::Inventory => ShellId::Inventory,
            Role::Reception => ShellId::Reception,
            Role::Technician | Role::ProductionManager => ShellId::Technician,
            Role::Support => ShellId::Support,
            Role::Sales => ShellId::Sales,
            Role::PosCashier => ShellId::Pos,
        }
    }
}

impl fmt::Display for ShellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the shell for the current session snapshot.
///
/// No session yields [`ShellId::Unauthenticated`]; an unmapped role id
/// yields [`ShellId::Bare`].
pub fn select_shell(session: Option<&Session>) -> ShellId {
    let Some(session) = session else {
        return ShellId::Unauthenticated;
    };
    match Role::from_id(session.role_id) {
        Some(role) => role.shell(),
        None => {
            tracing::warn!(role_id = session.role_id, "unknown role id, using bare shell");
            ShellId::Bare
        }
    }
}
