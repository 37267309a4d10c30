use serde::{Deserialize, Serialize};

use crate::shell::ShellId;

/// Organizational role of a dashboard user.
///
/// The numeric id is what the backend puts in the login response. Roles
/// only choose the layout shell; they never grant permissions on their own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Owner,
    Admin,
    Accountant,
    Reception,
    Technician,
    Sales,
    Controller,
    Manager,
    ProductionManager,
    Marketing,
    PosCashier,
    Support,
    Inventory,
}

/// Every role, ordered by id.
pub const ALL_ROLES: &[Role] = &[
    Role::Owner,
    Role::Admin,
    Role::Accountant,
    Role::Reception,
    Role::Technician,
    Role::Sales,
    Role::Controller,
    Role::Manager,
    Role::ProductionManager,
    Role::Marketing,
    Role::PosCashier,
    Role::Support,
    Role::Inventory,
];

impl Role {
    /// Resolve a backend role id. Unknown ids yield `None`, never a nearby role.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Role::Owner),
            2 => Some(Role::Admin),
            3 => Some(Role::Accountant),
            4 => Some(Role::Reception),
            5 => Some(Role::Technician),
            6 => Some(Role::Sales),
            7 => Some(Role::Controller),
            8 => Some(Role::Manager),
            9 => Some(Role::ProductionManager),
            10 => Some(Role::Marketing),
            11 => Some(Role::PosCashier),
            12 => Some(Role::Support),
            13 => Some(Role::Inventory),
            _ => None,
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Role::Owner => 1,
            Role::Admin => 2,
            Role::Accountant => 3,
            Role::Reception => 4,
            Role::Technician => 5,
            Role::Sales => 6,
            Role::Controller => 7,
            Role::Manager => 8,
            Role::ProductionManager => 9,
            Role::Marketing => 10,
            Role::PosCashier => 11,
            Role::Support => 12,
            Role::Inventory => 13,
        }
    }

    /// Layout shell this role is dispatched to.
    pub fn shell(&self) -> ShellId {
        ShellId::for_role(*self)
    }

    /// Lowercase key for logs and `data-` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Accountant => "accountant",
            Role::Reception => "reception",
            Role::Technician => "technician",
            Role::Sales => "sales",
            Role::Controller => "controller",
            Role::Manager => "manager",
            Role::ProductionManager => "production-manager",
            Role::Marketing => "marketing",
            Role::PosCashier => "pos-cashier",
            Role::Support => "support",
            Role::Inventory => "inventory",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Admin => "Administrator",
            Role::Accountant => "Accountant",
            Role::Reception => "Reception",
            Role::Technician => "Technician",
            Role::Sales => "Sales",
            Role::Controller => "Controller",
            Role::Manager => "Manager",
            Role::ProductionManager => "Production Manager",
            Role::Marketing => "Marketing",
            Role::PosCashier => "POS Cashier",
            Role::Support => "Support",
            Role::Inventory => "Inventory",
        }
    }
}
