//! Hand-authored navigation trees, one per role shell.
//!
//! Roles pick a tree; permissions decide what survives in it. Every menu
//! opens with an ungated Dashboard link so a freshly provisioned user
//! still has somewhere to land.

use std::sync::LazyLock;

use crate::navigation::NavNode;
use crate::shell::ShellId;

// ---------------------------------------------------------------------------
// Shared sections
// ---------------------------------------------------------------------------

fn dashboard(path: &str) -> NavNode {
    NavNode::leaf("Dashboard", path)
}

fn orders() -> NavNode {
    NavNode::group(
        "Orders",
        vec![
            NavNode::leaf("All orders", "/orders").requires("order.view"),
            NavNode::leaf("New order", "/orders/new").requires("order.create"),
            NavNode::leaf("Design proofs", "/orders/proofs").requires("design.view"),
        ],
    )
}

fn customers() -> NavNode {
    NavNode::group(
        "Customers",
        vec![
            NavNode::leaf("Directory", "/customers").requires("customer.view"),
            NavNode::leaf("Add customer", "/customers/new").requires("customer.manage"),
        ],
    )
}

fn invoices() -> NavNode {
    NavNode::group(
        "Invoices",
        vec![
            NavNode::leaf("All invoices", "/invoices").requires("invoice.view"),
            NavNode::leaf("Create invoice", "/invoices/new").requires("invoice.create"),
            NavNode::leaf("Payments", "/invoices/payments").requires("payment.view"),
        ],
    )
}

fn materials() -> NavNode {
    NavNode::group(
        "Materials",
        vec![
            NavNode::leaf("Stock levels", "/materials").requires("material.view"),
            NavNode::leaf("Adjust stock", "/materials/adjust").requires("stock.adjust"),
            NavNode::leaf("Suppliers", "/materials/suppliers").requires("supplier.view"),
            NavNode::leaf("Purchase orders", "/materials/purchases").requires("purchase.view"),
        ],
    )
    .with_path("/materials")
}

fn production() -> NavNode {
    NavNode::group(
        "Production",
        vec![
            NavNode::leaf("Job queue", "/jobs").requires("job.view"),
            NavNode::leaf("Assign jobs", "/jobs/assign").requires("job.assign"),
            NavNode::leaf("My jobs", "/jobs/mine").requires("job.update"),
        ],
    )
}

fn reports() -> NavNode {
    NavNode::group(
        "Reports",
        vec![
            NavNode::leaf("Financial", "/reports/financial").requires("report.financial"),
            NavNode::leaf("Sales", "/reports/sales").requires("report.sales"),
            NavNode::leaf("Production", "/reports/production").requires("report.production"),
        ],
    )
}

fn access_control() -> NavNode {
    NavNode::group(
        "Access control",
        vec![
            NavNode::leaf("Users", "/admin/users").requires("user.manage"),
            NavNode::leaf("Roles", "/admin/roles").requires("role.manage"),
            NavNode::leaf("Permissions", "/admin/permissions").requires("permission.manage"),
            NavNode::leaf("Audit log", "/admin/audit").requires("audit.view"),
        ],
    )
}

fn settings() -> NavNode {
    NavNode::leaf("Settings", "/settings").requires("settings.manage")
}

// ---------------------------------------------------------------------------
// Role menus
// ---------------------------------------------------------------------------

static OWNER: LazyLock<Vec<NavNode>> = LazyLock::new(|| {
    vec![
        dashboard("/owner"),
        orders(),
        customers(),
        invoices(),
        materials(),
        production(),
        reports(),
        access_control(),
        settings(),
    ]
});

static ADMIN: LazyLock<Vec<NavNode>> = LazyLock::new(|| {
    vec![
        dashboard("/admin"),
        access_control(),
        NavNode::group(
            "Catalog",
            vec![
                NavNode::leaf("Products", "/admin/products").requires("product.view"),
                NavNode::leaf("Pricing", "/admin/pricing").requires("product.manage"),
            ],
        ),
        settings(),
    ]
});

static ACCOUNTANT: LazyLock<Vec<NavNode>> = LazyLock::new(|| {
    vec![
        dashboard("/accounting"),
        invoices(),
        NavNode::group(
            "Expenses",
            vec![
                NavNode::leaf("Expense ledger", "/expenses").requires("expense.view"),
                NavNode::leaf("Record expense", "/expenses/new").requires("expense.manage"),
            ],
        ),
        NavNode::leaf("Financial reports", "/reports/financial").requires("report.financial"),
    ]
});

static CONTROLLER: LazyLock<Vec<NavNode>> = LazyLock::new(|| {
    vec![
        dashboard("/controller"),
        orders(),
        production(),
        NavNode::group(
            "Quality",
            vec![
                NavNode::leaf("Inspections", "/quality/inspections").requires("quality.view"),
                NavNode::leaf("Reprints", "/quality/reprints").requires("quality.manage"),
            ],
        ),
        reports(),
    ]
});

static MARKETING: LazyLock<Vec<NavNode>> = LazyLock::new(|| {
    vec![
        dashboard("/marketing"),
        NavNode::group(
            "Campaigns",
            vec![
                NavNode::leaf("All campaigns", "/campaigns").requires("campaign.view"),
                NavNode::leaf("New campaign", "/campaigns/new").requires("campaign.manage"),
                NavNode::leaf("Promotions", "/campaigns/promotions").requires("promotion.manage"),
            ],
        )
        .with_path("/campaigns"),
        NavNode::leaf("Leads", "/leads").requires("lead.view"),
        customers(),
        NavNode::leaf("Sales reports", "/reports/sales").requires("report.sales"),
    ]
});

static INVENTORY: LazyLock<Vec<NavNode>> = LazyLock::new(|| {
    vec![
        dashboard("/inventory"),
        materials(),
        NavNode::group(
            "Products",
            vec![
                NavNode::leaf("Finished goods", "/products").requires("product.view"),
                NavNode::leaf("Bill of materials", "/products/bom").requires("product.manage"),
            ],
        ),
    ]
});

static RECEPTION: LazyLock<Vec<NavNode>> = LazyLock::new(|| {
    vec![
        dashboard("/reception"),
        NavNode::group(
            "Front desk",
            vec![
                NavNode::leaf("Appointments", "/appointments").requires("appointment.view"),
                NavNode::leaf("Book appointment", "/appointments/new")
                    .requires("appointment.manage"),
                NavNode::leaf("Order pickup", "/orders/pickup").requires("order.view"),
            ],
        ),
        orders(),
        customers(),
    ]
});

static TECHNICIAN: LazyLock<Vec<NavNode>> = LazyLock::new(|| {
    vec![
        dashboard("/technician"),
        production(),
        NavNode::leaf("Design files", "/designs").requires("design.view"),
        NavNode::leaf("Material requests", "/materials/requests").requires("material.view"),
    ]
});

static SUPPORT: LazyLock<Vec<NavNode>> = LazyLock::new(|| {
    vec![
        dashboard("/support"),
        NavNode::group(
            "Tickets",
            vec![
                NavNode::leaf("Open tickets", "/tickets").requires("ticket.view"),
                NavNode::leaf("Escalations", "/tickets/escalations").requires("ticket.manage"),
            ],
        )
        .with_path("/tickets"),
        NavNode::leaf("Feedback", "/feedback").requires("feedback.view"),
        customers(),
    ]
});

static SALES: LazyLock<Vec<NavNode>> = LazyLock::new(|| {
    vec![
        dashboard("/sales"),
        orders(),
        customers(),
        NavNode::group(
            "Quotes",
            vec![
                NavNode::leaf("All quotes", "/quotes").requires("quote.view"),
                NavNode::leaf("New quote", "/quotes/new").requires("quote.create"),
            ],
        ),
        NavNode::leaf("Sales reports", "/reports/sales").requires("report.sales"),
    ]
});

static POS: LazyLock<Vec<NavNode>> = LazyLock::new(|| {
    vec![
        dashboard("/pos"),
        NavNode::group(
            "Register",
            vec![
                NavNode::leaf("New sale", "/pos/sale").requires("pos.sell"),
                NavNode::leaf("Refunds", "/pos/refunds").requires("pos.refund"),
                NavNode::leaf("Shift close", "/pos/shift").requires("pos.shift"),
            ],
        ),
        NavNode::leaf("Transactions", "/pos/transactions").requires("payment.view"),
    ]
});

/// The static menu mounted by `shell`. Shells without chrome have none.
pub fn menu_for(shell: ShellId) -> &'static [NavNode] {
    match shell {
        ShellId::Owner => OWNER.as_slice(),
        ShellId::Admin => ADMIN.as_slice(),
        ShellId::Accountant => ACCOUNTANT.as_slice(),
        ShellId::Controller => CONTROLLER.as_slice(),
        ShellId::Marketing => MARKETING.as_slice(),
        ShellId::Inventory => INVENTORY.as_slice(),
        ShellId::Reception => RECEPTION.as_slice(),
        ShellId::Technician => TECHNICIAN.as_slice(),
        ShellId::Support => SUPPORT.as_slice(),
        ShellId::Sales => SALES.as_slice(),
        ShellId::Pos => POS.as_slice(),
        ShellId::Bare | ShellId::Unauthenticated => &[],
    }
}
