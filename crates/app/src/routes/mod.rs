pub mod home;
pub mod login;
pub mod page;

use crate::auth::{use_auth, use_shell_view};
use crate::config::app_config;
use dioxus::prelude::*;
use shared_types::ShellId;
use shared_ui::ShellFrame;

use home::Home;
use login::Login;
use page::Page;

/// Application routes. Page bodies belong to the feature screens; this
/// router only decides which shell wraps them.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(RoleLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

/// Role layout: dispatches the shell and filters its menu on every render.
///
/// Without a session the user is sent to `/login`.
#[component]
fn RoleLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let (session, view) = use_shell_view();

    if view.shell == ShellId::Unauthenticated {
        navigator().push(Route::Login {});
    }

    let display_name = session.and_then(|s| s.display_name);

    rsx! {
        ShellFrame {
            shell: view.shell,
            brand: app_config().dashboard.brand.clone(),
            nodes: view.nodes,
            display_name,
            active_path: Some(route.to_string()),
            on_sign_out: move |_| {
                auth.sign_out();
                navigator().push(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}
