use crate::auth::use_auth;
use dioxus::prelude::*;

/// Signed-in landing page.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let session = auth.session();
    let role = session
        .as_ref()
        .and_then(|s| s.role())
        .map(|r| r.display_name())
        .unwrap_or("Guest");
    let name = session
        .and_then(|s| s.display_name)
        .unwrap_or_else(|| role.to_string());

    rsx! {
        div { class: "home-page",
            h1 { "Welcome, {name}" }
            p { class: "home-role", "Signed in as {role}" }
        }
    }
}
