use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;

/// Landing page for signed-out users.
///
/// Credentials are exchanged by the backend login flow, which writes the
/// session this client reads. Once one exists the user can return.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();

    rsx! {
        div { class: "login-page",
            h1 { "Sign in" }
            if auth.is_authenticated() {
                p { "You are already signed in." }
                Link { to: Route::Home {}, "Continue to your dashboard" }
            } else {
                p { "Your session has ended. Sign in again to continue." }
            }
        }
    }
}
