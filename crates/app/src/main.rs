use dioxus::prelude::*;

mod auth;
mod config;
mod routes;
mod storage;

use auth::AuthState;
use routes::Route;

fn main() {
    config::load_config();
    dioxus::launch(App);
}

/// Session storage for this platform: a JSON file natively, the tab's
/// `sessionStorage` in the browser.
fn session_store() -> AuthState {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let store = storage::FileStore::new(config::session_file(&config::app_config().session));
        tracing::debug!(path = %store.path().display(), "using file session store");
        AuthState::new(store)
    }
    #[cfg(target_arch = "wasm32")]
    {
        let store = storage::WebStore::new(storage::SESSION_KEY);
        tracing::debug!(key = store.key(), "using sessionStorage session store");
        AuthState::new(store)
    }
}

#[component]
fn App() -> Element {
    use_context_provider(session_store);

    rsx! {
        Router::<Route> {}
    }
}
