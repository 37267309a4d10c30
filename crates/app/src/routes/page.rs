use crate::routes::Route;
use dioxus::prelude::*;

/// Placeholder body for a menu destination inside the active shell.
#[component]
pub fn Page(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "page-placeholder",
            h1 { class: "page-placeholder-title", "{path}" }
            p { class: "page-placeholder-message",
                "This screen has no content yet."
            }
            Link { to: Route::Home {}, class: "page-placeholder-link", "Back to Dashboard" }
        }
    }
}
