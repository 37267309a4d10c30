use dioxus::prelude::*;
use shared_types::{NavNode, ShellId};

use crate::components::nav_menu::NavMenu;

/// Chrome around page content for the dispatched shell.
///
/// - `Unauthenticated`: a redirect notice, children are not rendered.
/// - `Bare`: children only.
/// - Role shells: top bar (brand, shell title, user, sign out), sidebar
///   with the filtered `nodes`, and the children in the main area.
#[component]
pub fn ShellFrame(
    shell: ShellId,
    brand: String,
    nodes: Vec<NavNode>,
    display_name: Option<String>,
    active_path: Option<String>,
    on_sign_out: EventHandler<()>,
    children: Element,
) -> Element {
    match shell {
        ShellId::Unauthenticated => rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        },
        ShellId::Bare => rsx! {
            {children}
        },
        _ => {
            let title = shell.title();
            let key = shell.as_str();
            let user = display_name.unwrap_or_else(|| "Signed in".to_string());
            rsx! {
                div { class: "shell", "data-shell": "{key}",
                    header { class: "shell-topnav",
                        span { class: "shell-brand", "{brand}" }
                        span { class: "shell-title", "{title}" }
                        div { class: "shell-user",
                            span { class: "shell-user-name", "{user}" }
                            button {
                                class: "shell-sign-out",
                                onclick: move |_| on_sign_out.call(()),
                                "Sign out"
                            }
                        }
                    }
                    div { class: "shell-body",
                        aside { class: "shell-sidebar",
                            NavMenu { nodes: nodes.clone(), active_path: active_path.clone() }
                        }
                        main { class: "shell-content", {children} }
                    }
                }
            }
        }
    }
}
