use dioxus::prelude::*;
use shared_types::NavNode;

/// Renders an already-filtered navigation tree as nested lists.
///
/// Groups show their label (a link when the group has a path) followed by
/// their children. The entry whose path equals `active_path` is marked
/// with `data-active="true"`.
#[component]
pub fn NavMenu(nodes: Vec<NavNode>, active_path: Option<String>) -> Element {
    rsx! {
        nav { class: "nav-menu",
            ul { class: "nav-menu-list",
                for node in nodes.iter() {
                    NavMenuItem {
                        key: "{node.label}",
                        node: node.clone(),
                        active_path: active_path.clone(),
                    }
                }
            }
        }
    }
}

/// One entry of [`NavMenu`], recursing into group children.
#[component]
pub fn NavMenuItem(node: NavNode, active_path: Option<String>) -> Element {
    let label = node.label.clone();
    let is_active = node.path.is_some() && node.path == active_path;
    let children = node.children.clone().unwrap_or_default();

    let heading = match node.path.clone() {
        Some(path) => rsx! {
            Link { to: path, class: "nav-menu-link",
                span {
                    class: "nav-menu-button",
                    "data-active": if is_active { "true" } else { "false" },
                    "{label}"
                }
            }
        },
        None => rsx! {
            span { class: "nav-menu-label", "{label}" }
        },
    };

    rsx! {
        li { class: if node.is_group() { "nav-menu-group" } else { "nav-menu-item" },
            {heading}
            if !children.is_empty() {
                ul { class: "nav-menu-sublist",
                    for child in children.iter() {
                        NavMenuItem {
                            key: "{child.label}",
                            node: child.clone(),
                            active_path: active_path.clone(),
                        }
                    }
                }
            }
        }
    }
}
