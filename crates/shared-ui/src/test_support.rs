//! SSR harness for components that render router links.

use dioxus::prelude::*;

#[derive(Clone, Copy)]
struct Body(fn() -> Element);

#[derive(Clone, Routable, Debug, PartialEq)]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Any { segments: Vec<String> },
}

#[component]
fn Root() -> Element {
    let Body(body) = use_context::<Body>();
    body()
}

#[component]
fn Any(segments: Vec<String>) -> Element {
    let _ = segments;
    let Body(body) = use_context::<Body>();
    body()
}

fn harness(body: Body) -> Element {
    use_context_provider(|| body);
    rsx! {
        Router::<TestRoute> {}
    }
}

/// Render `body` to HTML inside a router whose catch-all accepts any path.
pub(crate) fn render(body: fn() -> Element) -> String {
    let mut dom = VirtualDom::new_with_props(harness, Body(body));
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
