//! Platform session stores. Desktop and mobile keep the session in a JSON
//! file; the web build keeps it in the tab's `sessionStorage`.

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use web::WebStore;

#[cfg(any(target_arch = "wasm32", test))]
use shared_types::AppError;

/// `sessionStorage` key the login flow writes the session under.
#[cfg(any(target_arch = "wasm32", test))]
pub const SESSION_KEY: &str = "printdesk.session";

/// Browser storage failures surface as `JsValue`s; keep their debug text.
#[cfg(any(target_arch = "wasm32", test))]
pub(crate) fn js_error(action: &str, err: impl std::fmt::Debug) -> AppError {
    AppError::storage(format!("{action}: {err:?}"))
}
