pub mod config;
pub mod error;

// Access core: who is signed in, which shell they get, what they may see.
pub mod menus;
pub mod navigation;
pub mod role;
pub mod session;
pub mod shell;

pub use config::*;
pub use error::*;
pub use menus::menu_for;
pub use navigation::*;
pub use role::*;
pub use session::*;
pub use shell::*;
