pub mod components;

#[cfg(test)]
mod test_support;

pub use components::nav_menu::{NavMenu, NavMenuItem};
pub use components::shell_frame::ShellFrame;
