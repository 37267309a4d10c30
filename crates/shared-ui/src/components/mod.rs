pub mod nav_menu;
pub mod shell_frame;
