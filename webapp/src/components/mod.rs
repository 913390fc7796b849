pub mod action_bar;
pub mod additions;
pub mod call_menu;
pub mod footer;
pub mod header;
pub mod section;
