pub mod layout;
pub mod menu;
pub mod navigation;
