pub mod driver;
pub mod layout;
pub mod mega_menu;
pub mod state;
