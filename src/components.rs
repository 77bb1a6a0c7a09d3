pub mod icon;
pub mod menu;
