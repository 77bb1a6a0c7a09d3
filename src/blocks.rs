pub mod header;
pub mod home;
pub mod not_found;
pub mod product_page;
pub mod products_page;
