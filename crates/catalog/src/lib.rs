//! Product categories and menu settings for productnav.
//!
//! This crate has no browser or server dependencies so it can be used from
//! both the SSR binary and the hydrated WASM bundle.

mod errors;
mod model;
mod settings;

/// Exports all the core types of the library.
pub mod prelude {
    pub use crate::errors::{CatalogError, CatalogErrorKind};
    pub use crate::model::{Catalog, Category, Service};
    pub use crate::settings::{
        DEFAULT_SELECTION_FALLBACK_MS, DEFAULT_TRANSITION_MS, MenuSettings, SiteConfig,
    };
}
