use crate::errors::CatalogError;
use crate::model::{Catalog, Category};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a selection waits for its destination to report ready before
/// it is delivered anyway.
///
/// This is a placeholder, not a guarantee: slow renders can take longer.
/// Destinations should acknowledge readiness instead of relying on it.
pub const DEFAULT_SELECTION_FALLBACK_MS: u64 = 100;

/// Duration of the panel's enter/exit transition.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

static BUILTIN_SITE_CONFIG: &str = include_str!("../data/product_categories.json");

/// Labels and timings of the product menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    /// Text of the always-visible trigger.
    pub trigger_label: String,
    /// Text next to the "view all" link in the panel footer.
    pub footer_blurb: String,
    /// Text of the "view all" link.
    pub view_all_label: String,
    /// See [`DEFAULT_SELECTION_FALLBACK_MS`].
    pub selection_fallback_ms: u64,
    /// See [`DEFAULT_TRANSITION_MS`].
    pub transition_ms: u64,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            trigger_label: "Products".to_string(),
            footer_blurb: "Explore our complete range of products and services".to_string(),
            view_all_label: "View All Products".to_string(),
            selection_fallback_ms: DEFAULT_SELECTION_FALLBACK_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl MenuSettings {
    /// [`Self::selection_fallback_ms`] as a [`Duration`].
    pub const fn selection_fallback(&self) -> Duration {
        Duration::from_millis(self.selection_fallback_ms)
    }

    /// [`Self::transition_ms`] as a [`Duration`].
    pub const fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[derive(Deserialize)]
struct RawSiteConfig {
    #[serde(default)]
    menu: MenuSettings,
    #[serde(default)]
    categories: Vec<Category>,
}

/// Everything the site needs to render its navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Labels and timings of the menu.
    pub menu: MenuSettings,
    /// Categories shown in the menu and on the product pages.
    pub catalog: Catalog,
}

impl SiteConfig {
    /// Parses a `{"menu": {...}, "categories": [...]}` document.
    /// Both keys are optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or the categories
    /// fail validation.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let raw: RawSiteConfig = serde_json::from_str(document)?;
        Ok(Self {
            menu: raw.menu,
            catalog: Catalog::new(raw.categories)?,
        })
    }

    /// The configuration embedded at build time.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document does not parse or
    /// validate. Callers should fall back to [`SiteConfig::default`], which
    /// has no categories.
    pub fn builtin() -> Result<Self, CatalogError> {
        let config = Self::from_json(BUILTIN_SITE_CONFIG)?;
        debug!(
            "Loaded built-in site configuration with {} categories",
            config.catalog.len()
        );
        Ok(config)
    }
}
