use std::fmt::Display;

/// Paths the site navigates to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    /// Every category with all its services.
    AllProducts,
    /// A single category page.
    Product { category: String },
}

impl SiteRoute {
    /// Path segment of [`SiteRoute::AllProducts`], relative to the site root.
    pub const ALL_PRODUCTS_PATH: &'static str = "products";
    /// Path segment under which [`SiteRoute::Product`] pages live.
    pub const PRODUCT_PREFIX: &'static str = "product";

    /// Page of `category`.
    pub fn product(category: impl Into<String>) -> Self {
        Self::Product {
            category: category.into(),
        }
    }
}

impl Display for SiteRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "/"),
            Self::AllProducts => write!(f, "/{}", Self::ALL_PRODUCTS_PATH),
            Self::Product { category } => write!(f, "/{}/{category}", Self::PRODUCT_PREFIX),
        }
    }
}
