use std::panic::Location;

/// What went wrong while loading a catalog.
#[derive(Debug)]
pub enum CatalogErrorKind {
    /// The document is not valid JSON or does not match the expected shape.
    Json(serde_json::Error),
    /// A category or service has an empty slug.
    EmptySlug {
        /// The category the offending service belongs to, if any.
        category: Option<String>,
    },
    /// A slug contains characters outside `[a-z0-9-]`.
    InvalidSlug(String),
    /// Two categories share a slug.
    DuplicateCategory(String),
    /// Two services in the same category share a slug.
    DuplicateService {
        /// The category containing both services.
        category: String,
        /// The repeated service slug.
        service: String,
    },
}

impl std::fmt::Display for CatalogErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "malformed catalog document: {e}"),
            Self::EmptySlug { category: None } => write!(f, "category with empty slug"),
            Self::EmptySlug {
                category: Some(category),
            } => write!(f, "service with empty slug in category '{category}'"),
            Self::InvalidSlug(slug) => write!(f, "slug '{slug}' is not [a-z0-9-]"),
            Self::DuplicateCategory(slug) => write!(f, "duplicate category slug '{slug}'"),
            Self::DuplicateService { category, service } => {
                write!(f, "duplicate service slug '{service}' in category '{category}'")
            }
        }
    }
}

/// Error returned when a catalog document cannot be used.
#[derive(Debug)]
pub struct CatalogError {
    inner: CatalogErrorKind,
    location: &'static Location<'static>,
}

impl CatalogError {
    /// The kind of failure.
    pub const fn kind(&self) -> &CatalogErrorKind {
        &self.inner
    }

    /// Where in the source the error was raised.
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl From<CatalogErrorKind> for CatalogError {
    #[track_caller]
    fn from(error: CatalogErrorKind) -> Self {
        Self {
            inner: error,
            location: Location::caller(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        Self {
            inner: CatalogErrorKind::Json(error),
            location: Location::caller(),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.inner, self.location)
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.inner {
            CatalogErrorKind::Json(e) => Some(e),
            CatalogErrorKind::EmptySlug { .. }
            | CatalogErrorKind::InvalidSlug(_)
            | CatalogErrorKind::DuplicateCategory(_)
            | CatalogErrorKind::DuplicateService { .. } => None,
        }
    }
}
