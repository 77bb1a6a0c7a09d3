use crate::errors::{CatalogError, CatalogErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single service offered within a category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Service {
    /// URL-safe identifier, unique within its category.
    pub slug: String,
    /// Display name.
    pub name: String,
}

/// A product category and the services listed under it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// URL-safe identifier, unique within the catalog.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Services in display order. Absent in the document means none.
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Category {
    /// Looks up a service of this category by slug.
    pub fn service(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }
}

/// The ordered, validated list of categories shown by the menu.
///
/// Construction always validates slugs, so every `Catalog` in circulation
/// can be turned into routes without further checks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Category>", into = "Vec<Category>")]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Validates `categories` and wraps them.
    ///
    /// # Errors
    ///
    /// Returns an error on empty or non `[a-z0-9-]` slugs, duplicate
    /// category slugs or duplicate service slugs within a category.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen_categories = HashSet::new();
        for category in &categories {
            check_slug(&category.slug, None)?;
            if !seen_categories.insert(category.slug.as_str()) {
                return Err(CatalogError::from(CatalogErrorKind::DuplicateCategory(
                    category.slug.clone(),
                )));
            }

            let mut seen_services = HashSet::new();
            for service in &category.services {
                check_slug(&service.slug, Some(&category.slug))?;
                if !seen_services.insert(service.slug.as_str()) {
                    return Err(CatalogError::from(CatalogErrorKind::DuplicateService {
                        category: category.slug.clone(),
                        service: service.slug.clone(),
                    }));
                }
            }
        }
        Ok(Self { categories })
    }

    /// Parses a JSON array of categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Category> = serde_json::from_str(document)?;
        Self::new(categories)
    }

    /// Categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by slug.
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Number of categories.
    pub const fn len(&self) -> usize {
        self.categories.len()
    }

    /// `true` if there is nothing to show.
    pub const fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl TryFrom<Vec<Category>> for Catalog {
    type Error = CatalogError;

    fn try_from(categories: Vec<Category>) -> Result<Self, Self::Error> {
        Self::new(categories)
    }
}

impl From<Catalog> for Vec<Category> {
    fn from(catalog: Catalog) -> Self {
        catalog.categories
    }
}

#[track_caller]
fn check_slug(slug: &str, category: Option<&str>) -> Result<(), CatalogError> {
    if slug.is_empty() {
        return Err(CatalogError::from(CatalogErrorKind::EmptySlug {
            category: category.map(str::to_string),
        }));
    }
    if !slug
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(CatalogError::from(CatalogErrorKind::InvalidSlug(
            slug.to_string(),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn web() -> Category {
        Category {
            slug: "web".to_string(),
            name: "Web".to_string(),
            services: vec![Service {
                slug: "hosting".to_string(),
                name: "Hosting".to_string(),
            }],
        }
    }

    #[test]
    fn test_parse_keeps_order_and_defaults_services() {
        let catalog = Catalog::from_json(
            r#"[
                {"slug": "web", "name": "Web", "services": [{"slug": "hosting", "name": "Hosting"}]},
                {"slug": "cloud", "name": "Cloud"}
            ]"#,
        )
        .unwrap();

        let slugs: Vec<_> = catalog.categories().iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, ["web", "cloud"]);
        assert!(catalog.category("cloud").unwrap().services.is_empty());
        let web = catalog.category("web").unwrap();
        assert_eq!(web.service("hosting").unwrap().name, "Hosting");
        assert!(catalog.category("cloud").unwrap().service("hosting").is_none());
    }

    #[test]
    fn test_empty_document_is_an_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = Catalog::from_json(r#"[{"slug": "web"}"#).unwrap_err();
        assert!(matches!(err.kind(), CatalogErrorKind::Json(_)));
    }

    #[test]
    fn test_duplicate_category_is_rejected() {
        let err = Catalog::new(vec![web(), web()]).unwrap_err();
        assert!(
            matches!(err.kind(), CatalogErrorKind::DuplicateCategory(slug) if slug == "web"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_duplicate_service_is_rejected() {
        let mut category = web();
        category.services.push(category.services[0].clone());
        let err = Catalog::new(vec![category]).unwrap_err();
        assert!(matches!(
            err.kind(),
            CatalogErrorKind::DuplicateService { category, service }
                if category == "web" && service == "hosting"
        ));
    }

    #[test]
    fn test_bad_slugs_are_rejected() {
        let mut category = web();
        category.slug = "Web Hosting".to_string();
        let err = Catalog::new(vec![category]).unwrap_err();
        assert!(matches!(err.kind(), CatalogErrorKind::InvalidSlug(_)));

        let mut category = web();
        category.services[0].slug = String::new();
        let err = Catalog::new(vec![category]).unwrap_err();
        assert!(matches!(
            err.kind(),
            CatalogErrorKind::EmptySlug { category: Some(c) } if c == "web"
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let result: Result<Catalog, _> =
            serde_json::from_str(r#"[{"slug": "", "name": "Nameless"}]"#);
        assert!(result.is_err());
    }
}
