use crate::routes::SiteRoute;
use productnav_catalog::prelude::{Catalog, Category};

/// A service link in a column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub slug: String,
    pub name: String,
    /// Where the link points without script; the category page.
    pub href: String,
}

/// One column of the open panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryColumn {
    pub slug: String,
    pub name: String,
    pub href: String,
    pub services: Vec<ServiceEntry>,
}

impl From<&Category> for CategoryColumn {
    fn from(category: &Category) -> Self {
        let href = SiteRoute::product(category.slug.as_str()).to_string();
        Self {
            slug: category.slug.clone(),
            name: category.name.clone(),
            services: category
                .services
                .iter()
                .map(|service| ServiceEntry {
                    slug: service.slug.clone(),
                    name: service.name.clone(),
                    href: href.clone(),
                })
                .collect(),
            href,
        }
    }
}

/// What the open panel shows, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelLayout {
    pub columns: Vec<CategoryColumn>,
    pub view_all_href: String,
}

impl PanelLayout {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            columns: catalog.categories().iter().map(CategoryColumn::from).collect(),
            view_all_href: SiteRoute::AllProducts.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use productnav_catalog::prelude::Service;

    #[test]
    fn test_single_category_layout() {
        let catalog = Catalog::new(vec![Category {
            slug: "web".to_string(),
            name: "Web".to_string(),
            services: vec![Service {
                slug: "hosting".to_string(),
                name: "Hosting".to_string(),
            }],
        }])
        .unwrap();

        let layout = PanelLayout::from_catalog(&catalog);
        assert_eq!(layout.columns.len(), 1);
        let column = &layout.columns[0];
        assert_eq!(column.name, "Web");
        assert_eq!(column.href, "/product/web");
        assert_eq!(
            column.services,
            vec![ServiceEntry {
                slug: "hosting".to_string(),
                name: "Hosting".to_string(),
                href: "/product/web".to_string(),
            }]
        );
        assert_eq!(layout.view_all_href, "/products");
    }

    #[test]
    fn test_empty_catalog_has_no_columns() {
        let layout = PanelLayout::from_catalog(&Catalog::default());
        assert!(layout.columns.is_empty());
        assert_eq!(layout.view_all_href, "/products");
    }

    #[test]
    fn test_category_without_services_keeps_its_column() {
        let catalog = Catalog::from_json(
            r#"[{"slug": "web", "name": "Web"}, {"slug": "cloud", "name": "Cloud"}]"#,
        )
        .unwrap();
        let layout = PanelLayout::from_catalog(&catalog);
        let names: Vec<_> = layout.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Web", "Cloud"]);
        assert!(layout.columns.iter().all(|c| c.services.is_empty()));
    }
}
