use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::config;
use crate::error::SiteError;
use crate::gallery::GalleryItem;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Album {
    pub title: String,
    #[serde(default)]
    pub items: Vec<GalleryItem>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub lead: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub albums: Vec<Album>,
}

impl Service {
    pub fn photo_count(&self) -> usize {
        self.albums.iter().map(|album| album.items.len()).sum()
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub services: Vec<Service>,
}

impl Catalog {
    /// Parses and validates a catalog document.
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the bundle, parsed once per page load. A
    /// broken bundle is logged and replaced by an empty catalog so every
    /// page still renders.
    pub fn bundled() -> &'static Catalog {
        static BUNDLED: Lazy<Catalog> = Lazy::new(|| match Catalog::from_json(config::SERVICES_JSON) {
            Ok(catalog) => catalog,
            Err(e) => {
                gloo_console::error!(format!("Failed to load service catalog: {}", e));
                Catalog::default()
            }
        });
        &BUNDLED
    }

    pub fn find(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.slug == slug)
    }

    fn validate(&self) -> Result<(), SiteError> {
        let mut seen = HashSet::new();
        for service in &self.services {
            if service.slug.trim().is_empty() {
                return Err(SiteError::EmptySlug);
            }
            if !seen.insert(service.slug.as_str()) {
                return Err(SiteError::DuplicateService(service.slug.clone()));
            }
            for album in &service.albums {
                if let Some(index) = album.items.iter().position(|item| item.href.trim().is_empty()) {
                    return Err(SiteError::MissingHref {
                        service: service.slug.clone(),
                        album: album.title.clone(),
                        index,
                    });
                }
            }
        }
        Ok(())
    }
}
