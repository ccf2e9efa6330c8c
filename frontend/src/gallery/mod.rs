//! Gallery lightbox: which photos are on screen ([`registry`]) and what the
//! overlay currently shows ([`viewer`]). The overlay itself is rendered by
//! `components::lightbox`.

pub mod registry;
pub mod viewer;

use serde::Deserialize;

/// One photo entry as it appears in a gallery grid.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GalleryItem {
    /// Full-size image url. The catalog calls it `src`.
    #[serde(alias = "src")]
    pub href: String,
    #[serde(default)]
    pub caption: Option<String>,
}

impl GalleryItem {
    pub fn new(href: impl Into<String>, caption: Option<&str>) -> Self {
        Self {
            href: href.into(),
            caption: caption.map(str::to_string),
        }
    }

    /// Builds an item from thumbnail markup. No `href` means no item; an
    /// empty caption counts as none.
    pub fn from_attributes(href: Option<String>, caption: Option<String>) -> Option<Self> {
        let href = href.filter(|href| !href.trim().is_empty())?;
        Some(Self {
            href,
            caption: caption.filter(|caption| !caption.trim().is_empty()),
        })
    }

    pub fn caption_text(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }
}
