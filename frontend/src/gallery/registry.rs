//! Finds the photos the lightbox can cycle through.
//!
//! Nothing is cached: the album tabs may hide or show grids between two
//! lightbox actions, so every open/navigate scans the page again.

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

use crate::error::SiteError;
use crate::gallery::GalleryItem;

pub const GRID_CLASS: &str = "gallery-grid";
pub const ITEM_CLASS: &str = "gallery-item";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ALBUM_ATTR: &str = "data-album";
pub const CAPTION_ATTR: &str = "data-caption";

const GRID_SELECTOR: &str = ".gallery-grid";
const ITEM_SELECTOR: &str = ".gallery-item";

/// One photo grid as found on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSnapshot<T> {
    pub album: Option<String>,
    pub hidden: bool,
    pub items: Vec<T>,
}

/// Items of every grid not marked hidden, in page order. When that leaves
/// nothing (no album scoping, or every grid hidden) all items are returned.
pub fn select_visible<T: Clone>(grids: &[GridSnapshot<T>]) -> Vec<T> {
    let visible: Vec<T> = grids
        .iter()
        .filter(|grid| !grid.hidden)
        .flat_map(|grid| grid.items.iter().cloned())
        .collect();
    if !visible.is_empty() {
        return visible;
    }
    grids.iter().flat_map(|grid| grid.items.iter().cloned()).collect()
}

/// A thumbnail element together with the photo it points at.
#[derive(Clone, Debug)]
pub struct Thumbnail {
    pub element: Element,
    pub item: GalleryItem,
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Reads every `.gallery-grid` and its `.gallery-item` thumbnails.
pub fn scan(document: &Document) -> Result<Vec<GridSnapshot<Thumbnail>>, SiteError> {
    let grids = document
        .query_selector_all(GRID_SELECTOR)
        .map_err(|_| SiteError::Query { selector: GRID_SELECTOR })?;

    elements(grids)
        .into_iter()
        .map(|grid| -> Result<GridSnapshot<Thumbnail>, SiteError> {
            let thumbs = grid
                .query_selector_all(ITEM_SELECTOR)
                .map_err(|_| SiteError::Query { selector: ITEM_SELECTOR })?;
            let items = elements(thumbs)
                .into_iter()
                .filter_map(|element| {
                    let item = GalleryItem::from_attributes(
                        element.get_attribute("href"),
                        element.get_attribute(CAPTION_ATTR),
                    )?;
                    Some(Thumbnail { element, item })
                })
                .collect();
            Ok(GridSnapshot {
                album: grid.get_attribute(ALBUM_ATTR),
                hidden: grid.class_list().contains(HIDDEN_CLASS),
                items,
            })
        })
        .collect()
}

/// The thumbnails the lightbox should currently cycle through. Any failure
/// to read the page yields an empty list, which makes the lightbox inert.
pub fn visible_thumbnails() -> Vec<Thumbnail> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    match scan(&document) {
        Ok(grids) => {
            let shown: Vec<&str> = grids
                .iter()
                .filter(|grid| !grid.hidden)
                .filter_map(|grid| grid.album.as_deref())
                .collect();
            debug!("Gallery has {} grids, albums shown: {:?}", grids.len(), shown);
            select_visible(&grids)
        }
        Err(e) => {
            warn!("Gallery scan failed: {}", e);
            Vec::new()
        }
    }
}

pub fn visible_items() -> Vec<GalleryItem> {
    visible_thumbnails().into_iter().map(|thumb| thumb.item).collect()
}

/// Position of `clicked` among the visible thumbnails.
pub fn index_of(thumbnails: &[Thumbnail], clicked: &Element) -> Option<usize> {
    thumbnails
        .iter()
        .position(|thumb| thumb.element.is_same_node(Some(clicked)))
}
