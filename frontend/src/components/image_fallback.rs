use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use yew::prelude::*;

/// Set on an image once its placeholder has been swapped in.
pub const FALLBACK_MARK: &str = "data-fallback-applied";

const PLACEHOLDER_SVG: &str = concat!(
    "<svg xmlns='http://www.w3.org/2000/svg' width='800' height='600'>",
    "<defs><linearGradient id='g' x1='0' y1='0' x2='1' y2='1'>",
    "<stop offset='0%' stop-color='#FAF7F2'/><stop offset='100%' stop-color='#E8DCCB'/></linearGradient></defs>",
    "<rect width='100%' height='100%' fill='url(#g)'/>",
    "<g fill='#C07A3A' font-family='Arial, sans-serif' text-anchor='middle'>",
    "<text x='50%' y='50%' font-size='28' font-weight='700'>Photo coming soon</text>",
    "</g></svg>",
);

pub fn placeholder_url() -> String {
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        urlencoding::encode(PLACEHOLDER_SVG)
    )
}

/// The source to swap in after a load error. An image gets the placeholder
/// once; if that fails as well it is left alone.
pub fn fallback_src(already_applied: bool) -> Option<String> {
    (!already_applied).then(placeholder_url)
}

/// `onerror` handler for any `<img>`: replaces a broken photo with the
/// placeholder.
pub fn on_image_error() -> Callback<Event> {
    Callback::from(|e: Event| {
        let Some(image) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Some(src) = fallback_src(image.has_attribute(FALLBACK_MARK)) else {
            return;
        };
        debug!("Image {:?} failed to load, showing placeholder", image.get_attribute("src"));
        let _ = image.set_attribute(FALLBACK_MARK, "1");
        let _ = image.set_attribute("src", &src);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_applied_only_once() {
        let first = fallback_src(false).unwrap();
        assert!(first.starts_with("data:image/svg+xml;charset=utf-8,"));
        assert_eq!(fallback_src(true), None);
    }

    #[test]
    fn placeholder_svg_is_percent_encoded() {
        let url = placeholder_url();
        let payload = url.trim_start_matches("data:image/svg+xml;charset=utf-8,");
        assert!(!payload.contains('<'));
        assert!(!payload.contains('#'));
        assert!(payload.contains("Photo%20coming%20soon"));
    }
}
