//! State of the lightbox overlay: which photo is shown and how it is
//! zoomed and panned.

use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::LightboxConfig;
use crate::gallery::GalleryItem;

/// Scale changes closer to a bound than this land on the bound.
const SNAP_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Closed,
    OpenIdle,
    OpenDragging,
}

/// On-screen box of the displayed image, in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ImageRect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Viewer {
    config: LightboxConfig,
    is_open: bool,
    current_index: usize,
    current: Option<GalleryItem>,
    scale: f64,
    translate: (f64, f64),
    /// Last pointer position while a pan is in progress.
    drag_from: Option<(f64, f64)>,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(LightboxConfig::default())
    }
}

impl Viewer {
    pub fn new(config: LightboxConfig) -> Self {
        Self {
            config,
            is_open: false,
            current_index: 0,
            current: None,
            scale: config.min_scale,
            translate: (0.0, 0.0),
            drag_from: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&GalleryItem> {
        self.current.as_ref()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translate(&self) -> (f64, f64) {
        self.translate
    }

    pub fn config(&self) -> LightboxConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        match (self.is_open, self.drag_from) {
            (false, _) => Phase::Closed,
            (true, None) => Phase::OpenIdle,
            (true, Some(_)) => Phase::OpenDragging,
        }
    }

    /// Shows `items[index]`, wrapping any index into range. Returns false
    /// (and changes nothing) when there is nothing to show.
    pub fn open(&mut self, index: i64, items: &[GalleryItem]) -> bool {
        if items.is_empty() {
            return false;
        }
        let index = index.rem_euclid(items.len() as i64) as usize;
        self.current_index = index;
        self.current = Some(items[index].clone());
        self.drag_from = None;
        self.reset_zoom();
        self.is_open = true;
        true
    }

    /// Moves `offset` photos from the current one within `items`, which the
    /// caller resolves fresh for every step.
    pub fn step(&mut self, offset: i64, items: &[GalleryItem]) -> bool {
        if !self.is_open {
            return false;
        }
        self.open(self.current_index as i64 + offset, items)
    }

    pub fn prev(&mut self, items: &[GalleryItem]) -> bool {
        self.step(-1, items)
    }

    pub fn next(&mut self, items: &[GalleryItem]) -> bool {
        self.step(1, items)
    }

    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        self.drag_from = None;
        true
    }

    /// Changes the scale by `delta`, keeping the point under
    /// `(anchor_x, anchor_y)` in place.
    pub fn zoom(&mut self, delta: f64, anchor_x: f64, anchor_y: f64, image: ImageRect) -> bool {
        if !self.is_open {
            return false;
        }
        let LightboxConfig { min_scale, max_scale, .. } = self.config;
        let old_scale = self.scale;
        let mut scale = (old_scale + delta).clamp(min_scale, max_scale);
        if (scale - min_scale).abs() < SNAP_EPSILON {
            scale = min_scale;
        } else if (max_scale - scale).abs() < SNAP_EPSILON {
            scale = max_scale;
        }
        if scale == old_scale {
            return false;
        }
        self.scale = scale;

        if scale == min_scale {
            self.translate = (0.0, 0.0);
            self.drag_from = None;
        } else {
            let (cx, cy) = image.center();
            self.translate.0 -= (anchor_x - cx) / old_scale * delta;
            self.translate.1 -= (anchor_y - cy) / old_scale * delta;
        }
        true
    }

    /// Zoom anchored at the image center, as the toolbar buttons do.
    pub fn zoom_centered(&mut self, delta: f64) -> bool {
        self.zoom(delta, 0.0, 0.0, ImageRect::default())
    }

    pub fn reset_zoom(&mut self) -> bool {
        let changed = self.scale != self.config.min_scale || self.translate != (0.0, 0.0);
        self.scale = self.config.min_scale;
        self.translate = (0.0, 0.0);
        self.drag_from = None;
        changed
    }

    /// Starts a pan. Only a zoomed-in image can be dragged.
    pub fn begin_drag(&mut self, x: f64, y: f64) -> bool {
        if !self.is_open || self.scale <= self.config.min_scale {
            return false;
        }
        self.drag_from = Some((x, y));
        true
    }

    pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
        let Some((from_x, from_y)) = self.drag_from else {
            return false;
        };
        self.translate.0 += x - from_x;
        self.translate.1 += y - from_y;
        self.drag_from = Some((x, y));
        true
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag_from.take().is_some()
    }

    /// CSS `transform` value for the image element.
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate.0, self.translate.1, self.scale
        )
    }
}

pub enum ViewerAction {
    Open { index: i64, items: Vec<GalleryItem> },
    Step { offset: i64, items: Vec<GalleryItem> },
    Close,
    Zoom { delta: f64, anchor: Option<(f64, f64)>, image: ImageRect },
    ResetZoom,
    DragStart { x: f64, y: f64 },
    DragMove { x: f64, y: f64 },
    DragEnd,
}

impl Reducible for Viewer {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            ViewerAction::Open { index, items } => next.open(index, &items),
            ViewerAction::Step { offset, items } => next.step(offset, &items),
            ViewerAction::Close => next.close(),
            ViewerAction::Zoom { delta, anchor: Some((x, y)), image } => next.zoom(delta, x, y, image),
            ViewerAction::Zoom { delta, anchor: None, .. } => next.zoom_centered(delta),
            ViewerAction::ResetZoom => next.reset_zoom(),
            ViewerAction::DragStart { x, y } => next.begin_drag(x, y),
            ViewerAction::DragMove { x, y } => next.drag_to(x, y),
            ViewerAction::DragEnd => next.end_drag(),
        };
        if !changed {
            return self;
        }
        if next.is_open != self.is_open || next.current_index != self.current_index {
            debug!("Lightbox {:?} at photo {}", next.phase(), next.current_index);
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<GalleryItem> {
        (0..n)
            .map(|i| GalleryItem::new(format!("/img/{}.jpg", i), Some(format!("photo {}", i).as_str())))
            .collect()
    }

    fn opened(n: usize, index: i64) -> Viewer {
        let mut viewer = Viewer::default();
        assert!(viewer.open(index, &items(n)));
        viewer
    }

    #[test]
    fn starts_closed_at_identity() {
        let viewer = Viewer::default();
        assert_eq!(viewer.phase(), Phase::Closed);
        assert_eq!(viewer.scale(), 1.0);
        assert_eq!(viewer.translate(), (0.0, 0.0));
        assert!(viewer.current().is_none());
    }

    #[test]
    fn open_wraps_any_index_into_range() {
        assert_eq!(opened(5, -1).current_index(), 4);
        assert_eq!(opened(5, 7).current_index(), 2);
        assert_eq!(opened(5, -11).current_index(), 4);
        assert_eq!(opened(5, 5).current_index(), 0);
        for index in -20..20 {
            assert!(opened(3, index).current_index() < 3);
        }
    }

    #[test]
    fn open_loads_the_photo() {
        let viewer = opened(3, 1);
        assert_eq!(viewer.phase(), Phase::OpenIdle);
        let shown = viewer.current().unwrap();
        assert_eq!(shown.href, "/img/1.jpg");
        assert_eq!(shown.caption_text(), "photo 1");
    }

    #[test]
    fn open_on_empty_list_is_a_no_op() {
        let mut viewer = Viewer::default();
        assert!(!viewer.open(0, &[]));
        assert_eq!(viewer.phase(), Phase::Closed);

        let mut viewer = opened(3, 2);
        assert!(!viewer.next(&[]));
        assert_eq!(viewer.current_index(), 2);
        assert!(viewer.is_open());
    }

    #[test]
    fn opening_resets_zoom_and_pan() {
        let mut viewer = opened(3, 0);
        viewer.zoom(1.0, 300.0, 200.0, ImageRect { left: 0.0, top: 0.0, width: 400.0, height: 300.0 });
        viewer.begin_drag(0.0, 0.0);
        viewer.drag_to(40.0, -10.0);
        assert!(viewer.scale() > 1.0);
        assert_ne!(viewer.translate(), (0.0, 0.0));

        viewer.next(&items(3));
        assert_eq!(viewer.scale(), 1.0);
        assert_eq!(viewer.translate(), (0.0, 0.0));
        assert_eq!(viewer.phase(), Phase::OpenIdle);
    }

    #[test]
    fn keyboard_scenario_wraps_and_closes() {
        let photos = items(3);
        let mut viewer = Viewer::default();
        viewer.open(1, &photos);
        assert_eq!(viewer.current_index(), 1);

        viewer.next(&photos);
        assert_eq!(viewer.current_index(), 2);
        viewer.next(&photos);
        assert_eq!(viewer.current_index(), 0);
        viewer.prev(&photos);
        assert_eq!(viewer.current_index(), 2);

        assert!(viewer.close());
        assert_eq!(viewer.phase(), Phase::Closed);
        assert!(!viewer.close());
    }

    #[test]
    fn navigation_uses_the_list_given_at_each_step() {
        let album_a = items(2);
        let album_b: Vec<GalleryItem> = (0..3)
            .map(|i| GalleryItem::new(format!("/b/{}.jpg", i), None))
            .collect();

        let mut viewer = Viewer::default();
        viewer.open(0, &album_a);
        viewer.next(&album_b);
        assert_eq!(viewer.current_index(), 1);
        assert_eq!(viewer.current().unwrap().href, "/b/1.jpg");
        viewer.next(&album_b);
        viewer.next(&album_b);
        assert_eq!(viewer.current_index(), 0);
    }

    #[test]
    fn navigation_while_closed_does_nothing() {
        let mut viewer = Viewer::default();
        assert!(!viewer.next(&items(3)));
        assert!(!viewer.prev(&items(3)));
        assert_eq!(viewer.phase(), Phase::Closed);
    }

    #[test]
    fn zoom_is_clamped_to_bounds() {
        let mut viewer = opened(1, 0);
        for _ in 0..50 {
            viewer.zoom_centered(0.2);
        }
        assert_eq!(viewer.scale(), 5.0);
        assert!(!viewer.zoom_centered(0.2));

        for _ in 0..50 {
            viewer.zoom_centered(-0.2);
        }
        assert_eq!(viewer.scale(), 1.0);
        assert_eq!(viewer.translate(), (0.0, 0.0));
        assert!(!viewer.zoom_centered(-0.2));
    }

    #[test]
    fn scale_within_rounding_of_a_bound_lands_on_it() {
        let rect = ImageRect { left: 0.0, top: 0.0, width: 100.0, height: 100.0 };
        let mut viewer = opened(1, 0);
        assert!(viewer.zoom(4.0 - 1e-12, 90.0, 90.0, rect));
        assert_eq!(viewer.scale(), 5.0);
        assert!(!viewer.zoom_centered(0.2));

        viewer.zoom_centered(-3.0);
        viewer.begin_drag(0.0, 0.0);
        viewer.drag_to(30.0, 30.0);
        assert!(viewer.zoom_centered(-1.0 + 1e-12));
        assert_eq!(viewer.scale(), 1.0);
        assert_eq!(viewer.translate(), (0.0, 0.0));
        assert_eq!(viewer.phase(), Phase::OpenIdle);
    }

    #[test]
    fn zoom_out_to_minimum_resets_pan() {
        let rect = ImageRect { left: 0.0, top: 0.0, width: 200.0, height: 200.0 };
        let mut viewer = opened(1, 0);
        viewer.zoom(0.2, 150.0, 50.0, rect);
        viewer.zoom(0.2, 150.0, 50.0, rect);
        assert_ne!(viewer.translate(), (0.0, 0.0));

        viewer.zoom(-0.2, 10.0, 10.0, rect);
        viewer.zoom(-0.2, 10.0, 10.0, rect);
        assert_eq!(viewer.scale(), 1.0);
        assert_eq!(viewer.translate(), (0.0, 0.0));
    }

    #[test]
    fn zoom_moves_toward_the_anchor() {
        let rect = ImageRect { left: 100.0, top: 100.0, width: 400.0, height: 200.0 };
        let mut viewer = opened(1, 0);
        // Anchor 100px right of and 50px above the center.
        assert!(viewer.zoom(0.5, 400.0, 150.0, rect));
        assert_eq!(viewer.scale(), 1.5);
        assert_eq!(viewer.translate(), (-50.0, 25.0));
    }

    #[test]
    fn zoom_at_center_keeps_translation() {
        let rect = ImageRect { left: 0.0, top: 0.0, width: 100.0, height: 100.0 };
        let mut viewer = opened(1, 0);
        viewer.zoom(1.0, 50.0, 50.0, rect);
        assert_eq!(viewer.scale(), 2.0);
        assert_eq!(viewer.translate(), (0.0, 0.0));
    }

    #[test]
    fn zoom_while_closed_does_nothing() {
        let mut viewer = Viewer::default();
        assert!(!viewer.zoom_centered(0.2));
        assert_eq!(viewer.scale(), 1.0);
    }

    #[test]
    fn reset_zoom_always_returns_to_identity() {
        let mut viewer = opened(2, 0);
        viewer.zoom(2.0, 10.0, 20.0, ImageRect { left: 0.0, top: 0.0, width: 50.0, height: 50.0 });
        viewer.begin_drag(5.0, 5.0);
        viewer.drag_to(105.0, 55.0);

        assert!(viewer.reset_zoom());
        assert_eq!(viewer.scale(), 1.0);
        assert_eq!(viewer.translate(), (0.0, 0.0));
        assert!(!viewer.reset_zoom());
    }

    #[test]
    fn drag_has_no_effect_at_base_scale() {
        let mut viewer = opened(2, 0);
        assert!(!viewer.begin_drag(10.0, 10.0));
        assert!(!viewer.drag_to(50.0, 80.0));
        assert_eq!(viewer.translate(), (0.0, 0.0));
        assert_eq!(viewer.phase(), Phase::OpenIdle);
    }

    #[test]
    fn drag_accumulates_pointer_movement() {
        let mut viewer = opened(2, 0);
        viewer.zoom_centered(1.0);

        assert!(viewer.begin_drag(10.0, 10.0));
        assert_eq!(viewer.phase(), Phase::OpenDragging);
        viewer.drag_to(20.0, 5.0);
        viewer.drag_to(-500.0, 905.0);
        assert_eq!(viewer.translate(), (-510.0, 895.0));

        assert!(viewer.end_drag());
        assert_eq!(viewer.phase(), Phase::OpenIdle);
        assert!(!viewer.drag_to(0.0, 0.0));
        assert_eq!(viewer.translate(), (-510.0, 895.0));
    }

    #[test]
    fn closing_ends_a_drag() {
        let mut viewer = opened(2, 0);
        viewer.zoom_centered(1.0);
        viewer.begin_drag(0.0, 0.0);
        viewer.close();
        assert_eq!(viewer.phase(), Phase::Closed);
        assert!(!viewer.end_drag());
    }

    #[test]
    fn transform_string_composes_pan_and_scale() {
        let mut viewer = opened(1, 0);
        assert_eq!(viewer.transform_css(), "translate(0px, 0px) scale(1)");
        viewer.zoom_centered(1.0);
        viewer.begin_drag(0.0, 0.0);
        viewer.drag_to(12.5, -4.0);
        assert_eq!(viewer.transform_css(), "translate(12.5px, -4px) scale(2)");
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let viewer = Rc::new(Viewer::default());
        let same = viewer.clone().reduce(ViewerAction::Close);
        assert!(Rc::ptr_eq(&viewer, &same));

        let open = viewer.reduce(ViewerAction::Open { index: -1, items: items(4) });
        assert_eq!(open.current_index(), 3);
        let stepped = open.reduce(ViewerAction::Step { offset: 1, items: items(4) });
        assert_eq!(stepped.current_index(), 0);
        let zoomed = stepped.reduce(ViewerAction::Zoom { delta: 0.2, anchor: None, image: ImageRect::default() });
        assert!(zoomed.scale() > 1.0);
        let dragging = zoomed.reduce(ViewerAction::DragStart { x: 1.0, y: 1.0 });
        assert_eq!(dragging.phase(), Phase::OpenDragging);
        let moved = dragging.reduce(ViewerAction::DragMove { x: 4.0, y: 3.0 });
        assert_eq!(moved.translate(), (3.0, 2.0));
        let idle = moved.reduce(ViewerAction::DragEnd);
        assert_eq!(idle.phase(), Phase::OpenIdle);
        let reset = idle.reduce(ViewerAction::ResetZoom);
        assert_eq!(reset.scale(), 1.0);
        let closed = reset.reduce(ViewerAction::Close);
        assert_eq!(closed.phase(), Phase::Closed);
    }
}
