use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, KeyboardEvent, MouseEvent, WheelEvent};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::components::image_fallback::on_image_error;
use crate::gallery::registry;
use crate::gallery::viewer::{ImageRect, Phase, Viewer, ViewerAction};

fn image_rect(image: &Element) -> ImageRect {
    let rect = image.get_bounding_client_rect();
    ImageRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

fn lock_page_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if result.is_err() {
        warn!("Could not change page scroll lock");
    }
}

/// The `.gallery-item` a click landed on, if it sits inside a gallery grid.
fn clicked_thumbnail(e: &MouseEvent) -> Option<Element> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    let thumb = target.closest(".gallery-item").ok()??;
    thumb.closest(".gallery-grid").ok()??;
    Some(thumb)
}

/// Full-screen photo viewer for the gallery grids on the current page.
///
/// Thumbnail clicks are picked up from the document, so the grids need no
/// wiring of their own. The overlay is appended to `<body>` the first time a
/// photo is opened and stays there until the page goes away. A page without
/// gallery items never creates it.
#[function_component(Lightbox)]
pub fn lightbox() -> Html {
    let viewer = use_reducer(Viewer::default);
    let created = use_state(|| false);
    let overlay_ref = use_node_ref();
    let image_ref = use_node_ref();
    let zoom_step = viewer.config().zoom_step;
    let present = *created || viewer.is_open();
    let src = viewer.current().map(|item| item.href.clone()).unwrap_or_default();

    {
        let created = created.clone();
        use_effect_with_deps(
            move |is_open: &bool| {
                if *is_open && !*created {
                    debug!("Creating lightbox overlay");
                    created.set(true);
                }
                || ()
            },
            viewer.is_open(),
        );
    }

    // Background scroll stays locked while a photo is shown.
    use_effect_with_deps(
        move |is_open: &bool| {
            let locked = *is_open;
            if locked {
                lock_page_scroll(true);
            }
            move || {
                if locked {
                    lock_page_scroll(false);
                }
            }
        },
        viewer.is_open(),
    );

    // Thumbnail clicks, caught in the capture phase so the link never navigates.
    {
        let dispatcher = viewer.dispatcher();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let listener = document.map(|document| {
                    let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
                        let Some(thumb) = clicked_thumbnail(&e) else {
                            return;
                        };
                        e.prevent_default();
                        let visible = registry::visible_thumbnails();
                        match registry::index_of(&visible, &thumb) {
                            Some(index) => dispatcher.dispatch(ViewerAction::Open {
                                index: index as i64,
                                items: visible.into_iter().map(|thumb| thumb.item).collect(),
                            }),
                            None => warn!("Clicked photo is not in the visible album"),
                        }
                    }) as Box<dyn FnMut(MouseEvent)>);

                    if document
                        .add_event_listener_with_callback_and_bool(
                            "click",
                            on_click.as_ref().unchecked_ref(),
                            true,
                        )
                        .is_err()
                    {
                        warn!("Could not listen for gallery clicks");
                    }
                    (document, on_click)
                });

                move || {
                    if let Some((document, on_click)) = listener {
                        let _ = document.remove_event_listener_with_callback_and_bool(
                            "click",
                            on_click.as_ref().unchecked_ref(),
                            true,
                        );
                    }
                }
            },
            (),
        );
    }

    // Wheel zoom needs a non-passive listener to keep the page from scrolling.
    // The image element is recreated per photo, so the listener follows `src`.
    {
        let dispatcher = viewer.dispatcher();
        let image_ref = image_ref.clone();
        use_effect_with_deps(
            move |(present, _): &(bool, String)| {
                let listener = image_ref.cast::<Element>().filter(|_| *present).map(|image| {
                    let target = image.clone();
                    let on_wheel = Closure::wrap(Box::new(move |e: WheelEvent| {
                        e.prevent_default();
                        let delta = if e.delta_y() < 0.0 { zoom_step } else { -zoom_step };
                        dispatcher.dispatch(ViewerAction::Zoom {
                            delta,
                            anchor: Some((e.client_x() as f64, e.client_y() as f64)),
                            image: image_rect(&target),
                        });
                    }) as Box<dyn FnMut(WheelEvent)>);

                    let options = AddEventListenerOptions::new();
                    options.set_passive(false);
                    let _ = image.add_event_listener_with_callback_and_add_event_listener_options(
                        "wheel",
                        on_wheel.as_ref().unchecked_ref(),
                        &options,
                    );
                    (image, on_wheel)
                });

                move || {
                    if let Some((image, on_wheel)) = listener {
                        let _ = image.remove_event_listener_with_callback(
                            "wheel",
                            on_wheel.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (present, src.clone()),
        );
    }

    {
        let viewer = viewer.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if !viewer.is_open() {
                return;
            }
            match e.key().as_str() {
                "Escape" => viewer.dispatch(ViewerAction::Close),
                "ArrowLeft" => viewer.dispatch(ViewerAction::Step {
                    offset: -1,
                    items: registry::visible_items(),
                }),
                "ArrowRight" => viewer.dispatch(ViewerAction::Step {
                    offset: 1,
                    items: registry::visible_items(),
                }),
                _ => {}
            }
        });
    }

    {
        let viewer = viewer.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            if viewer.phase() == Phase::OpenDragging {
                viewer.dispatch(ViewerAction::DragMove {
                    x: e.client_x() as f64,
                    y: e.client_y() as f64,
                });
            }
        });
    }

    {
        let dispatcher = viewer.dispatcher();
        use_event_with_window("mouseup", move |_: MouseEvent| {
            dispatcher.dispatch(ViewerAction::DragEnd);
        });
    }

    if !present {
        return html! {};
    }

    let on_close = {
        let dispatcher = viewer.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ViewerAction::Close))
    };

    let on_backdrop = {
        let dispatcher = viewer.dispatcher();
        let overlay_ref = overlay_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            let overlay = overlay_ref.cast::<Element>();
            if let (Some(target), Some(overlay)) = (target, overlay) {
                if target.is_same_node(Some(&overlay)) {
                    dispatcher.dispatch(ViewerAction::Close);
                }
            }
        })
    };

    let step = |offset: i64| {
        let dispatcher = viewer.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(ViewerAction::Step {
                offset,
                items: registry::visible_items(),
            })
        })
    };

    let zoom = |delta: f64| {
        let dispatcher = viewer.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(ViewerAction::Zoom {
                delta,
                anchor: None,
                image: ImageRect::default(),
            })
        })
    };

    let on_reset = {
        let dispatcher = viewer.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ViewerAction::ResetZoom))
    };

    let on_drag_start = {
        let dispatcher = viewer.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(ViewerAction::DragStart {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            });
        })
    };

    let caption = viewer
        .current()
        .map(|item| item.caption_text().to_string())
        .unwrap_or_default();
    let dragging = viewer.phase() == Phase::OpenDragging;

    let overlay = html! {
        <div
            ref={overlay_ref}
            class={classes!("lightbox-overlay", viewer.is_open().then(|| "active"))}
            onclick={on_backdrop}
        >
            <style>
                {r#"
                    .lightbox-overlay {
                        position: fixed;
                        inset: 0;
                        display: none;
                        align-items: center;
                        justify-content: center;
                        background: rgba(10, 10, 10, 0.9);
                        z-index: 1000;
                    }
                    .lightbox-overlay.active {
                        display: flex;
                    }
                    .lightbox-content {
                        position: relative;
                        max-width: 92vw;
                        max-height: 88vh;
                        overflow: hidden;
                    }
                    .lightbox-img {
                        display: block;
                        max-width: 92vw;
                        max-height: 80vh;
                        transform-origin: center center;
                        cursor: zoom-in;
                        user-select: none;
                    }
                    .lightbox-img.dragging {
                        cursor: grabbing;
                    }
                    .lightbox-caption {
                        margin-top: 10px;
                        color: #eee;
                        text-align: center;
                        font-size: 15px;
                    }
                    .lightbox-close, .lightbox-prev, .lightbox-next {
                        position: absolute;
                        background: rgba(0, 0, 0, 0.45);
                        color: #fff;
                        border: none;
                        font-size: 28px;
                        cursor: pointer;
                        padding: 6px 14px;
                        border-radius: 6px;
                    }
                    .lightbox-close { top: 8px; right: 8px; }
                    .lightbox-prev { top: 50%; left: 8px; transform: translateY(-50%); }
                    .lightbox-next { top: 50%; right: 8px; transform: translateY(-50%); }
                    .lightbox-controls {
                        position: absolute;
                        bottom: 40px;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 6px;
                    }
                    .lightbox-controls button {
                        background: rgba(0, 0, 0, 0.55);
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 6px;
                        padding: 4px 12px;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="lightbox-content">
                <img
                    key={src.clone()}
                    ref={image_ref}
                    class={classes!("lightbox-img", dragging.then(|| "dragging"))}
                    src={src}
                    alt="preview"
                    draggable="false"
                    style={format!("transform: {};", viewer.transform_css())}
                    onmousedown={on_drag_start}
                    onerror={on_image_error()}
                />
                <div class="lightbox-caption" aria-live="polite">{caption}</div>
                <button class="lightbox-close" aria-label="Close" onclick={on_close}>{"✕"}</button>
                <button class="lightbox-prev" aria-label="Previous" onclick={step(-1)}>{"‹"}</button>
                <button class="lightbox-next" aria-label="Next" onclick={step(1)}>{"›"}</button>
                <div class="lightbox-controls">
                    <button class="lightbox-zoom-out" title="Zoom out" onclick={zoom(-zoom_step)}>{"−"}</button>
                    <button class="lightbox-zoom-reset" title="Reset" onclick={on_reset}>{"100%"}</button>
                    <button class="lightbox-zoom-in" title="Zoom in" onclick={zoom(zoom_step)}>{"+"}</button>
                </div>
            </div>
        </div>
    };

    match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        Some(body) => create_portal(overlay, body.into()),
        None => overlay,
    }
}
