use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::Album;
use crate::components::image_fallback::on_image_error;
use crate::gallery::registry::{GRID_CLASS, HIDDEN_CLASS, ITEM_CLASS};

#[derive(Properties, PartialEq)]
pub struct AlbumGalleryProps {
    pub albums: Vec<Album>,
}

/// Album tab strip plus one photo grid per album. Exactly one grid is
/// shown; the rest carry the `hidden` class, which is what the lightbox
/// reads to decide which photos it cycles through.
#[function_component(AlbumGallery)]
pub fn album_gallery(props: &AlbumGalleryProps) -> Html {
    let active = use_state(|| 0usize);

    // A different service brings different albums; start again on the first.
    {
        let active = active.setter();
        use_effect_with_deps(
            move |_| {
                active.set(0);
                || ()
            },
            props.albums.clone(),
        );
    }

    if props.albums.is_empty() {
        return html! {};
    }

    let select = |index: usize| {
        let active = active.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *active != index {
                info!("Switching to album {}", index);
                active.set(index);
            }
        })
    };

    html! {
        <div class="service-gallery">
            <style>
                {r#"
                    .album-tabs {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 8px;
                        margin-bottom: 16px;
                    }
                    .album-tab {
                        padding: 6px 14px;
                        border-radius: 18px;
                        border: 1px solid #C07A3A;
                        background: transparent;
                        color: #C07A3A;
                        cursor: pointer;
                    }
                    .album-tab.active {
                        background: #C07A3A;
                        color: #fff;
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                        gap: 12px;
                    }
                    .gallery-grid.hidden {
                        display: none;
                    }
                    .gallery-item img {
                        width: 100%;
                        height: 180px;
                        object-fit: cover;
                        border-radius: 8px;
                        display: block;
                    }
                "#}
            </style>
            {
                if props.albums.len() > 1 {
                    html! {
                        <div class="album-tabs">
                            { for props.albums.iter().enumerate().map(|(i, album)| html! {
                                <button
                                    class={classes!("album-tab", (i == *active).then(|| "active"))}
                                    data-album-index={i.to_string()}
                                    onclick={select(i)}
                                >
                                    {&album.title}
                                </button>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            { for props.albums.iter().enumerate().map(|(i, album)| html! {
                <div
                    class={classes!(GRID_CLASS, (i != *active).then(|| HIDDEN_CLASS))}
                    data-album={i.to_string()}
                >
                    { for album.items.iter().map(|item| html! {
                        <a
                            class={ITEM_CLASS}
                            href={item.href.clone()}
                            data-caption={item.caption.clone()}
                        >
                            <img src={item.href.clone()} alt={item.caption_text().to_string()} loading="lazy" onerror={on_image_error()} />
                        </a>
                    }) }
                </div>
            }) }
        </div>
    }
}
