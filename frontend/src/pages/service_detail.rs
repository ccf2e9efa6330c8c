use log::{info, warn};
use yew::prelude::*;
use yew_router::components::Link;

use crate::catalog::Catalog;
use crate::components::album_gallery::AlbumGallery;
use crate::components::lightbox::Lightbox;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let catalog = Catalog::bundled();

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.slug.clone(),
        );
    }

    let Some(service) = catalog.find(&props.slug) else {
        warn!("No service with slug {}", props.slug);
        return html! { <NotFound /> };
    };
    info!("Showing service {} with {} photos", service.slug, service.photo_count());

    html! {
        <div class="service-page">
            <section class="service-hero">
                <h1>{&service.title}</h1>
                <p class="service-lead">{&service.lead}</p>
            </section>
            <section class="service-body">
                <p>{&service.description}</p>
                {
                    if service.features.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <ul class="service-features">
                                { for service.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                            </ul>
                        }
                    }
                }
            </section>
            <section class="service-body">
                <AlbumGallery albums={service.albums.clone()} />
            </section>
            <Lightbox />
            <style>
                {r#"
                .service-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .service-hero {
                    text-align: center;
                    padding: 48px 20px 24px;
                }
                .service-lead {
                    color: #6b5b4b;
                }
                .service-body {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 20px 32px;
                }
                .service-features li {
                    margin-bottom: 6px;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="service-page">
            <section class="service-hero">
                <h1>{"Page not found"}</h1>
                <p>
                    <Link<Route> to={Route::Home}>{"Back to services"}</Link<Route>>
                </p>
            </section>
        </div>
    }
}
