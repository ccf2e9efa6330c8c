use yew::prelude::*;
use yew_router::components::Link;

use crate::catalog::Catalog;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = Catalog::bundled();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{"Engineering systems for homes and industry"}</h1>
                <p>{"Design, installation and service of water, electrical and ventilation systems."}</p>
            </section>
            <section class="services-section">
                <h2 class="section-title">{"Services"}</h2>
                <div class="services-grid">
                    { for catalog.services.iter().map(|service| html! {
                        <div class="service-card">
                            <Link<Route> to={Route::Service { slug: service.slug.clone() }}>
                                <h3>{&service.title}</h3>
                                <p>{&service.lead}</p>
                                {
                                    if service.photo_count() > 0 {
                                        html! { <span class="service-photos">{format!("{} photos", service.photo_count())}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </section>
            <style>
                {r#"
                .home-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .hero {
                    text-align: center;
                    padding: 60px 20px 40px;
                }
                .hero h1 {
                    font-size: 2.4rem;
                    margin-bottom: 12px;
                }
                .services-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 20px 60px;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 20px;
                }
                .service-card a {
                    display: block;
                    padding: 24px;
                    border-radius: 12px;
                    background: #FAF7F2;
                    color: inherit;
                    text-decoration: none;
                    border: 1px solid #E8DCCB;
                }
                .service-card a:hover {
                    border-color: #C07A3A;
                }
                .service-photos {
                    font-size: 0.85rem;
                    color: #C07A3A;
                }
                "#}
            </style>
        </div>
    }
}
