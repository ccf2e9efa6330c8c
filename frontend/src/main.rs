use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod catalog;
mod gallery;
mod components {
    pub mod album_gallery;
    pub mod image_fallback;
    pub mod lightbox;
}
mod pages {
    pub mod home;
    pub mod service_detail;
}

use catalog::Catalog;
use pages::{
    home::Home,
    service_detail::{NotFound, ServiceDetail},
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services/:slug")]
    Service { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Service { slug } => {
            info!("Rendering Service page for {}", slug);
            // Keyed so that switching services mounts a fresh page and lightbox.
            html! { <ServiceDetail key={slug.clone()} slug={slug.clone()} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let catalog = Catalog::bundled();

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"EngiServe"}
                </Link<Route>>
                <div class="nav-right">
                    { for catalog.services.iter().map(|service| html! {
                        <Link<Route> to={Route::Service { slug: service.slug.clone() }} classes="nav-link">
                            {&service.title}
                        </Link<Route>>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    background: rgba(250, 247, 242, 0.95);
                    border-bottom: 1px solid #E8DCCB;
                    z-index: 100;
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 16px 20px;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-weight: 700;
                    color: #C07A3A;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 18px;
                }
                .nav-link {
                    color: #3b2f25;
                    text-decoration: none;
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
