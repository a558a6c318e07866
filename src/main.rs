use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod motion;
mod scroll;
mod state;
mod components {
    pub mod icon;
    pub mod nav_button;
    pub mod particles;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use config::Brand;
use pages::landing::FmlLanding;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <FmlLanding /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let brand = use_memo(
        |_| {
            Brand::load().map(Rc::new).map_err(|err| {
                error!("Failed to load brand configuration: {}", err);
                err
            })
        },
        (),
    );

    match &*brand {
        Ok(brand) => html! {
            <ContextProvider<Rc<Brand>> context={brand.clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Rc<Brand>>>
        },
        Err(_) => html! {
            <div class="config-error">
                <p>{"This page is temporarily unavailable."}</p>
            </div>
        },
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
