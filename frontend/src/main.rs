use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod gallery {
    pub mod model;
    pub mod state;
    pub mod airtable;
    pub mod view;
}
mod components {
    pub mod animated_section;
    pub mod compare;
    pub mod footer;
    pub mod looping_video;
    pub mod scroll_arrow;
}
mod pages {
    pub mod home;
    pub mod how_we_work;
    pub mod products_collection;
    pub mod sustainability;
    pub mod visionnaire;
}

use components::footer::{trigger_footer_contact, Footer};
use pages::{
    home::Home,
    how_we_work::HowWeWork,
    products_collection::ProductsCollection,
    sustainability::Sustainability,
    visionnaire::Visionnaire,
};

/// Height past which the navigation bar switches to its solid style.
const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/productscollection")]
    ProductsCollection,
    #[at("/how-we-work")]
    HowWeWork,
    #[at("/sustainability")]
    Sustainability,
    #[at("/visionnaire")]
    Visionnaire,
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
        Route::ProductsCollection => {
            info!("Rendering Products Collection page");
            html! { <ProductsCollection /> }
        },
        Route::HowWeWork => {
            info!("Rendering How We Work page");
            html! { <HowWeWork /> }
        },
        Route::Sustainability => {
            info!("Rendering Sustainability page");
            html! { <Sustainability /> }
        },
        Route::Visionnaire => {
            info!("Rendering Visionnaire page");
            html! { <Visionnaire /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <section class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="gold-button">
                        {"Back to the showroom"}
                    </Link<Route>>
                </section>
            }
        },
    }
}

/// Every page starts at the top, as if it were a fresh document.
#[hook]
pub fn use_scroll_to_top() {
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


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let listener = window.clone().map(|window| {
                let target = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = target.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > NAV_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let contact = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            trigger_footer_contact();
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let link = |route: Route, label: &'static str| {
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={route} classes="nav-link">
                    {label}
                </Link<Route>>
            </div>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled || *menu_open).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"D&D Design Center"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { link(Route::ProductsCollection, "Product Collection") }
                    { link(Route::HowWeWork, "How We Work") }
                    { link(Route::Sustainability, "Sustainability") }
                    { link(Route::Visionnaire, "Visionnaire") }
                    <button class="nav-contact-button" onclick={contact}>
                        {"Contact"}
                    </button>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
