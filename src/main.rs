use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod scroll;
mod state {
    pub mod accordion;
    pub mod confetti;
    pub mod navigation;
    pub mod particles;
    pub mod reveal;
}
mod components {
    pub mod accordion;
    pub mod canvas;
    pub mod confetti;
    pub mod floating_cta;
    pub mod footer;
    pub mod nav;
    pub mod particle_field;
    pub mod reveal;
}
mod pages {
    pub mod faq;
    pub mod home;
    pub mod legal;
}

use components::{
    floating_cta::FloatingWhatsApp,
    footer::Footer,
    nav::Nav,
};
use pages::{
    home::Home,
    legal::LegalPage,
};
use state::navigation::{Page, RouteState};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/legal/:section")]
    Legal { section: usize },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn state(&self) -> RouteState {
        match self {
            Route::Legal { section } => RouteState::legal(*section),
            Route::Home | Route::NotFound => RouteState::home(),
        }
    }

    pub fn from_state(state: RouteState) -> Self {
        match state.page {
            Page::Home => Route::Home,
            Page::Legal => Route::Legal { section: state.legal_section },
        }
    }
}

/// Route state currently mounted under the router, home if the route is unknown.
#[hook]
pub fn use_route_state() -> RouteState {
    use_route::<Route>()
        .map(|route| route.state())
        .unwrap_or_default()
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Legal { section } => {
            info!("Rendering Legal page at section {}", section);
            html! { <LegalPage initial_section={section} /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-shell">
                <FloatingWhatsApp />
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </div>
            <style>
                {r#"
                * {
                    box-sizing: border-box;
                    margin: 0;
                    padding: 0;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    background: #000;
                    color: #fff;
                    font-family: 'Inter', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    overflow-x: hidden;
                }

                ::selection {
                    background: #FFD700;
                    color: #000;
                }

                a {
                    color: inherit;
                    text-decoration: none;
                }

                .app-shell {
                    min-height: 100vh;
                    background: #000;
                }

                .container {
                    width: 100%;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    position: relative;
                    z-index: 1;
                }

                .eyebrow {
                    display: block;
                    color: #FFD700;
                    font-family: monospace;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    margin-bottom: 1rem;
                }

                .gold-text {
                    color: transparent;
                    background: linear-gradient(90deg, #FFD700, #EA580C);
                    -webkit-background-clip: text;
                    background-clip: text;
                }

                .reveal-on-scroll {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .reveal-on-scroll.reveal-visible {
                    opacity: 1;
                    transform: none;
                }

                .confetti-layer {
                    position: fixed;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    pointer-events: none;
                    z-index: 100;
                }

                section[id], footer[id] {
                    scroll-margin-top: 5rem;
                }
                "#}
            </style>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_deep_link_round_trips_through_route() {
        let route = Route::Legal { section: 2 };
        assert_eq!(route.state(), RouteState::legal(2));
        assert_eq!(Route::from_state(RouteState::legal(2)), route);
    }

    #[test]
    fn legal_route_path_carries_section() {
        assert_eq!(Route::Legal { section: 3 }.to_path(), "/legal/3");
        assert_eq!(Route::recognize("/legal/1"), Some(Route::Legal { section: 1 }));
    }

    #[test]
    fn unknown_paths_fall_back_home() {
        assert_eq!(Route::NotFound.state(), RouteState::home());
    }
}
