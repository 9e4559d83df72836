use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew_router::prelude::Navigator;

use crate::config::ANCHOR_SCROLL_DELAY_MS;
use crate::state::navigation::{follow_anchor, AnchorHost, Page, RouteState};
use crate::Route;

/// Smooth-scrolls to the element matching `anchor`. A missing target is ignored.
pub fn scroll_to_anchor(anchor: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    match document.query_selector(anchor) {
        Ok(Some(element)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        _ => debug!("scroll target {} is not mounted", anchor),
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Moves the router to `page`. Every navigation action goes through here so
/// the route always reflects `RouteState::navigate`.
pub fn navigate(navigator: &Navigator, current: RouteState, page: Page, section: usize) {
    let mut next = current;
    next.navigate(page, section);
    navigator.push(&Route::from_state(next));
}

/// Anchor navigation inside the browser: the router switches pages and
/// `gloo_timers` supplies the deferred scroll.
#[derive(Clone)]
pub struct BrowserAnchors {
    navigator: Navigator,
    route: RouteState,
}

impl BrowserAnchors {
    pub fn new(navigator: Navigator, route: RouteState) -> Self {
        Self { navigator, route }
    }

    pub fn follow(&self, anchor: &str) {
        // TODO: replace the fixed delay with a mounted signal from the home page
        follow_anchor(self, self.route.page, anchor, ANCHOR_SCROLL_DELAY_MS);
    }
}

impl AnchorHost for BrowserAnchors {
    fn show_home(&self) {
        navigate(&self.navigator, self.route, Page::Home, 0);
    }

    fn scroll_to(&self, anchor: &str) {
        scroll_to_anchor(anchor);
    }

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
