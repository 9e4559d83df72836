use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::reveal::{RevealLatch, RevealOutcome, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct Observation {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(target: &Element, visible: UseStateSetter<bool>) -> Option<Observation> {
    let mut latch = RevealLatch::new();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if latch.observe(entry.is_intersecting()) == RevealOutcome::Revealed {
                visible.set(true);
                observer.unobserve(&entry.target());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            debug!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    observer.observe(target);

    Some(Observation {
        observer,
        _callback: callback,
    })
}

/// Returns a ref to attach to a section and whether it has scrolled into view.
/// The flag flips once and stays set for the lifetime of the component.
#[hook]
pub fn use_scroll_reveal() -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let setter = visible.setter();
        use_effect_with_deps(
            move |_| {
                let observation = node
                    .cast::<Element>()
                    .and_then(|target| observe_once(&target, setter));
                move || drop(observation)
            },
            (),
        );
    }

    (node, *visible)
}

pub fn reveal_classes(visible: bool) -> Classes {
    classes!("reveal-on-scroll", visible.then_some("reveal-visible"))
}
