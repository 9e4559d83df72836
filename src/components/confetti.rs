use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::components::canvas::{fit_canvas, window_viewport, AnimationLoop, CanvasSurface, FieldError};
use crate::state::confetti::{BurstConfig, ConfettiBurst};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn prefers_reduced_motion(window: &Window) -> bool {
    matches!(window.match_media(REDUCED_MOTION_QUERY), Ok(Some(query)) if query.matches())
}

/// Fires one confetti burst over the page. Skipped when the visitor asks for
/// reduced motion or the canvas cannot be set up.
pub fn celebrate() {
    if let Err(e) = launch_burst() {
        debug!("confetti skipped: {}", e);
    }
}

fn launch_burst() -> Result<(), FieldError> {
    let window = web_sys::window().ok_or(FieldError::NoWindow)?;
    if prefers_reduced_motion(&window) {
        return Ok(());
    }
    let document = window.document().ok_or(FieldError::NoWindow)?;
    let body = document.body().ok_or(FieldError::NoCanvas)?;

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| FieldError::NoCanvas)?;
    canvas.set_class_name("confetti-layer");
    body.append_child(&canvas)?;

    let mut surface = match CanvasSurface::new(&canvas) {
        Ok(surface) => surface,
        Err(e) => {
            canvas.remove();
            return Err(e);
        }
    };
    let viewport = window_viewport(&window);
    fit_canvas(&canvas, viewport);
    let mut burst = ConfettiBurst::new(viewport, BurstConfig::default(), &mut SmallRng::from_entropy());

    // The loop owns a handle to its own slot; the last frame empties it.
    let slot: Rc<RefCell<Option<AnimationLoop>>> = Rc::new(RefCell::new(None));
    let animation = {
        let slot = slot.clone();
        let canvas = canvas.clone();
        AnimationLoop::start(window, move || {
            if burst.is_done() {
                return;
            }
            burst.tick(&mut surface);
            if burst.is_done() {
                canvas.remove();
                // a closure cannot drop itself mid-call, release it on the next turn
                let slot = slot.clone();
                Timeout::new(0, move || drop(slot.borrow_mut().take())).forget();
            }
        })
    };
    match animation {
        Ok(animation) => {
            *slot.borrow_mut() = Some(animation);
            Ok(())
        }
        Err(e) => {
            canvas.remove();
            Err(e)
        }
    }
}
