use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};
use yew::prelude::*;

use crate::components::canvas::{fit_canvas, window_viewport, AnimationLoop, CanvasSurface, FieldError};
use crate::state::particles::{FieldConfig, ParticleField};

/// Everything a mounted starfield holds on to. Dropping it stops the frame
/// loop and unregisters the resize listener.
struct FieldRuntime {
    window: Window,
    on_resize: Closure<dyn FnMut()>,
    _animation: AnimationLoop,
}

impl Drop for FieldRuntime {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            debug!("resize listener removal failed: {:?}", e);
        }
    }
}

fn start_field(canvas: &HtmlCanvasElement) -> Result<FieldRuntime, FieldError> {
    let window = web_sys::window().ok_or(FieldError::NoWindow)?;
    let mut surface = CanvasSurface::new(canvas)?;

    let viewport = window_viewport(&window);
    fit_canvas(canvas, viewport);
    let field = Rc::new(RefCell::new(ParticleField::new(
        viewport,
        FieldConfig::default(),
        SmallRng::from_entropy(),
    )));

    let animation = {
        let field = field.clone();
        AnimationLoop::start(window.clone(), move || {
            field.borrow_mut().tick(&mut surface);
        })?
    };

    let on_resize = {
        let window = window.clone();
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            let viewport = window_viewport(&window);
            fit_canvas(&canvas, viewport);
            field.borrow_mut().resize(viewport);
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

    debug!(
        "starfield running at {}x{}",
        viewport.width, viewport.height
    );
    Ok(FieldRuntime {
        window,
        on_resize,
        _animation: animation,
    })
}

/// Full-viewport canvas with drifting stars and the odd shooting star.
#[function_component(Starfield)]
pub fn starfield() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let runtime = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(FieldError::NoCanvas)
                    .and_then(|canvas| start_field(&canvas));
                let runtime = match runtime {
                    Ok(runtime) => Some(runtime),
                    Err(e) => {
                        debug!("starfield disabled: {}", e);
                        None
                    }
                };
                move || drop(runtime)
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="starfield" />
    }
}
