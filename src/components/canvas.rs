use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use log::debug;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::state::particles::{Rgba, Surface, Viewport};

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("no window")]
    NoWindow,
    #[error("canvas is not mounted")]
    NoCanvas,
    #[error("2d context unavailable")]
    NoContext,
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for FieldError {
    fn from(value: JsValue) -> Self {
        FieldError::Js(format!("{:?}", value))
    }
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, FieldError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(FieldError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FieldError::NoContext)?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(x, y, radius, 0.0, TAU) {
            debug!("arc at ({}, {}) r={} rejected: {:?}", x, y, radius, e);
            return;
        }
        self.ctx.fill();
    }

    fn stroke_fading_line(&mut self, head: (f64, f64), tail: (f64, f64), width: f64, color: Rgba) {
        let gradient = self.ctx.create_linear_gradient(head.0, head.1, tail.0, tail.1);
        let stops = gradient
            .add_color_stop(0.0, &color.to_css())
            .and_then(|_| gradient.add_color_stop(1.0, &color.with_alpha(0.0).to_css()));
        if let Err(e) = stops {
            debug!("gradient stop rejected: {:?}", e);
            return;
        }

        self.ctx.set_line_width(width);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        self.ctx.move_to(head.0, head.1);
        self.ctx.line_to(tail.0, tail.1);
        self.ctx.stroke();
    }
}

pub fn window_viewport(window: &Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height)
}

pub fn fit_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
}

/// A requestAnimationFrame loop that reschedules itself every frame until dropped.
pub struct AnimationLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationLoop {
    pub fn start(window: Window, mut on_frame: impl FnMut() + 'static) -> Result<Self, FieldError> {
        let pending = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        let window_clone = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_frame();
            if let Some(next) = tick_clone.borrow().as_ref() {
                pending_clone.set(
                    window_clone
                        .request_animation_frame(next.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }) as Box<dyn FnMut()>);

        let first = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        pending.set(Some(first));
        *tick.borrow_mut() = Some(callback);

        Ok(Self {
            window,
            pending,
            tick,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                debug!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        // breaks the closure's reference back to `tick`
        self.tick.borrow_mut().take();
    }
}
