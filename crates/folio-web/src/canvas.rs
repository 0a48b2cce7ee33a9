//! Trail canvas: the particle engine's drawing surface.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use folio_core::{FxConfig, FxError, ParticleEngine, Rgb, Surface};
use gloo::events::EventListener;
use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent};

use crate::dom;
use crate::error::WebError;

/// Canvas 2D context wrapped as a [`Surface`].
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, WebError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(FxError::MissingSurface)?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgb, alpha: f64) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_css_rgba(alpha));
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}

/// Matches the canvas backing store to the window's inner size.
fn fit_to_window(canvas: &HtmlCanvasElement) {
    let Ok(window) = dom::window() else {
        return;
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    if let (Some(width), Some(height)) = (width, height) {
        canvas.set_width(pixels(width));
        canvas.set_height(pixels(height));
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixels(value: f64) -> u32 {
    value.max(0.0) as u32
}

/// Creates the particle engine and its click/resize listeners.
///
/// The engine is always returned; without a usable canvas it is a no-op.
pub fn install(
    document: &Document,
    config: &FxConfig,
) -> (Rc<RefCell<ParticleEngine>>, Vec<EventListener>) {
    let mut listeners = Vec::new();

    let canvas = dom::element_by_id::<HtmlCanvasElement>(document, &config.elements.trail_canvas);
    let surface = match canvas {
        Ok(canvas) => {
            fit_to_window(&canvas);
            if let Ok(window) = dom::window() {
                let canvas_for_resize = canvas.clone();
                listeners.push(EventListener::new(&window, "resize", move |_event| {
                    fit_to_window(&canvas_for_resize);
                }));
            }
            CanvasSurface::new(canvas)
        }
        Err(e) => Err(e),
    };

    let surface: Option<Box<dyn Surface>> = match surface {
        Ok(surface) => Some(Box::new(surface)),
        Err(e) => {
            tracing::info!(error = %e, "Particle trail inactive");
            None
        }
    };

    let seed = rand::rng().random::<u64>();
    let engine = Rc::new(RefCell::new(ParticleEngine::new(
        config.particles.clone(),
        seed,
        surface,
    )));

    let engine_for_click = engine.clone();
    listeners.push(EventListener::new(document, "click", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        engine_for_click
            .borrow_mut()
            .burst(f64::from(event.client_x()), f64::from(event.client_y()));
    }));

    (engine, listeners)
}
