//! `requestAnimationFrame` loop driving every registered ticker.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::{FrameDriver, InputState};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::error::WebError;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Self-rescheduling frame callback with explicit start/stop.
pub struct FrameLoop {
    driver: Rc<RefCell<FrameDriver>>,
    input: Rc<RefCell<InputState>>,
    /// Holds the closure while running; cleared on stop to break the
    /// closure -> slot -> closure cycle.
    closure: Rc<RefCell<Option<FrameClosure>>>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(driver: FrameDriver, input: Rc<RefCell<InputState>>) -> Self {
        Self {
            driver: Rc::new(RefCell::new(driver)),
            input,
            closure: Rc::new(RefCell::new(None)),
            frame_id: Rc::new(Cell::new(None)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.closure.borrow().is_some()
    }

    /// Starts every ticker and requests the first frame.
    pub fn start(&self) -> Result<(), WebError> {
        if self.is_running() {
            return Ok(());
        }
        self.driver.borrow_mut().start_all();

        let driver = self.driver.clone();
        let input = self.input.clone();
        let slot = self.closure.clone();
        let frame_id = self.frame_id.clone();

        *self.closure.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            driver.borrow_mut().advance(timestamp, &input.borrow());

            // Request next frame
            if let Some(ref closure) = *slot.borrow() {
                match request_frame(closure) {
                    Ok(id) => frame_id.set(Some(id)),
                    Err(e) => {
                        tracing::warn!(error = %e, "Frame loop halted");
                        frame_id.set(None);
                    }
                }
            }
        }));

        if let Some(ref closure) = *self.closure.borrow() {
            self.frame_id.set(Some(request_frame(closure)?));
        }
        tracing::info!(
            tickers = self.driver.borrow().len(),
            "Frame loop started"
        );
        Ok(())
    }

    /// Cancels the pending frame and stops every ticker.
    pub fn stop(&self) {
        if let Some(id) = self.frame_id.take() {
            if let Ok(window) = dom::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        if self.closure.borrow_mut().take().is_some() {
            self.driver.borrow_mut().stop_all();
            tracing::info!("Frame loop stopped");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(closure: &FrameClosure) -> Result<i32, WebError> {
    Ok(dom::window()?.request_animation_frame(closure.as_ref().unchecked_ref())?)
}
