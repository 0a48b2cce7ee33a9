//! Custom cursor element that mirrors the pointer.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Frame, KeyAction, ParticleEngine, Ticker};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::dom;

/// Moves the cursor element to the pointer every frame.
pub struct CursorFollower {
    cursor: HtmlElement,
    running: bool,
}

impl CursorFollower {
    pub fn new(cursor: HtmlElement) -> Self {
        Self {
            cursor,
            running: false,
        }
    }

    pub fn hide(&self) {
        dom::set_style(&self.cursor, "opacity", "0");
    }
}

impl Ticker for CursorFollower {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn on_frame(&mut self, frame: &Frame<'_>) {
        let pointer = frame.input.pointer();
        dom::set_style(&self.cursor, "left", &format!("{}px", pointer.x));
        dom::set_style(&self.cursor, "top", &format!("{}px", pointer.y));
    }
}

/// Keyboard affordance: `Tab` hides the cursor and wipes the trail.
pub fn keyboard_listener(
    document: &Document,
    cursor: Rc<RefCell<CursorFollower>>,
    particles: Rc<RefCell<ParticleEngine>>,
) -> EventListener {
    EventListener::new(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Some(KeyAction::HideCursor) = KeyAction::from_key(&event.key()) {
            cursor.borrow().hide();
            particles.borrow_mut().clear_surface();
        }
    })
}
