//! Page-level wiring: builds every feature and owns their lifetimes.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FrameDriver, FxConfig, InputState};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::cursor::CursorFollower;
use crate::error::WebError;
use crate::frame_loop::FrameLoop;
use crate::reveal::RevealObserver;
use crate::{canvas, carousel, contact, cursor, dom, reveal};

/// Id of the optional inline JSON config element.
const CONFIG_ELEMENT_ID: &str = "fx-config";

/// Running effects. Dropping it stops the frame loop and removes listeners.
pub struct App {
    frame_loop: FrameLoop,
    _listeners: Vec<EventListener>,
    _reveal: Vec<RevealObserver>,
}

impl App {
    /// Reads the embedded config (if any) and starts every feature.
    pub fn start_from_page() -> Result<Self, WebError> {
        let document = dom::document()?;
        let config = FxConfig::from_embedded(embedded_config(&document).as_deref());
        Self::start(&document, &config)
    }

    /// Installs each feature independently; a missing element only disables
    /// the feature that needs it.
    pub fn start(document: &Document, config: &FxConfig) -> Result<Self, WebError> {
        let input = Rc::new(RefCell::new(InputState::new()));
        let mut driver = FrameDriver::new();
        let mut listeners = Vec::new();

        let input_for_move = input.clone();
        listeners.push(EventListener::new(document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                input_for_move
                    .borrow_mut()
                    .move_pointer(f64::from(event.client_x()), f64::from(event.client_y()));
            }
        }));

        let (particles, particle_listeners) = canvas::install(document, config);
        driver.register(particles.clone());
        listeners.extend(particle_listeners);

        match dom::element_by_id::<HtmlElement>(document, &config.elements.cursor) {
            Ok(element) => {
                let follower = Rc::new(RefCell::new(CursorFollower::new(element)));
                driver.register(follower.clone());
                listeners.push(cursor::keyboard_listener(document, follower, particles));
            }
            Err(e) => tracing::info!(error = %e, "Custom cursor inactive"),
        }

        match carousel::install(document, config) {
            Ok((engine, carousel_listeners)) => {
                driver.register(engine);
                listeners.extend(carousel_listeners);
            }
            Err(e) => tracing::info!(error = %e, "Carousel inactive"),
        }

        let reveal = reveal::install(document, &config.reveal).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Reveal-on-scroll inactive");
            Vec::new()
        });

        match contact::install_country_select(document, config) {
            Ok(select_listeners) => listeners.extend(select_listeners),
            Err(e) => tracing::info!(error = %e, "Country selector inactive"),
        }

        match contact::install_form(document, config) {
            Ok(form_listeners) => listeners.extend(form_listeners),
            Err(e) => tracing::info!(error = %e, "Contact form inactive"),
        }

        let frame_loop = FrameLoop::new(driver, input);
        frame_loop.start()?;

        Ok(Self {
            frame_loop,
            _listeners: listeners,
            _reveal: reveal,
        })
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Stops the frame loop. Listeners stay attached until the app is dropped.
    pub fn stop(&self) {
        self.frame_loop.stop();
    }
}

fn embedded_config(document: &Document) -> Option<String> {
    dom::optional_element::<Element>(document, CONFIG_ELEMENT_ID)?.text_content()
}
