//! Reveal-on-scroll: elements get a class the first time they are seen.

use folio_core::{RevealConfig, RevealGroup};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;
use crate::error::WebError;

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Keeps the observer and its callback alive; disconnects on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverClosure,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Installs one observer per configured group.
pub fn install(document: &Document, config: &RevealConfig) -> Result<Vec<RevealObserver>, WebError> {
    config
        .groups
        .iter()
        .map(|group| observe_group(document, group, &config.visible_class))
        .collect()
}

fn observe_group(
    document: &Document,
    group: &RevealGroup,
    visible_class: &str,
) -> Result<RevealObserver, WebError> {
    let targets = dom::query_all(document, &group.selector)?;

    let visible_class = visible_class.to_string();
    let once = group.once;
    let callback: ObserverClosure = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Err(e) = target.class_list().add_1(&visible_class) {
                    tracing::debug!(error = ?e, "Failed to reveal element");
                }
                if once {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(group.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in &targets {
        observer.observe(target);
    }
    tracing::info!(
        selector = %group.selector,
        count = targets.len(),
        "Reveal observer installed"
    );

    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}
