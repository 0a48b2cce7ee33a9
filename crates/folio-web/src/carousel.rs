//! Project carousel bound to the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{
    CardId, CardTree, CarouselEngine, FxConfig, FxError, Strip, StripSink, resolve_card,
};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent};

use crate::dom;
use crate::error::WebError;

/// Attribute holding each rendered card's index in the strip.
const CARD_INDEX_ATTR: &str = "data-card-index";

/// Writes the carousel's output to the track element and its cards.
pub struct DomStrip {
    track: HtmlElement,
    cards: Vec<Element>,
    focused_class: String,
}

impl StripSink for DomStrip {
    fn apply_offset(&mut self, offset: f64) {
        dom::set_style(&self.track, "transform", &format!("translateX({offset}px)"));
    }

    fn set_focused(&mut self, card: CardId, focused: bool) {
        let Some(element) = self.cards.get(card) else {
            return;
        };
        let classes = element.class_list();
        let result = if focused {
            classes.add_1(&self.focused_class)
        } else {
            classes.remove_1(&self.focused_class)
        };
        if let Err(e) = result {
            tracing::debug!(card, error = ?e, "Failed to toggle focus class");
        }
    }
}

/// The element tree below the carousel track.
pub struct DomCardTree<'a> {
    pub root: &'a Element,
    pub card_class: &'a str,
}

impl DomCardTree<'_> {
    /// Resolves an event target to the card it is inside, if any.
    pub fn resolve(&self, target: Option<EventTarget>) -> Option<CardId> {
        let element = target?.dyn_into::<Element>().ok()?;
        resolve_card(self, element)
    }
}

impl CardTree for DomCardTree<'_> {
    type Node = Element;

    fn card_id(&self, node: &Element) -> Option<CardId> {
        if !node.class_list().contains(self.card_class) {
            return None;
        }
        node.get_attribute(CARD_INDEX_ATTR)?.parse().ok()
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        if node == self.root {
            return None;
        }
        node.parent_element()
    }
}

/// Left edge in viewport coordinates, with sub-pixel precision.
fn left_edge(element: &Element) -> f64 {
    element.get_bounding_client_rect().left()
}

#[allow(clippy::cast_precision_loss)]
fn pass_factor(pass: usize) -> f64 {
    pass as f64
}

fn clone_card(card: &Element, clone_class: &str) -> Result<Element, WebError> {
    let clone = card
        .clone_node_with_deep(true)?
        .dyn_into::<Element>()
        .map_err(|_| WebError::Js("card clone is not an element".to_string()))?;
    clone.class_list().add_1(clone_class)?;
    Ok(clone)
}

/// Where a clone of the first card lands when appended after the originals.
/// The measuring clone is removed again.
fn measure_next_pass_left(
    track: &HtmlElement,
    first: &Element,
    clone_class: &str,
) -> Result<f64, WebError> {
    let marker = clone_card(first, clone_class)?;
    track.append_child(&marker)?;
    let left = left_edge(&marker);
    track.remove_child(&marker)?;
    Ok(left)
}

/// Builds the strip from measured card positions, materializes clones and
/// wires hover handling.
pub fn install(
    document: &Document,
    config: &FxConfig,
) -> Result<(Rc<RefCell<CarouselEngine<DomStrip>>>, Vec<EventListener>), WebError> {
    let wrap = dom::element_by_id::<HtmlElement>(document, &config.elements.projects_wrap)?;
    let track = dom::element_by_id::<HtmlElement>(document, &config.elements.projects_track)?;

    let children = track.children();
    let originals: Vec<Element> = (0..children.length())
        .filter_map(|i| children.item(i))
        .collect();
    let Some(first) = originals.first() else {
        return Err(FxError::EmptyStrip.into());
    };

    let card_lefts: Vec<f64> = originals.iter().map(left_edge).collect();
    let next_pass_left = measure_next_pass_left(&track, first, &config.carousel.clone_class)?;
    let strip = Strip::from_offsets(
        &card_lefts,
        next_pass_left,
        f64::from(wrap.offset_width()),
    )?;

    let mut cards = Vec::with_capacity(strip.render_len());
    for (index, slot) in strip.slots().enumerate() {
        let card = if slot.is_clone {
            let clone = clone_card(&originals[slot.original], &config.carousel.clone_class)?;
            track.append_child(&clone)?;
            clone
        } else {
            originals[slot.original].clone()
        };
        card.set_attribute(CARD_INDEX_ATTR, &index.to_string())?;
        cards.push(card);
    }

    // Each appended pass must start exactly one pass width after the previous.
    let count = strip.original_count();
    for pass in 1..strip.passes() {
        let drift = left_edge(&cards[pass * count])
            - left_edge(&cards[0])
            - strip.original_width() * pass_factor(pass);
        if drift.abs() > 0.5 {
            tracing::warn!(pass, drift, "Carousel copies are not evenly spaced");
        }
    }
    tracing::info!(
        originals = count,
        rendered = strip.render_len(),
        pass_width = strip.original_width(),
        loop_span = strip.loop_span(),
        "Carousel installed"
    );

    let sink = DomStrip {
        track: track.clone(),
        cards,
        focused_class: config.carousel.focused_class.clone(),
    };
    let engine = Rc::new(RefCell::new(CarouselEngine::new(
        strip,
        config.carousel.speed,
        sink,
    )));

    let mut listeners = Vec::new();
    let root: Element = track.clone().into();

    let engine_for_over = engine.clone();
    let root_for_over = root.clone();
    let card_class = config.carousel.card_class.clone();
    listeners.push(EventListener::new(&track, "mouseover", move |event| {
        let tree = DomCardTree {
            root: &root_for_over,
            card_class: &card_class,
        };
        let card = tree.resolve(event.target());
        if let Some(transition) = engine_for_over.borrow_mut().pointer_over(card) {
            tracing::trace!(?transition, "Carousel hover");
        }
    }));

    let engine_for_out = engine.clone();
    let card_class = config.carousel.card_class.clone();
    listeners.push(EventListener::new(&track, "mouseout", move |event| {
        let tree = DomCardTree {
            root: &root,
            card_class: &card_class,
        };
        let left = tree.resolve(event.target());
        let entered = event
            .dyn_ref::<MouseEvent>()
            .and_then(|event| tree.resolve(event.related_target()));
        if let Some(transition) = engine_for_out.borrow_mut().pointer_out(left, entered) {
            tracing::trace!(?transition, "Carousel hover");
        }
    }));

    Ok((engine, listeners))
}
