//! Browser tests. Run with `wasm-pack test --headless --firefox crates/folio-web`.

#![cfg(target_arch = "wasm32")]

use folio_core::{Frame, FxConfig, HoverState, InputState, Ticker};
use folio_web::{App, DomCardTree, carousel, dom};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_nested_target_resolves_to_card() {
    let document = dom::document().unwrap();
    let track = document.create_element("div").unwrap();
    let card = document.create_element("article").unwrap();
    card.set_class_name("proj-card");
    card.set_attribute("data-card-index", "3").unwrap();
    let image = document.create_element("img").unwrap();
    card.append_child(&image).unwrap();
    track.append_child(&card).unwrap();

    let tree = DomCardTree {
        root: &track,
        card_class: "proj-card",
    };

    assert_eq!(tree.resolve(Some(image.into())), Some(3));
    assert_eq!(tree.resolve(Some(card.into())), Some(3));
    assert_eq!(tree.resolve(Some(track.clone().into())), None);
    assert_eq!(tree.resolve(None), None);
}

#[wasm_bindgen_test]
fn test_bare_page_degrades_without_error() {
    let document = dom::document().unwrap();
    let config = FxConfig {
        elements: folio_core::ElementsConfig {
            trail_canvas: "no-such-canvas".to_string(),
            cursor: "no-such-cursor".to_string(),
            projects_track: "no-such-track".to_string(),
            contact_form: "no-such-form".to_string(),
            country_code: "no-such-select".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    let app = App::start(&document, &config).unwrap();
    assert!(app.is_running());

    app.stop();
    assert!(!app.is_running());
}

/// Four 300px cards in a flex track with a 24px gap, inside a 1200px window.
fn carousel_fixture(document: &Document, prefix: &str) -> (HtmlElement, HtmlElement) {
    let make = |tag: &str| {
        document
            .create_element(tag)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    };
    let wrap = make("div");
    wrap.set_id(&format!("{prefix}Wrap"));
    wrap.set_attribute("style", "width: 1200px; overflow: hidden")
        .unwrap();
    let track = make("div");
    track.set_id(&format!("{prefix}Track"));
    track
        .set_attribute("style", "display: flex; gap: 24px; width: max-content")
        .unwrap();
    for i in 0..4 {
        let card = make("div");
        card.set_class_name("proj-card");
        card.set_attribute("style", "flex: 0 0 300px; width: 300px; height: 40px")
            .unwrap();
        let title = make("span");
        title.set_text_content(Some(&format!("Project {i}")));
        card.append_child(&title).unwrap();
        track.append_child(&card).unwrap();
    }
    wrap.append_child(&track).unwrap();
    document.body().unwrap().append_child(&wrap).unwrap();
    (wrap, track)
}

fn carousel_config(prefix: &str) -> FxConfig {
    let mut config = FxConfig::default();
    config.elements.projects_wrap = format!("{prefix}Wrap");
    config.elements.projects_track = format!("{prefix}Track");
    config
}

fn dispatch_mouse(target: &Element, kind: &str, related: Option<&Element>) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let related: Option<&EventTarget> = related.map(|element| element.as_ref());
    init.set_related_target(related);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn left_edge(element: &Element) -> f64 {
    element.get_bounding_client_rect().left()
}

#[wasm_bindgen_test]
fn test_carousel_clones_whole_passes_across_gaps() {
    let document = dom::document().unwrap();
    let (wrap, track) = carousel_fixture(&document, "gapped");
    let (engine, _listeners) = carousel::install(&document, &carousel_config("gapped")).unwrap();

    let cards = track.children();
    assert_eq!(cards.length(), 8);
    for i in 0..cards.length() {
        let card = cards.item(i).unwrap();
        assert_eq!(card.get_attribute("data-card-index"), Some(i.to_string()));
        assert_eq!(card.class_list().contains("clone"), i >= 4);
    }

    let span = {
        let engine = engine.borrow();
        assert_eq!(engine.strip().passes(), 2);
        engine.strip().loop_span()
    };
    // 4 * (300 + 24): the gap after the last original belongs to the pass.
    assert!((span - 1296.0).abs() < 0.5, "loop span {span}");

    // The card shown after the reset is exactly where card 0 was.
    let first = left_edge(&cards.item(0).unwrap());
    let repeat = left_edge(&cards.item(4).unwrap());
    assert!((repeat - first - span).abs() < 0.5);

    wrap.remove();
}

#[wasm_bindgen_test]
fn test_carousel_hover_pauses_and_resumes() {
    let document = dom::document().unwrap();
    let (wrap, track) = carousel_fixture(&document, "hover");
    let (engine, _listeners) = carousel::install(&document, &carousel_config("hover")).unwrap();

    let input = InputState::new();
    let frame = Frame {
        count: 1,
        delta_ms: 16.0,
        input: &input,
    };
    engine.borrow_mut().on_frame(&frame);
    assert_eq!(
        track.style().get_property_value("transform").unwrap(),
        "translateX(-0.7px)"
    );

    let card = track.children().item(1).unwrap();
    let title = card.first_element_child().unwrap();

    dispatch_mouse(&title, "mouseover", None);
    assert_eq!(engine.borrow().hover(), HoverState::Paused { card: 1 });
    assert!(card.class_list().contains("focused"));

    // Leaving the title for its own card is not an exit.
    dispatch_mouse(&title, "mouseout", Some(&card));
    assert_eq!(engine.borrow().hover(), HoverState::Paused { card: 1 });
    engine.borrow_mut().on_frame(&frame);
    assert_eq!(engine.borrow().scroll().offset(), -0.7);

    dispatch_mouse(&card, "mouseout", Some(&track));
    assert_eq!(engine.borrow().hover(), HoverState::Running);
    assert!(!card.class_list().contains("focused"));

    wrap.remove();
}
