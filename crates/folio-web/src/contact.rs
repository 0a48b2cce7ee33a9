//! Contact form and country-code selector glue. UI only; nothing is sent.

use folio_core::{ContactForm, FxConfig, digits_only, matches_search, sort_by_dial_code};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlOptionElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use crate::dom;
use crate::error::WebError;

/// Wires phone filtering and submit handling.
pub fn install_form(document: &Document, config: &FxConfig) -> Result<Vec<EventListener>, WebError> {
    let ids = &config.elements;
    let form = dom::element_by_id::<HtmlFormElement>(document, &ids.contact_form)?;
    let name = dom::element_by_id::<HtmlInputElement>(document, &ids.name)?;
    let email = dom::element_by_id::<HtmlInputElement>(document, &ids.email)?;
    let phone = dom::element_by_id::<HtmlInputElement>(document, &ids.phone)?;
    let message = dom::element_by_id::<HtmlTextAreaElement>(document, &ids.message)?;
    let status = dom::element_by_id::<HtmlElement>(document, &ids.form_status)?;
    let code = dom::optional_element::<HtmlSelectElement>(document, &ids.country_code);

    let default_code = config.form.default_country_code.clone();
    if let Some(code) = &code {
        code.set_value(&default_code);
    }

    let mut listeners = Vec::new();

    let phone_for_input = phone.clone();
    listeners.push(EventListener::new(&phone, "input", move |_event| {
        let value = phone_for_input.value();
        let digits = digits_only(&value);
        if digits != value {
            phone_for_input.set_value(&digits);
        }
    }));

    let form_config = config.form.clone();
    let form_for_submit = form.clone();
    listeners.push(EventListener::new(&form, "submit", move |event| {
        event.prevent_default();

        let fields = ContactForm {
            name: name.value(),
            email: email.value(),
            phone: phone.value(),
            message: message.value(),
        };
        let outcome = fields.submit();
        status.set_text_content(Some(outcome.message(&form_config)));
        dom::set_style(&status, "color", outcome.color(&form_config));
        tracing::debug!(?outcome, "Contact form submitted");

        if outcome.resets_form() {
            form_for_submit.reset();
            if let Some(code) = &code {
                code.set_value(&form_config.default_country_code);
            }
        }
    }));

    tracing::info!("Contact form installed");
    Ok(listeners)
}

/// Sorts the dial codes and wires the search box.
pub fn install_country_select(
    document: &Document,
    config: &FxConfig,
) -> Result<Vec<EventListener>, WebError> {
    let select = dom::element_by_id::<HtmlSelectElement>(document, &config.elements.country_code)?;

    let mut options = options_of(&select)
        .into_iter()
        .map(|option| {
            let value = option.value();
            (option, value)
        })
        .collect::<Vec<_>>();
    sort_by_dial_code(&mut options, |(_, value)| value.as_str());

    select.set_inner_html("");
    for (option, _) in &options {
        select.append_child(option)?;
    }
    select.set_value(&config.form.default_country_code);
    tracing::info!(count = options.len(), "Country codes sorted");

    let mut listeners = Vec::new();
    if let Some(search) =
        dom::optional_element::<HtmlInputElement>(document, &config.elements.country_search)
    {
        let search_for_input = search.clone();
        listeners.push(EventListener::new(&search, "input", move |_event| {
            let term = search_for_input.value();
            for option in options_of(&select) {
                let label = option.text();
                let display = if matches_search(&label, &term) {
                    "block"
                } else {
                    "none"
                };
                dom::set_style(&option, "display", display);
            }
            select.set_selected_index(0);
        }));
    }

    Ok(listeners)
}

fn options_of(select: &HtmlSelectElement) -> Vec<HtmlOptionElement> {
    let options = select.options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
        .collect()
}
