//! Period buttons above the charts

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event};

use crate::chart::ChartPeriod;
use crate::error::Result;

use super::dom_error;

const BUTTON_SELECTOR: &str = ".chart-btn";

/// Make each `.chart-btn` the active one of its group when clicked.
pub fn setup_chart_controls(document: &Document) -> Result<()> {
    let buttons = document
        .query_selector_all(BUTTON_SELECTOR)
        .map_err(|e| dom_error(&e))?;

    for i in 0..buttons.length() {
        let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| on_period_click(&event));
        button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| dom_error(&e))?;
        on_click.forget();
    }
    Ok(())
}

fn on_period_click(event: &Event) {
    let Some(button) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };

    if let Some(group) = button.parent_element() {
        if let Ok(siblings) = group.query_selector_all(BUTTON_SELECTOR) {
            for i in 0..siblings.length() {
                if let Some(sibling) = siblings.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    let _ = sibling.class_list().remove_1("active");
                }
            }
        }
    }
    let _ = button.class_list().add_1("active");

    // The endpoint takes no parameters, so selection does not refetch.
    match button.get_attribute("data-period").as_deref().map(str::parse::<ChartPeriod>) {
        Some(Ok(period)) => log::info!("Chart period selected: {period}"),
        Some(Err(e)) => log::warn!("{e}"),
        None => log::warn!("Chart button without data-period"),
    }
}
