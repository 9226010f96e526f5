//! Control bar construction and widget event wiring.

use player_core::{ControlInput, ControlLayout, PlayerConfig, PlayerResult, Widget, WidgetSpec};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

use crate::dom::{dom_error, DomControlView};
use crate::PlayerHandle;

/// Minimal inline layout so the bar is usable without host CSS.
const BAR_STYLE: &str =
    "display:flex;flex-wrap:wrap;align-items:center;gap:8px;margin-top:8px;";

const LABEL_STYLE: &str = "opacity:0.8;font-size:0.9em;";

const SLIDER_STYLE: &str = "width:96px;";

/// Build the bar for `layout` and wire every widget to `player`.
///
/// Returns the detached bar element and its stateful widgets.
///
/// # Errors
///
/// Returns an error if an element cannot be created or configured.
pub fn build_bar(
    document: &Document,
    layout: &ControlLayout,
    config: &PlayerConfig,
    player: &PlayerHandle,
) -> PlayerResult<(Element, DomControlView)> {
    let bar = document.create_element("div").map_err(|e| dom_error(&e))?;
    bar.set_class_name(&config.bar_class);
    bar.set_attribute("style", BAR_STYLE)
        .map_err(|e| dom_error(&e))?;

    let mut view = DomControlView::default();

    for spec in &layout.widgets {
        let element = match spec.widget {
            Widget::Label => build_label(document, spec)?,
            Widget::Volume => {
                let slider = build_slider(document, spec, player)?;
                view.volume = Some(slider.clone());
                slider.unchecked_into::<Element>()
            }
            widget => {
                let button = build_button(document, spec, config, player)?;
                if widget == Widget::Mute {
                    view.mute = Some(button.clone().unchecked_into::<HtmlElement>());
                }
                button
            }
        };
        bar.append_child(&element).map_err(|e| dom_error(&e))?;
    }

    Ok((bar, view))
}

fn build_label(document: &Document, spec: &WidgetSpec) -> PlayerResult<Element> {
    let label = document.create_element("span").map_err(|e| dom_error(&e))?;
    label.set_text_content(Some(&spec.text));
    label
        .set_attribute("style", LABEL_STYLE)
        .map_err(|e| dom_error(&e))?;
    Ok(label)
}

fn build_button(
    document: &Document,
    spec: &WidgetSpec,
    config: &PlayerConfig,
    player: &PlayerHandle,
) -> PlayerResult<Element> {
    let button = document.create_element("button").map_err(|e| dom_error(&e))?;
    button.set_class_name(&config.button_class);
    button
        .set_attribute("type", "button")
        .map_err(|e| dom_error(&e))?;
    button
        .set_attribute("title", &spec.title)
        .map_err(|e| dom_error(&e))?;
    button.set_text_content(Some(&spec.text));

    if let Some(input) = ControlInput::from_click(spec.widget) {
        let player = PlayerHandle::clone(player);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Ok(player) = player.try_borrow() {
                player.handle_control(input);
            }
        });
        button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| dom_error(&e))?;
        // Page-lifetime listener.
        on_click.forget();
    }

    Ok(button)
}

fn build_slider(
    document: &Document,
    spec: &WidgetSpec,
    player: &PlayerHandle,
) -> PlayerResult<HtmlInputElement> {
    let slider: HtmlInputElement = document
        .create_element("input")
        .map_err(|e| dom_error(&e))?
        .unchecked_into();
    slider.set_type("range");
    slider.set_min("0");
    slider.set_max("1");
    slider.set_step("0.01");
    slider.set_title(&spec.title);
    slider
        .set_attribute("style", SLIDER_STYLE)
        .map_err(|e| dom_error(&e))?;

    let player = PlayerHandle::clone(player);
    let source = slider.clone();
    let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let volume = source.value_as_number();
        if let Ok(player) = player.try_borrow() {
            player.handle_control(ControlInput::Volume(volume));
        }
    });
    slider
        .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
        .map_err(|e| dom_error(&e))?;
    on_input.forget();

    Ok(slider)
}
