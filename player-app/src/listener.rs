//! Page-lifetime event listeners: the global key handler and the
//! initialization trigger.

use player_core::{KeyInput, KeyModifiers, PlayerResult};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, KeyboardEvent};

use crate::dom::{dom_error, focus_target};
use crate::PlayerHandle;

/// Translate a DOM key event for the dispatcher.
#[must_use]
pub fn key_input(document: &Document, event: &KeyboardEvent) -> KeyInput {
    let modifiers = KeyModifiers {
        shift: event.shift_key(),
        ctrl: event.ctrl_key(),
        alt: event.alt_key(),
        meta: event.meta_key(),
    };
    let input = KeyInput::new(event.key()).with_modifiers(modifiers);
    match focus_target(document) {
        Some(focus) => input.with_focus(focus),
        None => input,
    }
}

/// Register the `keydown` handler for `player` on the document.
///
/// Never deregistered.
///
/// # Errors
///
/// Returns an error if the listener cannot be added.
pub fn register_keyboard(document: &Document, player: &PlayerHandle) -> PlayerResult<()> {
    let player = PlayerHandle::clone(player);
    let doc = document.clone();
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let input = key_input(&doc, &event);
        let Ok(player) = player.try_borrow() else {
            return;
        };
        if player.handle_key(&input).prevents_default() {
            event.prevent_default();
        }
    });
    document
        .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
        .map_err(|e| dom_error(&e))?;
    on_key.forget();
    Ok(())
}

/// Run `ready` once the document structure has loaded.
///
/// Runs immediately if parsing has already finished.
///
/// # Errors
///
/// Returns an error if the `DOMContentLoaded` listener cannot be added.
pub fn on_dom_ready(document: &Document, ready: impl FnOnce() + 'static) -> PlayerResult<()> {
    if document.ready_state() != "loading" {
        ready();
        return Ok(());
    }
    let mut ready = Some(ready);
    let on_ready = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Some(ready) = ready.take() {
            ready();
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| dom_error(&e))?;
    on_ready.forget();
    Ok(())
}
