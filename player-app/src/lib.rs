//! # Saorsa Player WASM Application
//!
//! Binds `player-core` to the DOM: finds the marked container, inserts the
//! control bar after it and registers the global keyboard shortcuts.
//!
//! ## Usage
//!
//! Build for WASM:
//! ```bash
//! wasm-pack build --target web player-app
//! ```
//!
//! Mark the container and load the module. With the default `autostart`
//! feature the player mounts itself once the DOM is ready:
//! ```html
//! <div data-player>
//!   <video src="clip.mp4"></video>
//! </div>
//! <script type="module">
//!   import init from './pkg/player_app.js';
//!   await init();
//! </script>
//! ```
//!
//! Or mount explicitly with a configuration:
//! ```javascript
//! import init, { initPlayer } from './pkg/player_app.js';
//!
//! await init();
//! const player = initPlayer(JSON.stringify({ container_selector: '#watch', locale: 'en' }));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bar;
pub mod dom;
pub mod listener;

use std::{cell::RefCell, rc::Rc};

use player_core::{
    plan_mount, prepare_embed, KeyInput, Locale, Player, PlayerConfig, PlayerError, PlayerResult,
};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom::{dom_error, DomFullscreen, DomHost, DomMedia};

/// A player bound to browser elements.
pub type WebPlayer = Player<DomMedia, DomFullscreen>;

/// Shared handle used by every event listener of one player.
pub type PlayerHandle = Rc<RefCell<WebPlayer>>;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_error_panic_hook::set_once();
    tracing::info!("Saorsa Player WASM initialized");

    #[cfg(feature = "autostart")]
    autostart();
}

#[cfg(feature = "autostart")]
fn autostart() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let doc = document.clone();
    let result = listener::on_dom_ready(&document, move || {
        if let Err(e) = mount(&doc, PlayerConfig::default()) {
            tracing::warn!("Player autostart failed: {}", e);
        }
    });
    if let Err(e) = result {
        tracing::warn!("Player autostart failed: {}", e);
    }
}

/// Mount a player on the first element matching `config.container_selector`.
///
/// Returns `None` when the container is missing or already has a bar.
///
/// # Errors
///
/// Returns an error if the bar cannot be built or inserted.
pub fn mount(document: &Document, mut config: PlayerConfig) -> PlayerResult<Option<PlayerHandle>> {
    let Some(container) = document
        .query_selector(&config.container_selector)
        .map_err(|e| dom_error(&e))?
    else {
        tracing::debug!("No container matches {:?}", config.container_selector);
        return Ok(None);
    };

    let host = DomHost::new(container, &config.bar_class);
    let Some(scan) = plan_mount(&host) else {
        return Ok(None);
    };

    if config.locale.is_none() {
        config.locale = Some(document_locale(document));
    }

    let has_media = scan.has_media();
    let fullscreen = DomFullscreen::new(document.clone());
    let mut player = Player::new(scan.media, fullscreen, host.container().clone(), &config);
    if let Some(frame) = &scan.embed {
        player = player.with_embed(prepare_embed(frame));
    }

    let handle: PlayerHandle = Rc::new(RefCell::new(player));
    let layout = handle.borrow().layout();
    let (bar, view) = bar::build_bar(document, &layout, &config, &handle)?;
    host.container()
        .insert_adjacent_element("afterend", &bar)
        .map_err(|e| dom_error(&e))?;
    handle.borrow_mut().bind_view(Box::new(view));
    listener::register_keyboard(document, &handle)?;

    tracing::info!(
        "Player mounted on {:?} ({})",
        config.container_selector,
        if has_media { "media" } else { "fullscreen only" }
    );
    Ok(Some(handle))
}

/// Label locale from the root element's `lang` attribute.
fn document_locale(document: &Document) -> Locale {
    document
        .document_element()
        .and_then(|root| root.get_attribute("lang"))
        .map_or_else(Locale::default, |lang| Locale::from_tag(&lang))
}

fn js_error(err: &PlayerError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Mount a player, optionally with a JSON configuration.
///
/// Returns `undefined` when the container is missing or already mounted.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the bar cannot be
/// inserted.
#[wasm_bindgen(js_name = initPlayer)]
#[allow(clippy::needless_pass_by_value)]
pub fn init_player(config_json: Option<String>) -> Result<Option<PlayerApp>, JsValue> {
    let config = match config_json.as_deref() {
        Some(json) => PlayerConfig::from_json(json).map_err(|e| js_error(&e))?,
        None => PlayerConfig::default(),
    };
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document object"))?;

    let handle = mount(&document, config).map_err(|e| js_error(&e))?;
    Ok(handle.map(|player| PlayerApp { player }))
}

/// Script access to a mounted player.
#[wasm_bindgen]
pub struct PlayerApp {
    player: PlayerHandle,
}

#[wasm_bindgen]
impl PlayerApp {
    /// Whether the container holds a controllable media element.
    #[wasm_bindgen(js_name = hasMedia)]
    #[must_use]
    pub fn has_media(&self) -> bool {
        self.player.borrow().has_media()
    }

    /// Whether the document is fullscreen.
    #[wasm_bindgen(js_name = isFullscreen)]
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.player.borrow().is_fullscreen()
    }

    /// Toggle fullscreen on the container.
    #[wasm_bindgen(js_name = toggleFullscreen)]
    pub fn toggle_fullscreen(&self) {
        self.player.borrow().toggle_fullscreen();
    }

    /// Feed a key as if pressed with nothing focused. Returns whether the
    /// browser default would be prevented.
    #[wasm_bindgen(js_name = pressKey)]
    pub fn press_key(&self, key: &str) -> bool {
        self.player
            .borrow()
            .handle_key(&KeyInput::new(key))
            .prevents_default()
    }

    /// Current media state as JSON, or `null` without a media element.
    #[wasm_bindgen(js_name = getStateJson)]
    #[must_use]
    pub fn get_state_json(&self) -> Option<String> {
        self.player
            .borrow()
            .snapshot()
            .and_then(|snapshot| serde_json::to_string(&snapshot).ok())
    }
}
