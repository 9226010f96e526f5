//! `player-core` traits implemented over `web-sys`.

use js_sys::{Function, Reflect};
use player_core::{
    ControlView, EmbedFrame, FocusTarget, FullscreenBackend, HostContainer, MediaElement,
    PlayerError,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlIFrameElement, HtmlInputElement, HtmlMediaElement,
};

/// Selector for controllable media inside a host container.
const MEDIA_SELECTOR: &str = "video, audio";

/// Selector for embedded frames inside a host container.
const EMBED_SELECTOR: &str = "iframe";

/// Convert a thrown JS value into a player error.
pub(crate) fn dom_error(err: &JsValue) -> PlayerError {
    PlayerError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// A native `<video>` or `<audio>` element.
#[derive(Debug, Clone)]
pub struct DomMedia(HtmlMediaElement);

impl MediaElement for DomMedia {
    fn paused(&self) -> bool {
        self.0.paused()
    }

    fn play(&self) {
        // The returned promise is not observed; autoplay rejections surface
        // in the console only.
        if let Err(e) = self.0.play() {
            tracing::warn!("play() threw: {:?}", e);
        }
    }

    fn pause(&self) {
        if let Err(e) = self.0.pause() {
            tracing::warn!("pause() threw: {:?}", e);
        }
    }

    fn muted(&self) -> bool {
        self.0.muted()
    }

    fn set_muted(&self, muted: bool) {
        self.0.set_muted(muted);
    }

    fn volume(&self) -> f64 {
        self.0.volume()
    }

    fn set_volume(&self, volume: f64) {
        self.0.set_volume(volume);
    }

    fn current_time(&self) -> f64 {
        self.0.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.0.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.0.duration()
    }
}

/// An `<iframe>` holding a third-party player.
#[derive(Debug, Clone)]
pub struct DomEmbed(HtmlIFrameElement);

impl EmbedFrame for DomEmbed {
    fn src(&self) -> Option<String> {
        let src = self.0.src();
        (!src.is_empty()).then_some(src)
    }

    fn allows_fullscreen(&self) -> bool {
        self.0.allow_fullscreen()
    }

    fn permit_fullscreen(&self) {
        self.0.set_allow_fullscreen(true);
        let allow = self.0.get_attribute("allow").unwrap_or_default();
        if !allow.split(';').any(|policy| policy.trim() == "fullscreen") {
            let allow = if allow.trim().is_empty() {
                "fullscreen".to_string()
            } else {
                format!("{}; fullscreen", allow.trim_end_matches([';', ' ']))
            };
            if let Err(e) = self.0.set_attribute("allow", &allow) {
                tracing::warn!("Failed to set iframe allow policy: {:?}", e);
            }
        }
    }
}

/// Fullscreen members looked up by name, covering vendor-prefixed variants
/// that `web-sys` does not bind.
#[derive(Debug, Clone)]
pub struct DomFullscreen {
    document: Document,
}

impl DomFullscreen {
    /// Resolve fullscreen members against `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn method(object: &JsValue, name: &str) -> Option<Function> {
        Reflect::get(object, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    }

    fn call(object: &JsValue, name: &str) {
        let Some(function) = Self::method(object, name) else {
            return;
        };
        // May return a promise; the browser resolves or rejects it on its own.
        if let Err(e) = function.call0(object) {
            tracing::warn!("{} threw: {:?}", name, e);
        }
    }
}

impl FullscreenBackend for DomFullscreen {
    type Target = Element;

    fn has_request(&self, target: &Element, method: &str) -> bool {
        Self::method(target, method).is_some()
    }

    fn invoke_request(&self, target: &Element, method: &str) {
        Self::call(target, method);
    }

    fn has_exit(&self, method: &str) -> bool {
        Self::method(&self.document, method).is_some()
    }

    fn invoke_exit(&self, method: &str) {
        Self::call(&self.document, method);
    }

    fn has_fullscreen_element(&self, property: &str) -> bool {
        Reflect::get(&self.document, &JsValue::from_str(property))
            .is_ok_and(|value| !value.is_null() && !value.is_undefined())
    }
}

/// The marked container a bar is attached to.
#[derive(Debug, Clone)]
pub struct DomHost {
    container: Element,
    bar_class: String,
}

impl DomHost {
    /// Wrap a container; bars are recognised by `bar_class`.
    #[must_use]
    pub fn new(container: Element, bar_class: &str) -> Self {
        Self {
            container,
            bar_class: bar_class.to_string(),
        }
    }

    /// Get the container element.
    #[must_use]
    pub fn container(&self) -> &Element {
        &self.container
    }
}

impl HostContainer for DomHost {
    type Media = DomMedia;
    type Embed = DomEmbed;

    fn find_media(&self) -> Option<DomMedia> {
        self.container
            .query_selector(MEDIA_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok())
            .map(DomMedia)
    }

    fn find_embed(&self) -> Option<DomEmbed> {
        self.container
            .query_selector(EMBED_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlIFrameElement>().ok())
            .map(DomEmbed)
    }

    fn has_control_bar(&self) -> bool {
        let Some(parent) = self.container.parent_element() else {
            return false;
        };
        let mut sibling = parent.first_element_child();
        while let Some(element) = sibling {
            if element != self.container && element.class_list().contains(&self.bar_class) {
                return true;
            }
            sibling = element.next_element_sibling();
        }
        false
    }
}

/// The stateful widgets of a rendered bar. Absent when the bar has no media
/// controls.
#[derive(Debug, Clone, Default)]
pub struct DomControlView {
    pub(crate) mute: Option<HtmlElement>,
    pub(crate) volume: Option<HtmlInputElement>,
}

impl ControlView for DomControlView {
    fn set_mute_icon(&self, icon: &str) {
        if let Some(button) = &self.mute {
            button.set_text_content(Some(icon));
        }
    }

    fn set_volume_value(&self, volume: f64) {
        if let Some(slider) = &self.volume {
            slider.set_value(&volume.to_string());
        }
    }
}

/// The element holding keyboard focus, if any.
#[must_use]
pub fn focus_target(document: &Document) -> Option<FocusTarget> {
    let element = document.active_element()?;
    let content_editable = element
        .dyn_ref::<HtmlElement>()
        .is_some_and(HtmlElement::is_content_editable);
    Some(FocusTarget {
        tag_name: element.tag_name(),
        content_editable,
    })
}
