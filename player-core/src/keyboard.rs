//! # Keyboard Dispatcher
//!
//! Maps key presses to player actions. One dispatcher lives for the whole
//! page; it is always armed and has a single guard: while a text-entry
//! element has focus every key passes through untouched.
//!
//! | Key        | Action                     | Needs media |
//! |------------|----------------------------|-------------|
//! | f          | toggle fullscreen          | no          |
//! | space, k   | toggle play/pause          | yes         |
//! | m          | toggle mute                | yes         |
//! | ArrowLeft  | seek back one step         | yes         |
//! | ArrowRight | seek forward one step      | yes         |
//! | ArrowUp    | volume up one step         | yes         |
//! | ArrowDown  | volume down one step       | yes         |

use serde::{Deserialize, Serialize};

use crate::config::PlayerConfig;
use crate::event::KeyInput;

/// Something a key press or a control click can ask the player to do.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "amount", rename_all = "snake_case")]
pub enum Action {
    /// Toggle fullscreen on the container.
    ToggleFullscreen,
    /// Toggle play/pause.
    TogglePlay,
    /// Toggle mute.
    ToggleMute,
    /// Seek by the given number of seconds.
    Seek(f64),
    /// Step the volume by the given amount.
    AdjustVolume(f64),
}

impl Action {
    /// Whether the action acts on the media element.
    #[must_use]
    pub fn requires_media(&self) -> bool {
        !matches!(self, Self::ToggleFullscreen)
    }
}

/// Result of dispatching a key press.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "action", rename_all = "snake_case")]
pub enum KeyOutcome {
    /// Focus is on an editable element; the key was not looked at.
    Suppressed,
    /// The key (or modifier combination) has no binding.
    Unbound,
    /// A media key was pressed but no media element is bound.
    NoMedia,
    /// The key was mapped to an action.
    Handled(Action),
}

impl KeyOutcome {
    /// Whether the browser default for the key must be prevented.
    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    /// The action to perform, if any.
    #[must_use]
    pub fn action(&self) -> Option<Action> {
        match self {
            Self::Handled(action) => Some(*action),
            _ => None,
        }
    }
}

/// Key-to-action table with configurable step sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardDispatcher {
    seek_step_secs: f64,
    volume_step: f64,
}

impl Default for KeyboardDispatcher {
    fn default() -> Self {
        Self::new(&PlayerConfig::default())
    }
}

impl KeyboardDispatcher {
    /// Create a dispatcher using the step sizes from `config`.
    #[must_use]
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            seek_step_secs: config.seek_step_secs,
            volume_step: config.volume_step,
        }
    }

    /// Look up the binding for a `KeyboardEvent.key` value.
    #[must_use]
    pub fn binding(&self, key: &str) -> Option<Action> {
        match key.to_ascii_lowercase().as_str() {
            "f" => Some(Action::ToggleFullscreen),
            " " | "spacebar" | "k" => Some(Action::TogglePlay),
            "m" => Some(Action::ToggleMute),
            "arrowleft" => Some(Action::Seek(-self.seek_step_secs)),
            "arrowright" => Some(Action::Seek(self.seek_step_secs)),
            "arrowup" => Some(Action::AdjustVolume(self.volume_step)),
            "arrowdown" => Some(Action::AdjustVolume(-self.volume_step)),
            _ => None,
        }
    }

    /// Decide what a key press means.
    ///
    /// The editable-focus guard runs before any key matching. Media keys
    /// without a bound media element fall through to the browser default
    /// (e.g. page scroll); the fullscreen key never does.
    #[must_use]
    pub fn dispatch(&self, input: &KeyInput, has_media: bool) -> KeyOutcome {
        if input.has_editable_focus() {
            return KeyOutcome::Suppressed;
        }
        if input.modifiers.has_command_modifier() {
            return KeyOutcome::Unbound;
        }
        match self.binding(&input.key) {
            None => KeyOutcome::Unbound,
            Some(action) if action.requires_media() && !has_media => KeyOutcome::NoMedia,
            Some(action) => KeyOutcome::Handled(action),
        }
    }
}
