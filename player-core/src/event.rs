//! Keyboard input as seen by the dispatcher.

use serde::{Deserialize, Serialize};

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct KeyModifiers {
    /// Shift key pressed.
    pub shift: bool,
    /// Control key pressed.
    pub ctrl: bool,
    /// Alt/Option key pressed.
    pub alt: bool,
    /// Meta/Command key pressed.
    pub meta: bool,
}

impl KeyModifiers {
    /// Whether a modifier that turns the key into a browser/OS shortcut is held.
    ///
    /// Shift is not one of them: bindings match case-insensitively.
    #[must_use]
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// The element that held keyboard focus when a key was pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusTarget {
    /// Element tag name, as reported by the DOM (any case).
    pub tag_name: String,
    /// Whether the element is content-editable.
    pub content_editable: bool,
}

impl FocusTarget {
    /// Create a focus target for a plain element.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            content_editable: false,
        }
    }

    /// Create a focus target for a content-editable element.
    #[must_use]
    pub fn content_editable(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            content_editable: true,
        }
    }

    /// Whether typing into this element is expected to produce text.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.content_editable
            || self.tag_name.eq_ignore_ascii_case("input")
            || self.tag_name.eq_ignore_ascii_case("textarea")
    }
}

/// A key press delivered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInput {
    /// `KeyboardEvent.key` value, e.g. `"f"`, `" "`, `"ArrowLeft"`.
    pub key: String,
    /// Active modifier keys.
    pub modifiers: KeyModifiers,
    /// Focused element, if any.
    pub focus: Option<FocusTarget>,
}

impl KeyInput {
    /// Create a key press with no modifiers and no focused element.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: KeyModifiers::default(),
            focus: None,
        }
    }

    /// Set the active modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the focused element.
    #[must_use]
    pub fn with_focus(mut self, focus: FocusTarget) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Whether focus is on a text-entry element.
    #[must_use]
    pub fn has_editable_focus(&self) -> bool {
        self.focus.as_ref().is_some_and(FocusTarget::is_editable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_and_textarea_are_editable_in_any_case() {
        assert!(FocusTarget::new("INPUT").is_editable());
        assert!(FocusTarget::new("input").is_editable());
        assert!(FocusTarget::new("TEXTAREA").is_editable());
    }

    #[test]
    fn content_editable_div_is_editable() {
        assert!(FocusTarget::content_editable("DIV").is_editable());
        assert!(!FocusTarget::new("DIV").is_editable());
    }

    #[test]
    fn buttons_are_not_editable() {
        assert!(!FocusTarget::new("BUTTON").is_editable());
        assert!(!KeyInput::new("k")
            .with_focus(FocusTarget::new("BUTTON"))
            .has_editable_focus());
    }

    #[test]
    fn shift_is_not_a_command_modifier() {
        let shift = KeyModifiers {
            shift: true,
            ..KeyModifiers::default()
        };
        assert!(!shift.has_command_modifier());

        let ctrl = KeyModifiers {
            ctrl: true,
            ..KeyModifiers::default()
        };
        assert!(ctrl.has_command_modifier());
    }
}
