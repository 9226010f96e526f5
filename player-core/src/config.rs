//! Player configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlayerError, PlayerResult};
use crate::i18n::Locale;

/// Configuration for a player instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// CSS selector of the host container.
    pub container_selector: String,
    /// Class of the produced control bar; also marks an existing bar.
    pub bar_class: String,
    /// Host style-system class applied to every button.
    pub button_class: String,
    /// Seek delta in seconds for the seek keys and buttons.
    pub seek_step_secs: f64,
    /// Volume delta for the volume keys.
    pub volume_step: f64,
    /// Label language. `None` detects it from the document.
    pub locale: Option<Locale>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            container_selector: "[data-player]".to_string(),
            bar_class: "player-controls".to_string(),
            button_class: "btn".to_string(),
            seek_step_secs: 10.0,
            volume_step: 0.05,
            locale: None,
        }
    }
}

impl PlayerConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> PlayerResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> PlayerResult<()> {
        if self.container_selector.trim().is_empty() {
            return Err(PlayerError::InvalidConfig(
                "container_selector must not be empty".to_string(),
            ));
        }
        if self.bar_class.trim().is_empty() || self.bar_class.contains(char::is_whitespace) {
            return Err(PlayerError::InvalidConfig(
                "bar_class must be a single class name".to_string(),
            ));
        }
        if self.button_class.trim().is_empty() {
            return Err(PlayerError::InvalidConfig(
                "button_class must not be empty".to_string(),
            ));
        }
        if !(self.seek_step_secs.is_finite() && self.seek_step_secs > 0.0) {
            return Err(PlayerError::InvalidConfig(format!(
                "seek_step_secs must be positive, got {}",
                self.seek_step_secs
            )));
        }
        if !(self.volume_step.is_finite() && self.volume_step > 0.0 && self.volume_step <= 1.0) {
            return Err(PlayerError::InvalidConfig(format!(
                "volume_step must be in (0, 1], got {}",
                self.volume_step
            )));
        }
        Ok(())
    }
}
