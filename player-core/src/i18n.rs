//! Control labels in Swedish (default) and English.

use serde::{Deserialize, Serialize};

/// Label language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Swedish.
    #[default]
    Sv,
    /// English.
    En,
}

impl Locale {
    /// Pick a locale from a BCP 47 tag such as `"en-GB"`. Unknown tags fall
    /// back to Swedish.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("en") {
            Self::En
        } else {
            Self::Sv
        }
    }
}

/// Text shown on (or as tooltips of) the control bar widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    /// Play/pause button tooltip.
    pub play_pause: String,
    /// Seek-back button text.
    pub seek_back: String,
    /// Seek-forward button text.
    pub seek_forward: String,
    /// Mute button icon while sound is on.
    pub sound_on_icon: String,
    /// Mute button icon while muted.
    pub muted_icon: String,
    /// Mute button tooltip.
    pub mute: String,
    /// Volume slider tooltip.
    pub volume: String,
    /// Fullscreen button tooltip.
    pub fullscreen: String,
    /// Static label shown when there is nothing to control but fullscreen.
    pub embed_label: String,
}

impl Labels {
    /// Labels for `locale`; seek buttons show `seek_step_secs`.
    #[must_use]
    pub fn for_locale(locale: Locale, seek_step_secs: f64) -> Self {
        let step = format_seconds(seek_step_secs);
        match locale {
            Locale::Sv => Self {
                play_pause: "Spela/Pausa (mellanslag, K)".to_string(),
                seek_back: format!("⏪ {step}s"),
                seek_forward: format!("{step}s ⏩"),
                sound_on_icon: "🔊".to_string(),
                muted_icon: "🔇".to_string(),
                mute: "Ljud av/på (M)".to_string(),
                volume: "Volym".to_string(),
                fullscreen: "Helskärm (F)".to_string(),
                embed_label: "Inbäddad spelare".to_string(),
            },
            Locale::En => Self {
                play_pause: "Play/Pause (Space, K)".to_string(),
                seek_back: format!("⏪ {step}s"),
                seek_forward: format!("{step}s ⏩"),
                sound_on_icon: "🔊".to_string(),
                muted_icon: "🔇".to_string(),
                mute: "Mute/Unmute (M)".to_string(),
                volume: "Volume".to_string(),
                fullscreen: "Fullscreen (F)".to_string(),
                embed_label: "Embedded player".to_string(),
            },
        }
    }

    /// Mute button icon for the given muted flag.
    #[must_use]
    pub fn mute_icon(&self, muted: bool) -> &str {
        if muted {
            &self.muted_icon
        } else {
            &self.sound_on_icon
        }
    }
}

/// Whole seconds print without a fraction.
#[allow(clippy::float_cmp)]
fn format_seconds(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        format!("{seconds:.0}")
    } else {
        format!("{seconds}")
    }
}
