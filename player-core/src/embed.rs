//! Embedded third-party players.
//!
//! A cross-origin frame cannot be controlled. The only thing done to it is
//! permitting fullscreen; its provider is detected to name the static label.

use serde::{Deserialize, Serialize};
use url::Url;

/// An opaque embedded frame.
pub trait EmbedFrame {
    /// The frame's `src` attribute.
    fn src(&self) -> Option<String>;

    /// Whether the frame is already permitted to go fullscreen.
    fn allows_fullscreen(&self) -> bool;

    /// Mark the frame as permitted to go fullscreen.
    fn permit_fullscreen(&self);
}

/// Video host behind an embedded frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedProvider {
    /// youtube.com, youtu.be, youtube-nocookie.com
    YouTube,
    /// vimeo.com
    Vimeo,
    /// loom.com
    Loom,
    /// reddit.com, redd.it
    Reddit,
    /// tiktok.com
    TikTok,
    /// Anything else.
    Custom,
}

impl EmbedProvider {
    /// Classify a frame `src` by host.
    ///
    /// Protocol-relative URLs are accepted; relative or unparsable ones are
    /// [`Custom`](Self::Custom).
    #[must_use]
    pub fn detect(src: &str) -> Self {
        let src = src.trim();
        let parsed = if src.starts_with("//") {
            Url::parse(&format!("https:{src}"))
        } else {
            Url::parse(src)
        };
        let Some(host) = parsed
            .ok()
            .and_then(|url| url.host_str().map(str::to_ascii_lowercase))
        else {
            return Self::Custom;
        };

        if host.contains("reddit.com") || host.contains("redd.it") {
            Self::Reddit
        } else if host.contains("tiktok.com") {
            Self::TikTok
        } else if host.contains("youtube.com")
            || host.contains("youtube-nocookie.com")
            || host.contains("youtu.be")
        {
            Self::YouTube
        } else if host.contains("vimeo.com") {
            Self::Vimeo
        } else if host.contains("loom.com") {
            Self::Loom
        } else {
            Self::Custom
        }
    }

    /// Human-readable provider name, `None` for custom embeds.
    #[must_use]
    pub fn display_name(self) -> Option<&'static str> {
        match self {
            Self::YouTube => Some("YouTube"),
            Self::Vimeo => Some("Vimeo"),
            Self::Loom => Some("Loom"),
            Self::Reddit => Some("Reddit"),
            Self::TikTok => Some("TikTok"),
            Self::Custom => None,
        }
    }
}

/// Permit fullscreen on `frame` (once) and report its provider.
pub fn prepare_embed<E: EmbedFrame>(frame: &E) -> EmbedProvider {
    if !frame.allows_fullscreen() {
        frame.permit_fullscreen();
    }
    let provider = frame
        .src()
        .map_or(EmbedProvider::Custom, |src| EmbedProvider::detect(&src));
    tracing::debug!("Prepared {:?} embed for fullscreen", provider);
    provider
}
