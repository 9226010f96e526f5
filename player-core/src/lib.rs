//! # Saorsa Player Core
//!
//! Control-state synchronization for an embedded media element: a custom
//! control bar, keyboard shortcuts and a cross-browser fullscreen toggle.
//! Browser-independent; every browser seam is a trait implemented by
//! `player-app`.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     player-core                      │
//! ├──────────────────────────────────────────────────────┤
//! │  Keyboard Dispatcher  │  Control Surface             │
//! │  - editable guard     │  - layout (media / embed)    │
//! │  - key table          │  - one-way write-back        │
//! ├──────────────────────────────────────────────────────┤
//! │  Media State Adapter  │  Fullscreen Controller       │
//! │  - clamp & fallback   │  - vendor resolution table   │
//! └──────────────────────────────────────────────────────┘
//!        click / keypress → Player → adapter / fullscreen
//!                                  → widget re-sync
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod capability;
pub mod config;
pub mod controls;
pub mod embed;
pub mod error;
pub mod event;
pub mod fullscreen;
pub mod i18n;
pub mod keyboard;
pub mod media;
pub mod player;

pub use capability::{
    detect_content, FullscreenBackend, FullscreenCapability, HostContainer, HostScan, VendorApi,
    VendorPrefix, FULLSCREEN_APIS,
};
pub use config::PlayerConfig;
pub use controls::{
    plan_mount, ControlInput, ControlLayout, ControlSurface, ControlView, SyncSource, Widget,
    WidgetSpec,
};
pub use embed::{prepare_embed, EmbedFrame, EmbedProvider};
pub use error::{PlayerError, PlayerResult};
pub use event::{FocusTarget, KeyInput, KeyModifiers};
pub use fullscreen::{FullscreenAction, FullscreenController};
pub use i18n::{Labels, Locale};
pub use keyboard::{Action, KeyOutcome, KeyboardDispatcher};
pub use media::{MediaAdapter, MediaElement, MediaSnapshot};
pub use player::Player;

/// Player core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
