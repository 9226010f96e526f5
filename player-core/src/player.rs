//! Player state: one media adapter, one fullscreen target, one control
//! surface and the keyboard dispatcher, wired together.

use crate::capability::FullscreenBackend;
use crate::config::PlayerConfig;
use crate::controls::{ControlInput, ControlLayout, ControlSurface, ControlView, SyncSource};
use crate::embed::EmbedProvider;
use crate::event::KeyInput;
use crate::fullscreen::{FullscreenAction, FullscreenController};
use crate::i18n::Labels;
use crate::keyboard::{Action, KeyOutcome, KeyboardDispatcher};
use crate::media::{MediaAdapter, MediaElement, MediaSnapshot};

/// The control-state synchronization engine for one host container.
///
/// All handlers take `&self`; the only mutation through `&mut self` is
/// attaching the rendered view.
pub struct Player<M, B: FullscreenBackend> {
    media: MediaAdapter<M>,
    fullscreen: FullscreenController<B>,
    target: B::Target,
    keyboard: KeyboardDispatcher,
    surface: ControlSurface,
    embed: Option<EmbedProvider>,
    seek_step_secs: f64,
}

impl<M: MediaElement, B: FullscreenBackend> Player<M, B> {
    /// Create a player for a container.
    ///
    /// `target` is the element toggled into fullscreen. Labels use
    /// `config.locale`, falling back to the default locale.
    #[must_use]
    pub fn new(media: Option<M>, backend: B, target: B::Target, config: &PlayerConfig) -> Self {
        let labels = Labels::for_locale(config.locale.unwrap_or_default(), config.seek_step_secs);
        Self {
            media: MediaAdapter::new(media),
            fullscreen: FullscreenController::new(backend),
            target,
            keyboard: KeyboardDispatcher::new(config),
            surface: ControlSurface::new(labels),
            embed: None,
            seek_step_secs: config.seek_step_secs,
        }
    }

    /// Record the provider of an embedded frame in the container.
    #[must_use]
    pub fn with_embed(mut self, provider: EmbedProvider) -> Self {
        self.embed = Some(provider);
        self
    }

    /// Get the media adapter.
    #[must_use]
    pub fn media(&self) -> &MediaAdapter<M> {
        &self.media
    }

    /// Whether a media element is bound.
    #[must_use]
    pub fn has_media(&self) -> bool {
        self.media.is_bound()
    }

    /// Current media state, if a media element is bound.
    #[must_use]
    pub fn snapshot(&self) -> Option<MediaSnapshot> {
        self.media.snapshot()
    }

    /// Get the fullscreen controller.
    #[must_use]
    pub fn fullscreen(&self) -> &FullscreenController<B> {
        &self.fullscreen
    }

    /// Get the fullscreen target.
    #[must_use]
    pub fn target(&self) -> &B::Target {
        &self.target
    }

    /// Embed provider, if an embedded frame was recorded.
    #[must_use]
    pub fn embed(&self) -> Option<EmbedProvider> {
        self.embed
    }

    /// Widgets to render for this container.
    #[must_use]
    pub fn layout(&self) -> ControlLayout {
        ControlLayout::build(
            self.media.snapshot().as_ref(),
            self.embed,
            self.surface.labels(),
        )
    }

    /// Attach the rendered bar and paint the current media state on it.
    pub fn bind_view(&mut self, view: Box<dyn ControlView>) {
        self.surface.bind(view);
        if let Some(snapshot) = self.media.snapshot() {
            self.surface.sync(&snapshot, SyncSource::Initial);
        }
    }

    /// Whether the document is currently fullscreen.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_active()
    }

    /// Toggle fullscreen on the container.
    pub fn toggle_fullscreen(&self) -> FullscreenAction {
        self.fullscreen.toggle(&self.target)
    }

    /// Handle a global key press.
    ///
    /// The caller must prevent the browser default exactly when
    /// [`KeyOutcome::prevents_default`] is true.
    pub fn handle_key(&self, input: &KeyInput) -> KeyOutcome {
        let outcome = self.keyboard.dispatch(input, self.media.is_bound());
        if let Some(action) = outcome.action() {
            tracing::debug!("Key {:?} -> {:?}", input.key, action);
            self.perform(action);
        }
        outcome
    }

    /// Handle an input event from one of the rendered widgets.
    pub fn handle_control(&self, input: ControlInput) {
        tracing::debug!("Control input: {:?}", input);
        let source = SyncSource::Widget(input.widget());
        match input {
            ControlInput::PlayPause => {
                self.media.toggle_play();
            }
            ControlInput::SeekBack => {
                self.media.seek(-self.seek_step_secs);
            }
            ControlInput::SeekForward => {
                self.media.seek(self.seek_step_secs);
            }
            ControlInput::ToggleMute => {
                if self.media.toggle_mute().is_some() {
                    self.sync(source);
                }
            }
            ControlInput::Volume(volume) => {
                if self.media.set_volume(volume).is_some() {
                    self.sync(source);
                }
            }
            ControlInput::Fullscreen => {
                self.toggle_fullscreen();
            }
        }
    }

    fn perform(&self, action: Action) {
        match action {
            Action::ToggleFullscreen => {
                self.toggle_fullscreen();
            }
            Action::TogglePlay => {
                self.media.toggle_play();
            }
            Action::Seek(delta) => {
                self.media.seek(delta);
            }
            Action::ToggleMute => {
                if self.media.toggle_mute().is_some() {
                    self.sync(SyncSource::Keyboard);
                }
            }
            Action::AdjustVolume(delta) => {
                if self.media.adjust_volume(delta).is_some() {
                    self.sync(SyncSource::Keyboard);
                }
            }
        }
    }

    fn sync(&self, source: SyncSource) {
        if let Some(snapshot) = self.media.snapshot() {
            self.surface.sync(&snapshot, source);
        }
    }
}

impl<M, B: FullscreenBackend> std::fmt::Debug for Player<M, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("surface", &self.surface)
            .field("embed", &self.embed)
            .field("seek_step_secs", &self.seek_step_secs)
            .finish_non_exhaustive()
    }
}

