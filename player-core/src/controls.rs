//! # Control Surface
//!
//! The widgets of a control bar and how their displayed state follows the
//! media element. Data flows one way: widget inputs write to the media
//! adapter, and only mutations coming from elsewhere (keyboard, other
//! widgets) are written back to a widget's display. The volume slider is
//! never written from its own input event.

use serde::{Deserialize, Serialize};

use crate::capability::{detect_content, HostContainer, HostScan};
use crate::embed::EmbedProvider;
use crate::i18n::Labels;
use crate::media::MediaSnapshot;

/// Fullscreen button text.
pub const FULLSCREEN_ICON: &str = "⛶";

/// Play/pause button text.
pub const PLAY_PAUSE_ICON: &str = "⏯";

/// A control bar widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    /// Play/pause button.
    PlayPause,
    /// Seek-back button.
    SeekBack,
    /// Seek-forward button.
    SeekForward,
    /// Mute toggle button; its icon is stateful.
    Mute,
    /// Volume range slider; its value is stateful.
    Volume,
    /// Fullscreen toggle button.
    Fullscreen,
    /// Static, non-interactive text.
    Label,
}

impl Widget {
    /// Whether the widget is a button.
    #[must_use]
    pub fn is_button(self) -> bool {
        !matches!(self, Self::Volume | Self::Label)
    }
}

/// A widget to render, with its text and tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSpec {
    /// Which widget.
    pub widget: Widget,
    /// Visible text (empty for the slider).
    pub text: String,
    /// Tooltip.
    pub title: String,
}

impl WidgetSpec {
    fn new(widget: Widget, text: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            widget,
            text: text.into(),
            title: title.into(),
        }
    }
}

/// The ordered widgets of one control bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlLayout {
    /// Widgets in display order.
    pub widgets: Vec<WidgetSpec>,
}

impl ControlLayout {
    /// Lay out a bar.
    ///
    /// With a media element: play/pause, seek back/forward, mute, volume and
    /// fullscreen. Without one: a static label (naming the embed provider
    /// when known) and fullscreen only. Media controls are omitted, not
    /// disabled.
    #[must_use]
    pub fn build(media: Option<&MediaSnapshot>, embed: Option<EmbedProvider>, labels: &Labels) -> Self {
        let fullscreen = WidgetSpec::new(Widget::Fullscreen, FULLSCREEN_ICON, &labels.fullscreen);

        let widgets = match media {
            Some(snapshot) => vec![
                WidgetSpec::new(Widget::PlayPause, PLAY_PAUSE_ICON, &labels.play_pause),
                WidgetSpec::new(Widget::SeekBack, &labels.seek_back, &labels.seek_back),
                WidgetSpec::new(Widget::SeekForward, &labels.seek_forward, &labels.seek_forward),
                WidgetSpec::new(Widget::Mute, labels.mute_icon(snapshot.muted), &labels.mute),
                WidgetSpec::new(Widget::Volume, "", &labels.volume),
                fullscreen,
            ],
            None => {
                let text = embed
                    .and_then(EmbedProvider::display_name)
                    .unwrap_or(labels.embed_label.as_str());
                vec![WidgetSpec::new(Widget::Label, text, text), fullscreen]
            }
        };

        Self { widgets }
    }

    /// Whether the layout contains `widget`.
    #[must_use]
    pub fn contains(&self, widget: Widget) -> bool {
        self.widgets.iter().any(|spec| spec.widget == widget)
    }

    /// Widget kinds in display order.
    pub fn kinds(&self) -> impl Iterator<Item = Widget> + '_ {
        self.widgets.iter().map(|spec| spec.widget)
    }
}

/// An input event coming from a rendered widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "input", content = "value", rename_all = "snake_case")]
pub enum ControlInput {
    /// Play/pause clicked.
    PlayPause,
    /// Seek-back clicked.
    SeekBack,
    /// Seek-forward clicked.
    SeekForward,
    /// Mute clicked.
    ToggleMute,
    /// Volume slider moved to the given value.
    Volume(f64),
    /// Fullscreen clicked.
    Fullscreen,
}

impl ControlInput {
    /// Input produced by clicking `widget`. The slider and the label have
    /// no click input.
    #[must_use]
    pub fn from_click(widget: Widget) -> Option<Self> {
        match widget {
            Widget::PlayPause => Some(Self::PlayPause),
            Widget::SeekBack => Some(Self::SeekBack),
            Widget::SeekForward => Some(Self::SeekForward),
            Widget::Mute => Some(Self::ToggleMute),
            Widget::Fullscreen => Some(Self::Fullscreen),
            Widget::Volume | Widget::Label => None,
        }
    }

    /// The widget that produced this input.
    #[must_use]
    pub fn widget(&self) -> Widget {
        match self {
            Self::PlayPause => Widget::PlayPause,
            Self::SeekBack => Widget::SeekBack,
            Self::SeekForward => Widget::SeekForward,
            Self::ToggleMute => Widget::Mute,
            Self::Volume(_) => Widget::Volume,
            Self::Fullscreen => Widget::Fullscreen,
        }
    }
}

/// Where a media mutation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncSource {
    /// First paint after the bar was rendered.
    Initial,
    /// A keyboard shortcut.
    Keyboard,
    /// A widget's own input event.
    Widget(Widget),
}

/// The stateful widgets of a rendered bar.
pub trait ControlView {
    /// Show `icon` on the mute button.
    fn set_mute_icon(&self, icon: &str);

    /// Move the volume slider to `volume`.
    fn set_volume_value(&self, volume: f64);
}

/// Keeps a rendered bar's stateful widgets in line with the media element.
pub struct ControlSurface {
    labels: Labels,
    view: Option<Box<dyn ControlView>>,
}

impl std::fmt::Debug for ControlSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlSurface")
            .field("labels", &self.labels)
            .field("bound", &self.view.is_some())
            .finish()
    }
}

impl ControlSurface {
    /// Create a surface with no view attached.
    #[must_use]
    pub fn new(labels: Labels) -> Self {
        Self { labels, view: None }
    }

    /// Get the labels.
    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Attach the rendered widgets.
    pub fn bind(&mut self, view: Box<dyn ControlView>) {
        self.view = Some(view);
    }

    /// Whether a view is attached.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.view.is_some()
    }

    /// Write media state back to the stateful widgets.
    ///
    /// The slider is skipped when the change came from the slider itself.
    pub fn sync(&self, snapshot: &MediaSnapshot, source: SyncSource) {
        let Some(view) = &self.view else {
            return;
        };
        view.set_mute_icon(self.labels.mute_icon(snapshot.muted));
        if source != SyncSource::Widget(Widget::Volume) {
            view.set_volume_value(snapshot.volume);
        }
    }
}

/// Insertion guard: scan `host` unless a bar is already next to it.
pub fn plan_mount<H: HostContainer>(host: &H) -> Option<HostScan<H::Media, H::Embed>> {
    if host.has_control_bar() {
        tracing::debug!("Control bar already present, skipping mount");
        return None;
    }
    Some(detect_content(host))
}
