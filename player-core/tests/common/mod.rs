//! In-memory stand-ins for the browser, shared by the integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use player_core::{
    plan_mount, prepare_embed, ControlView, EmbedFrame, FullscreenBackend, HostContainer,
    MediaElement, Player, PlayerConfig, VendorPrefix, FULLSCREEN_APIS,
};

/// Observable state of a fake media element.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaState {
    pub paused: bool,
    pub muted: bool,
    pub volume: f64,
    pub current_time: f64,
    pub duration: f64,
}

impl Default for MediaState {
    fn default() -> Self {
        Self {
            paused: true,
            muted: false,
            volume: 1.0,
            current_time: 0.0,
            duration: 120.0,
        }
    }
}

/// Media element whose clones share one state.
#[derive(Debug, Clone, Default)]
pub struct FakeMedia {
    state: Rc<RefCell<MediaState>>,
}

impl FakeMedia {
    pub fn with_state(state: MediaState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn state(&self) -> MediaState {
        self.state.borrow().clone()
    }
}

impl MediaElement for FakeMedia {
    fn paused(&self) -> bool {
        self.state.borrow().paused
    }
    fn play(&self) {
        self.state.borrow_mut().paused = false;
    }
    fn pause(&self) {
        self.state.borrow_mut().paused = true;
    }
    fn muted(&self) -> bool {
        self.state.borrow().muted
    }
    fn set_muted(&self, muted: bool) {
        self.state.borrow_mut().muted = muted;
    }
    fn volume(&self) -> f64 {
        self.state.borrow().volume
    }
    fn set_volume(&self, volume: f64) {
        assert!((0.0..=1.0).contains(&volume), "volume {volume} out of range");
        self.state.borrow_mut().volume = volume;
    }
    fn current_time(&self) -> f64 {
        self.state.borrow().current_time
    }
    fn set_current_time(&self, seconds: f64) {
        self.state.borrow_mut().current_time = seconds;
    }
    fn duration(&self) -> f64 {
        self.state.borrow().duration
    }
}

/// Browser exposing a single fullscreen vendor API (or none), flipping
/// state synchronously.
#[derive(Debug, Clone)]
pub struct FakeBrowser {
    vendor: Option<VendorPrefix>,
    fullscreen_element: Rc<RefCell<Option<String>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeBrowser {
    pub fn new(vendor: Option<VendorPrefix>) -> Self {
        Self {
            vendor,
            fullscreen_element: Rc::default(),
            calls: Rc::default(),
        }
    }

    pub fn standard() -> Self {
        Self::new(Some(VendorPrefix::Standard))
    }

    pub fn fullscreen_element(&self) -> Option<String> {
        self.fullscreen_element.borrow().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn api(&self) -> Option<&'static player_core::VendorApi> {
        let vendor = self.vendor?;
        FULLSCREEN_APIS.iter().find(|api| api.vendor == vendor)
    }
}

impl FullscreenBackend for FakeBrowser {
    type Target = String;

    fn has_request(&self, _target: &String, method: &str) -> bool {
        self.api().is_some_and(|api| api.request == method)
    }

    fn invoke_request(&self, target: &String, method: &str) {
        self.calls.borrow_mut().push(method.to_string());
        *self.fullscreen_element.borrow_mut() = Some(target.clone());
    }

    fn has_exit(&self, method: &str) -> bool {
        self.api().is_some_and(|api| api.exit == method)
    }

    fn invoke_exit(&self, method: &str) {
        self.calls.borrow_mut().push(method.to_string());
        *self.fullscreen_element.borrow_mut() = None;
    }

    fn has_fullscreen_element(&self, property: &str) -> bool {
        self.api().is_some_and(|api| api.element == property)
            && self.fullscreen_element.borrow().is_some()
    }
}

/// Everything written to the stateful widgets.
#[derive(Debug, Default)]
pub struct ViewLog {
    pub icons: RefCell<Vec<String>>,
    pub volumes: RefCell<Vec<f64>>,
}

impl ViewLog {
    pub fn last_icon(&self) -> Option<String> {
        self.icons.borrow().last().cloned()
    }

    pub fn last_volume(&self) -> Option<f64> {
        self.volumes.borrow().last().copied()
    }
}

pub struct RecordingView(pub Rc<ViewLog>);

impl ControlView for RecordingView {
    fn set_mute_icon(&self, icon: &str) {
        self.0.icons.borrow_mut().push(icon.to_string());
    }
    fn set_volume_value(&self, volume: f64) {
        self.0.volumes.borrow_mut().push(volume);
    }
}

/// Embedded frame with a `src` and an allowfullscreen flag.
#[derive(Debug, Clone, Default)]
pub struct FakeFrame {
    pub src: Option<String>,
    pub allowed: Rc<Cell<bool>>,
}

impl FakeFrame {
    pub fn new(src: &str) -> Self {
        Self {
            src: Some(src.to_string()),
            allowed: Rc::default(),
        }
    }
}

impl EmbedFrame for FakeFrame {
    fn src(&self) -> Option<String> {
        self.src.clone()
    }
    fn allows_fullscreen(&self) -> bool {
        self.allowed.get()
    }
    fn permit_fullscreen(&self) {
        self.allowed.set(true);
    }
}

/// Host container counting the bars inserted next to it.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub media: Option<FakeMedia>,
    pub embed: Option<FakeFrame>,
    pub bars: Cell<usize>,
}

impl HostContainer for FakeHost {
    type Media = FakeMedia;
    type Embed = FakeFrame;

    fn find_media(&self) -> Option<FakeMedia> {
        self.media.clone()
    }

    fn find_embed(&self) -> Option<FakeFrame> {
        self.embed.clone()
    }

    fn has_control_bar(&self) -> bool {
        self.bars.get() > 0
    }
}

pub type TestPlayer = Player<FakeMedia, FakeBrowser>;

/// Mount a player the way the browser app does: guard, scan, build, bind.
pub fn mount(
    host: &FakeHost,
    browser: FakeBrowser,
    config: &PlayerConfig,
) -> Option<(TestPlayer, Rc<ViewLog>)> {
    let scan = plan_mount(host)?;
    let mut player = Player::new(scan.media, browser, "container".to_string(), config);
    if let Some(frame) = &scan.embed {
        player = player.with_embed(prepare_embed(frame));
    }
    host.bars.set(host.bars.get() + 1);
    let log = Rc::new(ViewLog::default());
    player.bind_view(Box::new(RecordingView(Rc::clone(&log))));
    Some((player, log))
}

/// Host with a media element in the given state, mounted with defaults.
pub fn media_player(state: MediaState) -> (TestPlayer, FakeMedia, Rc<ViewLog>) {
    let media = FakeMedia::with_state(state);
    let host = FakeHost {
        media: Some(media.clone()),
        ..FakeHost::default()
    };
    let (player, log) =
        mount(&host, FakeBrowser::standard(), &PlayerConfig::default()).expect("first mount");
    (player, media, log)
}
