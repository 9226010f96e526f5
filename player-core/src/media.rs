//! # Media State Adapter
//!
//! Playback, seek, volume and mute operations over an optional media element.
//! Every operation is a silent no-op when no element is bound, so callers need
//! no presence checks of their own.

use serde::{Deserialize, Serialize};

/// A controllable media element.
///
/// Setters take `&self`: browser element handles are shared references with
/// interior mutability.
pub trait MediaElement {
    /// Whether playback is paused.
    fn paused(&self) -> bool;
    /// Start playback. Fire-and-forget.
    fn play(&self);
    /// Pause playback.
    fn pause(&self);
    /// Whether audio is muted.
    fn muted(&self) -> bool;
    /// Set the muted flag.
    fn set_muted(&self, muted: bool);
    /// Volume in `[0, 1]`.
    fn volume(&self) -> f64;
    /// Set volume; callers pass values in `[0, 1]`.
    fn set_volume(&self, volume: f64);
    /// Playback position in seconds.
    fn current_time(&self) -> f64;
    /// Move the playback position.
    fn set_current_time(&self, seconds: f64);
    /// Duration in seconds; NaN or infinite when unknown (e.g. live streams).
    fn duration(&self) -> f64;
}

/// Point-in-time view of a media element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MediaSnapshot {
    /// Whether playback is paused.
    pub paused: bool,
    /// Whether audio is muted.
    pub muted: bool,
    /// Volume in `[0, 1]`.
    pub volume: f64,
    /// Playback position in seconds.
    pub current_time: f64,
    /// Duration in seconds, `None` when unknown.
    pub duration: Option<f64>,
}

/// Clamp a requested volume into `[0, 1]`. NaN yields `None`.
#[must_use]
pub fn clamp_volume(volume: f64) -> Option<f64> {
    if volume.is_nan() {
        None
    } else {
        Some(volume.clamp(0.0, 1.0))
    }
}

/// Compute a seek destination.
///
/// The lower bound is always 0. The upper bound is `duration` when it is
/// finite; otherwise forward seeking is unbounded.
#[must_use]
pub fn seek_target(current_time: f64, delta: f64, duration: f64) -> f64 {
    let target = current_time + delta;
    let upper = if duration.is_finite() { duration } else { target };
    // Not f64::clamp: upper may be below zero when duration is unknown.
    target.min(upper).max(0.0)
}

/// Wraps the optional media element of a host container.
///
/// The handle is bound once and never reassigned.
#[derive(Debug, Clone)]
pub struct MediaAdapter<M> {
    media: Option<M>,
}

impl<M: MediaElement> MediaAdapter<M> {
    /// Bind to a media element, or to nothing.
    #[must_use]
    pub fn new(media: Option<M>) -> Self {
        Self { media }
    }

    /// Whether a media element is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.media.is_some()
    }

    /// Get the bound element.
    #[must_use]
    pub fn element(&self) -> Option<&M> {
        self.media.as_ref()
    }

    /// Read the current state of the bound element.
    #[must_use]
    pub fn snapshot(&self) -> Option<MediaSnapshot> {
        let media = self.media.as_ref()?;
        let duration = media.duration();
        Some(MediaSnapshot {
            paused: media.paused(),
            muted: media.muted(),
            volume: media.volume(),
            current_time: media.current_time(),
            duration: duration.is_finite().then_some(duration),
        })
    }

    /// Play if paused, otherwise pause. Returns the new paused flag.
    pub fn toggle_play(&self) -> Option<bool> {
        let media = self.media.as_ref()?;
        if media.paused() {
            media.play();
            Some(false)
        } else {
            media.pause();
            Some(true)
        }
    }

    /// Seek by `delta` seconds. Returns the new position.
    pub fn seek(&self, delta: f64) -> Option<f64> {
        let media = self.media.as_ref()?;
        let target = seek_target(media.current_time(), delta, media.duration());
        media.set_current_time(target);
        Some(target)
    }

    /// Flip the muted flag. Returns the new flag.
    pub fn toggle_mute(&self) -> Option<bool> {
        let media = self.media.as_ref()?;
        let muted = !media.muted();
        media.set_muted(muted);
        Some(muted)
    }

    /// Set the volume, clamped to `[0, 1]`. Any volume above zero unmutes.
    ///
    /// Zero does not mute here; only [`adjust_volume`](Self::adjust_volume)
    /// does that. NaN leaves the element untouched. Returns the stored volume.
    pub fn set_volume(&self, volume: f64) -> Option<f64> {
        let media = self.media.as_ref()?;
        let Some(volume) = clamp_volume(volume) else {
            return Some(media.volume());
        };
        media.set_volume(volume);
        if volume > 0.0 {
            media.set_muted(false);
        }
        Some(volume)
    }

    /// Step the volume by `delta`; landing on exactly zero mutes.
    #[allow(clippy::float_cmp)]
    pub fn adjust_volume(&self, delta: f64) -> Option<f64> {
        let current = self.media.as_ref()?.volume();
        let volume = self.set_volume(current + delta)?;
        if volume == 0.0 {
            if let Some(media) = &self.media {
                media.set_muted(true);
            }
        }
        Some(volume)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct Element {
        paused: Cell<bool>,
        muted: Cell<bool>,
        volume: Cell<f64>,
        time: Cell<f64>,
        duration: f64,
    }

    impl Element {
        fn new(duration: f64) -> Self {
            Self {
                paused: Cell::new(true),
                muted: Cell::new(false),
                volume: Cell::new(1.0),
                time: Cell::new(0.0),
                duration,
            }
        }
    }

    impl MediaElement for Element {
        fn paused(&self) -> bool {
            self.paused.get()
        }
        fn play(&self) {
            self.paused.set(false);
        }
        fn pause(&self) {
            self.paused.set(true);
        }
        fn muted(&self) -> bool {
            self.muted.get()
        }
        fn set_muted(&self, muted: bool) {
            self.muted.set(muted);
        }
        fn volume(&self) -> f64 {
            self.volume.get()
        }
        fn set_volume(&self, volume: f64) {
            self.volume.set(volume);
        }
        fn current_time(&self) -> f64 {
            self.time.get()
        }
        fn set_current_time(&self, seconds: f64) {
            self.time.set(seconds);
        }
        fn duration(&self) -> f64 {
            self.duration
        }
    }

    #[test]
    fn test_unbound_adapter_is_silent() {
        let adapter: MediaAdapter<Element> = MediaAdapter::new(None);
        assert!(!adapter.is_bound());
        assert_eq!(adapter.toggle_play(), None);
        assert_eq!(adapter.seek(10.0), None);
        assert_eq!(adapter.toggle_mute(), None);
        assert_eq!(adapter.set_volume(0.5), None);
        assert_eq!(adapter.adjust_volume(-0.05), None);
        assert!(adapter.snapshot().is_none());
    }

    #[test]
    fn test_toggle_play_alternates() {
        let adapter = MediaAdapter::new(Some(Element::new(60.0)));
        assert_eq!(adapter.toggle_play(), Some(false));
        assert_eq!(adapter.toggle_play(), Some(true));
    }

    #[test]
    fn test_seek_clamps_to_known_duration() {
        assert!((seek_target(55.0, 10.0, 60.0) - 60.0).abs() < f64::EPSILON);
        assert!(seek_target(5.0, -10.0, 60.0).abs() < f64::EPSILON);
        assert!((seek_target(20.0, 10.0, 60.0) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seek_unbounded_when_duration_unknown() {
        assert!((seek_target(1000.0, 10.0, f64::NAN) - 1010.0).abs() < f64::EPSILON);
        assert!((seek_target(1000.0, 10.0, f64::INFINITY) - 1010.0).abs() < f64::EPSILON);
        assert!(seek_target(3.0, -10.0, f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_volume_zero_does_not_mute() {
        let adapter = MediaAdapter::new(Some(Element::new(60.0)));
        assert_eq!(adapter.set_volume(0.0), Some(0.0));
        let snap = adapter.snapshot().expect("bound");
        assert!(!snap.muted);
    }

    #[test]
    fn test_set_volume_unmutes_and_clamps() {
        let adapter = MediaAdapter::new(Some(Element::new(60.0)));
        adapter.toggle_mute();
        assert_eq!(adapter.set_volume(1.7), Some(1.0));
        assert!(!adapter.snapshot().expect("bound").muted);
        assert_eq!(adapter.set_volume(-3.0), Some(0.0));
    }

    #[test]
    fn test_set_volume_ignores_nan() {
        let adapter = MediaAdapter::new(Some(Element::new(60.0)));
        adapter.set_volume(0.4);
        assert_eq!(adapter.set_volume(f64::NAN), Some(0.4));
    }

    #[test]
    fn test_adjust_volume_to_zero_mutes() {
        let adapter = MediaAdapter::new(Some(Element::new(60.0)));
        adapter.set_volume(0.05);
        assert_eq!(adapter.adjust_volume(-0.05), Some(0.0));
        assert!(adapter.snapshot().expect("bound").muted);
    }

    #[test]
    fn test_snapshot_hides_unknown_duration() {
        let adapter = MediaAdapter::new(Some(Element::new(f64::NAN)));
        assert_eq!(adapter.snapshot().expect("bound").duration, None);
    }
}
