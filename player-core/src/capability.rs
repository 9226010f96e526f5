//! # Capability Detection
//!
//! Resolves which vendor variant of the Fullscreen API a browser exposes and
//! whether the host container holds a controllable media element.
//!
//! Vendor variants are an ordered resolution table, tried at call time:
//!
//! ```text
//! Standard  requestFullscreen        exitFullscreen        fullscreenElement
//! Webkit    webkitRequestFullscreen  webkitExitFullscreen  webkitFullscreenElement
//! Moz       mozRequestFullScreen     mozCancelFullScreen   mozFullScreenElement
//! Ms        msRequestFullscreen      msExitFullscreen      msFullscreenElement
//! ```

use serde::{Deserialize, Serialize};

use crate::embed::EmbedFrame;
use crate::media::MediaElement;

/// Browser vendor variant of the Fullscreen API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorPrefix {
    /// Unprefixed W3C API.
    Standard,
    /// Safari / old Chrome.
    Webkit,
    /// Old Firefox.
    Moz,
    /// Old Edge / IE11.
    Ms,
}

/// One row of the resolution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorApi {
    /// Vendor this row belongs to.
    pub vendor: VendorPrefix,
    /// Method on the target element that requests fullscreen.
    pub request: &'static str,
    /// Method on the document that exits fullscreen.
    pub exit: &'static str,
    /// Document property holding the current fullscreen element.
    pub element: &'static str,
}

/// Fullscreen API variants in resolution priority order.
pub static FULLSCREEN_APIS: [VendorApi; 4] = [
    VendorApi {
        vendor: VendorPrefix::Standard,
        request: "requestFullscreen",
        exit: "exitFullscreen",
        element: "fullscreenElement",
    },
    VendorApi {
        vendor: VendorPrefix::Webkit,
        request: "webkitRequestFullscreen",
        exit: "webkitExitFullscreen",
        element: "webkitFullscreenElement",
    },
    VendorApi {
        vendor: VendorPrefix::Moz,
        request: "mozRequestFullScreen",
        exit: "mozCancelFullScreen",
        element: "mozFullScreenElement",
    },
    VendorApi {
        vendor: VendorPrefix::Ms,
        request: "msRequestFullscreen",
        exit: "msExitFullscreen",
        element: "msFullscreenElement",
    },
];

/// Raw access to whatever fullscreen members the browser exposes.
///
/// Implementations answer by member name; ordering and fallback live in
/// [`FullscreenCapability`].
pub trait FullscreenBackend {
    /// Element type that can be made fullscreen.
    type Target;

    /// Whether `target` has a callable method named `method`.
    fn has_request(&self, target: &Self::Target, method: &str) -> bool;

    /// Call `method` on `target`. Fire-and-forget.
    fn invoke_request(&self, target: &Self::Target, method: &str);

    /// Whether the document has a callable method named `method`.
    fn has_exit(&self, method: &str) -> bool;

    /// Call `method` on the document. Fire-and-forget.
    fn invoke_exit(&self, method: &str);

    /// Whether the document property `property` is non-null.
    fn has_fullscreen_element(&self, property: &str) -> bool;
}

/// Fullscreen entry points resolved against a backend.
///
/// Nothing is cached: each call walks [`FULLSCREEN_APIS`] and uses the
/// first available row.
#[derive(Debug, Clone)]
pub struct FullscreenCapability<B> {
    backend: B,
}

impl<B: FullscreenBackend> FullscreenCapability<B> {
    /// Wrap a backend.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get the underlying backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// First vendor whose request method exists on `target`.
    #[must_use]
    pub fn resolve_request(&self, target: &B::Target) -> Option<&'static VendorApi> {
        FULLSCREEN_APIS
            .iter()
            .find(|api| self.backend.has_request(target, api.request))
    }

    /// First vendor whose exit method exists on the document.
    #[must_use]
    pub fn resolve_exit(&self) -> Option<&'static VendorApi> {
        FULLSCREEN_APIS
            .iter()
            .find(|api| self.backend.has_exit(api.exit))
    }

    /// Request fullscreen on `target`. No-op if no variant exists.
    pub fn request(&self, target: &B::Target) -> Option<VendorPrefix> {
        let api = self.resolve_request(target)?;
        self.backend.invoke_request(target, api.request);
        Some(api.vendor)
    }

    /// Exit fullscreen. No-op if no variant exists.
    pub fn exit(&self) -> Option<VendorPrefix> {
        let api = self.resolve_exit()?;
        self.backend.invoke_exit(api.exit);
        Some(api.vendor)
    }

    /// True if any vendor's fullscreen-element property is non-null.
    #[must_use]
    pub fn is_active(&self) -> bool {
        FULLSCREEN_APIS
            .iter()
            .any(|api| self.backend.has_fullscreen_element(api.element))
    }
}

/// A page region that may contain a media element or an embedded frame.
pub trait HostContainer {
    /// Native media element type.
    type Media: MediaElement;
    /// Embedded frame type.
    type Embed: EmbedFrame;

    /// First controllable media element among the descendants.
    fn find_media(&self) -> Option<Self::Media>;

    /// First embedded frame among the descendants.
    fn find_embed(&self) -> Option<Self::Embed>;

    /// Whether a control bar already sits next to this container.
    fn has_control_bar(&self) -> bool;
}

/// What a host container was found to hold.
///
/// Both handles may be present; nothing here enforces exclusivity.
#[derive(Debug, Clone)]
pub struct HostScan<M, E> {
    /// Controllable media element, if any.
    pub media: Option<M>,
    /// Embedded frame, if any.
    pub embed: Option<E>,
}

impl<M, E> HostScan<M, E> {
    /// Whether a controllable media element was found.
    #[must_use]
    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }
}

/// Look for a media element and an embedded frame inside `host`.
pub fn detect_content<H: HostContainer>(host: &H) -> HostScan<H::Media, H::Embed> {
    HostScan {
        media: host.find_media(),
        embed: host.find_embed(),
    }
}
