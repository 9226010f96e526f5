//! Fullscreen toggle over the resolved capability.

use serde::{Deserialize, Serialize};

use crate::capability::{FullscreenBackend, FullscreenCapability, VendorPrefix};

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "vendor", rename_all = "lowercase")]
pub enum FullscreenAction {
    /// Fullscreen was requested through the given vendor API.
    Requested(VendorPrefix),
    /// Fullscreen exit was requested through the given vendor API.
    Exited(VendorPrefix),
    /// No usable API; nothing happened.
    Unsupported,
}

/// Stateless fullscreen toggle.
///
/// Operates on a container element only, so it works the same whether or not
/// a media element exists. Requests are fire-and-forget: the browser applies
/// the change asynchronously and may reject it (e.g. no user gesture).
#[derive(Debug, Clone)]
pub struct FullscreenController<B> {
    capability: FullscreenCapability<B>,
}

impl<B: FullscreenBackend> FullscreenController<B> {
    /// Create a controller over a backend.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            capability: FullscreenCapability::new(backend),
        }
    }

    /// Get the resolved capability.
    #[must_use]
    pub fn capability(&self) -> &FullscreenCapability<B> {
        &self.capability
    }

    /// Whether the document currently has a fullscreen element.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.capability.is_active()
    }

    /// Exit fullscreen if active, otherwise request it on `target`.
    pub fn toggle(&self, target: &B::Target) -> FullscreenAction {
        let action = if self.capability.is_active() {
            self.capability
                .exit()
                .map_or(FullscreenAction::Unsupported, FullscreenAction::Exited)
        } else {
            self.capability
                .request(target)
                .map_or(FullscreenAction::Unsupported, FullscreenAction::Requested)
        };
        tracing::debug!("Fullscreen toggle: {:?}", action);
        action
    }
}
