//! Navigation provider seam.

use crate::service::TabService;
use common::{TabError, TabResult};
use parking_lot::Mutex;

/// Host-side navigation sink.
///
/// The view asks the provider to move the host view somewhere. Location
/// changes travel the other way: the host reports them to
/// [`TabService::on_location_changed`].
pub trait NavigationProvider: Send + Sync {
    /// Navigate the host view to `url`.
    fn navigate_to(&self, url: &str) -> TabResult<()>;
}

/// In-memory navigation provider.
///
/// Records every navigation target. When connected to a service it also
/// reports each navigation back as a location change, the way a host
/// router raises its location-changed event after navigating.
pub struct MemoryNavigator {
    /// Navigation targets, oldest first.
    visited: Mutex<Vec<String>>,
    /// Service to echo location changes into, if any.
    service: Option<TabService>,
}

impl MemoryNavigator {
    /// Create a provider that only records navigations.
    pub fn new() -> Self {
        Self {
            visited: Mutex::new(Vec::new()),
            service: None,
        }
    }

    /// Create a provider that echoes navigations back into `service` as
    /// location change events.
    pub fn with_service(service: TabService) -> Self {
        Self {
            visited: Mutex::new(Vec::new()),
            service: Some(service),
        }
    }

    /// Urls navigated to, oldest first.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }

    /// The most recent navigation target.
    pub fn current(&self) -> Option<String> {
        self.visited.lock().last().cloned()
    }
}

impl NavigationProvider for MemoryNavigator {
    fn navigate_to(&self, url: &str) -> TabResult<()> {
        if url.is_empty() {
            return Err(TabError::navigation("empty navigation target"));
        }

        tracing::debug!(url, "navigating");
        self.visited.lock().push(url.to_string());

        if let Some(service) = &self.service {
            service.on_location_changed(url);
        }

        Ok(())
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}
