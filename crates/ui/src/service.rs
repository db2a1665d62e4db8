//! Shared tab-state service.

use crate::signal::{ChangeSignal, SubscriptionId};
use crate::tab::TabItem;
use parking_lot::RwLock;
use std::sync::Arc;

/// Tab list bookkeeping.
///
/// Mutation helpers report whether anything observable changed so the
/// owning service can emit exactly one notification per public call.
#[derive(Debug, Default)]
struct TabState {
    /// The pinned home route; empty when unset.
    default_page: String,
    /// Open tabs in insertion order.
    tabs: Vec<TabItem>,
    /// Index of the active tab in `tabs`.
    active: Option<usize>,
}

impl TabState {
    fn active_tab(&self) -> Option<&TabItem> {
        self.active.and_then(|index| self.tabs.get(index))
    }

    /// Point `active` at the tab with this url, or clear it when no tab
    /// matches (an untracked url clears the highlight).
    fn activate(&mut self, url: &str) {
        self.active = self.tabs.iter().position(|tab| tab.url == url);
    }

    /// Append a tab unless the url is already tracked.
    fn insert(&mut self, title: &str, url: &str) -> bool {
        if self.tabs.iter().any(|tab| tab.url == url) {
            return false;
        }
        self.tabs.push(TabItem::new(title, url));
        true
    }

    /// Activate the default page's tab when nothing is active yet.
    fn activate_default_if_idle(&mut self) -> bool {
        if self.active.is_some() || self.default_page.is_empty() {
            return false;
        }
        let url = self.default_page.clone();
        self.activate(&url);
        self.active.is_some()
    }
}

/// Handle to the session-wide tab state.
///
/// Clones share one underlying state, so every view instance in a session
/// sees the same tab list. The change signal lives outside the state lock;
/// subscribers always run after the lock is released.
#[derive(Clone)]
pub struct TabService {
    inner: Arc<Inner>,
}

struct Inner {
    state: RwLock<TabState>,
    on_change: ChangeSignal,
}

impl TabService {
    /// Create an empty service with no default page.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(TabState::default()),
                on_change: ChangeSignal::new(),
            }),
        }
    }

    /// Set the pinned home route.
    ///
    /// When nothing is active yet and the url is non-empty, this also opens
    /// the home tab and activates it.
    pub fn set_default_page(&self, url: &str) {
        let changed = {
            let mut state = self.inner.state.write();
            state.default_page = url.to_string();
            if state.active.is_none() && !state.default_page.is_empty() {
                state.insert(url, url);
                state.activate(url);
                true
            } else {
                false
            }
        };

        if changed {
            tracing::debug!(url, "default page set and activated");
            self.inner.on_change.emit();
        }
    }

    /// Add a tab for `url`, keeping the title from the first call.
    ///
    /// Idempotent by url: a second call with the same url neither duplicates
    /// nor reorders. An empty url is ignored. Afterwards, if nothing is
    /// active and a default page is set, the default page's tab becomes
    /// active.
    pub fn add_tab(&self, title: &str, url: &str) {
        if url.is_empty() {
            tracing::trace!("ignoring add_tab with empty url");
            return;
        }

        let changed = {
            let mut state = self.inner.state.write();
            let inserted = state.insert(title, url);
            let activated = state.activate_default_if_idle();
            if inserted {
                tracing::debug!(title, url, "tab added");
            }
            inserted || activated
        };

        if changed {
            self.inner.on_change.emit();
        }
    }

    /// Activate the tab matching `url`.
    ///
    /// An unknown url clears the highlight; navigating to an untracked
    /// location leaves no tab selected.
    pub fn set_active_tab(&self, url: &str) {
        {
            let mut state = self.inner.state.write();
            state.activate(url);
            if state.active.is_none() {
                tracing::trace!(url, "no tab matches, clearing active tab");
            }
        }
        self.inner.on_change.emit();
    }

    /// Close a tab.
    ///
    /// The pinned default tab and tabs that are not in the list are left
    /// alone, silently. When the removed tab was active, the first
    /// remaining tab takes over, or the highlight clears if none remain.
    pub fn remove_tab(&self, tab: &TabItem) {
        let removed = {
            let mut state = self.inner.state.write();
            if !state.default_page.is_empty() && tab.url == state.default_page {
                tracing::debug!(url = %tab.url, "default tab is pinned, not removing");
                false
            } else if let Some(index) = state.tabs.iter().position(|t| t.url == tab.url) {
                state.tabs.remove(index);
                match state.active {
                    Some(active) if active == index => {
                        state.active = if state.tabs.is_empty() { None } else { Some(0) };
                    }
                    // Later entries shifted down by one.
                    Some(active) if active > index => {
                        state.active = Some(active - 1);
                    }
                    _ => {}
                }
                true
            } else {
                false
            }
        };

        if removed {
            tracing::debug!(url = %tab.url, "tab removed");
            self.inner.on_change.emit();
        }
    }

    /// React to a location change reported by the host router.
    ///
    /// The last path segment becomes the display name: dashes turn into
    /// spaces and the title is upper-cased. An empty segment falls back to
    /// the default page. Note the default-page check compares the
    /// transformed *name* against the url-valued default page; the original
    /// component behaves this way and the behavior is kept as-is.
    pub fn on_location_changed(&self, location: &str) {
        let segment = location.rsplit('/').next().unwrap_or("");
        let mut page_name = if segment.is_empty() {
            self.default_page()
        } else {
            segment.to_string()
        };
        page_name = page_name.replace('-', " ");

        if page_name != self.default_page() {
            self.add_tab(&page_name.to_uppercase(), location);
            self.set_active_tab(location);
        } else {
            let default = self.default_page();
            self.set_active_tab(&default);
        }
    }

    /// Snapshot of the open tabs in order.
    pub fn tabs(&self) -> Vec<TabItem> {
        self.inner.state.read().tabs.clone()
    }

    /// The currently active tab, if any.
    pub fn active_tab(&self) -> Option<TabItem> {
        self.inner.state.read().active_tab().cloned()
    }

    /// The pinned home route; empty when unset.
    pub fn default_page(&self) -> String {
        self.inner.state.read().default_page.clone()
    }

    /// Register for change notifications.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        self.inner.on_change.subscribe(callback)
    }

    /// Remove a change subscription.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.on_change.unsubscribe(id)
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.inner.on_change.subscriber_count()
    }
}

impl Default for TabService {
    fn default() -> Self {
        Self::new()
    }
}
