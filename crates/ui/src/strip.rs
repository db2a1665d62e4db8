//! Tab strip view binding.

use crate::navigation::NavigationProvider;
use crate::service::TabService;
use crate::signal::SubscriptionId;
use crate::tab::TabItem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-shot redirect state entered by closing a tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RedirectState {
    Idle,
    /// The next select goes to the default page, whatever url was clicked.
    PendingDefaultRedirect,
}

/// Render model for a single tab in the strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabView {
    /// Display title.
    pub title: String,
    /// Target url.
    pub url: String,
    /// Whether this tab is highlighted.
    pub active: bool,
}

/// View binding for the tab strip.
///
/// Forwards clicks to the shared [`TabService`] and navigation side effects
/// to the host. Re-renders are driven by a dirty flag the service's change
/// signal sets; callers poll [`TabStrip::needs_render`] and call
/// [`TabStrip::render`] for a fresh snapshot.
pub struct TabStrip {
    service: TabService,
    navigator: Arc<dyn NavigationProvider>,
    redirect: RedirectState,
    subscription: SubscriptionId,
    needs_render: Arc<AtomicBool>,
    first_render: bool,
}

impl TabStrip {
    /// Mount a strip over the shared service.
    pub fn new(service: TabService, navigator: Arc<dyn NavigationProvider>) -> Self {
        let needs_render = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&needs_render);
        let subscription = service.subscribe(move || {
            flag.store(true, Ordering::Release);
        });

        Self {
            service,
            navigator,
            redirect: RedirectState::Idle,
            subscription,
            needs_render,
            first_render: true,
        }
    }

    /// Whether a change notification arrived since the last render.
    pub fn needs_render(&self) -> bool {
        self.needs_render.load(Ordering::Acquire)
    }

    /// Produce the current strip model and clear the dirty flag.
    ///
    /// The first render also points the host at the root path, matching the
    /// mount behavior of the original component.
    pub fn render(&mut self) -> Vec<TabView> {
        self.needs_render.store(false, Ordering::Release);

        if self.first_render {
            self.first_render = false;
            self.navigate("/");
        }

        let active = self.service.active_tab();
        self.service
            .tabs()
            .into_iter()
            .map(|tab| TabView {
                active: tab.is_active(active.as_ref()),
                title: tab.title,
                url: tab.url,
            })
            .collect()
    }

    /// Handle a click on a tab.
    ///
    /// The click right after a close is redirected to the default page;
    /// the redirect state is consumed either way. Selecting the default
    /// page navigates the host to the root path instead of the page url.
    pub fn select(&mut self, url: &str) {
        let target = match self.redirect {
            RedirectState::PendingDefaultRedirect => self.service.default_page(),
            RedirectState::Idle => url.to_string(),
        };
        self.redirect = RedirectState::Idle;

        self.service.set_active_tab(&target);
        if target == self.service.default_page() {
            self.navigate("/");
        } else {
            self.navigate(&target);
        }
    }

    /// Handle a click on a tab's close button.
    ///
    /// The pinned default tab cannot be closed. Closing anything else arms
    /// the one-shot redirect so the next click lands on the default page.
    pub fn remove(&mut self, tab: &TabItem) {
        if tab.url == self.service.default_page() {
            return;
        }
        self.service.remove_tab(tab);
        self.redirect = RedirectState::PendingDefaultRedirect;
    }

    fn navigate(&self, url: &str) {
        if let Err(err) = self.navigator.navigate_to(url) {
            tracing::warn!(url, %err, "navigation failed");
        }
    }
}

impl Drop for TabStrip {
    fn drop(&mut self) {
        self.service.unsubscribe(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MemoryNavigator;

    fn strip_with_recorder(service: &TabService) -> (TabStrip, Arc<MemoryNavigator>) {
        let navigator = Arc::new(MemoryNavigator::new());
        let strip = TabStrip::new(service.clone(), navigator.clone());
        (strip, navigator)
    }

    #[test]
    fn test_first_render_navigates_to_root_once() {
        let service = TabService::new();
        service.set_default_page("/home");
        let (mut strip, navigator) = strip_with_recorder(&service);

        strip.render();
        strip.render();

        assert_eq!(navigator.visited(), vec!["/"]);
    }

    #[test]
    fn test_render_marks_active_tab() {
        let service = TabService::new();
        service.set_default_page("/home");
        service.add_tab("REPORTS", "/reports");
        service.set_active_tab("/reports");
        let (mut strip, _navigator) = strip_with_recorder(&service);

        let model = strip.render();

        assert_eq!(model.len(), 2);
        assert!(!model[0].active);
        assert!(model[1].active);
        assert_eq!(model[1].title, "REPORTS");
    }

    #[test]
    fn test_needs_render_follows_change_signal() {
        let service = TabService::new();
        let (mut strip, _navigator) = strip_with_recorder(&service);

        strip.render();
        assert!(!strip.needs_render());

        service.add_tab("A", "/a");
        assert!(strip.needs_render());

        strip.render();
        assert!(!strip.needs_render());
    }

    #[test]
    fn test_select_activates_and_navigates() {
        let service = TabService::new();
        service.set_default_page("/home");
        service.add_tab("REPORTS", "/reports");
        let (mut strip, navigator) = strip_with_recorder(&service);

        strip.select("/reports");

        assert_eq!(service.active_tab().unwrap().url, "/reports");
        assert_eq!(navigator.current().as_deref(), Some("/reports"));
    }

    #[test]
    fn test_select_default_page_navigates_to_root() {
        let service = TabService::new();
        service.set_default_page("/home");
        let (mut strip, navigator) = strip_with_recorder(&service);

        strip.select("/home");

        assert_eq!(service.active_tab().unwrap().url, "/home");
        assert_eq!(navigator.current().as_deref(), Some("/"));
    }

    #[test]
    fn test_select_after_remove_redirects_to_default() {
        let service = TabService::new();
        service.set_default_page("/home");
        service.add_tab("A", "/a");
        service.add_tab("B", "/b");
        service.set_active_tab("/a");
        let (mut strip, navigator) = strip_with_recorder(&service);

        strip.remove(&TabItem::new("A", "/a"));

        let urls: Vec<_> = service.tabs().into_iter().map(|t| t.url).collect();
        assert_eq!(urls, vec!["/home", "/b"]);

        // The click after a close goes home, not to the clicked tab.
        strip.select("/b");
        assert_eq!(service.active_tab().unwrap().url, "/home");
        assert_eq!(navigator.current().as_deref(), Some("/"));

        // The redirect is one-shot.
        strip.select("/b");
        assert_eq!(service.active_tab().unwrap().url, "/b");
        assert_eq!(navigator.current().as_deref(), Some("/b"));
    }

    #[test]
    fn test_remove_default_tab_is_noop() {
        let service = TabService::new();
        service.set_default_page("/home");
        service.add_tab("A", "/a");
        let (mut strip, navigator) = strip_with_recorder(&service);

        strip.remove(&TabItem::new("/home", "/home"));

        assert_eq!(service.tabs().len(), 2);

        // No redirect was armed either.
        strip.select("/a");
        assert_eq!(service.active_tab().unwrap().url, "/a");
        assert_eq!(navigator.current().as_deref(), Some("/a"));
    }

    #[test]
    fn test_drop_unsubscribes_from_change_signal() {
        let service = TabService::new();
        let (strip, _navigator) = strip_with_recorder(&service);

        assert_eq!(service.subscriber_count(), 1);
        drop(strip);
        assert_eq!(service.subscriber_count(), 0);
    }

    #[test]
    fn test_two_strips_share_one_service() {
        let service = TabService::new();
        service.set_default_page("/home");
        let (mut first, _nav_a) = strip_with_recorder(&service);
        let (mut second, _nav_b) = strip_with_recorder(&service);

        service.add_tab("REPORTS", "/reports");

        assert_eq!(first.render().len(), 2);
        assert_eq!(second.render().len(), 2);
    }
}
