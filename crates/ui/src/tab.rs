//! Tab item model.

/// A single open tab: a display title and the url it points at.
///
/// Identity is the url; the open-tab list never holds two items with the
/// same url. Items are replaced rather than edited in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabItem {
    /// Display title.
    pub title: String,
    /// Target url, unique within the strip.
    pub url: String,
}

impl TabItem {
    /// Create a new tab item.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Check whether this item is the active one, comparing by url.
    pub fn is_active(&self, active: Option<&TabItem>) -> bool {
        active.map_or(false, |tab| tab.url == self.url)
    }
}
