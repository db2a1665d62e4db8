//! Tab menu UI.
//!
//! This crate provides the tab strip building blocks:
//! - Tab item model
//! - Shared tab-state service with change notifications
//! - Navigation provider seam
//! - Tab strip view binding

pub mod navigation;
pub mod service;
pub mod signal;
pub mod strip;
pub mod tab;

pub use navigation::{MemoryNavigator, NavigationProvider};
pub use service::TabService;
pub use signal::{ChangeSignal, SubscriptionId};
pub use strip::{TabStrip, TabView};
pub use tab::TabItem;
