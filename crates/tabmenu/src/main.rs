//! Tab menu demo - drives the tab strip through a scripted session.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ui::{MemoryNavigator, TabService, TabStrip, TabView};

/// Tab menu demo shell
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Default (home) page url
    #[arg(long, default_value = "/home")]
    default_page: String,

    /// Locations to visit, in order
    locations: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Tab menu demo");

    let locations = if args.locations.is_empty() {
        vec![
            "/reports-view".to_string(),
            "/settings".to_string(),
            "/user-accounts".to_string(),
        ]
    } else {
        args.locations
    };

    let service = TabService::new();
    service.set_default_page(&args.default_page);

    let navigator = Arc::new(MemoryNavigator::with_service(service.clone()));
    let mut strip = TabStrip::new(service.clone(), navigator.clone());

    print_strip("mounted", &strip.render());

    for location in &locations {
        info!("Visiting: {}", location);
        service.on_location_changed(location);
        print_strip(location, &strip.render());
    }

    // Close the most recently opened tab, then click another one: the
    // click after a close always lands back on the home tab.
    let tabs = service.tabs();
    if let Some(tab) = tabs.last() {
        info!("Closing tab: {}", tab.title);
        strip.remove(tab);
        print_strip("after close", &strip.render());

        if let Some(next) = service.tabs().last().cloned() {
            info!("Clicking tab: {}", next.title);
            strip.select(&next.url);
            print_strip("after click", &strip.render());
        }
    }

    info!("Visited: {:?}", navigator.visited());

    Ok(())
}

fn print_strip(label: &str, tabs: &[TabView]) {
    println!("[{}]", label);
    for tab in tabs {
        let marker = if tab.active { "*" } else { " " };
        println!("  {} {} ({})", marker, tab.title, tab.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default() {
        let args = Args::parse_from(["tabmenu"]);
        assert_eq!(args.default_page, "/home");
        assert!(args.locations.is_empty());
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_with_locations() {
        let args = Args::parse_from(["tabmenu", "/reports-view", "/settings"]);
        assert_eq!(args.locations, vec!["/reports-view", "/settings"]);
    }

    #[test]
    fn test_args_verbose() {
        let args = Args::parse_from(["tabmenu", "--verbose"]);
        assert!(args.verbose);
    }
}
