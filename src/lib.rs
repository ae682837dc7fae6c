//! News panel and hash routing for a single-page marketing site
//!
//! The site's pages are pre-rendered panels; this library switches between
//! them, renders the news list and article views from `news.json`, and keeps
//! both in sync with the address-bar fragment. The page itself is modelled by
//! the [`surface::Surface`] trait, so the same logic runs against the
//! in-memory [`surface::Document`] in the binary and in tests.
//!
//! # Examples
//!
//! ```rust,no_run
//! use site_news::events::{ScriptedEvents, SiteEvent};
//! use site_news::news::{NewsSource, NewsStore};
//! use site_news::site::Site;
//! use site_news::surface::Document;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = NewsStore::new(NewsSource::local("public/news.json"));
//!     let mut site = Site::new(store, Document::site_skeleton(), "#news/spring-sale");
//!
//!     let mut events = ScriptedEvents::new([SiteEvent::DomContentLoaded]);
//!     site.run(&mut events).await;
//!
//!     print!("{}", site.surface().to_html());
//! }
//! ```

pub mod chrome;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod navigator;
pub mod news;
pub mod router;
pub mod site;
pub mod surface;
pub mod testing_utils;
pub mod view;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use news::{NewsCollection, NewsEntry, NewsSource, NewsStore};
pub use router::{Route, Router};
pub use site::{AddressBar, Site};
pub use surface::{Document, Surface};
pub use view::ViewRenderer;
