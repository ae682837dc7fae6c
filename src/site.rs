//! Startup wiring and event dispatch
//!
//! `Site` owns the store handle, the surface, the address bar and the reveal
//! tracker, and turns [`SiteEvent`]s into calls on the router, renderers and
//! chrome helpers.

use tracing::{debug, info};

use crate::chrome::{RevealTracker, apply_header_style, toggle_mobile_menu};
use crate::constants::{elements, routes};
use crate::events::{EventSource, SiteEvent};
use crate::news::NewsStore;
use crate::router::{Route, Router};
use crate::surface::Surface;
use crate::view::ViewRenderer;

/// Current fragment of the page address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBar {
    fragment: String,
}

impl AddressBar {
    pub fn new(fragment: &str) -> Self {
        Self {
            fragment: normalize_fragment(fragment),
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Sets the fragment and reports whether it changed. Only a change
    /// produces a hash-change notification, as in a browser.
    pub fn assign(&mut self, fragment: &str) -> bool {
        let next = normalize_fragment(fragment);
        if next == self.fragment {
            return false;
        }
        self.fragment = next;
        true
    }
}

/// `news` and `#news` name the same fragment; a bare `#` is no fragment.
fn normalize_fragment(fragment: &str) -> String {
    let bare = fragment.strip_prefix('#').unwrap_or(fragment);
    if bare.is_empty() {
        String::new()
    } else {
        format!("#{bare}")
    }
}

pub struct Site<S: Surface> {
    store: NewsStore,
    surface: S,
    address: AddressBar,
    reveal: RevealTracker,
    list_pending: bool,
}

impl<S: Surface> Site<S> {
    pub fn new(store: NewsStore, surface: S, initial_fragment: &str) -> Self {
        Self {
            store,
            surface,
            address: AddressBar::new(initial_fragment),
            reveal: RevealTracker::default(),
            list_pending: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn address(&self) -> &AddressBar {
        &self.address
    }

    pub fn store(&self) -> &NewsStore {
        &self.store
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    /// Dispatches events until the source is exhausted, then waits for the
    /// news load so the list is painted before returning.
    pub async fn run<E: EventSource>(&mut self, events: &mut E) {
        while let Some(event) = events.next_event().await {
            self.dispatch(event).await;
        }
        self.settle_news().await;
    }

    pub async fn dispatch(&mut self, event: SiteEvent) {
        debug!(?event, "Dispatching event");
        match event {
            SiteEvent::DomContentLoaded => self.start().await,
            SiteEvent::HashChange(fragment) => {
                self.address.assign(&fragment);
                self.handle_route().await;
            }
            SiteEvent::Scroll { y } => {
                self.surface.scroll_to(y);
                apply_header_style(&mut self.surface, y);
            }
            SiteEvent::MenuToggle => {
                toggle_mobile_menu(&mut self.surface);
            }
            SiteEvent::BackToList => {
                if self.has_back_control() {
                    self.navigate(routes::LIST_FRAGMENT).await;
                } else {
                    debug!("Page has no back-to-list control");
                }
            }
            SiteEvent::Intersect { id, ratio } => {
                self.reveal.on_intersect(&mut self.surface, &id, ratio);
            }
        }
    }

    /// Assigns a fragment the way a link or script would; routing runs only
    /// when the fragment actually changes.
    pub async fn navigate(&mut self, fragment: &str) -> Option<Route> {
        if !self.address.assign(fragment) {
            debug!(fragment, "Fragment unchanged, no hash change");
            return None;
        }
        self.handle_route().await
    }

    async fn start(&mut self) {
        info!(fragment = self.address.fragment(), "Page loaded");
        self.reveal = RevealTracker::setup(&self.surface);
        let _ready = self.store.begin_load();
        self.list_pending = true;
        self.handle_route().await;
    }

    /// Waits for the outstanding load and paints the list once per load.
    async fn settle_news(&mut self) {
        self.store.ready().await;
        if !self.list_pending {
            return;
        }
        self.list_pending = false;

        let cards = ViewRenderer::new(&self.store).render_list(&mut self.surface);
        for id in cards {
            self.reveal.observe(id);
        }
    }

    async fn handle_route(&mut self) -> Option<Route> {
        self.settle_news().await;
        let fragment = self.address.fragment().to_string();
        Router::new(&self.store)
            .handle(&mut self.surface, &fragment)
            .await
    }

    /// Whether the page offers a back-to-list control.
    pub fn has_back_control(&self) -> bool {
        self.surface.contains(elements::NEWS_BACK)
    }
}
