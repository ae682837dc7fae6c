//! Hash routing for the news views
//!
//! Two fragments are recognised: `#news` shows the list section on the home
//! page, `#news/<escaped slug>` shows one article. Every other fragment is
//! inert and leaves the current page alone.

use tracing::{debug, info, warn};

use crate::constants::{elements, pages, routes};
use crate::navigator::PageNavigator;
use crate::news::NewsStore;
use crate::surface::Surface;
use crate::view::ViewRenderer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(String),
}

/// Why a fragment did not produce a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMiss {
    /// Not a news fragment at all.
    Unrelated,
    /// A detail fragment whose slug is not valid percent-encoded UTF-8.
    BadEscape,
}

impl Route {
    /// Parses an address-bar fragment (including the leading `#`).
    pub fn parse(fragment: &str) -> Result<Self, RouteMiss> {
        if let Some(escaped) = fragment.strip_prefix(routes::DETAIL_PREFIX) {
            return decode_component(escaped)
                .map(Route::Detail)
                .ok_or(RouteMiss::BadEscape);
        }
        if fragment == routes::LIST_FRAGMENT {
            return Ok(Route::List);
        }
        Err(RouteMiss::Unrelated)
    }

    /// Canonical fragment of this route.
    ///
    /// ```
    /// use site_news::router::Route;
    ///
    /// assert_eq!(Route::List.fragment(), "#news");
    /// assert_eq!(Route::Detail("a b/c".into()).fragment(), "#news/a%20b%2Fc");
    /// ```
    pub fn fragment(&self) -> String {
        match self {
            Route::List => routes::LIST_FRAGMENT.to_string(),
            Route::Detail(slug) => format!("{}{}", routes::DETAIL_PREFIX, encode_component(slug)),
        }
    }
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

/// Percent-escapes every byte outside the URI-component unreserved set.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Reverses [`encode_component`]. Returns `None` for a truncated or
/// non-hex escape, or when the decoded bytes are not UTF-8.
pub fn decode_component(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            if !hex.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            let hex = std::str::from_utf8(hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(out).ok()
}

/// Maps the current fragment to a page and view.
pub struct Router<'a> {
    store: &'a NewsStore,
}

impl<'a> Router<'a> {
    pub fn new(store: &'a NewsStore) -> Self {
        Self { store }
    }

    /// Handles one routing trigger.
    ///
    /// Waits for the outstanding news load first, so views are never built
    /// from a half-loaded store. Returns the route that was applied.
    pub async fn handle<S: Surface>(&self, surface: &mut S, fragment: &str) -> Option<Route> {
        self.store.ready().await;

        let route = match Route::parse(fragment) {
            Ok(route) => route,
            Err(RouteMiss::Unrelated) => {
                debug!(fragment, "Fragment is not a news route");
                return None;
            }
            Err(RouteMiss::BadEscape) => {
                warn!(fragment, "Ignoring news fragment with a malformed escape");
                return None;
            }
        };

        info!(?route, "Handling route");
        self.apply(surface, &route);
        Some(route)
    }

    fn apply<S: Surface>(&self, surface: &mut S, route: &Route) {
        match route {
            Route::Detail(slug) => {
                PageNavigator::show(surface, pages::NEWS_DETAIL);
                ViewRenderer::new(self.store).render_detail(surface, slug);
            }
            Route::List => {
                PageNavigator::show(surface, pages::HOME);
                surface.scroll_into_view(elements::NEWS_SECTION);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::{NewsCollection, NewsEntry};
    use crate::surface::Document;

    fn store_with(slug: &str) -> NewsStore {
        NewsStore::seeded(NewsCollection::loaded(vec![NewsEntry {
            slug: Some(slug.to_string()),
            title: Some(format!("About {slug}")),
            ..NewsEntry::default()
        }]))
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("#news"), Ok(Route::List));
        assert_eq!(
            Route::parse("#news/hello-world"),
            Ok(Route::Detail("hello-world".to_string()))
        );
        assert_eq!(
            Route::parse("#news/%E3%81%8A%E7%9F%A5%E3%82%89%E3%81%9B"),
            Ok(Route::Detail("お知らせ".to_string()))
        );
        assert_eq!(Route::parse("#news/"), Ok(Route::Detail(String::new())));
        assert_eq!(Route::parse("#about"), Err(RouteMiss::Unrelated));
        assert_eq!(Route::parse(""), Err(RouteMiss::Unrelated));
        assert_eq!(Route::parse("#newsletter"), Err(RouteMiss::Unrelated));
        assert_eq!(Route::parse("#news/%E3%8"), Err(RouteMiss::BadEscape));
        assert_eq!(Route::parse("#news/%FF"), Err(RouteMiss::BadEscape));
    }

    #[test]
    fn test_encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("hello-world_1.0"), "hello-world_1.0");
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("it's (ok)!*~"), "it's (ok)!*~");
        assert_eq!(encode_component("お"), "%E3%81%8A");
    }

    #[test]
    fn test_fragment_parse_roundtrip_for_awkward_slug() {
        let route = Route::Detail("2024/春 #1?".to_string());
        assert_eq!(Route::parse(&route.fragment()), Ok(route));
    }

    #[tokio::test]
    async fn test_detail_route_shows_detail_panel() {
        let store = store_with("hello-world");
        let mut doc = Document::site_skeleton();

        let route = Router::new(&store).handle(&mut doc, "#news/hello-world").await;

        assert_eq!(route, Some(Route::Detail("hello-world".to_string())));
        assert_eq!(doc.active_pages(), ["page-news-detail"]);
        assert!(
            doc.element("news-detail-content")
                .unwrap()
                .text_content()
                .contains("About hello-world")
        );
    }

    #[tokio::test]
    async fn test_list_route_shows_home_and_scrolls() {
        let store = store_with("hello-world");
        let mut doc = Document::site_skeleton();
        Router::new(&store).handle(&mut doc, "#news/hello-world").await;

        let route = Router::new(&store).handle(&mut doc, "#news").await;

        assert_eq!(route, Some(Route::List));
        assert_eq!(doc.active_pages(), ["page-home"]);
        assert_eq!(doc.scroll_anchor(), Some("news"));
    }

    #[tokio::test]
    async fn test_unrelated_fragment_keeps_active_panel() {
        let store = store_with("hello-world");
        let mut doc = Document::site_skeleton();
        Router::new(&store).handle(&mut doc, "#news/hello-world").await;
        let before = doc.clone();

        for fragment in ["#about", "", "#news/%ZZ"] {
            let route = Router::new(&store).handle(&mut doc, fragment).await;
            assert_eq!(route, None);
        }

        assert_eq!(doc, before);
    }

    #[tokio::test]
    async fn test_same_fragment_renders_identically() {
        let store = store_with("hello-world");
        let mut doc = Document::site_skeleton();
        let router = Router::new(&store);

        router.handle(&mut doc, "#news/hello-world").await;
        let first = doc.clone();
        router.handle(&mut doc, "#news/hello-world").await;

        assert_eq!(doc, first);
    }
}
