use site_news::{
    Document, NewsSource, NewsStore, Site, Surface,
    events::{ScriptedEvents, SiteEvent},
    surface::Node,
    testing_utils::TestDataBuilder,
};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Writes `document` to a temporary news.json and returns a store reading it
async fn file_store(document: &str) -> (TempDir, NewsStore) {
    let temp_dir = tempfile::tempdir().unwrap();
    let file: PathBuf = temp_dir.path().join("news.json");
    tokio::fs::write(&file, document).await.unwrap();
    (temp_dir, NewsStore::new(NewsSource::local(file)))
}

async fn standard_store() -> (TempDir, NewsStore) {
    let mut entries = TestDataBuilder::create_daily_entries(3);
    entries.push(TestDataBuilder::create_full_entry("hello-world"));
    file_store(&TestDataBuilder::news_document(&entries)).await
}

fn text_of(doc: &Document, id: &str) -> String {
    doc.element(id).unwrap().text_content()
}

#[tokio::test]
async fn test_deep_link_on_load_shows_article() {
    let (_dir, store) = standard_store().await;
    let mut site = Site::new(store, Document::site_skeleton(), "#news/hello-world");

    site.run(&mut ScriptedEvents::new([SiteEvent::DomContentLoaded]))
        .await;

    let doc = site.surface();
    assert_eq!(doc.active_pages(), ["page-news-detail"]);
    assert!(text_of(doc, "news-detail-content").contains("Full story hello-world"));
    // The list is painted as well, behind the detail panel
    assert_eq!(doc.element("news-list").unwrap().children.len(), 4);
}

#[tokio::test]
async fn test_load_without_fragment_stays_on_home() {
    let (_dir, store) = standard_store().await;
    let mut site = Site::new(store, Document::site_skeleton(), "");

    site.run(&mut ScriptedEvents::new([SiteEvent::DomContentLoaded]))
        .await;

    let doc = site.surface();
    assert_eq!(doc.active_pages(), ["page-home"]);
    assert_eq!(doc.scroll_anchor(), None);
    assert!(doc.element("news-detail-content").unwrap().children.is_empty());
}

#[tokio::test]
async fn test_navigation_sequence() {
    let (_dir, store) = standard_store().await;
    let mut site = Site::new(store, Document::site_skeleton(), "");

    site.dispatch(SiteEvent::DomContentLoaded).await;

    site.dispatch(SiteEvent::HashChange("#news/day-2".to_string()))
        .await;
    assert_eq!(site.surface().active_pages(), ["page-news-detail"]);
    assert!(text_of(site.surface(), "news-detail-content").contains("Title of day-2"));

    site.dispatch(SiteEvent::BackToList).await;
    assert_eq!(site.address().fragment(), "#news");
    assert_eq!(site.surface().active_pages(), ["page-home"]);
    assert_eq!(site.surface().scroll_anchor(), Some("news"));

    site.dispatch(SiteEvent::HashChange("#about".to_string()))
        .await;
    assert_eq!(site.surface().active_pages(), ["page-home"]);
}

#[tokio::test]
async fn test_back_to_list_when_already_on_list_does_nothing() {
    let (_dir, store) = standard_store().await;
    let mut site = Site::new(store, Document::site_skeleton(), "#news");
    site.dispatch(SiteEvent::DomContentLoaded).await;

    // A menu opened after the route was handled stays open: no second route runs
    site.dispatch(SiteEvent::MenuToggle).await;
    site.dispatch(SiteEvent::BackToList).await;

    assert!(site.surface().has_class("mobile-menu", "active"));
}

#[tokio::test]
async fn test_back_to_list_needs_control() {
    let (_dir, store) = standard_store().await;
    let page = Document::new(vec![
        Node::new("section")
            .with_id("page-home")
            .with_classes("page-content active"),
        Node::new("section")
            .with_id("page-news-detail")
            .with_classes("page-content")
            .with_child(Node::new("article").with_id("news-detail-content")),
    ]);
    let mut site = Site::new(store, page, "#news/day-1");
    site.dispatch(SiteEvent::DomContentLoaded).await;

    site.dispatch(SiteEvent::BackToList).await;

    assert_eq!(site.address().fragment(), "#news/day-1");
    assert_eq!(site.surface().active_pages(), ["page-news-detail"]);
}

#[tokio::test]
async fn test_unknown_slug_shows_not_found() {
    let (_dir, store) = standard_store().await;
    let mut site = Site::new(store, Document::site_skeleton(), "#news/does-not-exist");

    site.run(&mut ScriptedEvents::new([SiteEvent::DomContentLoaded]))
        .await;

    let detail = text_of(site.surface(), "news-detail-content");
    assert!(detail.contains("記事が見つかりません。"));
    assert!(!detail.contains("Newsを読み込めませんでした。"));
}

#[tokio::test]
async fn test_failed_load_shows_notice_in_both_views() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = site_news::news::http_client::create_http_client_with_timeout(5).unwrap();
    let store = NewsStore::new(NewsSource::remote(
        client,
        format!("{}/news.json", mock_server.uri()),
    ));
    let mut site = Site::new(store, Document::site_skeleton(), "#news/hello-world");

    site.run(&mut ScriptedEvents::new([SiteEvent::DomContentLoaded]))
        .await;

    let doc = site.surface();
    assert_eq!(text_of(doc, "news-list"), "Newsを読み込めませんでした。");
    assert_eq!(
        text_of(doc, "news-detail-content"),
        "Newsを読み込めませんでした。"
    );
}

#[tokio::test]
async fn test_route_waits_for_slow_load() {
    let mock_server = MockServer::start().await;
    let document = TestDataBuilder::news_document(&[TestDataBuilder::create_full_entry("slow")]);
    Mock::given(method("GET"))
        .and(path("/news.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(document)
                .set_delay(Duration::from_millis(250)),
        )
        .mount(&mock_server)
        .await;

    let client = site_news::news::http_client::create_http_client_with_timeout(5).unwrap();
    let store = NewsStore::new(NewsSource::remote(
        client,
        format!("{}/news.json", mock_server.uri()),
    ));
    let mut site = Site::new(store, Document::site_skeleton(), "#news/slow");

    site.dispatch(SiteEvent::DomContentLoaded).await;

    assert!(text_of(site.surface(), "news-detail-content").contains("Full story slow"));
}

#[tokio::test]
async fn test_list_shows_ten_highest_ranked() {
    let mut entries = TestDataBuilder::create_daily_entries(14);
    entries.push(TestDataBuilder::create_pinned_entry("pinned", "2020.01.01"));
    let (_dir, store) = file_store(&TestDataBuilder::news_document(&entries)).await;
    let mut site = Site::new(store, Document::site_skeleton(), "");

    site.run(&mut ScriptedEvents::new([SiteEvent::DomContentLoaded]))
        .await;

    let list = site.surface().element("news-list").unwrap();
    let hrefs: Vec<&str> = list.children.iter().filter_map(|c| c.attr("href")).collect();
    assert_eq!(hrefs.len(), 10);
    assert_eq!(hrefs[0], "#news/pinned");
    assert_eq!(hrefs[1], "#news/day-14");
    assert_eq!(hrefs[9], "#news/day-6");
}

#[tokio::test]
async fn test_empty_document_shows_no_news() {
    let (_dir, store) = file_store(r#"{"items": []}"#).await;
    let mut site = Site::new(store, Document::site_skeleton(), "");

    site.run(&mut ScriptedEvents::new([SiteEvent::DomContentLoaded]))
        .await;

    assert_eq!(
        text_of(site.surface(), "news-list"),
        "現在お知らせはありません。"
    );
}

#[tokio::test]
async fn test_items_with_odd_fields_still_render_cards() {
    let (_dir, store) = file_store(
        r#"{"items": [
            {"slug": "a", "date": "2024.03.09", "tags": "launch"},
            {"slug": "b", "date": 20240310},
            {"slug": "c", "date": "2024.03.08", "body": "single line"}
        ]}"#,
    )
    .await;
    let mut site = Site::new(store, Document::site_skeleton(), "");

    site.run(&mut ScriptedEvents::new([SiteEvent::DomContentLoaded]))
        .await;

    let list = site.surface().element("news-list").unwrap();
    let hrefs: Vec<&str> = list.children.iter().filter_map(|c| c.attr("href")).collect();
    assert_eq!(hrefs, ["#news/b", "#news/a", "#news/c"]);
}

#[tokio::test]
async fn test_cards_are_revealed_on_intersection() {
    let (_dir, store) = standard_store().await;
    let mut site = Site::new(store, Document::site_skeleton(), "");

    site.run(&mut ScriptedEvents::new([
        SiteEvent::DomContentLoaded,
        SiteEvent::Intersect {
            id: "news-card-0".to_string(),
            ratio: 0.5,
        },
        SiteEvent::Intersect {
            id: "news-card-1".to_string(),
            ratio: 0.01,
        },
    ]))
    .await;

    assert!(site.reveal().is_observed("news"));
    assert!(site.surface().has_class("news-card-0", "active"));
    assert!(!site.surface().has_class("news-card-1", "active"));
}

#[tokio::test]
async fn test_scroll_and_menu_chrome() {
    let (_dir, store) = standard_store().await;
    let mut site = Site::new(store, Document::site_skeleton(), "");

    site.run(&mut ScriptedEvents::new([
        SiteEvent::DomContentLoaded,
        SiteEvent::Scroll { y: 300.0 },
        SiteEvent::MenuToggle,
    ]))
    .await;
    assert!(site.surface().has_class("header", "py-2"));
    assert!(site.surface().has_class("mobile-menu", "active"));

    site.dispatch(SiteEvent::HashChange("#news/day-1".to_string()))
        .await;
    assert!(!site.surface().has_class("mobile-menu", "active"));
    assert_eq!(site.surface().scroll_y(), 0.0);
}

#[tokio::test]
async fn test_rendered_page_serialises() {
    let (_dir, store) = standard_store().await;
    let mut site = Site::new(store, Document::site_skeleton(), "#news/hello-world");

    site.run(&mut ScriptedEvents::new([SiteEvent::DomContentLoaded]))
        .await;
    let html = site.into_surface().to_html();

    assert!(html.contains("href=\"#news/hello-world\""));
    assert!(html.contains("rel=\"noopener noreferrer\""));
    assert!(html.contains("<li>Hall A</li>"));
}
