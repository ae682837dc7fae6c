//! Writes news views onto a surface
//!
//! Each render replaces the whole target region, so repeated calls never
//! leave stale nodes behind.

use tracing::debug;

use super::model::{ArticleView, Block, CardView, DetailView, ListView};
use crate::constants::{classes, elements, messages};
use crate::news::NewsStore;
use crate::surface::{Node, Surface};

/// Renders the list and detail views from a store's current state.
pub struct ViewRenderer<'a> {
    store: &'a NewsStore,
}

impl<'a> ViewRenderer<'a> {
    pub fn new(store: &'a NewsStore) -> Self {
        Self { store }
    }

    /// Paints the news list and returns the ids of the cards it created.
    ///
    /// Nothing happens when the surface has no list region.
    pub fn render_list<S: Surface>(&self, surface: &mut S) -> Vec<String> {
        if !surface.contains(elements::NEWS_LIST) {
            debug!("No news list region, skipping list render");
            return Vec::new();
        }

        let view = self.store.with_collection(ListView::build);
        let (nodes, card_ids) = list_nodes(&view);
        debug!(cards = card_ids.len(), "Rendering news list");

        surface.replace_children(elements::NEWS_LIST, nodes);
        card_ids
    }

    /// Paints the detail view of `slug`.
    pub fn render_detail<S: Surface>(&self, surface: &mut S, slug: &str) {
        if !surface.contains(elements::NEWS_DETAIL_CONTENT) {
            debug!("No news detail region, skipping detail render");
            return;
        }

        let view = self
            .store
            .with_collection(|collection| DetailView::build(collection, slug));
        debug!(slug, "Rendering news detail");

        surface.replace_children(elements::NEWS_DETAIL_CONTENT, detail_nodes(&view));
    }
}

fn notice(class_list: &str, text: &str) -> Node {
    Node::new("p").with_classes(class_list).with_text(text)
}

fn badge(category: &str, style_classes: &str) -> Node {
    Node::new("span")
        .with_classes(style_classes)
        .with_classes(classes::BADGE)
        .with_text(category)
}

fn list_nodes(view: &ListView) -> (Vec<Node>, Vec<String>) {
    match view {
        ListView::Unavailable => (
            vec![notice(classes::LIST_NOTICE, messages::LOAD_FAILED)],
            Vec::new(),
        ),
        ListView::Empty => (
            vec![notice(classes::LIST_NOTICE, messages::NO_NEWS)],
            Vec::new(),
        ),
        ListView::Cards(cards) => cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let id = format!("{}{index}", elements::CARD_ID_PREFIX);
                (card_node(card, &id), id)
            })
            .unzip(),
    }
}

fn card_node(card: &CardView, id: &str) -> Node {
    let row = Node::new("div")
        .with_classes(classes::CARD_ROW)
        .with_child(
            Node::new("span")
                .with_classes(classes::CARD_DATE)
                .with_text(&card.date),
        )
        .with_child(badge(&card.category, card.badge.classes()))
        .with_child(
            Node::new("p")
                .with_classes(classes::CARD_TITLE)
                .with_text(&card.title),
        );

    Node::new("a")
        .with_id(id)
        .with_attr("href", &card.href)
        .with_classes(classes::CARD)
        .with_child(row)
}

fn detail_nodes(view: &DetailView) -> Vec<Node> {
    match view {
        DetailView::Unavailable => vec![notice(classes::DETAIL_NOTICE, messages::LOAD_FAILED)],
        DetailView::NotFound => vec![
            Node::new("h2")
                .with_classes(classes::NOT_FOUND_TITLE)
                .with_text(messages::NOT_FOUND_TITLE),
            notice(classes::DETAIL_NOTICE, messages::NOT_FOUND_HINT),
        ],
        DetailView::Article(article) => article_nodes(article),
    }
}

fn article_nodes(article: &ArticleView) -> Vec<Node> {
    let mut nodes = vec![
        Node::new("h1")
            .with_classes(classes::HEADLINE)
            .with_text(&article.headline),
        Node::new("div")
            .with_classes(classes::META_ROW)
            .with_child(
                Node::new("span")
                    .with_classes(classes::META_DATE)
                    .with_text(&article.date),
            )
            .with_child(badge(&article.category, article.badge.classes())),
    ];

    if !article.tags.is_empty() {
        nodes.push(
            Node::new("div")
                .with_classes(classes::TAG_WRAP)
                .with_children(article.tags.iter().map(|tag| {
                    Node::new("span")
                        .with_classes(classes::TAG_CHIP)
                        .with_text(tag)
                })),
        );
    }

    if let Some(cover) = &article.cover {
        nodes.push(
            Node::new("div").with_classes(classes::COVER_WRAP).with_child(
                Node::new("img")
                    .with_attr("src", &cover.src)
                    .with_attr("alt", &cover.alt)
                    .with_classes(classes::COVER_IMAGE),
            ),
        );
    }

    nodes.extend(article.blocks.iter().map(block_node));

    if let Some(url) = &article.external_url {
        nodes.push(
            Node::new("a")
                .with_attr("href", url)
                .with_attr("target", "_blank")
                .with_attr("rel", "noopener noreferrer")
                .with_classes(classes::EXTERNAL_LINK)
                .with_text(messages::RELATED_LINK),
        );
    }

    nodes
}

fn block_node(block: &Block) -> Node {
    match block {
        Block::Paragraph(text) => Node::new("p")
            .with_classes(classes::BODY_PARAGRAPH)
            .with_text(text),
        Block::List(items) => Node::new("ul")
            .with_classes(classes::BODY_LIST)
            .with_children(items.iter().map(|item| Node::new("li").with_text(item))),
    }
}
