use tracing::trace;

use super::node::Node;
use super::Surface;
use crate::constants::{classes, elements, pages};

/// In-memory page: a body element tree plus the window scroll state.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    body: Node,
    scroll_y: f64,
    scroll_anchor: Option<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            body: Node::new("body").with_children(children),
            scroll_y: 0.0,
            scroll_anchor: None,
        }
    }

    /// The markup of the site: header with menu toggle, mobile menu, and the
    /// home, news-detail and about panels. Home is the active panel.
    pub fn site_skeleton() -> Self {
        let panel = |id: &str| {
            Node::new("section")
                .with_id(format!("{}{id}", pages::ID_PREFIX))
                .with_classes(pages::PANEL_CLASS)
        };

        let header = Node::new("header")
            .with_id(elements::HEADER)
            .with_classes("fixed top-0 w-full z-50 transition-all")
            .with_classes(classes::HEADER_RELAXED)
            .with_child(
                Node::new("button")
                    .with_id(elements::MENU_TOGGLE)
                    .with_attr("aria-label", "Menu"),
            );

        let mobile_menu = Node::new("nav")
            .with_id(elements::MOBILE_MENU)
            .with_classes("mobile-menu");

        let home = panel(pages::HOME).with_classes(classes::ACTIVE).with_child(
            Node::new("section")
                .with_id(elements::NEWS_SECTION)
                .with_classes(classes::REVEAL)
                .with_child(Node::new("h2").with_text("News"))
                .with_child(
                    Node::new("div")
                        .with_id(elements::NEWS_LIST)
                        .with_classes("flex overflow-x-auto gap-6 snap-x"),
                ),
        );

        let detail = panel(pages::NEWS_DETAIL)
            .with_child(
                Node::new("button")
                    .with_id(elements::NEWS_BACK)
                    .with_text("Back to News"),
            )
            .with_child(
                Node::new("article")
                    .with_id(elements::NEWS_DETAIL_CONTENT)
                    .with_classes("space-y-8"),
            );

        let about = panel(pages::ABOUT).with_child(
            Node::new("div")
                .with_id("about-intro")
                .with_classes(classes::REVEAL)
                .with_child(Node::new("h2").with_text("About")),
        );

        Self::new(vec![
            header,
            mobile_menu,
            Node::new("main").with_children([home, detail, about]),
        ])
    }

    pub fn body(&self) -> &Node {
        &self.body
    }

    pub fn element(&self, id: &str) -> Option<&Node> {
        self.body.find(id)
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Element most recently scrolled into view.
    pub fn scroll_anchor(&self) -> Option<&str> {
        self.scroll_anchor.as_deref()
    }

    /// Ids of page panels currently carrying `active`.
    pub fn active_pages(&self) -> Vec<String> {
        self.body
            .find_all_by_class(pages::PANEL_CLASS)
            .into_iter()
            .filter(|node| node.has_class(classes::ACTIVE))
            .filter_map(|node| node.id.clone())
            .collect()
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}", self.body.to_html())
    }
}

impl Surface for Document {
    fn contains(&self, id: &str) -> bool {
        self.body.find(id).is_some()
    }

    fn replace_children(&mut self, id: &str, children: Vec<Node>) -> bool {
        match self.body.find_mut(id) {
            Some(node) => {
                trace!(id, count = children.len(), "Replacing children");
                node.text = None;
                node.children = children;
                true
            }
            None => false,
        }
    }

    fn add_class(&mut self, id: &str, class: &str) -> bool {
        self.body
            .find_mut(id)
            .is_some_and(|node| node.add_class(class))
    }

    fn remove_class(&mut self, id: &str, class: &str) -> bool {
        self.body
            .find_mut(id)
            .is_some_and(|node| node.remove_class(class))
    }

    fn toggle_class(&mut self, id: &str, class: &str) -> Option<bool> {
        self.body.find_mut(id).map(|node| node.toggle_class(class))
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.body.find(id).is_some_and(|node| node.has_class(class))
    }

    fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.body
            .find_all_by_class(class)
            .into_iter()
            .filter_map(|node| node.id.clone())
            .collect()
    }

    fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
    }

    fn scroll_into_view(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.scroll_anchor = Some(id.to_string());
        true
    }
}
