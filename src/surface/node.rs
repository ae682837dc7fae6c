//! Element tree written by the renderers

/// Elements serialised without a closing tag
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// A DOM-like element: tag, id, class list, attributes, text and children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds every whitespace-separated class of `classes`.
    pub fn with_classes(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    /// Sets an attribute, replacing an earlier value of the same name.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns false when the class was already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Returns false when the class was not present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Flips the class and returns whether it is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.remove_class(class) {
            false
        } else {
            self.add_class(class)
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Own text followed by the text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Descendants (and self) with the given tag, in document order.
    pub fn find_all_by_tag<'a>(&'a self, tag: &str) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect_by(&|node| node.tag == tag, &mut found);
        found
    }

    /// Descendants (and self) carrying `class`, in document order.
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect_by(&|node| node.has_class(class), &mut found);
        found
    }

    fn collect_by<'a>(&'a self, pred: &dyn Fn(&Node) -> bool, out: &mut Vec<&'a Node>) {
        if pred(self) {
            out.push(self);
        }
        for child in &self.children {
            child.collect_by(pred, out);
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, 0);
        out
    }

    fn write_html(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            push_attr(out, "id", id);
        }
        if !self.classes.is_empty() {
            push_attr(out, "class", &self.classes.join(" "));
        }
        for (name, value) in &self.attributes {
            push_attr(out, name, value);
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            out.push('\n');
            return;
        }

        if self.children.is_empty() {
            if let Some(text) = &self.text {
                out.push_str(&escape_html(text));
            }
        } else {
            out.push('\n');
            if let Some(text) = &self.text {
                out.push_str(&indent);
                out.push_str("  ");
                out.push_str(&escape_html(text));
                out.push('\n');
            }
            for child in &self.children {
                child.write_html(out, depth + 1);
            }
            out.push_str(&indent);
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push_str(">\n");
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

/// Escapes the five characters with meaning in HTML text and attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_operations() {
        let mut node = Node::new("div").with_classes("a  b a");
        assert_eq!(node.classes, ["a", "b"]);

        assert!(!node.add_class("a"));
        assert!(node.remove_class("a"));
        assert!(!node.remove_class("a"));
        assert!(node.toggle_class("c"));
        assert!(!node.toggle_class("c"));
        assert_eq!(node.classes, ["b"]);
    }

    #[test]
    fn test_with_attr_replaces() {
        let node = Node::new("a").with_attr("href", "#x").with_attr("href", "#y");
        assert_eq!(node.attr("href"), Some("#y"));
        assert_eq!(node.attributes.len(), 1);
    }

    #[test]
    fn test_find_and_text_content() {
        let tree = Node::new("section").with_id("outer").with_child(
            Node::new("div")
                .with_id("inner")
                .with_child(Node::new("p").with_text("one"))
                .with_child(Node::new("p").with_text("two")),
        );

        assert_eq!(tree.find("inner").map(|n| n.tag.as_str()), Some("div"));
        assert!(tree.find("missing").is_none());
        assert_eq!(tree.text_content(), "onetwo");
        assert_eq!(tree.find_all_by_tag("p").len(), 2);
    }

    #[test]
    fn test_to_html_escapes_and_closes() {
        let node = Node::new("p")
            .with_classes("note")
            .with_attr("title", "a \"quote\"")
            .with_text("<b> & co")
            .with_child(Node::new("img").with_attr("src", "/x.png"));

        let html = node.to_html();
        assert!(html.starts_with("<p class=\"note\" title=\"a &quot;quote&quot;\">"));
        assert!(html.contains("&lt;b&gt; &amp; co"));
        assert!(html.contains("<img src=\"/x.png\">\n"));
        assert!(!html.contains("</img>"));
        assert!(html.ends_with("</p>\n"));
    }
}
