//! Display surface abstraction
//!
//! Site logic never touches a real browser. It reads and writes class
//! membership and children of named elements through [`Surface`]; the
//! in-memory [`Document`] is the implementation used by the binary and tests.

pub mod document;
pub mod node;

pub use document::Document;
pub use node::{Node, escape_html};

/// Named-element operations the site needs from its display.
///
/// Operations on an id that does not exist do nothing and report `false`.
pub trait Surface {
    fn contains(&self, id: &str) -> bool;

    /// Drops every child of `id` and appends `children` in order.
    fn replace_children(&mut self, id: &str, children: Vec<Node>) -> bool;

    fn add_class(&mut self, id: &str, class: &str) -> bool;

    fn remove_class(&mut self, id: &str, class: &str) -> bool;

    /// Returns whether the class is present afterwards, `None` if `id` is missing.
    fn toggle_class(&mut self, id: &str, class: &str) -> Option<bool>;

    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Ids of all elements carrying `class`, in document order.
    fn ids_with_class(&self, class: &str) -> Vec<String>;

    /// Jumps the window to vertical offset `y`.
    fn scroll_to(&mut self, y: f64);

    /// Smoothly scrolls `id` into view.
    fn scroll_into_view(&mut self, id: &str) -> bool;
}
