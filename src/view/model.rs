//! Display-independent description of the news views
//!
//! Everything here is a pure function of the collection, so ordering,
//! truncation, badge styling and body grouping are testable without a surface.

use crate::constants::{BULLET_MARKER, NEWS_LIMIT, messages};
use crate::news::{NewsCollection, NewsEntry, order};
use crate::router::Route;

/// Badge colour family of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    News,
    Product,
    Event,
    Info,
    Other,
}

impl BadgeStyle {
    /// Case-insensitive category lookup; unknown or missing categories get `Other`.
    pub fn for_category(category: Option<&str>) -> Self {
        match category.unwrap_or_default().to_uppercase().as_str() {
            "NEWS" => Self::News,
            "PRODUCT" => Self::Product,
            "EVENT" => Self::Event,
            "INFO" => Self::Info,
            _ => Self::Other,
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            Self::News => "bg-amber-100 text-amber-800",
            Self::Product => "bg-cyan-100 text-cyan-800",
            Self::Event => "bg-purple-100 text-purple-800",
            Self::Info => "bg-emerald-100 text-emerald-800",
            Self::Other => "bg-slate-100 text-slate-600",
        }
    }
}

/// Date, category badge and title of one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub href: String,
    pub date: String,
    pub category: String,
    pub badge: BadgeStyle,
    pub title: String,
}

impl CardView {
    pub fn from_entry(entry: &NewsEntry) -> Self {
        let route = match entry.linkable_slug() {
            Some(slug) => Route::Detail(slug.to_string()),
            None => Route::List,
        };

        Self {
            href: route.fragment(),
            date: entry.date_text().to_string(),
            category: entry.category_label().to_string(),
            badge: BadgeStyle::for_category(entry.category.as_deref()),
            title: entry.title_text().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// The last load failed.
    Unavailable,
    /// Loaded fine, nothing to show.
    Empty,
    Cards(Vec<CardView>),
}

impl ListView {
    pub fn build(collection: &NewsCollection) -> Self {
        if collection.load_failed {
            return Self::Unavailable;
        }

        let cards: Vec<CardView> = order(&collection.entries)
            .iter()
            .take(NEWS_LIMIT)
            .map(CardView::from_entry)
            .collect();

        if cards.is_empty() {
            Self::Empty
        } else {
            Self::Cards(cards)
        }
    }
}

/// One block of an article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    List(Vec<String>),
}

/// Groups body lines into paragraphs and bullet lists.
///
/// Consecutive lines starting with `"- "` become the items of one list, with
/// the marker removed. Any other line closes the open list and becomes its
/// own paragraph.
///
/// ```
/// use site_news::view::model::{Block, group_body_blocks};
///
/// let lines = ["a", "- b", "- c", "d"].map(String::from);
/// assert_eq!(
///     group_body_blocks(&lines),
///     vec![
///         Block::Paragraph("a".into()),
///         Block::List(vec!["b".into(), "c".into()]),
///         Block::Paragraph("d".into()),
///     ]
/// );
/// ```
pub fn group_body_blocks(lines: &[String]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut open_list: Option<Vec<String>> = None;

    for line in lines {
        if let Some(item) = line.strip_prefix(BULLET_MARKER) {
            open_list.get_or_insert_with(Vec::new).push(item.to_string());
            continue;
        }

        if let Some(items) = open_list.take() {
            blocks.push(Block::List(items));
        }
        blocks.push(Block::Paragraph(line.clone()));
    }

    if let Some(items) = open_list {
        blocks.push(Block::List(items));
    }

    blocks
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverView {
    pub src: String,
    pub alt: String,
}

/// Everything the detail page shows for one entry, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub headline: String,
    pub date: String,
    pub category: String,
    pub badge: BadgeStyle,
    pub tags: Vec<String>,
    pub cover: Option<CoverView>,
    pub blocks: Vec<Block>,
    pub external_url: Option<String>,
}

impl ArticleView {
    pub fn from_entry(entry: &NewsEntry) -> Self {
        let alt = match entry.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => messages::COVER_ALT_FALLBACK,
        };

        Self {
            headline: entry.title_text().to_string(),
            date: entry.date_text().to_string(),
            category: entry.category_label().to_string(),
            badge: BadgeStyle::for_category(entry.category.as_deref()),
            tags: entry.tags().to_vec(),
            cover: entry.cover_url().map(|src| CoverView {
                src: src.to_string(),
                alt: alt.to_string(),
            }),
            blocks: group_body_blocks(entry.body_lines()),
            external_url: entry.external_link().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// The last load failed.
    Unavailable,
    /// Loaded fine, no entry has this slug.
    NotFound,
    Article(Box<ArticleView>),
}

impl DetailView {
    pub fn build(collection: &NewsCollection, slug: &str) -> Self {
        if collection.load_failed {
            return Self::Unavailable;
        }

        match collection.find_by_slug(slug) {
            Some(entry) => Self::Article(Box::new(ArticleView::from_entry(entry))),
            None => Self::NotFound,
        }
    }
}
