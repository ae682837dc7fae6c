//! Site-wide constants: element ids, route tokens, class lists and notice texts
//!
//! The element ids and class lists mirror the markup of the static site, so
//! they are kept here in one place instead of being scattered across renderers.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Number of cards shown in the news list
pub const NEWS_LIMIT: usize = 10;

/// Location of the news document relative to the site root
pub const NEWS_JSON_PATH: &str = "news.json";

/// Scroll offset (px) past which the header switches to its compact padding
pub const HEADER_SCROLL_THRESHOLD: f64 = 80.0;

/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Address-bar fragments understood by the router
pub mod routes {
    /// Fragment that shows the news list on the home page
    pub const LIST_FRAGMENT: &str = "#news";

    /// Prefix of a detail fragment; the escaped slug follows it
    pub const DETAIL_PREFIX: &str = "#news/";
}

/// Page panel identifiers
pub mod pages {
    pub const HOME: &str = "home";
    pub const NEWS_DETAIL: &str = "news-detail";
    pub const ABOUT: &str = "about";

    /// Element ids of panels are `page-<id>`
    pub const ID_PREFIX: &str = "page-";

    /// Class shared by every page panel
    pub const PANEL_CLASS: &str = "page-content";
}

/// Element ids the site logic reads or writes
pub mod elements {
    pub const HEADER: &str = "header";
    pub const MOBILE_MENU: &str = "mobile-menu";
    pub const MENU_TOGGLE: &str = "menu-toggle";
    pub const NEWS_SECTION: &str = "news";
    pub const NEWS_LIST: &str = "news-list";
    pub const NEWS_DETAIL_CONTENT: &str = "news-detail-content";
    pub const NEWS_BACK: &str = "news-back";

    /// Rendered cards get `news-card-<n>` so the reveal tracker can address them
    pub const CARD_ID_PREFIX: &str = "news-card-";
}

/// Class lists applied to generated nodes
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const REVEAL: &str = "reveal";

    pub const HEADER_COMPACT: &str = "py-2";
    pub const HEADER_RELAXED: &str = "py-4";

    pub const CARD: &str = "min-w-[300px] md:min-w-[400px] snap-center shrink-0 reveal block bg-white p-6 rounded-2xl group border border-slate-100 hover:shadow-xl transition duration-500 shadow-sm";
    pub const CARD_ROW: &str = "flex flex-col md:flex-row md:items-center gap-4";
    pub const CARD_DATE: &str = "text-[10px] font-en font-bold text-slate-400 w-24 tracking-widest text-left";
    pub const CARD_TITLE: &str = "flex-1 font-bold text-slate-700 group-hover:text-slate-900 transition";
    pub const BADGE: &str = "text-[9px] font-bold px-3 py-1 rounded-full w-fit uppercase tracking-widest text-center";
    pub const LIST_NOTICE: &str = "text-xs text-slate-400 tracking-wide";

    pub const DETAIL_NOTICE: &str = "text-sm text-slate-500";
    pub const NOT_FOUND_TITLE: &str = "text-2xl font-black text-slate-900";
    pub const HEADLINE: &str = "text-3xl md:text-5xl font-black text-slate-900 leading-tight";
    pub const META_ROW: &str = "flex flex-wrap items-center gap-3";
    pub const META_DATE: &str = "text-[10px] font-en font-bold text-slate-400 tracking-widest";
    pub const TAG_WRAP: &str = "flex flex-wrap gap-2";
    pub const TAG_CHIP: &str = "text-[9px] font-bold uppercase tracking-widest text-slate-500 border border-slate-200 rounded-full px-3 py-1";
    pub const COVER_WRAP: &str = "rounded-[2.5rem] overflow-hidden border border-slate-100 shadow-sm";
    pub const COVER_IMAGE: &str = "w-full h-auto object-cover";
    pub const BODY_LIST: &str = "list-disc list-inside text-slate-600 text-sm md:text-base leading-loose";
    pub const BODY_PARAGRAPH: &str = "text-slate-600 text-sm md:text-base leading-loose";
    pub const EXTERNAL_LINK: &str = "inline-flex items-center px-6 py-3 bg-slate-900 text-white rounded-full font-bold text-[10px] uppercase tracking-widest hover:bg-cyan-600 transition shadow-lg";
}

/// Visible texts
pub mod messages {
    pub const LOAD_FAILED: &str = "Newsを読み込めませんでした。";
    pub const NO_NEWS: &str = "現在お知らせはありません。";
    pub const NOT_FOUND_TITLE: &str = "記事が見つかりません。";
    pub const NOT_FOUND_HINT: &str = "一覧へ戻って別の記事をご確認ください。";
    pub const RELATED_LINK: &str = "Related Link";
    pub const COVER_ALT_FALLBACK: &str = "News cover";
    pub const CATEGORY_FALLBACK: &str = "INFO";
}

/// Marker that turns a body line into a bullet item
pub const BULLET_MARKER: &str = "- ";
