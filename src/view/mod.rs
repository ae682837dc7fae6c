pub mod model;
pub mod renderer;

pub use model::{ArticleView, BadgeStyle, Block, CardView, DetailView, ListView, group_body_blocks};
pub use renderer::ViewRenderer;
