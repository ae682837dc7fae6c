pub mod fetch;
pub mod http_client;
pub mod models;
pub mod ordering;
pub mod store;
pub mod urls;

pub use models::{NewsCollection, NewsEntry};
pub use ordering::{date_key, order};
pub use store::{NewsSource, NewsStore, Readiness};
