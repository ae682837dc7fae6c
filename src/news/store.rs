//! Session-wide news state
//!
//! `NewsStore` owns the loaded collection, the failure flag and the readiness
//! handle of the current load. It is cheap to clone; clones share state.

use futures::future::{BoxFuture, FutureExt, Shared};
use reqwest::Client;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, error, info, warn};

use super::fetch::{fetch_news, read_news_file};
use super::models::{NewsCollection, NewsEntry};
use crate::error::AppError;

/// One-shot completion handle of a load. Cloneable; every clone resolves
/// once the load has settled, successfully or not.
pub type Readiness = Shared<BoxFuture<'static, ()>>;

/// Where the news document comes from.
#[derive(Debug, Clone)]
pub enum NewsSource {
    Remote { client: Client, url: String },
    Local(PathBuf),
}

impl NewsSource {
    pub fn remote(client: Client, url: impl Into<String>) -> Self {
        Self::Remote {
            client,
            url: url.into(),
        }
    }

    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::Local(path.into())
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Remote { url, .. } => url.clone(),
            Self::Local(path) => path.display().to_string(),
        }
    }

    async fn retrieve(&self) -> Result<Vec<NewsEntry>, AppError> {
        match self {
            Self::Remote { client, url } => fetch_news(client, url).await,
            Self::Local(path) => read_news_file(path).await,
        }
    }
}

struct StoreInner {
    source: Option<NewsSource>,
    collection: RwLock<NewsCollection>,
    pending: Mutex<Option<Readiness>>,
}

fn failure_kind(error: &AppError) -> &'static str {
    if error.is_network() {
        "network"
    } else if error.is_document_error() {
        "document"
    } else {
        "other"
    }
}

impl StoreInner {
    async fn run_load(&self) {
        let outcome = match &self.source {
            Some(source) => source.retrieve().await,
            None => Err(AppError::no_source("store was created without a news source")),
        };

        let next = match outcome {
            Ok(entries) => {
                info!(count = entries.len(), "News loaded");
                NewsCollection::loaded(entries)
            }
            Err(e) => {
                warn!(kind = failure_kind(&e), "News load failed: {e}");
                NewsCollection::failed()
            }
        };

        self.replace(next);
    }

    fn replace(&self, next: NewsCollection) {
        *self
            .collection
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next;
    }
}

#[derive(Clone)]
pub struct NewsStore {
    inner: Arc<StoreInner>,
}

impl NewsStore {
    /// A store that loads from `source`. Nothing is fetched until
    /// [`NewsStore::begin_load`] is called.
    pub fn new(source: NewsSource) -> Self {
        Self::build(Some(source), NewsCollection::default())
    }

    /// A store holding an already known collection and no source.
    pub fn seeded(collection: NewsCollection) -> Self {
        Self::build(None, collection)
    }

    fn build(source: Option<NewsSource>, collection: NewsCollection) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                source,
                collection: RwLock::new(collection),
                pending: Mutex::new(None),
            }),
        }
    }

    pub fn source(&self) -> Option<&NewsSource> {
        self.inner.source.as_ref()
    }

    /// Starts a load and returns its readiness handle.
    ///
    /// While a load is in flight the existing handle is returned and no second
    /// retrieval starts. After it settled, a new call starts a fresh load whose
    /// result replaces the previous collection. Must be called within a tokio
    /// runtime.
    pub fn begin_load(&self) -> Readiness {
        let mut pending = self
            .inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(ready) = pending.as_ref()
            && ready.peek().is_none()
        {
            debug!("News load already in flight, reusing its readiness handle");
            return ready.clone();
        }

        let loader = Arc::clone(&self.inner);
        let task = tokio::spawn(async move { loader.run_load().await });

        let fallback = Arc::clone(&self.inner);
        let ready = async move {
            if let Err(e) = task.await {
                error!("News load task ended abnormally: {e}");
                fallback.replace(NewsCollection::failed());
            }
        }
        .boxed()
        .shared();

        *pending = Some(ready.clone());
        ready
    }

    /// Loads the news document and waits for the outcome.
    ///
    /// Never fails: the outcome is visible through [`NewsStore::load_failed`].
    pub async fn load(&self) {
        self.begin_load().await;
    }

    /// Waits for the outstanding load, if any.
    pub async fn ready(&self) {
        let pending = self
            .inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if let Some(ready) = pending {
            ready.await;
        }
    }

    /// Runs `f` against the current collection without cloning it.
    pub fn with_collection<R>(&self, f: impl FnOnce(&NewsCollection) -> R) -> R {
        let collection = self
            .inner
            .collection
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&collection)
    }

    pub fn load_failed(&self) -> bool {
        self.with_collection(|c| c.load_failed)
    }

    pub fn len(&self) -> usize {
        self.with_collection(|c| c.entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<NewsEntry> {
        self.with_collection(|c| c.find_by_slug(slug).cloned())
    }
}
