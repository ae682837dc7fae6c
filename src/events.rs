//! Browser events as data
//!
//! The site reacts to a stream of [`SiteEvent`]s pulled from an
//! [`EventSource`]. The binary feeds a channel; tests use a fixed script.

use std::collections::VecDeque;
use std::future::Future;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum SiteEvent {
    /// The page finished parsing; starts the news load and the first route.
    DomContentLoaded,
    /// The fragment changed to the given value (typed, back/forward, link).
    HashChange(String),
    /// The window scrolled to `y`.
    Scroll { y: f64 },
    /// The mobile menu toggle was clicked.
    MenuToggle,
    /// The back-to-list control was clicked.
    BackToList,
    /// An element became `ratio` visible.
    Intersect { id: String, ratio: f64 },
}

pub trait EventSource {
    /// Next event, or `None` once the source is exhausted.
    fn next_event(&mut self) -> impl Future<Output = Option<SiteEvent>> + Send;
}

/// Fixed sequence of events.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<SiteEvent>,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = SiteEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: SiteEvent) {
        self.queue.push_back(event);
    }
}

impl EventSource for ScriptedEvents {
    async fn next_event(&mut self) -> Option<SiteEvent> {
        self.queue.pop_front()
    }
}

/// Receiving end of an event channel; exhausted when every sender is dropped.
#[derive(Debug)]
pub struct ChannelEvents {
    receiver: mpsc::UnboundedReceiver<SiteEvent>,
}

impl ChannelEvents {
    pub fn channel() -> (mpsc::UnboundedSender<SiteEvent>, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (sender, Self { receiver })
    }
}

impl EventSource for ChannelEvents {
    async fn next_event(&mut self) -> Option<SiteEvent> {
        self.receiver.recv().await
    }
}
