use std::sync::Arc;

use tokio::sync::Mutex;
use welf_core::StoryCategory;

use crate::fetch::StoryFeedClient;
use crate::state::StoryFeed;

/// Drives a [`StoryFeed`] against the live endpoint.
///
/// Tokens are handed out under the state lock and the lock is released for
/// the duration of the fetch, so overlapping queries are allowed and the most
/// recently started one wins.
#[derive(Debug, Clone)]
pub struct FeedController {
    client: StoryFeedClient,
    state: Arc<Mutex<StoryFeed>>,
}

impl FeedController {
    pub fn new(client: StoryFeedClient, feed: StoryFeed) -> Self {
        Self { client, state: Arc::new(Mutex::new(feed)) }
    }

    pub async fn snapshot(&self) -> StoryFeed {
        self.state.lock().await.clone()
    }

    /// Queries the current tab and page. Returns `false` when a later query
    /// superseded this one.
    pub async fn refresh(&self) -> bool {
        let request = self.state.lock().await.begin_request();
        let outcome = self.client.fetch_page(request.category, request.page, request.limit).await;
        self.state.lock().await.apply(request, outcome)
    }

    pub async fn select_category(&self, category: StoryCategory) -> bool {
        let changed = self.state.lock().await.set_category(category);
        changed && self.refresh().await
    }

    pub async fn next_page(&self) -> bool {
        let moved = self.state.lock().await.next_page();
        moved && self.refresh().await
    }

    pub async fn prev_page(&self) -> bool {
        let moved = self.state.lock().await.prev_page();
        moved && self.refresh().await
    }

    pub async fn go_to_page(&self, page: usize) -> bool {
        let moved = self.state.lock().await.go_to_page(page);
        moved && self.refresh().await
    }

    /// Jumps to `category`/`page` and queries it.
    pub async fn load(&self, category: StoryCategory, page: usize) -> bool {
        self.state.lock().await.jump_to(category, page);
        self.refresh().await
    }
}
