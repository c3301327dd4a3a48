//! Story feed view state.
//!
//! Every query gets a token from a monotonically increasing counter. Only the
//! response carrying the latest token may update the state; anything older
//! was superseded by a later tab or page change and is dropped.

use welf_core::constants::FEED_PAGE_SIZE;
use welf_core::motion::{DEFAULT_STAGGER_SECS, Staggered, stagger};
use welf_core::{Story, StoryCategory, StoryPage, StoryQuery, paginate};

use crate::error::FeedError;
use crate::fallback::fallback_stories;

/// Shown while fallback stories are on screen.
pub const FALLBACK_WARNING: &str =
    "Unable to load the latest stories. Showing saved stories instead.";

/// A query the feed wants answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedRequest {
    pub token: u64,
    pub category: StoryCategory,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoryFeed {
    category: StoryCategory,
    page: usize,
    limit: usize,
    stories: Vec<Story>,
    total: usize,
    total_pages: usize,
    loading: bool,
    warning: Option<String>,
    latest_token: u64,
}

impl Default for StoryFeed {
    fn default() -> Self {
        Self::new(StoryCategory::Latest, FEED_PAGE_SIZE)
    }
}

impl StoryFeed {
    pub fn new(category: StoryCategory, limit: usize) -> Self {
        Self {
            category,
            page: 1,
            limit: limit.max(1),
            stories: Vec::new(),
            total: 0,
            total_pages: 0,
            loading: false,
            warning: None,
            latest_token: 0,
        }
    }

    pub fn category(&self) -> StoryCategory {
        self.category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Non-fatal notice, set while fallback stories are displayed.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Switches tab. Returns whether anything changed; the page resets to 1.
    pub fn set_category(&mut self, category: StoryCategory) -> bool {
        if self.category == category && self.page == 1 {
            return false;
        }
        self.category = category;
        self.page = 1;
        true
    }

    /// Moves to `page`, clamped to `[1, total_pages]`. Returns whether it moved.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.total_pages.max(1));
        let moved = target != self.page;
        self.page = target;
        moved
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_sub(1))
    }

    /// Jumps to `category`/`page` without clamping, as when restoring a link.
    pub fn jump_to(&mut self, category: StoryCategory, page: usize) {
        self.category = category;
        self.page = page.max(1);
    }

    /// Page numbers to render under the feed.
    pub fn page_indicators(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }

    /// Displayed stories, each with its entrance delay.
    pub fn staggered_stories(&self) -> Vec<Staggered<&Story>> {
        stagger(&self.stories, DEFAULT_STAGGER_SECS)
    }

    /// Issues a token for the current category and page and marks the feed loading.
    pub fn begin_request(&mut self) -> FeedRequest {
        self.latest_token += 1;
        self.loading = true;
        FeedRequest {
            token: self.latest_token,
            category: self.category,
            page: self.page,
            limit: self.limit,
        }
    }

    /// Applies the outcome of `request`. Returns `false` when the request was
    /// superseded and its outcome ignored.
    ///
    /// A failure shows the matching slice of the fallback collection and sets
    /// the warning; the failure itself is only logged.
    pub fn apply(&mut self, request: FeedRequest, outcome: Result<StoryPage, FeedError>) -> bool {
        if request.token != self.latest_token {
            tracing::debug!(
                token = request.token,
                latest = self.latest_token,
                "discarding superseded story response"
            );
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(page) => {
                self.warning = None;
                self.show(page);
            },
            Err(e) => {
                tracing::warn!(error = %e, "story fetch failed, showing fallback stories");
                self.warning = Some(FALLBACK_WARNING.to_owned());
                let query = StoryQuery {
                    category: Some(request.category),
                    page: request.page,
                    limit: request.limit,
                };
                self.show(paginate(&fallback_stories(), &query));
            },
        }
        true
    }

    fn show(&mut self, page: StoryPage) {
        self.stories = page.data;
        self.total = page.total;
        self.total_pages = page.total_pages;
    }
}
