//! Story feed types and the pagination used by `GET /api/stories`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{CoreError, Result};

/// Feed tab a story is listed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StoryCategory {
    /// Hand-picked success stories
    Featured,
    /// Chronological news
    Latest,
}

impl StoryCategory {
    pub const ALL: [Self; 2] = [Self::Featured, Self::Latest];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Latest => "latest",
        }
    }
}

impl std::fmt::Display for StoryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match: the wire values are lowercase.
impl std::str::FromStr for StoryCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "latest" => Ok(Self::Latest),
            other => Err(format!("unknown story category: {other}")),
        }
    }
}

/// A published story card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Unique identifier, stable for the process lifetime
    pub id: u32,
    pub title: String,
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Display tags; order is kept but carries no query meaning
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: StoryCategory,
}

impl Story {
    /// Checks the invariants a fixture record must hold.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidRecord` when the title is blank or the date
    /// is not an ISO calendar date.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(self.invalid("title must not be empty"));
        }
        if NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(self.invalid(&format!("date '{}' is not YYYY-MM-DD", self.date)));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> CoreError {
        CoreError::InvalidRecord { entity: "story", id: self.id, reason: reason.to_owned() }
    }
}

/// Parameters of one story listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryQuery {
    pub category: Option<StoryCategory>,
    /// 1-based, never below 1
    pub page: usize,
    /// Always in `1..=MAX_PAGE_SIZE`
    pub limit: usize,
}

impl Default for StoryQuery {
    fn default() -> Self {
        Self { category: None, page: DEFAULT_PAGE, limit: DEFAULT_PAGE_SIZE }
    }
}

impl StoryQuery {
    /// Builds a query, clamping `page` to at least 1.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidInput` when `limit` is zero or above
    /// `MAX_PAGE_SIZE`.
    pub fn new(category: Option<StoryCategory>, page: usize, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(CoreError::InvalidInput("limit must be greater than 0".to_owned()));
        }
        if limit > MAX_PAGE_SIZE {
            return Err(CoreError::InvalidInput(format!(
                "limit must be at most {MAX_PAGE_SIZE}, got {limit}"
            )));
        }
        Ok(Self { category, page: page.max(1), limit })
    }

    /// Index of the first story on this page, `None` when it does not fit in `usize`.
    pub fn start_index(&self) -> Option<usize> {
        self.page.saturating_sub(1).checked_mul(self.limit)
    }

    pub fn matches(&self, story: &Story) -> bool {
        self.category.is_none_or(|c| story.category == c)
    }
}

/// One page of stories plus the counts the pager needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoryPage {
    pub data: Vec<Story>,
    /// Size of the filtered set before pagination
    pub total: usize,
    /// Requested page, echoed back
    pub page: usize,
    pub total_pages: usize,
}

impl StoryPage {
    pub fn empty(page: usize) -> Self {
        Self { data: Vec::new(), total: 0, page, total_pages: 0 }
    }
}

/// `ceil(total / limit)`; zero stories means zero pages.
pub fn total_pages(total: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Filters `stories` by the query category and slices out the requested page.
///
/// Order is the input order. A page past the end yields an empty slice with
/// the real totals.
pub fn paginate(stories: &[Story], query: &StoryQuery) -> StoryPage {
    let filtered: Vec<&Story> = stories.iter().filter(|s| query.matches(s)).collect();
    let total = filtered.len();
    let data = match query.start_index() {
        Some(start) => filtered.into_iter().skip(start).take(query.limit).cloned().collect(),
        None => Vec::new(),
    };
    StoryPage { data, total, page: query.page, total_pages: total_pages(total, query.limit) }
}
