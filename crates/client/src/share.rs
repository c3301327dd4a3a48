use reqwest::Url;

use crate::error::FeedError;

const TWEET_INTENT: &str = "https://twitter.com/intent/tweet";

/// Text of the tweet offered for a story.
pub fn share_text(title: &str) -> String {
    format!("{title}\n\nRead more about animal welfare: #WELF #AnimalWelfare")
}

/// Tweet-intent link prefilled with [`share_text`].
pub fn twitter_share_url(title: &str) -> Result<Url, FeedError> {
    Url::parse_with_params(TWEET_INTENT, &[("text", share_text(title))])
        .map_err(|e| FeedError::InvalidUrl(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_link_round_trips_text() {
        let url = twitter_share_url("Turtle & friends: 100% saved?").unwrap();
        assert_eq!(url.host_str(), Some("twitter.com"));
        assert_eq!(url.path(), "/intent/tweet");
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "text");
        assert_eq!(
            value,
            "Turtle & friends: 100% saved?\n\nRead more about animal welfare: #WELF #AnimalWelfare"
        );
    }

    #[test]
    fn hashes_are_escaped() {
        let url = twitter_share_url("x").unwrap();
        assert!(url.fragment().is_none());
        assert!(url.as_str().contains("%23WELF"));
    }
}
