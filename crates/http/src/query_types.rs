//! Request/query types (Deserialize)
//!
//! Every parameter arrives as an optional string and is parsed here so that
//! malformed values produce the API's JSON error body instead of the
//! extractor's plain-text rejection.

use serde::Deserialize;
use welf_core::constants::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, FLAT_HIT_RADIUS_PCT, GLOBE_HIT_RADIUS, MARKER_RADIUS,
};
use welf_core::{ImpactCategory, ResourceFilter, StoryCategory, StoryQuery, parse_impact_filter};
use welf_geo::{Rotation, ScreenPoint};

use crate::api_error::ApiError;

/// Reads a leading integer the way browsers' `parseInt` does.
///
/// Leading whitespace and one sign are accepted, digits are read until the
/// first non-digit, the rest is ignored. `None` when no digit is found.
/// Values beyond `i64` saturate.
pub fn parse_int_lenient(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    seen.then_some(if negative { -value } else { value })
}

fn positive_usize(value: i64) -> usize {
    usize::try_from(value).unwrap_or(if value < 0 { 0 } else { usize::MAX })
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn parse_f64(name: &str, value: Option<&String>, default: f64) -> Result<f64, ApiError> {
    match non_blank(value) {
        None => Ok(default),
        Some(v) => v
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| ApiError::BadRequest(format!("{name} must be a finite number, got '{v}'"))),
    }
}

fn require_f64(name: &str, value: Option<&String>) -> Result<f64, ApiError> {
    if non_blank(value).is_none() {
        return Err(ApiError::BadRequest(format!("{name} is required")));
    }
    parse_f64(name, value, 0.0)
}

#[derive(Debug, Default, Deserialize)]
pub struct StoriesParams {
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Outcome of reading the story query string.
#[derive(Debug, PartialEq, Eq)]
pub enum StoriesRequest {
    Query(StoryQuery),
    /// The category names nothing in the catalog; the answer is an empty page.
    UnknownCategory { page: usize },
}

impl StoriesParams {
    /// `page` and `limit` fall back to their defaults when they do not start
    /// with a number. `page` is clamped to 1; a `limit` outside `1..=100` is rejected.
    pub fn into_request(self) -> Result<StoriesRequest, ApiError> {
        let page = self.page.as_deref().and_then(parse_int_lenient).map_or(DEFAULT_PAGE, positive_usize);
        let limit = match self.limit.as_deref().and_then(parse_int_lenient) {
            None => DEFAULT_PAGE_SIZE,
            Some(n) if n < 1 => {
                return Err(ApiError::BadRequest("limit must be greater than 0".to_owned()));
            },
            Some(n) => positive_usize(n),
        };
        let mut query = StoryQuery::new(None, page, limit)?;
        if let Some(raw) = self.category.as_deref().filter(|c| !c.is_empty()) {
            match raw.parse::<StoryCategory>() {
                Ok(c) => query.category = Some(c),
                Err(_) => return Ok(StoriesRequest::UnknownCategory { page: query.page }),
            }
        }
        Ok(StoriesRequest::Query(query))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

impl CategoryParams {
    pub fn category(&self) -> Result<Option<ImpactCategory>, ApiError> {
        Ok(parse_impact_filter(self.category.as_deref())?)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GlobeParams {
    pub category: Option<String>,
    pub radius: Option<String>,
    pub yaw: Option<String>,
    pub pitch: Option<String>,
}

impl GlobeParams {
    pub fn category(&self) -> Result<Option<ImpactCategory>, ApiError> {
        Ok(parse_impact_filter(self.category.as_deref())?)
    }

    pub fn radius(&self) -> Result<f64, ApiError> {
        parse_f64("radius", self.radius.as_ref(), MARKER_RADIUS)
    }

    pub fn rotation(&self) -> Result<Rotation, ApiError> {
        Ok(Rotation::new(
            parse_f64("yaw", self.yaw.as_ref(), 0.0)?,
            parse_f64("pitch", self.pitch.as_ref(), 0.0)?,
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectParams {
    pub x: Option<String>,
    pub y: Option<String>,
    pub yaw: Option<String>,
    pub pitch: Option<String>,
    pub radius: Option<String>,
    pub hit_radius: Option<String>,
    pub category: Option<String>,
}

impl SelectParams {
    pub fn category(&self) -> Result<Option<ImpactCategory>, ApiError> {
        Ok(parse_impact_filter(self.category.as_deref())?)
    }

    pub fn pointer(&self) -> Result<ScreenPoint, ApiError> {
        Ok(ScreenPoint::new(require_f64("x", self.x.as_ref())?, require_f64("y", self.y.as_ref())?))
    }

    pub fn rotation(&self) -> Result<Rotation, ApiError> {
        Ok(Rotation::new(
            parse_f64("yaw", self.yaw.as_ref(), 0.0)?,
            parse_f64("pitch", self.pitch.as_ref(), 0.0)?,
        ))
    }

    pub fn radius(&self) -> Result<f64, ApiError> {
        parse_f64("radius", self.radius.as_ref(), MARKER_RADIUS)
    }

    pub fn hit_radius(&self) -> Result<f64, ApiError> {
        parse_f64("hitRadius", self.hit_radius.as_ref(), GLOBE_HIT_RADIUS)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectFlatParams {
    pub left_pct: Option<String>,
    pub top_pct: Option<String>,
    pub hit_radius: Option<String>,
    pub category: Option<String>,
}

impl SelectFlatParams {
    pub fn pointer(&self) -> Result<ScreenPoint, ApiError> {
        Ok(ScreenPoint::new(
            require_f64("leftPct", self.left_pct.as_ref())?,
            require_f64("topPct", self.top_pct.as_ref())?,
        ))
    }

    pub fn hit_radius(&self) -> Result<f64, ApiError> {
        parse_f64("hitRadius", self.hit_radius.as_ref(), FLAT_HIT_RADIUS_PCT)
    }

    pub fn category(&self) -> Result<Option<ImpactCategory>, ApiError> {
        Ok(parse_impact_filter(self.category.as_deref())?)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceParams {
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub level: Option<String>,
}

impl ResourceParams {
    pub fn filter(&self) -> Result<ResourceFilter, ApiError> {
        Ok(ResourceFilter::parse(self.resource_type.as_deref(), self.level.as_deref())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(category: Option<&str>, page: Option<&str>, limit: Option<&str>) -> StoriesParams {
        StoriesParams {
            category: category.map(str::to_owned),
            page: page.map(str::to_owned),
            limit: limit.map(str::to_owned),
        }
    }

    fn query(p: StoriesParams) -> StoryQuery {
        match p.into_request() {
            Ok(StoriesRequest::Query(q)) => q,
            other => panic!("expected a query, got {other:?}"),
        }
    }

    #[test]
    fn parse_int_like_a_browser() {
        assert_eq!(parse_int_lenient("42"), Some(42));
        assert_eq!(parse_int_lenient("  7abc"), Some(7));
        assert_eq!(parse_int_lenient("-3"), Some(-3));
        assert_eq!(parse_int_lenient("+5"), Some(5));
        assert_eq!(parse_int_lenient("2.9"), Some(2));
        assert_eq!(parse_int_lenient("abc"), None);
        assert_eq!(parse_int_lenient(""), None);
        assert_eq!(parse_int_lenient("-"), None);
        assert_eq!(parse_int_lenient("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn missing_values_use_defaults() {
        let q = query(StoriesParams::default());
        assert_eq!(q, StoryQuery::default());
    }

    #[test]
    fn garbage_values_use_defaults() {
        let q = query(params(None, Some("abc"), Some("xyz")));
        assert_eq!((q.page, q.limit), (1, 10));
    }

    #[test]
    fn page_is_clamped_to_one() {
        assert_eq!(query(params(None, Some("0"), None)).page, 1);
        assert_eq!(query(params(None, Some("-4"), None)).page, 1);
    }

    #[test]
    fn limit_above_maximum_is_rejected() {
        assert_eq!(query(params(None, None, Some("100"))).limit, 100);
        let err = params(None, None, Some("5000")).into_request().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m.contains("at most 100")));
    }

    #[test]
    fn zero_or_negative_limit_is_rejected() {
        for limit in ["0", "-1"] {
            let err = params(None, None, Some(limit)).into_request().unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(_)), "limit {limit}");
        }
    }

    #[test]
    fn category_is_exact_match() {
        assert_eq!(query(params(Some("featured"), None, None)).category, Some(StoryCategory::Featured));
        assert_eq!(
            params(Some("Featured"), Some("2"), None).into_request().unwrap(),
            StoriesRequest::UnknownCategory { page: 2 }
        );
        assert_eq!(query(params(Some(""), None, None)).category, None);
    }

    #[test]
    fn select_requires_pointer() {
        let err = SelectParams::default().pointer().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m.contains('x')));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let p = GlobeParams { radius: Some("NaN".to_owned()), ..GlobeParams::default() };
        assert!(p.radius().is_err());
        let p = GlobeParams { yaw: Some("inf".to_owned()), ..GlobeParams::default() };
        assert!(p.rotation().is_err());
    }

    #[test]
    fn select_defaults() {
        let p = SelectParams {
            x: Some("0.5".to_owned()),
            y: Some("-0.25".to_owned()),
            ..SelectParams::default()
        };
        assert_eq!(p.pointer().unwrap(), ScreenPoint::new(0.5, -0.25));
        assert_eq!(p.radius().unwrap(), MARKER_RADIUS);
        assert_eq!(p.hit_radius().unwrap(), GLOBE_HIT_RADIUS);
        assert_eq!(p.rotation().unwrap(), Rotation::default());
    }
}
