//! Educational resources browser types.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Article,
    Video,
    Course,
    Guide,
}

impl std::str::FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "article" => Ok(Self::Article),
            "video" => Ok(Self::Video),
            "course" => Ok(Self::Course),
            "guide" => Ok(Self::Guide),
            other => Err(format!("unknown resource type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResourceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::str::FromStr for ResourceLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!("unknown resource level: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Human label such as "45 minutes"
    pub duration: String,
    pub level: ResourceLevel,
    pub link: String,
}

/// Both dimensions are optional; a missing one matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    pub resource_type: Option<ResourceType>,
    pub level: Option<ResourceLevel>,
}

impl ResourceFilter {
    /// Builds a filter from raw tab values where `all` disables a dimension.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidInput` for unknown type or level names.
    pub fn parse(resource_type: Option<&str>, level: Option<&str>) -> Result<Self> {
        Ok(Self {
            resource_type: parse_tab(resource_type)?,
            level: parse_tab(level)?,
        })
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        self.resource_type.is_none_or(|t| resource.resource_type == t)
            && self.level.is_none_or(|l| resource.level == l)
    }
}

fn parse_tab<T: std::str::FromStr<Err = String>>(value: Option<&str>) -> Result<Option<T>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(CoreError::InvalidInput),
    }
}
