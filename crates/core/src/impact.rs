//! Global impact markers shown on the globe and the flat map.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Kind of work done at an impact location.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImpactCategory {
    Rehabilitation,
    Sanctuary,
    Conservation,
    Rescue,
}

impl ImpactCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rehabilitation => "rehabilitation",
            Self::Sanctuary => "sanctuary",
            Self::Conservation => "conservation",
            Self::Rescue => "rescue",
        }
    }
}

/// Case-insensitive, the map filter buttons send capitalised labels.
impl std::str::FromStr for ImpactCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rehabilitation" => Ok(Self::Rehabilitation),
            "sanctuary" => Ok(Self::Sanctuary),
            "conservation" => Ok(Self::Conservation),
            "rescue" => Ok(Self::Rescue),
            other => Err(format!("unknown impact category: {other}")),
        }
    }
}

/// Parses a map filter value; `all` (or nothing) means no filter.
///
/// # Errors
/// Returns `CoreError::InvalidInput` for unknown category names.
pub fn parse_impact_filter(value: Option<&str>) -> Result<Option<ImpactCategory>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(CoreError::InvalidInput),
    }
}

/// Geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    /// # Errors
    /// Returns `CoreError::InvalidInput` when either component is outside its
    /// range or not finite.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let coord = Self { lat, lon };
        coord.check()?;
        Ok(coord)
    }

    fn check(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoreError::InvalidInput(format!(
                "latitude {} outside [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(CoreError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                self.lon
            )));
        }
        Ok(())
    }
}

/// A point of interest on the impact visualization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImpactMarker {
    pub id: u32,
    pub title: String,
    /// Free-text place label, e.g. "Queensland, Australia"
    pub location: String,
    pub coordinates: LatLon,
    pub description: String,
    pub animals_helped: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub date: String,
    pub category: ImpactCategory,
}

impl ImpactMarker {
    /// # Errors
    /// Returns `CoreError::InvalidRecord` when the title is blank or the
    /// coordinates are out of range.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::InvalidRecord {
                entity: "impact marker",
                id: self.id,
                reason: "title must not be empty".to_owned(),
            });
        }
        self.coordinates.check().map_err(|e| CoreError::InvalidRecord {
            entity: "impact marker",
            id: self.id,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lon_bounds_are_inclusive() {
        assert!(LatLon::new(90.0, 180.0).is_ok());
        assert!(LatLon::new(-90.0, -180.0).is_ok());
        assert!(LatLon::new(90.5, 0.0).is_err());
        assert!(LatLon::new(0.0, -180.1).is_err());
        assert!(LatLon::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn filter_all_means_none() {
        assert_eq!(parse_impact_filter(None).unwrap(), None);
        assert_eq!(parse_impact_filter(Some("all")).unwrap(), None);
        assert_eq!(
            parse_impact_filter(Some("Sanctuary")).unwrap(),
            Some(ImpactCategory::Sanctuary)
        );
        assert!(parse_impact_filter(Some("zoo")).is_err());
    }

    #[test]
    fn marker_with_bad_coordinates_fails_validation() {
        let marker = ImpactMarker {
            id: 4,
            title: "Reef rescue".to_owned(),
            location: "Cairns".to_owned(),
            coordinates: LatLon { lat: -16.9, lon: 245.7 },
            description: String::new(),
            animals_helped: 12,
            image_url: None,
            date: "2024-10-01".to_owned(),
            category: ImpactCategory::Rescue,
        };
        let err = marker.validate().unwrap_err();
        assert!(err.to_string().contains("longitude"), "got {err}");
    }
}
