//! Test utilities and module declarations for storage tests.

use welf_core::{ImpactCategory, ImpactMarker, LatLon, Story, StoryCategory};

pub fn create_test_story(id: u32, category: StoryCategory) -> Story {
    Story {
        id,
        title: format!("Test story {id}"),
        date: "2024-11-01".to_owned(),
        summary: "Test summary".to_owned(),
        image_url: None,
        tags: vec!["Test".to_owned()],
        category,
    }
}

pub fn create_test_marker(id: u32, lat: f64, lon: f64) -> ImpactMarker {
    ImpactMarker {
        id,
        title: format!("Test marker {id}"),
        location: "Somewhere".to_owned(),
        coordinates: LatLon { lat, lon },
        description: "Test description".to_owned(),
        animals_helped: 10,
        image_url: None,
        date: "2024-11-01".to_owned(),
        category: ImpactCategory::Rescue,
    }
}
