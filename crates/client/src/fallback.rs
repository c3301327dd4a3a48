use welf_core::{Story, StoryCategory};

/// Stories shown when the live catalog cannot be reached.
pub fn fallback_stories() -> Vec<Story> {
    vec![
        Story {
            id: 1,
            title: "Injured Sea Turtle's Miraculous Recovery".to_owned(),
            date: "2024-11-17".to_owned(),
            summary: "A heartwarming story of community effort saving a critically injured sea turtle..."
                .to_owned(),
            image_url: Some("/api/placeholder/400/200".to_owned()),
            tags: vec!["Success".to_owned(), "Marine Life".to_owned()],
            category: StoryCategory::Featured,
        },
        Story {
            id: 2,
            title: "Local Shelter Achieves 100% Adoption Rate".to_owned(),
            date: "2024-11-16".to_owned(),
            summary: "Community support leads to unprecedented adoption success...".to_owned(),
            image_url: Some("/api/placeholder/400/200".to_owned()),
            tags: vec!["Success".to_owned(), "Community".to_owned()],
            category: StoryCategory::Latest,
        },
    ]
}
