//! Motion parameters for the site's entrance animations.
//!
//! The front end renders these values; nothing here touches the DOM.

use serde::{Deserialize, Serialize};

/// Cubic-bezier control points shared by every entrance animation.
pub const DEFAULT_EASE: [f64; 4] = [0.25, 0.1, 0.25, 1.0];

/// Seconds an entrance animation runs by default.
pub const DEFAULT_DURATION_SECS: f64 = 0.5;

/// Seconds between consecutive items of a staggered group.
pub const DEFAULT_STAGGER_SECS: f64 = 0.1;

/// Fraction of an element that must be on screen before it reveals.
pub const DEFAULT_REVEAL_AMOUNT: f64 = 0.2;

/// Entrance animation styles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AnimationVariant {
    Fade,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Scale,
    Rotate,
}

/// Visual state an element is animated from or to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    pub opacity: f64,
    /// Horizontal offset in pixels
    pub x: f64,
    /// Vertical offset in pixels
    pub y: f64,
    pub scale: f64,
    /// Degrees
    pub rotate: f64,
}

impl Transform {
    /// Fully visible, untransformed.
    pub const REST: Self = Self { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0, rotate: 0.0 };

    const HIDDEN: Self = Self { opacity: 0.0, ..Self::REST };
}

impl AnimationVariant {
    pub const ALL: [Self; 7] = [
        Self::Fade,
        Self::SlideUp,
        Self::SlideDown,
        Self::SlideLeft,
        Self::SlideRight,
        Self::Scale,
        Self::Rotate,
    ];

    /// `(initial, animate)` transform pair.
    pub fn transforms(self) -> (Transform, Transform) {
        let hidden = Transform::HIDDEN;
        let initial = match self {
            Self::Fade => hidden,
            Self::SlideUp => Transform { y: 20.0, ..hidden },
            Self::SlideDown => Transform { y: -20.0, ..hidden },
            Self::SlideLeft => Transform { x: 20.0, ..hidden },
            Self::SlideRight => Transform { x: -20.0, ..hidden },
            Self::Scale => Transform { scale: 0.8, ..hidden },
            Self::Rotate => Transform { rotate: -180.0, ..hidden },
        };
        (initial, Transform::REST)
    }
}

/// Timing of one animation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Timing {
    pub delay: f64,
    pub duration: f64,
    pub ease: [f64; 4],
}

impl Default for Timing {
    fn default() -> Self {
        Self { delay: 0.0, duration: DEFAULT_DURATION_SECS, ease: DEFAULT_EASE }
    }
}

/// An item paired with its entrance delay.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Staggered<T> {
    pub item: T,
    pub delay: f64,
}

/// Delay of each of `count` items: `index * stagger`.
pub fn stagger_delays(count: usize, stagger: f64) -> Vec<f64> {
    (0..count).map(|i| i as f64 * stagger).collect()
}

/// Pairs every item with its stagger delay, preserving order.
pub fn stagger<T>(items: impl IntoIterator<Item = T>, stagger: f64) -> Vec<Staggered<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| Staggered { item, delay: i as f64 * stagger })
        .collect()
}

/// Reveal-on-scroll latch: once revealed, stays revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReveal {
    amount: f64,
    revealed: bool,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_AMOUNT)
    }
}

impl ScrollReveal {
    pub fn new(amount: f64) -> Self {
        Self { amount: amount.clamp(0.0, 1.0), revealed: false }
    }

    /// Feeds the currently visible fraction; returns whether the element is revealed.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if !self.revealed && visible_fraction >= self.amount && visible_fraction > 0.0 {
            self.revealed = true;
        }
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}
