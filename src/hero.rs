//! Hero banners of the home pages and the carousel cycling through them.

use crate::enum_values;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::time::Duration;

/// How long a slide is shown before the carousel autoplays to the next one.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);
/// Duration of the fade between two slides. After it elapsed the host must call
/// [`Carousel::transition_finished`].
pub const FADE_DURATION: Duration = Duration::from_millis(800);

enum_values! {
    pub enum HeroKind {
        Anime = "anime"
    }
}

/// A featured title shown big on top of a home page.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct Hero {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "type")]
    #[default(HeroKind::Anime)]
    pub kind: HeroKind,
    pub year: String,
    pub rating: String,
    /// Id of the featured title, empty for the default hero.
    pub id: String,
}

impl Hero {
    /// Hero shown on the anime home page if the upstream has no ongoing anime.
    pub fn default_anime() -> Self {
        Hero {
            title: "StreamHub Anime".to_string(),
            description: "Nonton anime ongoing dan completed dengan subtitle Indonesia."
                .to_string(),
            image: "https://otakudesu.best/wp-content/uploads/2025/10/Fumetsu-no-Anata-e-Season-2-Sub.jpg"
                .to_string(),
            ..Default::default()
        }
    }

    /// Page the hero links to, `#` if it doesn't feature a specific title.
    pub fn href(&self) -> String {
        if self.id.is_empty() {
            "#".to_string()
        } else {
            format!("/{}/{}", self.kind, self.id)
        }
    }
}

/// Index logic of an endless carousel.
///
/// With more than one slide, the slides are extended by a clone of the last slide in front and a
/// clone of the first slide at the end (see [`Carousel::slides`]). Moving onto a clone animates
/// like any other move, once the animation is done [`Carousel::transition_finished`] jumps
/// without animation to the real slide the clone represents. This way the carousel can always
/// move forward (or backward) without a visible jump.
#[derive(Clone, Debug)]
pub struct Carousel<T = Hero> {
    items: Vec<T>,
    index: usize,
    paused: bool,
    skip_animation: bool,
}

impl<T: Clone> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        let index = if items.len() > 1 { 1 } else { 0 };
        Self {
            items,
            index,
            paused: false,
            skip_animation: false,
        }
    }

    /// Number of real slides.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The slides to render: `[last, ..items, first]` if there is more than one item, otherwise
    /// the items as they are.
    pub fn slides(&self) -> Vec<T> {
        match (self.items.first(), self.items.last()) {
            (Some(first), Some(last)) if self.items.len() > 1 => {
                let mut slides = Vec::with_capacity(self.items.len() + 2);
                slides.push(last.clone());
                slides.extend(self.items.iter().cloned());
                slides.push(first.clone());
                slides
            }
            _ => self.items.clone(),
        }
    }

    /// Index into [`Carousel::slides`] of the slide currently shown.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index of the real item currently shown, in `0..len`. Clones map to the item they copy.
    pub fn real_index(&self) -> usize {
        let total = self.items.len();
        if total <= 1 {
            0
        } else if self.index == 0 {
            total - 1
        } else if self.index == total + 1 {
            0
        } else {
            self.index - 1
        }
    }

    /// If the last index change should be animated.
    pub fn animate(&self) -> bool {
        self.items.len() <= 1 || !self.skip_animation
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn next(&mut self) {
        if self.items.len() <= 1 {
            return;
        }
        self.skip_animation = false;
        if self.index < self.items.len() + 1 {
            self.index += 1
        }
    }

    pub fn prev(&mut self) {
        if self.items.len() <= 1 {
            return;
        }
        self.skip_animation = false;
        self.index = self.index.saturating_sub(1)
    }

    /// Show the real item at `real_index`. Out of range indexes are ignored.
    pub fn go_to(&mut self, real_index: usize) {
        if self.items.len() <= 1 || real_index >= self.items.len() {
            return;
        }
        self.skip_animation = false;
        self.index = real_index + 1
    }

    /// Must be called once the transition to the current slide is done. If the current slide is
    /// a clone, the carousel jumps to the real slide without animation and `true` is returned.
    pub fn transition_finished(&mut self) -> bool {
        let total = self.items.len();
        if total <= 1 {
            return false;
        }

        if self.index == total + 1 {
            self.index = 1
        } else if self.index == 0 {
            self.index = total
        } else {
            return false;
        }
        self.skip_animation = true;
        true
    }

    /// Called every [`AUTOPLAY_INTERVAL`]. Moves to the next slide unless the carousel is paused.
    pub fn autoplay_tick(&mut self) {
        if !self.paused {
            self.next()
        }
    }

    /// Pause autoplay, e.g. while the carousel is hovered.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused
    }
}
