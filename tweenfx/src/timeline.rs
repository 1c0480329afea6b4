use serde::{Deserialize, Serialize};

use crate::{Ease, Style, Tween};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    OffsetY,
    Scale,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub property: Property,
    pub from: f64,
    pub to: f64,
}

/// An ordered set of property tracks animated together over a batch of
/// targets, with a fixed incremental delay between successive targets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    tracks: Vec<Track>,
    duration: f64,
    delay: f64,
    stagger: f64,
    ease: Ease,
}

impl Timeline {
    pub fn new(duration: f64) -> Self {
        Self {
            tracks: Vec::new(),
            duration,
            delay: 0.0,
            stagger: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn track(mut self, property: Property, from: f64, to: f64) -> Self {
        self.tracks.push(Track { property, from, to });
        self
    }

    fn tween_for(&self, track: &Track, index: usize) -> Tween {
        Tween::new(track.from, track.to, self.duration)
            .with_delay(self.delay + self.stagger * index as f64)
            .with_ease(self.ease)
    }

    /// Write the interpolated values for target `index` at `elapsed`.
    pub fn apply(&self, elapsed: f64, index: usize, style: &mut Style) {
        for track in &self.tracks {
            let value = self.tween_for(track, index).at(elapsed);
            match track.property {
                Property::Opacity => style.opacity = value,
                Property::OffsetY => style.offset_y = value,
                Property::Scale => style.scale = value,
            }
        }
    }

    /// Write every track's starting value, used to force targets into
    /// their pre-animation state before the timeline runs.
    pub fn apply_initial(&self, style: &mut Style) {
        for track in &self.tracks {
            match track.property {
                Property::Opacity => style.opacity = track.from,
                Property::OffsetY => style.offset_y = track.from,
                Property::Scale => style.scale = track.from,
            }
        }
    }

    /// The last target finishes at `delay + stagger * (count - 1) + duration`.
    pub fn total_duration(&self, target_count: usize) -> f64 {
        self.delay + self.stagger * target_count.saturating_sub(1) as f64 + self.duration
    }

    pub fn is_done(&self, elapsed: f64, target_count: usize) -> bool {
        elapsed >= self.total_duration(target_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal_timeline() -> Timeline {
        Timeline::new(0.6)
            .with_stagger(0.1)
            .track(Property::Opacity, 0.0, 1.0)
            .track(Property::OffsetY, 40.0, 0.0)
    }

    #[test]
    fn initial_state_is_hidden() {
        let mut style = Style::default();
        reveal_timeline().apply_initial(&mut style);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.offset_y, 40.0);
    }

    #[test]
    fn staggered_targets_start_later() {
        let timeline = reveal_timeline();
        let mut first = Style::default();
        let mut third = Style::default();
        timeline.apply(0.15, 0, &mut first);
        timeline.apply(0.15, 2, &mut third);
        assert!(first.opacity > 0.0, "first child is underway");
        assert_eq!(third.opacity, 0.0, "third child still waiting on stagger");
        assert_eq!(third.offset_y, 40.0);
    }

    #[test]
    fn completes_to_final_values() {
        let timeline = reveal_timeline();
        let mut style = Style::default();
        timeline.apply(10.0, 4, &mut style);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.offset_y, 0.0);
    }

    #[test]
    fn total_duration_counts_stagger() {
        let timeline = reveal_timeline().with_delay(0.2);
        assert_eq!(timeline.total_duration(3), 0.2 + 0.2 + 0.6);
        assert!(!timeline.is_done(0.9, 3));
        assert!(timeline.is_done(1.0, 3));
    }

    #[test]
    fn untouched_properties_keep_their_value() {
        let timeline = Timeline::new(0.5).track(Property::Opacity, 0.0, 1.0);
        let mut style = Style {
            offset_y: 12.0,
            ..Style::default()
        };
        timeline.apply(0.25, 0, &mut style);
        assert_eq!(style.offset_y, 12.0);
    }
}
