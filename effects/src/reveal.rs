use effect_api::{Effect, EffectError, ScrollSample, StartCondition, Trigger};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tweenfx::{Ease, Property, StyleFrame, Timeline};

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Viewport-height fraction the container top must cross to fire.
    pub threshold: f64,
    pub delay: f64,
    pub duration: f64,
    /// Starting vertical offset of every child, animated back to 0.
    pub y: f64,
    pub stagger: f64,
    pub ease: Ease,
    /// Optional scale-in track (from the given value up to 1).
    pub scale_from: Option<f64>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            delay: 0.0,
            duration: 0.6,
            y: 40.0,
            stagger: 0.1,
            ease: Ease::ExpoOut,
            scale_from: None,
        }
    }
}

/// Fire-once batch reveal of a container's children.
///
/// Children are held hidden (opacity 0, offset `y`) from the moment the
/// effect attaches until the container top crosses the threshold, then
/// animate to their resting state with per-child stagger. They animate at
/// most once; dropping the effect before the trigger fires leaves nothing
/// behind but the hidden state its owner is about to discard.
pub struct Reveal {
    children: Vec<usize>,
    trigger: Trigger,
    elapsed: f64,
    parameters: Parameters,
}

impl Reveal {
    pub fn new(children: Vec<usize>) -> Self {
        Self::with_parameters(children, Parameters::default())
    }

    pub fn with_parameters(children: Vec<usize>, parameters: Parameters) -> Self {
        let mut trigger =
            Trigger::fire_once(StartCondition::TopReachesFraction(parameters.threshold));
        trigger.arm();
        Self {
            children,
            trigger,
            elapsed: 0.0,
            parameters,
        }
    }

    fn timeline(&self) -> Timeline {
        let p = &self.parameters;
        let mut timeline = Timeline::new(p.duration)
            .with_delay(p.delay)
            .with_stagger(p.stagger)
            .with_ease(p.ease)
            .track(Property::Opacity, 0.0, 1.0)
            .track(Property::OffsetY, p.y, 0.0);
        if let Some(from) = p.scale_from {
            timeline = timeline.track(Property::Scale, from, 1.0);
        }
        timeline
    }
}

impl Effect for Reveal {
    fn effect_name(&self) -> &str {
        "reveal"
    }

    fn set_parameters(&mut self, parameters: serde_json::Value) -> Result<(), EffectError> {
        self.parameters = serde_json::from_value(parameters)?;
        if !self.trigger.has_fired() {
            self.trigger = Trigger::fire_once(StartCondition::TopReachesFraction(
                self.parameters.threshold,
            ));
            self.trigger.arm();
        }
        Ok(())
    }

    fn get_parameters(&self) -> serde_json::Value {
        json!(self.parameters)
    }

    fn on_scroll(&mut self, sample: &ScrollSample) {
        self.trigger.evaluate(sample);
    }

    fn update(&mut self, delta: f64) {
        if self.trigger.has_fired() {
            self.elapsed += delta;
        }
    }

    fn render(&self, frame: &mut StyleFrame) {
        let timeline = self.timeline();
        for (index, &child) in self.children.iter().enumerate() {
            let style = frame.style_mut(child);
            if self.trigger.has_fired() {
                timeline.apply(self.elapsed, index, style);
            } else {
                timeline.apply_initial(style);
            }
        }
    }

    fn is_settled(&self) -> bool {
        self.trigger.has_fired() && self.timeline().is_done(self.elapsed, self.children.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn above_threshold() -> ScrollSample {
        ScrollSample {
            element_top: 2000.0,
            element_height: 600.0,
            viewport_height: 800.0,
            scroll_y: 0.0,
        }
    }

    fn past_threshold() -> ScrollSample {
        ScrollSample {
            element_top: 2000.0,
            element_height: 600.0,
            viewport_height: 800.0,
            scroll_y: 1500.0,
        }
    }

    #[test]
    fn children_hidden_before_fire() {
        let reveal = Reveal::new(vec![0, 1, 2]);
        let mut frame = StyleFrame::new(3);
        reveal.render(&mut frame);
        for style in frame.styles_iter() {
            assert_eq!(style.opacity, 0.0);
            assert_eq!(style.offset_y, 40.0);
        }
    }

    #[test]
    fn no_animation_while_condition_unmet() {
        let mut reveal = Reveal::new(vec![0]);
        reveal.on_scroll(&above_threshold());
        reveal.update(1.0);
        let mut frame = StyleFrame::new(1);
        reveal.render(&mut frame);
        assert_eq!(frame.style(0).opacity, 0.0, "time must not advance before fire");
    }

    #[test]
    fn completed_run_reaches_resting_state() {
        let mut reveal = Reveal::new(vec![0, 1]);
        reveal.on_scroll(&past_threshold());
        reveal.update(5.0);
        let mut frame = StyleFrame::new(2);
        reveal.render(&mut frame);
        for style in frame.styles_iter() {
            assert_eq!(style.opacity, 1.0);
            assert_eq!(style.offset_y, 0.0);
        }
        assert!(reveal.is_settled());
    }

    #[test]
    fn duplicate_satisfactions_run_once() {
        let mut reveal = Reveal::new(vec![0]);
        reveal.on_scroll(&past_threshold());
        reveal.update(5.0);
        assert!(reveal.is_settled());
        // A later qualifying sample must not restart the timeline.
        reveal.on_scroll(&past_threshold());
        reveal.update(0.1);
        let mut frame = StyleFrame::new(1);
        reveal.render(&mut frame);
        assert_eq!(frame.style(0).opacity, 1.0);
    }

    #[test]
    fn scale_track_is_optional() {
        let mut params = Parameters::default();
        params.scale_from = Some(0.0);
        let mut reveal = Reveal::with_parameters(vec![0], params);
        let mut frame = StyleFrame::new(1);
        reveal.render(&mut frame);
        assert_eq!(frame.style(0).scale, 0.0);
        reveal.on_scroll(&past_threshold());
        reveal.update(5.0);
        reveal.render(&mut frame);
        assert_eq!(frame.style(0).scale, 1.0);
    }

    #[test]
    fn parameters_round_trip() {
        let mut reveal = Reveal::new(vec![0]);
        reveal
            .set_parameters(json!({
                "threshold": 0.5,
                "delay": 0.2,
                "duration": 0.7,
                "y": 60.0,
                "stagger": 0.15,
                "ease": "expo_out",
                "scale_from": null,
            }))
            .unwrap();
        assert_eq!(reveal.get_parameters()["y"], 60.0);
    }
}
