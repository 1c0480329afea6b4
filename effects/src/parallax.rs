use effect_api::{Effect, EffectError, ScrollSample, StartCondition, Trigger};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tweenfx::StyleFrame;

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Unitless multiplier on the 0..100 offset range.
    pub speed: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self { speed: 0.5 }
    }
}

/// Continuous scrub binding an element's vertical offset to its progress
/// through the viewport.
///
/// The offset is a pure function of the current scroll position; there is
/// no tween and nothing accumulates between samples. Dropping the effect
/// leaves the last offset in place.
pub struct Parallax {
    target: usize,
    trigger: Trigger,
    offset_y: f64,
    parameters: Parameters,
}

impl Parallax {
    pub fn new(target: usize) -> Self {
        Self::with_parameters(target, Parameters::default())
    }

    pub fn with_parameters(target: usize, parameters: Parameters) -> Self {
        let mut trigger = Trigger::continuous(StartCondition::EntersViewport);
        trigger.arm();
        Self {
            target,
            trigger,
            offset_y: 0.0,
            parameters,
        }
    }
}

impl Effect for Parallax {
    fn effect_name(&self) -> &str {
        "parallax"
    }

    fn set_parameters(&mut self, parameters: serde_json::Value) -> Result<(), EffectError> {
        self.parameters = serde_json::from_value(parameters)?;
        Ok(())
    }

    fn get_parameters(&self) -> serde_json::Value {
        json!(self.parameters)
    }

    fn on_scroll(&mut self, sample: &ScrollSample) {
        if self.trigger.evaluate(sample) {
            self.offset_y = sample.span_progress() * 100.0 * self.parameters.speed;
        }
    }

    fn update(&mut self, _delta: f64) {}

    fn render(&self, frame: &mut StyleFrame) {
        frame.style_mut(self.target).offset_y = self.offset_y;
    }
}
