use effect_api::{Effect, EffectError, ScrollSample};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tweenfx::StyleFrame;

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub text: String,
    /// Total reveal duration once the delay has passed.
    pub duration: f64,
    /// Wait before the first character appears.
    pub delay: f64,
}

impl Parameters {
    /// Duration scaled to the text length, the pacing the hero subtitle
    /// uses: 0.03s per character after a 0.8s hold.
    pub fn natural(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            duration: text.chars().count() as f64 * 0.03,
            delay: 0.8,
            text,
        }
    }
}

/// Character-by-character text reveal, driven purely by time from mount.
///
/// Not scroll-gated: the clock starts at attach. At elapsed `t` past the
/// delay, the visible prefix is `floor((t / duration) * len)` characters,
/// clamped to the whole string. The prefix length never shrinks.
pub struct Typewriter {
    target: usize,
    elapsed: f64,
    parameters: Parameters,
}

impl Typewriter {
    pub fn new(target: usize, parameters: Parameters) -> Self {
        Self {
            target,
            elapsed: 0.0,
            parameters,
        }
    }

    fn visible_chars(&self) -> usize {
        let total = self.parameters.text.chars().count();
        let t = self.elapsed - self.parameters.delay;
        if t <= 0.0 {
            0
        } else if self.parameters.duration <= 0.0 || t >= self.parameters.duration {
            total
        } else {
            ((t / self.parameters.duration) * total as f64).floor() as usize
        }
    }
}

impl Effect for Typewriter {
    fn effect_name(&self) -> &str {
        "typewriter"
    }

    fn set_parameters(&mut self, parameters: serde_json::Value) -> Result<(), EffectError> {
        self.parameters = serde_json::from_value(parameters)?;
        Ok(())
    }

    fn get_parameters(&self) -> serde_json::Value {
        json!(self.parameters)
    }

    fn on_scroll(&mut self, _sample: &ScrollSample) {}

    fn update(&mut self, delta: f64) {
        self.elapsed += delta;
    }

    fn render(&self, frame: &mut StyleFrame) {
        let visible: String = self.parameters.text.chars().take(self.visible_chars()).collect();
        frame.style_mut(self.target).text = Some(visible);
    }

    fn is_settled(&self) -> bool {
        self.elapsed - self.parameters.delay >= self.parameters.duration
    }
}
