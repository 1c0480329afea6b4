use serde_json::json;
use thiserror::Error;
use tweenfx::StyleFrame;

use crate::ScrollSample;

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("invalid effect parameters: {0}")]
    InvalidParameters(#[from] serde_json::Error),
}

/// A scroll-gated presentation effect.
///
/// The stage feeds each effect a fresh sample of its trigger element on
/// every scroll/resize event, advances it by wall-clock deltas, and asks it
/// to write its targets' styles into the retained frame.
pub trait Effect {
    fn effect_name(&self) -> &str;

    fn set_parameters(&mut self, _parameters: serde_json::Value) -> Result<(), EffectError> {
        Ok(())
    }

    fn get_parameters(&self) -> serde_json::Value {
        json!({})
    }

    /// Evaluate the trigger against the current viewport geometry.
    fn on_scroll(&mut self, sample: &ScrollSample);

    /// Advance internal time by `delta` seconds.
    fn update(&mut self, delta: f64);

    /// Write current target styles. Takes `&self`: rendering never
    /// changes effect state, only the frame.
    fn render(&self, frame: &mut StyleFrame);

    /// One-shot effects report completion so their owner can release them.
    /// The retained frame keeps their final values afterwards.
    fn is_settled(&self) -> bool {
        false
    }
}
