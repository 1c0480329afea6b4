use effect_api::{Effect, EffectError, ScrollSample, StartCondition, Trigger};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tweenfx::{Ease, StyleFrame, Tween};

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub end: f64,
    pub duration: f64,
    pub threshold: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            end: 0.0,
            duration: 2.0,
            threshold: 0.8,
        }
    }
}

/// Fire-once numeric count-up rendered as the target's text.
///
/// On first viewport entry the internal counter interpolates 0 to `end`
/// with a power-2 ease-out; every step writes `floor(counter)`. The final
/// text is exactly `floor(end)` and intermediate values never decrease.
pub struct CountUp {
    target: usize,
    trigger: Trigger,
    elapsed: f64,
    parameters: Parameters,
}

impl CountUp {
    pub fn new(target: usize, end: f64) -> Self {
        Self::with_parameters(
            target,
            Parameters {
                end,
                ..Parameters::default()
            },
        )
    }

    pub fn with_parameters(target: usize, parameters: Parameters) -> Self {
        let mut trigger =
            Trigger::fire_once(StartCondition::TopReachesFraction(parameters.threshold));
        trigger.arm();
        Self {
            target,
            trigger,
            elapsed: 0.0,
            parameters,
        }
    }

    fn tween(&self) -> Tween {
        Tween::new(0.0, self.parameters.end, self.parameters.duration).with_ease(Ease::Power2Out)
    }
}

impl Effect for CountUp {
    fn effect_name(&self) -> &str {
        "count_up"
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
        if !self.trigger.has_fired() {
            return;
        }
        let value = self.tween().at(self.elapsed);
        frame.style_mut(self.target).text = Some((value.floor() as i64).to_string());
    }

    fn is_settled(&self) -> bool {
        self.trigger.has_fired() && self.tween().is_done(self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_view() -> ScrollSample {
        ScrollSample {
            element_top: 100.0,
            element_height: 50.0,
            viewport_height: 800.0,
            scroll_y: 0.0,
        }
    }

    fn out_of_view() -> ScrollSample {
        ScrollSample {
            element_top: 5000.0,
            element_height: 50.0,
            viewport_height: 800.0,
            scroll_y: 0.0,
        }
    }

    #[test]
    fn no_text_written_before_fire() {
        let mut count_up = CountUp::new(0, 120.0);
        count_up.on_scroll(&out_of_view());
        count_up.update(1.0);
        let mut frame = StyleFrame::new(1);
        count_up.render(&mut frame);
        assert_eq!(frame.style(0).text, None);
    }

    #[test]
    fn final_text_is_exact() {
        let mut count_up = CountUp::new(0, 120.0);
        count_up.on_scroll(&in_view());
        count_up.update(2.0);
        let mut frame = StyleFrame::new(1);
        count_up.render(&mut frame);
        assert_eq!(frame.style(0).text.as_deref(), Some("120"));
        assert!(count_up.is_settled());
    }

    #[test]
    fn intermediate_values_never_decrease() {
        let mut count_up = CountUp::new(0, 120.0);
        count_up.on_scroll(&in_view());
        let mut frame = StyleFrame::new(1);
        let mut previous = -1;
        for _ in 0..40 {
            count_up.update(0.05);
            count_up.render(&mut frame);
            let value: i64 = frame.style(0).text.as_deref().unwrap().parse().unwrap();
            assert!(value >= previous, "counter went backwards");
            assert!(value <= 120);
            previous = value;
        }
        assert_eq!(previous, 120);
    }

    #[test]
    fn leaving_and_reentering_does_not_refire() {
        let mut count_up = CountUp::new(0, 10.0);
        count_up.on_scroll(&in_view());
        count_up.update(2.0);
        count_up.on_scroll(&out_of_view());
        count_up.on_scroll(&in_view());
        count_up.update(0.1);
        let mut frame = StyleFrame::new(1);
        count_up.render(&mut frame);
        assert_eq!(frame.style(0).text.as_deref(), Some("10"));
    }
}
