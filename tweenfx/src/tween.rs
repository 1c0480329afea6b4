use serde::{Deserialize, Serialize};

use crate::Ease;

/// A single property interpolation keyed by elapsed time.
///
/// Values before the delay window equal `from`; values at or past
/// `delay + duration` equal `to` exactly, regardless of the curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn at(&self, elapsed: f64) -> f64 {
        let t = elapsed - self.delay;
        if t <= 0.0 {
            self.from
        } else if self.duration <= 0.0 || t >= self.duration {
            self.to
        } else {
            self.from + (self.to - self.from) * self.ease.apply(t / self.duration)
        }
    }

    pub fn is_done(&self, elapsed: f64) -> bool {
        elapsed - self.delay >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_from_during_delay() {
        let tween = Tween::new(40.0, 0.0, 0.6).with_delay(1.0);
        assert_eq!(tween.at(0.0), 40.0);
        assert_eq!(tween.at(0.99), 40.0);
    }

    #[test]
    fn reaches_to_exactly() {
        let tween = Tween::new(0.0, 120.0, 2.0).with_ease(Ease::Power2Out);
        assert_eq!(tween.at(2.0), 120.0);
        assert_eq!(tween.at(100.0), 120.0);
    }

    #[test]
    fn zero_duration_snaps() {
        let tween = Tween::new(0.0, 1.0, 0.0);
        assert_eq!(tween.at(0.0), 0.0, "still in delay at exactly zero");
        assert_eq!(tween.at(0.001), 1.0);
    }

    #[test]
    fn done_accounts_for_delay() {
        let tween = Tween::new(0.0, 1.0, 0.6).with_delay(0.5);
        assert!(!tween.is_done(1.0));
        assert!(tween.is_done(1.1));
    }
}
