use serde::{Deserialize, Serialize};

use crate::ScrollSample;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    Idle,
    Armed,
    Fired,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartCondition {
    /// Target top crossing the given fraction of the viewport height.
    TopReachesFraction(f64),
    /// Target box intersecting the viewport at all.
    EntersViewport,
}

impl StartCondition {
    pub fn is_met(&self, sample: &ScrollSample) -> bool {
        match self {
            StartCondition::TopReachesFraction(fraction) => {
                sample.top_reaches_fraction(*fraction)
            }
            StartCondition::EntersViewport => sample.intersects_viewport(),
        }
    }
}

/// Watches viewport samples for a start condition.
///
/// Fire-once triggers go `Idle -> Armed -> Fired` and never fire again;
/// continuous triggers stay `Armed` and qualify on every matching sample.
#[derive(Clone, Copy, Debug)]
pub struct Trigger {
    condition: StartCondition,
    fire_once: bool,
    state: TriggerState,
}

impl Trigger {
    pub fn fire_once(condition: StartCondition) -> Self {
        Self {
            condition,
            fire_once: true,
            state: TriggerState::Idle,
        }
    }

    pub fn continuous(condition: StartCondition) -> Self {
        Self {
            condition,
            fire_once: false,
            state: TriggerState::Idle,
        }
    }

    pub fn arm(&mut self) {
        if self.state == TriggerState::Idle {
            self.state = TriggerState::Armed;
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn has_fired(&self) -> bool {
        self.state == TriggerState::Fired
    }

    /// True when the owning effect should run for this sample: exactly once
    /// ever for fire-once triggers, on every qualifying sample otherwise.
    pub fn evaluate(&mut self, sample: &ScrollSample) -> bool {
        match self.state {
            TriggerState::Idle | TriggerState::Fired => false,
            TriggerState::Armed => {
                if !self.condition.is_met(sample) {
                    return false;
                }
                if self.fire_once {
                    self.state = TriggerState::Fired;
                }
                true
            }
        }
    }
}
