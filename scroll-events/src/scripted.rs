use std::time::Duration;

use effect_api::event::ViewportEvent;
use itertools::Itertools;
use log::info;
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::ScrollEventGenerator;

/// A point on a scripted scroll path: the page is at `scroll_y` once `at`
/// seconds have elapsed.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Waypoint {
    pub at: f64,
    pub scroll_y: f64,
}

/// Scroll position at time `t`, linearly interpolated between waypoints
/// and held flat before the first and after the last.
pub fn position_at(waypoints: &[Waypoint], t: f64) -> f64 {
    let Some(first) = waypoints.first() else {
        return 0.0;
    };
    if t <= first.at {
        return first.scroll_y;
    }
    for (a, b) in waypoints.iter().tuple_windows() {
        if t < b.at {
            let span = b.at - a.at;
            if span <= 0.0 {
                return b.scroll_y;
            }
            let progress = (t - a.at) / span;
            return a.scroll_y + (b.scroll_y - a.scroll_y) * progress;
        }
    }
    waypoints.last().map(|w| w.scroll_y).unwrap_or(0.0)
}

/// Replays a waypoint script as scroll events at a fixed sample rate,
/// then closes. Dropping the receiver stops the task.
pub struct ScriptedScroller {
    _join_handle: tokio::task::JoinHandle<()>,
}

impl ScriptedScroller {
    pub fn new(
        waypoints: Vec<Waypoint>,
        sample_rate: f64,
        channel: mpsc::Sender<ViewportEvent>,
    ) -> Self {
        Self {
            _join_handle: tokio::spawn(async move {
                let step = 1.0 / sample_rate.max(1.0);
                let end = waypoints.last().map(|w| w.at).unwrap_or(0.0);
                let mut t = 0.0;
                loop {
                    let event = ViewportEvent::Scroll {
                        scroll_y: position_at(&waypoints, t),
                    };
                    if channel.send(event).await.is_err() {
                        return;
                    }
                    if t >= end {
                        break;
                    }
                    tokio::time::sleep(Duration::from_secs_f64(step)).await;
                    t += step;
                }
                info!("Scroll script finished after {:.1}s", end);
            }),
        }
    }
}

impl ScrollEventGenerator for ScriptedScroller {
    fn get_name(&self) -> &str {
        "Scripted scroll"
    }
}
