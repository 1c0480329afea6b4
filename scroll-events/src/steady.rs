use std::time::Duration;

use effect_api::event::ViewportEvent;
use tokio::sync::mpsc;

use crate::ScrollEventGenerator;

/// Scrolls the page top to bottom at a constant velocity, then closes.
pub struct SteadyScroller {
    _join_handle: tokio::task::JoinHandle<()>,
}

impl SteadyScroller {
    pub fn new(
        velocity: f64,
        sample_rate: f64,
        max_scroll_y: f64,
        channel: mpsc::Sender<ViewportEvent>,
    ) -> Self {
        Self {
            _join_handle: tokio::spawn(async move {
                let step = 1.0 / sample_rate.max(1.0);
                let mut scroll_y = 0.0;
                loop {
                    let event = ViewportEvent::Scroll { scroll_y };
                    if channel.send(event).await.is_err() {
                        return;
                    }
                    if scroll_y >= max_scroll_y {
                        break;
                    }
                    tokio::time::sleep(Duration::from_secs_f64(step)).await;
                    scroll_y = (scroll_y + velocity * step).min(max_scroll_y);
                }
            }),
        }
    }
}

impl ScrollEventGenerator for SteadyScroller {
    fn get_name(&self) -> &str {
        "Steady scroll"
    }
}
