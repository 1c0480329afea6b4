use serde::{Deserialize, Serialize};

/// Viewport signal consumed by the stage. Produced by scroll generators;
/// read-only for everything downstream.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ViewportEvent {
    Scroll { scroll_y: f64 },
    Resize { viewport_height: f64 },
}
