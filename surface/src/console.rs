use std::sync::Mutex;

use log::debug;
use tweenfx::StyleFrame;

use crate::{Surface, SurfaceError};

/// Logs style writes to the console, one line per element that changed
/// since the previous frame.
#[derive(Default)]
pub struct ConsoleSurface {
    last: Mutex<Option<StyleFrame>>,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for ConsoleSurface {
    fn present(&self, frame: &StyleFrame) -> Result<(), SurfaceError> {
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        for (index, style) in frame.styles_iter().enumerate() {
            let changed = match last.as_ref() {
                Some(previous) if previous.len() == frame.len() => {
                    previous.style(index) != style
                }
                _ => *style != Default::default(),
            };
            if !changed {
                continue;
            }
            match &style.text {
                Some(text) => debug!(
                    "element {}: opacity {:.2}, y {:+.1}, scale {:.2}, text {:?}",
                    index, style.opacity, style.offset_y, style.scale, text
                ),
                None => debug!(
                    "element {}: opacity {:.2}, y {:+.1}, scale {:.2}",
                    index, style.opacity, style.offset_y, style.scale
                ),
            }
        }
        *last = Some(frame.clone());
        Ok(())
    }
}
