use std::sync::Mutex;

use tweenfx::StyleFrame;

use crate::{Surface, SurfaceError};

/// Records every presented frame for assertions in tests.
#[derive(Default)]
pub struct MockSurface {
    frames: Mutex<Vec<StyleFrame>>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn last_frame(&self) -> Option<StyleFrame> {
        self.frames
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn frames(&self) -> Vec<StyleFrame> {
        self.frames
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Surface for MockSurface {
    fn present(&self, frame: &StyleFrame) -> Result<(), SurfaceError> {
        self.frames
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(frame.clone());
        Ok(())
    }
}
