use effect_api::event::ViewportEvent;
use effect_api::{Effect, EffectError, ScrollSample};
use log::{debug, info};
use thiserror::Error;
use tweenfx::StyleFrame;
use unfurl_surface::{Surface, SurfaceError};

use crate::{factory, EffectBinding, Layout, PageConfig};

#[derive(Debug, Error)]
pub enum StageError {
    #[error("stage error: {reason}")]
    InternalError { reason: String },

    #[error("unknown effect kind: {kind}")]
    UnknownEffect { kind: String },

    #[error(transparent)]
    EffectError(#[from] EffectError),
}

pub(crate) struct Mounted {
    pub label: String,
    pub trigger_element: usize,
    pub effect: Box<dyn Effect>,
}

/// Owns the page: layout geometry, the retained style frame, and every
/// mounted effect. Viewport events and time ticks flow in; style frames
/// flow out to a surface. All mutation happens inside these calls, in
/// order, on the caller's thread.
pub struct Stage {
    layout: Layout,
    frame: StyleFrame,
    viewport_height: f64,
    scroll_y: f64,
    effects: Vec<Mounted>,
}

impl Stage {
    pub fn new(layout: Layout, viewport_height: f64) -> Self {
        let frame = StyleFrame::new(layout.len());
        Self {
            layout,
            frame,
            viewport_height,
            scroll_y: 0.0,
            effects: Vec::new(),
        }
    }

    pub fn from_page(layout: Layout, config: &PageConfig) -> Result<Self, StageError> {
        let mut stage = Self::new(layout, config.viewport_height);
        for binding in &config.bindings {
            stage.mount(binding)?;
        }
        Ok(stage)
    }

    /// Attach an effect. Returns false when the binding's target resolves
    /// to nothing; nothing is registered then.
    pub fn mount(&mut self, binding: &EffectBinding) -> Result<bool, StageError> {
        let Some(mut mounted) = factory::make(binding, &self.layout)? else {
            return Ok(false);
        };

        // Force the pre-animation state before any sample arrives.
        mounted.effect.render(&mut self.frame);

        // Elements already past their threshold at mount fire right away
        // instead of waiting for the next scroll event.
        let sample = self.sample_for(mounted.trigger_element);
        mounted.effect.on_scroll(&sample);

        info!(
            "Mounted {} '{}' on '{}'",
            binding.kind, binding.label, binding.target
        );
        self.effects.push(mounted);
        Ok(true)
    }

    /// Detach by label. Stops any in-flight animation and delivers no
    /// further samples to the effect. Safe to call for a label that is
    /// not mounted (or already unmounted).
    pub fn unmount(&mut self, label: &str) {
        let before = self.effects.len();
        self.effects.retain(|mounted| mounted.label != label);
        if self.effects.len() == before {
            debug!("No effect '{}' to unmount", label);
        } else {
            info!("Unmounted effect '{}'", label);
        }
    }

    pub fn handle_event(&mut self, event: ViewportEvent) {
        match event {
            ViewportEvent::Scroll { scroll_y } => self.scroll_y = scroll_y,
            ViewportEvent::Resize { viewport_height } => self.viewport_height = viewport_height,
            _ => return,
        }
        for i in 0..self.effects.len() {
            let sample = self.sample_for(self.effects[i].trigger_element);
            self.effects[i].effect.on_scroll(&sample);
        }
    }

    /// Advance time and refresh the retained frame. Settled one-shot
    /// effects are released after their final render; their last values
    /// stay in the frame.
    pub fn tick(&mut self, delta: f64) {
        for mounted in &mut self.effects {
            mounted.effect.update(delta);
            mounted.effect.render(&mut self.frame);
        }
        self.effects.retain(|mounted| {
            if mounted.effect.is_settled() {
                info!("Effect '{}' finished", mounted.label);
                false
            } else {
                true
            }
        });
    }

    pub fn frame(&self) -> &StyleFrame {
        &self.frame
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn present_to(&self, surface: &dyn Surface) -> Result<(), SurfaceError> {
        surface.present(&self.frame)
    }

    pub fn effect_labels(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().map(|mounted| mounted.label.as_str())
    }

    pub fn effect_parameters(&self, label: &str) -> Option<serde_json::Value> {
        self.effects
            .iter()
            .find(|mounted| mounted.label == label)
            .map(|mounted| mounted.effect.get_parameters())
    }

    pub fn set_effect_parameters(
        &mut self,
        label: &str,
        parameters: serde_json::Value,
    ) -> Result<(), StageError> {
        let Some(mounted) = self
            .effects
            .iter_mut()
            .find(|mounted| mounted.label == label)
        else {
            return Err(StageError::InternalError {
                reason: format!("No such effect: {}", label),
            });
        };
        Ok(mounted.effect.set_parameters(parameters)?)
    }

    fn sample_for(&self, element: usize) -> ScrollSample {
        let rect = self.layout.rect(element);
        ScrollSample {
            element_top: rect.top,
            element_height: rect.height,
            viewport_height: self.viewport_height,
            scroll_y: self.scroll_y,
        }
    }
}
