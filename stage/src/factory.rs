use effect_api::Effect;
use effects::{CountUp, Parallax, Reveal, Typewriter};
use log::warn;

use crate::stage::{Mounted, StageError};
use crate::{EffectBinding, Layout};

/// Build the effect a binding describes, resolved against the layout.
///
/// A binding whose target does not resolve to any element is skipped with
/// a warning and registers nothing; an unknown kind fails the page load.
pub fn make(binding: &EffectBinding, layout: &Layout) -> Result<Option<Mounted>, StageError> {
    let (trigger_element, mut effect): (usize, Box<dyn Effect>) = match binding.kind.as_str() {
        "reveal" => {
            let Some(container) = layout.index_of(&binding.target) else {
                warn!("No container '{}' for reveal '{}'", binding.target, binding.label);
                return Ok(None);
            };
            let children = layout.children_of(&binding.target);
            if children.is_empty() {
                warn!(
                    "Container '{}' for reveal '{}' has no children",
                    binding.target, binding.label
                );
                return Ok(None);
            }
            (container, Box::new(Reveal::new(children)))
        }
        "parallax" | "count_up" | "typewriter" => {
            let Some(target) = layout.index_of(&binding.target) else {
                warn!("No element '{}' for {} '{}'", binding.target, binding.kind, binding.label);
                return Ok(None);
            };
            let effect: Box<dyn Effect> = match binding.kind.as_str() {
                "parallax" => Box::new(Parallax::new(target)),
                "count_up" => Box::new(CountUp::new(target, 0.0)),
                _ => Box::new(Typewriter::new(target, Default::default())),
            };
            (target, effect)
        }
        kind => {
            return Err(StageError::UnknownEffect {
                kind: kind.to_owned(),
            })
        }
    };

    if !binding.params.is_null() {
        effect.set_parameters(binding.params.clone())?;
    }

    Ok(Some(Mounted {
        label: binding.label.clone(),
        trigger_element,
        effect,
    }))
}
