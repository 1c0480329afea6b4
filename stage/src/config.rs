use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::stage::StageError;

/// Binds one effect to a layout element (or container, for reveals).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EffectBinding {
    pub label: String,
    pub kind: String,
    pub target: String,

    #[serde(default)]
    pub params: serde_json::Value,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageConfig {
    pub viewport_height: f64,
    pub bindings: Vec<EffectBinding>,
}

impl PageConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StageError> {
        let file = File::open(path).map_err(|e| StageError::InternalError {
            reason: format!("Could not read page config: {}", e),
        })?;
        serde_json::from_reader(file).map_err(|e| StageError::InternalError {
            reason: format!("Malformed page config: {}", e),
        })
    }
}
