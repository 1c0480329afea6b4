use std::cmp::Ordering;
use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::stage::StageError;

/// One element's box in page coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub name: String,
    pub top: f64,
    pub height: f64,
}

/// The page geometry. Elements are addressed by their index after load.
///
/// Names are dot-separated paths: `about.heading` is a direct child of
/// `about`.
pub struct Layout {
    elements: Vec<ElementRect>,
}

impl Layout {
    pub fn new(elements: Vec<ElementRect>) -> Self {
        Self { elements }
    }

    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, StageError> {
        let elements = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| StageError::InternalError {
                reason: format!("Could not read layout CSV: {}", e),
            })?
            .deserialize()
            .filter_map(|record: Result<ElementRect, _>| record.ok())
            .collect();
        Ok(Self { elements })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn rect(&self, id: usize) -> &ElementRect {
        &self.elements[id]
    }

    pub fn elements(&self) -> &[ElementRect] {
        &self.elements
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.name == name)
    }

    /// Direct children of the named container, ordered top to bottom.
    pub fn children_of(&self, name: &str) -> Vec<usize> {
        let prefix = format!("{}.", name);
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                e.name
                    .strip_prefix(&prefix)
                    .is_some_and(|rest| !rest.contains('.'))
            })
            .sorted_by(|(_, a), (_, b)| {
                a.top.partial_cmp(&b.top).unwrap_or(Ordering::Equal)
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Page height, used to size the default scroll run.
    pub fn bottom(&self) -> f64 {
        self.elements
            .iter()
            .map(|e| e.top + e.height)
            .fold(0.0, f64::max)
    }
}
