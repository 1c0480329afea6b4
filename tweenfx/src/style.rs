use serde::{Deserialize, Serialize};

/// Presentation state of a single element.
///
/// Offsets and scale are transform-space values; they never affect layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub opacity: f64,
    pub offset_y: f64,
    pub scale: f64,
    pub text: Option<String>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            offset_y: 0.0,
            scale: 1.0,
            text: None,
        }
    }
}

/// Styles for every element on the page, retained across ticks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleFrame {
    styles: Vec<Style>,
}

impl StyleFrame {
    pub fn new(element_count: usize) -> Self {
        Self {
            styles: vec![Style::default(); element_count],
        }
    }

    pub fn style(&self, index: usize) -> &Style {
        &self.styles[index]
    }

    pub fn style_mut(&mut self, index: usize) -> &mut Style {
        &mut self.styles[index]
    }

    pub fn styles_iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
