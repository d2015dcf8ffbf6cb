/// Classifier layer: the opaque decision function and its process-wide cache.
///
/// ```text
///  model_rlo_opt.json
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  load once → &'static LogisticModel
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ logistic  │  [margin_low, margin_up, length] → class 0 / 1
///   └──────────┘
/// ```

pub mod cache;
pub mod logistic;

use std::fmt;

pub use cache::load_model;

// ---------------------------------------------------------------------------
// Classifier seam
// ---------------------------------------------------------------------------

/// A binary decision function over the three banknote features.
///
/// Implementations must be deterministic: the same rows always yield the same
/// classes, one per row, in row order.
pub trait Classifier: Send + Sync {
    fn predict(&self, rows: &[[f64; 3]]) -> Result<Vec<u8>, ModelError>;
}

// ---------------------------------------------------------------------------
// Label – human-readable class
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Faux,
    Vrai,
}

impl Label {
    /// Map a raw class id to its label. Anything but 0 or 1 is unknown.
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Label::Faux),
            1 => Some(Label::Vrai),
            _ => None,
        }
    }

    /// Inverse of [`Label::as_str`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Faux" => Some(Label::Faux),
            "Vrai" => Some(Label::Vrai),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Faux => "Faux",
            Label::Vrai => "Vrai",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("cannot read model file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse model file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid model: {0}")]
    Invalid(String),

    #[error("non-finite input on row {row}")]
    NonFiniteInput { row: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_ids_map_to_french_labels() {
        assert_eq!(Label::from_class(0), Some(Label::Faux));
        assert_eq!(Label::from_class(1), Some(Label::Vrai));
        assert_eq!(Label::from_class(2), None);
        assert_eq!(Label::Vrai.to_string(), "Vrai");
        assert_eq!(Label::from_name("Faux"), Some(Label::Faux));
        assert_eq!(Label::from_name("faux"), None);
    }
}
