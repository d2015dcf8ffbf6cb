use crate::classifier::{Classifier, Label, ModelError};
use crate::config::{FEATURE_COLUMNS, PREDICTION_COLUMN};
use crate::data::export::to_csv_bytes;
use crate::data::model::{DataError, Dataset};

// ---------------------------------------------------------------------------
// Prediction run – the single failure boundary of the presenter
// ---------------------------------------------------------------------------

/// Everything shown after a successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    /// Uploaded table plus the prediction column.
    pub augmented: Dataset,
    /// One label per input row, in row order.
    pub labels: Vec<Label>,
    /// Occurring labels with their counts, most frequent first.
    pub counts: Vec<(Label, usize)>,
    /// `augmented` encoded as UTF-8 CSV, ready to be saved.
    pub csv: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error("the file contains no rows")]
    EmptyDataset,

    #[error("classifier failed: {0}")]
    Classifier(#[from] ModelError),

    #[error("classifier returned {got} labels for {expected} rows")]
    LabelCount { expected: usize, got: usize },

    #[error("classifier returned unknown class {0}")]
    UnknownClass(u8),

    #[error("cannot encode results as CSV: {0}")]
    Encoding(#[from] csv::Error),
}

impl PredictionError {
    /// Message shown to the user, whatever went wrong.
    pub fn user_message(&self) -> String {
        format!("Erreur au cours de la prédiction : {self}")
    }
}

/// Classify every row of `dataset` and build the full report.
///
/// Nothing is returned unless every step succeeds.
pub fn run_prediction(
    dataset: &Dataset,
    classifier: &dyn Classifier,
) -> Result<PredictionReport, PredictionError> {
    let features = dataset.feature_matrix(&FEATURE_COLUMNS)?;
    if features.is_empty() {
        return Err(PredictionError::EmptyDataset);
    }

    let classes = classifier.predict(&features)?;
    if classes.len() != features.len() {
        return Err(PredictionError::LabelCount {
            expected: features.len(),
            got: classes.len(),
        });
    }

    let labels = classes
        .into_iter()
        .map(|c| Label::from_class(c).ok_or(PredictionError::UnknownClass(c)))
        .collect::<Result<Vec<_>, _>>()?;

    let augmented = dataset.with_column(
        PREDICTION_COLUMN,
        labels.iter().map(|l| l.as_str().to_string()).collect(),
    );
    let counts = label_counts(&labels);
    let csv = to_csv_bytes(&augmented)?;

    log::info!("Predicted {} rows: {:?}", labels.len(), counts);

    Ok(PredictionReport {
        augmented,
        labels,
        counts,
        csv,
    })
}

/// Frequency of each occurring label, most frequent first; ties keep the
/// `Faux`, `Vrai` order.
pub fn label_counts(labels: &[Label]) -> Vec<(Label, usize)> {
    let mut counts: Vec<(Label, usize)> = [Label::Faux, Label::Vrai]
        .into_iter()
        .map(|label| (label, labels.iter().filter(|&&l| l == label).count()))
        .filter(|&(_, n)| n > 0)
        .collect();
    // Stable sort keeps label order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
