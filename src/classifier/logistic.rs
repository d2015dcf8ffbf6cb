use std::path::Path;

use serde::Deserialize;

use super::{Classifier, ModelError};
use crate::config::FEATURE_COLUMNS;

// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

/// Optional standardisation applied before the linear term:
/// `x' = (x - mean) / scale`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

fn default_threshold() -> f64 {
    0.5
}

/// Logistic regression exported from the training notebook.
///
/// Expected JSON:
///
/// ```json
/// {
///   "name": "rlo_opt",
///   "features": ["margin_low", "margin_up", "length"],
///   "coefficients": [-5.0, -10.0, 4.0],
///   "intercept": -394.35,
///   "threshold": 0.5
/// }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LogisticModel {
    #[serde(default)]
    pub name: String,
    pub features: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub scaler: Option<Scaler>,
}

impl LogisticModel {
    /// Read and validate a model file. Not cached; see [`super::load_model`].
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let model: LogisticModel = serde_json::from_str(text)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.features.iter().map(String::as_str).ne(FEATURE_COLUMNS) {
            return Err(ModelError::Invalid(format!(
                "expected features {FEATURE_COLUMNS:?}, found {:?}",
                self.features
            )));
        }
        if self.coefficients.len() != FEATURE_COLUMNS.len() {
            return Err(ModelError::Invalid(format!(
                "expected {} coefficients, found {}",
                FEATURE_COLUMNS.len(),
                self.coefficients.len()
            )));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::Invalid("non-finite weight".to_string()));
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(ModelError::Invalid(format!(
                "threshold {} outside (0, 1)",
                self.threshold
            )));
        }
        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != FEATURE_COLUMNS.len()
                || scaler.scale.len() != FEATURE_COLUMNS.len()
            {
                return Err(ModelError::Invalid(
                    "scaler must have one mean and one scale per feature".to_string(),
                ));
            }
            if scaler.mean.iter().any(|m| !m.is_finite())
                || scaler.scale.iter().any(|s| !s.is_finite() || *s == 0.0)
            {
                return Err(ModelError::Invalid(
                    "scaler values must be finite and scales non-zero".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Linear term `intercept + Σ coef · x'` for one row.
    pub fn decision_function(&self, row: &[f64; 3]) -> f64 {
        row.iter()
            .enumerate()
            .map(|(i, &x)| {
                let x = match &self.scaler {
                    Some(s) => (x - s.mean[i]) / s.scale[i],
                    None => x,
                };
                self.coefficients[i] * x
            })
            .sum::<f64>()
            + self.intercept
    }

    /// Probability of class 1 ("Vrai").
    pub fn predict_proba(&self, row: &[f64; 3]) -> f64 {
        1.0 / (1.0 + (-self.decision_function(row)).exp())
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, rows: &[[f64; 3]]) -> Result<Vec<u8>, ModelError> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                if row.iter().any(|v| !v.is_finite()) {
                    return Err(ModelError::NonFiniteInput { row: i });
                }
                Ok(u8::from(self.predict_proba(row) > self.threshold))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const MODEL: &str = r#"{
        "name": "test",
        "features": ["margin_low", "margin_up", "length"],
        "coefficients": [-5.0, -10.0, 4.0],
        "intercept": -394.35
    }"#;

    #[rstest]
    #[case([3.2, 2.1, 113.5], 1)]
    #[case([4.1, 3.05, 113.2], 1)]
    #[case([5.2, 3.35, 111.6], 0)]
    #[case([6.0, 3.5, 110.0], 0)]
    fn classifies_typical_notes(#[case] row: [f64; 3], #[case] expected: u8) {
        let model = LogisticModel::from_json(MODEL).unwrap();
        assert_eq!(model.predict(&[row]).unwrap(), vec![expected]);
    }

    #[test]
    fn threshold_defaults_to_half() {
        let model = LogisticModel::from_json(MODEL).unwrap();
        assert_eq!(model.threshold, 0.5);
        assert!(model.scaler.is_none());
    }

    #[test]
    fn scaler_is_applied_before_weights() {
        let json = r#"{
            "features": ["margin_low", "margin_up", "length"],
            "coefficients": [1.0, 0.0, 0.0],
            "intercept": 0.0,
            "scaler": { "mean": [4.0, 0.0, 0.0], "scale": [2.0, 1.0, 1.0] }
        }"#;
        let model = LogisticModel::from_json(json).unwrap();
        assert_eq!(model.decision_function(&[6.0, 9.0, 9.0]), 1.0);
        assert_eq!(model.predict(&[[6.0, 0.0, 0.0], [2.0, 0.0, 0.0]]).unwrap(), vec![1, 0]);
    }

    #[test]
    fn prediction_is_deterministic_and_ordered() {
        let model = LogisticModel::from_json(MODEL).unwrap();
        let rows = [[5.2, 3.35, 111.6], [3.2, 2.1, 113.5], [5.5, 3.3, 111.0]];
        let first = model.predict(&rows).unwrap();
        assert_eq!(first, vec![0, 1, 0]);
        assert_eq!(model.predict(&rows).unwrap(), first);
    }

    #[test]
    fn rejects_nan_rows() {
        let model = LogisticModel::from_json(MODEL).unwrap();
        let err = model.predict(&[[1.0, 2.0, 3.0], [f64::NAN, 2.0, 3.0]]).unwrap_err();
        assert!(matches!(err, ModelError::NonFiniteInput { row: 1 }));
    }

    #[rstest]
    #[case(r#"{"features": ["margin_up", "margin_low", "length"], "coefficients": [1, 1, 1], "intercept": 0}"#)]
    #[case(r#"{"features": ["margin_low", "margin_up", "length"], "coefficients": [1, 1], "intercept": 0}"#)]
    #[case(r#"{"features": ["margin_low", "margin_up", "length"], "coefficients": [1, 1, 1], "intercept": 0, "threshold": 1.0}"#)]
    #[case(r#"{"features": ["margin_low", "margin_up", "length"], "coefficients": [1, 1, 1], "intercept": 0, "scaler": {"mean": [0, 0, 0], "scale": [1, 0, 1]}}"#)]
    fn rejects_invalid_artifacts(#[case] json: &str) {
        assert!(matches!(
            LogisticModel::from_json(json),
            Err(ModelError::Invalid(_))
        ));
    }

    #[test]
    fn corrupt_json_is_a_parse_error() {
        assert!(matches!(
            LogisticModel::from_json("{ not json"),
            Err(ModelError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LogisticModel::from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }
}
