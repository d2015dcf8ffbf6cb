use crate::classifier::Classifier;
use crate::data::model::Dataset;
use crate::predict::{PredictionReport, run_prediction};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Where the user is in the upload → predict flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    FileLoaded,
    Predicted,
}

/// Status line content: an informational note or an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Uploaded table (None until the user picks a file).
    pub dataset: Option<Dataset>,

    /// Display name of the uploaded file.
    pub file_name: Option<String>,

    /// Results of the last successful prediction on `dataset`.
    pub report: Option<PredictionReport>,

    /// Message of the last failed prediction on `dataset`.
    pub prediction_error: Option<String>,

    /// Upload / download feedback shown in the top bar.
    pub status: Option<Status>,
}

impl AppState {
    pub fn stage(&self) -> Stage {
        match (&self.dataset, &self.report) {
            (None, _) => Stage::Idle,
            (Some(_), None) => Stage::FileLoaded,
            (Some(_), Some(_)) => Stage::Predicted,
        }
    }

    /// Ingest a newly uploaded table; any earlier results are dropped.
    pub fn set_dataset(&mut self, dataset: Dataset, file_name: String) {
        self.dataset = Some(dataset);
        self.file_name = Some(file_name);
        self.report = None;
        self.prediction_error = None;
        self.status = Some(Status::Info("Fichier chargé avec succès !".to_string()));
    }

    /// An upload could not be parsed: back to the idle state.
    pub fn load_failed(&mut self, message: String) {
        self.dataset = None;
        self.file_name = None;
        self.report = None;
        self.prediction_error = None;
        self.status = Some(Status::Error(message));
    }

    /// Run the classifier over the current table. Failures are kept as a
    /// message and leave no partial results behind.
    pub fn predict(&mut self, classifier: &dyn Classifier) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        match run_prediction(dataset, classifier) {
            Ok(report) => {
                self.report = Some(report);
                self.prediction_error = None;
            }
            Err(e) => {
                log::error!("Prediction failed: {e}");
                self.report = None;
                self.prediction_error = Some(e.user_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ModelError;
    use crate::data::loader::load_bytes;

    struct AlwaysGenuine;

    impl Classifier for AlwaysGenuine {
        fn predict(&self, rows: &[[f64; 3]]) -> Result<Vec<u8>, ModelError> {
            Ok(vec![1; rows.len()])
        }
    }

    fn valid() -> Dataset {
        load_bytes(b"margin_low,margin_up,length\n3.2,2.1,113.5\n4.0,3.0,112.9\n").unwrap()
    }

    #[test]
    fn starts_idle() {
        let state = AppState::default();
        assert_eq!(state.stage(), Stage::Idle);
    }

    #[test]
    fn upload_then_predict() {
        let mut state = AppState::default();
        state.set_dataset(valid(), "billets.csv".into());
        assert_eq!(state.stage(), Stage::FileLoaded);

        state.predict(&AlwaysGenuine);
        assert_eq!(state.stage(), Stage::Predicted);
        assert_eq!(state.report.as_ref().map(|r| r.labels.len()), Some(2));
    }

    #[test]
    fn predicting_without_a_file_does_nothing() {
        let mut state = AppState::default();
        state.predict(&AlwaysGenuine);
        assert_eq!(state.stage(), Stage::Idle);
        assert!(state.prediction_error.is_none());
    }

    #[test]
    fn new_upload_discards_results() {
        let mut state = AppState::default();
        state.set_dataset(valid(), "a.csv".into());
        state.predict(&AlwaysGenuine);
        state.set_dataset(valid(), "b.csv".into());
        assert_eq!(state.stage(), Stage::FileLoaded);
        assert_eq!(state.file_name.as_deref(), Some("b.csv"));
    }

    #[test]
    fn failed_prediction_keeps_the_file_and_reports() {
        let mut state = AppState::default();
        state.set_dataset(valid(), "a.csv".into());
        state.predict(&AlwaysGenuine);

        let broken = load_bytes(b"margin_low,length\n3.2,113.5\n").unwrap();
        state.set_dataset(broken, "b.csv".into());
        state.predict(&AlwaysGenuine);

        assert_eq!(state.stage(), Stage::FileLoaded);
        let msg = state.prediction_error.as_deref().unwrap();
        assert!(msg.starts_with("Erreur au cours de la prédiction : "));
    }

    #[test]
    fn failed_upload_returns_to_idle() {
        let mut state = AppState::default();
        state.set_dataset(valid(), "a.csv".into());
        state.load_failed("Error: bad file".into());
        assert_eq!(state.stage(), Stage::Idle);
        assert_eq!(state.status, Some(Status::Error("Error: bad file".into())));
    }
}
