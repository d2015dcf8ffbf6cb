// ---------------------------------------------------------------------------
// Fixed application settings
// ---------------------------------------------------------------------------

/// Location of the serialized classifier, relative to the working directory.
pub const MODEL_PATH: &str = "model_rlo_opt.json";

/// Input columns fed to the classifier, in the order it expects them.
pub const FEATURE_COLUMNS: [&str; 3] = ["margin_low", "margin_up", "length"];

/// Name of the column appended to the uploaded table.
pub const PREDICTION_COLUMN: &str = "Prédiction";

/// File name proposed when saving the results.
pub const DOWNLOAD_FILE_NAME: &str = "predictions_nif.csv";

/// Fixed texts, colours and window geometry used by the UI.
/// Nothing here is read from flags or the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub download_file_name: String,
    pub chart_title: String,
    pub chart_y_label: String,
    /// Hex colour of the "Faux" bar.
    pub fake_color: String,
    /// Hex colour of the "Vrai" bar.
    pub genuine_color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "FakeCash Buster".to_string(),
            window_size: [1100.0, 800.0],
            min_window_size: [600.0, 400.0],
            download_file_name: DOWNLOAD_FILE_NAME.to_string(),
            chart_title: "Nombre de billets détectés comme Faux ou Vrai".to_string(),
            chart_y_label: "Nombre de billets".to_string(),
            fake_color: "#FF6B6B".to_string(),
            genuine_color: "#4ECDC4".to_string(),
        }
    }
}
