use std::path::Path;
use std::sync::OnceLock;

use super::logistic::LogisticModel;
use super::ModelError;
use crate::config::MODEL_PATH;

static MODEL: OnceLock<LogisticModel> = OnceLock::new();

/// Load the classifier from [`MODEL_PATH`] the first time, then hand out the
/// same instance for the rest of the process.
pub fn load_model() -> Result<&'static LogisticModel, ModelError> {
    load_model_from(Path::new(MODEL_PATH))
}

/// Like [`load_model`] with an explicit path. Only the first successful load
/// is cached; later calls ignore `path`.
pub fn load_model_from(path: &Path) -> Result<&'static LogisticModel, ModelError> {
    if let Some(model) = MODEL.get() {
        return Ok(model);
    }
    let model = LogisticModel::from_path(path)?;
    log::info!(
        "Loaded model '{}' from {} ({} features, threshold {})",
        model.name,
        path.display(),
        model.features.len(),
        model.threshold
    );
    Ok(MODEL.get_or_init(|| model))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_loads_return_the_same_instance() {
        // Unit tests run from the package root, where the shipped model lives.
        let first = load_model().unwrap();
        let second = load_model().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.features, ["margin_low", "margin_up", "length"]);
    }

    #[test]
    fn cached_instance_survives_a_missing_path() {
        let first = load_model().unwrap();
        let again = load_model_from(Path::new("does/not/exist.json")).unwrap();
        assert!(std::ptr::eq(first, again));
    }
}
