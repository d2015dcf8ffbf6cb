use eframe::egui::{self, Color32, RichText, Ui};

use crate::classifier::Classifier;
use crate::color::LabelColors;
use crate::config::{AppConfig, PREDICTION_COLUMN};
use crate::data::export::save_bytes;
use crate::data::loader::load_file;
use crate::state::{AppState, Stage, Status};
use crate::ui::{chart, table};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Fichier", |ui: &mut Ui| {
            if ui.button("Ouvrir un CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(name)) = (&state.dataset, &state.file_name) {
            ui.label(format!("{name} : {} lignes, {} colonnes", ds.len(), ds.columns.len()));
            ui.separator();
        }

        match &state.status {
            Some(Status::Info(msg)) => {
                ui.label(RichText::new(msg).color(Color32::DARK_GREEN));
            }
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
}

// ---------------------------------------------------------------------------
// Page header
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui, colors: &LabelColors) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new("FakeCash Buster").size(32.0).color(colors.faux));
        ui.label(
            RichText::new("Détectez de faux billets grâce au Machine Learning !").size(18.0),
        );
    });
    ui.add_space(8.0);
    ui.label(
        "Nous analysons précisément les dimensions des billets de banque, \
         pour déterminer en un clin d'œil s'il est authentique.",
    );
    ui.label(
        "Notre algorithme utilise une régression logistique optimisée par \
         Model-based Feature Selection.",
    );
    ui.add_space(8.0);
}

// ---------------------------------------------------------------------------
// Upload → preview → predict → results
// ---------------------------------------------------------------------------

pub fn upload_section(ui: &mut Ui, state: &mut AppState) {
    if ui.button("Sélectionnez un fichier CSV").clicked() {
        open_file_dialog(state);
    }

    let Some(dataset) = &state.dataset else {
        return;
    };
    ui.add_space(8.0);
    ui.heading("Aperçu du fichier chargé :");
    if dataset.is_empty() {
        ui.label(RichText::new("Le fichier ne contient aucune ligne de données.").italics());
    }
    table::dataset_table(ui, "preview_table", dataset, None);
}

pub fn predict_button(ui: &mut Ui, state: &mut AppState, classifier: &dyn Classifier) {
    if state.stage() == Stage::Idle {
        return;
    }
    ui.add_space(8.0);
    if ui.button(RichText::new("Prédire nos données").strong()).clicked() {
        state.predict(classifier);
    }
    if let Some(msg) = &state.prediction_error {
        ui.label(RichText::new(msg).color(Color32::RED));
    }
}

pub fn results_section(ui: &mut Ui, state: &mut AppState, config: &AppConfig, colors: &LabelColors) {
    let Some(report) = &state.report else {
        return;
    };

    ui.add_space(8.0);
    ui.heading("Résultats des prédictions :");
    let label_column = report
        .augmented
        .column_index(PREDICTION_COLUMN)
        .map(|idx| (idx, colors));
    table::dataset_table(ui, "results_table", &report.augmented, label_column);

    ui.add_space(8.0);
    chart::label_chart(ui, &report.counts, colors, config);

    ui.add_space(8.0);
    if ui.button("Télécharger les résultats").clicked() {
        let bytes = report.csv.clone();
        save_file_dialog(state, &bytes, &config.download_file_name);
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Sélectionnez un fichier CSV")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?} from {}",
                    dataset.len(),
                    dataset.columns,
                    path.display()
                );
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                state.set_dataset(dataset, name);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.load_failed(format!("Erreur : {e:#}"));
            }
        }
    }
}

pub fn save_file_dialog(state: &mut AppState, bytes: &[u8], file_name: &str) {
    let file = rfd::FileDialog::new()
        .set_title("Télécharger les résultats")
        .set_file_name(file_name)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match save_bytes(&path, bytes) {
            Ok(()) => {
                log::info!("Saved {} bytes to {}", bytes.len(), path.display());
                state.status = Some(Status::Info(format!(
                    "Résultats enregistrés dans {}",
                    path.display()
                )));
            }
            Err(e) => {
                log::error!("Failed to save results: {e:#}");
                state.status = Some(Status::Error(format!("Erreur : {e:#}")));
            }
        }
    }
}
