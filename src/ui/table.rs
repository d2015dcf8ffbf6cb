use eframe::egui::{RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::classifier::Label;
use crate::color::LabelColors;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Dataset table
// ---------------------------------------------------------------------------

const ROW_HEIGHT: f32 = 18.0;
const MAX_TABLE_HEIGHT: f32 = 260.0;

/// Render every row and column of `dataset`, preceded by a row-index column.
///
/// When `label_column` is set, cells of that column holding a label are
/// tinted with the label colour.
pub fn dataset_table(
    ui: &mut Ui,
    id: &str,
    dataset: &Dataset,
    label_column: Option<(usize, &LabelColors)>,
) {
    ui.push_id(id, |ui: &mut Ui| {
        ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .vscroll(true)
                .max_scroll_height(MAX_TABLE_HEIGHT)
                .column(Column::auto())
                .columns(Column::auto().at_least(60.0), dataset.columns.len())
                .header(20.0, |mut header| {
                    header.col(|_ui: &mut Ui| {});
                    for name in &dataset.columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, dataset.len(), |mut row| {
                        let idx = row.index();
                        row.col(|ui: &mut Ui| {
                            ui.label(RichText::new(idx.to_string()).weak());
                        });
                        for (col_idx, cell) in dataset.rows[idx].iter().enumerate() {
                            row.col(|ui: &mut Ui| {
                                let mut text = RichText::new(cell);
                                if let Some((label_idx, colors)) = label_column {
                                    if col_idx == label_idx {
                                        if let Some(label) = Label::from_name(cell) {
                                            text = text.strong().color(colors.color_for(label));
                                        }
                                    }
                                }
                                ui.label(text);
                            });
                        }
                    });
                });
        });
    });
}
