use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, GridInput, Plot, PlotPoint, Text, uniform_grid_spacer};

use crate::classifier::Label;
use crate::color::LabelColors;
use crate::config::AppConfig;

// ---------------------------------------------------------------------------
// Label count bar chart
// ---------------------------------------------------------------------------

const BAR_WIDTH: f64 = 0.6;

/// One bar per occurring label, count written at half height inside the bar.
pub fn label_chart(
    ui: &mut Ui,
    counts: &[(Label, usize)],
    colors: &LabelColors,
    config: &AppConfig,
) {
    ui.label(RichText::new(&config.chart_title).strong());

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, &(label, n))| {
            Bar::new(i as f64, n as f64)
                .name(label.as_str())
                .fill(colors.color_for(label))
                .stroke(Stroke::new(1.0, colors.stroke_for(label)))
                .width(BAR_WIDTH)
        })
        .collect();

    let names: Vec<&'static str> = counts.iter().map(|(label, _)| label.as_str()).collect();
    let max_count = counts.iter().map(|&(_, n)| n).max().unwrap_or(0) as f64;

    Plot::new("label_chart")
        .height(300.0)
        .y_axis_label(config.chart_y_label.clone())
        .x_axis_formatter(move |mark, _range| category_name(&names, mark.value))
        .x_grid_spacer(uniform_grid_spacer(|_input: GridInput| [1.0, 1.0, 1.0]))
        .y_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .y_grid_spacer(uniform_grid_spacer(|input: GridInput| {
            integer_steps(input.base_step_size)
        }))
        .include_x(-0.5)
        .include_x(counts.len() as f64 - 0.5)
        .include_y(0.0)
        .include_y((max_count * 1.1).max(1.0))
        .show_x(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Prédiction"));
            for (i, &(_, n)) in counts.iter().enumerate() {
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(i as f64, n as f64 / 2.0),
                        RichText::new(n.to_string()).size(16.0).color(Color32::BLACK),
                    )
                    .anchor(Align2::CENTER_CENTER),
                );
            }
        });
}

/// Tick label for a category axis position; blank between categories.
fn category_name(names: &[&str], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    names
        .get(rounded as usize)
        .map(|n| n.to_string())
        .unwrap_or_default()
}

/// Grid steps that only ever land on whole numbers.
fn integer_steps(base_step: f64) -> [f64; 3] {
    let step = base_step.ceil().max(1.0);
    [step, step * 5.0, step * 10.0]
}
