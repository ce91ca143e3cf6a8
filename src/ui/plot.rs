use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::color::{highlight_color, ColorMap};
use crate::data::aggregate::GroupSummary;
use crate::data::model::{NumericField, Table};
use crate::data::rank::highlights;

// ---------------------------------------------------------------------------
// Comparison bars
// ---------------------------------------------------------------------------

/// One bar per group at x = 0, 1, 2, …; groups with no mean are left out.
fn comparison_bars(summaries: &[GroupSummary], field: NumericField) -> (Vec<Bar>, Vec<String>) {
    let labels: Vec<String> = summaries.iter().map(|s| s.key().to_string()).collect();
    let bars = summaries
        .iter()
        .zip(highlights(summaries, field))
        .enumerate()
        .filter_map(|(i, (s, highlight))| {
            let value = s.rounded_mean(field)?;
            Some(
                Bar::new(i as f64, value)
                    .name(s.key())
                    .fill(highlight_color(highlight))
                    .width(0.6),
            )
        })
        .collect();
    (bars, labels)
}

fn category_label(labels: &[String], position: f64) -> String {
    let idx = position.round();
    if (position - idx).abs() > f64::EPSILON || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// Vertical bars, categories along x.
pub fn bar_chart(ui: &mut Ui, id: &str, summaries: &[GroupSummary], field: NumericField) {
    let (bars, labels) = comparison_bars(summaries, field);
    Plot::new(id)
        .height(280.0)
        .y_axis_label(format!("Average {field}"))
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(format!("Average {field}")));
        });
}

/// Horizontal bars, categories along y.
pub fn barh_chart(ui: &mut Ui, id: &str, summaries: &[GroupSummary], field: NumericField) {
    let (bars, labels) = comparison_bars(summaries, field);
    Plot::new(id)
        .height(40.0 + 28.0 * summaries.len() as f32)
        .x_axis_label(format!("Average {field}"))
        .y_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .y_axis_min_width(120.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .name(format!("Average {field}")),
            );
        });
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

/// `x` against `y`, one coloured series per category of the colour map.
pub fn scatter_plot(
    ui: &mut Ui,
    id: &str,
    table: &Table,
    x: NumericField,
    y: NumericField,
    color_map: &ColorMap,
) {
    Plot::new(id)
        .height(320.0)
        .legend(Legend::default())
        .x_axis_label(x.column())
        .y_axis_label(y.column())
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            for (label, color) in color_map.legend_entries() {
                let points: PlotPoints = table
                    .iter()
                    .filter(|r| color_map.column.value(r) == Some(label.as_str()))
                    .filter_map(|r| Some([x.value(r)?, y.value(r)?]))
                    .collect();
                plot_ui.points(Points::new(points).name(&label).color(color).radius(3.0));
            }
        });
}
