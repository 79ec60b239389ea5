use std::fmt::Write;

use timesaurus_core::types::DashboardView;

const TITLE: &str = "TimeSaurus";

/// Widest bar drawn, whatever the configured width
pub const MAX_CHART_WIDTH: u32 = 200;

/// Bar of `width` columns scaled against `max`
fn bar(value: f64, max: f64, width: u32) -> String {
    let width = width.min(MAX_CHART_WIDTH);
    if width == 0 || max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * width as f64).round() as usize;
    "█".repeat(len.max(1))
}

fn max_value(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

/// Text rendering of one dashboard frame
pub fn render_dashboard(view: &DashboardView, chart_width: u32, show_line_chart: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{TITLE}  [{}]", view.toggle_label);
    let _ = writeln!(out, "{}", view.description);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{} ({}: {})",
        view.bar_labels.title,
        view.decade_caption,
        view.decade.range_label()
    );
    let label_width = view
        .bar
        .iter()
        .map(|p| p.word.chars().count())
        .max()
        .unwrap_or(0);
    let max = max_value(view.bar.iter().map(|p| p.value));
    for point in &view.bar {
        let pad = label_width - point.word.chars().count();
        let _ = writeln!(
            out,
            "  {}{} | {} {:.2}",
            point.word,
            " ".repeat(pad),
            bar(point.value, max, chart_width),
            point.value
        );
    }
    let _ = writeln!(
        out,
        "  x: {}  y: {}",
        view.bar_labels.x_axis, view.bar_labels.y_axis
    );

    if show_line_chart {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}: {}", view.line_labels.title, view.line_word);
        let max = max_value(view.line.iter().map(|p| p.value));
        for point in &view.line {
            let _ = writeln!(
                out,
                "  {} | {} {:.2}",
                point.decade.range_label(),
                bar(point.value, max, chart_width),
                point.value
            );
        }
        let _ = writeln!(
            out,
            "  x: {}  y: {}",
            view.line_labels.x_axis, view.line_labels.y_axis
        );
    }

    let _ = writeln!(out);
    let inputs: Vec<String> = view
        .bar_inputs
        .iter()
        .enumerate()
        .map(|(i, text)| format!("{} {}: {}", view.word_caption, i + 1, text))
        .collect();
    let _ = writeln!(out, "{}", inputs.join("  "));
    let _ = writeln!(out, "{}: {}", view.line_word_caption, view.line_input);

    out
}

/// Text rendering of the autosuggestion list
pub fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        "  (no suggestions)\n".to_string()
    } else {
        format!("  > {}\n", suggestions.join(", "))
    }
}
