use itertools::Itertools;
use tui::{
    layout::Rect,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, GraphType, LegendPosition},
    Frame,
};

use crate::{
    canvas::{drawing_utils::widget_block, styling::CanvasStyles, Painter},
    widgets::ChartWidget,
};

/// Formats an axis bound without trailing noise.
fn bound_label(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

impl Painter {
    pub fn draw_chart(
        &self, f: &mut Frame<'_>, chart: &ChartWidget, draw_loc: Rect, dot_marker: bool,
    ) {
        let marker = if dot_marker {
            Marker::Dot
        } else {
            Marker::Braille
        };

        // Datasets borrow their points, so they need to be contiguous first.
        let points = chart
            .series()
            .iter()
            .map(|series| series.points().iter().copied().collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let datasets = chart
            .series()
            .iter()
            .zip(&points)
            .map(|(series, points)| {
                Dataset::default()
                    .name(series.label().to_string())
                    .marker(marker)
                    .graph_type(GraphType::Line)
                    .style(CanvasStyles::series_style(series.colour()))
                    .data(points)
            })
            .collect::<Vec<_>>();

        let [x_min, x_max] = chart.x_bounds();
        let [y_min, y_max] = chart.y_bounds();

        let x_axis = Axis::default()
            .bounds([x_min, x_max])
            .style(self.styles.text_style);
        let y_axis = Axis::default()
            .bounds([y_min, y_max])
            .style(self.styles.text_style)
            .labels([
                Span::styled(bound_label(y_min), self.styles.text_style),
                Span::styled(bound_label(y_max), self.styles.text_style),
            ]);

        let mut block = widget_block(chart.title(), &self.styles);
        let diagnostics = chart
            .series()
            .iter()
            .filter_map(|series| Some(format!("{}: {}", series.label(), series.diagnostic()?)))
            .join(", ");
        if !diagnostics.is_empty() {
            block = block.title_bottom(Line::styled(
                format!(" no data: {diagnostics} "),
                self.styles.diagnostic_style,
            ));
        }

        f.render_widget(
            Chart::new(datasets)
                .block(block)
                .x_axis(x_axis)
                .y_axis(y_axis)
                .legend_position(Some(LegendPosition::TopLeft)),
            draw_loc,
        );
    }
}
