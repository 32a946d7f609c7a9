use std::collections::VecDeque;

use itertools::{Itertools, MinMaxResult};

use super::node::{Arity, Render};
use crate::{collection::Value, instruments::Rgba};

/// How many samples a series keeps by default.
pub const DEFAULT_CHART_WINDOW: usize = 600;

/// A single rolling line in a chart.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    label: String,
    colour: Rgba,
    points: VecDeque<(f64, f64)>,
    diagnostic: Option<String>,
}

impl ChartSeries {
    fn new(label: String, colour: Rgba, window: usize) -> Self {
        Self {
            label,
            colour,
            points: flat_window(window),
            diagnostic: None,
        }
    }

    /// Scroll by one sample. Values that can't be plotted are drawn as zero
    /// and their reason is kept until the next good value.
    fn update(&mut self, value: &Value) {
        let y = match value.as_number() {
            Ok(y) => {
                self.diagnostic = None;
                y
            }
            Err(reason) => {
                self.diagnostic = Some(reason.into_owned());
                0.0
            }
        };

        let next_x = self.points.back().map(|(x, _)| x + 1.0).unwrap_or(0.0);
        self.points.pop_front();
        self.points.push_back((next_x, y));
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn colour(&self) -> Rgba {
        self.colour
    }

    /// Points from oldest to newest.
    pub fn points(&self) -> &VecDeque<(f64, f64)> {
        &self.points
    }

    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }
}

/// A window of zeroes, so a new chart scrolls in from a flat line.
fn flat_window(window: usize) -> VecDeque<(f64, f64)> {
    (0..window).map(|x| (x as f64, 0.0)).collect()
}

/// A scrolling line chart with one series per source.
#[derive(Debug, Clone)]
pub struct ChartWidget {
    title: Option<String>,
    window: usize,
    y_range: Option<(f64, f64)>,
    series: Vec<ChartSeries>,
}

impl ChartWidget {
    /// Series colours are taken from `palette` in order, wrapping around.
    pub fn new(
        title: Option<String>, labels: Vec<String>, palette: &[Rgba], window: usize,
        y_range: Option<(f64, f64)>,
    ) -> Self {
        let window = window.max(1);
        let series = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| {
                ChartSeries::new(label, series_colour(palette, index), window)
            })
            .collect();

        Self {
            title,
            window,
            y_range,
            series,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    /// The x-axis bounds covering the visible window.
    pub fn x_bounds(&self) -> [f64; 2] {
        self.series
            .first()
            .and_then(|series| Some([series.points.front()?.0, series.points.back()?.0]))
            .unwrap_or([0.0, self.window as f64])
    }

    /// The configured y range, or one that fits every visible point.
    pub fn y_bounds(&self) -> [f64; 2] {
        if let Some((low, high)) = self.y_range {
            return [low, high];
        }

        let all_y = self
            .series
            .iter()
            .flat_map(|series| series.points.iter().map(|(_, y)| *y))
            .filter(|y| y.is_finite());

        match all_y.minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::MinMax(low, high) if high > low => [low, high],
            MinMaxResult::MinMax(value, _) | MinMaxResult::OneElement(value) => {
                [value - 1.0, value + 1.0]
            }
            MinMaxResult::NoElements => [-1.0, 1.0],
        }
    }
}

/// Pick the colour for the `index`th series, cycling through the palette.
pub(crate) fn series_colour(palette: &[Rgba], index: usize) -> Rgba {
    if palette.is_empty() {
        Rgba::rgb(255, 255, 255)
    } else {
        palette[index % palette.len()]
    }
}

impl Render for ChartWidget {
    fn kind_name(&self) -> &'static str {
        "chart"
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(self.series.len())
    }

    fn render(&mut self, values: &[Value]) {
        for (series, value) in self.series.iter_mut().zip(values) {
            series.update(value);
        }
    }

    fn reset(&mut self) {
        for series in &mut self.series {
            series.points = flat_window(self.window);
            series.diagnostic = None;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const PALETTE: [Rgba; 2] = [Rgba::rgb(255, 0, 0), Rgba::rgb(0, 200, 0)];

    fn chart(labels: &[&str], window: usize) -> ChartWidget {
        ChartWidget::new(
            None,
            labels.iter().map(|label| label.to_string()).collect(),
            &PALETTE,
            window,
            None,
        )
    }

    #[test]
    fn series_scroll() {
        let mut chart = chart(&["alt"], 3);
        assert_eq!(chart.x_bounds(), [0.0, 2.0]);

        chart.render(&[Value::Number(5.0)]);
        chart.render(&[Value::Number(7.0)]);

        let points = chart.series()[0].points().iter().copied().collect::<Vec<_>>();
        assert_eq!(points, vec![(2.0, 0.0), (3.0, 5.0), (4.0, 7.0)]);
        assert_eq!(chart.x_bounds(), [2.0, 4.0]);
        assert_eq!(chart.y_bounds(), [0.0, 7.0]);
    }

    #[test]
    fn no_data_plots_zero_with_message() {
        let mut chart = chart(&["gps"], 2);

        chart.render(&[Value::Number(3.0)]);
        chart.render(&[Value::no_data("sensor offline")]);
        assert_eq!(chart.series()[0].diagnostic(), Some("sensor offline"));
        assert_eq!(chart.series()[0].points().back(), Some(&(3.0, 0.0)));

        chart.render(&[Value::Number(1.0)]);
        assert_eq!(chart.series()[0].diagnostic(), None);
    }

    #[test]
    fn colours_wrap_around() {
        let chart = chart(&["a", "b", "c"], 10);
        let colours = chart
            .series()
            .iter()
            .map(ChartSeries::colour)
            .collect::<Vec<_>>();

        assert_eq!(colours, vec![PALETTE[0], PALETTE[1], PALETTE[0]]);
    }

    #[test]
    fn fixed_and_flat_bounds() {
        let fixed = ChartWidget::new(None, vec!["a".into()], &PALETTE, 5, Some((-10.0, 10.0)));
        assert_eq!(fixed.y_bounds(), [-10.0, 10.0]);

        let flat = chart(&["a"], 5);
        assert_eq!(flat.y_bounds(), [-1.0, 1.0]);
    }

    #[test]
    fn reset_flattens() {
        let mut chart = chart(&["a"], 2);
        chart.render(&[Value::Number(9.0)]);
        chart.reset();

        let points = chart.series()[0].points().iter().copied().collect::<Vec<_>>();
        assert_eq!(points, vec![(0.0, 0.0), (1.0, 0.0)]);
    }
}
