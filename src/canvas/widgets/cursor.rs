use itertools::Itertools;
use tui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Circle, Points, Rectangle},
    Frame,
};

use crate::{
    canvas::{drawing_utils::widget_block, Painter},
    instruments::{trail::PLOT_MARGIN, PlotMapping},
    widgets::CursorWidget,
};

/// Converts a pixel position from the plot's y-down space to the canvas'
/// y-up space. The picture is unchanged, so `y_min` stays at the top.
fn to_canvas(mapping: &PlotMapping, (x, y): (f64, f64)) -> (f64, f64) {
    (x, mapping.height() - y)
}

impl Painter {
    /// Draws every cursor's trail over the plot area. Older samples are
    /// dimmer, and the newest is drawn as a ring.
    pub fn draw_cursor(
        &self, f: &mut Frame<'_>, cursor: &CursorWidget, draw_loc: Rect, dot_marker: bool,
    ) {
        let mapping = *cursor.mapping();
        let marker = if dot_marker {
            Marker::Dot
        } else {
            Marker::Braille
        };

        let mut block = widget_block(cursor.title(), &self.styles);
        let diagnostics = cursor
            .cursors()
            .iter()
            .filter_map(|c| Some(format!("{}: {}", c.label(), c.diagnostic()?)))
            .join(", ");
        if !diagnostics.is_empty() {
            block = block.title_bottom(Line::styled(
                format!(" no data: {diagnostics} "),
                self.styles.diagnostic_style,
            ));
        }

        let (x_min, x_max) = mapping.x_range();
        let (y_min, y_max) = mapping.y_range();
        let label_style = self.styles.text_style;

        let canvas = Canvas::default()
            .block(block)
            .marker(marker)
            .x_bounds([0.0, mapping.width()])
            .y_bounds([0.0, mapping.height()])
            .paint(|ctx| {
                ctx.draw(&Rectangle {
                    x: PLOT_MARGIN,
                    y: PLOT_MARGIN,
                    width: mapping.width() - 2.0 * PLOT_MARGIN,
                    height: mapping.height() - 2.0 * PLOT_MARGIN,
                    color: Color::DarkGray,
                });
                ctx.layer();

                for c in cursor.cursors() {
                    let trail = c.trail();
                    for (sample, mark) in trail.marks() {
                        let (x, y) = to_canvas(&mapping, mapping.to_pixel(sample));
                        let color = c.colour().with_alpha(mark.alpha).to_colour();

                        if mark.thickness > 1 {
                            ctx.draw(&Circle {
                                x,
                                y,
                                radius: mark.diameter / 2.0,
                                color,
                            });
                        } else {
                            ctx.draw(&Points {
                                coords: &[(x, y)],
                                color,
                            });
                        }
                    }
                }

                ctx.layer();
                ctx.print(
                    0.0,
                    mapping.height(),
                    Line::styled(format!("({x_min}, {y_min})"), label_style),
                );
                ctx.print(
                    mapping.width() / 2.0,
                    0.0,
                    Line::styled(format!("({x_max}, {y_max})"), label_style),
                );
            });

        f.render_widget(canvas, draw_loc);
    }
}
