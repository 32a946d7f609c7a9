use tui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
    Frame,
};

use crate::{
    canvas::{
        drawing_utils::{polar, square_area, widget_block, with_diagnostic},
        Painter,
    },
    widgets::HeadingWidget,
};

const CARDINALS: [(f64, &str); 4] = [(0.0, "N"), (90.0, "E"), (180.0, "S"), (270.0, "W")];

impl Painter {
    /// Draws a compass card turned by the face rotation, under a fixed lubber
    /// line at the top.
    pub fn draw_heading(&self, f: &mut Frame<'_>, heading: &HeadingWidget, draw_loc: Rect) {
        let state = heading.state();
        let block = with_diagnostic(
            widget_block(heading.title(), &self.styles).title_bottom(Line::styled(
                format!(" {:03.0}° ", state.heading().rem_euclid(360.0)),
                self.styles.text_style,
            )),
            heading.diagnostic(),
            self.styles.diagnostic_style,
        );
        let inner = block.inner(draw_loc);
        f.render_widget(block, draw_loc);

        let rotation = state.rendered_rotation();
        let card_colour = self.styles.text_style.fg.unwrap_or(Color::Gray);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.2, 1.2])
            .y_bounds([-1.2, 1.2])
            .paint(|ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 1.0,
                    color: card_colour,
                });

                // Card ticks, every 30 degrees, turning with the face.
                for bearing in (0..360).step_by(30) {
                    let screen_bearing = f64::from(bearing) + rotation;
                    let (x1, y1) = polar(screen_bearing, 1.0);
                    let (x2, y2) = polar(screen_bearing, 0.85);
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, card_colour));
                }

                ctx.layer();
                for (bearing, label) in CARDINALS {
                    let (x, y) = polar(bearing + rotation, 0.65);
                    ctx.print(x, y, Line::styled(label, self.styles.widget_title_style));
                }

                // The case: lubber line and aircraft, never rotated.
                ctx.layer();
                ctx.draw(&CanvasLine::new(0.0, 1.15, 0.0, 0.8, Color::LightYellow));
                ctx.draw(&CanvasLine::new(-0.3, 0.0, 0.3, 0.0, Color::LightYellow));
                ctx.draw(&CanvasLine::new(0.0, 0.25, 0.0, -0.3, Color::LightYellow));
            });

        f.render_widget(canvas, square_area(inner));
    }
}
