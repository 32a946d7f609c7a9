use tui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    text::Line,
    widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine},
    Frame,
};

use crate::{
    canvas::{
        drawing_utils::{polar, square_area, widget_block, with_diagnostic},
        Painter,
    },
    instruments::attitude::PITCH_TO_FACE,
    widgets::{AttitudeWidget, INSTRUMENT_SIZE},
};

const SKY: Color = Color::Rgb(40, 110, 200);
const GROUND: Color = Color::Rgb(130, 80, 20);
const SYMBOL: Color = Color::LightYellow;

/// Bank marks on the ring, in degrees either side of wings-level.
const BANK_MARKS: [f64; 6] = [10.0, 20.0, 30.0, 45.0, 60.0, 90.0];

/// Pitch ladder rungs, in degrees.
const PITCH_RUNGS: [f64; 4] = [-20.0, -10.0, 10.0, 20.0];

/// Rendered pixels per canvas unit; the instrument spans `[-1, 1]`.
const PIXELS_PER_UNIT: f64 = INSTRUMENT_SIZE.1 / 2.0;

/// Where the line through `centre` along the unit vector `direction` crosses
/// the unit circle, if it does.
fn clip_to_face(centre: (f64, f64), direction: (f64, f64)) -> Option<((f64, f64), (f64, f64))> {
    let (cx, cy) = centre;
    let (dx, dy) = direction;

    let half_b = cx * dx + cy * dy;
    let c = cx * cx + cy * cy - 1.0;
    let discriminant = half_b * half_b - c;
    if discriminant <= 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let (t1, t2) = (-half_b - root, -half_b + root);
    Some(((cx + t1 * dx, cy + t1 * dy), (cx + t2 * dx, cy + t2 * dy)))
}

fn draw_chord(ctx: &mut Context<'_>, centre: (f64, f64), direction: (f64, f64), color: Color) {
    if let Some(((x1, y1), (x2, y2))) = clip_to_face(centre, direction) {
        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
    }
}

impl Painter {
    /// Draws the four layers: the background and face turned and shifted by
    /// the layer transforms, the bank ring turned with them, and the fixed
    /// case with its aircraft symbol.
    pub fn draw_attitude(&self, f: &mut Frame<'_>, attitude: &AttitudeWidget, draw_loc: Rect) {
        let state = attitude.state();
        let block = with_diagnostic(
            widget_block(attitude.title(), &self.styles).title_bottom(Line::styled(
                format!(" R {:+.0}° P {:+.0}° ", state.roll(), state.pitch()),
                self.styles.text_style,
            )),
            attitude.diagnostic(),
            self.styles.diagnostic_style,
        );
        let inner = block.inner(draw_loc);
        f.render_widget(block, draw_loc);

        let transforms = *attitude.transforms();

        // Rotations are clockwise on a y-down surface, so on this y-up canvas
        // the horizon points along (cos, -sin) of the face rotation.
        let rotation = transforms.face_rotation.to_radians();
        let along = (rotation.cos(), -rotation.sin());
        let up = (-along.1, along.0);

        let (dx, dy) = transforms.face_offset;
        let centre = (dx / PIXELS_PER_UNIT, -dy / PIXELS_PER_UNIT);
        let rung_spacing = PITCH_TO_FACE * attitude.face_scale().1 / PIXELS_PER_UNIT;

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.2, 1.2])
            .y_bounds([-1.2, 1.2])
            .paint(|ctx| {
                // Background: sky and ground, filled with chords along the horizon.
                let fill_step = 0.04;
                for step in 1..60 {
                    let offset = f64::from(step) * fill_step;
                    let above = (centre.0 + up.0 * offset, centre.1 + up.1 * offset);
                    let below = (centre.0 - up.0 * offset, centre.1 - up.1 * offset);
                    draw_chord(ctx, above, along, SKY);
                    draw_chord(ctx, below, along, GROUND);
                }

                // Face: horizon and pitch ladder.
                ctx.layer();
                draw_chord(ctx, centre, along, Color::White);
                for pitch in PITCH_RUNGS {
                    let offset = pitch * rung_spacing;
                    let half = if pitch.abs() >= 20.0 { 0.3 } else { 0.18 };
                    let mid = (centre.0 + up.0 * offset, centre.1 + up.1 * offset);
                    ctx.draw(&CanvasLine::new(
                        mid.0 - along.0 * half,
                        mid.1 - along.1 * half,
                        mid.0 + along.0 * half,
                        mid.1 + along.1 * half,
                        Color::White,
                    ));
                }

                // Ring: bank marks, turned with the face.
                ctx.layer();
                let ring_bearing = transforms.ring_rotation;
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 1.0,
                    color: Color::Gray,
                });
                for mark in BANK_MARKS {
                    for bearing in [mark, -mark] {
                        let inner_radius = if mark % 30.0 == 0.0 { 0.85 } else { 0.92 };
                        let (x1, y1) = polar(bearing + ring_bearing, 1.0);
                        let (x2, y2) = polar(bearing + ring_bearing, inner_radius);
                        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, Color::White));
                    }
                }

                // Case: the index and aircraft symbol never move.
                ctx.layer();
                ctx.draw(&CanvasLine::new(-0.06, 1.12, 0.0, 1.02, SYMBOL));
                ctx.draw(&CanvasLine::new(0.06, 1.12, 0.0, 1.02, SYMBOL));
                ctx.draw(&CanvasLine::new(-0.55, 0.0, -0.15, 0.0, SYMBOL));
                ctx.draw(&CanvasLine::new(0.15, 0.0, 0.55, 0.0, SYMBOL));
                ctx.draw(&CanvasLine::new(-0.15, 0.0, -0.15, -0.08, SYMBOL));
                ctx.draw(&CanvasLine::new(0.15, 0.0, 0.15, -0.08, SYMBOL));
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 0.03,
                    color: SYMBOL,
                });
            });

        f.render_widget(canvas, square_area(inner));
    }
}
