//! Colours with alpha, and the blender used to flash table rows.

use tui::style::Color;

/// An 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Channel-wise linear blend, where `t = 0` is `self` and `t = 1` is `other`.
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            let (from, to) = (f64::from(from), f64::from(to));
            (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
        };

        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Composite this colour over an opaque background. Terminals have no
    /// alpha channel, so this is how transparency ends up on screen.
    pub fn over(self, background: Rgba) -> Rgba {
        background
            .with_alpha(u8::MAX)
            .lerp(self.with_alpha(u8::MAX), f64::from(self.a) / 255.0)
    }

    /// The terminal colour for this value, composited over black.
    pub fn to_colour(self) -> Color {
        let Rgba { r, g, b, .. } = self.over(Rgba::BLACK);
        Color::Rgb(r, g, b)
    }
}

/// Interpolates between an idle and an active colour.
///
/// Snapping to active happens via [`ColorBlender::set_right`], and fading
/// back to idle one step per tick via [`ColorBlender::shift_to_left`].
#[derive(Debug, Clone)]
pub struct ColorBlender {
    idle: Rgba,
    active: Rgba,
    step: f64,
    fraction: f64,
}

impl ColorBlender {
    /// A step of zero is allowed and means the colour never fades. Steps
    /// outside of `[0, 1]` are clamped.
    pub fn new(idle: Rgba, active: Rgba, step: f64) -> Self {
        let step = if step.is_nan() {
            0.0
        } else {
            step.clamp(0.0, 1.0)
        };

        Self {
            idle,
            active,
            step,
            fraction: 0.0,
        }
    }

    /// Jump to fully active, returning the active colour.
    pub fn set_right(&mut self) -> Rgba {
        self.fraction = 1.0;
        self.active
    }

    /// Move one step toward idle, returning the resulting colour.
    pub fn shift_to_left(&mut self) -> Rgba {
        self.fraction = (self.fraction - self.step).max(0.0);
        self.colour()
    }

    /// The colour at the current fraction.
    pub fn colour(&self) -> Rgba {
        if self.fraction >= 1.0 {
            self.active
        } else {
            self.idle.lerp(self.active, self.fraction)
        }
    }

    /// How far toward the active colour the blender currently is, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const IDLE: Rgba = Rgba::new(255, 255, 255, 255);
    const ACTIVE: Rgba = Rgba::new(0, 100, 0, 255);

    #[test]
    fn set_right_is_always_active() {
        let mut blender = ColorBlender::new(IDLE, ACTIVE, 0.3);
        assert_eq!(blender.set_right(), ACTIVE);

        blender.shift_to_left();
        blender.shift_to_left();
        assert_eq!(blender.set_right(), ACTIVE);
        assert_eq!(blender.fraction(), 1.0);
    }

    #[test]
    fn shift_converges_to_idle() {
        let mut blender = ColorBlender::new(IDLE, ACTIVE, 0.01);
        blender.set_right();

        let mut last = ACTIVE;
        for _ in 0..150 {
            last = blender.shift_to_left();
        }

        assert_eq!(blender.fraction(), 0.0);
        assert_eq!(last, IDLE);
    }

    #[test]
    fn shift_blends_channels() {
        let mut blender = ColorBlender::new(
            Rgba::new(0, 0, 0, 0),
            Rgba::new(200, 100, 50, 255),
            0.5,
        );
        blender.set_right();

        assert_eq!(blender.shift_to_left(), Rgba::new(100, 50, 25, 128));
        assert_eq!(blender.shift_to_left(), Rgba::new(0, 0, 0, 0));
    }

    #[test]
    fn zero_step_never_fades() {
        let mut blender = ColorBlender::new(IDLE, ACTIVE, 0.0);
        blender.set_right();

        for _ in 0..10 {
            assert_eq!(blender.shift_to_left(), ACTIVE);
        }
    }

    #[test]
    fn compositing() {
        let half_red = Rgba::new(255, 0, 0, 128);
        assert_eq!(half_red.over(Rgba::BLACK), Rgba::rgb(128, 0, 0));
        assert_eq!(Rgba::rgb(1, 2, 3).to_colour(), Color::Rgb(1, 2, 3));
    }
}
