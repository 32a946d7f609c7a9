/// Heading indicator state. The case layer stays fixed while the face turns
/// opposite to the heading, so the lubber line reads the current heading.
#[derive(Debug, Clone, Default)]
pub struct HeadingState {
    heading: f64,
}

impl HeadingState {
    /// Set the heading in degrees. NaN and infinities are ignored, since they
    /// have no rotation.
    pub fn set_heading(&mut self, heading: f64) {
        if heading.is_finite() {
            self.heading = heading;
        }
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// The face layer's rotation in degrees, unwrapped.
    pub fn face_rotation(&self) -> f64 {
        -self.heading
    }

    /// The face rotation as it is drawn, in `[0, 360)`.
    pub fn rendered_rotation(&self) -> f64 {
        normalise_degrees(self.face_rotation())
    }
}

/// Wrap an angle into `[0, 360)`.
pub fn normalise_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);

    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
