//! Attitude indicator math.
//!
//! The indicator is four stacked layers: background, face, ring and case.
//! Background, face and ring all turn against the roll; the face additionally
//! slides to show pitch. The case never moves.

/// Roll is limited to `[-ROLL_LIMIT, ROLL_LIMIT]` degrees.
pub const ROLL_LIMIT: f64 = 180.0;

/// Pitch is limited to `[-PITCH_LIMIT, PITCH_LIMIT]` degrees.
pub const PITCH_LIMIT: f64 = 25.0;

/// Face travel per degree of pitch, in face-native pixels.
pub const PITCH_TO_FACE: f64 = 1.7;

/// Where each layer should be for one frame. Rotations are in degrees,
/// clockwise on a y-down surface; offsets are in rendered pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayerTransforms {
    pub background_rotation: f64,
    pub face_rotation: f64,
    pub ring_rotation: f64,
    /// Where the face sits relative to the centre.
    pub face_offset: (f64, f64),
    /// How far the face moved since the previous frame.
    pub face_move: (f64, f64),
}

/// The scale from the face layer's native size to the size it is drawn at.
pub fn face_scale(rendered: (f64, f64), native: (f64, f64)) -> (f64, f64) {
    let ratio = |rendered: f64, native: f64| {
        if native > 0.0 {
            rendered / native
        } else {
            1.0
        }
    };

    (ratio(rendered.0, native.0), ratio(rendered.1, native.1))
}

#[derive(Debug, Clone, Default)]
pub struct AttitudeState {
    roll: f64,
    pitch: f64,
    previous_displacement: (f64, f64),
}

impl AttitudeState {
    /// Set the roll in degrees. NaN is ignored.
    pub fn set_roll(&mut self, roll: f64) {
        if !roll.is_nan() {
            self.roll = roll.clamp(-ROLL_LIMIT, ROLL_LIMIT);
        }
    }

    /// Set the pitch in degrees. NaN is ignored.
    pub fn set_pitch(&mut self, pitch: f64) {
        if !pitch.is_nan() {
            self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }

    pub fn roll(&self) -> f64 {
        self.roll
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// The face displacement computed on the previous frame.
    pub fn previous_displacement(&self) -> (f64, f64) {
        self.previous_displacement
    }

    pub fn reset(&mut self) {
        self.roll = 0.0;
        self.pitch = 0.0;
        self.previous_displacement = (0.0, 0.0);
    }

    /// The face displacement for the current roll and pitch.
    pub fn face_displacement(&self, scale: (f64, f64)) -> (f64, f64) {
        let roll_rad = self.roll.to_radians();
        let delta = PITCH_TO_FACE * self.pitch;

        (
            scale.0 * delta * roll_rad.sin(),
            scale.1 * delta * roll_rad.cos(),
        )
    }

    /// Compute this frame's layer transforms and remember the displacement
    /// for the next one.
    pub fn advance(&mut self, scale: (f64, f64)) -> LayerTransforms {
        let displacement = self.face_displacement(scale);
        let (old_x, old_y) = self.previous_displacement;
        self.previous_displacement = displacement;

        let rotation = -self.roll;
        LayerTransforms {
            background_rotation: rotation,
            face_rotation: rotation,
            ring_rotation: rotation,
            face_offset: displacement,
            face_move: (displacement.0 - old_x, displacement.1 - old_y),
        }
    }
}
