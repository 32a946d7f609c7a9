use super::node::{Arity, Render};
use crate::{
    collection::Value,
    instruments::{attitude::face_scale, AttitudeState, LayerTransforms},
};

/// The size instruments are drawn at, in logical pixels.
pub const INSTRUMENT_SIZE: (f64, f64) = (180.0, 180.0);

/// An artificial horizon driven by roll and pitch sources, in degrees.
#[derive(Debug, Clone)]
pub struct AttitudeWidget {
    title: Option<String>,
    state: AttitudeState,
    face_native_size: (f64, f64),
    transforms: LayerTransforms,
    diagnostic: Option<String>,
}

impl AttitudeWidget {
    /// `face_native_size` is the size the face artwork was designed at; the
    /// pitch travel is scaled from it to [`INSTRUMENT_SIZE`].
    pub fn new(title: Option<String>, face_native_size: (f64, f64)) -> Self {
        Self {
            title,
            state: AttitudeState::default(),
            face_native_size,
            transforms: LayerTransforms::default(),
            diagnostic: None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn state(&self) -> &AttitudeState {
        &self.state
    }

    /// The scale from the face's native size to [`INSTRUMENT_SIZE`].
    pub fn face_scale(&self) -> (f64, f64) {
        face_scale(INSTRUMENT_SIZE, self.face_native_size)
    }

    /// The layer transforms computed on the last render.
    pub fn transforms(&self) -> &LayerTransforms {
        &self.transforms
    }

    /// Why the attitude shown is stale, if it is.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }
}

impl Render for AttitudeWidget {
    fn kind_name(&self) -> &'static str {
        "attitude"
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(2)
    }

    fn render(&mut self, values: &[Value]) {
        let [roll, pitch] = values else {
            return;
        };

        match (roll.as_number(), pitch.as_number()) {
            (Ok(roll), Ok(pitch)) => {
                self.state.set_roll(roll);
                self.state.set_pitch(pitch);
                self.diagnostic = None;
            }
            (Err(reason), _) | (_, Err(reason)) => {
                self.diagnostic = Some(reason.into_owned());
            }
        }

        self.transforms = self.state.advance(self.face_scale());
    }

    fn reset(&mut self) {
        self.state.reset();
        self.transforms = LayerTransforms::default();
        self.diagnostic = None;
    }
}
