//! Instrument math that doesn't depend on how anything is drawn.

pub mod attitude;
pub mod colour_blender;
pub mod heading;
pub mod trail;

pub use attitude::{AttitudeState, LayerTransforms};
pub use colour_blender::{ColorBlender, Rgba};
pub use heading::HeadingState;
pub use trail::{CursorTrail, PlotMapping, TrailError, TrailMark};
