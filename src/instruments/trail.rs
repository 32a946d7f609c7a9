//! Cursor trails: a bounded history of 2D samples, the mapping from data
//! coordinates to pixels, and how each sample in the trail fades.

use std::collections::VecDeque;

use thiserror::Error;

/// Inset on every side of the plot, in pixels.
pub const PLOT_MARGIN: f64 = 10.0;

#[derive(Debug, Error, PartialEq)]
pub enum TrailError {
    #[error("a trail must hold at least one sample")]
    ZeroCapacity,
    #[error("the {axis} range ({min}, {max}) must have a maximum greater than its minimum")]
    EmptyRange { axis: char, min: f64, max: f64 },
    #[error("a {width}x{height} plot leaves no room inside a margin of {margin}")]
    NoDrawableArea { width: f64, height: f64, margin: f64 },
}

/// The most recent samples of a cursor, oldest first.
#[derive(Debug, Clone)]
pub struct CursorTrail {
    samples: VecDeque<(f64, f64)>,
    capacity: usize,
}

impl CursorTrail {
    pub fn new(capacity: usize) -> Result<Self, TrailError> {
        if capacity == 0 {
            return Err(TrailError::ZeroCapacity);
        }

        Ok(Self {
            samples: VecDeque::new(),
            capacity,
        })
    }

    /// Append a sample unless it repeats the newest one. Returns whether it
    /// was appended. The oldest sample is dropped once over capacity.
    pub fn push(&mut self, sample: (f64, f64)) -> bool {
        if self.samples.back() == Some(&sample) {
            return false;
        }

        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }

        true
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<(f64, f64)> {
        self.samples.back().copied()
    }

    /// Samples from oldest to newest.
    pub fn samples(
        &self,
    ) -> impl DoubleEndedIterator<Item = &(f64, f64)> + ExactSizeIterator + '_ {
        self.samples.iter()
    }

    /// Samples from oldest to newest, each with how it should be drawn.
    pub fn marks(&self) -> impl Iterator<Item = ((f64, f64), TrailMark)> + '_ {
        let len = self.samples.len();
        self.samples
            .iter()
            .enumerate()
            .map(move |(index, sample)| (*sample, TrailMark::for_index(index, len)))
    }
}

/// How a single trail sample is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailMark {
    pub alpha: u8,
    pub diameter: f64,
    pub thickness: u16,
}

impl TrailMark {
    /// The newest sample is opaque and large; older ones fade linearly with
    /// their position in the trail and are drawn small.
    pub fn for_index(index: usize, len: usize) -> Self {
        if index + 1 >= len {
            TrailMark {
                alpha: u8::MAX,
                diameter: 8.0,
                thickness: 2,
            }
        } else {
            TrailMark {
                alpha: (index * 100 / len) as u8,
                diameter: 2.0,
                thickness: 1,
            }
        }
    }
}

/// Maps data coordinates into a plot of `width` by `height` pixels, inset by
/// [`PLOT_MARGIN`]. Pixel y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotMapping {
    x_range: (f64, f64),
    y_range: (f64, f64),
    width: f64,
    height: f64,
}

impl PlotMapping {
    pub fn new(
        x_range: (f64, f64), y_range: (f64, f64), width: f64, height: f64,
    ) -> Result<Self, TrailError> {
        for (axis, (min, max)) in [('x', x_range), ('y', y_range)] {
            if !(max > min) {
                return Err(TrailError::EmptyRange { axis, min, max });
            }
        }

        if !(width > 2.0 * PLOT_MARGIN && height > 2.0 * PLOT_MARGIN) {
            return Err(TrailError::NoDrawableArea {
                width,
                height,
                margin: PLOT_MARGIN,
            });
        }

        Ok(Self {
            x_range,
            y_range,
            width,
            height,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn x_range(&self) -> (f64, f64) {
        self.x_range
    }

    pub fn y_range(&self) -> (f64, f64) {
        self.y_range
    }

    pub fn pixel_x(&self, x: f64) -> f64 {
        let (min, max) = self.x_range;
        PLOT_MARGIN + (x - min) * (self.width - 2.0 * PLOT_MARGIN) / (max - min)
    }

    pub fn pixel_y(&self, y: f64) -> f64 {
        let (min, max) = self.y_range;
        PLOT_MARGIN + (y - min) * (self.height - 2.0 * PLOT_MARGIN) / (max - min)
    }

    pub fn to_pixel(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (self.pixel_x(x), self.pixel_y(y))
    }
}
