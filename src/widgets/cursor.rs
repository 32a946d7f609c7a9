use super::{
    chart::series_colour,
    node::{Arity, Render, WidgetError},
};
use crate::{
    collection::Value,
    instruments::{CursorTrail, PlotMapping, Rgba},
};

/// Default number of samples kept per cursor.
pub const DEFAULT_TRAIL_LENGTH: usize = 100;

/// Default plot size, in logical pixels.
pub const DEFAULT_PLOT_SIZE: (f64, f64) = (180.0, 180.0);

/// One (x, y) cursor and its fading trail.
#[derive(Debug, Clone)]
pub struct Cursor {
    label: String,
    colour: Rgba,
    trail: CursorTrail,
    diagnostic: Option<String>,
}

impl Cursor {
    /// A sample is only kept if both halves are numbers.
    fn update(&mut self, x: &Value, y: &Value) {
        match (x.as_number(), y.as_number()) {
            (Ok(x), Ok(y)) => {
                self.diagnostic = None;
                self.trail.push((x, y));
            }
            (Err(reason), _) | (_, Err(reason)) => {
                self.diagnostic = Some(reason.into_owned());
            }
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn colour(&self) -> Rgba {
        self.colour
    }

    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    /// Why the last sample was dropped, if it was.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }
}

/// A 2D plot of one or more cursors, each fed by a pair of sources.
#[derive(Debug, Clone)]
pub struct CursorWidget {
    title: Option<String>,
    mapping: PlotMapping,
    cursors: Vec<Cursor>,
}

impl CursorWidget {
    /// Builds one cursor per label. Colours come from `palette`, wrapping
    /// around if there are more cursors than colours.
    pub fn new(
        title: Option<String>, labels: Vec<String>, palette: &[Rgba], mapping: PlotMapping,
        trail_length: usize,
    ) -> Result<Self, WidgetError> {
        let cursors = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| -> Result<Cursor, WidgetError> {
                Ok(Cursor {
                    label,
                    colour: series_colour(palette, index),
                    trail: CursorTrail::new(trail_length)?,
                    diagnostic: None,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            title,
            mapping,
            cursors,
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn mapping(&self) -> &PlotMapping {
        &self.mapping
    }

    pub fn cursors(&self) -> &[Cursor] {
        &self.cursors
    }
}

impl Render for CursorWidget {
    fn kind_name(&self) -> &'static str {
        "cursor"
    }

    fn arity(&self) -> Arity {
        if self.cursors.is_empty() {
            Arity::Pairs
        } else {
            Arity::Exactly(self.cursors.len() * 2)
        }
    }

    fn render(&mut self, values: &[Value]) {
        for (cursor, pair) in self.cursors.iter_mut().zip(values.chunks_exact(2)) {
            cursor.update(&pair[0], &pair[1]);
        }
    }

    fn reset(&mut self) {
        for cursor in &mut self.cursors {
            cursor.trail.clear();
            cursor.diagnostic = None;
        }
    }
}
