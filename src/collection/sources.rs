//! Built-in sources, so a layout can be exercised without a live bus.

use std::{
    cell::Cell,
    f64::consts::TAU,
    fs,
    path::PathBuf,
    time::{Duration, Instant},
};

use super::{DataSource, SourceError, Value};

/// Always returns the same value.
#[derive(Debug)]
pub struct ConstantSource {
    name: String,
    value: Value,
}

impl ConstantSource {
    pub fn new<N: Into<String>, V: Into<Value>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl DataSource for ConstantSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Value, SourceError> {
        Ok(self.value.clone())
    }
}

/// Steps through a fixed list of values, one per read.
///
/// When not repeating, the last value is held once the list runs out.
#[derive(Debug)]
pub struct SequenceSource {
    name: String,
    values: Vec<Value>,
    repeat: bool,
    index: Cell<usize>,
}

impl SequenceSource {
    pub fn new<N: Into<String>>(name: N, values: Vec<Value>, repeat: bool) -> Self {
        Self {
            name: name.into(),
            values,
            repeat,
            index: Cell::new(0),
        }
    }
}

impl DataSource for SequenceSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Value, SourceError> {
        if self.values.is_empty() {
            return Ok(Value::no_data("sequence is empty"));
        }

        let index = self.index.get();
        let value = self.values[index].clone();

        let next = index + 1;
        if next < self.values.len() {
            self.index.set(next);
        } else if self.repeat {
            self.index.set(0);
        }

        Ok(value)
    }
}

/// A sine wave over wall-clock time.
#[derive(Debug)]
pub struct SineSource {
    name: String,
    amplitude: f64,
    period: Duration,
    offset: f64,
    phase_degrees: f64,
    start: Instant,
}

impl SineSource {
    pub fn new<N: Into<String>>(
        name: N, amplitude: f64, period: Duration, offset: f64, phase_degrees: f64,
    ) -> Self {
        Self {
            name: name.into(),
            amplitude,
            period,
            offset,
            phase_degrees,
            start: Instant::now(),
        }
    }

    /// The wave's value after `elapsed` time.
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return self.offset;
        }

        let angle = TAU * elapsed.as_secs_f64() / period + self.phase_degrees.to_radians();
        self.offset + self.amplitude * angle.sin()
    }
}

impl DataSource for SineSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Value, SourceError> {
        Ok(Value::Number(self.value_at(self.start.elapsed())))
    }
}

/// Adds `step` on every read, optionally wrapping into `[low, high)`.
#[derive(Debug)]
pub struct RampSource {
    name: String,
    step: f64,
    wrap: Option<(f64, f64)>,
    current: Cell<f64>,
}

impl RampSource {
    pub fn new<N: Into<String>>(name: N, start: f64, step: f64, wrap: Option<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            step,
            wrap,
            current: Cell::new(start),
        }
    }
}

impl DataSource for RampSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Value, SourceError> {
        let value = self.current.get();

        let mut next = value + self.step;
        if let Some((low, high)) = self.wrap {
            if high > low {
                next = low + (next - low).rem_euclid(high - low);
            }
        }
        self.current.set(next);

        Ok(Value::Number(value))
    }
}

/// Seconds elapsed since the source was created.
#[derive(Debug)]
pub struct ClockSource {
    name: String,
    start: Instant,
}

impl ClockSource {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }
}

impl DataSource for ClockSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Value, SourceError> {
        Ok(Value::Number(self.start.elapsed().as_secs_f64()))
    }
}

/// A source that is never available, useful for checking how widgets degrade.
#[derive(Debug)]
pub struct OfflineSource {
    name: String,
    message: String,
}

impl OfflineSource {
    pub fn new<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl DataSource for OfflineSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Value, SourceError> {
        Ok(Value::no_data(self.message.clone()))
    }
}

/// Reads a whole file on every poll, e.g. something under `/sys` or a file
/// another process keeps rewriting.
///
/// Numeric contents become numbers, anything else is passed on as text.
#[derive(Debug)]
pub struct FileSource {
    name: String,
    path: PathBuf,
    scale: f64,
}

impl FileSource {
    pub fn new<N: Into<String>, P: Into<PathBuf>>(name: N, path: P, scale: f64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            scale,
        }
    }
}

impl DataSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Value, SourceError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Ok(Value::no_data(format!(
                "'{}' is empty",
                self.path.display()
            )));
        }

        Ok(match trimmed.parse::<f64>() {
            Ok(num) => Value::Number(num * self.scale),
            Err(_) => Value::Text(trimmed.to_string()),
        })
    }

    fn connect(&self) -> Result<(), SourceError> {
        fs::metadata(&self.path)
            .map(|_| ())
            .map_err(|source| SourceError::Io {
                path: self.path.display().to_string(),
                source,
            })
    }
}
