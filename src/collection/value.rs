//! The value type produced by data sources.

use std::{borrow::Cow, fmt};

/// A single polled value.
///
/// No-data is not an error; it is a value every widget must be able to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    NoData { message: String },
}

impl Value {
    /// Create a [`Value::NoData`] with the given reason.
    pub fn no_data<R: Into<String>>(message: R) -> Self {
        Value::NoData {
            message: message.into(),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Value::NoData { .. })
    }

    /// Returns the value as a number, or the reason it can't be plotted.
    ///
    /// Text is accepted if it parses as a float, since sources like files
    /// hand back whatever they read.
    pub fn as_number(&self) -> Result<f64, Cow<'_, str>> {
        match self {
            Value::Number(num) => Ok(*num),
            Value::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| Cow::Owned(format!("'{text}' is not a number"))),
            Value::NoData { message } => Err(Cow::Borrowed(message.as_str())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(num) => write!(f, "{num}"),
            Value::Text(text) => f.write_str(text),
            Value::NoData { message } => write!(f, "no data: {message}"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
