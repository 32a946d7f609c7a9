//! Data sources: the things widgets poll every tick.
//!
//! A source is identified by its name and hands back a [`Value`] when read.
//! Widgets only hold shared handles to sources; the registry built from the
//! config (or whoever embeds the library) owns them.

pub mod sources;
pub mod system;
pub mod value;

use std::rc::Rc;

use indexmap::IndexMap;
use thiserror::Error;

pub use value::Value;

/// A handle to a source shared between the registry and any widgets bound to it.
pub type SharedSource = Rc<dyn DataSource>;

/// Every configured source by name, in the order they were declared.
pub type SourceRegistry = IndexMap<String, SharedSource>;

/// A polled value provider.
pub trait DataSource {
    /// The name used to label the source in widgets.
    fn name(&self) -> &str;

    /// Read the latest value. Reads are expected to be fast, as a slow read
    /// stalls the whole tick.
    fn read(&self) -> Result<Value, SourceError>;

    /// Called once before the first tick.
    fn connect(&self) -> Result<(), SourceError> {
        Ok(())
    }
}

/// A failure while reading a source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Unavailable(String),
}

impl SourceError {
    pub fn unavailable<R: Into<String>>(reason: R) -> Self {
        SourceError::Unavailable(reason.into())
    }
}
