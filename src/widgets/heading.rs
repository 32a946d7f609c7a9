use super::node::{Arity, Render};
use crate::{collection::Value, instruments::HeadingState};

/// A compass card driven by a single heading source, in degrees.
#[derive(Debug, Clone, Default)]
pub struct HeadingWidget {
    title: Option<String>,
    state: HeadingState,
    diagnostic: Option<String>,
}

impl HeadingWidget {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            ..Default::default()
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn state(&self) -> &HeadingState {
        &self.state
    }

    /// Why the heading shown is stale, if it is.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }
}

impl Render for HeadingWidget {
    fn kind_name(&self) -> &'static str {
        "heading"
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(1)
    }

    fn render(&mut self, values: &[Value]) {
        let Some(value) = values.first() else {
            return;
        };

        match value.as_number() {
            Ok(heading) => {
                self.state.set_heading(heading);
                self.diagnostic = None;
            }
            Err(reason) => self.diagnostic = Some(reason.into_owned()),
        }
    }

    fn reset(&mut self) {
        self.state = HeadingState::default();
        self.diagnostic = None;
    }
}
