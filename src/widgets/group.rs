use super::node::{Arity, Render};
use crate::collection::Value;

/// Which way a group lays out its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// A container with no sources of its own; its children do the work.
#[derive(Debug, Clone, Default)]
pub struct GroupWidget {
    title: Option<String>,
    direction: GroupDirection,
}

impl GroupWidget {
    pub fn new(title: Option<String>, direction: GroupDirection) -> Self {
        Self { title, direction }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn direction(&self) -> GroupDirection {
        self.direction
    }
}

impl Render for GroupWidget {
    fn kind_name(&self) -> &'static str {
        "group"
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(0)
    }

    fn render(&mut self, _values: &[Value]) {}
}
