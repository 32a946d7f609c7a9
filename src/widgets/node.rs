//! The redraw protocol shared by every widget.
//!
//! A [`Widget`] is a [`WidgetNode`] (bound sources plus child widgets)
//! composed with a [`WidgetKind`] that knows how to turn the sampled values
//! into its own state. On each tick, [`Widget::redraw`] first redraws every
//! child in order, then reads each bound source in order and hands the values
//! to the kind's render step exactly once.

use std::{fmt, ops::AddAssign};

use thiserror::Error;

use super::{group::GroupWidget, WidgetKind};
use crate::{
    collection::{SharedSource, Value},
    instruments::TrailError,
};

/// How many sources a widget kind expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Any,
    Exactly(usize),
    /// A non-zero, even number of sources, taken as (x, y) pairs.
    Pairs,
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Any => true,
            Arity::Exactly(expected) => *expected == count,
            Arity::Pairs => count > 0 && count % 2 == 0,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Any => f.write_str("any number of sources"),
            Arity::Exactly(1) => f.write_str("exactly 1 source"),
            Arity::Exactly(expected) => write!(f, "exactly {expected} sources"),
            Arity::Pairs => f.write_str("a non-zero, even number of sources"),
        }
    }
}

/// A widget that can't be built as asked.
#[derive(Debug, Error, PartialEq)]
pub enum WidgetError {
    #[error("a {kind} widget takes {expected}, but {got} were given")]
    Arity {
        kind: &'static str,
        expected: Arity,
        got: usize,
    },
    #[error(transparent)]
    Trail(#[from] TrailError),
}

/// The per-kind render step.
pub trait Render {
    /// A short name for the kind, used in errors and logs.
    fn kind_name(&self) -> &'static str;

    /// How many values [`Render::render`] expects.
    fn arity(&self) -> Arity;

    /// Update visual state from this tick's values, one per bound source, in
    /// order. Any value may be no-data, which must never be treated as fatal.
    fn render(&mut self, values: &[Value]);

    /// Drop any accumulated state.
    fn reset(&mut self) {}
}

/// Counts from one redraw of a (sub)tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawSummary {
    pub nodes: usize,
    pub reads: usize,
    pub faults: usize,
}

impl AddAssign for RedrawSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
        self.reads += rhs.reads;
        self.faults += rhs.faults;
    }
}

/// The sources and children of a widget.
#[derive(Default)]
pub struct WidgetNode {
    sources: Vec<SharedSource>,
    children: Vec<Widget>,
}

impl WidgetNode {
    pub fn sources(&self) -> &[SharedSource] {
        &self.sources
    }

    pub fn children(&self) -> &[Widget] {
        &self.children
    }

    /// Read every source once, in order. A failed read is logged and turned
    /// into no-data so the rest of the tree keeps updating.
    fn sample(&self, summary: &mut RedrawSummary) -> Vec<Value> {
        self.sources
            .iter()
            .map(|source| {
                summary.reads += 1;
                match source.read() {
                    Ok(value) => value,
                    Err(err) => {
                        summary.faults += 1;
                        log::warn!("Failed to read source '{}': {err}", source.name());
                        Value::no_data(err.to_string())
                    }
                }
            })
            .collect()
    }
}

/// A node in the widget tree.
pub struct Widget {
    node: WidgetNode,
    kind: WidgetKind,
}

impl Widget {
    /// Bind `sources` to a widget of the given kind. Fails if the kind can't
    /// take that many sources.
    pub fn new(kind: WidgetKind, sources: Vec<SharedSource>) -> Result<Self, WidgetError> {
        let arity = kind.arity();
        if !arity.accepts(sources.len()) {
            return Err(WidgetError::Arity {
                kind: kind.kind_name(),
                expected: arity,
                got: sources.len(),
            });
        }

        Ok(Self {
            node: WidgetNode {
                sources,
                children: Vec::new(),
            },
            kind,
        })
    }

    /// A group has no sources, so it can always be built.
    pub fn group(group: GroupWidget, children: Vec<Widget>) -> Self {
        Self {
            node: WidgetNode {
                sources: Vec::new(),
                children,
            },
            kind: WidgetKind::Group(group),
        }
    }

    /// Nest widgets under this one. Children are owned, so the tree can never
    /// contain a cycle.
    pub fn with_children(mut self, children: Vec<Widget>) -> Self {
        self.node.children.extend(children);
        self
    }

    pub fn push_child(&mut self, child: Widget) {
        self.node.children.push(child);
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut WidgetKind {
        &mut self.kind
    }

    pub fn node(&self) -> &WidgetNode {
        &self.node
    }

    pub fn children(&self) -> &[Widget] {
        self.node.children()
    }

    /// Redraw children depth-first, then sample this widget's sources and
    /// render.
    pub fn redraw(&mut self) -> RedrawSummary {
        let mut summary = RedrawSummary::default();

        for child in &mut self.node.children {
            summary += child.redraw();
        }

        let values = self.node.sample(&mut summary);
        debug_assert_eq!(values.len(), self.node.sources.len());

        self.kind.render(&values);
        summary.nodes += 1;

        summary
    }

    /// Give every source in the tree a chance to get ready. Failures are
    /// logged and counted but never stop the rest of the tree.
    pub fn connect(&self) -> usize {
        let mut failures = 0;

        for child in &self.node.children {
            failures += child.connect();
        }

        for source in &self.node.sources {
            if let Err(err) = source.connect() {
                log::warn!(
                    "Failed to connect source '{}' of a {} widget: {err}",
                    source.name(),
                    self.kind.kind_name()
                );
                failures += 1;
            }
        }

        failures
    }

    /// Reset this widget and everything below it.
    pub fn reset(&mut self) {
        for child in &mut self.node.children {
            child.reset();
        }

        self.kind.reset();
    }

    /// The number of widgets in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.node.children.iter().map(Widget::count).sum::<usize>()
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        collection::{
            sources::{ConstantSource, SequenceSource},
            DataSource, SourceError,
        },
        widgets::{heading::HeadingWidget, table::TableColours},
    };

    /// Records every read into a shared log.
    struct RecordingSource {
        name: String,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl DataSource for RecordingSource {
        fn name(&self) -> &str {
            &self.name
        }

        fn read(&self) -> Result<Value, SourceError> {
            self.log.borrow_mut().push(self.name.clone());
            Ok(Value::Number(1.0))
        }
    }

    struct FailingSource;

    impl DataSource for FailingSource {
        fn name(&self) -> &str {
            "broken"
        }

        fn read(&self) -> Result<Value, SourceError> {
            Err(SourceError::unavailable("bus timeout"))
        }

        fn connect(&self) -> Result<(), SourceError> {
            Err(SourceError::unavailable("no bus"))
        }
    }

    fn recording(name: &str, log: &Rc<RefCell<Vec<String>>>) -> SharedSource {
        Rc::new(RecordingSource {
            name: name.to_string(),
            log: log.clone(),
        })
    }

    fn table(sources: Vec<SharedSource>) -> Widget {
        Widget::table(None, sources, TableColours::default()).unwrap()
    }

    #[test]
    fn children_redraw_before_parent() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let mid = table(vec![recording("mid", &log)]).with_children(vec![
            table(vec![recording("leaf-a", &log)]),
            table(vec![recording("leaf-b", &log)]),
        ]);
        let mut root = table(vec![recording("root", &log)]).with_children(vec![mid]);

        let summary = root.redraw();

        assert_eq!(
            *log.borrow(),
            vec!["leaf-a", "leaf-b", "mid", "root"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
        assert_eq!(
            summary,
            RedrawSummary {
                nodes: 4,
                reads: 4,
                faults: 0
            }
        );
        assert_eq!(root.count(), 4);
    }

    #[test]
    fn sources_sampled_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut widget = table(vec![
            recording("c", &log),
            recording("a", &log),
            recording("b", &log),
        ]);

        widget.redraw();
        widget.redraw();

        assert_eq!(log.borrow().join(","), "c,a,b,c,a,b");
    }

    #[test]
    fn failed_reads_are_isolated() {
        let healthy: SharedSource = Rc::new(SequenceSource::new(
            "healthy",
            vec![1.0.into(), 2.0.into()],
            true,
        ));
        let broken: SharedSource = Rc::new(FailingSource);

        let mut root = Widget::group(GroupWidget::default(), vec![
            table(vec![broken]),
            table(vec![healthy]),
        ]);

        let summary = root.redraw();
        assert_eq!(summary.faults, 1);
        assert_eq!(summary.reads, 2);
        assert_eq!(summary.nodes, 3);

        let texts = root
            .children()
            .iter()
            .map(|child| match child.kind() {
                WidgetKind::Table(table) => table.rows()[0].text().to_string(),
                _ => unreachable!(),
            })
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["no data: bus timeout", "1"]);

        root.redraw();
        match root.children()[1].kind() {
            WidgetKind::Table(table) => assert_eq!(table.rows()[0].text(), "2"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn connect_counts_failures() {
        let root = Widget::group(GroupWidget::default(), vec![
            table(vec![Rc::new(FailingSource)]),
            table(vec![Rc::new(ConstantSource::new("ok", 1.0))]),
        ]);

        assert_eq!(root.connect(), 1);
    }

    #[test]
    fn arity_is_checked() {
        let a: SharedSource = Rc::new(ConstantSource::new("a", 1.0));
        let b: SharedSource = Rc::new(ConstantSource::new("b", 2.0));

        let err = Widget::new(
            WidgetKind::Heading(HeadingWidget::new(None)),
            vec![a.clone(), b.clone()],
        )
        .err()
        .unwrap();

        assert_eq!(
            err,
            WidgetError::Arity {
                kind: "heading",
                expected: Arity::Exactly(1),
                got: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "a heading widget takes exactly 1 source, but 2 were given"
        );

        assert!(Widget::new(WidgetKind::Group(GroupWidget::default()), vec![a]).is_err());
    }

    #[test]
    fn arity_rules() {
        assert!(Arity::Any.accepts(0));
        assert!(Arity::Exactly(2).accepts(2));
        assert!(!Arity::Exactly(2).accepts(3));
        assert!(Arity::Pairs.accepts(4));
        assert!(!Arity::Pairs.accepts(0));
        assert!(!Arity::Pairs.accepts(3));
    }
}
