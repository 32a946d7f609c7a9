pub mod attitude;
pub mod chart;
pub mod cursor;
pub mod group;
pub mod heading;
pub mod node;
pub mod table;

pub use attitude::*;
pub use chart::*;
pub use cursor::*;
pub use group::*;
pub use heading::*;
pub use node::*;
pub use table::*;

use crate::{
    collection::{SharedSource, Value},
    instruments::{PlotMapping, Rgba},
};

/// Every kind of widget that can appear in the tree.
#[derive(Debug, Clone)]
pub enum WidgetKind {
    Group(GroupWidget),
    Table(TableWidget),
    Chart(ChartWidget),
    Cursor(CursorWidget),
    Heading(HeadingWidget),
    Attitude(AttitudeWidget),
}

impl WidgetKind {
    fn as_render(&self) -> &dyn Render {
        match self {
            WidgetKind::Group(widget) => widget,
            WidgetKind::Table(widget) => widget,
            WidgetKind::Chart(widget) => widget,
            WidgetKind::Cursor(widget) => widget,
            WidgetKind::Heading(widget) => widget,
            WidgetKind::Attitude(widget) => widget,
        }
    }

    fn as_render_mut(&mut self) -> &mut dyn Render {
        match self {
            WidgetKind::Group(widget) => widget,
            WidgetKind::Table(widget) => widget,
            WidgetKind::Chart(widget) => widget,
            WidgetKind::Cursor(widget) => widget,
            WidgetKind::Heading(widget) => widget,
            WidgetKind::Attitude(widget) => widget,
        }
    }

    /// The title shown on the widget's border, if any.
    pub fn title(&self) -> Option<&str> {
        match self {
            WidgetKind::Group(widget) => widget.title(),
            WidgetKind::Table(widget) => widget.caption(),
            WidgetKind::Chart(widget) => widget.title(),
            WidgetKind::Cursor(widget) => widget.title(),
            WidgetKind::Heading(widget) => widget.title(),
            WidgetKind::Attitude(widget) => widget.title(),
        }
    }
}

impl Render for WidgetKind {
    fn kind_name(&self) -> &'static str {
        self.as_render().kind_name()
    }

    fn arity(&self) -> Arity {
        self.as_render().arity()
    }

    fn render(&mut self, values: &[Value]) {
        self.as_render_mut().render(values)
    }

    fn reset(&mut self) {
        self.as_render_mut().reset()
    }
}

fn source_names(sources: &[SharedSource]) -> Vec<String> {
    sources
        .iter()
        .map(|source| source.name().to_string())
        .collect()
}

impl Widget {
    /// A table with one row per source, named after the source.
    pub fn table(
        caption: Option<String>, sources: Vec<SharedSource>, colours: TableColours,
    ) -> Result<Self, WidgetError> {
        let table = TableWidget::new(caption, source_names(&sources), colours);
        Widget::new(WidgetKind::Table(table), sources)
    }

    /// A chart with one series per source.
    pub fn chart(
        title: Option<String>, sources: Vec<SharedSource>, palette: &[Rgba], window: usize,
        y_range: Option<(f64, f64)>,
    ) -> Result<Self, WidgetError> {
        let chart = ChartWidget::new(title, source_names(&sources), palette, window, y_range);
        Widget::new(WidgetKind::Chart(chart), sources)
    }

    /// A cursor plot. Sources are taken as consecutive (x, y) pairs.
    pub fn cursor(
        title: Option<String>, sources: Vec<SharedSource>, palette: &[Rgba], mapping: PlotMapping,
        trail_length: usize,
    ) -> Result<Self, WidgetError> {
        if !Arity::Pairs.accepts(sources.len()) {
            return Err(WidgetError::Arity {
                kind: "cursor",
                expected: Arity::Pairs,
                got: sources.len(),
            });
        }

        let labels = sources
            .chunks_exact(2)
            .map(|pair| format!("{}/{}", pair[0].name(), pair[1].name()))
            .collect();
        let cursor = CursorWidget::new(title, labels, palette, mapping, trail_length)?;

        Widget::new(WidgetKind::Cursor(cursor), sources)
    }

    pub fn heading(title: Option<String>, sources: Vec<SharedSource>) -> Result<Self, WidgetError> {
        Widget::new(WidgetKind::Heading(HeadingWidget::new(title)), sources)
    }

    /// An attitude indicator. Sources are roll then pitch.
    pub fn attitude(
        title: Option<String>, sources: Vec<SharedSource>, face_native_size: (f64, f64),
    ) -> Result<Self, WidgetError> {
        Widget::new(
            WidgetKind::Attitude(AttitudeWidget::new(title, face_native_size)),
            sources,
        )
    }
}
