//! Drawing the widget tree to the terminal.

pub mod drawing_utils;
pub mod styling;
mod widgets;

use tui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use self::{drawing_utils::widget_block, styling::CanvasStyles};
use crate::{
    app::{Dashboard, DashboardConfig},
    widgets::{GroupDirection, Widget, WidgetKind},
};

/// Handles the canvas' state.
pub struct Painter {
    pub styles: CanvasStyles,
}

impl Painter {
    pub fn init(styles: CanvasStyles) -> Self {
        Painter { styles }
    }

    /// Draw the whole dashboard: the widget tree, with a status line below it.
    pub fn draw_data(&self, f: &mut Frame<'_>, dashboard: &Dashboard) {
        let [tree_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(f.area());

        self.draw_widget(f, dashboard.root(), tree_area, &dashboard.config);
        self.draw_status(f, dashboard, status_area);
    }

    fn draw_widget(
        &self, f: &mut Frame<'_>, widget: &Widget, draw_loc: Rect, config: &DashboardConfig,
    ) {
        if draw_loc.width == 0 || draw_loc.height == 0 {
            return;
        }

        match widget.kind() {
            WidgetKind::Group(group) => {
                let children = widget.children();
                if children.is_empty() {
                    return;
                }

                let inner = match group.title() {
                    Some(title) => {
                        let block = widget_block(Some(title), &self.styles);
                        let inner = block.inner(draw_loc);
                        f.render_widget(block, draw_loc);
                        inner
                    }
                    None => draw_loc,
                };

                let direction = match group.direction() {
                    GroupDirection::Horizontal => Direction::Horizontal,
                    GroupDirection::Vertical => Direction::Vertical,
                };
                let constraints = children
                    .iter()
                    .map(|_| Constraint::Ratio(1, children.len() as u32));
                let areas = Layout::default()
                    .direction(direction)
                    .constraints(constraints)
                    .split(inner);

                for (child, area) in children.iter().zip(areas.iter()) {
                    self.draw_widget(f, child, *area, config);
                }
            }
            WidgetKind::Table(table) => self.draw_table(f, table, draw_loc),
            WidgetKind::Chart(chart) => self.draw_chart(f, chart, draw_loc, config.dot_marker),
            WidgetKind::Cursor(cursor) => self.draw_cursor(f, cursor, draw_loc, config.dot_marker),
            WidgetKind::Heading(heading) => self.draw_heading(f, heading, draw_loc),
            WidgetKind::Attitude(attitude) => self.draw_attitude(f, attitude, draw_loc),
        }
    }

    fn draw_status(&self, f: &mut Frame<'_>, dashboard: &Dashboard, draw_loc: Rect) {
        let summary = dashboard.last_summary();
        let mut spans = Vec::with_capacity(4);

        if dashboard.is_frozen() {
            spans.push(Span::styled(
                " Frozen, press 'f' to unfreeze ",
                self.styles.frozen_style,
            ));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::styled(
            format!(
                "tick {} | {} reads | {} faults",
                dashboard.ticks(),
                summary.reads,
                summary.faults
            ),
            self.styles.text_style,
        ));
        spans.push(Span::styled(
            " | q: quit  f: freeze  r: reset",
            self.styles.text_style,
        ));

        f.render_widget(Paragraph::new(Line::from(spans)), draw_loc);
    }
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use tui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        collection::{sources::ConstantSource, SharedSource, SourceRegistry},
        widgets::{GroupWidget, TableColours},
    };

    pub(super) fn rendered_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn dashboard() -> Dashboard {
        let speed: SharedSource = Rc::new(ConstantSource::new("speed", 42.0));
        let table = Widget::table(
            Some("Air".into()),
            vec![speed.clone()],
            TableColours::default(),
        )
        .unwrap();
        let heading = Widget::heading(Some("Heading".into()), vec![speed.clone()]).unwrap();
        let root = Widget::group(
            GroupWidget::new(None, GroupDirection::Vertical),
            vec![table, heading],
        );

        let mut sources = SourceRegistry::new();
        sources.insert("speed".into(), speed);

        Dashboard::new(DashboardConfig::default(), root, sources)
    }

    #[test]
    fn draws_tree_and_status() {
        let mut dashboard = dashboard();
        dashboard.tick();

        let painter = Painter::init(CanvasStyles::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| painter.draw_data(f, &dashboard)).unwrap();

        let text = rendered_text(&terminal);
        assert!(text.contains(" Air "));
        assert!(text.contains("speed"));
        assert!(text.contains("42"));
        assert!(text.contains(" Heading "));
        assert!(text.contains("tick 1 | 2 reads | 0 faults"));
        assert!(!text.contains("Frozen"));
    }

    #[test]
    fn frozen_banner() {
        let mut dashboard = dashboard();
        dashboard.toggle_frozen();

        let painter = Painter::init(CanvasStyles::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| painter.draw_data(f, &dashboard)).unwrap();

        assert!(rendered_text(&terminal).contains("Frozen, press 'f' to unfreeze"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let dashboard = dashboard();
        let painter = Painter::init(CanvasStyles::default());
        let mut terminal = Terminal::new(TestBackend::new(3, 2)).unwrap();
        terminal.draw(|f| painter.draw_data(f, &dashboard)).unwrap();
    }
}
