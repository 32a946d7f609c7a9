use tui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    canvas::{drawing_utils::widget_block, Painter},
    widgets::TableWidget,
};

const NAME_HEADER: &str = "Source";
const VALUE_HEADER: &str = "Value";

impl Painter {
    /// Draws a name/value table. Each value cell's background is the row's
    /// current blend between the idle and active colours.
    pub fn draw_table(&self, f: &mut Frame<'_>, table: &TableWidget, draw_loc: Rect) {
        let block = widget_block(table.caption(), &self.styles);

        let name_width = table
            .rows()
            .iter()
            .map(|row| row.name().width())
            .chain(std::iter::once(NAME_HEADER.width()))
            .max()
            .unwrap_or(0) as u16;

        let header = Row::new(vec![NAME_HEADER, VALUE_HEADER]).style(
            self.styles
                .widget_title_style
                .add_modifier(Modifier::BOLD),
        );

        let rows = table.rows().iter().map(|row| {
            Row::new(vec![
                Cell::from(row.name()).style(self.styles.text_style),
                Cell::from(row.text()).style(
                    self.styles
                        .text_style
                        .patch(Style::default().bg(row.colour().to_colour())),
                ),
            ])
        });

        f.render_widget(
            Table::new(rows, [Constraint::Length(name_width), Constraint::Min(0)])
                .header(header)
                .block(block)
                .column_spacing(1),
            draw_loc,
        );
    }
}
