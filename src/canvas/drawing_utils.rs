use tui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders},
};

use super::styling::CanvasStyles;

/// Return a widget block, titled if the widget has a title.
pub fn widget_block(title: Option<&str>, styles: &CanvasStyles) -> Block<'static> {
    let block = Block::default()
        .border_type(BorderType::Plain)
        .borders(Borders::all())
        .border_style(styles.border_style);

    match title {
        Some(title) => {
            block.title_top(Line::styled(format!(" {title} "), styles.widget_title_style))
        }
        None => block,
    }
}

/// Adds a diagnostic to the bottom border, if there is one.
pub fn with_diagnostic<'a>(block: Block<'a>, diagnostic: Option<&str>, style: Style) -> Block<'a> {
    match diagnostic {
        Some(diagnostic) => {
            block.title_bottom(Line::styled(format!(" no data: {diagnostic} "), style))
        }
        None => block,
    }
}

/// The largest area inside `area` that looks square on a terminal, where a
/// cell is about twice as tall as it is wide. Centred in `area`.
pub fn square_area(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Where a point at `bearing` degrees (clockwise from up) and `radius` lands
/// on a canvas whose y grows upward.
pub fn polar(bearing: f64, radius: f64) -> (f64, f64) {
    let rad = bearing.to_radians();
    (radius * rad.sin(), radius * rad.cos())
}
