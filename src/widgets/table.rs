use super::node::{Arity, Render};
use crate::{
    collection::Value,
    instruments::{ColorBlender, Rgba},
};

/// The colours a table flashes between, and how fast it fades back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableColours {
    pub idle: Rgba,
    pub active: Rgba,
    /// Fraction of the fade covered per tick.
    pub fade_step: f64,
}

impl Default for TableColours {
    fn default() -> Self {
        Self {
            idle: Rgba::BLACK,
            active: Rgba::rgb(0, 100, 0),
            fade_step: 0.01,
        }
    }
}

/// One source's row: its name, last value and current background.
#[derive(Debug, Clone)]
pub struct TableRow {
    name: String,
    text: String,
    blender: ColorBlender,
    colour: Rgba,
}

impl TableRow {
    fn new(name: String, colours: &TableColours) -> Self {
        Self {
            name,
            text: String::new(),
            blender: ColorBlender::new(colours.idle, colours.active, colours.fade_step),
            colour: colours.idle,
        }
    }

    /// Compare by text, so values that stringify the same count as unchanged.
    fn update(&mut self, value: &Value) {
        let text = value.to_string();
        if text == self.text {
            self.colour = self.blender.shift_to_left();
        } else {
            self.colour = self.blender.set_right();
            self.text = text;
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn colour(&self) -> Rgba {
        self.colour
    }

    /// How "recently changed" this row is, from 1 (just now) to 0 (idle).
    pub fn fraction(&self) -> f64 {
        self.blender.fraction()
    }
}

/// Name/value pairs whose value cells flash when they change.
#[derive(Debug, Clone)]
pub struct TableWidget {
    caption: Option<String>,
    colours: TableColours,
    rows: Vec<TableRow>,
}

impl TableWidget {
    pub fn new(caption: Option<String>, names: Vec<String>, colours: TableColours) -> Self {
        let rows = names
            .into_iter()
            .map(|name| TableRow::new(name, &colours))
            .collect();

        Self {
            caption,
            colours,
            rows,
        }
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}

impl Render for TableWidget {
    fn kind_name(&self) -> &'static str {
        "table"
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(self.rows.len())
    }

    fn render(&mut self, values: &[Value]) {
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.update(value);
        }
    }

    fn reset(&mut self) {
        for row in &mut self.rows {
            *row = TableRow::new(std::mem::take(&mut row.name), &self.colours);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn first_value_flashes() {
        let mut table = TableWidget::new(None, names(&["alt"]), TableColours::default());
        assert_eq!(table.rows()[0].text(), "");

        table.render(&[Value::Number(120.0)]);
        assert_eq!(table.rows()[0].text(), "120");
        assert_eq!(table.rows()[0].colour(), TableColours::default().active);
        assert_eq!(table.rows()[0].fraction(), 1.0);
    }

    #[test]
    fn unchanged_text_fades() {
        let colours = TableColours {
            fade_step: 0.25,
            ..Default::default()
        };
        let mut table = TableWidget::new(None, names(&["mode"]), colours);

        table.render(&[Value::from("auto")]);
        table.render(&[Value::from("auto")]);
        table.render(&[Value::from("auto")]);
        assert_eq!(table.rows()[0].fraction(), 0.5);

        table.render(&[Value::from("manual")]);
        assert_eq!(table.rows()[0].fraction(), 1.0);
        assert_eq!(table.rows()[0].text(), "manual");
    }

    #[test]
    fn equality_is_textual() {
        let mut table = TableWidget::new(None, names(&["n"]), TableColours::default());

        table.render(&[Value::Number(3.0)]);
        table.render(&[Value::from("3")]);
        assert!(table.rows()[0].fraction() < 1.0);
    }

    #[test]
    fn no_data_is_stringified() {
        let mut table = TableWidget::new(None, names(&["gps"]), TableColours::default());
        table.render(&[Value::no_data("sensor offline")]);

        assert_eq!(table.rows()[0].text(), "no data: sensor offline");
    }

    #[test]
    fn reset_clears_rows() {
        let mut table = TableWidget::new(None, names(&["a"]), TableColours::default());
        table.render(&[Value::Number(1.0)]);
        table.reset();

        assert_eq!(table.rows()[0].name(), "a");
        assert_eq!(table.rows()[0].text(), "");
        assert_eq!(table.rows()[0].fraction(), 0.0);
    }
}
