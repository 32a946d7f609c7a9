use tui::style::{Color, Modifier, Style};

use crate::{
    constants::DEFAULT_SERIES_COLOURS,
    instruments::Rgba,
    options::{
        config::style::{
            utils::{str_to_fg, str_to_rgba},
            StyleConfig,
        },
        OptionError, OptionResult,
    },
    widgets::TableColours,
};

/// Every colour the painter and the widgets need.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasStyles {
    pub series_colours: Vec<Rgba>,
    pub table_colours: TableColours,
    pub border_style: Style,
    pub widget_title_style: Style,
    pub text_style: Style,
    pub diagnostic_style: Style,
    pub frozen_style: Style,
}

impl Default for CanvasStyles {
    fn default() -> Self {
        let text_colour = Color::Gray;

        CanvasStyles {
            series_colours: DEFAULT_SERIES_COLOURS.to_vec(),
            table_colours: TableColours::default(),
            border_style: Style::default().fg(text_colour),
            widget_title_style: Style::default().fg(text_colour),
            text_style: Style::default().fg(text_colour),
            diagnostic_style: Style::default().fg(Color::LightYellow),
            frozen_style: Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        }
    }
}

macro_rules! try_set_colour {
    ($field:expr, $styles:expr, $colour_field:ident) => {
        if let Some(colour_str) = &$styles.$colour_field {
            $field = str_to_fg(&colour_str.0).map_err(|err| {
                OptionError::config(format!(
                    "Please update 'styles.{}' in your config file. {err}",
                    stringify!($colour_field)
                ))
            })?;
        }
    };
}

macro_rules! try_set_rgba {
    ($field:expr, $styles:expr, $colour_field:ident) => {
        if let Some(colour_str) = &$styles.$colour_field {
            $field = str_to_rgba(&colour_str.0).map_err(|err| {
                OptionError::config(format!(
                    "Please update 'styles.{}' in your config file. {err}",
                    stringify!($colour_field)
                ))
            })?;
        }
    };
}

impl CanvasStyles {
    pub(crate) fn new(styles: Option<&StyleConfig>) -> OptionResult<Self> {
        let mut canvas_styles = Self::default();

        if let Some(styles) = styles {
            canvas_styles.set_styles_from_config(styles)?;
        }

        Ok(canvas_styles)
    }

    pub(crate) fn set_styles_from_config(&mut self, styles: &StyleConfig) -> OptionResult<()> {
        if let Some(colours) = &styles.series_colours {
            if colours.is_empty() {
                return Err(OptionError::config(
                    "Please update 'styles.series_colours' in your config file. It needs at least one colour.",
                ));
            }

            self.series_colours = colours
                .iter()
                .map(|colour| str_to_rgba(&colour.0))
                .collect::<Result<Vec<_>, String>>()
                .map_err(|err| {
                    OptionError::config(format!(
                        "Please update 'styles.series_colours' in your config file. {err}"
                    ))
                })?;
        }

        // Tables
        try_set_rgba!(self.table_colours.idle, styles, table_idle_colour);
        try_set_rgba!(self.table_colours.active, styles, table_active_colour);
        if let Some(step) = styles.table_fade_step {
            if !(0.0..=1.0).contains(&step) {
                return Err(OptionError::invalid_config_value(
                    "styles.table_fade_step",
                    "It must be between 0 and 1.",
                ));
            }

            self.table_colours.fade_step = step;
        }

        // Widget text and borders
        try_set_colour!(self.border_style, styles, border_colour);
        try_set_colour!(self.widget_title_style, styles, title_colour);
        try_set_colour!(self.diagnostic_style, styles, diagnostic_colour);

        Ok(())
    }

    /// The style for a series or cursor colour.
    pub fn series_style(colour: Rgba) -> Style {
        Style::default().fg(colour.to_colour())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::options::config::style::ColorStr;

    fn colour(text: &'static str) -> Option<ColorStr> {
        Some(ColorStr(text.into()))
    }

    #[test]
    fn defaults_without_config() {
        assert_eq!(CanvasStyles::new(None).unwrap(), CanvasStyles::default());
    }

    #[test]
    fn config_overrides() {
        let config = StyleConfig {
            series_colours: Some(vec![ColorStr("#00ff00".into())]),
            table_active_colour: colour("255, 0, 0"),
            table_fade_step: Some(0.5),
            border_colour: colour("red"),
            ..Default::default()
        };

        let styles = CanvasStyles::new(Some(&config)).unwrap();
        assert_eq!(styles.series_colours, vec![Rgba::rgb(0, 255, 0)]);
        assert_eq!(styles.table_colours.active, Rgba::rgb(255, 0, 0));
        assert_eq!(styles.table_colours.fade_step, 0.5);
        assert_eq!(styles.border_style, Style::default().fg(Color::Rgb(205, 0, 0)));
    }

    #[test]
    fn bad_values_name_the_key() {
        let bad_colour = StyleConfig {
            title_colour: colour("fake blue"),
            ..Default::default()
        };
        let err = CanvasStyles::new(Some(&bad_colour)).unwrap_err();
        assert!(err.to_string().contains("'styles.title_colour'"));

        let bad_step = StyleConfig {
            table_fade_step: Some(1.5),
            ..Default::default()
        };
        assert!(CanvasStyles::new(Some(&bad_step)).is_err());

        let no_series = StyleConfig {
            series_colours: Some(vec![]),
            ..Default::default()
        };
        assert!(CanvasStyles::new(Some(&no_series)).is_err());
    }
}
