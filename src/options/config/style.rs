//! Config options around styling.

pub(crate) mod utils;

use std::borrow::Cow;

use serde::Deserialize;

/// A colour as written in the config file.
#[derive(Clone, Debug, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(crate) struct ColorStr(pub(crate) Cow<'static, str>);

/// Style-related configs.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq))]
pub(crate) struct StyleConfig {
    /// Colours for chart series and cursors, used in order and wrapping around.
    #[serde(alias = "series_colors")]
    pub(crate) series_colours: Option<Vec<ColorStr>>,

    /// The background a table row fades back to.
    #[serde(alias = "table_idle_color")]
    pub(crate) table_idle_colour: Option<ColorStr>,

    /// The background a table row flashes when its value changes.
    #[serde(alias = "table_active_color")]
    pub(crate) table_active_colour: Option<ColorStr>,

    /// How much of the fade is covered per redraw, from 0 to 1.
    pub(crate) table_fade_step: Option<f64>,

    #[serde(alias = "border_color")]
    pub(crate) border_colour: Option<ColorStr>,

    #[serde(alias = "title_color")]
    pub(crate) title_colour: Option<ColorStr>,

    /// Used for no-data messages.
    #[serde(alias = "diagnostic_color")]
    pub(crate) diagnostic_colour: Option<ColorStr>,
}
