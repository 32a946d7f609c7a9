//! The `[[widgets]]` tables, which describe the widget tree.

use serde::Deserialize;

use crate::{
    canvas::styling::CanvasStyles,
    collection::{SharedSource, SourceRegistry},
    constants::{MAX_CHART_WINDOW, MAX_TRAIL_LENGTH},
    instruments::PlotMapping,
    options::{OptionError, OptionResult},
    widgets::{
        GroupDirection, GroupWidget, Widget, WidgetError, DEFAULT_CHART_WINDOW, DEFAULT_PLOT_SIZE,
        DEFAULT_TRAIL_LENGTH, INSTRUMENT_SIZE,
    },
};

const DEFAULT_CURSOR_RANGE: (f64, f64) = (-1.0, 1.0);

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum WidgetConfig {
    Table {
        caption: Option<String>,
        #[serde(default)]
        sources: Vec<String>,
    },
    Chart {
        title: Option<String>,
        #[serde(default)]
        sources: Vec<String>,
        window: Option<usize>,
        y_range: Option<[f64; 2]>,
    },
    Cursor {
        title: Option<String>,
        #[serde(default)]
        sources: Vec<String>,
        x_range: Option<[f64; 2]>,
        y_range: Option<[f64; 2]>,
        trail_length: Option<usize>,
        size: Option<[f64; 2]>,
    },
    Heading {
        title: Option<String>,
        #[serde(default)]
        sources: Vec<String>,
    },
    Attitude {
        title: Option<String>,
        #[serde(default)]
        sources: Vec<String>,
        face_size: Option<[f64; 2]>,
    },
    Group {
        title: Option<String>,
        direction: Option<String>,
        #[serde(default)]
        children: Vec<WidgetConfig>,
    },
}

/// Checks that `[min, max]` has max > min.
fn range(path: &str, field: &str, range: Option<[f64; 2]>) -> OptionResult<Option<(f64, f64)>> {
    match range {
        Some([min, max]) if max > min => Ok(Some((min, max))),
        Some(_) => Err(OptionError::invalid_config_value(
            &format!("{path}.{field}"),
            "The second value must be greater than the first.",
        )),
        None => Ok(None),
    }
}

impl WidgetConfig {
    /// Look up every source this widget names, keeping their order.
    fn resolve(
        path: &str, names: &[String], registry: &SourceRegistry,
    ) -> OptionResult<Vec<SharedSource>> {
        names
            .iter()
            .map(|name| {
                registry.get(name).cloned().ok_or_else(|| {
                    OptionError::config(format!(
                        "'{path}.sources' refers to an unknown source '{name}'. \
                        Sources must be declared in a [[sources]] table."
                    ))
                })
            })
            .collect()
    }

    fn build(
        &self, path: &str, registry: &SourceRegistry, styles: &CanvasStyles,
    ) -> OptionResult<Widget> {
        let widget_err = |err: WidgetError| {
            OptionError::config(format!("Please update '{path}' in your config file. {err}"))
        };

        let widget = match self {
            WidgetConfig::Table { caption, sources } => Widget::table(
                caption.clone(),
                Self::resolve(path, sources, registry)?,
                styles.table_colours,
            ),
            WidgetConfig::Chart {
                title,
                sources,
                window,
                y_range,
            } => {
                let window = window.unwrap_or(DEFAULT_CHART_WINDOW);
                if window == 0 || window > MAX_CHART_WINDOW {
                    return Err(OptionError::invalid_config_value(
                        &format!("{path}.window"),
                        format!("It must hold between 1 and {MAX_CHART_WINDOW} samples."),
                    ));
                }

                Widget::chart(
                    title.clone(),
                    Self::resolve(path, sources, registry)?,
                    &styles.series_colours,
                    window,
                    range(path, "y_range", *y_range)?,
                )
            }
            WidgetConfig::Cursor {
                title,
                sources,
                x_range,
                y_range,
                trail_length,
                size,
            } => {
                let x_range = range(path, "x_range", *x_range)?.unwrap_or(DEFAULT_CURSOR_RANGE);
                let y_range = range(path, "y_range", *y_range)?.unwrap_or(DEFAULT_CURSOR_RANGE);
                let (width, height) = size.map(|[w, h]| (w, h)).unwrap_or(DEFAULT_PLOT_SIZE);

                let mapping = PlotMapping::new(x_range, y_range, width, height)
                    .map_err(|err| widget_err(err.into()))?;

                let trail_length = trail_length.unwrap_or(DEFAULT_TRAIL_LENGTH);
                if trail_length > MAX_TRAIL_LENGTH {
                    return Err(OptionError::invalid_config_value(
                        &format!("{path}.trail_length"),
                        format!("It must be at most {MAX_TRAIL_LENGTH}."),
                    ));
                }

                Widget::cursor(
                    title.clone(),
                    Self::resolve(path, sources, registry)?,
                    &styles.series_colours,
                    mapping,
                    trail_length,
                )
            }
            WidgetConfig::Heading { title, sources } => {
                Widget::heading(title.clone(), Self::resolve(path, sources, registry)?)
            }
            WidgetConfig::Attitude {
                title,
                sources,
                face_size,
            } => {
                let face_size = face_size.map(|[w, h]| (w, h)).unwrap_or(INSTRUMENT_SIZE);
                Widget::attitude(
                    title.clone(),
                    Self::resolve(path, sources, registry)?,
                    face_size,
                )
            }
            WidgetConfig::Group {
                title,
                direction,
                children,
            } => {
                let direction = match direction.as_deref().map(str::to_lowercase).as_deref() {
                    None | Some("horizontal") | Some("row") => GroupDirection::Horizontal,
                    Some("vertical") | Some("column") => GroupDirection::Vertical,
                    Some(_) => {
                        return Err(OptionError::invalid_config_value(
                            &format!("{path}.direction"),
                            "It must be either 'horizontal' or 'vertical'.",
                        ));
                    }
                };

                let children = build_children(path, children, registry, styles)?;
                Ok(Widget::group(
                    GroupWidget::new(title.clone(), direction),
                    children,
                ))
            }
        };

        widget.map_err(widget_err)
    }
}

fn build_children(
    path: &str, children: &[WidgetConfig], registry: &SourceRegistry, styles: &CanvasStyles,
) -> OptionResult<Vec<Widget>> {
    children
        .iter()
        .enumerate()
        .map(|(index, child)| child.build(&format!("{path}.children[{index}]"), registry, styles))
        .collect()
}

/// Build the whole tree. The configured widgets are stacked in a vertical
/// group, which becomes the root.
pub(crate) fn build_tree(
    widgets: &[WidgetConfig], registry: &SourceRegistry, styles: &CanvasStyles,
) -> OptionResult<Widget> {
    if widgets.is_empty() {
        return Err(OptionError::config(
            "The config must contain at least one widget in a [[widgets]] table.",
        ));
    }

    let children = widgets
        .iter()
        .enumerate()
        .map(|(index, widget)| widget.build(&format!("widgets[{index}]"), registry, styles))
        .collect::<OptionResult<Vec<_>>>()?;

    Ok(Widget::group(
        GroupWidget::new(None, GroupDirection::Vertical),
        children,
    ))
}
