//! The `[[sources]]` tables.

use std::{rc::Rc, time::Duration};

use hashbrown::HashSet;
use serde::Deserialize;

use super::StringOrNum;
use crate::{
    collection::{
        sources::{
            ClockSource, ConstantSource, FileSource, OfflineSource, RampSource, SequenceSource,
            SineSource,
        },
        system::{SystemMetric, SystemSource},
        SharedSource, SourceRegistry, Value,
    },
    options::{parse_duration, OptionError, OptionResult},
};

const DEFAULT_SINE_PERIOD: Duration = Duration::from_secs(10);

/// A value written directly in the config file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub(crate) enum ConfigValue {
    Number(f64),
    Text(String),
}

impl From<&ConfigValue> for Value {
    fn from(value: &ConfigValue) -> Self {
        match value {
            ConfigValue::Number(num) => Value::Number(*num),
            ConfigValue::Text(text) => Value::Text(text.clone()),
        }
    }
}

fn one() -> f64 {
    1.0
}

/// Workaround as per https://github.com/serde-rs/serde/issues/1030
fn default_as_true() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct SourceConfig {
    pub(crate) name: String,
    #[serde(flatten)]
    pub(crate) kind: SourceKind,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum SourceKind {
    Constant {
        value: ConfigValue,
    },
    Sequence {
        values: Vec<ConfigValue>,
        #[serde(default = "default_as_true")]
        repeat: bool,
    },
    Sine {
        #[serde(default = "one")]
        amplitude: f64,
        period: Option<StringOrNum>,
        #[serde(default)]
        offset: f64,
        /// In degrees.
        #[serde(default)]
        phase: f64,
    },
    Ramp {
        #[serde(default)]
        start: f64,
        #[serde(default = "one")]
        step: f64,
        wrap: Option<[f64; 2]>,
    },
    Clock,
    Offline {
        message: Option<String>,
    },
    File {
        path: String,
        #[serde(default = "one")]
        scale: f64,
    },
    System {
        metric: String,
    },
}

impl SourceConfig {
    fn build(&self) -> OptionResult<SharedSource> {
        let name = self.name.clone();
        let key = |field: &str| format!("sources.{}.{field}", self.name);

        let source: SharedSource = match &self.kind {
            SourceKind::Constant { value } => Rc::new(ConstantSource::new(name, value)),
            SourceKind::Sequence { values, repeat } => Rc::new(SequenceSource::new(
                name,
                values.iter().map(Value::from).collect(),
                *repeat,
            )),
            SourceKind::Sine {
                amplitude,
                period,
                offset,
                phase,
            } => {
                let period = match period {
                    Some(period) => parse_duration(period).map_err(|err| {
                        OptionError::invalid_config_value(&key("period"), err)
                    })?,
                    None => DEFAULT_SINE_PERIOD,
                };

                if period.is_zero() {
                    return Err(OptionError::invalid_config_value(
                        &key("period"),
                        "It must be longer than zero.",
                    ));
                }

                Rc::new(SineSource::new(name, *amplitude, period, *offset, *phase))
            }
            SourceKind::Ramp { start, step, wrap } => {
                let wrap = match wrap {
                    Some([low, high]) if high > low => Some((*low, *high)),
                    Some(_) => {
                        return Err(OptionError::invalid_config_value(
                            &key("wrap"),
                            "The second value must be greater than the first.",
                        ));
                    }
                    None => None,
                };

                Rc::new(RampSource::new(name, *start, *step, wrap))
            }
            SourceKind::Clock => Rc::new(ClockSource::new(name)),
            SourceKind::Offline { message } => Rc::new(OfflineSource::new(
                name,
                message.as_deref().unwrap_or("offline"),
            )),
            SourceKind::File { path, scale } => Rc::new(FileSource::new(name, path, *scale)),
            SourceKind::System { metric } => {
                let metric = SystemMetric::from_name(metric).ok_or_else(|| {
                    OptionError::invalid_config_value(
                        &key("metric"),
                        "Supported metrics are 'cpu', 'memory', 'swap', 'load_avg_1', 'load_avg_5' and 'load_avg_15'.",
                    )
                })?;

                Rc::new(SystemSource::new(name, metric))
            }
        };

        Ok(source)
    }
}

/// Build every configured source, keyed by name in declaration order.
pub(crate) fn build_registry(sources: &[SourceConfig]) -> OptionResult<SourceRegistry> {
    let mut seen = HashSet::with_capacity(sources.len());
    let mut registry = SourceRegistry::with_capacity(sources.len());

    for config in sources {
        if config.name.trim().is_empty() {
            return Err(OptionError::config("Every source needs a non-empty 'name'."));
        }

        if !seen.insert(config.name.as_str()) {
            return Err(OptionError::config(format!(
                "The source name '{}' is used more than once; source names must be unique.",
                config.name
            )));
        }

        registry.insert(config.name.clone(), config.build()?);
    }

    Ok(registry)
}
