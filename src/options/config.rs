pub mod general;
pub mod sources;
pub mod style;
pub mod widgets;

use serde::Deserialize;

use self::{general::GeneralConfig, sources::SourceConfig, style::StyleConfig, widgets::WidgetConfig};

/// The top-level config file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    pub(crate) general: Option<GeneralConfig>,
    pub(crate) styles: Option<StyleConfig>,
    #[serde(default)]
    pub(crate) sources: Vec<SourceConfig>,
    #[serde(default)]
    pub(crate) widgets: Vec<WidgetConfig>,
}

impl Config {
    /// How many sources and top-level widgets are declared.
    pub fn counts(&self) -> (usize, usize) {
        (self.sources.len(), self.widgets.len())
    }
}

/// A duration given either as a string ("20ms", "1s") or as milliseconds.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum StringOrNum {
    String(String),
    Num(u64),
}

impl From<String> for StringOrNum {
    fn from(value: String) -> Self {
        StringOrNum::String(value)
    }
}

impl From<u64> for StringOrNum {
    fn from(value: u64) -> Self {
        StringOrNum::Num(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::CONFIG_TEXT;

    #[test]
    fn empty_config_is_default() {
        let config: Config = toml_edit::de::from_str("").unwrap();
        assert_eq!(config.counts(), (0, 0));
        assert!(config.general.is_none());
        assert!(config.styles.is_none());
    }

    #[test]
    fn default_config_parses() {
        let config: Config = toml_edit::de::from_str(CONFIG_TEXT).unwrap();
        assert_eq!(config.counts(), (6, 2));
    }

    #[test]
    fn rate_as_string_or_number() {
        let config: Config = toml_edit::de::from_str("[general]\nrate = 250").unwrap();
        assert_eq!(
            config.general.and_then(|general| general.rate),
            Some(StringOrNum::Num(250))
        );

        let config: Config = toml_edit::de::from_str("[general]\nrate = \"1s\"").unwrap();
        assert_eq!(
            config.general.and_then(|general| general.rate),
            Some(StringOrNum::String("1s".into()))
        );
    }

    #[test]
    fn mismatched_type() {
        assert!(toml_edit::de::from_str::<Config>("[general]\ndot_marker = 3").is_err());
    }
}
