use serde::Deserialize;

use super::StringOrNum;

#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub(crate) struct GeneralConfig {
    pub(crate) rate: Option<StringOrNum>,
    pub(crate) dot_marker: Option<bool>,
}
