use std::{borrow::Cow, fmt};

/// A problem with the config file or launch arguments.
///
/// These are shown to the user as-is, so say what is wrong and what to fix.
/// Offending values and keys are wrapped in single quotes (e.g. `'bad'`).
#[derive(Debug, PartialEq)]
pub enum OptionError {
    Config(Cow<'static, str>),
    Argument(Cow<'static, str>),
    Other(Cow<'static, str>),
}

impl OptionError {
    /// Create a new [`OptionError::Config`].
    pub(crate) fn config<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Config(reason.into())
    }

    /// A config key was set to something unusable.
    pub(crate) fn invalid_config_value(key: &str, reason: impl fmt::Display) -> Self {
        OptionError::Config(Cow::Owned(format!(
            "'{key}' was set with an invalid value, please update it in your config file. {reason}"
        )))
    }

    /// Create a new [`OptionError::Argument`].
    pub(crate) fn arg<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        OptionError::Argument(reason.into())
    }

    /// An argument was set to something unusable.
    pub(crate) fn invalid_arg_value(arg: &str) -> Self {
        OptionError::Argument(Cow::Owned(format!(
            "'--{arg}' was set with an invalid value, please update your arguments."
        )))
    }
}

pub type OptionResult<T> = Result<T, OptionError>;

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::Config(reason) => write!(f, "Configuration file error: {reason}"),
            OptionError::Argument(reason) => write!(f, "Argument error: {reason}"),
            OptionError::Other(reason) => {
                write!(f, "Error with the config file or the arguments: {reason}")
            }
        }
    }
}

impl std::error::Error for OptionError {}

impl From<toml_edit::de::Error> for OptionError {
    fn from(err: toml_edit::de::Error) -> Self {
        OptionError::Config(err.to_string().into())
    }
}

impl From<std::io::Error> for OptionError {
    fn from(err: std::io::Error) -> Self {
        OptionError::Other(err.to_string().into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        assert_eq!(
            OptionError::invalid_arg_value("rate").to_string(),
            "Argument error: '--rate' was set with an invalid value, please update your arguments."
        );

        let err = OptionError::invalid_config_value("styles.table_fade_step", "It must be finite.");
        assert!(err.to_string().starts_with("Configuration file error: 'styles.table_fade_step'"));
        assert!(err.to_string().ends_with("It must be finite."));
    }
}
