//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    rc::Rc,
    time::Duration,
};

pub use config::Config;
pub use error::{OptionError, OptionResult};

use self::{
    args::Args,
    config::{sources::build_registry, widgets::build_tree, StringOrNum},
};
use crate::{
    app::{Dashboard, DashboardConfig},
    canvas::styling::CanvasStyles,
    constants::*,
};

/// Returns the config path to use. If `override_config_path` is specified, then
/// we will use that. If not, then return the "default" config path, which is:
///
/// - If a path already exists at `<HOME>/.config/eswb-monitor/ewmon.toml`, then use that for legacy reasons.
/// - Otherwise, use `<SYSTEM_CONFIG_FOLDER>/eswb-monitor/ewmon.toml`.
///
/// For more details on this, see [dirs](https://docs.rs/dirs/latest/dirs/fn.config_dir.html)' documentation.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(conf_loc) = override_config_path {
        return Some(conf_loc.to_path_buf());
    } else if let Some(home_path) = dirs::home_dir() {
        let mut old_home_path = home_path;
        old_home_path.push(".config/");
        old_home_path.push(DEFAULT_CONFIG_FILE_PATH);
        if old_home_path.exists() {
            // We used to create it at `<HOME>/DEFAULT_CONFIG_FILE_PATH`, but changed it
            // to be more correct later. However, for legacy reasons, if it already exists, use the old one.
            return Some(old_home_path);
        }
    }

    // Otherwise, return the "correct" location based on the config dir.
    dirs::config_dir().map(|path| path.join(DEFAULT_CONFIG_FILE_PATH))
}

/// Get the config at `config_path`. If there is no config file at the specified
/// path, it will try to create a new file with the default settings, and return
/// the default config.
pub fn get_or_create_config(config_path: Option<&Path>) -> OptionResult<Config> {
    let adjusted_config_path = get_config_path(config_path);

    match &adjusted_config_path {
        Some(path) => {
            if let Ok(config_string) = fs::read_to_string(path) {
                Ok(toml_edit::de::from_str(&config_string)?)
            } else {
                if let Some(parent_path) = path.parent() {
                    fs::create_dir_all(parent_path)?;
                }

                fs::File::create(path)?.write_all(CONFIG_TEXT.as_bytes())?;
                log::info!("Created a default config at {}", path.display());

                Ok(toml_edit::de::from_str(CONFIG_TEXT)?)
            }
        }
        None => {
            // If we somehow don't have any config path, then just use the default layout.
            Ok(toml_edit::de::from_str(CONFIG_TEXT)?)
        }
    }
}

/// Try to parse a duration given as milliseconds or a human-readable string.
fn try_parse_ms(s: &str) -> Result<Duration, String> {
    if let Ok(millis) = s.trim().parse::<u64>() {
        Ok(Duration::from_millis(millis))
    } else {
        humantime::parse_duration(s.trim())
            .map_err(|err| format!("'{s}' is not a duration: {err}."))
    }
}

/// Parse a duration from the config file.
pub(crate) fn parse_duration(value: &StringOrNum) -> Result<Duration, String> {
    match value {
        StringOrNum::String(s) => try_parse_ms(s),
        StringOrNum::Num(millis) => Ok(Duration::from_millis(*millis)),
    }
}

/// The redraw interval. Arguments win over the config file.
fn get_update_rate(args: &Args, config: &Config) -> OptionResult<Duration> {
    let rate = if let Some(rate) = &args.general_args.rate {
        try_parse_ms(rate).map_err(|_| OptionError::invalid_arg_value("rate"))?
    } else if let Some(rate) = config
        .general
        .as_ref()
        .and_then(|general| general.rate.as_ref())
    {
        parse_duration(rate)
            .map_err(|err| OptionError::invalid_config_value("general.rate", err))?
    } else {
        DEFAULT_REFRESH_RATE
    };

    let message = if rate < MIN_REFRESH_RATE {
        Some(format!("must be at least {}ms.", MIN_REFRESH_RATE.as_millis()))
    } else if rate > MAX_REFRESH_RATE {
        Some(format!(
            "must be at most {}.",
            humantime::format_duration(MAX_REFRESH_RATE)
        ))
    } else {
        None
    };

    if let Some(message) = message {
        return Err(if args.general_args.rate.is_some() {
            OptionError::arg(format!("'--rate' {message}"))
        } else {
            OptionError::config(format!("'general.rate' {message}"))
        });
    }

    Ok(rate)
}

fn get_dot_marker(args: &Args, config: &Config) -> bool {
    args.general_args.dot_marker
        || config
            .general
            .as_ref()
            .and_then(|general| general.dot_marker)
            .unwrap_or(false)
}

/// Build the dashboard and its styles from the arguments and config.
pub fn init_dashboard(args: &Args, config: &Config) -> OptionResult<(Dashboard, CanvasStyles)> {
    let dashboard_config = DashboardConfig {
        update_rate: get_update_rate(args, config)?,
        dot_marker: get_dot_marker(args, config),
    };

    let styles = CanvasStyles::new(config.styles.as_ref())?;
    let registry = build_registry(&config.sources)?;
    let root = build_tree(&config.widgets, &registry, &styles)?;

    let unused = registry
        .iter()
        .filter(|(_, source)| Rc::strong_count(source) == 1)
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>();
    if !unused.is_empty() {
        log::info!("Sources not used by any widget: {}", unused.join(", "));
    }

    Ok((Dashboard::new(dashboard_config, root, registry), styles))
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ewmon").chain(extra.iter().copied())).unwrap()
    }

    fn config(text: &str) -> Config {
        toml_edit::de::from_str(text).unwrap()
    }

    const MINIMAL: &str = r#"
        [[sources]]
        name = "a"
        kind = "constant"
        value = 1

        [[widgets]]
        type = "table"
        sources = ["a"]
    "#;

    #[test]
    fn parse_ms() {
        assert_eq!(try_parse_ms("100"), Ok(Duration::from_millis(100)));
        assert_eq!(try_parse_ms("2s"), Ok(Duration::from_secs(2)));
        assert_eq!(try_parse_ms(" 20ms "), Ok(Duration::from_millis(20)));
        assert!(try_parse_ms("fast").is_err());
    }

    #[test]
    fn rate_precedence() {
        let with_rate = config(&format!("[general]\nrate = \"500ms\"\n{MINIMAL}"));

        assert_eq!(
            get_update_rate(&args(&[]), &with_rate),
            Ok(Duration::from_millis(500))
        );
        assert_eq!(
            get_update_rate(&args(&["-r", "40"]), &with_rate),
            Ok(Duration::from_millis(40))
        );
        assert_eq!(
            get_update_rate(&args(&[]), &config(MINIMAL)),
            Ok(DEFAULT_REFRESH_RATE)
        );
    }

    #[test]
    fn rate_too_small() {
        let err = get_update_rate(&args(&["-r", "5"]), &config(MINIMAL)).unwrap_err();
        assert!(err.to_string().contains("'--rate' must be at least"));

        let err = get_update_rate(&args(&[]), &config("[general]\nrate = 1")).unwrap_err();
        assert!(err.to_string().contains("'general.rate' must be at least"));

        assert_eq!(
            get_update_rate(&args(&["-r", "sometime"]), &config(MINIMAL)),
            Err(OptionError::invalid_arg_value("rate"))
        );
    }

    #[test]
    fn rate_too_large() {
        let err = get_update_rate(&args(&["-r", "2days"]), &config(MINIMAL)).unwrap_err();
        assert!(err.to_string().contains("'--rate' must be at most 1day."));

        let err = get_update_rate(
            &args(&[]),
            &config("[general]\nrate = \"1000000000 years\""),
        )
        .unwrap_err();
        assert!(err.to_string().contains("'general.rate' must be at most"));

        assert_eq!(
            get_update_rate(&args(&["-r", "1day"]), &config(MINIMAL)),
            Ok(MAX_REFRESH_RATE)
        );
    }

    #[test]
    fn builds_dashboard() {
        let (dashboard, styles) = init_dashboard(&args(&["-m"]), &config(MINIMAL)).unwrap();

        assert!(dashboard.config.dot_marker);
        assert_eq!(dashboard.root().count(), 2);
        assert_eq!(dashboard.sources().len(), 1);
        assert_eq!(styles, CanvasStyles::default());
    }

    #[test]
    fn default_config_builds() {
        let config = config(CONFIG_TEXT);
        assert!(init_dashboard(&args(&[]), &config).is_ok());
    }

    #[test]
    fn creates_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ewmon.toml");

        let config = get_or_create_config(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEXT);
        assert_eq!(config.counts(), (6, 2));
    }
}
