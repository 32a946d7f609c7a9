//! Argument parsing via clap.
//!
//! Note that you probably want to keep this as a single file so the build script doesn't
//! trip all over itself.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "ewmon [OPTIONS]";

const VERSION: &str = match option_env!("NIGHTLY_VERSION") {
    Some(nightly_version) => nightly_version,
    None => crate_version!(),
};

/// The arguments for ewmon.
#[derive(Parser, Debug)]
#[command(
    name = "ewmon",
    version = VERSION,
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

impl Args {
    /// Parse from the process' arguments.
    pub fn get() -> Self {
        Args::parse()
    }
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub struct GeneralArgs {
    #[arg(
        long = "check_config",
        help = "Validates the config file and exits.",
        long_help = "Loads the config file, builds every source and widget, prints a short summary \
                    and exits without drawing anything. Useful for checking a layout."
    )]
    pub check_config: bool,

    #[arg(
        short = 'C',
        long = "config_location",
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub config_location: Option<String>,

    #[arg(
        short = 'm',
        long = "dot_marker",
        help = "Uses a dot marker for charts and instruments.",
        long_help = "Uses a dot marker for charts and instruments as opposed to the default braille marker."
    )]
    pub dot_marker: bool,

    #[arg(
        short = 'r',
        long,
        value_name = "TIME",
        help = "Sets how often widgets are redrawn.",
        long_help = indoc! {
            "Sets how often every widget polls its sources and redraws. Takes a number in \
            milliseconds or a human-readable duration (e.g. 100ms). The minimum is 10ms, \
            and defaults to 20ms.

            Every source is read once per redraw, so slow sources slow the whole dashboard."
        }
    )]
    pub rate: Option<String>,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help (see more with '--help').")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Returns a [`Command`] based off of [`Args`].
pub fn build_cmd() -> Command {
    Args::command()
}
