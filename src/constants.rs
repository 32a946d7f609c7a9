use std::time::Duration;

use crate::instruments::Rgba;

// How often the tree is redrawn.
pub const DEFAULT_REFRESH_RATE: Duration = Duration::from_millis(20);
pub const MIN_REFRESH_RATE: Duration = Duration::from_millis(10);
pub const MAX_REFRESH_RATE: Duration = Duration::from_secs(24 * 60 * 60);

// Upper bounds on per-widget history, so a config can't ask for more memory
// than a terminal could ever show.
pub const MAX_CHART_WINDOW: usize = 100_000;
pub const MAX_TRAIL_LENGTH: usize = 100_000;

// The longest the event loop blocks waiting for input.
pub const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

// Default series colours: red, green, blue, then white so it shows on a dark
// terminal.
pub const DEFAULT_SERIES_COLOURS: [Rgba; 4] = [
    Rgba::rgb(255, 0, 0),
    Rgba::rgb(0, 200, 0),
    Rgba::rgb(0, 0, 255),
    Rgba::rgb(255, 255, 255),
];

// Config and logging
pub const DEFAULT_CONFIG_FILE_PATH: &str = "eswb-monitor/ewmon.toml";
pub const DEBUG_LOG_FILE: &str = "debug.log";

pub const CONFIG_TEXT: &str = r##"# This is a default config file for ewmon. All of the settings below are
# optional; delete or comment out whatever you don't need.

[general]
# How often every widget is redrawn. Either milliseconds or a duration like "1s".
#rate = "20ms"
# Use a dot marker instead of braille for charts and instruments.
#dot_marker = false

[styles]
# Colours are hex ("#ff0000"), RGB(A) ("255, 0, 0") or a name ("red").
#series_colours = ["#ff0000", "#00c800", "#0000ff", "white"]
#table_idle_colour = "#000000"
#table_active_colour = "0, 100, 0"
#table_fade_step = 0.01
#border_colour = "gray"
#title_colour = "white"
#diagnostic_colour = "light yellow"

# Sources are polled by the widgets that name them.
[[sources]]
name = "roll"
kind = "sine"
amplitude = 45.0
period = "12s"

[[sources]]
name = "pitch"
kind = "sine"
amplitude = 15.0
period = "7s"
phase = 90.0

[[sources]]
name = "heading"
kind = "ramp"
step = 0.5
wrap = [0.0, 360.0]

[[sources]]
name = "cpu"
kind = "system"
metric = "cpu"

[[sources]]
name = "uptime"
kind = "clock"

[[sources]]
name = "gps"
kind = "offline"
message = "no fix"

# Widgets are drawn top to bottom. A group lays its children out side by side.
[[widgets]]
type = "group"
title = "Instruments"

[[widgets.children]]
type = "attitude"
title = "Attitude"
sources = ["roll", "pitch"]

[[widgets.children]]
type = "heading"
title = "Heading"
sources = ["heading"]

[[widgets.children]]
type = "cursor"
title = "Roll / Pitch"
sources = ["roll", "pitch"]
x_range = [-45.0, 45.0]
y_range = [-15.0, 15.0]

[[widgets]]
type = "group"
direction = "horizontal"

[[widgets.children]]
type = "table"
caption = "Values"
sources = ["roll", "pitch", "heading", "uptime", "gps"]

[[widgets.children]]
type = "chart"
title = "Host CPU"
sources = ["cpu"]
y_range = [0.0, 100.0]
"##;
