//! A terminal dashboard of tables, charts, cursors and flight instruments,
//! each bound to named data sources that are polled on a fixed interval.
//!
//! The widget tree lives in [`widgets`], the sources it polls in
//! [`collection`], and the drawing math that doesn't depend on a terminal in
//! [`instruments`].

pub mod utils {
    pub mod error;
    pub mod logging;
}
pub mod app;
pub mod canvas;
pub mod collection;
pub mod constants;
pub mod event;
pub mod instruments;
pub mod options;
pub mod widgets;

use std::{
    io::{stderr, stdout, IsTerminal, Stdout},
    panic::PanicHookInfo,
};

use crossterm::{
    execute,
    style::Print,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use tui::{backend::CrosstermBackend, Terminal};
use utils::error::{self, MonitorError};

use crate::{app::Dashboard, canvas::Painter};

/// Warns if stdout isn't a terminal, since the dashboard will likely not
/// display correctly.
pub fn check_if_terminal() {
    if !stdout().is_terminal() {
        eprintln!(
            "Warning: ewmon is not being output to a terminal. Things might not work properly."
        );
        eprintln!("If you're stuck, press 'q' or 'Ctrl-c' to quit the program.");
        let _ = execute!(stderr(), Print("\n"));
    }
}

/// Draws one frame. If drawing fails, the terminal is restored first so the
/// error is readable.
pub fn try_drawing(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>, dashboard: &Dashboard, painter: &Painter,
) -> error::Result<()> {
    if let Err(err) = terminal.draw(|f| painter.draw_data(f, dashboard)) {
        cleanup_terminal(terminal)?;
        return Err(MonitorError::Terminal(err.to_string()));
    }

    Ok(())
}

/// Leave raw mode and the alternate screen.
pub fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> error::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal
        .show_cursor()
        .map_err(|err| MonitorError::Terminal(err.to_string()))?;

    Ok(())
}

/// Restores the terminal before printing the panic, so it isn't lost in the
/// alternate screen.
pub fn panic_hook(panic_info: &PanicHookInfo<'_>) {
    let mut stdout = stdout();

    let msg = match panic_info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match panic_info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<Any>",
        },
    };

    let stacktrace = format!("{:?}", backtrace::Backtrace::new());
    let location = panic_info
        .location()
        .map(|location| location.to_string())
        .unwrap_or_else(|| "an unknown location".to_string());

    let _ = disable_raw_mode();
    let _ = execute!(stdout, LeaveAlternateScreen);

    // Print stack trace. Must be done after!
    let _ = execute!(
        stdout,
        Print(format!(
            "thread '<unnamed>' panicked at '{msg}', {location}\n\r{stacktrace}",
        )),
    );
}
