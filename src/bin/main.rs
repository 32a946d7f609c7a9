use std::{
    io::stdout,
    panic,
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Instant,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{poll, read, Event},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use eswb_monitor::{
    canvas::Painter,
    check_if_terminal, cleanup_terminal,
    constants::*,
    event::handle_key_event_or_break,
    options::{args::Args, get_or_create_config, init_dashboard},
    panic_hook, try_drawing,
};
use tui::{backend::CrosstermBackend, Terminal};

fn main() -> Result<()> {
    let args = Args::get();

    #[cfg(feature = "logging")]
    {
        if let Err(err) = eswb_monitor::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new(DEBUG_LOG_FILE),
        ) {
            println!("Issue initializing logger: {err}");
        }
    }

    let config_path = args.general_args.config_location.as_deref().map(Path::new);
    let config = get_or_create_config(config_path)
        .context("Unable to properly parse or create the config file.")?;

    let (mut dashboard, styles) = init_dashboard(&args, &config)
        .context("Found an issue while trying to build the dashboard.")?;

    if args.general_args.check_config {
        let (sources, widgets) = config.counts();
        println!(
            "Config OK: {sources} source(s), {widgets} top-level widget(s), {} widget(s) in total.",
            dashboard.root().count() - 1
        );
        return Ok(());
    }

    // Check if the current environment is in a terminal.
    check_if_terminal();

    let painter = Painter::init(styles);
    dashboard.connect();

    // Set up tui and crossterm
    let mut stdout_val = stdout();
    execute!(stdout_val, EnterAlternateScreen)?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout_val))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    // Set panic hook
    panic::set_hook(Box::new(panic_hook));

    // Set termination hook
    let is_terminated = Arc::new(AtomicBool::new(false));
    {
        let is_terminated = is_terminated.clone();
        ctrlc::set_handler(move || {
            is_terminated.store(true, Ordering::SeqCst);
        })?;
    }

    let mut next_tick = Instant::now();
    while !is_terminated.load(Ordering::SeqCst) {
        let now = Instant::now();
        if now >= next_tick {
            dashboard.tick();
            try_drawing(&mut terminal, &dashboard, &painter)?;

            // Late ticks are dropped rather than caught up.
            next_tick = now + dashboard.config.update_rate;
        }

        let timeout = next_tick
            .saturating_duration_since(Instant::now())
            .min(INPUT_POLL_TIMEOUT);
        if poll(timeout)? {
            match read()? {
                Event::Key(event) => {
                    if handle_key_event_or_break(event, &mut dashboard) {
                        break;
                    }
                    try_drawing(&mut terminal, &dashboard, &painter)?;
                }
                Event::Resize(_, _) => {
                    try_drawing(&mut terminal, &dashboard, &painter)?;
                }
                _ => {}
            }
        }
    }

    cleanup_terminal(&mut terminal)?;

    Ok(())
}
