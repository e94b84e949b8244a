use crate::config::Config;
use crate::error::AppError;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::LogBuffer;
use crate::state::State;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    tick_rate_ms: u64,
}

impl App {
    /// Start a new application according to the given configuration. Log
    /// lines captured into `log` are shown in the log panel. Returns the
    /// result of the application execution.
    ///
    pub fn start(config: Config, log: LogBuffer) -> Result<()> {
        info!("Starting application...");
        let state = State::from_config(&config, log).map_err(AppError::from)?;
        info!("Mounted {} widgets", state.get_widgets().len());

        let mut app = App {
            state,
            tick_rate_ms: config.tick_rate_ms,
        };

        let result = app.start_ui();
        if let Err(e) = restore_terminal() {
            error!("Failed to restore terminal: {}", e);
        }

        info!("Exiting application...");
        result
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let terminal_event_handler = TerminalEventHandler::new(self.tick_rate_ms);
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        terminal.show_cursor()?;
        Ok(())
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}
