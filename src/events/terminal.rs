use crate::config::hotkeys::{get_action_for_event, HotkeyAction};
use crate::error::{AppError, AppResult};
use crate::state::State;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread. The
    /// thread sends a tick every `tick_rate_ms` and stops once the receiver
    /// is gone or the terminal can no longer be read.
    ///
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        let tick_rate = Duration::from_millis(tick_rate_ms);
        thread::spawn(move || loop {
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> AppResult<bool> {
        match self
            .rx
            .recv()
            .map_err(|e| AppError::Terminal(e.to_string()))?
        {
            Event::Input(key) => Ok(handle_key(&key, state)),
            Event::Tick => {
                state.advance_spinner();
                Ok(true)
            }
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(key: &KeyEvent, state: &mut State) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }
    match get_action_for_event(key, state.get_hotkeys()) {
        Some(action) => handle_action(action, state),
        None => true,
    }
}

/// Apply a hotkey action to the state. Returns false if exit was requested.
///
pub fn handle_action(action: HotkeyAction, state: &mut State) -> bool {
    match action {
        HotkeyAction::Quit => {
            debug!("Processing exit action...");
            return false;
        }
        HotkeyAction::FocusNext => state.next_widget(),
        HotkeyAction::FocusPrev => state.previous_widget(),
        HotkeyAction::ToggleWidget => {
            if let Err(e) = state.toggle_focused() {
                warn!("Failed to toggle widget: {}", e);
            }
        }
        HotkeyAction::ToggleLoading => match state.toggle_focused_loading() {
            Ok(loading) => debug!(
                "Widget {} loading set to {}",
                state.get_focused_index(),
                loading
            ),
            Err(e) => warn!("Failed to change loading flag: {}", e),
        },
        HotkeyAction::ToggleLog => state.toggle_log(),
    }
    true
}
