//! TUI application state and logic

use crate::game::{GameConfig, Outcome, Rejection, Session, SessionState, Statistics};
use crate::output::formatters::final_message;
use crate::wordlists::SecretPicker;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session,
    pub picker: SecretPicker,
    pub stats: Statistics,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the picked secret does not fit `config`.
    pub fn new(mut picker: SecretPicker, config: GameConfig) -> Result<Self> {
        let session = Session::new(picker.next_secret(), config)?;

        Ok(Self {
            session,
            picker,
            stats: Statistics::default(),
            messages: vec![Message {
                text: format!(
                    "Guess the {}-letter word in {} tries. Type, Backspace, Enter.",
                    config.word_length(), config.max_attempts()
                ),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        })
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.session.is_over() {
            match key.code {
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                _ => {}
            }
            return;
        }

        let result = match key.code {
            KeyCode::Char(c) => self.session.add_letter(c),
            KeyCode::Backspace => self.session.delete_letter(),
            KeyCode::Enter => self.session.submit_guess(),
            _ => return,
        };

        match result {
            Ok(Outcome::GuessSubmitted { state, .. }) if state.is_terminal() => {
                self.finish_game();
            }
            Ok(_) => {}
            Err(rejection) => self.report(rejection),
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.session);
        let style = if self.session.state() == SessionState::Won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(&final_message(&self.session), style);
        self.add_message("Press Enter or 'n' for a new game, 'q' to quit.", MessageStyle::Info);
    }

    fn report(&mut self, rejection: Rejection) {
        debug!("TUI rejected key: {rejection}");
        // Silently ignore no-ops; they are usually key repeat
        if !matches!(rejection, Rejection::NoOpRequested(_)) {
            self.add_message(&rejection.to_string(), MessageStyle::Error);
        }
    }

    pub fn new_game(&mut self) {
        let secret = self.picker.next_secret();
        match self.session.restart(secret) {
            Ok(()) => {
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Returns the statistics of all games finished during the run.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
