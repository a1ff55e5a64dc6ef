//! In-memory statistics for one run of the program

use super::{Session, SessionState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n - 1]` counts wins on the n-th guess
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished session
    ///
    /// Returns `false` and records nothing if the session is still in progress.
    pub fn record(&mut self, session: &Session) -> bool {
        match session.state() {
            SessionState::InProgress => return false,
            SessionState::Won => {
                if let Some(index) = session.round().checked_sub(1) {
                    if self.guess_distribution.len() <= index {
                        self.guess_distribution.resize(index + 1, 0);
                    }
                    self.guess_distribution[index] += 1;
                }
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            SessionState::Lost => self.current_streak = 0,
        }
        self.games_played += 1;
        true
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
