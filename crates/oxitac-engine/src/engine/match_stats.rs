/// Win/draw tallies accumulated across the games of a match.
#[derive(Debug, Clone)]
pub struct MatchStats {
    human_wins: usize,
    ai_wins: usize,
    draws: usize,
}

impl Default for MatchStats {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchStats {
    /// Creates a new tally with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            human_wins: 0,
            ai_wins: 0,
            draws: 0,
        }
    }

    #[must_use]
    pub const fn human_wins(&self) -> usize {
        self.human_wins
    }

    #[must_use]
    pub const fn ai_wins(&self) -> usize {
        self.ai_wins
    }

    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// Total number of finished games.
    #[must_use]
    pub const fn games_played(&self) -> usize {
        self.human_wins + self.ai_wins + self.draws
    }

    pub const fn record_human_win(&mut self) {
        self.human_wins += 1;
    }

    pub const fn record_ai_win(&mut self) {
        self.ai_wins += 1;
    }

    pub const fn record_draw(&mut self) {
        self.draws += 1;
    }
}
