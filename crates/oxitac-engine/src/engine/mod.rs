//! Game session logic and state management.
//!
//! This module provides the high-level state machine that orchestrates the
//! core data structures across a match:
//!
//! - [`GameSession`] - Single game with fixed human/AI mark assignment and
//!   turn tracking
//! - [`MatchStats`] - Win/draw tallies accumulated across games
//!
//! # Game Flow
//!
//! 1. Create a [`GameSession`] with the human's chosen mark; X always opens
//! 2. The side to move plays via [`GameSession::play_move`]
//! 3. The session resolves wins and draws and updates [`MatchStats`]
//! 4. [`GameSession::reset`] starts the next game, keeping the tallies
//!
//! Move selection for the AI side is not the session's concern: a caller
//! asks the search engine for a move and applies it here like any other.

pub use self::{game_session::*, match_stats::*};

mod game_session;
mod match_stats;
