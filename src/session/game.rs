//! Session implementation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{Board, Direction, EngineConfig, EngineError, GameRng, GameRngState};
use crate::engine::{apply_move, create_initial_board, is_game_over, is_won, legal_moves, try_spawn, Spawn};

/// Where a session stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Target not yet reached, moves still possible.
    #[default]
    Playing,
    /// Target reached; play may continue.
    Won,
    /// No move can change the board.
    Over,
}

impl GameStatus {
    /// Does this status still accept moves?
    #[must_use]
    pub fn accepts_moves(self) -> bool {
        self != GameStatus::Over
    }
}

/// What happened on one call to `Session::play`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Did the board change? When false nothing else happened.
    pub moved: bool,
    /// Score gained from merges this turn.
    pub score_delta: u64,
    /// The tile spawned after the move, if any.
    pub spawned: Option<Spawn>,
    /// The target appeared for the first time this session.
    pub just_won: bool,
    /// Status after the turn.
    pub status: GameStatus,
}

/// Builder for creating a `Session`.
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    config: EngineConfig,
    starting_board: Option<Board>,
}

impl SessionBuilder {
    /// Create a builder with the default 4×4, 2048 configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    pub fn size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    /// Set the win target.
    pub fn target(mut self, target: u64) -> Self {
        self.config.target = target;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from a fixed position instead of a freshly dealt board.
    /// The board's side length overrides any configured size. A board with
    /// no legal move starts the session already over.
    pub fn starting_board(mut self, board: Board) -> Self {
        self.starting_board = Some(board);
        self
    }

    /// Validate the configuration and deal the first board.
    ///
    /// # Errors
    ///
    /// Returns the `EngineConfig::validate` error for a bad size or target.
    pub fn build(self, seed: u64) -> Result<Session, EngineError> {
        let mut config = self.config;
        if let Some(board) = &self.starting_board {
            config.size = board.size();
        }
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let board = match self.starting_board {
            Some(board) => board,
            None => create_initial_board(config.size, &mut rng),
        };
        let status = if is_game_over(&board) {
            GameStatus::Over
        } else {
            GameStatus::Playing
        };
        debug!(size = config.size, win_target = config.target, seed, ?status, "session started");

        Ok(Session {
            config,
            board,
            score: 0,
            best_score: 0,
            won: false,
            status,
            rng,
        })
    }
}

/// One player's game: the current board plus score and status bookkeeping.
#[derive(Clone, Debug)]
pub struct Session {
    config: EngineConfig,
    board: Board,
    score: u64,
    best_score: u64,
    won: bool,
    status: GameStatus,
    rng: GameRng,
}

impl Session {
    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Score of the current game.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Highest score seen across restarts of this session.
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Has the target been reached in the current game?
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.config.size
    }

    /// Win target tile.
    pub fn target(&self) -> u64 {
        self.config.target
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// RNG position, for replaying the rest of the game elsewhere.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Directions that would change the current board.
    pub fn legal_moves(&self) -> Vec<Direction> {
        legal_moves(&self.board)
    }

    /// Play one move.
    ///
    /// A move that changes nothing is accepted but inert: no spawn, no
    /// score, no RNG draws.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::GameOver` once the session is over. The state
    /// is left untouched.
    #[instrument(level = "debug", skip(self), fields(score = self.score))]
    pub fn play(&mut self, direction: Direction) -> Result<TurnReport, EngineError> {
        if !self.status.accepts_moves() {
            return Err(EngineError::GameOver);
        }

        let result = apply_move(&self.board, direction);
        if !result.moved {
            return Ok(TurnReport {
                moved: false,
                score_delta: 0,
                spawned: None,
                just_won: false,
                status: self.status,
            });
        }

        let (board, spawned) = match try_spawn(&result.board, &mut self.rng) {
            Some((board, spawn)) => (board, Some(spawn)),
            None => (result.board, None),
        };
        if let Some(spawn) = spawned {
            debug!(pos = %spawn.pos, value = spawn.value, "tile spawned");
        }
        self.board = board;

        self.score = self.score.saturating_add(result.score_delta);
        self.best_score = self.best_score.max(self.score);

        let just_won = !self.won && is_won(&self.board, self.config.target);
        if just_won {
            self.won = true;
            self.status = GameStatus::Won;
            info!(win_target = self.config.target, score = self.score, "target reached");
        }

        if is_game_over(&self.board) {
            self.status = GameStatus::Over;
            info!(score = self.score, max_tile = self.board.max_tile(), "game over");
        }

        Ok(TurnReport {
            moved: true,
            score_delta: result.score_delta,
            spawned,
            just_won,
            status: self.status,
        })
    }

    /// Start a new game at the current size. The best score is kept.
    pub fn restart(&mut self) {
        self.board = create_initial_board(self.config.size, &mut self.rng);
        self.score = 0;
        self.won = false;
        self.status = GameStatus::Playing;
        debug!(size = self.config.size, best = self.best_score, "session restarted");
    }

    /// Start a new game on a board of a different size.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidSize` if `size < 2`; the current game
    /// is kept in that case.
    pub fn resize(&mut self, size: usize) -> Result<(), EngineError> {
        let config = self.config.with_size(size);
        config.validate()?;
        self.config = config;
        self.restart();
        Ok(())
    }
}
