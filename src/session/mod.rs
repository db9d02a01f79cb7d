//! Game session: the stateful wrapper a front end drives.
//!
//! The engine is stateless; something has to own the current board, the
//! running and best scores, and the Playing → Won → Over progression.
//! `Session` is that owner for callers that don't want to write their own:
//!
//! - A move that changes nothing is inert (no spawn, no score)
//! - Reaching the target reports `just_won` once; play may continue
//! - Once no move is possible the session rejects moves until `restart`
//!
//! Transitions only happen on `play`, `restart`, or `resize`.

mod game;

pub use game::{GameStatus, Session, SessionBuilder, TurnReport};
