//! The board engine: stateless transformations over `Board` snapshots.
//!
//! - `factory`: new boards with two seed tiles
//! - `spawner`: one random 2/4 tile into an empty cell
//! - `mover`: the leftward slide-and-merge of a single row
//! - `rotator`: quarter turns reducing every direction to "left"
//! - `terminal`: win and loss detection
//! - `orchestrator`: whole-board moves built from the pieces above
//!
//! Nothing here holds state. The only nondeterminism is the `SpawnSource`
//! passed to the factory and spawner.

pub mod factory;
pub mod mover;
pub mod orchestrator;
pub mod rotator;
pub mod spawner;
pub mod terminal;

pub use factory::create_initial_board;
pub use mover::{slide_row_left, RowMove};
pub use orchestrator::{apply_move, can_move, legal_moves, MoveResult};
pub use rotator::{rotate, rotate_times};
pub use spawner::{spawn_tile, try_spawn, Spawn};
pub use terminal::{evaluate, has_adjacent_pair, is_game_over, is_won, Terminal};
