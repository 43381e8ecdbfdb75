pub mod board;
pub mod player;
pub mod state;

// Board and Player stay behind Game; snapshots come out of its query methods.
pub use board::{Cell, Mark};
pub use state::Game;
