pub mod editor;
pub mod handler;

pub use handler::{handle_input, InputState, Screen};
