// App module for mbg-dash
// Holds application state and the fetch orchestration glue

pub mod actions;
pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppScreen, LoadPhase};
