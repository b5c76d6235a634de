mod engine;

pub use engine::{FocusTimer, TimerDisplay, TimerState};
