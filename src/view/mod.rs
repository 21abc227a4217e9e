//! View module - which screen is shown and how it changes

mod controller;
mod schedule;
mod state;

pub use controller::ViewController;
pub use schedule::ScheduledTransition;
pub use state::ViewState;
