pub mod nav_state;

pub use nav_state::{NavMove, NavState};
