pub mod debouncer;
mod events;
mod lookup;
mod selection;
pub mod session;
mod state;

// Re-export public types
pub use debouncer::Debouncer;
pub use events::Key;
pub use session::SuggestionSession;
pub use state::{Suggest, Visual};
