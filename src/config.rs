pub mod types;

pub use types::{BehaviorConfig, CoreOptions, Options, OutputFn, StylingConfig};
