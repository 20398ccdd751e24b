pub mod adapter;
pub mod headless;

pub use adapter::{DomAdapter, ResultLine};
pub use headless::{HeadlessDom, RenderedLine};
