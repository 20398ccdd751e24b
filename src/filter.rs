pub mod value_filter;

pub use value_filter::{DefaultValueFilter, ValueFilter};
