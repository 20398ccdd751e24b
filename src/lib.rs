//! Embeddable autocomplete engine.
//!
//! Attaches to a text input, ships the current value to a remote suggestion
//! endpoint as the user types, renders a dropdown of matching results, and
//! lets the user pick one with the keyboard or pointer. The asynchronous
//! pipeline is the interesting part: keystrokes are debounced, every outbound
//! request carries a fresh id, and only the reply matching the most recently
//! issued id for its flow is honored (last-request-wins).
//!
//! DOM access and network access sit behind the [`dom::DomAdapter`] and
//! [`transport::Transport`] traits; [`dom::HeadlessDom`] and
//! [`transport::HttpTransport`] are the bundled implementations.

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod navigation;
pub mod transport;


pub use config::{BehaviorConfig, CoreOptions, Options, OutputFn, StylingConfig};
pub use controller::{Key, Suggest, Visual};
pub use dom::{DomAdapter, HeadlessDom, ResultLine};
pub use error::SuggestError;
pub use filter::{DefaultValueFilter, ValueFilter};
pub use formatter::{BoldFormatter, ResultFormatter};
pub use navigation::NavState;
pub use transport::{Flow, HttpTransport, RequestId, Transport, TransportReply};
