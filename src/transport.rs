pub mod http;
pub mod types;

pub use http::HttpTransport;
pub use types::{Flow, RequestId, Transport, TransportReply};
