//! Transport seam
//!
//! The controller never talks to the network directly; it hands a
//! form-encoded body to a [`Transport`], gets back an opaque [`RequestId`],
//! and later drains replies from the same transport. Staleness is decided by
//! the controller alone, by comparing a reply's id against the latest id it
//! issued for that flow.

/// Which request/response cycle a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Candidate list for the current input text
    Lookup,
    /// Fuller information for a committed result
    Details,
}

/// Opaque, comparable token minted per outbound request.
///
/// Ids are only ever compared for equality against the most recently issued
/// id for the same flow; a mismatch means the reply is stale and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub(crate) u64);

/// A raw response body delivered back to the controller.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub flow: Flow,
    pub request_id: RequestId,
    pub body: String,
}

/// Issues outbound requests and surfaces replies.
///
/// Implementations mint a fresh id per `send` and may deliver replies in any
/// order, or never; unreachable endpoints and non-success statuses simply
/// produce no reply.
pub trait Transport {
    /// Issue a request carrying `body`, tagged with a fresh id.
    fn send(&mut self, body: String, flow: Flow) -> RequestId;

    /// Surface the next completed reply, if one has arrived.
    fn poll(&mut self) -> Option<TransportReply>;
}
