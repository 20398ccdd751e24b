//! HTTP transport
//!
//! Runs blocking POSTs on a dedicated worker thread so the widget's
//! single-threaded event loop never waits on the network. Requests travel to
//! the worker over a channel; completed bodies travel back over another and
//! are drained by [`Transport::poll`]. There is no timeout and no explicit
//! cancellation: a reply that never arrives never has effect, and stale
//! replies are discarded by the controller via id comparison.

use std::sync::mpsc::{self, Receiver, Sender};

use super::types::{Flow, RequestId, Transport, TransportReply};

struct HttpJob {
    body: String,
    flow: Flow,
    request_id: RequestId,
}

/// Transport that POSTs form-encoded bodies to a fixed endpoint.
pub struct HttpTransport {
    job_tx: Sender<HttpJob>,
    reply_rx: Receiver<TransportReply>,
    next_id: u64,
}

impl HttpTransport {
    /// Create a transport bound to `endpoint` and spawn its worker thread.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let (job_tx, job_rx) = mpsc::channel();
        let (reply_tx, reply_rx) = mpsc::channel();

        std::thread::spawn(move || {
            worker_loop(&endpoint, job_rx, reply_tx);
        });

        Self {
            job_tx,
            reply_rx,
            next_id: 0,
        }
    }
}

impl Transport for HttpTransport {
    fn send(&mut self, body: String, flow: Flow) -> RequestId {
        self.next_id = self.next_id.wrapping_add(1);
        let request_id = RequestId(self.next_id);

        if self
            .job_tx
            .send(HttpJob {
                body,
                flow,
                request_id,
            })
            .is_err()
        {
            // Worker is gone; the request simply never completes, which the
            // controller already tolerates.
            log::debug!("transport worker unavailable, dropping request {request_id:?}");
        }

        request_id
    }

    fn poll(&mut self) -> Option<TransportReply> {
        self.reply_rx.try_recv().ok()
    }
}

/// Worker loop: process jobs until the widget drops its transport handle.
fn worker_loop(endpoint: &str, job_rx: Receiver<HttpJob>, reply_tx: Sender<TransportReply>) {
    while let Ok(job) = job_rx.recv() {
        match post_form(endpoint, &job.body) {
            Ok(body) => {
                if reply_tx
                    .send(TransportReply {
                        flow: job.flow,
                        request_id: job.request_id,
                        body,
                    })
                    .is_err()
                {
                    // Widget side disconnected, stop working
                    return;
                }
            }
            Err(message) => {
                // Non-success statuses and transport failures produce no
                // reply; the pending request just stays unanswered.
                log::debug!("dropping reply for request {:?}: {}", job.request_id, message);
            }
        }
    }

    log::debug!("transport worker shutting down");
}

fn post_form(endpoint: &str, body: &str) -> Result<String, String> {
    let response = ureq::post(endpoint)
        .set("Content-Type", "application/x-www-form-urlencoded")
        .send_string(body)
        .map_err(|e| e.to_string())?;

    response.into_string().map_err(|e| e.to_string())
}
