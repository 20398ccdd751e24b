//! Lookup flow
//!
//! sanitize → redundant-search suppression → request with a fresh id →
//! stale-reply discard → fail-soft parse → format per category → render.

use crate::dom::{DomAdapter, ResultLine};
use crate::transport::{Flow, Transport, TransportReply};

use super::state::{Suggest, Visual};

const NO_MATCHES_MESSAGE: &str = "Sorry, no matches found.";

impl<D: DomAdapter, T: Transport> Suggest<D, T> {
    /// Drive the widget: fire the debounced lookup when due, then drain any
    /// transport replies. Call this from the host event loop.
    pub fn tick(&mut self) {
        if self.debouncer.fire_ready() {
            self.run_lookup();
        }
        while let Some(reply) = self.transport.poll() {
            match reply.flow {
                Flow::Lookup => self.on_lookup_reply(reply),
                Flow::Details => self.on_details_reply(reply),
            }
        }
    }

    /// Validate the current input value and issue a lookup request for it.
    pub(crate) fn run_lookup(&mut self) {
        let value = self.dom.input_value().trim().to_string();
        if value.is_empty() {
            self.session.last_search.clear();
            self.clear_suggestions();
            return;
        }

        if !self.filter.is_valid(&value) {
            // Leave the user's text alone; just flag it
            self.set_visual(Visual::Error);
            return;
        }
        self.set_visual(Visual::Normal);

        if value == self.session.last_search {
            return;
        }
        self.session.last_search = value.clone();

        let body = self.build_request(&value, "lookup");
        let id = self.transport.send(body, Flow::Lookup);
        self.session.lookup_id = Some(id);
    }

    fn on_lookup_reply(&mut self, reply: TransportReply) {
        if self.session.lookup_id != Some(reply.request_id) {
            log::debug!("discarding stale lookup reply {:?}", reply.request_id);
            return;
        }
        if reply.body.is_empty() {
            return;
        }
        let Some(groups) = parse_lookup_payload(&reply.body) else {
            return;
        };

        let term = self.session.last_search.clone();
        self.session.nav.reset();
        self.clear_suggestions();

        // Groups render in server order, items in within-group order, with
        // one sequential index across all of them
        let mut lines: Vec<ResultLine> = Vec::new();
        for items in &groups {
            let formatted = self.formatter.format(&term, items);
            for (raw, display) in items.iter().zip(formatted) {
                let index = lines.len();
                lines.push(ResultLine::new(raw.clone(), display, index));
            }
        }
        self.session.nav.set_match_count(lines.len());

        if lines.is_empty() {
            let class = self.styling.no_matches_class.clone();
            self.dom.render_no_matches(NO_MATCHES_MESSAGE, &class);
        } else {
            let class = self.styling.result_line_class.clone();
            self.dom.render_lines(&lines, &class);
        }
        self.dom.show_results();
    }
}

/// Parse a lookup payload: an object mapping category names to ordered lists
/// of candidate strings. Anything else is malformed and rejected wholesale,
/// leaving the prior UI state untouched.
fn parse_lookup_payload(body: &str) -> Option<Vec<Vec<String>>> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("discarding malformed lookup payload: {e}");
            return None;
        }
    };

    let Some(groups) = value.as_object() else {
        log::warn!("discarding lookup payload: expected an object of candidate lists");
        return None;
    };

    let mut parsed = Vec::with_capacity(groups.len());
    for (category, items) in groups {
        let Some(items) = items.as_array() else {
            log::warn!("discarding lookup payload: category \"{category}\" is not a list");
            return None;
        };
        let mut candidates = Vec::with_capacity(items.len());
        for item in items {
            let Some(text) = item.as_str() else {
                log::warn!(
                    "discarding lookup payload: category \"{category}\" holds a non-string item"
                );
                return None;
            };
            candidates.push(text.to_string());
        }
        parsed.push(candidates);
    }
    Some(parsed)
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod lookup_tests;
