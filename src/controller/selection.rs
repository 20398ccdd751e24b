//! Selection commit and the details flow
//!
//! Commits finalize a selection (Enter, click, blur, or an explicit
//! submission) and fire the secondary details request through the same
//! stale-reply-guarded path as lookups.

use crate::dom::DomAdapter;
use crate::transport::{Flow, Transport, TransportReply};

use super::state::{Suggest, Visual};

impl<D: DomAdapter, T: Transport> Suggest<D, T> {
    /// Submit a details search without typing (links, buttons, etc.); the
    /// term is used verbatim after URL-unescaping.
    pub fn submit(&mut self, term: &str) {
        self.commit_selection(Some(term));
    }

    /// Resolve the committed text — an explicit term, or the highlighted
    /// line stripped of markup — then write it into the input, clear the
    /// results box, and issue the details request.
    pub(crate) fn commit_selection(&mut self, explicit: Option<&str>) {
        let text = match explicit {
            Some(term) => {
                self.session.nav.result_selected = true;
                match urlencoding::decode(term) {
                    Ok(decoded) => decoded.into_owned(),
                    Err(e) => {
                        log::warn!("could not decode submitted term: {e}");
                        String::new()
                    }
                }
            }
            None => match self.session.nav.last_index {
                Some(index) => self
                    .dom
                    .line_text(index)
                    .map(|html| strip_markup(&html))
                    .unwrap_or_default(),
                None => String::new(),
            },
        };

        if !self.session.nav.result_selected || text.is_empty() {
            self.set_visual(Visual::Error);
            return;
        }

        self.dom.set_input_value(&text);
        self.clear_suggestions();
        self.session.last_search = text.clone();

        let body = self.build_request(&text, &self.details_key);
        let id = self.transport.send(body, Flow::Details);
        self.session.details_id = Some(id);
    }

    pub(crate) fn on_details_reply(&mut self, reply: TransportReply) {
        if self.session.details_id != Some(reply.request_id) {
            log::debug!("discarding stale details reply {:?}", reply.request_id);
            return;
        }
        match serde_json::from_str::<serde_json::Value>(&reply.body) {
            Ok(payload) => (self.output)(payload),
            Err(e) => log::warn!("discarding malformed details payload: {e}"),
        }
    }
}

/// Strip markup tags and the `&amp;` escape from a display fragment,
/// recovering the plain committed text.
fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut chars = html.chars();

    while let Some(ch) = chars.next() {
        if ch == '<' {
            // Skip to the end of the tag
            for c in chars.by_ref() {
                if c == '>' {
                    break;
                }
            }
        } else {
            text.push(ch);
        }
    }

    text.replace("&amp;", "&")
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
