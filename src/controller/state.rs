use std::time::Duration;

use crate::config::{Options, OutputFn};
use crate::dom::DomAdapter;
use crate::error::SuggestError;
use crate::filter::{DefaultValueFilter, ValueFilter};
use crate::formatter::{BoldFormatter, ResultFormatter};
use crate::transport::{HttpTransport, Transport};

use super::debouncer::Debouncer;
use super::session::SuggestionSession;

/// Delay between a keystroke and the lookup it schedules
const DEBOUNCE_DELAY: Duration = Duration::from_millis(10);

/// Polling step while waiting for the widget's elements to appear
const INIT_WAIT_STEP: Duration = Duration::from_millis(50);

/// Total time to wait for the widget's elements before giving up
const INIT_WAIT_LIMIT: Duration = Duration::from_millis(1000);

/// Visual state of the input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    Normal,
    Error,
}

/// An attached autocomplete widget.
///
/// Owns its DOM adapter, transport, and session state; the host event loop
/// routes input events to the `handle_*` methods and calls [`Suggest::tick`]
/// regularly to fire debounced lookups and drain transport replies.
pub struct Suggest<D: DomAdapter, T: Transport> {
    pub(crate) dom: D,
    pub(crate) transport: T,
    pub(crate) session: SuggestionSession,
    pub(crate) debouncer: Debouncer,
    pub(crate) styling: crate::config::StylingConfig,
    pub(crate) input_reset: bool,
    pub(crate) search_key: String,
    pub(crate) details_key: String,
    pub(crate) formatter: Box<dyn ResultFormatter>,
    pub(crate) filter: Box<dyn ValueFilter>,
    pub(crate) output: OutputFn,
}

impl<D: DomAdapter> Suggest<D, HttpTransport> {
    /// Attach a widget to `input_id`, sending requests to `endpoint`.
    ///
    /// A missing endpoint aborts initialization; a not-yet-present input or
    /// results element is retried with a short bounded backoff first.
    pub fn attach(
        input_id: &str,
        endpoint: &str,
        options: Options,
        dom: D,
    ) -> Result<Self, SuggestError> {
        if endpoint.trim().is_empty() {
            log::error!("data service URL to send queries to was not given");
            return Err(SuggestError::MissingEndpoint);
        }
        Self::attach_with_transport(input_id, options, dom, HttpTransport::new(endpoint))
    }
}

impl<D: DomAdapter, T: Transport> Suggest<D, T> {
    /// Attach a widget using an explicit transport (any [`Transport`]
    /// implementation; the endpoint is the transport's concern).
    pub fn attach_with_transport(
        input_id: &str,
        options: Options,
        mut dom: D,
        transport: T,
    ) -> Result<Self, SuggestError> {
        let Options {
            styling,
            behavior,
            core,
        } = options;

        // The page may still be loading; poll briefly for the elements
        let mut waited = Duration::ZERO;
        loop {
            if dom.input_exists(input_id)
                && dom.ensure_results_container(core.results_id.as_deref(), &styling.results_class)
            {
                break;
            }
            if waited >= INIT_WAIT_LIMIT {
                return Err(if dom.input_exists(input_id) {
                    let results_id = core.results_id.unwrap_or_default();
                    log::error!("results element \"{results_id}\" never appeared, giving up");
                    SuggestError::ResultsNotFound(results_id)
                } else {
                    log::error!("input element \"{input_id}\" never appeared, giving up");
                    SuggestError::InputNotFound(input_id.to_string())
                });
            }
            std::thread::sleep(INIT_WAIT_STEP);
            waited += INIT_WAIT_STEP;
        }

        if let Some(start_class) = &styling.start_class {
            dom.set_input_class(start_class);
        }

        // Empty key names fall back to the wire-protocol defaults
        let search_key = if behavior.suggestions_post_key.is_empty() {
            "find".to_string()
        } else {
            behavior.suggestions_post_key
        };
        let details_key = if behavior.details_post_key.is_empty() {
            "details".to_string()
        } else {
            behavior.details_post_key
        };

        Ok(Self {
            dom,
            transport,
            session: SuggestionSession::new(),
            debouncer: Debouncer::new(DEBOUNCE_DELAY),
            styling,
            input_reset: behavior.input_reset,
            search_key,
            details_key,
            formatter: core.formatter.unwrap_or_else(|| Box::new(BoldFormatter)),
            filter: core.valuefilter.unwrap_or_else(|| Box::new(DefaultValueFilter)),
            output: core
                .output
                .unwrap_or_else(|| Box::new(|payload| log::info!("details payload: {payload}"))),
        })
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn session(&self) -> &SuggestionSession {
        &self.session
    }

    /// Set the input's visual state via the configured class names.
    pub(crate) fn set_visual(&mut self, visual: Visual) {
        let class = match visual {
            Visual::Normal => self.styling.input_class.clone(),
            Visual::Error => self.styling.error_class.clone(),
        };
        self.dom.set_input_class(&class);
    }

    /// Reset the input visual, hide and empty the results box, and drop the
    /// remembered highlight position.
    pub(crate) fn clear_suggestions(&mut self) {
        self.set_visual(Visual::Normal);
        self.dom.hide_and_clear_results();
        self.session.nav.forget_last();
    }

    /// POST body for a request: `<search_key>=<urlencoded term>&type=<kind>`.
    pub(crate) fn build_request(&self, search: &str, kind: &str) -> String {
        format!(
            "{}={}&type={}",
            self.search_key,
            urlencoding::encode(search),
            kind
        )
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
