//! Live state of one widget instance

use crate::navigation::NavState;
use crate::transport::RequestId;

/// Per-widget session state.
///
/// Owned exclusively by the controller, mutated only through controller
/// methods. Created at attach time, destroyed with the widget; nothing here
/// is shared across widget instances.
#[derive(Debug, Clone, Default)]
pub struct SuggestionSession {
    /// Last search term that was accepted (sent out or committed)
    pub last_search: String,
    /// Latest issued lookup request id; a lookup reply carrying any other
    /// id is stale and dropped
    pub lookup_id: Option<RequestId>,
    /// Latest issued details request id
    pub details_id: Option<RequestId>,
    /// Navigation state over the current result set
    pub nav: NavState,
    /// Whether the one-shot first-focus handler has already run
    pub focused_once: bool,
}

impl SuggestionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element id of the currently remembered result, if any.
    pub fn selected_result_id(&self) -> Option<String> {
        self.nav.last_index.map(|index| format!("result_{index}"))
    }
}
