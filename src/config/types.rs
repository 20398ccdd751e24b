// Configuration type definitions

use serde::Deserialize;

use crate::filter::ValueFilter;
use crate::formatter::ResultFormatter;

/// Callback invoked with the parsed details payload after a commit.
pub type OutputFn = Box<dyn FnMut(serde_json::Value)>;

/// Class names applied to the widget's elements.
///
/// All classes default to the empty string; the widget still swaps them on
/// state changes so a host that styles by class gets the full behavior and a
/// host that doesn't loses nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    /// Class for the input box in its normal state
    pub input_class: String,
    /// Class for the results box
    pub results_class: String,
    /// Class for the input box when it holds text the filter rejects
    pub error_class: String,
    /// Class for each result line
    pub result_line_class: String,
    /// Class for the currently highlighted result line
    pub result_highlight_class: String,
    /// Class for the "no matches" message
    pub no_matches_class: String,
    /// Class applied to the input box at attach time, while it still shows
    /// its instruction text (cleared on first focus)
    pub start_class: Option<String>,
}

/// Behavioral switches and wire-protocol key names.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Clear the input's current text whenever it is clicked
    pub input_reset: bool,
    /// POST key name carrying the search term
    pub suggestions_post_key: String,
    /// POST `type` value for details requests
    pub details_post_key: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            input_reset: false,
            suggestions_post_key: "find".to_string(),
            details_post_key: "details".to_string(),
        }
    }
}

/// Pluggable seams: overrides for the formatter, the value filter, the
/// output callback, and an already-present results element.
#[derive(Default)]
pub struct CoreOptions {
    /// Id of an existing results element. When absent, a results container
    /// is created immediately after the input element.
    pub results_id: Option<String>,
    /// Result formatter override (default bolds the matched substring)
    pub formatter: Option<Box<dyn ResultFormatter>>,
    /// Output callback override (default logs the payload)
    pub output: Option<OutputFn>,
    /// Value filter override; use at your own peril
    pub valuefilter: Option<Box<dyn ValueFilter>>,
}

/// Widget configuration, captured immutably at attach time.
///
/// One `Options` per widget instance; nothing here is shared across widgets.
#[derive(Default)]
pub struct Options {
    pub styling: StylingConfig,
    pub behavior: BehaviorConfig,
    pub core: CoreOptions,
}
