//! DOM adapter seam
//!
//! Everything the controller needs from the document, and nothing more:
//! probe for the input element, read and write its value and class, manage
//! the results container, and swap per-line classes for highlighting. The
//! host platform wires its own pointer/keyboard events to the controller's
//! `handle_*` entry points.

/// A rendered candidate line.
///
/// Built fresh on every successful lookup response; the whole set is
/// discarded and rebuilt per search, never patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    /// Candidate exactly as the data service returned it
    pub raw: String,
    /// Display fragment produced by the formatter (may contain markup)
    pub display: String,
    /// Stable element id, `"result_<index>"`
    pub id: String,
    /// Position within the current result set
    pub index: usize,
}

impl ResultLine {
    pub fn new(raw: String, display: String, index: usize) -> Self {
        Self {
            raw,
            display,
            id: format!("result_{index}"),
            index,
        }
    }
}

/// Element creation/lookup, class and value mutation.
///
/// One adapter instance per widget, bound to one input element.
pub trait DomAdapter {
    /// Whether the input element is present in the document yet. Attach
    /// polls this with a bounded backoff before giving up.
    fn input_exists(&self, input_id: &str) -> bool;

    /// Current text of the input element
    fn input_value(&self) -> String;

    /// Replace the text of the input element
    fn set_input_value(&mut self, text: &str);

    /// Replace the class of the input element
    fn set_input_class(&mut self, class: &str);

    /// Adopt the element named by `results_id`, or create a container
    /// immediately after the input when `results_id` is `None`. The
    /// container starts hidden either way. Returns false when a named
    /// element cannot be found.
    fn ensure_results_container(&mut self, results_id: Option<&str>, class: &str) -> bool;

    /// Replace the container's content with the given result lines
    fn render_lines(&mut self, lines: &[ResultLine], line_class: &str);

    /// Replace the container's content with a "no matches" message
    fn render_no_matches(&mut self, message: &str, class: &str);

    /// Swap the class on one rendered line (highlight on/off)
    fn set_line_class(&mut self, index: usize, class: &str);

    /// Read back the display text of one rendered line
    fn line_text(&self, index: usize) -> Option<String>;

    /// Make the results container visible
    fn show_results(&mut self);

    /// Hide the results container and drop its content
    fn hide_and_clear_results(&mut self);
}
