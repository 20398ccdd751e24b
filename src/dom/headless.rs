//! In-memory DOM adapter
//!
//! The one bundled [`DomAdapter`] implementation: a headless document with a
//! single input element and a results container. The tests and the demo
//! driver run against it; real platform bindings live outside the core.

use super::adapter::{DomAdapter, ResultLine};

/// One rendered line inside the headless results container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub id: String,
    pub html: String,
    pub class: String,
}

#[derive(Debug, Clone, Default)]
struct Container {
    id: String,
    class: String,
    visible: bool,
    lines: Vec<RenderedLine>,
    no_matches: Option<String>,
    no_matches_class: String,
}

/// Headless document holding one input element and its results container.
#[derive(Debug, Clone)]
pub struct HeadlessDom {
    input_id: String,
    input_present: bool,
    input_value: String,
    input_class: String,
    /// Id of a results element the host created ahead of time, if any
    existing_container_id: Option<String>,
    container: Option<Container>,
}

impl HeadlessDom {
    /// Document with the input element already present.
    pub fn new(input_id: impl Into<String>) -> Self {
        Self {
            input_id: input_id.into(),
            input_present: true,
            input_value: String::new(),
            input_class: String::new(),
            existing_container_id: None,
            container: None,
        }
    }

    /// Document where the input element has not appeared yet; attach will
    /// poll for it and give up after its bounded backoff.
    pub fn without_input(input_id: impl Into<String>) -> Self {
        let mut dom = Self::new(input_id);
        dom.input_present = false;
        dom
    }

    /// Pre-register a host-created results element under `id`.
    pub fn with_existing_container(input_id: impl Into<String>, id: impl Into<String>) -> Self {
        let mut dom = Self::new(input_id);
        dom.existing_container_id = Some(id.into());
        dom
    }

    pub fn input_class(&self) -> &str {
        &self.input_class
    }

    pub fn results_visible(&self) -> bool {
        self.container.as_ref().is_some_and(|c| c.visible)
    }

    pub fn results_container_id(&self) -> Option<&str> {
        self.container.as_ref().map(|c| c.id.as_str())
    }

    pub fn rendered_lines(&self) -> &[RenderedLine] {
        self.container.as_ref().map_or(&[], |c| c.lines.as_slice())
    }

    pub fn no_matches_message(&self) -> Option<&str> {
        self.container
            .as_ref()
            .and_then(|c| c.no_matches.as_deref())
    }

    pub fn no_matches_class(&self) -> Option<&str> {
        self.container
            .as_ref()
            .map(|c| c.no_matches_class.as_str())
    }

    pub fn results_class(&self) -> Option<&str> {
        self.container.as_ref().map(|c| c.class.as_str())
    }

    fn container_mut(&mut self) -> Option<&mut Container> {
        self.container.as_mut()
    }
}

impl DomAdapter for HeadlessDom {
    fn input_exists(&self, input_id: &str) -> bool {
        self.input_present && self.input_id == input_id
    }

    fn input_value(&self) -> String {
        self.input_value.clone()
    }

    fn set_input_value(&mut self, text: &str) {
        self.input_value = text.to_string();
    }

    fn set_input_class(&mut self, class: &str) {
        self.input_class = class.to_string();
    }

    fn ensure_results_container(&mut self, results_id: Option<&str>, class: &str) -> bool {
        let id = match results_id {
            Some(wanted) => {
                // Only a host-created element can be adopted by id
                if self.existing_container_id.as_deref() != Some(wanted) {
                    return false;
                }
                wanted.to_string()
            }
            None => "suggest_results".to_string(),
        };

        match &mut self.container {
            Some(container) => container.visible = false,
            None => {
                self.container = Some(Container {
                    id,
                    class: class.to_string(),
                    visible: false,
                    lines: Vec::new(),
                    no_matches: None,
                    no_matches_class: String::new(),
                });
            }
        }
        true
    }

    fn render_lines(&mut self, lines: &[ResultLine], line_class: &str) {
        if let Some(container) = self.container_mut() {
            container.no_matches = None;
            container.lines = lines
                .iter()
                .map(|line| RenderedLine {
                    id: line.id.clone(),
                    html: line.display.clone(),
                    class: line_class.to_string(),
                })
                .collect();
        }
    }

    fn render_no_matches(&mut self, message: &str, class: &str) {
        if let Some(container) = self.container_mut() {
            container.lines.clear();
            container.no_matches = Some(message.to_string());
            container.no_matches_class = class.to_string();
        }
    }

    fn set_line_class(&mut self, index: usize, class: &str) {
        if let Some(line) = self
            .container_mut()
            .and_then(|c| c.lines.get_mut(index))
        {
            line.class = class.to_string();
        }
    }

    fn line_text(&self, index: usize) -> Option<String> {
        self.container
            .as_ref()
            .and_then(|c| c.lines.get(index))
            .map(|line| line.html.clone())
    }

    fn show_results(&mut self) {
        if let Some(container) = self.container_mut() {
            container.visible = true;
        }
    }

    fn hide_and_clear_results(&mut self) {
        if let Some(container) = self.container_mut() {
            container.visible = false;
            container.lines.clear();
            container.no_matches = None;
        }
    }
}

#[cfg(test)]
#[path = "headless_tests.rs"]
mod headless_tests;
