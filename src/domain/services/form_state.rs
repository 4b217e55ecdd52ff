#[cfg(test)]
#[path = "form_state_test.rs"]
mod tests;

use super::history;
use super::Scroll;
use crate::domain::models::FormField;
use crate::domain::models::GeneratedSpecification;
use crate::domain::models::GenerationRequest;
use crate::domain::models::ResultMode;
use crate::domain::models::Template;

pub const SUCCESS_MESSAGE: &str = "Tasks generated successfully!";
pub const COPIED_MESSAGE: &str = "Copied to clipboard!";

/// Everything the form page shows. All mutation goes through the transition
/// methods below so the page logic can be driven without a terminal.
#[derive(Default)]
pub struct FormState {
    pub request: GenerationRequest,
    pub loading: bool,
    pub error: Option<String>,
    pub validation: Option<String>,
    pub result: String,
    pub editable_result: String,
    pub mode: ResultMode,
    pub success: Option<String>,
    pub notice: Option<String>,
    pub history: Vec<GeneratedSpecification>,
    pub show_history: bool,
    pub history_cursor: usize,
    pub focus: FormField,
    pub result_scroll: Scroll,
    pending: Option<(String, ResultMode)>,
}

impl FormState {
    pub fn new(history: Vec<GeneratedSpecification>) -> FormState {
        return FormState {
            history,
            ..FormState::default()
        };
    }

    pub fn has_result(&self) -> bool {
        return self.mode != ResultMode::Empty;
    }

    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Goal => self.request.goal = value.to_string(),
            FormField::Users => self.request.users = value.to_string(),
            FormField::Constraints => self.request.constraints = value.to_string(),
            FormField::Template => self.request.template = value.to_string(),
            FormField::Risks => self.request.risks = value.to_string(),
            FormField::Result => return,
        }
        self.validation = None;
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Goal => return &self.request.goal,
            FormField::Users => return &self.request.users,
            FormField::Constraints => return &self.request.constraints,
            FormField::Template => return &self.request.template,
            FormField::Risks => return &self.request.risks,
            FormField::Result => return &self.editable_result,
        }
    }

    pub fn cycle_template(&mut self, forward: bool) {
        let current = Template::parse(&self.request.template);
        let next = match (current, forward) {
            (Some(template), true) => template.next(),
            (Some(template), false) => template.prev(),
            (None, _) => Template::default(),
        };

        self.request.template = next.to_string();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.has_result());
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(self.has_result());
    }

    /// Validates the form and, when it can be sent, moves into the loading
    /// state and returns the request to submit.
    pub fn begin_submit(&mut self) -> Option<GenerationRequest> {
        if self.loading {
            return None;
        }

        if self.request.goal.trim().is_empty() {
            self.validation = Some("Feature goal is required".to_string());
            self.focus = FormField::Goal;
            return None;
        }

        if self.request.users.trim().is_empty() {
            self.validation = Some("Target users are required".to_string());
            self.focus = FormField::Users;
            return None;
        }

        self.pending = Some((self.result.to_string(), self.mode));
        self.validation = None;
        self.loading = true;
        self.error = None;
        self.success = None;
        self.result = "".to_string();

        return Some(self.request.clone());
    }

    pub fn submit_succeeded(&mut self, entry: GeneratedSpecification) {
        self.pending = None;
        self.loading = false;
        self.result = entry.result.to_string();
        self.editable_result = entry.result.to_string();
        self.mode = ResultMode::Previewing;
        self.success = Some(SUCCESS_MESSAGE.to_string());
        self.history = history::record(&self.history, entry);
    }

    pub fn submit_failed(&mut self, message: &str) {
        if let Some((result, mode)) = self.pending.take() {
            self.result = result;
            self.mode = mode;
        }

        self.loading = false;
        self.error = Some(message.to_string());
    }

    /// Moves focus to the result region and scrolls it to its start.
    pub fn reveal_result(&mut self) {
        if !self.has_result() {
            return;
        }

        self.focus = FormField::Result;
        self.result_scroll.top();
    }

    pub fn expire_success(&mut self) {
        self.success = None;
    }

    /// Reports a failed side action such as copy or download. Unlike a failed
    /// submit this never touches the loading flag.
    pub fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
        self.validation = None;
    }

    pub fn toggle_edit(&mut self) {
        match self.mode {
            ResultMode::Empty => (),
            ResultMode::Previewing => {
                self.mode = ResultMode::Editing;
                self.focus = FormField::Result;
            }
            ResultMode::Editing => self.mode = ResultMode::Previewing,
        }
    }

    pub fn edit_result(&mut self, text: &str) {
        if self.mode != ResultMode::Editing {
            return;
        }

        self.editable_result = text.to_string();
    }

    pub fn clear(&mut self) {
        self.pending = None;
        self.request = GenerationRequest::default();
        self.result = "".to_string();
        self.editable_result = "".to_string();
        self.error = None;
        self.validation = None;
        self.mode = ResultMode::Empty;
        self.focus = FormField::Goal;
        self.result_scroll.top();
    }

    pub fn open_history(&mut self) {
        self.show_history = true;
        self.history_cursor = 0;
    }

    pub fn close_history(&mut self) {
        self.show_history = false;
    }

    pub fn history_up(&mut self) {
        self.history_cursor = self.history_cursor.saturating_sub(1);
    }

    pub fn history_down(&mut self) {
        if self.history_cursor + 1 < self.history.len() {
            self.history_cursor += 1;
        }
    }

    /// Copies a history entry back into the form. Returns false when the
    /// index does not exist.
    pub fn load_entry(&mut self, idx: usize) -> bool {
        let entry = match self.history.get(idx) {
            Some(entry) => entry.clone(),
            None => return false,
        };

        self.pending = None;
        self.request = entry.request();
        self.result = entry.result.to_string();
        self.editable_result = entry.result;
        self.mode = ResultMode::Previewing;
        self.validation = None;
        self.show_history = false;
        self.focus = FormField::Result;
        self.result_scroll.top();

        return true;
    }

    pub fn show_notice(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }

    pub fn acknowledge_notice(&mut self) {
        self.notice = None;
    }
}
