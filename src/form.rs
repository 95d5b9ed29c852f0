//! Contact form state and the submission pipeline
//!
//! The form itself is plain editable state. Submission is pure data-in,
//! data-out: [`process_form_data`] trims, validates, and stamps the input,
//! and the caller decides what to do with the result. The simulated
//! delivery delay lives in the app's step schedule, not here.

use chrono::{DateTime, Utc};

use crate::content;

/// Editable fields, in tab order. The send button is a view concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    ProjectType,
    Message,
}

impl FieldId {
    pub const COUNT: usize = 4;

    pub fn all() -> [FieldId; Self::COUNT] {
        [FieldId::Name, FieldId::Email, FieldId::ProjectType, FieldId::Message]
    }

    pub fn index(&self) -> usize {
        match self {
            FieldId::Name => 0,
            FieldId::Email => 1,
            FieldId::ProjectType => 2,
            FieldId::Message => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::ProjectType => "Project Type",
            FieldId::Message => "Message",
        }
    }

    pub fn is_text(&self) -> bool {
        !matches!(self, FieldId::ProjectType)
    }
}

/// Submit button lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// Simulated delivery in flight
    Loading,
    /// Shown briefly after delivery, then back to Idle
    Success,
}

/// The contact form's editable state
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Index into [`content::project_types`], None until picked
    pub project_type: Option<usize>,
    pub focused: Option<FieldId>,
    /// Byte offset into the focused text field, always on a char boundary
    pub cursor: usize,
    pub submit: SubmitState,
    pub loading_overlay: bool,
    /// Per-field flash during the reset animation
    pub flashes: [bool; FieldId::COUNT],
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
            FieldId::ProjectType => "",
        }
    }

    fn value_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Name => Some(&mut self.name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Message => Some(&mut self.message),
            FieldId::ProjectType => None,
        }
    }

    /// A field's label floats up while it is focused or holds text
    pub fn label_raised(&self, field: FieldId) -> bool {
        if self.focused == Some(field) {
            return true;
        }
        match field {
            FieldId::ProjectType => self.project_type.is_some(),
            _ => !self.value(field).is_empty(),
        }
    }

    pub fn focus(&mut self, field: FieldId) {
        self.focused = Some(field);
        self.cursor = self.value(field).len();
    }

    pub fn blur(&mut self) {
        self.focused = None;
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, ch: char) {
        let Some(field) = self.focused else { return };
        let cursor = self.cursor;
        if let Some(value) = self.value_mut(field) {
            value.insert(cursor, ch);
            self.cursor = cursor + ch.len_utf8();
        }
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.focused else { return };
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        if let Some(value) = self.value_mut(field) {
            let prev = value[..cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            value.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn cursor_left(&mut self) {
        let Some(field) = self.focused else { return };
        if !field.is_text() {
            return;
        }
        self.cursor = self.value(field)[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    pub fn cursor_right(&mut self) {
        let Some(field) = self.focused else { return };
        if !field.is_text() {
            return;
        }
        let value = self.value(field);
        if self.cursor < value.len() {
            let step = value[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += step;
        }
    }

    /// Cycle the project type selector by `delta` (+1 or -1), wrapping
    pub fn cycle_project_type(&mut self, delta: i32) {
        let count = content::project_types().len() as i32;
        let current = self.project_type.map(|i| i as i32).unwrap_or(-1);
        let next = (current + delta).rem_euclid(count);
        self.project_type = Some(next as usize);
    }

    /// The selected project type's value, if one is picked
    pub fn project_type_value(&self) -> Option<&'static str> {
        self.project_type
            .and_then(|i| content::project_types().get(i))
            .map(|(value, _)| *value)
    }

    /// Reset every field, as the end of the reset animation does
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.project_type = None;
        self.cursor = 0;
    }

    /// Run the current values through the submission pipeline
    pub fn submission(&self) -> FormSubmission {
        process_form_data(&self.name, &self.email, &self.message, self.project_type_value())
    }
}

/// A processed submission: trimmed values, validation outcome, timestamp
#[derive(Debug, Clone)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub errors: Vec<&'static str>,
}

impl FormSubmission {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_summary(&self) -> String {
        self.errors.join(", ")
    }

    pub fn success_message(&self) -> String {
        format!(
            "Thank you {}! Your {} inquiry has been received.",
            self.name, self.project_type
        )
    }
}

/// Trim and validate raw form input. Name, email, and message are each
/// required; a missing project type falls back to "general". Validation
/// never rejects a submission here, it only records the errors.
pub fn process_form_data(
    name: &str,
    email: &str,
    message: &str,
    project_type: Option<&str>,
) -> FormSubmission {
    let name = name.trim().to_string();
    let email = email.trim().to_string();
    let message = message.trim().to_string();
    let project_type = match project_type {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => "general".to_string(),
    };

    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push("Name is required");
    }
    if email.is_empty() {
        errors.push("Email is required");
    }
    if message.is_empty() {
        errors.push("Message is required");
    }

    FormSubmission {
        name,
        email,
        project_type,
        message,
        timestamp: Utc::now(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_submission_collects_all_errors() {
        let s = process_form_data("", "", "", None);
        assert!(!s.is_valid());
        assert_eq!(
            s.errors,
            vec!["Name is required", "Email is required", "Message is required"]
        );
        assert_eq!(
            s.error_summary(),
            "Name is required, Email is required, Message is required"
        );
    }

    #[test]
    fn test_whitespace_only_fields_are_empty() {
        let s = process_form_data("   ", "\t", "  \n ", None);
        assert_eq!(s.errors.len(), 3);
    }

    #[test]
    fn test_valid_submission_trims_values() {
        let s = process_form_data(
            "  Jane Doe  ",
            " jane@example.com ",
            " Hello there ",
            Some("analysis"),
        );
        assert!(s.is_valid());
        assert_eq!(s.name, "Jane Doe");
        assert_eq!(s.email, "jane@example.com");
        assert_eq!(s.message, "Hello there");
        assert_eq!(s.project_type, "analysis");
    }

    #[test]
    fn test_project_type_defaults_to_general() {
        let s = process_form_data("a", "b", "c", None);
        assert_eq!(s.project_type, "general");
        let s = process_form_data("a", "b", "c", Some(""));
        assert_eq!(s.project_type, "general");
    }

    #[test]
    fn test_partial_errors() {
        let s = process_form_data("Jane", "", "hi", None);
        assert_eq!(s.errors, vec!["Email is required"]);
    }

    #[test]
    fn test_success_message_format() {
        let s = process_form_data("Jane", "jane@example.com", "hi", Some("dashboard"));
        assert_eq!(
            s.success_message(),
            "Thank you Jane! Your dashboard inquiry has been received."
        );
    }

    #[test]
    fn test_editing_multibyte_safe() {
        let mut form = ContactForm::new();
        form.focus(FieldId::Name);
        for ch in "héllo".chars() {
            form.insert_char(ch);
        }
        assert_eq!(form.name, "héllo");
        form.backspace();
        form.backspace();
        assert_eq!(form.name, "hél");
        form.cursor_left();
        form.cursor_left();
        form.insert_char('x');
        assert_eq!(form.name, "hxél");
    }

    #[test]
    fn test_focus_moves_cursor_to_end() {
        let mut form = ContactForm::new();
        form.focus(FieldId::Email);
        for ch in "abc".chars() {
            form.insert_char(ch);
        }
        form.focus(FieldId::Name);
        assert_eq!(form.cursor, 0);
        form.focus(FieldId::Email);
        assert_eq!(form.cursor, 3);
    }

    #[test]
    fn test_label_raised_on_focus_or_content() {
        let mut form = ContactForm::new();
        assert!(!form.label_raised(FieldId::Name));
        form.focus(FieldId::Name);
        assert!(form.label_raised(FieldId::Name));
        form.insert_char('a');
        form.blur();
        // Keeps its raised label because it holds text
        assert!(form.label_raised(FieldId::Name));
        assert!(!form.label_raised(FieldId::Email));
        // Selector counts as filled once picked
        assert!(!form.label_raised(FieldId::ProjectType));
        form.cycle_project_type(1);
        assert!(form.label_raised(FieldId::ProjectType));
    }

    #[test]
    fn test_project_type_cycling_wraps() {
        let mut form = ContactForm::new();
        let count = crate::content::project_types().len();
        form.cycle_project_type(1);
        assert_eq!(form.project_type, Some(0));
        form.cycle_project_type(-1);
        assert_eq!(form.project_type, Some(count - 1));
        form.cycle_project_type(1);
        assert_eq!(form.project_type, Some(0));
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut form = ContactForm::new();
        form.focus(FieldId::Name);
        form.insert_char('a');
        form.cycle_project_type(1);
        form.clear();
        assert!(form.name.is_empty());
        assert_eq!(form.project_type, None);
        assert_eq!(form.cursor, 0);
    }
}
