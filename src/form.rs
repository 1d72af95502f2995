//! Form-binding handle passed to form-bound components.
//!
//! The host application owns the real form state (model values, validation
//! errors); components only need a narrow view of it: the object name for
//! input naming, current field values, and per-field error messages.
//! [`FormBuilder`] is that view, as a plain data struct filled in by the
//! host before rendering.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    object_name: String,
    values: HashMap<String, String>,
    errors: HashMap<String, Vec<String>>,
}

impl FormBuilder {
    pub fn new(object_name: impl Into<String>) -> Self {
        FormBuilder {
            object_name: object_name.into(),
            values: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn with_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn value_for(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn errors_on(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_errors(&self, field: &str) -> bool {
        !self.errors_on(field).is_empty()
    }

    /// Input name: `object[field]`.
    pub fn field_name(&self, field: &str) -> String {
        format!("{}[{}]", self.object_name, field)
    }

    /// DOM id: `object_field`.
    pub fn field_id(&self, field: &str) -> String {
        format!("{}_{}", self.object_name, field)
    }

    /// Multi-part picker input name: `object[field(1i)]` for the year part,
    /// `(2i)` month, `(3i)` day, `(4i)` hour, `(5i)` minute, `(6i)` second.
    pub fn multiparam_name(&self, field: &str, part: u8) -> String {
        format!("{}[{}({}i)]", self.object_name, field, part)
    }

    /// Multi-part picker DOM id: `object_field_1i`.
    pub fn multiparam_id(&self, field: &str, part: u8) -> String {
        format!("{}_{}_{}i", self.object_name, field, part)
    }
}

/// Turn a field name into label text: `"first_name"` becomes `"First name"`.
pub fn humanize(field: &str) -> String {
    let text = field.replace('_', " ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_names_and_ids() {
        let form = FormBuilder::new("test_model");
        assert_eq!(form.field_name("name"), "test_model[name]");
        assert_eq!(form.field_id("name"), "test_model_name");
        assert_eq!(form.multiparam_name("birthdate", 1), "test_model[birthdate(1i)]");
        assert_eq!(form.multiparam_id("birthdate", 3), "test_model_birthdate_3i");
    }

    #[test]
    fn tracks_values_and_errors() {
        let form = FormBuilder::new("user")
            .with_value("email", "a@example.com")
            .with_error("email", "is invalid")
            .with_error("email", "is taken");

        assert_eq!(form.value_for("email"), Some("a@example.com"));
        assert_eq!(form.value_for("name"), None);
        assert_eq!(form.errors_on("email"), &["is invalid", "is taken"][..]);
        assert!(form.has_errors("email"));
        assert!(!form.has_errors("name"));
    }

    #[test]
    fn humanizes_field_names() {
        assert_eq!(humanize("name"), "Name");
        assert_eq!(humanize("first_name"), "First name");
        assert_eq!(humanize(""), "");
    }
}
