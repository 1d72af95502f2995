//! Radio button input.

use crate::classes;
use crate::components::Component;
use crate::form::FormBuilder;
use crate::html::{Attrs, write_close_tag, write_escaped_html, write_open_tag};

const RADIO_BUTTON_CLASSES: &str = "h-4 w-4 rounded-full border-neutral-300 text-blue-500 \
     focus:ring-blue-700 hover:border-neutral-700";

#[derive(Debug, Clone)]
pub struct RadioButton<'a> {
    form: &'a FormBuilder,
    field: &'a str,
    value: String,
    checked: Option<bool>,
    class: Option<String>,
    attrs: Attrs,
}

impl<'a> RadioButton<'a> {
    pub fn new(form: &'a FormBuilder, field: &'a str, value: impl Into<String>) -> Self {
        RadioButton {
            form,
            field,
            value: value.into(),
            checked: None,
            class: None,
            attrs: Attrs::new(),
        }
    }

    /// Force the checked state; defaults to comparing the bound value.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Render one labeled radio per (value, label) pair, bound to the same
    /// field, the way collection radio groups do.
    pub fn collection(
        form: &'a FormBuilder,
        field: &'a str,
        pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> String {
        let mut out = String::new();
        for (value, label) in pairs {
            let value = value.into();
            let label = label.into();
            let radio = RadioButton::new(form, field, value.clone()).render();
            out.push_str(&radio);

            let mut label_attrs = Attrs::new();
            label_attrs.set("for", radio_id(form, field, &value));
            write_open_tag("label", &label_attrs, &mut out);
            write_escaped_html(&label, &mut out);
            write_close_tag("label", &mut out);
        }
        out
    }

    fn is_checked(&self) -> bool {
        match self.checked {
            Some(checked) => checked,
            None => self.form.value_for(self.field) == Some(self.value.as_str()),
        }
    }
}

/// DOM id for one radio in a group: `object_field_value`, with the value
/// lowercased and non-alphanumerics folded to underscores.
fn radio_id(form: &FormBuilder, field: &str, value: &str) -> String {
    let sanitized: String = value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_{}", form.field_id(field), sanitized)
}

impl Component for RadioButton<'_> {
    fn render(&self) -> String {
        let mut attrs = Attrs::new();
        attrs.set(
            "class",
            classes![RADIO_BUTTON_CLASSES, self.class.as_deref().unwrap_or("")],
        );
        attrs.merge_from(&self.attrs);
        attrs.set("type", "radio");
        attrs.set("value", self.value.clone());
        if self.is_checked() {
            attrs.set_flag("checked");
        }
        attrs.set("name", self.form.field_name(self.field));
        attrs.set("id", radio_id(self.form, self.field, &self.value));

        let mut out = String::new();
        write_open_tag("input", &attrs, &mut out);
        out
    }
}
