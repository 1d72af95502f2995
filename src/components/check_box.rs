//! Checkbox input with the hidden unchecked-value companion.

use crate::classes;
use crate::components::Component;
use crate::form::FormBuilder;
use crate::html::{Attrs, write_open_tag};

const CHECK_BOX_CLASSES: &str = "h-4 w-4 rounded-sm border-neutral-300 text-blue-500 \
     focus:ring-blue-700 hover:border-neutral-700";

#[derive(Debug, Clone)]
pub struct CheckBox<'a> {
    form: &'a FormBuilder,
    field: &'a str,
    checked_value: String,
    unchecked_value: String,
    checked: Option<bool>,
    include_hidden: bool,
    class: Option<String>,
    attrs: Attrs,
}

impl<'a> CheckBox<'a> {
    pub fn new(form: &'a FormBuilder, field: &'a str) -> Self {
        CheckBox {
            form,
            field,
            checked_value: "1".to_string(),
            unchecked_value: "0".to_string(),
            checked: None,
            include_hidden: true,
            class: None,
            attrs: Attrs::new(),
        }
    }

    pub fn values(
        mut self,
        checked_value: impl Into<String>,
        unchecked_value: impl Into<String>,
    ) -> Self {
        self.checked_value = checked_value.into();
        self.unchecked_value = unchecked_value.into();
        self
    }

    /// Force the checked state; defaults to comparing the bound value
    /// against the checked value.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Skip the hidden input that submits the unchecked value.
    pub fn without_hidden(mut self) -> Self {
        self.include_hidden = false;
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

    fn is_checked(&self) -> bool {
        match self.checked {
            Some(checked) => checked,
            None => self.form.value_for(self.field) == Some(self.checked_value.as_str()),
        }
    }
}

impl Component for CheckBox<'_> {
    fn render(&self) -> String {
        let mut out = String::new();

        // An unchecked checkbox submits nothing; the hidden input keeps the
        // parameter present with the unchecked value.
        if self.include_hidden {
            let mut hidden = Attrs::new();
            hidden.set("name", self.form.field_name(self.field));
            hidden.set("type", "hidden");
            hidden.set("value", self.unchecked_value.clone());
            hidden.set("autocomplete", "off");
            write_open_tag("input", &hidden, &mut out);
        }

        let mut attrs = Attrs::new();
        attrs.set(
            "class",
            classes![CHECK_BOX_CLASSES, self.class.as_deref().unwrap_or("")],
        );
        attrs.merge_from(&self.attrs);
        attrs.set("type", "checkbox");
        attrs.set("value", self.checked_value.clone());
        if self.is_checked() {
            attrs.set_flag("checked");
        }
        attrs.set("name", self.form.field_name(self.field));
        attrs.set("id", self.form.field_id(self.field));
        write_open_tag("input", &attrs, &mut out);

        out
    }
}
