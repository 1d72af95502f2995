//! Field label.

use crate::classes;
use crate::components::Component;
use crate::form::{FormBuilder, humanize};
use crate::html::{Attrs, write_close_tag, write_escaped_html, write_open_tag};

const LABEL_CLASSES: &str = "block text-primary text-sm font-medium leading-6 mb-2";

#[derive(Debug, Clone)]
pub struct Label<'a> {
    form: &'a FormBuilder,
    field: &'a str,
    text: Option<String>,
    class: Option<String>,
    attrs: Attrs,
}

impl<'a> Label<'a> {
    pub fn new(form: &'a FormBuilder, field: &'a str) -> Self {
        Label {
            form,
            field,
            text: None,
            class: None,
            attrs: Attrs::new(),
        }
    }

    /// Label text; defaults to the humanized field name.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
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
}

impl Component for Label<'_> {
    fn render(&self) -> String {
        let mut attrs = Attrs::new();
        attrs.set(
            "class",
            classes![LABEL_CLASSES, self.class.as_deref().unwrap_or("")],
        );
        attrs.set("for", self.form.field_id(self.field));
        attrs.merge_from(&self.attrs);

        let text = match &self.text {
            Some(text) => text.clone(),
            None => humanize(self.field),
        };

        let mut out = String::new();
        write_open_tag("label", &attrs, &mut out);
        write_escaped_html(&text, &mut out);
        write_close_tag("label", &mut out);
        out
    }
}
