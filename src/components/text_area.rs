//! Multi-line text input.

use crate::classes;
use crate::components::{
    CONTROL_DISABLED_CLASSES, CONTROL_ERROR_CLASSES, CONTROL_THEME_CLASSES, Component,
};
use crate::form::FormBuilder;
use crate::html::{Attrs, write_close_tag, write_escaped_html, write_open_tag};

const TEXT_AREA_CLASSES: &str = "block w-full appearance-none min-w-0 rounded-lg border-0 \
     py-1.5 text-base shadow-xs ring-1";

#[derive(Debug, Clone)]
pub struct TextArea<'a> {
    form: &'a FormBuilder,
    field: &'a str,
    class: Option<String>,
    attrs: Attrs,
}

impl<'a> TextArea<'a> {
    pub fn new(form: &'a FormBuilder, field: &'a str) -> Self {
        TextArea {
            form,
            field,
            class: None,
            attrs: Attrs::new(),
        }
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.attrs.set("rows", rows.to_string());
        self
    }

    pub fn cols(mut self, cols: u32) -> Self {
        self.attrs.set("cols", cols.to_string());
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.attrs.set("placeholder", text);
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

    fn html_class(&self) -> String {
        classes![
            TEXT_AREA_CLASSES,
            CONTROL_DISABLED_CLASSES,
            CONTROL_THEME_CLASSES,
            CONTROL_ERROR_CLASSES => self.form.has_errors(self.field),
            self.class.as_deref().unwrap_or("")
        ]
    }
}

impl Component for TextArea<'_> {
    fn render(&self) -> String {
        let mut attrs = Attrs::new();
        attrs.set("class", self.html_class());
        attrs.merge_from(&self.attrs);
        attrs.set("name", self.form.field_name(self.field));
        attrs.set("id", self.form.field_id(self.field));

        let mut out = String::new();
        write_open_tag("textarea", &attrs, &mut out);
        // Leading newline: browsers drop the first newline after the open
        // tag, so real content starting with one survives a round trip.
        out.push('\n');
        if let Some(value) = self.form.value_for(self.field) {
            write_escaped_html(value, &mut out);
        }
        write_close_tag("textarea", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormBuilder {
        FormBuilder::new("test_model")
    }

    #[test]
    fn renders_an_empty_text_area() {
        let form = form();
        let html = TextArea::new(&form, "description").render();
        assert!(html.starts_with("<textarea class=\"block w-full appearance-none min-w-0"));
        assert!(html.ends_with(
            "name=\"test_model[description]\" id=\"test_model_description\">\n</textarea>"
        ));
    }

    #[test]
    fn renders_the_bound_value_escaped() {
        let form = form().with_value("description", "a < b & c");
        let html = TextArea::new(&form, "description").render();
        assert!(html.contains(">\na &lt; b &amp; c</textarea>"));
    }

    #[test]
    fn rows_cols_and_placeholder() {
        let form = form();
        let html = TextArea::new(&form, "content")
            .placeholder("Enter your content here")
            .rows(10)
            .cols(50)
            .render();
        assert!(html.contains(r#"placeholder="Enter your content here" rows="10" cols="50""#));
    }

    #[test]
    fn error_state_swaps_the_color_bundle() {
        let form = form().with_error("description", "too short");
        let html = TextArea::new(&form, "description").render();
        assert!(html.contains("text-error"));
        assert!(!html.contains("text-primary "));
    }

    #[test]
    fn caller_classes_win() {
        let form = form();
        let html = TextArea::new(&form, "description").class("font-mono text-sm").render();
        assert!(html.contains("font-mono"));
        assert!(html.contains("text-sm"));
        assert!(!html.contains("text-base"));
    }
}
