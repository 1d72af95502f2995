//! Styled `<button>` element.

use crate::classes;
use crate::components::Component;
use crate::html::{Attrs, write_close_tag, write_escaped_html, write_open_tag};
use crate::variants::{BUTTON_BASE_CLASSES, Size, Variant};

#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    /// Raw HTML body; takes precedence over the escaped label.
    content: Option<String>,
    button_type: &'static str,
    variant: Variant,
    size: Size,
    disabled: bool,
    class: Option<String>,
    attrs: Attrs,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Button {
            label: label.into(),
            content: None,
            button_type: "button",
            variant: Variant::default(),
            size: Size::default(),
            disabled: false,
            class: None,
            attrs: Attrs::new(),
        }
    }

    /// Replace the label with a pre-rendered HTML body (icon + text, ...).
    /// The caller is responsible for escaping.
    pub fn content(mut self, html: impl Into<String>) -> Self {
        self.content = Some(html.into());
        self
    }

    pub fn submit_type(mut self) -> Self {
        self.button_type = "submit";
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Extra classes appended after the variant bundle; they win conflicts.
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
            BUTTON_BASE_CLASSES,
            self.size.classes(),
            self.variant.classes(),
            self.class.as_deref().unwrap_or("")
        ]
    }
}

impl Component for Button {
    fn render(&self) -> String {
        let mut attrs = Attrs::new();
        attrs.set("type", self.button_type);
        attrs.set("class", self.html_class());
        if self.disabled {
            attrs.set_flag("disabled");
        }
        attrs.merge_from(&self.attrs);

        let mut out = String::new();
        write_open_tag("button", &attrs, &mut out);
        match &self.content {
            Some(html) => out.push_str(html),
            None => write_escaped_html(&self.label, &mut out),
        }
        write_close_tag("button", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn renders_a_primary_button() {
        let html = Button::new("Save").render();
        expect![[r#"<button type="button" class="inline-flex items-center justify-center gap-2 whitespace-nowrap font-medium transition-all disabled:pointer-events-none disabled:opacity-50 outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] h-8 rounded-md px-3 text-sm bg-primary text-primary-foreground shadow-xs hover:bg-primary/90">Save</button>"#]]
            .assert_eq(&html);
    }

    #[test]
    fn destructive_variant_with_caller_override() {
        let html = Button::new("Delete")
            .variant(Variant::Destructive)
            .class("custom-button")
            .render();

        // base layout survives, override rides along at the end
        assert!(html.contains("h-8 rounded-md px-3"));
        assert!(html.contains("bg-destructive text-destructive-foreground"));
        assert!(html.contains("focus-visible:ring-destructive/20"));
        assert!(!html.contains("focus-visible:ring-ring/50"));
        assert!(html.ends_with(r#"custom-button">Delete</button>"#));
    }

    #[test]
    fn override_wins_class_conflicts() {
        let html = Button::new("Go").class("rounded-none px-8").render();
        assert!(html.contains("rounded-none"));
        assert!(!html.contains("rounded-md"));
        assert!(html.contains("px-8"));
        assert!(!html.contains("px-3"));
    }

    #[test]
    fn label_is_escaped_but_content_is_not() {
        let escaped = Button::new("a < b").render();
        assert!(escaped.contains("a &lt; b"));

        let raw = Button::new("")
            .content(r#"<span class="icon"></span>Go"#)
            .render();
        assert!(raw.contains(r#"<span class="icon"></span>Go"#));
    }

    #[test]
    fn sizes_change_the_layout_bundle() {
        let xs = Button::new("x").size(Size::Xs).render();
        assert!(xs.contains("h-6 rounded-sm px-2 text-xs"));

        let lg = Button::new("x").size(Size::Lg).render();
        assert!(lg.contains("h-10 rounded-md px-6 text-base"));
    }

    #[test]
    fn disabled_and_custom_attributes() {
        let html = Button::new("Save")
            .submit_type()
            .disabled(true)
            .attr("data-form", "user")
            .render();
        assert!(html.starts_with(r#"<button type="submit""#));
        assert!(html.contains(" disabled"));
        assert!(html.contains(r#"data-form="user""#));
    }
}
