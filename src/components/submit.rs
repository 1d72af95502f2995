//! Form submit control, rendered as `<input type="submit">`.

use crate::classes;
use crate::components::Component;
use crate::html::{Attrs, write_open_tag};
use crate::variants::{BUTTON_BASE_CLASSES, Size, Variant};

#[derive(Debug, Clone)]
pub struct Submit {
    value: Option<String>,
    variant: Variant,
    size: Size,
    disabled: bool,
    class: Option<String>,
    attrs: Attrs,
}

impl Submit {
    pub fn new() -> Self {
        Submit {
            value: None,
            variant: Variant::default(),
            size: Size::default(),
            disabled: false,
            class: None,
            attrs: Attrs::new(),
        }
    }

    /// Button text; the browser default is used when unset.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
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

impl Default for Submit {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Submit {
    fn render(&self) -> String {
        let mut attrs = Attrs::new();
        attrs.set("type", "submit");
        attrs.set("name", "commit");
        if let Some(value) = &self.value {
            attrs.set("value", value.clone());
        }
        attrs.set("class", self.html_class());
        if self.disabled {
            attrs.set_flag("disabled");
        }
        attrs.merge_from(&self.attrs);

        let mut out = String::new();
        write_open_tag("input", &attrs, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_primary_submit() {
        let html = Submit::new().value("Save Changes").render();
        assert!(html.starts_with(r#"<input type="submit" name="commit" value="Save Changes""#));
        assert!(html.contains("h-8 rounded-md px-3"));
        assert!(html.contains("bg-primary text-primary-foreground"));
        assert!(html.ends_with(">"));
    }

    #[test]
    fn value_is_optional() {
        let html = Submit::new().render();
        assert!(!html.contains("value="));
    }

    #[test]
    fn secondary_variant_swaps_the_color_bundle() {
        let html = Submit::new().variant(Variant::Secondary).render();
        assert!(html.contains("bg-secondary text-secondary-foreground"));
        assert!(!html.contains("bg-primary "));
    }

    #[test]
    fn caller_classes_append_last_and_win() {
        let html = Submit::new().class("custom-submit h-10").render();
        assert!(html.contains("custom-submit"));
        assert!(html.contains("h-10"));
        assert!(!html.contains("h-8"));
    }

    #[test]
    fn disabled_flag_and_extra_attributes() {
        let html = Submit::new()
            .disabled(true)
            .attr("id", "submit-button")
            .render();
        assert!(html.contains(" disabled"));
        assert!(html.contains(r#"id="submit-button""#));
    }
}
