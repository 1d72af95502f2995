//! The shared input-field renderer behind every `<input>`-based component.
//!
//! A field renders a positioned container, optional left/right decorations
//! and the input element itself. Decorations come in three mutually
//! exclusive modes per side:
//!
//! - plain content: absolutely positioned inside the field (icons, short
//!   text); the input gains `pl-10`/`pr-10` to clear it;
//! - addon: a bordered segment flush against the input edge; the input
//!   loses its shadow and the adjoining corner radii;
//! - interaction: a focusable control (e.g. an embedded button) with the
//!   same flush geometry as an addon.
//!
//! A field whose binding carries errors swaps its text/ring/placeholder
//! colors for the error bundle and shows a warning badge in the right slot
//! unless the caller already put something there.

use crate::classes;
use crate::components::{
    CONTROL_DISABLED_CLASSES, CONTROL_ERROR_CLASSES, CONTROL_THEME_CLASSES, Component,
};
use crate::form::FormBuilder;
use crate::html::{Attrs, write_close_tag, write_open_tag};
use crate::icons::{BuiltinIcons, IconRenderer, IconVariant};

const FIELD_BASE_CLASSES: &str = "block w-full appearance-none h-9 min-w-0 z-10 flex-1 \
     rounded-lg border-0 py-1 text-base shadow-xs ring-1";

const LEFT_CONTENT_CLASSES: &str =
    "pointer-events-none absolute inset-y-0 left-0 flex items-center pl-3";
const RIGHT_CONTENT_CLASSES: &str =
    "pointer-events-none absolute inset-y-0 right-0 flex items-center pr-3";

const ADDON_CLASSES: &str = "flex items-center border-0 ring-1 ring-ring/10 dark:ring-white/10 \
     bg-muted px-3 text-sm text-muted-foreground";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Search,
    Telephone,
    Url,
    Number,
    Date,
    Time,
    DatetimeLocal,
    Month,
    Week,
    Color,
    Range,
    Hidden,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Search => "search",
            InputType::Telephone => "tel",
            InputType::Url => "url",
            InputType::Number => "number",
            InputType::Date => "date",
            InputType::Time => "time",
            InputType::DatetimeLocal => "datetime-local",
            InputType::Month => "month",
            InputType::Week => "week",
            InputType::Color => "color",
            InputType::Range => "range",
            InputType::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionMode {
    #[default]
    Content,
    Addon,
    Interaction,
}

impl SectionMode {
    /// Addons and interactions sit flush against the input edge and change
    /// its geometry; plain content floats above it.
    fn is_flush(self) -> bool {
        matches!(self, SectionMode::Addon | SectionMode::Interaction)
    }
}

#[derive(Debug, Clone)]
struct Section {
    html: String,
    mode: SectionMode,
}

#[derive(Debug, Clone)]
pub struct Field<'a> {
    form: &'a FormBuilder,
    field: &'a str,
    input_type: InputType,
    left: Option<Section>,
    right: Option<Section>,
    container_class: Option<String>,
    class: Option<String>,
    attrs: Attrs,
}

impl<'a> Field<'a> {
    pub fn new(form: &'a FormBuilder, field: &'a str, input_type: InputType) -> Self {
        Field {
            form,
            field,
            input_type,
            left: None,
            right: None,
            container_class: None,
            class: None,
            attrs: Attrs::new(),
        }
    }

    pub fn text(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Text)
    }

    pub fn email(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Email)
    }

    pub fn password(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Password)
    }

    pub fn search(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Search)
    }

    pub fn telephone(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Telephone)
    }

    pub fn url(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Url)
    }

    pub fn number(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Number)
    }

    pub fn date(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Date)
    }

    pub fn time(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Time)
    }

    pub fn datetime_local(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::DatetimeLocal)
    }

    pub fn month(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Month)
    }

    pub fn week(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Week)
    }

    pub fn color(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Color)
    }

    pub fn range(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Range)
    }

    pub fn hidden(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(form, field, InputType::Hidden)
    }

    /// Plain content floating in the left slot. Caller-rendered HTML.
    pub fn left_section(mut self, html: impl Into<String>) -> Self {
        self.left = Some(Section {
            html: html.into(),
            mode: SectionMode::Content,
        });
        self
    }

    /// Bordered addon segment flush against the left edge.
    pub fn left_addon(mut self, html: impl Into<String>) -> Self {
        self.left = Some(Section {
            html: html.into(),
            mode: SectionMode::Addon,
        });
        self
    }

    /// Focusable control flush against the left edge.
    pub fn left_interaction(mut self, html: impl Into<String>) -> Self {
        self.left = Some(Section {
            html: html.into(),
            mode: SectionMode::Interaction,
        });
        self
    }

    pub fn right_section(mut self, html: impl Into<String>) -> Self {
        self.right = Some(Section {
            html: html.into(),
            mode: SectionMode::Content,
        });
        self
    }

    pub fn right_addon(mut self, html: impl Into<String>) -> Self {
        self.right = Some(Section {
            html: html.into(),
            mode: SectionMode::Addon,
        });
        self
    }

    pub fn right_interaction(mut self, html: impl Into<String>) -> Self {
        self.right = Some(Section {
            html: html.into(),
            mode: SectionMode::Interaction,
        });
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.attrs.set("placeholder", text);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        if disabled {
            self.attrs.set_flag("disabled");
        } else {
            let _ = self.attrs.remove("disabled");
        }
        self
    }

    /// Extra classes for the input element, appended last.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Extra classes for the container element, appended last.
    pub fn container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = Some(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    fn has_errors(&self) -> bool {
        self.form.has_errors(self.field)
    }

    /// The right decoration actually rendered: the caller's, or the error
    /// badge when the binding has errors on this field.
    fn effective_right(&self) -> Option<Section> {
        if let Some(section) = &self.right {
            return Some(section.clone());
        }
        if !self.has_errors() {
            return None;
        }
        let mut icon_attrs = Attrs::new();
        icon_attrs.set("class", "size-5 text-destructive");
        let badge = BuiltinIcons
            .render("exclamation-circle", IconVariant::Mini, &icon_attrs)
            .expect("bundled glyph");
        Some(Section {
            html: badge,
            mode: SectionMode::Content,
        })
    }

    fn html_class(&self, right: Option<&Section>) -> String {
        let left = self.left.as_ref();
        let left_flush = left.is_some_and(|s| s.mode.is_flush());
        let right_flush = right.is_some_and(|s| s.mode.is_flush());
        classes![
            FIELD_BASE_CLASSES,
            CONTROL_DISABLED_CLASSES,
            CONTROL_THEME_CLASSES,
            "pl-10" => left.is_some() && !left_flush,
            "pr-10" => right.is_some() && !right_flush,
            "shadow-none rounded-none rounded-r-lg" => left_flush,
            "shadow-none rounded-none rounded-l-lg" => right_flush,
            CONTROL_ERROR_CLASSES => self.has_errors(),
            self.class.as_deref().unwrap_or("")
        ]
    }

    fn container_class_names(&self, right: Option<&Section>) -> String {
        let any_flush = self.left.as_ref().is_some_and(|s| s.mode.is_flush())
            || right.is_some_and(|s| s.mode.is_flush());
        classes![
            "relative rounded-lg shadow-xs",
            "flex" => any_flush,
            self.container_class.as_deref().unwrap_or("")
        ]
    }

    fn write_section(section: &Section, is_left: bool, out: &mut String) {
        let outer_corner = if is_left { "rounded-l-lg" } else { "rounded-r-lg" };
        let class = match section.mode {
            SectionMode::Content => {
                let side = if is_left { LEFT_CONTENT_CLASSES } else { RIGHT_CONTENT_CLASSES };
                side.to_string()
            }
            SectionMode::Addon => classes![ADDON_CLASSES, outer_corner],
            SectionMode::Interaction => classes!["flex items-center", outer_corner],
        };
        let mut attrs = Attrs::new();
        attrs.set("class", class);
        write_open_tag("div", &attrs, out);
        out.push_str(&section.html);
        write_close_tag("div", out);
    }

    fn write_input(&self, right: Option<&Section>, out: &mut String) {
        let mut attrs = Attrs::new();
        attrs.set("class", self.html_class(right));
        attrs.merge_from(&self.attrs);
        attrs.set("type", self.input_type.as_str());
        if self.input_type != InputType::Password {
            if let Some(value) = self.form.value_for(self.field) {
                attrs.set("value", value);
            }
        }
        attrs.set("name", self.form.field_name(self.field));
        attrs.set("id", self.form.field_id(self.field));
        write_open_tag("input", &attrs, out);
    }
}

impl Component for Field<'_> {
    fn render(&self) -> String {
        let mut out = String::new();

        if self.input_type == InputType::Hidden {
            let mut attrs = Attrs::new();
            attrs.merge_from(&self.attrs);
            attrs.set("type", "hidden");
            if let Some(value) = self.form.value_for(self.field) {
                attrs.set("value", value);
            }
            attrs.set("name", self.form.field_name(self.field));
            attrs.set("id", self.form.field_id(self.field));
            write_open_tag("input", &attrs, &mut out);
            return out;
        }

        let right = self.effective_right();

        let mut container = Attrs::new();
        container.set("class", self.container_class_names(right.as_ref()));
        write_open_tag("div", &container, &mut out);

        if let Some(left) = &self.left {
            Self::write_section(left, true, &mut out);
        }
        self.write_input(right.as_ref(), &mut out);
        if let Some(right) = &right {
            Self::write_section(right, false, &mut out);
        }

        write_close_tag("div", &mut out);
        out
    }
}
