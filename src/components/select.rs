//! Styled `<select>` element with flat or grouped choices.

use itertools::Itertools;

use crate::classes;
use crate::components::{
    CONTROL_DISABLED_CLASSES, CONTROL_ERROR_CLASSES, CONTROL_THEME_CLASSES, Component,
};
use crate::form::FormBuilder;
use crate::html::{Attrs, write_close_tag, write_escaped_html, write_open_tag};

pub(crate) const SELECT_BASE_CLASSES: &str =
    "block w-full h-9 min-w-0 flex-1 rounded-md border-0 py-1 text-sm shadow-xs ring-1";

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone)]
pub struct Choice {
    pub label: String,
    pub value: String,
    pub disabled: bool,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Choice {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ChoiceGroup {
    pub label: String,
    pub choices: Vec<Choice>,
}

impl ChoiceGroup {
    pub fn new(label: impl Into<String>, choices: Vec<Choice>) -> Self {
        ChoiceGroup {
            label: label.into(),
            choices,
        }
    }
}

#[derive(Debug, Clone)]
enum Options {
    Flat(Vec<Choice>),
    Grouped(Vec<ChoiceGroup>),
}

#[derive(Debug, Clone)]
pub struct Select<'a> {
    form: &'a FormBuilder,
    field: &'a str,
    options: Options,
    prompt: Option<String>,
    include_blank: bool,
    selected: Option<String>,
    multiple: bool,
    disabled: bool,
    class: Option<String>,
    attrs: Attrs,
}

impl<'a> Select<'a> {
    pub fn new(
        form: &'a FormBuilder,
        field: &'a str,
        choices: impl IntoIterator<Item = Choice>,
    ) -> Self {
        Select {
            form,
            field,
            options: Options::Flat(choices.into_iter().collect()),
            prompt: None,
            include_blank: false,
            selected: None,
            multiple: false,
            disabled: false,
            class: None,
            attrs: Attrs::new(),
        }
    }

    /// Build the choice list from (label, value) pairs, the way collection
    /// selects map over records.
    pub fn from_pairs(
        form: &'a FormBuilder,
        field: &'a str,
        pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self::new(
            form,
            field,
            pairs
                .into_iter()
                .map(|(label, value)| Choice::new(label, value))
                .collect::<Vec<_>>(),
        )
    }

    pub fn grouped(form: &'a FormBuilder, field: &'a str, groups: Vec<ChoiceGroup>) -> Self {
        let mut select = Self::new(form, field, Vec::new());
        select.options = Options::Grouped(groups);
        select
    }

    /// Weekday picker with day names as both label and value, Monday first.
    pub fn weekdays(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(
            form,
            field,
            WEEKDAY_NAMES.map(|day| Choice::new(day, day)),
        )
    }

    /// Weekday picker keyed by day number (Sunday = 0), Monday first.
    pub fn weekdays_by_index(form: &'a FormBuilder, field: &'a str) -> Self {
        Self::new(
            form,
            field,
            WEEKDAY_NAMES
                .iter()
                .enumerate()
                .map(|(i, day)| Choice::new(*day, ((i + 1) % 7).to_string()))
                .collect::<Vec<_>>(),
        )
    }

    /// Leading disabled-free option with an empty value.
    pub fn prompt(mut self, text: impl Into<String>) -> Self {
        self.prompt = Some(text.into());
        self
    }

    pub fn include_blank(mut self, include_blank: bool) -> Self {
        self.include_blank = include_blank;
        self
    }

    /// Value to mark selected; defaults to the bound form value.
    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
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
            SELECT_BASE_CLASSES,
            CONTROL_DISABLED_CLASSES,
            CONTROL_THEME_CLASSES,
            CONTROL_ERROR_CLASSES => self.form.has_errors(self.field),
            self.class.as_deref().unwrap_or("")
        ]
    }

    fn selected_value(&self) -> Option<&str> {
        self.selected
            .as_deref()
            .or_else(|| self.form.value_for(self.field))
    }

    fn write_choice(choice: &Choice, selected: Option<&str>, out: &mut String) {
        let mut attrs = Attrs::new();
        if selected == Some(choice.value.as_str()) {
            attrs.set_flag("selected");
        }
        if choice.disabled {
            attrs.set_flag("disabled");
        }
        attrs.set("value", choice.value.clone());
        write_open_tag("option", &attrs, out);
        write_escaped_html(&choice.label, out);
        write_close_tag("option", out);
    }

    fn options_html(&self) -> String {
        let selected = self.selected_value();
        let mut parts: Vec<String> = Vec::new();

        if let Some(prompt) = &self.prompt {
            let mut option = String::from("<option value=\"\">");
            write_escaped_html(prompt, &mut option);
            option.push_str("</option>");
            parts.push(option);
        }
        if self.include_blank {
            parts.push("<option value=\"\"></option>".to_string());
        }

        match &self.options {
            Options::Flat(choices) => {
                for choice in choices {
                    let mut option = String::new();
                    Self::write_choice(choice, selected, &mut option);
                    parts.push(option);
                }
            }
            Options::Grouped(groups) => {
                for group in groups {
                    let mut attrs = Attrs::new();
                    attrs.set("label", group.label.clone());
                    let mut html = String::new();
                    write_open_tag("optgroup", &attrs, &mut html);
                    html.push_str(
                        &group
                            .choices
                            .iter()
                            .map(|choice| {
                                let mut option = String::new();
                                Self::write_choice(choice, selected, &mut option);
                                option
                            })
                            .join("\n"),
                    );
                    write_close_tag("optgroup", &mut html);
                    parts.push(html);
                }
            }
        }

        parts.iter().join("\n")
    }
}

impl Component for Select<'_> {
    fn render(&self) -> String {
        let mut out = String::new();

        // Browsers submit nothing for an empty multi-select; the hidden
        // input keeps the parameter present.
        if self.multiple {
            let mut hidden = Attrs::new();
            hidden.set("name", format!("{}[]", self.form.field_name(self.field)));
            hidden.set("type", "hidden");
            hidden.set("value", "");
            hidden.set("autocomplete", "off");
            write_open_tag("input", &hidden, &mut out);
        }

        let mut attrs = Attrs::new();
        attrs.set("class", self.html_class());
        if self.disabled {
            attrs.set_flag("disabled");
        }
        attrs.merge_from(&self.attrs);
        if self.multiple {
            attrs.set_flag("multiple");
            attrs.set("name", format!("{}[]", self.form.field_name(self.field)));
        } else {
            attrs.set("name", self.form.field_name(self.field));
        }
        attrs.set("id", self.form.field_id(self.field));

        write_open_tag("select", &attrs, &mut out);
        out.push_str(&self.options_html());
        write_close_tag("select", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    fn form() -> FormBuilder {
        FormBuilder::new("test_model")
    }

    #[test]
    fn renders_choices_in_order() {
        let form = form();
        let html = Select::from_pairs(&form, "role", [("Admin", "admin"), ("User", "user")])
            .render();
        assert!(html.starts_with("<select class=\"block w-full h-9 min-w-0 flex-1 rounded-md"));
        assert!(html.contains(r#"name="test_model[role]" id="test_model_role""#));
        assert!(html.contains(
            "<option value=\"admin\">Admin</option>\n<option value=\"user\">User</option></select>"
        ));
    }

    #[test]
    fn bound_value_marks_the_selected_option() {
        let form = form().with_value("role", "user");
        let html = Select::from_pairs(&form, "role", [("Admin", "admin"), ("User", "user")])
            .render();
        assert!(html.contains(r#"<option selected value="user">User</option>"#));
        assert!(html.contains(r#"<option value="admin">Admin</option>"#));
    }

    #[test]
    fn prompt_and_blank_options_come_first() {
        let form = form();
        let html = Select::from_pairs(&form, "category", [("Option 1", "1")])
            .prompt("Choose an option")
            .render();
        assert!(html.contains(
            "<option value=\"\">Choose an option</option>\n<option value=\"1\">Option 1</option>"
        ));

        let html = Select::from_pairs(&form, "category", [("Option 1", "1")])
            .include_blank(true)
            .render();
        assert!(html.contains("<option value=\"\"></option>\n<option value=\"1\">"));
    }

    #[test]
    fn multiple_selects_emit_the_hidden_input() {
        let form = form();
        let html = Select::from_pairs(&form, "category", [("Option 1", "1")])
            .multiple(true)
            .render();
        assert!(html.starts_with(
            r#"<input name="test_model[category][]" type="hidden" value="" autocomplete="off">"#
        ));
        assert!(html.contains(" multiple "));
        assert!(html.contains(r#"name="test_model[category][]""#));
    }

    #[test]
    fn error_state_swaps_the_color_bundle() {
        let form = form().with_error("role", "is required");
        let html = Select::from_pairs(&form, "role", [("Admin", "admin")]).render();
        assert!(html.contains("text-error ring-error-ring"));
        assert!(!html.contains("text-primary"));
    }

    #[test]
    fn grouped_choices_render_optgroups() {
        let form = form();
        let html = Select::grouped(
            &form,
            "city",
            vec![
                ChoiceGroup::new(
                    "North",
                    vec![Choice::new("Oslo", "oslo"), Choice::new("Umeå", "umea")],
                ),
                ChoiceGroup::new("South", vec![Choice::new("Rome", "rome")]),
            ],
        )
        .render();
        assert!(html.contains(r#"<optgroup label="North"><option value="oslo">Oslo</option>"#));
        assert!(html.contains(r#"<optgroup label="South"><option value="rome">Rome</option></optgroup>"#));
    }

    #[test]
    fn weekday_presets() {
        let form = form();
        let html = Select::weekdays(&form, "preferred_day").render();
        expect![[r#"
            <option value="Monday">Monday</option>
            <option value="Tuesday">Tuesday</option>
            <option value="Wednesday">Wednesday</option>
            <option value="Thursday">Thursday</option>
            <option value="Friday">Friday</option>
            <option value="Saturday">Saturday</option>
            <option value="Sunday">Sunday</option>"#]]
        .assert_eq(&html[html.find("<option").unwrap()..html.find("</select>").unwrap()]);

        let html = Select::weekdays_by_index(&form, "preferred_day").render();
        assert!(html.contains(r#"<option value="1">Monday</option>"#));
        assert!(html.contains(r#"<option value="6">Saturday</option>"#));
        assert!(html.contains(r#"<option value="0">Sunday</option>"#));
    }

    #[test]
    fn disabled_choices_and_custom_classes() {
        let form = form();
        let html = Select::new(
            &form,
            "plan",
            [Choice::new("Free", "free"), Choice::new("Pro", "pro").disabled()],
        )
        .class("custom-select rounded-none")
        .render();
        assert!(html.contains(r#"<option disabled value="pro">Pro</option>"#));
        assert!(html.contains("custom-select"));
        assert!(html.contains("rounded-none"));
        assert!(!html.contains("rounded-md"));
    }
}
