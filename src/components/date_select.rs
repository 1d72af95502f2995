//! Select-based date and time pickers.
//!
//! Each picker renders one `<select>` per date part, named with the
//! multiparameter convention the form layer understands: `field(1i)` year,
//! `(2i)` month, `(3i)` day, `(4i)` hour, `(5i)` minute, `(6i)` second.

use itertools::Itertools;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::classes;
use crate::components::select::SELECT_BASE_CLASSES;
use crate::components::{
    CONTROL_DISABLED_CLASSES, CONTROL_ERROR_CLASSES, CONTROL_THEME_CLASSES, Component,
};
use crate::form::FormBuilder;
use crate::html::{Attrs, write_close_tag, write_open_tag};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    Year,
    Month,
    Day,
}

impl DatePart {
    /// Multiparameter index: year is `(1i)`, month `(2i)`, day `(3i)`.
    fn index(self) -> u8 {
        match self {
            DatePart::Year => 1,
            DatePart::Month => 2,
            DatePart::Day => 3,
        }
    }

    fn prompt_label(self) -> &'static str {
        match self {
            DatePart::Year => "Year",
            DatePart::Month => "Month",
            DatePart::Day => "Day",
        }
    }
}

/// Gregorian date for a day count since the Unix epoch.
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as i32, month as u32, day as u32)
}

fn current_year() -> i32 {
    let days = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
        / 86_400;
    civil_from_days(days as i64).0
}

fn picker_class(form: &FormBuilder, field: &str, class: Option<&str>) -> String {
    classes![
        SELECT_BASE_CLASSES,
        CONTROL_DISABLED_CLASSES,
        CONTROL_THEME_CLASSES,
        CONTROL_ERROR_CLASSES => form.has_errors(field),
        class.unwrap_or("")
    ]
}

fn write_picker_select(
    form: &FormBuilder,
    field: &str,
    class: Option<&str>,
    part_index: u8,
    prompt: Option<&str>,
    options: impl Iterator<Item = (String, String)>,
    selected: Option<&str>,
    out: &mut String,
) {
    let mut attrs = Attrs::new();
    attrs.set("class", picker_class(form, field, class));
    attrs.set("id", form.multiparam_id(field, part_index));
    attrs.set("name", form.multiparam_name(field, part_index));
    write_open_tag("select", &attrs, out);

    let rendered = options
        .map(|(value, label)| {
            let selected_attr = if selected == Some(value.as_str()) {
                " selected"
            } else {
                ""
            };
            format!("<option{selected_attr} value=\"{value}\">{label}</option>")
        })
        .join("\n");

    if let Some(prompt) = prompt {
        out.push_str(&format!("<option value=\"\">{prompt}</option>\n"));
    }
    out.push_str(&rendered);
    write_close_tag("select", out);
}

/// Year/month/day picker rendered as three selects.
#[derive(Debug, Clone)]
pub struct DateSelect<'a> {
    form: &'a FormBuilder,
    field: &'a str,
    start_year: Option<i32>,
    end_year: Option<i32>,
    order: [DatePart; 3],
    include_day: bool,
    prompt: bool,
    selected: Option<(i32, u32, u32)>,
    class: Option<String>,
}

impl<'a> DateSelect<'a> {
    pub fn new(form: &'a FormBuilder, field: &'a str) -> Self {
        DateSelect {
            form,
            field,
            start_year: None,
            end_year: None,
            order: [DatePart::Year, DatePart::Month, DatePart::Day],
            include_day: true,
            prompt: false,
            selected: None,
            class: None,
        }
    }

    /// Year range; descending ranges render high-to-low. Defaults to five
    /// years around the current year.
    pub fn years(mut self, start: i32, end: i32) -> Self {
        self.start_year = Some(start);
        self.end_year = Some(end);
        self
    }

    pub fn order(mut self, order: [DatePart; 3]) -> Self {
        self.order = order;
        self
    }

    /// Drop the day select, leaving year and month.
    pub fn discard_day(mut self) -> Self {
        self.include_day = false;
        self
    }

    /// Lead each select with an empty-valued part-name option.
    pub fn prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn selected(mut self, year: i32, month: u32, day: u32) -> Self {
        self.selected = Some((year, month, day));
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    fn year_bounds(&self) -> (i32, i32) {
        let pivot = self
            .selected
            .map(|(year, _, _)| year)
            .unwrap_or_else(current_year);
        (
            self.start_year.unwrap_or(pivot - 5),
            self.end_year.unwrap_or(pivot + 5),
        )
    }

    fn write_part(&self, part: DatePart, out: &mut String) {
        let prompt = self.prompt.then(|| part.prompt_label());
        let selected = self.selected.map(|(year, month, day)| match part {
            DatePart::Year => year.to_string(),
            DatePart::Month => month.to_string(),
            DatePart::Day => day.to_string(),
        });

        let options: Vec<(String, String)> = match part {
            DatePart::Year => {
                let (start, end) = self.year_bounds();
                let years: Vec<i32> = if start <= end {
                    (start..=end).collect()
                } else {
                    (end..=start).rev().collect()
                };
                years
                    .into_iter()
                    .map(|year| (year.to_string(), year.to_string()))
                    .collect()
            }
            DatePart::Month => (1..=12)
                .map(|month: usize| (month.to_string(), MONTH_NAMES[month - 1].to_string()))
                .collect(),
            DatePart::Day => (1..=31).map(|day: u32| (day.to_string(), day.to_string())).collect(),
        };

        write_picker_select(
            self.form,
            self.field,
            self.class.as_deref(),
            part.index(),
            prompt,
            options.into_iter(),
            selected.as_deref(),
            out,
        );
    }
}

impl Component for DateSelect<'_> {
    fn render(&self) -> String {
        let mut out = String::new();
        let mut first = true;
        for part in self.order {
            if part == DatePart::Day && !self.include_day {
                continue;
            }
            if !first {
                out.push('\n');
            }
            self.write_part(part, &mut out);
            first = false;
        }
        out
    }
}

/// Hour/minute(/second) picker rendered as zero-padded selects.
#[derive(Debug, Clone)]
pub struct TimeSelect<'a> {
    form: &'a FormBuilder,
    field: &'a str,
    include_seconds: bool,
    minute_step: u32,
    prompt: bool,
    selected: Option<(u32, u32, u32)>,
    class: Option<String>,
}

impl<'a> TimeSelect<'a> {
    pub fn new(form: &'a FormBuilder, field: &'a str) -> Self {
        TimeSelect {
            form,
            field,
            include_seconds: false,
            minute_step: 1,
            prompt: false,
            selected: None,
            class: None,
        }
    }

    pub fn include_seconds(mut self, include_seconds: bool) -> Self {
        self.include_seconds = include_seconds;
        self
    }

    /// Minute granularity, e.g. 15 renders 00/15/30/45.
    pub fn minute_step(mut self, step: u32) -> Self {
        self.minute_step = step.max(1);
        self
    }

    pub fn prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn selected(mut self, hour: u32, minute: u32, second: u32) -> Self {
        self.selected = Some((hour, minute, second));
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    fn write_part(
        &self,
        part_index: u8,
        prompt_label: &str,
        values: impl Iterator<Item = u32>,
        selected: Option<u32>,
        out: &mut String,
    ) {
        write_picker_select(
            self.form,
            self.field,
            self.class.as_deref(),
            part_index,
            self.prompt.then_some(prompt_label),
            values.map(|v| (format!("{v:02}"), format!("{v:02}"))),
            selected.map(|v| format!("{v:02}")).as_deref(),
            out,
        );
    }
}

impl Component for TimeSelect<'_> {
    fn render(&self) -> String {
        let mut out = String::new();
        let (hour, minute, second) = match self.selected {
            Some(selected) => (Some(selected.0), Some(selected.1), Some(selected.2)),
            None => (None, None, None),
        };

        self.write_part(4, "Hour", 0..24, hour, &mut out);
        out.push('\n');
        let step = self.minute_step;
        self.write_part(5, "Minute", (0..60).step_by(step as usize), minute, &mut out);
        if self.include_seconds {
            out.push('\n');
            self.write_part(6, "Second", 0..60, second, &mut out);
        }
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
    fn civil_from_days_reference_dates() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(19_723), (2024, 1, 1));
        assert_eq!(civil_from_days(19_782), (2024, 2, 29));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
    }

    #[test]
    fn renders_three_selects_with_multiparameter_names() {
        let form = form();
        let html = DateSelect::new(&form, "birthdate").years(1980, 1985).render();

        assert!(html.contains(r#"id="test_model_birthdate_1i" name="test_model[birthdate(1i)]""#));
        assert!(html.contains(r#"id="test_model_birthdate_2i" name="test_model[birthdate(2i)]""#));
        assert!(html.contains(r#"id="test_model_birthdate_3i" name="test_model[birthdate(3i)]""#));
        assert!(html.contains(r#"<option value="1980">1980</option>"#));
        assert!(html.contains(r#"<option value="1985">1985</option>"#));
        assert!(!html.contains(r#"<option value="1986">"#));
        assert!(html.contains(r#"<option value="1">January</option>"#));
        assert!(html.contains(r#"<option value="12">December</option>"#));
        assert!(html.contains(r#"<option value="31">31</option>"#));
    }

    #[test]
    fn custom_order_changes_the_select_sequence() {
        let form = form();
        let html = DateSelect::new(&form, "birthdate")
            .years(2000, 2001)
            .order([DatePart::Month, DatePart::Day, DatePart::Year])
            .render();

        let month = html.find("birthdate(2i)").unwrap();
        let day = html.find("birthdate(3i)").unwrap();
        let year = html.find("birthdate(1i)").unwrap();
        assert!(month < day && day < year);
    }

    #[test]
    fn descending_year_ranges_render_high_to_low() {
        let form = form();
        let html = DateSelect::new(&form, "birthdate").years(2002, 2000).render();
        let first = html.find(r#"<option value="2002">"#).unwrap();
        let last = html.find(r#"<option value="2000">"#).unwrap();
        assert!(first < last);
    }

    #[test]
    fn discard_day_and_prompt() {
        let form = form();
        let html = DateSelect::new(&form, "expiry")
            .years(2030, 2031)
            .discard_day()
            .prompt(true)
            .render();

        assert!(!html.contains("expiry(3i)"));
        assert!(html.contains(r#"<option value="">Year</option>"#));
        assert!(html.contains(r#"<option value="">Month</option>"#));
    }

    #[test]
    fn selected_date_marks_all_three_parts() {
        let form = form();
        let html = DateSelect::new(&form, "birthdate")
            .years(1990, 1995)
            .selected(1992, 3, 7)
            .render();

        assert!(html.contains(r#"<option selected value="1992">1992</option>"#));
        assert!(html.contains(r#"<option selected value="3">March</option>"#));
        assert!(html.contains(r#"<option selected value="7">7</option>"#));
    }

    #[test]
    fn time_select_pads_values_and_honors_the_step() {
        let form = form();
        let html = TimeSelect::new(&form, "meeting")
            .minute_step(15)
            .selected(8, 30, 0)
            .render();

        assert!(html.contains(r#"id="test_model_meeting_4i" name="test_model[meeting(4i)]""#));
        assert!(html.contains(r#"<option selected value="08">08</option>"#));
        assert!(html.contains(r#"<option value="23">23</option>"#));
        assert!(html.contains(r#"<option selected value="30">30</option>"#));
        assert!(html.contains(r#"<option value="45">45</option>"#));
        assert!(!html.contains(r#"<option value="59">"#));
        assert!(!html.contains("meeting(6i)"));
    }

    #[test]
    fn seconds_are_opt_in() {
        let form = form();
        let html = TimeSelect::new(&form, "meeting").include_seconds(true).render();
        assert!(html.contains("meeting(6i)"));
        assert!(html.contains(r#"<option value="59">59</option>"#));
    }

    #[test]
    fn pickers_carry_the_select_styling_and_error_state() {
        let form = form().with_error("birthdate", "is invalid");
        let html = DateSelect::new(&form, "birthdate").years(2000, 2001).render();
        assert!(html.contains("rounded-md"));
        assert!(html.contains("text-error"));
    }
}
