//! The visual components.
//!
//! Every component is a builder-pattern struct: construct it, chain setters,
//! then call [`Component::render`] to get the HTML fragment. Components
//! bound to a form field borrow a [`crate::FormBuilder`] for input naming,
//! current values and error state.

mod button;
mod check_box;
mod date_select;
mod field;
mod label;
mod radio_button;
mod select;
mod submit;
mod text_area;

pub use button::Button;
pub use check_box::CheckBox;
pub use date_select::{DatePart, DateSelect, TimeSelect};
pub use field::{Field, InputType, SectionMode};
pub use label::Label;
pub use radio_button::RadioButton;
pub use select::{Choice, ChoiceGroup, Select};
pub use submit::Submit;
pub use text_area::TextArea;

pub trait Component {
    /// Render the component to an HTML fragment.
    fn render(&self) -> String;
}

/// Disabled-state classes shared by the input-like controls.
pub(crate) const CONTROL_DISABLED_CLASSES: &str = "disabled:cursor-not-allowed \
     disabled:bg-disabled disabled:text-disabled-foreground disabled:ring-disabled-ring";

/// Resting colors shared by the input-like controls, light and dark.
pub(crate) const CONTROL_THEME_CLASSES: &str = "bg-transparent dark:bg-white/5 text-primary \
     ring-ring/10 dark:ring-white/10 placeholder:text-placeholder dark:text-white \
     focus:ring-focus-ring focus:border-ring/20 dark:focus:ring-focus-ring";

/// Error-state colors; appended after the theme bundle so they evict its
/// text/ring/placeholder colors in the merged class list.
pub(crate) const CONTROL_ERROR_CLASSES: &str = "text-error ring-error-ring \
     placeholder:text-error-placeholder focus:ring-error-focus-ring";
