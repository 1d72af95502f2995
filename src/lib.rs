//! Tailwind-styled HTML form components for server-rendered views.
//!
//! Every visual component composes a fixed set of base utility classes,
//! conditional variant/state classes and caller-supplied overrides through
//! a conflict-resolving class merger, then renders to a plain HTML string.
//! Rendering is pure and synchronous; nothing here touches shared state.

pub mod class_names;
pub mod cli;
pub mod components;
pub mod form;
pub mod html;
pub mod icons;
pub mod log;
pub mod variants;

pub use class_names::class_names;
pub use components::Component;
pub use form::FormBuilder;
pub use variants::{Size, Variant};
