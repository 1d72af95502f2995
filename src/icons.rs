//! Icon rendering boundary.
//!
//! Icon sets are an external collaborator: host applications register their
//! own [`IconRenderer`] and components ask for icons by symbolic name.
//! [`BuiltinIcons`] ships only the glyphs the components themselves need
//! (currently the `exclamation-circle` badge rendered next to fields with
//! errors) and fails loudly for anything else.

use crate::html::Attrs;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IconError {
    #[error("Unknown icon {name} ({variant})")]
    UnknownIcon { name: String, variant: &'static str },
}

/// Heroicons-style icon variants. The variant selects the canvas size and
/// whether the glyph is drawn with strokes or fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconVariant {
    #[default]
    Outline,
    Solid,
    Mini,
    Micro,
}

impl IconVariant {
    pub fn name(self) -> &'static str {
        match self {
            IconVariant::Outline => "outline",
            IconVariant::Solid => "solid",
            IconVariant::Mini => "mini",
            IconVariant::Micro => "micro",
        }
    }

    fn canvas(self) -> u32 {
        match self {
            IconVariant::Outline | IconVariant::Solid => 24,
            IconVariant::Mini => 20,
            IconVariant::Micro => 16,
        }
    }
}

pub trait IconRenderer {
    /// Render the named icon as an inline SVG fragment. `attrs` are merged
    /// onto the `<svg>` element (class overrides, aria labels, ...).
    fn render(&self, name: &str, variant: IconVariant, attrs: &Attrs)
    -> Result<String, IconError>;
}

/// The glyphs bundled with the library.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinIcons;

impl BuiltinIcons {
    fn path_for(name: &str, variant: IconVariant) -> Option<&'static str> {
        match (name, variant) {
            ("exclamation-circle", IconVariant::Mini) => Some(
                "M18 10a8 8 0 1 1-16 0 8 8 0 0 1 16 0Zm-8-5a.75.75 0 0 1 .75.75v4.5a.75.75 0 \
                 0 1-1.5 0v-4.5A.75.75 0 0 1 10 5Zm0 10a1 1 0 1 0 0-2 1 1 0 0 0 0 2Z",
            ),
            ("magnifying-glass", IconVariant::Mini) => Some(
                "M9 3.5a5.5 5.5 0 1 0 0 11 5.5 5.5 0 0 0 0-11ZM2 9a7 7 0 1 1 12.452 \
                 4.391l3.328 3.329a.75.75 0 1 1-1.06 1.06l-3.329-3.328A7 7 0 0 1 2 9Z",
            ),
            ("check", IconVariant::Mini) => Some(
                "M16.704 4.153a.75.75 0 0 1 .143 1.052l-8 10.5a.75.75 0 0 1-1.127.075l-4.5-4.5a\
                 .75.75 0 0 1 1.06-1.06l3.894 3.893 7.48-9.817a.75.75 0 0 1 1.05-.143Z",
            ),
            _ => None,
        }
    }
}

impl IconRenderer for BuiltinIcons {
    fn render(
        &self,
        name: &str,
        variant: IconVariant,
        attrs: &Attrs,
    ) -> Result<String, IconError> {
        let path = Self::path_for(name, variant).ok_or_else(|| IconError::UnknownIcon {
            name: name.to_string(),
            variant: variant.name(),
        })?;

        let canvas = variant.canvas();
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {canvas} {canvas}\" \
             fill=\"currentColor\" aria-hidden=\"true\" data-slot=\"icon\""
        );
        attrs.write(&mut svg);
        svg.push('>');
        svg.push_str("<path fill-rule=\"evenodd\" d=\"");
        svg.push_str(path);
        svg.push_str("\" clip-rule=\"evenodd\"></path></svg>");
        Ok(svg)
    }
}
