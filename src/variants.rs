//! Visual presets shared by the button-like components.
//!
//! Each preset maps to a fixed bundle of utility classes; components compose
//! base + size + variant bundles through [`crate::class_names`], so caller
//! overrides appended after them win any class conflict.

use serde::Deserialize;

/// Classes every button-like component carries regardless of variant.
pub const BUTTON_BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 \
     whitespace-nowrap font-medium transition-all disabled:pointer-events-none \
     disabled:opacity-50 outline-none focus-visible:border-ring \
     focus-visible:ring-ring/50 focus-visible:ring-[3px]";

/// Named visual style preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Muted,
    Link,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Primary,
        Variant::Secondary,
        Variant::Destructive,
        Variant::Muted,
        Variant::Link,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Destructive => "destructive",
            Variant::Muted => "muted",
            Variant::Link => "link",
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            Variant::Primary => {
                "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90"
            }
            Variant::Secondary => {
                "bg-secondary text-secondary-foreground shadow-xs hover:bg-secondary/80"
            }
            Variant::Destructive => {
                "bg-destructive text-destructive-foreground shadow-xs \
                 hover:bg-destructive/90 focus-visible:ring-destructive/20"
            }
            Variant::Muted => "bg-transparent text-muted-foreground hover:bg-muted",
            Variant::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

/// Control size preset. `Md` is the default and carries the standard
/// `h-8 rounded-md px-3` button layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    pub const ALL: [Size; 4] = [Size::Xs, Size::Sm, Size::Md, Size::Lg];

    pub fn name(self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            Size::Xs => "h-6 rounded-sm px-2 text-xs",
            Size::Sm => "h-7 rounded-md px-2.5 text-sm",
            Size::Md => "h-8 rounded-md px-3 text-sm",
            Size::Lg => "h-10 rounded-md px-6 text-base",
        }
    }
}
