//! Classification of Tailwind base classes into conflict groups.
//!
//! A conflict group is the CSS property axis a utility controls. Two classes
//! in the same group (under the same modifiers) are mutually exclusive in a
//! merged class list. Classification works on the base class only, with
//! modifiers, the important flag and any `/postfix` already stripped.

/// The CSS property axis a utility class controls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassGroup {
    // Layout
    Display,
    Visibility,
    Position,
    Isolation,
    Float,
    Clear,
    BoxSizing,
    BoxDecoration,
    ObjectFit,
    ObjectPosition,
    Overflow,
    OverflowX,
    OverflowY,
    Overscroll,
    OverscrollX,
    OverscrollY,
    Inset,
    InsetX,
    InsetY,
    Start,
    End,
    Top,
    Right,
    Bottom,
    Left,
    ZIndex,
    Container,
    AspectRatio,
    Columns,
    BreakAfter,
    BreakBefore,
    BreakInside,

    // Flexbox & grid
    FlexDirection,
    FlexWrap,
    Flex,
    Basis,
    Grow,
    Shrink,
    Order,
    GridCols,
    ColSpan,
    ColStart,
    ColEnd,
    Col,
    GridRows,
    RowSpan,
    RowStart,
    RowEnd,
    Row,
    GridFlow,
    AutoCols,
    AutoRows,
    Gap,
    GapX,
    GapY,
    JustifyContent,
    JustifyItems,
    JustifySelf,
    AlignContent,
    AlignItems,
    AlignSelf,
    PlaceContent,
    PlaceItems,
    PlaceSelf,

    // Spacing
    Padding,
    PaddingX,
    PaddingY,
    PaddingS,
    PaddingE,
    PaddingT,
    PaddingR,
    PaddingB,
    PaddingL,
    Margin,
    MarginX,
    MarginY,
    MarginS,
    MarginE,
    MarginT,
    MarginR,
    MarginB,
    MarginL,
    SpaceX,
    SpaceY,

    // Sizing
    Width,
    MinWidth,
    MaxWidth,
    Height,
    MinHeight,
    MaxHeight,
    Size,

    // Typography
    FontFamily,
    FontSize,
    FontSmoothing,
    FontStyle,
    FontWeight,
    FontStretch,
    FvnNormal,
    FvnOrdinal,
    FvnSlashedZero,
    FvnFigure,
    FvnSpacing,
    FvnFraction,
    Tracking,
    LineClamp,
    Leading,
    ListStyleType,
    ListStylePosition,
    TextAlign,
    TextColor,
    TextDecoration,
    TextDecorationColor,
    TextDecorationStyle,
    TextDecorationThickness,
    UnderlineOffset,
    TextTransform,
    TextOverflow,
    TextWrap,
    Indent,
    VerticalAlign,
    Whitespace,
    WordBreak,
    Hyphens,
    Content,

    // Backgrounds
    BgAttachment,
    BgClip,
    BgColor,
    BgOrigin,
    BgPosition,
    BgRepeat,
    BgSize,
    BgImage,
    GradientFrom,
    GradientVia,
    GradientTo,

    // Borders
    Rounded,
    RoundedS,
    RoundedE,
    RoundedT,
    RoundedR,
    RoundedB,
    RoundedL,
    RoundedSs,
    RoundedSe,
    RoundedEe,
    RoundedEs,
    RoundedTl,
    RoundedTr,
    RoundedBr,
    RoundedBl,
    BorderW,
    BorderWX,
    BorderWY,
    BorderWS,
    BorderWE,
    BorderWT,
    BorderWR,
    BorderWB,
    BorderWL,
    BorderColor,
    BorderColorX,
    BorderColorY,
    BorderColorS,
    BorderColorE,
    BorderColorT,
    BorderColorR,
    BorderColorB,
    BorderColorL,
    BorderStyle,
    DivideX,
    DivideY,
    DivideColor,
    DivideStyle,
    OutlineW,
    OutlineStyle,
    OutlineOffset,
    OutlineColor,
    RingW,
    RingWInset,
    RingColor,
    RingOffsetW,
    RingOffsetColor,

    // Effects
    Shadow,
    ShadowColor,
    Opacity,
    MixBlend,
    BgBlend,

    // Filters
    Filter,
    Blur,
    Brightness,
    Contrast,
    DropShadow,
    Grayscale,
    HueRotate,
    Invert,
    Saturate,
    Sepia,
    BackdropFilter,
    BackdropBlur,
    BackdropBrightness,
    BackdropContrast,
    BackdropGrayscale,
    BackdropHueRotate,
    BackdropInvert,
    BackdropOpacity,
    BackdropSaturate,
    BackdropSepia,

    // Tables
    BorderCollapse,
    BorderSpacing,
    BorderSpacingX,
    BorderSpacingY,
    TableLayout,
    CaptionSide,

    // Transitions & animation
    Transition,
    Duration,
    Ease,
    Delay,
    Animate,

    // Transforms
    Scale,
    ScaleX,
    ScaleY,
    Rotate,
    Translate,
    TranslateX,
    TranslateY,
    TranslateZ,
    TranslateNone,
    SkewX,
    SkewY,
    TransformOrigin,
    Transform,

    // Interactivity
    Accent,
    Appearance,
    Caret,
    Cursor,
    PointerEvents,
    Resize,
    ScrollBehavior,
    ScrollM,
    ScrollMx,
    ScrollMy,
    ScrollMs,
    ScrollMe,
    ScrollMt,
    ScrollMr,
    ScrollMb,
    ScrollMl,
    ScrollP,
    ScrollPx,
    ScrollPy,
    ScrollPs,
    ScrollPe,
    ScrollPt,
    ScrollPr,
    ScrollPb,
    ScrollPl,
    SnapAlign,
    SnapStop,
    SnapType,
    Touch,
    TouchX,
    TouchY,
    TouchPz,
    UserSelect,
    WillChange,

    // SVG
    Fill,
    StrokeColor,
    StrokeW,

    // Accessibility
    SrOnly,
    ForcedColorAdjust,

    /// Arbitrary CSS property, e.g. `[paint-order:markers]`. Grouped by the
    /// property name so two arbitrary values for the same property conflict.
    ArbitraryProperty(String),
}

/// Classify a base class (modifiers and postfix already removed).
/// Returns None for classes outside the known utility vocabulary.
pub fn class_group_of(base: &str) -> Option<ClassGroup> {
    use ClassGroup::*;

    if let Some(group) = keyword_group(base) {
        return Some(group);
    }

    // `[property:value]` arbitrary CSS declarations group by property name.
    if base.starts_with('[') && base.ends_with(']') {
        let inner = &base[1..base.len() - 1];
        if let Some((property, _value)) = inner.split_once(':') {
            if !property.is_empty() && !property.contains(' ') {
                return Some(ArbitraryProperty(property.to_string()));
            }
        }
        return None;
    }

    // Negative scale utilities: -m-2, -translate-x-1, -z-10
    let base = base.strip_prefix('-').unwrap_or(base);

    let (prefix, value) = base.split_once('-')?;

    match prefix {
        "p" => scaled(value, Padding),
        "px" => scaled(value, PaddingX),
        "py" => scaled(value, PaddingY),
        "ps" => scaled(value, PaddingS),
        "pe" => scaled(value, PaddingE),
        "pt" => scaled(value, PaddingT),
        "pr" => scaled(value, PaddingR),
        "pb" => scaled(value, PaddingB),
        "pl" => scaled(value, PaddingL),
        "m" => scaled(value, Margin),
        "mx" => scaled(value, MarginX),
        "my" => scaled(value, MarginY),
        "ms" => scaled(value, MarginS),
        "me" => scaled(value, MarginE),
        "mt" => scaled(value, MarginT),
        "mr" => scaled(value, MarginR),
        "mb" => scaled(value, MarginB),
        "ml" => scaled(value, MarginL),
        "w" => scaled(value, Width),
        "h" => scaled(value, Height),
        "z" => {
            (value == "auto" || value.parse::<i64>().is_ok() || is_arbitrary(value))
                .then_some(ZIndex)
        }
        "gap" => match value.split_once('-') {
            Some(("x", rest)) => scaled(rest, GapX),
            Some(("y", rest)) => scaled(rest, GapY),
            _ => scaled(value, Gap),
        },
        "space" => match value.split_once('-') {
            Some(("x", _)) => Some(SpaceX),
            Some(("y", _)) => Some(SpaceY),
            _ => None,
        },
        "size" => scaled(value, Size),
        "min" => match value.split_once('-') {
            Some(("w", rest)) => sized(rest, MinWidth),
            Some(("h", rest)) => sized(rest, MinHeight),
            _ => None,
        },
        "max" => match value.split_once('-') {
            Some(("w", rest)) => sized(rest, MaxWidth),
            Some(("h", rest)) => sized(rest, MaxHeight),
            _ => None,
        },
        "inset" => match value.split_once('-') {
            Some(("x", rest)) => scaled(rest, InsetX),
            Some(("y", rest)) => scaled(rest, InsetY),
            _ => scaled(value, Inset),
        },
        "start" => scaled(value, Start),
        "end" => scaled(value, End),
        "top" => scaled(value, Top),
        "right" => scaled(value, Right),
        "bottom" => scaled(value, Bottom),
        "left" => scaled(value, Left),
        "aspect" => Some(AspectRatio),
        "columns" => Some(Columns),
        "object" => match value {
            "contain" | "cover" | "fill" | "none" | "scale-down" => Some(ObjectFit),
            _ => Some(ObjectPosition),
        },
        "overflow" => match value.split_once('-') {
            Some(("x", _)) => Some(OverflowX),
            Some(("y", _)) => Some(OverflowY),
            _ => Some(Overflow),
        },
        "overscroll" => match value.split_once('-') {
            Some(("x", _)) => Some(OverscrollX),
            Some(("y", _)) => Some(OverscrollY),
            _ => Some(Overscroll),
        },
        "float" => Some(Float),
        "clear" => Some(Clear),
        "box" => match value {
            "border" | "content" => Some(BoxSizing),
            "decoration-clone" | "decoration-slice" => Some(BoxDecoration),
            _ => None,
        },
        "break" => match value.split_once('-') {
            Some(("after", _)) => Some(BreakAfter),
            Some(("before", _)) => Some(BreakBefore),
            Some(("inside", _)) => Some(BreakInside),
            // break-all, break-words, break-keep, break-normal
            _ => Some(WordBreak),
        },
        "flex" => match value {
            "row" | "row-reverse" | "col" | "col-reverse" => Some(FlexDirection),
            "wrap" | "wrap-reverse" | "nowrap" => Some(FlexWrap),
            "auto" | "initial" | "none" => Some(Flex),
            _ => (value.parse::<f64>().is_ok() || is_arbitrary(value)).then_some(Flex),
        },
        "basis" => scaled(value, Basis),
        "grow" => scaled(value, Grow),
        "shrink" => scaled(value, Shrink),
        "order" => {
            (matches!(value, "first" | "last" | "none")
                || value.parse::<i64>().is_ok()
                || is_arbitrary(value))
            .then_some(Order)
        }
        "grid" => match value.split_once('-') {
            Some(("cols", _)) => Some(GridCols),
            Some(("rows", _)) => Some(GridRows),
            Some(("flow", _)) => Some(GridFlow),
            _ => None,
        },
        "col" => match value.split_once('-') {
            Some(("span", _)) => Some(ColSpan),
            Some(("start", _)) => Some(ColStart),
            Some(("end", _)) => Some(ColEnd),
            _ => {
                (value == "auto" || value.parse::<i64>().is_ok() || is_arbitrary(value))
                    .then_some(Col)
            }
        },
        "row" => match value.split_once('-') {
            Some(("span", _)) => Some(RowSpan),
            Some(("start", _)) => Some(RowStart),
            Some(("end", _)) => Some(RowEnd),
            _ => {
                (value == "auto" || value.parse::<i64>().is_ok() || is_arbitrary(value))
                    .then_some(Row)
            }
        },
        "auto" => match value.split_once('-') {
            Some(("cols", _)) => Some(AutoCols),
            Some(("rows", _)) => Some(AutoRows),
            _ => None,
        },
        "justify" => match value.split_once('-') {
            Some(("items", _)) => Some(JustifyItems),
            Some(("self", _)) => Some(JustifySelf),
            _ => Some(JustifyContent),
        },
        "items" => Some(AlignItems),
        "content" if is_align_content(value) => Some(AlignContent),
        "content" => Some(Content),
        "self" => Some(AlignSelf),
        "place" => match value.split_once('-') {
            Some(("content", _)) => Some(PlaceContent),
            Some(("items", _)) => Some(PlaceItems),
            Some(("self", _)) => Some(PlaceSelf),
            _ => None,
        },
        "font" => {
            if is_font_weight(value) {
                Some(FontWeight)
            } else if is_font_stretch(value) {
                Some(FontStretch)
            } else {
                Some(FontFamily)
            }
        }
        "text" => Some(text_group(value)),
        "tracking" => {
            (matches!(value, "tighter" | "tight" | "normal" | "wide" | "wider" | "widest")
                || is_arbitrary(value))
            .then_some(Tracking)
        }
        "line" => value.strip_prefix("clamp").map(|_| LineClamp),
        "leading" => {
            (matches!(value, "none" | "tight" | "snug" | "normal" | "relaxed" | "loose")
                || is_scale_value(value))
            .then_some(Leading)
        }
        "list" => match value {
            "inside" | "outside" => Some(ListStylePosition),
            _ => Some(ListStyleType),
        },
        "decoration" => {
            if matches!(value, "solid" | "double" | "dotted" | "dashed" | "wavy") {
                Some(TextDecorationStyle)
            } else if is_length_value(value) {
                Some(TextDecorationThickness)
            } else {
                Some(TextDecorationColor)
            }
        }
        "underline" => value.strip_prefix("offset").map(|_| UnderlineOffset),
        "indent" => Some(Indent),
        "align" => Some(VerticalAlign),
        "whitespace" => Some(Whitespace),
        "hyphens" => Some(Hyphens),
        "bg" => Some(bg_group(value)),
        "from" => Some(GradientFrom),
        "via" => Some(GradientVia),
        "to" => Some(GradientTo),
        "rounded" => Some(rounded_group(value)),
        "border" => border_group(value),
        "divide" => match value.split_once('-') {
            Some(("x", _)) => Some(DivideX),
            Some(("y", _)) => Some(DivideY),
            None if matches!(value, "x" | "y") => {
                Some(if value == "x" { DivideX } else { DivideY })
            }
            _ if matches!(value, "solid" | "dashed" | "dotted" | "double" | "none") => {
                Some(DivideStyle)
            }
            _ => Some(DivideColor),
        },
        "outline" => {
            if is_width_value(value) {
                Some(OutlineW)
            } else if matches!(value, "none" | "solid" | "dashed" | "dotted" | "double" | "hidden")
            {
                Some(OutlineStyle)
            } else if value.starts_with("offset-") {
                Some(OutlineOffset)
            } else {
                Some(OutlineColor)
            }
        }
        "ring" => {
            if value == "inset" {
                Some(RingWInset)
            } else if let Some(rest) = value.strip_prefix("offset-") {
                if is_width_value(rest) {
                    Some(RingOffsetW)
                } else {
                    Some(RingOffsetColor)
                }
            } else if is_width_value(value) {
                Some(RingW)
            } else {
                Some(RingColor)
            }
        }
        "shadow" => {
            if is_tshirt_size(value) || matches!(value, "none" | "inner") || is_arbitrary(value) {
                Some(Shadow)
            } else {
                Some(ShadowColor)
            }
        }
        "opacity" => {
            (value.parse::<f64>().is_ok() || is_arbitrary(value)).then_some(Opacity)
        }
        "mix" => value.strip_prefix("blend-").map(|_| MixBlend),
        "blur" => Some(Blur),
        "brightness" => Some(Brightness),
        "contrast" => Some(Contrast),
        "drop" => value.strip_prefix("shadow").map(|_| DropShadow),
        "grayscale" => Some(Grayscale),
        "hue" => value.strip_prefix("rotate").map(|_| HueRotate),
        "invert" => Some(Invert),
        "saturate" => Some(Saturate),
        "sepia" => Some(Sepia),
        "backdrop" => backdrop_group(value),
        "table" => match value {
            "auto" | "fixed" => Some(TableLayout),
            _ => None,
        },
        "caption" => Some(CaptionSide),
        "transition" => Some(Transition),
        "duration" => Some(Duration),
        "ease" => Some(Ease),
        "delay" => Some(Delay),
        "animate" => Some(Animate),
        "scale" => match value.split_once('-') {
            Some(("x", _)) => Some(ScaleX),
            Some(("y", _)) => Some(ScaleY),
            _ => Some(Scale),
        },
        "rotate" => Some(Rotate),
        "translate" => match value.split_once('-') {
            Some(("x", _)) => Some(TranslateX),
            Some(("y", _)) => Some(TranslateY),
            Some(("z", _)) => Some(TranslateZ),
            None if value == "none" => Some(TranslateNone),
            _ => Some(Translate),
        },
        "skew" => match value.split_once('-') {
            Some(("x", _)) => Some(SkewX),
            Some(("y", _)) => Some(SkewY),
            _ => None,
        },
        "origin" => Some(TransformOrigin),
        "transform" => Some(Transform),
        "accent" => Some(Accent),
        "appearance" => Some(Appearance),
        "caret" => Some(Caret),
        "cursor" => Some(Cursor),
        "pointer" => value.strip_prefix("events-").map(|_| PointerEvents),
        "resize" => Some(Resize),
        "scroll" => scroll_group(value),
        "snap" => match value {
            "start" | "center" | "end" | "align-none" => Some(SnapAlign),
            "normal" | "always" => Some(SnapStop),
            _ => Some(SnapType),
        },
        "touch" => match value {
            "pan-x" => Some(TouchX),
            "pan-y" => Some(TouchY),
            "pinch-zoom" => Some(TouchPz),
            _ => Some(Touch),
        },
        "select" => Some(UserSelect),
        "will" => value.strip_prefix("change").map(|_| WillChange),
        "fill" => Some(Fill),
        "stroke" => {
            if is_width_value(value) {
                Some(StrokeW)
            } else {
                Some(StrokeColor)
            }
        }
        "forced" => value.strip_prefix("color-adjust").map(|_| ForcedColorAdjust),
        _ => None,
    }
}

/// Classes with no `prefix-value` shape, plus a few fixed multi-segment names.
fn keyword_group(base: &str) -> Option<ClassGroup> {
    use ClassGroup::*;
    let group = match base {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "table"
        | "inline-table" | "table-caption" | "table-cell" | "table-column"
        | "table-column-group" | "table-footer-group" | "table-header-group"
        | "table-row-group" | "table-row" | "flow-root" | "grid" | "inline-grid"
        | "contents" | "list-item" | "hidden" => Display,
        "visible" | "invisible" | "collapse" => Visibility,
        "static" | "fixed" | "absolute" | "relative" | "sticky" => Position,
        "isolate" | "isolation-auto" => Isolation,
        "container" => Container,
        "grow" => Grow,
        "shrink" => Shrink,
        "border" => BorderW,
        "border-collapse" | "border-separate" => BorderCollapse,
        "rounded" => Rounded,
        "ring" => RingW,
        "outline" => OutlineStyle,
        "shadow" => Shadow,
        "blur" => Blur,
        "grayscale" => Grayscale,
        "invert" => Invert,
        "sepia" => Sepia,
        "drop-shadow" => DropShadow,
        "filter" | "filter-none" => Filter,
        "backdrop-filter" | "backdrop-filter-none" => BackdropFilter,
        "transition" => Transition,
        "transform" | "transform-cpu" | "transform-gpu" | "transform-none" => Transform,
        "antialiased" | "subpixel-antialiased" => FontSmoothing,
        "italic" | "not-italic" => FontStyle,
        "normal-nums" => FvnNormal,
        "ordinal" => FvnOrdinal,
        "slashed-zero" => FvnSlashedZero,
        "lining-nums" | "oldstyle-nums" => FvnFigure,
        "proportional-nums" | "tabular-nums" => FvnSpacing,
        "diagonal-fractions" | "stacked-fractions" => FvnFraction,
        "underline" | "overline" | "line-through" | "no-underline" => TextDecoration,
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => TextTransform,
        "truncate" => TextOverflow,
        "sr-only" | "not-sr-only" => SrOnly,
        "resize" => Resize,
        "snap-none" => SnapType,
        "appearance-none" | "appearance-auto" => Appearance,
        _ => return None,
    };
    Some(group)
}

/// Values on the numeric spacing/sizing scale. Bare words are rejected so
/// custom classes like `my-widget` never land in a spacing group.
fn is_scale_value(value: &str) -> bool {
    value.parse::<f64>().is_ok()
        || matches!(
            value,
            "px" | "auto" | "full" | "screen" | "min" | "max" | "fit" | "svw" | "svh" | "lvw"
                | "lvh" | "dvw" | "dvh"
        )
        || is_arbitrary(value)
        || is_paren_value(value)
}

fn scaled(value: &str, group: ClassGroup) -> Option<ClassGroup> {
    is_scale_value(value).then_some(group)
}

/// min-w/max-w style values: the spacing scale plus named widths.
fn sized(value: &str, group: ClassGroup) -> Option<ClassGroup> {
    (is_scale_value(value) || is_tshirt_size(value) || matches!(value, "none" | "prose"))
        .then_some(group)
}

fn is_align_content(value: &str) -> bool {
    matches!(
        value,
        "normal" | "center" | "start" | "end" | "between" | "around" | "evenly" | "baseline"
            | "stretch"
    )
}

fn is_font_weight(value: &str) -> bool {
    matches!(
        value,
        "thin" | "extralight" | "light" | "normal" | "medium" | "semibold" | "bold"
            | "extrabold" | "black"
    ) || is_arbitrary_labeled(value, "number")
}

fn is_font_stretch(value: &str) -> bool {
    matches!(
        value,
        "ultra-condensed" | "extra-condensed" | "condensed" | "semi-condensed"
            | "semi-expanded" | "expanded" | "extra-expanded" | "ultra-expanded"
    ) || value.strip_prefix("stretch-").is_some()
}

fn text_group(value: &str) -> ClassGroup {
    use ClassGroup::*;
    match value {
        "left" | "center" | "right" | "justify" | "start" | "end" => TextAlign,
        "ellipsis" | "clip" => TextOverflow,
        "wrap" | "nowrap" | "balance" | "pretty" => TextWrap,
        "base" => FontSize,
        _ if is_tshirt_size(value) => FontSize,
        _ if is_arbitrary(value) || is_paren_value(value) => {
            let inner = arbitrary_inner(value);
            match inner.split_once(':') {
                Some(("length" | "size" | "percentage" | "absolute-size" | "relative-size", _)) => {
                    FontSize
                }
                Some(_) => TextColor,
                None if looks_like_length(inner) => FontSize,
                None => TextColor,
            }
        }
        _ => TextColor,
    }
}

fn bg_group(value: &str) -> ClassGroup {
    use ClassGroup::*;
    match value {
        "fixed" | "local" | "scroll" => BgAttachment,
        "top" | "bottom" | "center" | "left" | "right" | "left-top" | "left-bottom"
        | "right-top" | "right-bottom" | "top-left" | "top-right" | "bottom-left"
        | "bottom-right" => BgPosition,
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            BgRepeat
        }
        "auto" | "cover" | "contain" => BgSize,
        "none" => BgImage,
        _ if value.starts_with("clip-") => BgClip,
        _ if value.starts_with("origin-") => BgOrigin,
        _ if value.starts_with("blend-") => BgBlend,
        _ if value.starts_with("gradient-") || value.starts_with("linear-")
            || value.starts_with("radial") || value.starts_with("conic") => BgImage,
        _ if is_arbitrary_labeled(value, "image") || is_arbitrary_labeled(value, "url") => BgImage,
        _ if is_arbitrary_labeled(value, "length") || is_arbitrary_labeled(value, "size")
            || is_arbitrary_labeled(value, "percentage") => BgSize,
        _ if is_arbitrary_labeled(value, "position") => BgPosition,
        _ => BgColor,
    }
}

fn rounded_group(value: &str) -> ClassGroup {
    use ClassGroup::*;
    // Side token with or without a size suffix ("rounded-r", "rounded-r-lg");
    // anything else is a size value for the all-corners group ("rounded-md").
    let side = value.split_once('-').map_or(value, |(side, _)| side);
    match side {
        "s" => RoundedS,
        "e" => RoundedE,
        "t" => RoundedT,
        "r" => RoundedR,
        "b" => RoundedB,
        "l" => RoundedL,
        "ss" => RoundedSs,
        "se" => RoundedSe,
        "ee" => RoundedEe,
        "es" => RoundedEs,
        "tl" => RoundedTl,
        "tr" => RoundedTr,
        "br" => RoundedBr,
        "bl" => RoundedBl,
        _ => Rounded,
    }
}

fn border_group(value: &str) -> Option<ClassGroup> {
    use ClassGroup::*;
    if matches!(value, "solid" | "dashed" | "dotted" | "double" | "hidden" | "none") {
        return Some(BorderStyle);
    }
    if let Some(rest) = value.strip_prefix("spacing-") {
        return Some(match rest.split_once('-') {
            Some(("x", _)) => BorderSpacingX,
            Some(("y", _)) => BorderSpacingY,
            _ => BorderSpacing,
        });
    }
    const SIDES: &[&str] = &["x", "y", "s", "e", "t", "r", "b", "l"];
    let (side, rest) = if SIDES.contains(&value) {
        (Some(value), None)
    } else {
        match value.split_once('-') {
            Some((side, rest)) if SIDES.contains(&side) => (Some(side), Some(rest)),
            _ => (None, Some(value)),
        }
    };
    // A bare side ("border-x") is a width; otherwise the value shape decides.
    let is_width = rest.is_none_or(is_width_value);
    Some(match (side, is_width) {
        (Some("x"), true) => BorderWX,
        (Some("y"), true) => BorderWY,
        (Some("s"), true) => BorderWS,
        (Some("e"), true) => BorderWE,
        (Some("t"), true) => BorderWT,
        (Some("r"), true) => BorderWR,
        (Some("b"), true) => BorderWB,
        (Some("l"), true) => BorderWL,
        (Some("x"), false) => BorderColorX,
        (Some("y"), false) => BorderColorY,
        (Some("s"), false) => BorderColorS,
        (Some("e"), false) => BorderColorE,
        (Some("t"), false) => BorderColorT,
        (Some("r"), false) => BorderColorR,
        (Some("b"), false) => BorderColorB,
        (Some("l"), false) => BorderColorL,
        (None, true) => BorderW,
        (None, false) => BorderColor,
        (Some(_), _) => unreachable!(),
    })
}

fn backdrop_group(value: &str) -> Option<ClassGroup> {
    use ClassGroup::*;
    let (kind, _) = match value.split_once('-') {
        Some((kind, rest)) => (kind, Some(rest)),
        None => (value, None),
    };
    match kind {
        "blur" => Some(BackdropBlur),
        "brightness" => Some(BackdropBrightness),
        "contrast" => Some(BackdropContrast),
        "grayscale" => Some(BackdropGrayscale),
        "hue" => Some(BackdropHueRotate),
        "invert" => Some(BackdropInvert),
        "opacity" => Some(BackdropOpacity),
        "saturate" => Some(BackdropSaturate),
        "sepia" => Some(BackdropSepia),
        _ => None,
    }
}

fn scroll_group(value: &str) -> Option<ClassGroup> {
    use ClassGroup::*;
    if matches!(value, "auto" | "smooth") {
        return Some(ScrollBehavior);
    }
    let (kind, _) = value.split_once('-')?;
    match kind {
        "m" => Some(ScrollM),
        "mx" => Some(ScrollMx),
        "my" => Some(ScrollMy),
        "ms" => Some(ScrollMs),
        "me" => Some(ScrollMe),
        "mt" => Some(ScrollMt),
        "mr" => Some(ScrollMr),
        "mb" => Some(ScrollMb),
        "ml" => Some(ScrollMl),
        "p" => Some(ScrollP),
        "px" => Some(ScrollPx),
        "py" => Some(ScrollPy),
        "ps" => Some(ScrollPs),
        "pe" => Some(ScrollPe),
        "pt" => Some(ScrollPt),
        "pr" => Some(ScrollPr),
        "pb" => Some(ScrollPb),
        "pl" => Some(ScrollPl),
        _ => None,
    }
}

/// t-shirt size values: `xs`, `sm`, `md`, `lg`, `xl`, `2xl` ... `9xl`.
fn is_tshirt_size(value: &str) -> bool {
    let rest = value.trim_start_matches(|c: char| c.is_ascii_digit());
    !rest.is_empty() && matches!(rest, "xs" | "sm" | "md" | "lg" | "xl")
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

fn is_paren_value(value: &str) -> bool {
    value.starts_with('(') && value.ends_with(')')
}

fn arbitrary_inner(value: &str) -> &str {
    if value.len() >= 2 && (is_arbitrary(value) || is_paren_value(value)) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn is_arbitrary_labeled(value: &str, label: &str) -> bool {
    (is_arbitrary(value) || is_paren_value(value))
        && arbitrary_inner(value)
            .split_once(':')
            .is_some_and(|(l, _)| l == label)
}

/// Plain numbers, fractions, and lengths with CSS units.
fn looks_like_length(value: &str) -> bool {
    if value.parse::<f64>().is_ok() {
        return true;
    }
    static UNITS: &[&str] = &[
        "px", "em", "rem", "ex", "ch", "vw", "vh", "vmin", "vmax", "cm", "mm", "in", "pt", "pc",
        "%", "svw", "svh", "lvw", "lvh", "dvw", "dvh",
    ];
    UNITS.iter().any(|unit| {
        value
            .strip_suffix(unit)
            .is_some_and(|n| !n.is_empty() && n.parse::<f64>().is_ok())
    })
}

fn is_length_value(value: &str) -> bool {
    value.parse::<f64>().is_ok()
        || matches!(value, "px" | "auto" | "full")
        || (is_arbitrary(value) && looks_like_length(arbitrary_inner(value)))
}

/// Values valid for width-flavored utilities (`ring-2`, `border-4`,
/// `stroke-1`, `outline-2`, `ring-[3px]`).
fn is_width_value(value: &str) -> bool {
    value.parse::<f64>().is_ok()
        || value == "px"
        || is_arbitrary_labeled(value, "length")
        || (is_arbitrary(value) && looks_like_length(arbitrary_inner(value)))
}
