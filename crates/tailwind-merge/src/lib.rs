//! Merging of Tailwind CSS class lists with last-wins conflict resolution.
//!
//! [`tw_merge`] takes a whitespace-separated class string and removes classes
//! that are overridden by a later class targeting the same CSS property
//! group under the same modifiers, e.g. `"text-red-500 text-blue-500"`
//! merges to `"text-blue-500"` while `"hover:text-red-500 text-blue-500"`
//! keeps both. Classes outside the known utility vocabulary are passed
//! through untouched.
//!
//! The merge is a pure function over its input; it holds no global state and
//! can be called from any number of threads at once.

use std::collections::HashSet;

mod class_groups;

#[cfg(test)]
mod tests;

use class_groups::{ClassGroup, class_group_of};

/// Identity of the CSS property slot a class occupies. Two classes with the
/// same key are mutually exclusive in a merged list.
#[derive(Debug, PartialEq, Eq, Hash)]
struct ConflictKey {
    /// Important flag (`!`); important classes only conflict with each other
    important: bool,
    /// Normalized (sorted) modifier chain, e.g. `"focus:hover"`
    modifiers: String,
    group: ClassGroup,
}

/// A class split into modifier chain, important flag and conflict group.
#[derive(Debug)]
struct ParsedClass {
    important: bool,
    modifiers: String,
    group: ClassGroup,
}

/// Split `class` at top-level `:` separators. `[...]` and `(...)` protect
/// their contents, so `[&>*]:underline` has a single modifier `[&>*]`.
fn split_modifiers(class: &str) -> (Vec<&str>, &str) {
    let mut modifiers = Vec::new();
    let mut depth = 0u32;
    let mut start = 0;
    for (i, c) in class.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&class[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    (modifiers, &class[start..])
}

/// Drop a trailing `/postfix` (opacity shorthand, `text-lg/7` line height)
/// from a base class, respecting bracket nesting.
fn strip_postfix(base: &str) -> &str {
    let mut depth = 0u32;
    let mut slash = None;
    for (i, c) in base.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => slash = Some(i),
            _ => {}
        }
    }
    match slash {
        Some(0) | None => base,
        Some(i) => &base[..i],
    }
}

/// Parse one class. Returns None when the base class has no known group,
/// which means the class never participates in conflict resolution.
fn parse_class(class: &str) -> Option<ParsedClass> {
    let (modifiers, base_with_important) = split_modifiers(class);

    let (base, important) = if let Some(rest) = base_with_important.strip_prefix('!') {
        (rest, true)
    } else if let Some(rest) = base_with_important.strip_suffix('!') {
        (rest, true)
    } else {
        (base_with_important, false)
    };

    let group = class_group_of(strip_postfix(base))?;

    Some(ParsedClass {
        important,
        modifiers: normalize_modifiers(&modifiers),
        group,
    })
}

/// Modifiers that target pseudo-elements (or arbitrary variants) are
/// position-sensitive and must not be reordered past each other.
fn is_order_sensitive(modifier: &str) -> bool {
    modifier.starts_with('[')
        || matches!(
            modifier,
            "*" | "**"
                | "after"
                | "backdrop"
                | "before"
                | "details-content"
                | "file"
                | "first-letter"
                | "first-line"
                | "marker"
                | "placeholder"
                | "selection"
        )
}

/// Normalize a modifier chain for conflict detection: plain modifiers are
/// order-insensitive (`hover:focus:` equals `focus:hover:`) and get sorted,
/// but order-sensitive modifiers act as barriers that sorting cannot cross.
fn normalize_modifiers(modifiers: &[&str]) -> String {
    if modifiers.is_empty() {
        return String::new();
    }

    let mut normalized: Vec<&str> = Vec::with_capacity(modifiers.len());
    let mut segment_start = 0;
    for &modifier in modifiers {
        if is_order_sensitive(modifier) {
            normalized[segment_start..].sort_unstable();
            normalized.push(modifier);
            segment_start = normalized.len();
        } else {
            normalized.push(modifier);
        }
    }
    normalized[segment_start..].sort_unstable();

    normalized.join(":")
}

/// Groups whose presence also evicts earlier classes of related groups,
/// e.g. `m-4` overrides an earlier `mx-2`.
fn conflicting_groups(group: &ClassGroup) -> &'static [ClassGroup] {
    use ClassGroup::*;
    match group {
        Margin => &[
            MarginX, MarginY, MarginS, MarginE, MarginT, MarginR, MarginB, MarginL,
        ],
        MarginX => &[MarginR, MarginL],
        MarginY => &[MarginT, MarginB],

        Padding => &[
            PaddingX, PaddingY, PaddingS, PaddingE, PaddingT, PaddingR, PaddingB, PaddingL,
        ],
        PaddingX => &[PaddingR, PaddingL],
        PaddingY => &[PaddingT, PaddingB],

        Inset => &[InsetX, InsetY, Start, End, Top, Right, Bottom, Left],
        InsetX => &[Right, Left],
        InsetY => &[Top, Bottom],

        Overflow => &[OverflowX, OverflowY],
        Overscroll => &[OverscrollX, OverscrollY],
        BorderSpacing => &[BorderSpacingX, BorderSpacingY],

        Size => &[Width, Height],
        Gap => &[GapX, GapY],
        Flex => &[Basis, Grow, Shrink],

        BorderW => &[
            BorderWX, BorderWY, BorderWS, BorderWE, BorderWT, BorderWR, BorderWB, BorderWL,
        ],
        BorderWX => &[BorderWR, BorderWL],
        BorderWY => &[BorderWT, BorderWB],

        BorderColor => &[
            BorderColorX,
            BorderColorY,
            BorderColorS,
            BorderColorE,
            BorderColorT,
            BorderColorR,
            BorderColorB,
            BorderColorL,
        ],
        BorderColorX => &[BorderColorR, BorderColorL],
        BorderColorY => &[BorderColorT, BorderColorB],

        // text-lg/7 also sets the line height
        FontSize => &[Leading],

        FvnNormal => &[
            FvnOrdinal,
            FvnSlashedZero,
            FvnFigure,
            FvnSpacing,
            FvnFraction,
        ],
        FvnOrdinal | FvnSlashedZero | FvnFigure | FvnSpacing | FvnFraction => &[FvnNormal],

        Touch => &[TouchX, TouchY, TouchPz],
        TouchX | TouchY | TouchPz => &[Touch],

        LineClamp => &[Display, Overflow],

        ColSpan => &[Col],
        Col => &[ColSpan],
        RowSpan => &[Row],
        Row => &[RowSpan],

        Rounded => &[
            RoundedS, RoundedE, RoundedT, RoundedR, RoundedB, RoundedL, RoundedSs, RoundedSe,
            RoundedEe, RoundedEs, RoundedTl, RoundedTr, RoundedBr, RoundedBl,
        ],
        RoundedS => &[RoundedSs, RoundedEs],
        RoundedE => &[RoundedSe, RoundedEe],
        RoundedT => &[RoundedTl, RoundedTr],
        RoundedR => &[RoundedTr, RoundedBr],
        RoundedB => &[RoundedBr, RoundedBl],
        RoundedL => &[RoundedTl, RoundedBl],

        Translate => &[TranslateX, TranslateY, TranslateNone],
        TranslateNone => &[Translate, TranslateX, TranslateY, TranslateZ],

        ScrollM => &[
            ScrollMx, ScrollMy, ScrollMs, ScrollMe, ScrollMt, ScrollMr, ScrollMb, ScrollMl,
        ],
        ScrollMx => &[ScrollMr, ScrollMl],
        ScrollMy => &[ScrollMt, ScrollMb],

        ScrollP => &[
            ScrollPx, ScrollPy, ScrollPs, ScrollPe, ScrollPt, ScrollPr, ScrollPb, ScrollPl,
        ],
        ScrollPx => &[ScrollPr, ScrollPl],
        ScrollPy => &[ScrollPt, ScrollPb],

        _ => &[],
    }
}

/// Merge a whitespace-separated Tailwind class string.
///
/// Scans right to left so that for each conflict slot the rightmost class
/// wins and keeps its position; earlier classes in the same slot are
/// dropped. Unknown classes are kept unconditionally, duplicates included.
pub fn tw_merge(input: &str) -> String {
    let mut taken: HashSet<ConflictKey> = HashSet::new();
    let mut kept: Vec<&str> = Vec::new();

    for class in input.split_whitespace().rev() {
        let Some(parsed) = parse_class(class) else {
            kept.push(class);
            continue;
        };

        let key = ConflictKey {
            important: parsed.important,
            modifiers: parsed.modifiers,
            group: parsed.group,
        };
        if taken.contains(&key) {
            continue;
        }

        for conflict in conflicting_groups(&key.group) {
            taken.insert(ConflictKey {
                important: key.important,
                modifiers: key.modifiers.clone(),
                group: conflict.clone(),
            });
        }
        taken.insert(key);
        kept.push(class);
    }

    kept.reverse();
    kept.join(" ")
}
