//! Ordered composition of CSS class sources.
//!
//! Components assemble their `class` attribute from layered sources: base
//! classes, variant/size bundles, state-conditional bundles, and finally any
//! caller-supplied override. [`class_names`] flattens the layers in order and
//! resolves Tailwind conflicts through [`tailwind_merge::tw_merge`], so a
//! later source always wins against an earlier one in the same property
//! group. The [`classes!`] macro adds `"bundle" => condition` syntax for
//! state-conditional sources.

use tailwind_merge::tw_merge;

/// Join class sources in order, skipping blanks, then merge Tailwind
/// conflicts with last-wins semantics.
pub fn class_names<'a>(sources: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for source in sources {
        for token in source.split_whitespace() {
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(token);
        }
    }
    tw_merge(&joined)
}

/// Compose a class string from literal and conditional sources:
///
/// ```
/// use tailform::classes;
///
/// let has_icon = true;
/// let class = classes!["block w-full", "pl-10" => has_icon];
/// assert_eq!(class, "block w-full pl-10");
/// ```
///
/// Conditions are evaluated eagerly, in source order; entries whose
/// condition is false contribute nothing.
#[macro_export]
macro_rules! classes {
    ($($class:expr $(=> $cond:expr)?),* $(,)?) => {{
        let mut sources: ::std::vec::Vec<&str> = ::std::vec::Vec::new();
        $(
            if true $(&& $cond)? {
                sources.push($class);
            }
        )*
        $crate::class_names::class_names(sources)
    }};
}
