use crate::tw_merge;

#[test]
fn last_class_in_a_group_wins() {
    assert_eq!(tw_merge("text-red-500 text-blue-500"), "text-blue-500");
    assert_eq!(tw_merge("text-blue-500 text-red-500"), "text-red-500");
    assert_eq!(tw_merge("bg-red-500 bg-blue-500"), "bg-blue-500");
    assert_eq!(tw_merge("font-medium font-bold"), "font-bold");
}

#[test]
fn survivor_keeps_the_later_position() {
    assert_eq!(tw_merge("p-4 text-red-500 p-2"), "text-red-500 p-2");
    assert_eq!(tw_merge("block p-1 m-2 p-3"), "block m-2 p-3");
}

#[test]
fn non_conflicting_classes_are_preserved_in_order() {
    assert_eq!(tw_merge("p-4 text-red-500"), "p-4 text-red-500");
    assert_eq!(
        tw_merge("block w-full rounded-lg border-0"),
        "block w-full rounded-lg border-0"
    );
}

#[test]
fn modifiers_isolate_conflict_groups() {
    assert_eq!(
        tw_merge("hover:text-red-500 text-blue-500"),
        "hover:text-red-500 text-blue-500"
    );
    assert_eq!(
        tw_merge("hover:text-red-500 hover:text-blue-500"),
        "hover:text-blue-500"
    );
    assert_eq!(
        tw_merge("dark:bg-white/5 bg-transparent"),
        "dark:bg-white/5 bg-transparent"
    );
}

#[test]
fn modifier_order_is_insignificant() {
    assert_eq!(tw_merge("hover:focus:p-2 focus:hover:p-4"), "focus:hover:p-4");
    assert_eq!(tw_merge("dark:hover:m-1 hover:dark:m-2"), "hover:dark:m-2");
}

#[test]
fn pseudo_element_modifiers_are_order_sensitive() {
    // before:hover and hover:before target different elements
    assert_eq!(
        tw_merge("before:hover:text-red-500 hover:before:text-blue-500"),
        "before:hover:text-red-500 hover:before:text-blue-500"
    );
    assert_eq!(
        tw_merge("before:text-red-500 before:text-blue-500"),
        "before:text-blue-500"
    );
}

#[test]
fn unknown_classes_always_pass_through() {
    assert_eq!(tw_merge("custom-button p-2"), "custom-button p-2");
    assert_eq!(
        tw_merge("my-widget my-widget text-sm"),
        "my-widget my-widget text-sm"
    );
    assert_eq!(tw_merge("foo bar foo"), "foo bar foo");
}

#[test]
fn known_exact_duplicates_collapse() {
    assert_eq!(tw_merge("p-4 p-4"), "p-4");
    assert_eq!(tw_merge("text-sm block text-sm"), "block text-sm");
}

#[test]
fn merge_is_idempotent() {
    let inputs = [
        "p-4 px-2 text-red-500 hover:text-blue-500 custom",
        "h-8 rounded-md px-3 inline-flex items-center text-sm",
        "ring-1 ring-ring/10 focus:ring-focus-ring text-error",
    ];
    for input in inputs {
        let once = tw_merge(input);
        assert_eq!(tw_merge(&once), once, "input {input}");
    }
}

#[test]
fn empty_and_whitespace_inputs() {
    assert_eq!(tw_merge(""), "");
    assert_eq!(tw_merge("   "), "");
    assert_eq!(tw_merge("  p-2 "), "p-2");
    assert_eq!(tw_merge("p-2\n\ttext-sm"), "p-2 text-sm");
}

#[test]
fn axis_classes_override_side_classes() {
    assert_eq!(tw_merge("pl-4 px-2"), "px-2");
    assert_eq!(tw_merge("pr-4 pl-4 p-2"), "p-2");
    assert_eq!(tw_merge("mt-1 my-2"), "my-2");
    assert_eq!(tw_merge("ml-1 mr-1 mx-4"), "mx-4");
}

#[test]
fn side_classes_do_not_override_axis_classes() {
    assert_eq!(tw_merge("px-2 pl-4"), "px-2 pl-4");
    assert_eq!(tw_merge("m-2 mt-0"), "m-2 mt-0");
}

#[test]
fn size_overrides_width_and_height() {
    assert_eq!(tw_merge("w-4 h-4 size-5"), "size-5");
    assert_eq!(tw_merge("size-5 w-4"), "size-5 w-4");
}

#[test]
fn rounded_corner_hierarchy() {
    assert_eq!(tw_merge("rounded-r-lg rounded-none"), "rounded-none");
    assert_eq!(tw_merge("rounded-lg rounded-none rounded-r-lg"), "rounded-none rounded-r-lg");
    assert_eq!(tw_merge("rounded-tr-md rounded-r-lg"), "rounded-r-lg");
    assert_eq!(tw_merge("rounded rounded-full"), "rounded-full");
}

#[test]
fn ring_width_and_ring_color_are_distinct() {
    assert_eq!(tw_merge("ring-1 ring-ring/10"), "ring-1 ring-ring/10");
    assert_eq!(tw_merge("ring-ring/10 ring-error-ring"), "ring-error-ring");
    assert_eq!(tw_merge("ring-1 ring-2"), "ring-2");
    assert_eq!(tw_merge("ring-2 ring-[3px]"), "ring-[3px]");
}

#[test]
fn border_width_and_border_color_are_distinct() {
    assert_eq!(
        tw_merge("border-0 border-neutral-300"),
        "border-0 border-neutral-300"
    );
    assert_eq!(
        tw_merge("border-neutral-300 border-neutral-700"),
        "border-neutral-700"
    );
    assert_eq!(tw_merge("border border-2"), "border-2");
    assert_eq!(tw_merge("border-x-2 border-r-4"), "border-x-2 border-r-4");
    assert_eq!(tw_merge("border-r-4 border-x-2"), "border-x-2");
}

#[test]
fn font_size_and_text_color_are_distinct() {
    assert_eq!(tw_merge("text-base text-primary"), "text-base text-primary");
    assert_eq!(tw_merge("text-base text-sm"), "text-sm");
    assert_eq!(tw_merge("text-primary text-error"), "text-error");
}

#[test]
fn font_size_overrides_leading() {
    assert_eq!(tw_merge("leading-6 text-lg/7"), "text-lg/7");
    assert_eq!(tw_merge("text-lg/7 leading-6"), "text-lg/7 leading-6");
}

#[test]
fn shadow_size_and_shadow_color_are_distinct() {
    assert_eq!(tw_merge("shadow-xs shadow-none"), "shadow-none");
    assert_eq!(
        tw_merge("shadow-md shadow-red-500"),
        "shadow-md shadow-red-500"
    );
}

#[test]
fn opacity_postfix_stays_in_the_color_group() {
    assert_eq!(tw_merge("bg-primary hover:bg-primary/90"), "bg-primary hover:bg-primary/90");
    assert_eq!(tw_merge("bg-primary/90 bg-secondary/80"), "bg-secondary/80");
    assert_eq!(
        tw_merge("focus-visible:ring-ring/50 focus-visible:ring-destructive/20"),
        "focus-visible:ring-destructive/20"
    );
}

#[test]
fn arbitrary_values_conflict_within_their_group() {
    assert_eq!(tw_merge("m-[2px] m-[10px]"), "m-[10px]");
    assert_eq!(tw_merge("z-20 z-[99]"), "z-[99]");
    assert_eq!(tw_merge("my-[2px] m-[10rem]"), "m-[10rem]");
    assert_eq!(tw_merge("cursor-pointer cursor-[grab]"), "cursor-[grab]");
    assert_eq!(tw_merge("opacity-10 opacity-[0.025]"), "opacity-[0.025]");
}

#[test]
fn labeled_arbitrary_text_values_split_by_kind() {
    assert_eq!(
        tw_merge("text-[0.5px] text-[color:0]"),
        "text-[0.5px] text-[color:0]"
    );
    assert_eq!(tw_merge("text-sm text-[length:var(--s)]"), "text-[length:var(--s)]");
    assert_eq!(tw_merge("text-[0.5px] text-(--my-0)"), "text-[0.5px] text-(--my-0)");
}

#[test]
fn arbitrary_properties_conflict_by_property_name() {
    assert_eq!(
        tw_merge("[paint-order:markers] [paint-order:normal]"),
        "[paint-order:normal]"
    );
    assert_eq!(
        tw_merge("[paint-order:markers] [stroke-linecap:round]"),
        "[paint-order:markers] [stroke-linecap:round]"
    );
}

#[test]
fn important_classes_conflict_separately() {
    assert_eq!(tw_merge("![some:prop] [some:other]"), "![some:prop] [some:other]");
    assert_eq!(tw_merge("!p-2 p-4"), "!p-2 p-4");
    assert_eq!(tw_merge("!p-2 !p-4"), "!p-4");
    assert_eq!(tw_merge("p-2! p-4!"), "p-4!");
}

#[test]
fn arbitrary_variant_modifiers() {
    assert_eq!(tw_merge("[p]:underline [p]:line-through"), "[p]:line-through");
    assert_eq!(
        tw_merge("[&>*]:underline [&>*]:line-through"),
        "[&>*]:line-through"
    );
    assert_eq!(
        tw_merge("[&>*]:[color:red] [&>*]:[color:blue]"),
        "[&>*]:[color:blue]"
    );
}

#[test]
fn display_classes_share_one_group() {
    assert_eq!(tw_merge("block inline-flex"), "inline-flex");
    assert_eq!(tw_merge("flex hidden"), "hidden");
    assert_eq!(tw_merge("flex flex-1"), "flex flex-1");
}

#[test]
fn overflow_axis_hierarchy() {
    assert_eq!(tw_merge("overflow-x-auto overflow-x-hidden"), "overflow-x-hidden");
    assert_eq!(tw_merge("overflow-x-auto overflow-hidden"), "overflow-hidden");
    assert_eq!(tw_merge("overflow-hidden overflow-y-auto"), "overflow-hidden overflow-y-auto");
}

#[test]
fn inset_hierarchy() {
    assert_eq!(tw_merge("left-0 inset-x-2"), "inset-x-2");
    assert_eq!(tw_merge("top-1 bottom-1 inset-y-0"), "inset-y-0");
    assert_eq!(tw_merge("inset-y-0 left-0"), "inset-y-0 left-0");
}

#[test]
fn flex_shorthand_overrides_parts() {
    assert_eq!(tw_merge("grow shrink flex-1"), "flex-1");
    assert_eq!(tw_merge("basis-full basis-auto"), "basis-auto");
    assert_eq!(tw_merge("flex-1 grow-0"), "flex-1 grow-0");
}

#[test]
fn grid_span_and_position_conflict() {
    assert_eq!(tw_merge("col-span-2 col-auto"), "col-auto");
    assert_eq!(tw_merge("row-auto row-span-3"), "row-span-3");
    assert_eq!(tw_merge("grid-rows-[1fr,auto] grid-rows-2"), "grid-rows-2");
}

#[test]
fn component_error_state_scenario() {
    // The field components append their error bundle last; it must replace
    // the resting text/ring/placeholder colors but nothing else.
    let merged = tw_merge(
        "block w-full h-9 ring-1 text-primary ring-ring/10 placeholder:text-placeholder \
         focus:ring-focus-ring text-error ring-error-ring placeholder:text-error-placeholder \
         focus:ring-error-focus-ring",
    );
    assert_eq!(
        merged,
        "block w-full h-9 ring-1 text-error ring-error-ring \
         placeholder:text-error-placeholder focus:ring-error-focus-ring"
    );
}

#[test]
fn button_override_scenario() {
    let merged = tw_merge(
        "h-8 rounded-md px-3 text-sm font-medium bg-destructive text-destructive-foreground \
         custom-button",
    );
    assert_eq!(
        merged,
        "h-8 rounded-md px-3 text-sm font-medium bg-destructive text-destructive-foreground \
         custom-button"
    );
}
