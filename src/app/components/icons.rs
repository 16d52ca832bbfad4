//! Inline stroke icons for the header (24x24 grid, `currentColor`)

use dioxus::prelude::*;

#[component]
fn Icon(#[props(into, default)] class: String, children: Element) -> Element {
    rsx! {
        svg {
            class: "c-icon {class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[component]
pub fn SearchIcon(#[props(into, default)] class: String) -> Element {
    rsx! {
        Icon { class,
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

#[component]
pub fn BellIcon(#[props(into, default)] class: String) -> Element {
    rsx! {
        Icon { class,
            path { d: "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" }
            path { d: "M10.3 21a1.94 1.94 0 0 0 3.4 0" }
        }
    }
}

#[component]
pub fn GridIcon(#[props(into, default)] class: String) -> Element {
    rsx! {
        Icon { class,
            rect { x: "3", y: "3", width: "18", height: "18", rx: "2" }
            path { d: "M3 9h18" }
            path { d: "M3 15h18" }
            path { d: "M9 3v18" }
            path { d: "M15 3v18" }
        }
    }
}

#[component]
pub fn ChevronsUpDownIcon(#[props(into, default)] class: String) -> Element {
    rsx! {
        Icon { class,
            path { d: "m7 15 5 5 5-5" }
            path { d: "m7 9 5-5 5 5" }
        }
    }
}

/// Filled triangle brand mark
#[component]
pub fn LogoMark() -> Element {
    rsx! {
        svg {
            class: "c-logo__mark",
            view_box: "0 0 76 65",
            fill: "currentColor",
            path { d: "M37.5274 0L75.0548 65H0L37.5274 0Z" }
        }
    }
}
