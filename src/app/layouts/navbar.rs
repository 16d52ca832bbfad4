use dioxus::prelude::*;

use crate::app::components::{
    Avatar, BellIcon, Button, ButtonSize, ButtonVariant, ChevronsUpDownIcon, GridIcon, LogoMark,
    SearchInput,
};
use crate::config::NavbarConfig;
use crate::domain::models::NavItem;
use crate::domain::services::NavbarTransform;
use crate::shared::constants::{AVATAR_FALLBACK, AVATAR_URL, PLAN_BADGE, TEAM_NAME};
use crate::shared::hooks::{use_indicators, use_scroll_progress, use_spring};

/// Sticky header that collapses with scroll, with an animated item row.
#[component]
pub fn Navbar() -> Element {
    let config = use_context::<NavbarConfig>();
    let items = use_hook(|| NavItem::from_labels(&config.items));

    let scroll = use_scroll_progress();
    let collapse = config.collapse;
    let transform = use_memo(move || NavbarTransform::at(scroll().progress, &collapse));

    let mut indicators = use_indicators(items.len());

    let targets = indicators.targets;
    let active_left = use_memo(move || targets.read().active_geometry().map(|g| g.left));
    let active_width = use_memo(move || targets.read().active_geometry().map(|g| g.width));
    let hover_left = use_memo(move || targets.read().hover_geometry().map(|g| g.left));
    let hover_width = use_memo(move || targets.read().hover_geometry().map(|g| g.width));

    let spring = config.spring;
    let active_left = use_spring(active_left, spring);
    let active_width = use_spring(active_width, spring);
    let hover_left = use_spring(hover_left, spring);
    let hover_width = use_spring(hover_width, spring);

    let nav_style = transform().nav_style();
    let top_style = transform().top_style();
    let bottom_style = transform().bottom_style();

    let active_style = format!("left: {:.2}px; width: {:.2}px;", active_left(), active_width());
    let hover_style = format!(
        "left: {:.2}px; width: {:.2}px; opacity: {};",
        hover_left(),
        hover_width(),
        indicators.hover_opacity()
    );

    let item_rows: Vec<(usize, String, &'static str)> = items
        .iter()
        .map(|item| {
            let class = if indicators.is_active(item.index) {
                "c-navbar__item c-navbar__item--active"
            } else {
                "c-navbar__item"
            };
            (item.index, item.label.clone(), class)
        })
        .collect();

    rsx! {
        nav { class: "c-navbar", style: "{nav_style}",
            div { class: "c-navbar__top",
                div { class: "c-logo", LogoMark {} }

                div { class: "c-navbar__top-content", style: "{top_style}",
                    // Team / project switcher
                    div { class: "c-navbar__group",
                        span { class: "c-navbar__separator", "/" }
                        span { class: "c-team__dot" }
                        span { class: "c-team__name", "{TEAM_NAME}" }
                        span { class: "c-badge", "{PLAN_BADGE}" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            aria_label: "Switch project".to_string(),
                            ChevronsUpDownIcon {}
                        }
                    }

                    div { class: "c-navbar__group",
                        SearchInput { placeholder: "Find...", shortcut: "F" }

                        Button { variant: ButtonVariant::Outline, "Feedback" }

                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Icon,
                            class: "c-button--round c-notify",
                            aria_label: "Notifications".to_string(),
                            BellIcon {}
                            span { class: "c-notify__dot",
                                span { class: "c-notify__ping" }
                                span { class: "c-notify__core" }
                            }
                        }

                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Icon,
                            class: "c-button--round",
                            aria_label: "Apps".to_string(),
                            GridIcon {}
                        }

                        Avatar {
                            src: AVATAR_URL.to_string(),
                            fallback: AVATAR_FALLBACK.to_string(),
                            alt: "Account".to_string(),
                        }
                    }
                }
            }

            // Item row with indicators
            div {
                class: "c-navbar__items",
                style: "{bottom_style}",
                onmounted: move |evt| indicators.container_mounted(evt.data()),
                onresize: move |_| indicators.remeasure(),

                for (index, label, item_class) in item_rows.iter().cloned() {
                    button {
                        key: "{label}",
                        r#type: "button",
                        class: "{item_class}",
                        onmounted: move |evt| indicators.item_mounted(index, evt.data()),
                        onmouseenter: move |_| indicators.hover(index),
                        onmouseleave: move |_| indicators.leave(),
                        onclick: move |_| indicators.select(index),
                        "{label}"
                    }
                }

                div { class: "c-navbar__indicator c-navbar__indicator--active", style: "{active_style}" }
                div { class: "c-navbar__indicator c-navbar__indicator--hover", style: "{hover_style}" }
            }
        }
    }
}
