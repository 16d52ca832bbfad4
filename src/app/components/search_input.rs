use dioxus::prelude::*;

use crate::app::components::icons::SearchIcon;

/// Header search field with a keyboard hint
#[component]
pub fn SearchInput(
    #[props(into)] placeholder: String,
    #[props(into)] shortcut: String,
) -> Element {
    let mut query = use_signal(String::new);

    rsx! {
        div { class: "c-search",
            SearchIcon { class: "c-search__icon" }
            input {
                r#type: "text",
                class: "c-search__input",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |evt| query.set(evt.value()),
            }
            kbd { class: "c-search__kbd", "{shortcut}" }
        }
    }
}
