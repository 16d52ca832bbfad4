use dioxus::prelude::*;

use crate::app::layouts::Navbar;
use crate::config::NavbarConfig;
use crate::shared::hooks::use_scroll_progress;
use crate::shared::logging::log_scroll_progress;

/// Root component. Uses the config handed to the launcher, or the built-in
/// defaults when launched bare.
#[component]
pub fn App() -> Element {
    use_context_provider(|| try_consume_context::<NavbarConfig>().unwrap_or_default());

    use_effect(|| {
        tracing::info!("Navbar app initialized");
    });

    // Use asset!() macro so the bundled CSS is served with the app
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        Home {}
    }
}

/// Tall demo page so the header has room to collapse
#[component]
pub fn Home() -> Element {
    let scroll = use_scroll_progress();

    use_effect(move || {
        log_scroll_progress(&scroll());
    });

    rsx! {
        div { class: "c-page",
            Navbar {}
        }
    }
}
