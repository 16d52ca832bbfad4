use dioxus::prelude::*;

/// Round avatar; shows `fallback` until the image loads, and keeps it if the
/// image fails.
#[component]
pub fn Avatar(src: String, fallback: String, #[props(default)] alt: String) -> Element {
    let mut loaded = use_signal(|| false);
    let mut failed = use_signal(|| false);

    let image_class = if loaded() { "c-avatar__image" } else { "c-avatar__image c-avatar__image--hidden" };

    rsx! {
        span { class: "c-avatar",
            if !failed() {
                img {
                    class: "{image_class}",
                    src: "{src}",
                    alt: "{alt}",
                    onload: move |_| loaded.set(true),
                    onerror: move |_| {
                        tracing::debug!("Avatar image failed to load, using fallback");
                        failed.set(true);
                    },
                }
            }
            if !loaded() || failed() {
                span { class: "c-avatar__fallback", "{fallback}" }
            }
        }
    }
}
