use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Ghost,
    Outline,
}

#[derive(Clone, PartialEq)]
pub enum ButtonSize {
    Sm,
    Icon,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    size: Option<ButtonSize>,
    #[props(into, default)] class: String,
    aria_label: Option<String>,
    children: Element,
) -> Element {
    let variant_class = match variant.unwrap_or(ButtonVariant::Ghost) {
        ButtonVariant::Ghost => "c-button--ghost",
        ButtonVariant::Outline => "c-button--outline",
    };
    let size_class = match size.unwrap_or(ButtonSize::Sm) {
        ButtonSize::Sm => "c-button--sm",
        ButtonSize::Icon => "c-button--icon",
    };

    rsx! {
        button {
            r#type: "button",
            class: "c-button {variant_class} {size_class} {class}",
            aria_label,
            {children}
        }
    }
}
