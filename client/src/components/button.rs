//! Primary action button.
//!
//! DESIGN
//! ======
//! Variant and type are enums so pages cannot pass arbitrary strings; the
//! rendered class is `button button--{variant}` plus any extra class.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

use super::layout::compose_class;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    /// Outlined destructive action (logout).
    Danger,
}

impl ButtonVariant {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "button--primary",
            Self::Secondary => "button--secondary",
            Self::Danger => "button--danger",
        }
    }
}

/// HTML `type` attribute of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// Full class list for a button.
#[must_use]
pub fn button_class(variant: ButtonVariant, extra: &str) -> String {
    compose_class(&format!("button {}", variant.class()), extra)
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: Option<Signal<bool>>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=button_class(variant, &class)
            type=button_type.as_str()
            disabled=move || disabled.is_some_and(|d| d.get())
            on:click=move |ev: leptos::ev::MouseEvent| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
