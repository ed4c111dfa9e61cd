//! Controlled text input bound to an `RwSignal<String>`.

use leptos::prelude::*;

use super::layout::compose_class;

/// HTML `type` attribute of an [`Input`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
}

impl InputType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

#[component]
pub fn Input(
    #[prop(into)] name: String,
    value: RwSignal<String>,
    #[prop(optional)] input_type: InputType,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] autocomplete: Option<String>,
) -> impl IntoView {
    view! {
        <input
            class=compose_class("input", &class)
            type=input_type.as_str()
            name=name
            placeholder=placeholder
            autocomplete=autocomplete
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
