//! Layout primitives: thin `<div>` wrappers carrying a base layout class.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;

/// Join a component's base class with caller-supplied extra classes.
#[must_use]
pub fn compose_class(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_owned()
    } else {
        format!("{base} {extra}")
    }
}

/// Flexbox row container with no preset alignment.
#[component]
pub fn Flex(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=compose_class("flex", &class)>{children()}</div> }
}

/// Horizontal stack.
#[component]
pub fn HStack(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=compose_class("hstack", &class)>{children()}</div> }
}

/// Vertical stack.
#[component]
pub fn VStack(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=compose_class("vstack", &class)>{children()}</div> }
}

/// Centers its children on both axes.
#[component]
pub fn Center(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=compose_class("center", &class)>{children()}</div> }
}
