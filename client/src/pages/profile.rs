//! Profile page: avatar placeholder, account details and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route. Logout clears the server session, resets `AuthState` to
//! signed-out and returns to the root screen.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonVariant, button_class};
use crate::components::layout::{Flex, HStack};
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::auth::{LOGOUT_REDIRECT, install_unauth_redirect};

const EDIT_UNAVAILABLE_MESSAGE: &str = "Profile editing is not available yet.";

/// Initials shown inside the avatar circle.
fn avatar_initials(user: &User) -> String {
    let source = user
        .name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .or(user.email.as_deref())
        .unwrap_or_default();
    source
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let busy = RwSignal::new(false);
    let notice = RwSignal::new(String::new());
    let user = move || auth.get().user;

    let on_edit = Callback::new(move |_ev: leptos::ev::MouseEvent| {
        notice.set(EDIT_UNAVAILABLE_MESSAGE.to_owned());
    });

    let on_logout = move |_ev: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            busy.set(false);
            auth.set(AuthState::signed_out());
            navigate(LOGOUT_REDIRECT, NavigateOptions::default());
        });
    };

    view! {
        <Flex class="profile">
            <HStack class="profile__avatar-row">
                <div class="profile__avatar">{move || user().map(|u| avatar_initials(&u)).unwrap_or_default()}</div>
            </HStack>

            <p class="profile__email">{move || user().and_then(|u| u.email).unwrap_or_default()}</p>
            <Show when=move || user().is_some_and(|u| u.name.is_some() || u.user_type.is_some())>
                <p class="profile__meta">
                    {move || {
                        user()
                            .map(|u| {
                                let name = u.name.unwrap_or_default();
                                match u.user_type {
                                    Some(t) if name.is_empty() => t.to_string(),
                                    Some(t) => format!("{name} · {t}"),
                                    None => name,
                                }
                            })
                            .unwrap_or_default()
                    }}
                </p>
            </Show>

            <Button on_click=on_edit>"Edit Profile"</Button>
            <Show when=move || !notice.get().is_empty()>
                <p class="form-message">{move || notice.get()}</p>
            </Show>

            <HStack class="profile__footer">
                <button
                    class=button_class(ButtonVariant::Danger, "button--block")
                    type="button"
                    disabled=move || busy.get()
                    on:click=on_logout
                >
                    "Logout"
                </button>
            </HStack>
        </Flex>
    }
}
