//! Register page: name, e-mail, password and user type.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates locally, then calls `/api/auth/signup`. A user without a session
//! must confirm their e-mail and goes to `/verify-email`; a user with a
//! session is stored in `AuthState` and goes to `/profile`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonType};
use crate::components::input::{Input, InputType};
use crate::components::layout::{Center, VStack};
use crate::net::types::{RegisterForm, SignUpResponse, User, UserType, next_route_after_sign_up};
use crate::state::auth::AuthState;
use crate::util::auth::LOGIN_ROUTE;
use crate::util::validation::validate_register_form;

const NO_ACCOUNT_MESSAGE: &str = "Sign-up did not return an account. Try again.";

/// The user to store in `AuthState` after sign-up, if the backend opened a
/// session right away.
fn session_user(response: &SignUpResponse) -> Option<User> {
    if response.session_active { response.user.clone() } else { None }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let user_type = RwSignal::new(UserType::default().as_str().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegisterForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            name: name.get_untracked(),
            user_type: user_type.get_untracked(),
        };
        if let Err(errors) = validate_register_form(&form) {
            info.set(errors.to_string());
            return;
        }
        busy.set(true);
        info.set("Creating account...".to_owned());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_up(&form).await {
                Ok(response) => {
                    busy.set(false);
                    if let Some(user) = session_user(&response) {
                        auth.set(AuthState::signed_in(user));
                    }
                    match next_route_after_sign_up(&response) {
                        Some(route) => {
                            info.set(String::new());
                            navigate(route, NavigateOptions::default());
                        }
                        None => info.set(NO_ACCOUNT_MESSAGE.to_owned()),
                    }
                }
                Err(e) => {
                    busy.set(false);
                    info.set(e);
                }
            }
        });
    };

    view! {
        <Center class="auth-page">
            <VStack class="auth-card">
                <div class="auth-card__header">
                    <h1 class="auth-card__brand">"MealDash"</h1>
                    <p class="auth-card__subtitle">"Register"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <VStack class="auth-form__fields">
                        <Input name="name" placeholder="Name" value=name/>
                        <Input
                            name="email"
                            input_type=InputType::Email
                            placeholder="E-Mail"
                            autocomplete="off"
                            value=email
                        />
                        <Input
                            name="password"
                            input_type=InputType::Password
                            placeholder="Password"
                            value=password
                        />
                        <select
                            class="input"
                            name="type"
                            prop:value=move || user_type.get()
                            on:change=move |ev| user_type.set(event_target_value(&ev))
                        >
                            {UserType::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </VStack>

                    <Button button_type=ButtonType::Submit class="button--block" disabled=busy>
                        "Register"
                    </Button>
                </form>

                <Show when=move || !info.get().is_empty()>
                    <p class="form-message" role="alert">{move || info.get()}</p>
                </Show>

                <p class="auth-card__footer">
                    "Already a user? "
                    <A href=LOGIN_ROUTE attr:class="link">"Login"</A>
                </p>
            </VStack>
        </Center>
    }
}
