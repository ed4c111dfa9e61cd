//! Login page: e-mail + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonType};
use crate::components::input::{Input, InputType};
use crate::components::layout::{Center, VStack};
use crate::net::types::PROFILE_ROUTE;
use crate::state::auth::AuthState;
use crate::util::validation::validate_login_form;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_form(&email.get_untracked(), &password.get_untracked()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&email_value, &password_value).await {
                Ok(user) => {
                    busy.set(false);
                    info.set(String::new());
                    auth.set(AuthState::signed_in(user));
                    navigate(PROFILE_ROUTE, NavigateOptions::default());
                }
                Err(e) => {
                    busy.set(false);
                    info.set(format!("Sign-in failed: {e}"));
                }
            }
        });
    };

    view! {
        <Center class="auth-page">
            <VStack class="auth-card">
                <div class="auth-card__header">
                    <h1 class="auth-card__brand">"MealDash"</h1>
                    <p class="auth-card__subtitle">"Login"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <VStack class="auth-form__fields">
                        <Input name="email" input_type=InputType::Email placeholder="E-Mail" value=email/>
                        <Input
                            name="password"
                            input_type=InputType::Password
                            placeholder="Password"
                            value=password
                        />
                    </VStack>
                    <Button button_type=ButtonType::Submit class="button--block" disabled=busy>
                        "Login"
                    </Button>
                </form>

                <Show when=move || !info.get().is_empty()>
                    <p class="form-message" role="alert">{move || info.get()}</p>
                </Show>

                <p class="auth-card__footer">
                    "New here? "
                    <A href="/register" attr:class="link">"Register"</A>
                </p>
            </VStack>
        </Center>
    }
}
