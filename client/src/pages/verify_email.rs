//! Shown after a sign-up that still needs e-mail confirmation.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::{Center, VStack};
use crate::util::auth::LOGIN_ROUTE;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    view! {
        <Center class="auth-page">
            <VStack class="auth-card">
                <div class="auth-card__header">
                    <h1 class="auth-card__brand">"MealDash"</h1>
                    <p class="auth-card__subtitle">"Check your inbox"</p>
                </div>
                <p class="auth-card__body">
                    "We sent you a confirmation link. Open it to activate your account, then log in."
                </p>
                <p class="auth-card__footer">
                    <A href=LOGIN_ROUTE attr:class="link">"Go to login"</A>
                </p>
            </VStack>
        </Center>
    }
}
