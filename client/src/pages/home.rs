//! Root screen. Logout lands here.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::{Center, HStack, VStack};
use crate::net::types::PROFILE_ROUTE;
use crate::state::auth::AuthState;
use crate::util::auth::LOGIN_ROUTE;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.with(AuthState::is_authenticated);

    // Logout lands here; from now on guarded routes redirect again.
    Effect::new(move || {
        if auth.with_untracked(|state| state.signed_out) {
            auth.update(AuthState::finish_logout);
        }
    });

    view! {
        <Center class="home-page">
            <VStack class="home-page__hero">
                <h1 class="auth-card__brand">"MealDash"</h1>
                <p class="auth-card__subtitle">"Food, delivered."</p>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <HStack class="home-page__actions">
                                <A href="/register" attr:class="button button--primary">"Register"</A>
                                <A href=LOGIN_ROUTE attr:class="button button--secondary">"Login"</A>
                            </HStack>
                        }
                    }
                >
                    <HStack class="home-page__actions">
                        <A href=PROFILE_ROUTE attr:class="button button--primary">"Profile"</A>
                    </HStack>
                </Show>
            </VStack>
        </Center>
    }
}
